use lambda_http::{http::header::CONTENT_TYPE, Body, Response};
use serde::Serialize;
use serde_json::json;

/// 200 with the serialized body. GraphQL-level errors still ride in a 200;
/// there is no mapping from execution errors to HTTP status codes.
pub fn ok<T>(body: T) -> Response<Body>
where
    T: Serialize,
{
    Response::builder()
        .status(200)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(json!(body).to_string()))
        .expect("failed to render response")
}

pub fn bad_request(body: String) -> Response<Body> {
    Response::builder()
        .status(400)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(body))
        .expect("failed to render response")
}

pub fn server_error(body: String) -> Response<Body> {
    Response::builder()
        .status(500)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(body))
        .expect("failed to render response")
}
