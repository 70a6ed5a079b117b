use std::sync::Arc;

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use repository::config::TableConfig;
use repository::store::{BlogStore, DynamoStore};
use response::{bad_request, ok};
use schema::{build_schema, BlogSchema};
use serde_json::{json, Value};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // required to enable CloudWatch error logging by the runtime
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let table_config = TableConfig::from_env()?;
    let shared_config = aws_config::load_from_env().await;
    let store: Arc<dyn BlogStore> = Arc::new(DynamoStore::new(&shared_config, &table_config));
    let schema_ref = &build_schema(store);

    run(service_fn(move |event: Request| handle(schema_ref, event))).await?;
    Ok(())
}

async fn handle(schema: &BlogSchema, event: Request) -> Result<Response<Body>, Error> {
    match extract_query(event.body().as_ref()) {
        Some(query) => Ok(ok(schema.execute(query).await)),
        None => Ok(bad_request(
            json!({ "message": "expected a GraphQL query in the request body" }).to_string(),
        )),
    }
}

/// The body carries either a raw query string or a JSON object with the
/// query under a `query` key.
fn extract_query(body: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(body).ok()?;
    if text.trim().is_empty() {
        return None;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str(text) {
        if let Some(Value::String(query)) = map.get("query") {
            return Some(query.clone());
        }
    }

    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::extract_query;

    #[test]
    fn raw_query_passes_through_unchanged() {
        let body = "{ posts { id title } }";
        assert_eq!(extract_query(body.as_bytes()).as_deref(), Some(body));
    }

    #[test]
    fn json_body_yields_the_inner_query() {
        let body = r#"{"query": "{ posts { id title } }"}"#;
        assert_eq!(
            extract_query(body.as_bytes()).as_deref(),
            Some("{ posts { id title } }")
        );
    }

    #[test]
    fn json_body_without_query_key_is_taken_as_raw() {
        let body = r#"{"operationName": "Posts"}"#;
        assert_eq!(extract_query(body.as_bytes()).as_deref(), Some(body));
    }

    #[test]
    fn empty_body_is_rejected() {
        assert_eq!(extract_query(b""), None);
        assert_eq!(extract_query(b"   "), None);
    }

    #[test]
    fn non_utf8_body_is_rejected() {
        assert_eq!(extract_query(&[0xff, 0xfe]), None);
    }
}
