use thiserror::Error;

/// Failures at the store boundary. `NotFound` is distinguishable from a
/// store call that never completed.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("store call failed: {0}")]
    Store(#[from] aws_sdk_dynamodb::Error),
}
