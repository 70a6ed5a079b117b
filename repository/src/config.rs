use std::env;

use thiserror::Error;

const POSTS_TABLE: &str = "POSTS_TABLE";
const AUTHORS_TABLE: &str = "AUTHORS_TABLE";
const COMMENTS_TABLE: &str = "COMMENTS_TABLE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Table names, read once at cold start. A missing variable fails startup
/// instead of surfacing later as a store error.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub posts_table: String,
    pub authors_table: String,
    pub comments_table: String,
}

impl TableConfig {
    pub fn from_env() -> Result<TableConfig, ConfigError> {
        Ok(TableConfig {
            posts_table: required_var(POSTS_TABLE)?,
            authors_table: required_var(AUTHORS_TABLE)?,
            comments_table: required_var(COMMENTS_TABLE)?,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
