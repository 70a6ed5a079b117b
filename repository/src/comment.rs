use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client;
use model::comment::Comment;
use tracing::error;

use crate::error::RepositoryError;

pub struct CommentRepository {
    client: Client,
    table_name: String,
}

impl CommentRepository {
    pub fn new(shared_config: &SdkConfig, table_name: String) -> CommentRepository {
        CommentRepository {
            client: Client::new(shared_config),
            table_name,
        }
    }

    pub async fn scan(&self) -> Result<Vec<Comment>, RepositoryError> {
        let items: Result<Vec<_>, _> = self
            .client
            .scan()
            .table_name(&self.table_name)
            .projection_expression("id, content, author")
            .consistent_read(true)
            .into_paginator()
            .items()
            .send()
            .collect()
            .await;

        let items = items.map_err(|err| {
            error!("scan of {} failed: {}", self.table_name, err);
            aws_sdk_dynamodb::Error::from(err)
        })?;

        Ok(items.iter().map(Comment::from_dynamo_item).collect())
    }
}
