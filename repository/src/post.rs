use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client;
use model::post::Post;
use tracing::error;

use crate::error::RepositoryError;

pub struct PostRepository {
    client: Client,
    table_name: String,
}

impl PostRepository {
    pub fn new(shared_config: &SdkConfig, table_name: String) -> PostRepository {
        PostRepository {
            client: Client::new(shared_config),
            table_name,
        }
    }

    /// Drains every scan page before returning. The projection is fixed to
    /// the post attributes.
    pub async fn scan(&self) -> Result<Vec<Post>, RepositoryError> {
        let items: Result<Vec<_>, _> = self
            .client
            .scan()
            .table_name(&self.table_name)
            .projection_expression("id, title, content, author")
            .into_paginator()
            .items()
            .send()
            .collect()
            .await;

        let items = items.map_err(|err| {
            error!("scan of {} failed: {}", self.table_name, err);
            aws_sdk_dynamodb::Error::from(err)
        })?;

        Ok(items.iter().map(Post::from_dynamo_item).collect())
    }

    pub async fn put(&self, post: &Post) -> Result<(), RepositoryError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(post.to_dynamo_item()))
            .send()
            .await
            .map_err(|err| {
                error!("put of post {} into {} failed: {}", post.id, self.table_name, err);
                aws_sdk_dynamodb::Error::from(err)
            })?;
        Ok(())
    }
}
