use aws_config::SdkConfig;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use model::author::Author;
use tracing::error;

use crate::error::RepositoryError;

pub struct AuthorRepository {
    client: Client,
    table_name: String,
}

impl AuthorRepository {
    pub fn new(shared_config: &SdkConfig, table_name: String) -> AuthorRepository {
        AuthorRepository {
            client: Client::new(shared_config),
            table_name,
        }
    }

    pub async fn scan(&self) -> Result<Vec<Author>, RepositoryError> {
        // `name` is a DynamoDB reserved word.
        let items: Result<Vec<_>, _> = self
            .client
            .scan()
            .table_name(&self.table_name)
            .projection_expression("id, #n")
            .expression_attribute_names("#n", "name")
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

        Ok(items.iter().map(Author::from_dynamo_item).collect())
    }

    /// An absent item is `NotFound`, not an empty-populated author.
    pub async fn get(&self, id: &str) -> Result<Author, RepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .projection_expression("id, #n")
            .expression_attribute_names("#n", "name")
            .send()
            .await
            .map_err(|err| {
                error!("get of author {} from {} failed: {}", id, self.table_name, err);
                aws_sdk_dynamodb::Error::from(err)
            })?;

        match output.item() {
            Some(item) => Ok(Author::from_dynamo_item(item)),
            None => Err(RepositoryError::NotFound {
                entity: "author",
                id: id.to_string(),
            }),
        }
    }
}
