use std::collections::HashMap;

use async_graphql::SimpleObject;
use aws_sdk_dynamodb::types::AttributeValue;
use maplit::hashmap;
use serde::{Deserialize, Serialize};

use crate::string_attribute;

/// A comment on a post. `author` is an author id, same convention as
/// [`crate::post::Post`].
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: String,
}

impl Comment {
    pub fn from_dynamo_item(item: &HashMap<String, AttributeValue>) -> Comment {
        Comment {
            id: string_attribute(item, "id"),
            content: string_attribute(item, "content"),
            author: string_attribute(item, "author"),
        }
    }

    pub fn to_dynamo_item(&self) -> HashMap<String, AttributeValue> {
        hashmap! {
            "id".to_string() => AttributeValue::S(self.id.clone()),
            "content".to_string() => AttributeValue::S(self.content.clone()),
            "author".to_string() => AttributeValue::S(self.author.clone()),
        }
    }
}
