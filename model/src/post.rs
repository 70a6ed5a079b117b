use std::collections::HashMap;

use async_graphql::SimpleObject;
use aws_sdk_dynamodb::types::AttributeValue;
use maplit::hashmap;
use serde::{Deserialize, Serialize};

use crate::string_attribute;

/// A blog post. `author` holds an author id by convention; the reference is
/// not validated at write time.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    pub fn from_dynamo_item(item: &HashMap<String, AttributeValue>) -> Post {
        Post {
            id: string_attribute(item, "id"),
            title: string_attribute(item, "title"),
            content: string_attribute(item, "content"),
            author: string_attribute(item, "author"),
        }
    }

    pub fn to_dynamo_item(&self) -> HashMap<String, AttributeValue> {
        hashmap! {
            "id".to_string() => AttributeValue::S(self.id.clone()),
            "title".to_string() => AttributeValue::S(self.title.clone()),
            "content".to_string() => AttributeValue::S(self.content.clone()),
            "author".to_string() => AttributeValue::S(self.author.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_round_trip() {
        let post = Post {
            id: "7a6e".to_string(),
            title: "First post".to_string(),
            content: "Hello".to_string(),
            author: "a1".to_string(),
        };

        assert_eq!(Post::from_dynamo_item(&post.to_dynamo_item()), post);
    }

    #[test]
    fn missing_attributes_default_to_empty() {
        let item = hashmap! {
            "id".to_string() => AttributeValue::S("7a6e".to_string()),
        };

        let post = Post::from_dynamo_item(&item);
        assert_eq!(post.id, "7a6e");
        assert_eq!(post.title, "");
        assert_eq!(post.content, "");
        assert_eq!(post.author, "");
    }
}
