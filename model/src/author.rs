use std::collections::HashMap;

use async_graphql::SimpleObject;
use aws_sdk_dynamodb::types::AttributeValue;
use maplit::hashmap;
use serde::{Deserialize, Serialize};

use crate::string_attribute;

/// An author of a post or comment.
#[derive(SimpleObject, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn from_dynamo_item(item: &HashMap<String, AttributeValue>) -> Author {
        Author {
            id: string_attribute(item, "id"),
            name: string_attribute(item, "name"),
        }
    }

    pub fn to_dynamo_item(&self) -> HashMap<String, AttributeValue> {
        hashmap! {
            "id".to_string() => AttributeValue::S(self.id.clone()),
            "name".to_string() => AttributeValue::S(self.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_round_trip() {
        let author = Author {
            id: "a1".to_string(),
            name: "Ada".to_string(),
        };

        assert_eq!(Author::from_dynamo_item(&author.to_dynamo_item()), author);
    }

    #[test]
    fn non_string_attribute_reads_as_empty() {
        let item = hashmap! {
            "id".to_string() => AttributeValue::S("a1".to_string()),
            "name".to_string() => AttributeValue::N("42".to_string()),
        };

        assert_eq!(Author::from_dynamo_item(&item).name, "");
    }
}
