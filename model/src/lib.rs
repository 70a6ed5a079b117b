use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

pub mod author;
pub mod comment;
pub mod post;

/// The tables are schema-less; a missing or non-string attribute reads as
/// an empty string.
pub(crate) fn string_attribute(item: &HashMap<String, AttributeValue>, name: &str) -> String {
    item.get(name)
        .and_then(|attr| attr.as_s().ok())
        .cloned()
        .unwrap_or_default()
}
