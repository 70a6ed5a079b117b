pub mod author;
pub mod comment;
pub mod config;
pub mod error;
pub mod post;
pub mod store;
