use async_trait::async_trait;
use aws_config::SdkConfig;
use model::{author::Author, comment::Comment, post::Post};

use crate::author::AuthorRepository;
use crate::comment::CommentRepository;
use crate::config::TableConfig;
use crate::error::RepositoryError;
use crate::post::PostRepository;

/// The store capability the schema resolves against. Object-safe so tests
/// can swap in an in-memory implementation.
#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn posts(&self) -> Result<Vec<Post>, RepositoryError>;
    async fn authors(&self) -> Result<Vec<Author>, RepositoryError>;
    async fn author(&self, id: &str) -> Result<Author, RepositoryError>;
    async fn comments(&self) -> Result<Vec<Comment>, RepositoryError>;
    async fn create_post(&self, post: &Post) -> Result<(), RepositoryError>;
}

pub struct DynamoStore {
    posts: PostRepository,
    authors: AuthorRepository,
    comments: CommentRepository,
}

impl DynamoStore {
    pub fn new(shared_config: &SdkConfig, config: &TableConfig) -> DynamoStore {
        DynamoStore {
            posts: PostRepository::new(shared_config, config.posts_table.clone()),
            authors: AuthorRepository::new(shared_config, config.authors_table.clone()),
            comments: CommentRepository::new(shared_config, config.comments_table.clone()),
        }
    }
}

#[async_trait]
impl BlogStore for DynamoStore {
    async fn posts(&self) -> Result<Vec<Post>, RepositoryError> {
        self.posts.scan().await
    }

    async fn authors(&self) -> Result<Vec<Author>, RepositoryError> {
        self.authors.scan().await
    }

    async fn author(&self, id: &str) -> Result<Author, RepositoryError> {
        self.authors.get(id).await
    }

    async fn comments(&self) -> Result<Vec<Comment>, RepositoryError> {
        self.comments.scan().await
    }

    async fn create_post(&self, post: &Post) -> Result<(), RepositoryError> {
        self.posts.put(post).await
    }
}
