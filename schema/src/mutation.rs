use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use model::post::Post;
use repository::store::BlogStore;
use tracing::info;
use uuid::Uuid;

pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a post with a generated id. The post is returned only once
    /// the write has gone through; a failed write is a field error.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post> {
        let post = Post {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            author,
        };

        ctx.data_unchecked::<Arc<dyn BlogStore>>()
            .create_post(&post)
            .await?;

        info!("created post {}", post.id);
        Ok(post)
    }
}
