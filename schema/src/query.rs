use std::sync::Arc;

use async_graphql::{Context, Object, Result};
use model::{author::Author, comment::Comment, post::Post};
use repository::store::BlogStore;

pub struct Query;

#[Object]
impl Query {
    /// List of posts in the blog.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        Ok(ctx.data_unchecked::<Arc<dyn BlogStore>>().posts().await?)
    }

    /// List of authors.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        Ok(ctx.data_unchecked::<Arc<dyn BlogStore>>().authors().await?)
    }

    /// Get an author by id. An unknown id is a field error.
    async fn author(&self, ctx: &Context<'_>, id: String) -> Result<Author> {
        Ok(ctx.data_unchecked::<Arc<dyn BlogStore>>().author(&id).await?)
    }

    /// List of comments.
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        Ok(ctx.data_unchecked::<Arc<dyn BlogStore>>().comments().await?)
    }
}
