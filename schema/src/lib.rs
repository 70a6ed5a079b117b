use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use repository::store::BlogStore;

mod mutation;
mod query;

pub use mutation::Mutation;
pub use query::Query;

pub type BlogSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the schema with the store injected as context data, so the
/// resolvers stay independent of the concrete store.
pub fn build_schema(store: Arc<dyn BlogStore>) -> BlogSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .finish()
}
