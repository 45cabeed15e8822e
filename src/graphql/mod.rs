pub mod mutation;
pub mod query;
mod types;

use juniper::EmptySubscription;
use mongodb::{Collection, Database};

use crate::models::{Client, Project};

pub use mutation::Mutation;
pub use query::Query;

/// Shared state handed to every resolver: one typed collection handle per
/// entity kind.
pub struct Context {
    pub clients: Collection<Client>,
    pub projects: Collection<Project>,
}

impl Context {
    pub fn new(db: &Database) -> Self {
        Self {
            clients: db.collection("clients"),
            projects: db.collection("projects"),
        }
    }
}

impl juniper::Context for Context {}

// A root schema consists of a query and a mutation.
// Request queries can be executed against a RootNode.
pub type Schema = juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Builds the process-wide schema. Constructed once at startup and managed
/// as immutable rocket state.
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
