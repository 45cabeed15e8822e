use juniper::{graphql_object, FieldResult, ID};
use mongodb::bson::doc;

use crate::graphql::Context;
use crate::models::{Client, Project, ProjectStatus};

#[graphql_object(context = Context)]
impl Client {
    fn id(&self) -> Option<ID> {
        self.id.map(|id| ID::from(id.to_hex()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn phone(&self) -> &str {
        &self.phone
    }
}

#[graphql_object(context = Context)]
impl Project {
    fn id(&self) -> Option<ID> {
        self.id.map(|id| ID::from(id.to_hex()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn status(&self) -> ProjectStatus {
        self.status
    }

    fn client_id(&self) -> ID {
        ID::from(self.client_id.to_hex())
    }

    /// The client this project belongs to, looked up by the stored foreign
    /// id. Null when the referenced client no longer exists.
    async fn client(&self, context: &Context) -> FieldResult<Option<Client>> {
        Ok(context
            .clients
            .find_one(doc! { "_id": self.client_id }, None)
            .await?)
    }
}
