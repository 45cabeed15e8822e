use juniper::{graphql_object, FieldResult, ID};
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::graphql::Context;
use crate::models::{Client, Project, ProjectStatus};

pub struct Mutation;

#[graphql_object(context = Context)]
impl Mutation {
    async fn add_client(
        name: String,
        email: String,
        phone: String,
        context: &Context,
    ) -> FieldResult<Client> {
        let mut client = Client {
            id: None,
            name,
            email,
            phone,
        };
        let inserted = context.clients.insert_one(&client, None).await?;
        client.id = inserted.inserted_id.as_object_id();
        Ok(client)
    }

    /// Removes a client. Projects referencing it are left in place; their
    /// `client` field resolves to null afterwards.
    async fn delete_client(id: ID, context: &Context) -> FieldResult<Option<Client>> {
        let id = ObjectId::parse_str(id.to_string())?;
        Ok(context
            .clients
            .find_one_and_delete(doc! { "_id": id }, None)
            .await?)
    }

    #[graphql(arguments(status(default = ProjectStatus::Todo)))]
    async fn add_project(
        name: String,
        description: String,
        status: ProjectStatus,
        client_id: ID,
        context: &Context,
    ) -> FieldResult<Project> {
        let client_id = ObjectId::parse_str(client_id.to_string())?;
        let mut project = Project {
            id: None,
            name,
            description,
            status,
            client_id,
        };
        let inserted = context.projects.insert_one(&project, None).await?;
        project.id = inserted.inserted_id.as_object_id();
        Ok(project)
    }

    async fn delete_project(id: ID, context: &Context) -> FieldResult<Option<Project>> {
        let id = ObjectId::parse_str(id.to_string())?;
        Ok(context
            .projects
            .find_one_and_delete(doc! { "_id": id }, None)
            .await?)
    }

    /// Partial update: only the supplied fields are written, everything
    /// else keeps its stored value. Returns the post-update record.
    async fn update_project(
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatus>,
        client_id: Option<ID>,
        context: &Context,
    ) -> FieldResult<Option<Project>> {
        let id = ObjectId::parse_str(id.to_string())?;

        let mut changes = Document::new();
        if let Some(name) = name {
            changes.insert("name", name);
        }
        if let Some(description) = description {
            changes.insert("description", description);
        }
        if let Some(status) = status {
            changes.insert("status", bson::to_bson(&status)?);
        }
        if let Some(client_id) = client_id {
            changes.insert("clientId", ObjectId::parse_str(client_id.to_string())?);
        }

        // An empty $set is rejected by the server, so a no-op update is
        // answered with the current record.
        if changes.is_empty() {
            return Ok(context.projects.find_one(doc! { "_id": id }, None).await?);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        Ok(context
            .projects
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": changes }, options)
            .await?)
    }
}
