use juniper::GraphQLEnum;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Workflow state of a project.
///
/// The GraphQL tokens (`new`, `progress`, `done`) are the API-facing names;
/// the serde renames are the labels stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, GraphQLEnum, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[graphql(name = "new")]
    #[serde(rename = "todo")]
    Todo,
    #[graphql(name = "progress")]
    #[serde(rename = "inProgress")]
    InProgress,
    #[graphql(name = "done")]
    #[serde(rename = "Completed")]
    Completed,
}

/// A project carried out for a single client. Stored in the `projects`
/// collection.
///
/// `client_id` is a weak reference: deleting a client does not cascade, so
/// the referenced document may no longer exist when the project is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub client_id: ObjectId,
}
