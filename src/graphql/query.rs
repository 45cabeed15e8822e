use futures::stream::TryStreamExt;
use juniper::{graphql_object, FieldResult, ID};
use mongodb::bson::{doc, oid::ObjectId};

use crate::graphql::Context;
use crate::models::{Client, Project};

pub struct Query;

#[graphql_object(context = Context)]
impl Query {
    async fn projects(context: &Context) -> FieldResult<Vec<Project>> {
        let cursor = context.projects.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn project(id: Option<ID>, context: &Context) -> FieldResult<Option<Project>> {
        let id = match id {
            Some(id) => ObjectId::parse_str(id.to_string())?,
            None => return Ok(None),
        };
        Ok(context.projects.find_one(doc! { "_id": id }, None).await?)
    }

    async fn clients(context: &Context) -> FieldResult<Vec<Client>> {
        let cursor = context.clients.find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn client(id: Option<ID>, context: &Context) -> FieldResult<Option<Client>> {
        let id = match id {
            Some(id) => ObjectId::parse_str(id.to_string())?,
            None => return Ok(None),
        };
        Ok(context.clients.find_one(doc! { "_id": id }, None).await?)
    }
}
