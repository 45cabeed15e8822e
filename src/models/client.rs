use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A client the agency does work for. Stored in the `clients` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Assigned by the datastore on insert; `None` until the record is persisted.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
}
