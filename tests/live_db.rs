//! End-to-end tests against a local MongoDB instance.
//!
//! Run with `cargo test --features mongo-tests` and a mongod listening on
//! localhost:27017. Each test uses its own database so they can run in
//! parallel.
#![cfg(feature = "mongo-tests")]

use juniper::Variables;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;

use projectmgmt::graphql::{schema, Context};

async fn context_for(test_db: &str) -> Context {
    let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
        .await
        .unwrap();
    let db = client.database(test_db);
    db.drop(None).await.unwrap();
    Context::new(&db)
}

async fn exec(context: &Context, query: &str) -> serde_json::Value {
    let (value, errors) = juniper::execute(query, None, &schema(), &Variables::new(), context)
        .await
        .expect("execution failed");
    assert!(errors.is_empty(), "unexpected field errors: {:?}", errors);
    serde_json::to_value(&value).unwrap()
}

async fn add_client(context: &Context) -> String {
    let result = exec(
        context,
        r#"mutation { addClient(name: "A", email: "a@x.com", phone: "1") { id } }"#,
    )
    .await;
    result["addClient"]["id"].as_str().unwrap().to_string()
}

#[rocket::async_test]
async fn add_client_returns_persisted_record() {
    let context = context_for("projectmgmt_test_add_client").await;

    let result = exec(
        &context,
        r#"mutation { addClient(name: "A", email: "a@x.com", phone: "1") { id name email phone } }"#,
    )
    .await;

    let client = &result["addClient"];
    assert!(!client["id"].as_str().unwrap().is_empty());
    assert_eq!(client["name"], "A");
    assert_eq!(client["email"], "a@x.com");
    assert_eq!(client["phone"], "1");

    let id = client["id"].as_str().unwrap();
    let fetched = exec(&context, &format!(r#"{{ client(id: "{}") {{ name }} }}"#, id)).await;
    assert_eq!(fetched["client"]["name"], "A");
}

#[rocket::async_test]
async fn add_project_defaults_status_and_resolves_client() {
    let context = context_for("projectmgmt_test_add_project").await;
    let client_id = add_client(&context).await;

    let result = exec(
        &context,
        &format!(
            r#"mutation {{ addProject(name: "P", description: "D", clientId: "{}") {{ id status }} }}"#,
            client_id
        ),
    )
    .await;

    let project_id = result["addProject"]["id"].as_str().unwrap().to_string();
    assert_eq!(result["addProject"]["status"], "new");

    // The stored label is the persistence-layer spelling.
    let oid = ObjectId::parse_str(&project_id).unwrap();
    let stored = context
        .projects
        .clone_with_type::<mongodb::bson::Document>()
        .find_one(doc! { "_id": oid }, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.get_str("status").unwrap(), "todo");

    let fetched = exec(
        &context,
        &format!(r#"{{ project(id: "{}") {{ client {{ name }} }} }}"#, project_id),
    )
    .await;
    assert_eq!(fetched["project"]["client"]["name"], "A");
}

#[rocket::async_test]
async fn dangling_client_reference_resolves_to_null() {
    let context = context_for("projectmgmt_test_dangling").await;
    let client_id = add_client(&context).await;

    let result = exec(
        &context,
        &format!(
            r#"mutation {{ addProject(name: "P", description: "D", clientId: "{}") {{ id }} }}"#,
            client_id
        ),
    )
    .await;
    let project_id = result["addProject"]["id"].as_str().unwrap().to_string();

    exec(
        &context,
        &format!(r#"mutation {{ deleteClient(id: "{}") {{ id }} }}"#, client_id),
    )
    .await;

    let fetched = exec(
        &context,
        &format!(r#"{{ project(id: "{}") {{ name client {{ name }} }} }}"#, project_id),
    )
    .await;
    assert_eq!(fetched["project"]["name"], "P");
    assert!(fetched["project"]["client"].is_null());
}

#[rocket::async_test]
async fn deleted_client_lookup_yields_null() {
    let context = context_for("projectmgmt_test_delete_client").await;
    let client_id = add_client(&context).await;

    let deleted = exec(
        &context,
        &format!(r#"mutation {{ deleteClient(id: "{}") {{ id name }} }}"#, client_id),
    )
    .await;
    assert_eq!(deleted["deleteClient"]["name"], "A");

    let fetched = exec(&context, &format!(r#"{{ client(id: "{}") {{ id }} }}"#, client_id)).await;
    assert!(fetched["client"].is_null());
}

#[rocket::async_test]
async fn update_project_preserves_unspecified_fields() {
    let context = context_for("projectmgmt_test_update").await;
    let client_id = add_client(&context).await;

    let result = exec(
        &context,
        &format!(
            r#"mutation {{ addProject(name: "P", description: "D", status: progress, clientId: "{}") {{ id }} }}"#,
            client_id
        ),
    )
    .await;
    let project_id = result["addProject"]["id"].as_str().unwrap().to_string();

    let updated = exec(
        &context,
        &format!(
            r#"mutation {{ updateProject(id: "{}", name: "P2") {{ name description status clientId }} }}"#,
            project_id
        ),
    )
    .await;

    let project = &updated["updateProject"];
    assert_eq!(project["name"], "P2");
    assert_eq!(project["description"], "D");
    assert_eq!(project["status"], "progress");
    assert_eq!(project["clientId"], client_id.as_str());
}

#[rocket::async_test]
async fn delete_project_removes_record() {
    let context = context_for("projectmgmt_test_delete_project").await;
    let client_id = add_client(&context).await;

    let result = exec(
        &context,
        &format!(
            r#"mutation {{ addProject(name: "P", description: "D", clientId: "{}") {{ id }} }}"#,
            client_id
        ),
    )
    .await;
    let project_id = result["addProject"]["id"].as_str().unwrap().to_string();

    exec(
        &context,
        &format!(r#"mutation {{ deleteProject(id: "{}") {{ id }} }}"#, project_id),
    )
    .await;

    let remaining = exec(&context, "{ projects { id } }").await;
    let ids: Vec<&str> = remaining["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert!(!ids.contains(&project_id.as_str()));
}

#[rocket::async_test]
async fn delete_of_absent_id_yields_null() {
    let context = context_for("projectmgmt_test_absent").await;

    let absent = ObjectId::new().to_hex();
    let result = exec(
        &context,
        &format!(r#"mutation {{ deleteProject(id: "{}") {{ id }} }}"#, absent),
    )
    .await;
    assert!(result["deleteProject"].is_null());
}
