mod common;

use common::TestApp;
use mongodb::bson::doc;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn register_then_get_user_returns_the_stored_fields() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/register-user", app.address))
        .json(&json!({
            "user_id": "u1",
            "user_name": "Asha",
            "password": "hunter2",
            "mobile": "555-0101"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "User registered");
    let inserted_id = body["insertedId"].as_str().expect("insertedId missing");
    assert_eq!(inserted_id.len(), 24); // ObjectId hex

    let response = client
        .get(format!("{}/users/u1", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["user_id"], "u1");
    assert_eq!(body["user_name"], "Asha");
    // Stored as received; nothing is hashed or redacted by this service.
    assert_eq!(body["password"], "hunter2");
    assert_eq!(body["mobile"], "555-0101");

    app.cleanup().await;
}

#[tokio::test]
async fn unknown_user_is_a_404_with_a_null_body() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/users/nobody", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, Value::Null);

    app.cleanup().await;
}

#[tokio::test]
async fn duplicate_registration_is_permitted() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let response = client
            .post(format!("{}/register-user", app.address))
            .json(&json!({
                "user_id": "dup",
                "user_name": "Twin",
                "password": "pw",
                "mobile": "555-0102"
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let count = app
        .db
        .users()
        .count_documents(doc! { "user_id": "dup" }, None)
        .await
        .unwrap();
    assert_eq!(count, 2);

    app.cleanup().await;
}

#[tokio::test]
async fn registration_accepts_a_partial_body() {
    let app = TestApp::spawn().await;
    let client = reqwest::Client::new();

    // No validation: a body with only a user_id is stored as-is.
    let response = client
        .post(format!("{}/register-user", app.address))
        .json(&json!({ "user_id": "sparse" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = app
        .db
        .users()
        .find_one(doc! { "user_id": "sparse" }, None)
        .await
        .unwrap()
        .expect("User not found in DB");
    assert_eq!(stored.user_id.as_deref(), Some("sparse"));
    assert!(stored.user_name.is_none());

    app.cleanup().await;
}
