//! End-to-end tests against a real server backed by PostgreSQL.
//!
//! Run with `cargo test -- --ignored` and `TEST_DATABASE_URL` pointing at a
//! reachable database.

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn docker_book_round_trip() {
    let app = TestApp::spawn().await.expect("Failed to spawn test app");

    let created = app
        .client
        .post(app.url("/items"))
        .json(&json!({"name": "Docker Book", "description": "Master Docker containers"}))
        .send()
        .await
        .expect("request failed");
    assert_eq!(created.status(), StatusCode::CREATED);
    let created: Value = created.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Docker Book");

    let fetched: Value = app
        .client
        .get(app.url("/items/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let deleted = app.client.delete(app.url("/items/1")).send().await.unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let missing = app.client.get(app.url("/items/1")).send().await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let again = app.client.delete(app.url("/items/1")).send().await.unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn partial_update_and_reset() {
    let app = TestApp::spawn().await.expect("Failed to spawn test app");

    for name in ["first", "second"] {
        app.client
            .post(app.url("/items"))
            .json(&json!({"name": name}))
            .send()
            .await
            .unwrap();
    }

    let updated: Value = app
        .client
        .put(app.url("/items/2"))
        .json(&json!({"description": "now described"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        updated,
        json!({"id": 2, "name": "second", "description": "now described"})
    );

    let listed: Value = app
        .client
        .get(app.url("/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[0]["name"], "first");

    let reset = app.client.post(app.url("/reset")).send().await.unwrap();
    assert_eq!(reset.status(), StatusCode::OK);

    let listed: Value = app
        .client
        .get(app.url("/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));

    let created: Value = app
        .client
        .post(app.url("/items"))
        .json(&json!({"name": "after reset"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], 1);

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn health_reports_connected_database() {
    let app = TestApp::spawn().await.expect("Failed to spawn test app");

    let response = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-served-by"));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(!body["hostname"].as_str().unwrap().is_empty());

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn validation_errors_do_not_touch_the_table() {
    let app = TestApp::spawn().await.expect("Failed to spawn test app");

    let response = app
        .client
        .post(app.url("/items"))
        .json(&json!({"description": "nameless"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let listed: Value = app
        .client
        .get(app.url("/items"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([]));

    app.cleanup().await;
}

#[tokio::test]
#[ignore] // Requires PostgreSQL
async fn nul_characters_are_rejected_before_reaching_the_database() {
    let app = TestApp::spawn().await.expect("Failed to spawn test app");

    let response = app
        .client
        .post(app.url("/items"))
        .json(&json!({"name": "bad\u{0}name"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation error");

    app.cleanup().await;
}
