mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

const AUTH: &str = "Basic YWRtaW46c2VjcmV0";

#[tokio::test]
async fn test_save_with_alias() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/a", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], 1);
    assert_eq!(json["alias"], "ex1");
}

#[tokio::test]
async fn test_save_generates_alias_when_missing() {
    let pool = common::memory_pool().await;
    let state = common::create_test_state(pool.clone())
        .await
        .with_alias_generator(Arc::new(common::FixedAliasGenerator::new(&["Qx7p2M"])));
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/b" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["alias"], "Qx7p2M");
    assert_eq!(common::count_records(&pool, "Qx7p2M").await, 1);

    let redirect = server.get("/Qx7p2M").await;
    assert_eq!(redirect.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(redirect.header("location"), "https://example.com/b");
}

#[tokio::test]
async fn test_save_empty_alias_is_generated() {
    let state = common::create_test_state(common::memory_pool().await)
        .await
        .with_alias_generator(Arc::new(common::FixedAliasGenerator::new(&["AbC123"])));
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/b", "alias": "" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["alias"], "AbC123");
}

#[tokio::test]
async fn test_save_random_alias_shape() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/c" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 6);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_save_duplicate_alias_conflict() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/a", "alias": "ex1" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/a", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["details"]["alias"], "ex1");
}

#[tokio::test]
async fn test_save_generated_collision_is_not_retried() {
    let pool = common::memory_pool().await;
    common::create_test_registry(pool.clone()).await;
    common::insert_record(&pool, "taken1", "https://example.com/first").await;

    let state = common::create_test_state(pool.clone())
        .await
        .with_alias_generator(Arc::new(common::FixedAliasGenerator::new(&[
            "taken1", "free22",
        ])));
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/second" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(common::count_records(&pool, "free22").await, 0);
}

#[tokio::test]
async fn test_save_invalid_url() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["url"].is_array());
}

#[tokio::test]
async fn test_save_empty_url() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "", "alias": "ex1" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_save_malformed_body() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .add_header("Content-Type", "application/json")
        .text("{not json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_save_requires_credentials() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/a", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("www-authenticate"));
}

#[tokio::test]
async fn test_save_rejects_wrong_password() {
    let pool = common::memory_pool().await;
    let state = common::create_test_state(pool.clone()).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", "Basic YWRtaW46d3Jvbmc=")
        .json(&json!({ "url": "https://example.com/a", "alias": "ex1" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(common::count_records(&pool, "ex1").await, 0);
}

#[tokio::test]
async fn test_save_trailing_slash() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url/")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/a", "alias": "slash" }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let state = common::create_test_state(common::memory_pool().await).await;
    let server = common::create_test_server(state);

    let response = server
        .post("/url")
        .add_header("Authorization", AUTH)
        .json(&json!({ "url": "https://example.com/a", "alias": "rid" }))
        .await;

    assert!(response.headers().contains_key("x-request-id"));

    let echoed = server
        .get("/rid")
        .add_header("x-request-id", "req-42")
        .await;
    assert_eq!(echoed.header("x-request-id"), "req-42");
}
