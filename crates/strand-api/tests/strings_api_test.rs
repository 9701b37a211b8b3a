//! End-to-end tests for the string routes, driven in-process through the
//! router with `oneshot`.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use strand_api::config::ServerConfig;
use strand_api::{build_router, AppState};
use strand_store::MemoryStore;

fn app() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()));
    build_router(state, &ServerConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn seed(app: &Router, values: &[&str]) {
    for value in values {
        let (status, _) = post_json(app, json!({ "value": value })).await;
        assert_eq!(status, StatusCode::CREATED, "seeding {value:?}");
    }
}

// =============================================================================
// CREATE
// =============================================================================

#[tokio::test]
async fn test_create_returns_analyzed_record() {
    let app = app();
    let (status, body) = post_json(&app, json!({ "value": "  Racecar " })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["value"], "  Racecar ");
    assert_eq!(body["properties"]["length"], 7);
    assert_eq!(body["properties"]["is_palindrome"], true);
    assert_eq!(body["properties"]["word_count"], 1);
    assert_eq!(body["properties"]["uniq"], 5);
    assert_eq!(body["properties"]["character_frequency_map"]["r"], 1);
    assert_eq!(body["properties"]["character_frequency_map"]["R"], 1);
    assert_eq!(body["id"], body["properties"]["sha256_hash"]);
    assert!(body["created_at"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn test_create_duplicate_after_trim_conflicts() {
    let app = app();
    seed(&app, &["hello"]).await;

    let (status, body) = post_json(&app, json!({ "value": "  hello\n" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_rejects_non_string_value() {
    let app = app();

    let (status, body) = post_json(&app, json!({ "value": 42 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (status, _) = post_json(&app, json!({})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"value\": "))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =============================================================================
// GET / DELETE BY VALUE
// =============================================================================

#[tokio::test]
async fn test_get_by_value_ignores_surrounding_whitespace() {
    let app = app();
    seed(&app, &["hello world"]).await;

    let (status, body) = get(&app, "/strings/hello%20world").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "hello world");

    let (status, body) = get(&app, "/strings/%20hello%20world%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["properties"]["word_count"], 2);
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let app = app();
    let (status, body) = get(&app, "/strings/nothing-here").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "string not found");
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = app();
    seed(&app, &["ephemeral"]).await;

    let (status, body) = delete(&app, "/strings/ephemeral").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = get(&app, "/strings/ephemeral").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = delete(&app, "/strings/ephemeral").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_value_can_be_recreated() {
    let app = app();
    seed(&app, &["again"]).await;
    delete(&app, "/strings/again").await;

    let (status, _) = post_json(&app, json!({ "value": "again" })).await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// LIST WITH STRUCTURED FILTERS
// =============================================================================

#[tokio::test]
async fn test_list_empty_store_reports_no_filters() {
    let app = app();
    let (status, body) = get(&app, "/strings?is_palindrome=true&min_length=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["filters_applied"], json!({}));
}

#[tokio::test]
async fn test_list_without_filters_returns_everything() {
    let app = app();
    seed(&app, &["abc", "level", "two words"]).await;

    let (status, body) = get(&app, "/strings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);
    assert_eq!(body["filters_applied"], json!({}));
}

#[tokio::test]
async fn test_list_applies_every_filter_together() {
    let app = app();
    seed(&app, &["level", "noon", "abc", "madam im adam", "kayak"]).await;

    let (status, body) = get(
        &app,
        "/strings?is_palindrome=true&word_count=1&min_length=5&contains_character=K",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["value"], "kayak");
    assert_eq!(
        body["filters_applied"],
        json!({
            "is_palindrome": true,
            "word_count": 1,
            "min_length": 5,
            "contains_character": "K"
        })
    );
}

#[tokio::test]
async fn test_list_zero_matches_is_still_ok() {
    let app = app();
    seed(&app, &["abc"]).await;

    let (status, body) = get(&app, "/strings?min_length=50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["filters_applied"], json!({ "min_length": 50 }));
}

#[tokio::test]
async fn test_list_rejects_malformed_parameters() {
    let app = app();
    seed(&app, &["abc"]).await;

    for uri in [
        "/strings?is_palindrome=maybe",
        "/strings?min_length=three",
        "/strings?word_count=1.5",
        "/strings?contains_character=ab",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string(), "{uri}");
    }
}

// =============================================================================
// NATURAL LANGUAGE FILTERING
// =============================================================================

#[tokio::test]
async fn test_natural_language_single_word_palindromes() {
    let app = app();
    seed(&app, &["level", "noon", "step on no pets", "hello"]).await;

    let (status, body) = get(
        &app,
        "/strings/filter-by-natural-language?query=all%20single%20word%20palindromic%20strings",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["interpreted_query"],
        json!({
            "original": "all single word palindromic strings",
            "parsed_filters": { "is_palindrome": true, "word_count": 1 }
        })
    );
}

#[tokio::test]
async fn test_natural_language_longer_than_is_exclusive() {
    let app = app();
    seed(&app, &["abcdefghij", "abcdefghijk", "short"]).await;

    let (status, body) = get(
        &app,
        "/strings/filter-by-natural-language?query=strings+longer+than+10+characters",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["value"], "abcdefghijk");
    assert_eq!(body["interpreted_query"]["parsed_filters"]["min_length"], 11);
}

#[tokio::test]
async fn test_natural_language_missing_query_is_bad_request() {
    let app = app();
    seed(&app, &["abc"]).await;

    for uri in [
        "/strings/filter-by-natural-language",
        "/strings/filter-by-natural-language?query=",
        "/strings/filter-by-natural-language?query=%20%20",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Query is required", "{uri}");
    }
}

#[tokio::test]
async fn test_natural_language_unparseable_is_bad_request() {
    let app = app();
    seed(&app, &["abc"]).await;

    let (status, body) = get(
        &app,
        "/strings/filter-by-natural-language?query=show%20me%20everything",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unable to parse natural language query");
}

#[tokio::test]
async fn test_natural_language_no_match_is_not_found() {
    let app = app();
    seed(&app, &["hello"]).await;

    let (status, body) = get(
        &app,
        "/strings/filter-by-natural-language?query=palindromic%20strings",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No strings matched your query");
}

#[tokio::test]
async fn test_natural_language_is_not_shadowed_by_value_route() {
    let app = app();
    seed(&app, &["filter-by-natural-language"]).await;

    // The literal route takes priority over the value route
    let (status, body) = get(&app, "/strings/filter-by-natural-language").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Query is required");
}

// =============================================================================
// SERVICE ROUTES
// =============================================================================

#[tokio::test]
async fn test_root_and_health() {
    let app = app();
    seed(&app, &["one", "two"]).await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "String Analyzer API is running");

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["records"], 2);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}
