//! Sequence game API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::fixtures;
use common::TestContext;

const VERSE: &str = "Porque de tal manera amó Dios al mundo";

fn chunk_texts(body: &Value) -> Vec<String> {
    body["chunks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap().to_string())
        .collect()
}

fn order(body: &Value) -> Vec<u64> {
    body["shuffled_order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i.as_u64().unwrap())
        .collect()
}

/// Chunks use the configured size and come back shuffled.
#[tokio::test]
async fn test_chunks_default_size() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/sequence/chunks")
        .json(&fixtures::chunks_request(VERSE, None, 42))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(
        chunk_texts(&body),
        vec!["Porque de tal", "manera amó Dios", "al mundo"]
    );
    assert_eq!(body["chunks"][2]["word_count"], 2);

    let shuffled = order(&body);
    assert_ne!(shuffled, vec![0, 1, 2]);
    let mut sorted = shuffled.clone();
    sorted.sort();
    assert_eq!(sorted, vec![0, 1, 2]);
}

/// The same seed gives the same shuffle.
#[tokio::test]
async fn test_chunks_seed_is_reproducible() {
    let server = TestContext::new().server();
    let request = fixtures::chunks_request(fixtures::JOHN_3_16, None, 7);

    let first: Value = server.post("/api/sequence/chunks").json(&request).await.json();
    let second: Value = server.post("/api/sequence/chunks").json(&request).await.json();

    assert_eq!(order(&first), order(&second));
    assert_eq!(chunk_texts(&first), chunk_texts(&second));
}

/// A per-request chunk size overrides the server setting.
#[tokio::test]
async fn test_chunks_custom_size() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/sequence/chunks")
        .json(&fixtures::chunks_request(VERSE, Some(4), 1))
        .await;

    let body: Value = response.json();
    assert_eq!(
        chunk_texts(&body),
        vec!["Porque de tal manera", "amó Dios al mundo"]
    );
}

/// Empty text gives no chunks.
#[tokio::test]
async fn test_chunks_empty_text() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/sequence/chunks")
        .json(&fixtures::chunks_request("", None, 1))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["chunks"], json!([]));
    assert_eq!(body["shuffled_order"], json!([]));
}

/// Two distinct chunks are always shown swapped, so the picks are known.
#[tokio::test]
async fn test_replay_with_a_mistake() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/sequence/replay")
        .json(&json!({
            "text": "gracia y paz a vosotros",
            "words_per_chunk": 2,
            "seed": 3,
            "picks": [0, 1, 0],
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["placements"], json!(["incorrect", "correct", "complete"]));
    assert_eq!(body["complete"], true);
    assert_eq!(body["mistakes"], 1);
    assert_eq!(body["accuracy"], 67);
}

/// Placing after the game is over is a conflict.
#[tokio::test]
async fn test_replay_past_completion() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/sequence/replay")
        .json(&json!({
            "text": "gracia y paz a vosotros",
            "words_per_chunk": 2,
            "picks": [1, 0, 0],
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "conflict");
}

/// Picks outside the pool are rejected.
#[tokio::test]
async fn test_replay_unknown_pick() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/sequence/replay")
        .json(&json!({ "text": VERSE, "picks": [5] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Bad request: unknown chunk at pool index 5");
}
