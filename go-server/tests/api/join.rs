use serde_json::Value;

use crate::common::TestServer;

/// First identity gets Black, second gets White.
#[tokio::test]
async fn seats_black_then_white() {
    let server = TestServer::start().await;

    assert_eq!(server.join_color("alice").await, "B");
    assert_eq!(server.join_color("bob").await, "W");
}

/// Joining twice with the same identity returns the same color.
#[tokio::test]
async fn join_is_idempotent() {
    let server = TestServer::start().await;

    assert_eq!(server.join_color("alice").await, "B");
    assert_eq!(server.join_color("alice").await, "B");
    assert_eq!(server.join_color("bob").await, "W");
    assert_eq!(server.join_color("bob").await, "W");
    assert_eq!(server.join_color("alice").await, "B");
}

/// A third distinct identity is refused with 409 and an explanation.
#[tokio::test]
async fn third_identity_gets_no_seat() {
    let server = TestServer::start().await;
    server.join_color("alice").await;
    server.join_color("bob").await;

    let resp = server.join("carol").await;
    assert_eq!(resp.status(), reqwest::StatusCode::CONFLICT);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "no seat available");

    // Still refused later; seats are never released.
    let resp = server.join("carol").await;
    assert_eq!(resp.status(), reqwest::StatusCode::CONFLICT);
}

#[tokio::test]
async fn blank_identity_is_rejected() {
    let server = TestServer::start().await;

    let resp = server.join("   ").await;
    assert_eq!(resp.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);

    // No seat was consumed.
    assert_eq!(server.join_color("alice").await, "B");
}
