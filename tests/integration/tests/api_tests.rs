//! API Integration Tests
//!
//! Each test spawns the real server on an ephemeral port, backed by the
//! in-memory store, and talks to it over HTTP.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::{Duration, Instant};

use integration_tests::{
    assert_error, assert_json, assert_status, fast_sweep_config, fixtures::*, TestServer,
};
use reqwest::StatusCode;

async fn register(server: &TestServer, name: &str) {
    let response = server
        .post("/participants", &CreateParticipantRequest::new(name))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

async fn participants(server: &TestServer) -> Vec<ParticipantResponse> {
    let response = server.get("/participants").await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn messages_for(server: &TestServer, user: &str, query: &str) -> Vec<MessageResponse> {
    let response = server
        .get_as(Some(user), &format!("/messages{query}"))
        .await
        .unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Participant Tests
// ============================================================================

#[tokio::test]
async fn test_register_participant() {
    let server = TestServer::start().await.unwrap();
    let name = unique_name();

    let response = server
        .post("/participants", &CreateParticipantRequest::new(format!("  {name} ")))
        .await
        .unwrap();
    let created: ParticipantResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.name, name);

    let listed = participants(&server).await;
    assert_eq!(listed.iter().filter(|p| p.name == name).count(), 1);
    assert_eq!(listed[0].last_status, created.last_status);

    // Join announcement is visible to everyone
    let log = messages_for(&server, "someoneelse", "").await;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].from, name);
    assert_eq!(log[0].to, "Todos");
    assert_eq!(log[0].text, "entra na sala...");
    assert_eq!(log[0].kind, "status");
}

#[tokio::test]
async fn test_register_duplicate_name() {
    let server = TestServer::start().await.unwrap();
    let request = CreateParticipantRequest::unique();

    server.post("/participants", &request).await.unwrap();
    let response = server.post("/participants", &request).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "NAME_ALREADY_EXISTS");

    assert_eq!(participants(&server).await.len(), 1);
}

#[tokio::test]
async fn test_register_invalid_name() {
    let server = TestServer::start().await.unwrap();

    for name in ["", "   ", "two words", "semi;colon"] {
        let response = server
            .post("/participants", &CreateParticipantRequest::new(name))
            .await
            .unwrap();
        assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
    }

    let response = server
        .post("/participants", &serde_json::json!({"nome": "x"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert!(participants(&server).await.is_empty());
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_post_public_message() {
    let server = TestServer::start().await.unwrap();
    register(&server, "alice").await;

    let response = server
        .post_as(Some("alice"), "/messages", &CreateMessageRequest::public("hi"))
        .await
        .unwrap();
    let sent: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(sent.time.len(), 8);

    let for_bob = messages_for(&server, "bob", "").await;
    assert!(for_bob.contains(&sent));
}

#[tokio::test]
async fn test_private_message_visibility() {
    let server = TestServer::start().await.unwrap();
    register(&server, "alice").await;
    register(&server, "bob").await;

    let response = server
        .post_as(Some("alice"), "/messages", &CreateMessageRequest::private("bob", "psst"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let has_psst = |log: &[MessageResponse]| log.iter().any(|m| m.text == "psst");
    assert!(has_psst(&messages_for(&server, "alice", "").await));
    assert!(has_psst(&messages_for(&server, "bob", "").await));
    assert!(!has_psst(&messages_for(&server, "carol", "").await));
}

#[tokio::test]
async fn test_message_limit() {
    let server = TestServer::start().await.unwrap();
    register(&server, "alice").await;
    for text in ["one", "two", "three"] {
        server
            .post_as(Some("alice"), "/messages", &CreateMessageRequest::public(text))
            .await
            .unwrap();
    }

    let latest = messages_for(&server, "bob", "?limit=2").await;
    let texts: Vec<_> = latest.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["two", "three"]);

    for bad in ["0", "-2", "many"] {
        let response = server
            .get_as(Some("bob"), &format!("/messages?limit={bad}"))
            .await
            .unwrap();
        assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_message_requires_user_header() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/messages", &CreateMessageRequest::public("hi"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(code, "MISSING_USER");

    let response = server.get("/messages").await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_message_from_unknown_sender() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_as(Some("ghost"), "/messages", &CreateMessageRequest::public("boo"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(code, "UNKNOWN_SENDER");

    assert!(messages_for(&server, "ghost", "").await.is_empty());
}

#[tokio::test]
async fn test_message_invalid_body() {
    let server = TestServer::start().await.unwrap();
    register(&server, "alice").await;

    let cases = [
        serde_json::json!({"to": "", "text": "hi", "type": "message"}),
        serde_json::json!({"to": "Todos", "text": "  ", "type": "message"}),
        serde_json::json!({"to": "Todos", "text": "hi", "type": "status"}),
        serde_json::json!({"to": "Todos", "text": "hi", "type": "shout"}),
        serde_json::json!({"to": "Todos", "text": "hi"}),
    ];
    for body in &cases {
        let response = server.post_as(Some("alice"), "/messages", body).await.unwrap();
        assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
    }

    // Only the join message
    assert_eq!(messages_for(&server, "alice", "").await.len(), 1);
}

// ============================================================================
// Presence Tests
// ============================================================================

#[tokio::test]
async fn test_heartbeat() {
    let server = TestServer::start().await.unwrap();
    register(&server, "alice").await;

    let response = server.heartbeat(Some("alice")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.heartbeat(Some("ghost")).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_PARTICIPANT");

    let response = server.heartbeat(None).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_idle_participant_is_evicted() {
    let server = TestServer::start_with_config(fast_sweep_config())
        .await
        .unwrap();
    register(&server, "sleepy").await;

    let deadline = Instant::now() + Duration::from_secs(10);
    while !participants(&server).await.is_empty() {
        assert!(Instant::now() < deadline, "participant was never evicted");
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    let log = messages_for(&server, "observer", "").await;
    let leave = log.last().unwrap();
    assert_eq!(leave.from, "sleepy");
    assert_eq!(leave.text, "sai da sala...");
    assert_eq!(leave.kind, "status");
}

#[tokio::test]
async fn test_heartbeat_keeps_participant() {
    let mut config = fast_sweep_config();
    config.presence.inactive_limit_secs = 3;
    let server = TestServer::start_with_config(config).await.unwrap();
    register(&server, "awake").await;

    for _ in 0..8 {
        tokio::time::sleep(Duration::from_millis(500)).await;
        let response = server.heartbeat(Some("awake")).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    assert_eq!(participants(&server).await.len(), 1);
}
