//! HTTP integration tests for the chat API.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use design_intake::adapters::http::{build_app, ChatAppState};
use design_intake::adapters::storage::InMemorySessionStore;
use design_intake::config::ServerConfig;
use design_intake::domain::foundation::SessionId;
use design_intake::domain::intake::IntakeSession;
use design_intake::ports::SessionStore;

fn app() -> Router {
    let state = ChatAppState::new(Arc::new(InMemorySessionStore::new()));
    build_app(state, &ServerConfig::default())
}

async fn post_chat(app: &Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn scenario_runs_end_to_end() {
    let app = app();

    let (status, body) = post_chat(&app, json!({"sessionId": "abc"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isComplete"], false);

    for answer in ["Portfolio", "Elegant & Sophisticated", "Students"] {
        let (status, body) = post_chat(&app, json!({"sessionId": "abc", "answer": answer})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isComplete"], false);
    }

    let (_, body) = post_chat(
        &app,
        json!({"sessionId": "abc", "answer": "Deep Jewel Tones (Emerald, Sapphire, Ruby)"}),
    )
    .await;
    assert!(body["question"].as_str().unwrap().contains("Portfolio"));
    let template = body["options"][0].as_str().unwrap().to_string();

    let (status, body) = post_chat(&app, json!({"sessionId": "abc", "answer": &template})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sessionId"], "abc");
    assert_eq!(body["isComplete"], true);
    let brief = body["finalPrompt"].as_str().unwrap();
    assert!(brief.contains("Students"));
    assert!(brief.contains("Emerald, Sapphire, Ruby"));
    assert!(brief.contains(&template));
    assert!(body.get("options").is_none());
}

#[tokio::test]
async fn missing_session_id_returns_400() {
    let (status, body) = post_chat(&app(), json!({"answer": "Portfolio"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "Session ID is required.");
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn discarded_session_reply_is_a_bare_error() {
    let store = Arc::new(InMemorySessionStore::new());
    let mut session = IntakeSession::new(SessionId::new("abc").unwrap());
    session.current_stage = "checkout".to_string();
    store.save(&session).await.unwrap();
    let app = build_app(ChatAppState::new(store), &ServerConfig::default());

    let (status, body) = post_chat(&app, json!({"sessionId": "abc", "answer": "x"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "An error occurred, please start over."}));
}
