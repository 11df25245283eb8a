mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use common::StubAgent;
use pollyglot::config::OpenAiConfig;
use pollyglot::message::TranslationRequest;
use pollyglot::services::agent::{AgentError, TranslationAgent};
use pollyglot::services::openai::OpenAiAgent;
use pollyglot::services::translator::Translator;
use serde_json::{Value, json};

fn request(text: &str, lang: &str) -> TranslationRequest {
    TranslationRequest { text: text.into(), target_language: lang.into() }
}

#[tokio::test]
async fn test_translator_trims_agent_output() {
    let agent = StubAgent::replying("  Bonjour le monde\n");
    let translator = Translator::new(agent.clone(), None);

    let out = translator.translate(&request("Hello world", "French")).await.unwrap();
    assert_eq!(out, "Bonjour le monde");
    assert_eq!(agent.calls(), 1);
}

#[tokio::test]
async fn test_translator_times_out() {
    let agent = StubAgent::slow("late", Duration::from_millis(500));
    let translator = Translator::new(agent, Some(Duration::from_millis(20)));

    let err = translator.translate(&request("Hello", "German")).await.unwrap_err();
    assert!(matches!(err, AgentError::Timeout(_)));
    assert_eq!(err.to_string(), "translation agent did not respond within 20ms");
}

#[tokio::test]
async fn test_translator_passes_agent_errors_through() {
    let translator = Translator::new(StubAgent::failing("network down"), Some(Duration::from_secs(5)));

    let err = translator.translate(&request("Hello", "German")).await.unwrap_err();
    assert!(err.to_string().contains("network down"));
}

#[derive(Clone, Default)]
struct Seen {
    auth: Arc<Mutex<Option<String>>>,
    body: Arc<Mutex<Option<Value>>>,
}

/// Serves `reply` with `status` on `/v1/chat/completions` and returns the base URL.
async fn mock_openai(status: StatusCode, reply: Value) -> (String, Seen) {
    let seen = Seen::default();

    let app = Router::new()
        .route(
            "/v1/chat/completions",
            post(move |State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>| {
                let reply = reply.clone();
                async move {
                    *seen.auth.lock().unwrap() = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *seen.body.lock().unwrap() = Some(body);
                    (status, Json(reply))
                }
            }),
        )
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1"), seen)
}

fn openai_config(base_url: String) -> OpenAiConfig {
    OpenAiConfig { api_key: "sk-test".into(), base_url, model: "gpt-test".into() }
}

#[tokio::test]
async fn test_openai_agent_sends_chat_completion() {
    let (base_url, seen) = mock_openai(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": " Hallo Welt " } }] }),
    )
    .await;
    let agent = OpenAiAgent::new(openai_config(base_url));

    let out = agent.run("be precise", "Translate this text to German: \"Hello world\"").await.unwrap();
    assert_eq!(out, "Hallo Welt");

    assert_eq!(seen.auth.lock().unwrap().as_deref(), Some("Bearer sk-test"));
    let body = seen.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["model"], "gpt-test");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "be precise");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Translate this text to German: \"Hello world\"");
}

#[tokio::test]
async fn test_openai_agent_reports_status() {
    let (base_url, _) =
        mock_openai(StatusCode::TOO_MANY_REQUESTS, json!({ "error": { "message": "quota" } })).await;
    let agent = OpenAiAgent::new(openai_config(base_url));

    match agent.run("x", "y").await.unwrap_err() {
        AgentError::Status { status, body } => {
            assert_eq!(status, 429);
            assert!(body.contains("quota"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_openai_agent_rejects_empty_and_malformed() {
    let (base_url, _) = mock_openai(StatusCode::OK, json!({ "choices": [] })).await;
    let err = OpenAiAgent::new(openai_config(base_url)).run("x", "y").await.unwrap_err();
    assert!(matches!(err, AgentError::EmptyOutput));

    let (base_url, _) = mock_openai(StatusCode::OK, json!({ "unexpected": true })).await;
    let err = OpenAiAgent::new(openai_config(base_url)).run("x", "y").await.unwrap_err();
    assert!(matches!(err, AgentError::Malformed(_)));
}

#[tokio::test]
async fn test_openai_agent_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let agent = OpenAiAgent::new(openai_config(format!("http://{addr}/v1")));
    let err = agent.run("x", "y").await.unwrap_err();
    assert!(matches!(err, AgentError::Transport(_)));
}
