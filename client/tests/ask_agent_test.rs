//! End-to-end tests for the Ask-Agent handler against a mock backend
//!
//! These tests drive `ask_agent` with the real HTTP client and verify:
//! 1. Request shape (method, path, content type, body)
//! 2. Rendering of error, answer and fallback responses
//! 3. User-visible messages for transport and parse failures

use ask_agent_client::constants::{NO_EXPLANATION, REQUEST_FAILED_PREFIX};
use ask_agent_client::{ask_agent, AgentClient, AgentView, Config};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

#[derive(Default)]
struct PageView {
    question: String,
    alerts: Vec<String>,
    explanation: String,
    data: String,
}

impl AgentView for PageView {
    fn question(&self) -> String {
        self.question.clone()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn set_explanation(&mut self, text: &str) {
        self.explanation = text.to_string();
    }

    fn set_data(&mut self, text: &str) {
        self.data = text.to_string();
    }
}

fn view_asking(question: &str) -> PageView {
    PageView {
        question: question.to_string(),
        ..Default::default()
    }
}

fn client_for(server: &ServerGuard) -> AgentClient {
    AgentClient::new(Config {
        base_url: server.url(),
        ..Config::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_empty_question_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/agent")
        .expect(0)
        .create_async()
        .await;

    let mut view = view_asking("");
    ask_agent(&mut view, &client_for(&server)).await;

    mock.assert_async().await;
    assert_eq!(view.alerts, vec!["Please enter a question".to_string()]);
    assert!(view.explanation.is_empty());
}

#[tokio::test]
async fn test_answer_round_trip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/agent")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"message": "Top risks in Asia?"})))
        .with_status(200)
        .with_body(
            r#"{
                "answer": {
                    "explanation": "Two suppliers are affected by the strike.",
                    "data": {"suppliers": ["Foxconn", "Bosch"]}
                }
            }"#,
        )
        .expect(1)
        .create_async()
        .await;

    let mut view = view_asking("Top risks in Asia?");
    ask_agent(&mut view, &client_for(&server)).await;

    mock.assert_async().await;
    assert_eq!(view.explanation, "Two suppliers are affected by the strike.");
    assert_eq!(
        view.data,
        "{\n  \"suppliers\": [\n    \"Foxconn\",\n    \"Bosch\"\n  ]\n}"
    );
}

#[tokio::test]
async fn test_backend_error_is_shown() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/agent")
        .with_status(500)
        .with_body(r#"{"error": "Neo4j unavailable"}"#)
        .create_async()
        .await;

    let mut view = view_asking("q");
    ask_agent(&mut view, &client_for(&server)).await;

    assert_eq!(view.explanation, "Neo4j unavailable");
    assert_eq!(view.data, "");
}

#[tokio::test]
async fn test_fallback_explanation() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/agent")
        .with_status(200)
        .with_body(r#"{"answer": {"data": [1, 2, 3]}}"#)
        .create_async()
        .await;

    let mut view = view_asking("q");
    ask_agent(&mut view, &client_for(&server)).await;

    assert_eq!(view.explanation, NO_EXPLANATION);
}

#[tokio::test]
async fn test_non_json_body_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/agent")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let mut view = view_asking("q");
    ask_agent(&mut view, &client_for(&server)).await;

    assert!(view.explanation.starts_with(REQUEST_FAILED_PREFIX));
    assert!(view.explanation.contains("HTTP 502"));
    assert_eq!(view.data, "");
}

#[tokio::test]
async fn test_unreachable_backend_is_reported() {
    let client = AgentClient::new(Config {
        base_url: "http://127.0.0.1:1".to_string(),
        ..Config::default()
    })
    .unwrap();

    let mut view = view_asking("q");
    ask_agent(&mut view, &client).await;

    assert!(view.explanation.starts_with("Request failed: Failed to reach agent"));
}
