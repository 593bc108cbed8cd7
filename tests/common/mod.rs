//! Shared fixtures: an in-process stand-in for a chat-completions endpoint.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use prompt_relay::gateway::Gateway;
use prompt_relay::llm::LlmProvider;
use prompt_relay::llm::providers::openai_compatible::OpenAiCompatibleProvider;

/// One request seen by the mock: JSON body plus the `Authorization` header.
#[derive(Debug, Clone)]
pub struct Captured {
    pub body: Value,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    reply: Value,
    seen: Arc<Mutex<Vec<Captured>>>,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    pub seen: Arc<Mutex<Vec<Captured>>>,
}

impl MockUpstream {
    /// Spawn a server answering every POST with `status` and `reply`.
    pub async fn start(status: StatusCode, reply: Value) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { status, reply, seen: seen.clone() };
        let app = Router::new()
            .route("/v1/chat/completions", post(complete))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, seen }
    }

    pub fn url(&self) -> String {
        format!("http://{}/v1/chat/completions", self.addr)
    }

    pub fn provider(&self, api_key: Option<&str>) -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::new(
            self.url(),
            "gpt-3.5-turbo".into(),
            1000,
            None,
            5,
            api_key.map(str::to_string),
        )
        .unwrap()
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::new(LlmProvider::OpenAiCompatible(self.provider(Some("sk-test"))))
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.seen.lock().unwrap().clone()
    }
}

async fn complete(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().unwrap().push(Captured { body, authorization });
    (state.status, Json(state.reply))
}

/// A well-formed chat-completions success body.
pub fn completion_body(content: &str, total_tokens: u64) -> Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ],
        "usage": { "prompt_tokens": 10, "completion_tokens": total_tokens - 10, "total_tokens": total_tokens }
    })
}
