// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AssistantError, CompletionClient, CompletionRequest};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "sk-test";

/// A client that always fails, for exercising error handling.
pub struct FailingClient;

impl CompletionClient for FailingClient {
    fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> impl Future<Output = Result<String, AssistantError>> + Send {
        std::future::ready(Err(AssistantError::Api {
            status: 429,
            message: String::from("quota exceeded"),
        }))
    }
}

/// Echoes the request back so tests can inspect what the client sent.
async fn echo_completion(
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorized: bool = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer sk-test");
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Invalid API key" } })),
        );
    }

    let system: &str = body["messages"][0]["content"].as_str().unwrap_or_default();
    let user: &str = body["messages"][1]["content"].as_str().unwrap_or_default();
    let content: String = format!(
        "model={} max_tokens={} temperature={} system={system} user={user}",
        body["model"].as_str().unwrap_or_default(),
        body["max_tokens"],
        body["temperature"],
    );
    (
        StatusCode::OK,
        Json(json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        })),
    )
}

async fn empty_completion() -> Json<Value> {
    Json(json!({ "choices": [] }))
}

/// Starts a local completion endpoint and returns its base URL.
pub async fn spawn_stub_server() -> String {
    let app: Router = Router::new()
        .route("/v1/chat/completions", post(echo_completion))
        .route("/empty/chat/completions", post(empty_completion));

    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
