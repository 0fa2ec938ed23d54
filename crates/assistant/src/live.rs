// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::{CompletionClient, CompletionRequest};
use crate::error::AssistantError;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prefix of every system message; the form context is appended to it.
pub const SYSTEM_PROMPT: &str = "You are a helpful expert on ARCOS system implementation. ";

/// Reply length limit sent with every request.
pub const MAX_TOKENS: u32 = 800;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct LiveClient {
    http: Client,
    url: String,
    model: String,
    api_key: String,
}

impl LiveClient {
    /// Creates a client for `endpoint`, the API base URL without the
    /// `/chat/completions` suffix.
    #[must_use]
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Self {
        Self {
            http: Client::new(),
            url: format!("{}/chat/completions", endpoint.trim_end_matches('/')),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Returns the full request URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CompletionClient for LiveClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, AssistantError> {
        let system: String = format!("{SYSTEM_PROMPT}{}", request.context);
        let body: ChatCompletionBody<'_> = ChatCompletionBody {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        debug!(url = %self.url, model = %self.model, "Sending completion request");
        let response: Response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status: StatusCode = response.status();
        if !status.is_success() {
            let text: String = response.text().await.unwrap_or_default();
            return Err(AssistantError::Api {
                status: status.as_u16(),
                message: api_error_message(&text, status),
            });
        }

        let reply: ChatCompletionReply = response.json().await?;
        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AssistantError::EmptyReply)
    }
}

/// Pulls `error.message` out of an error body, falling back to the raw text
/// or the status reason.
fn api_error_message(text: &str, status: StatusCode) -> String {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        return body.error.message;
    }
    let trimmed: &str = text.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}
