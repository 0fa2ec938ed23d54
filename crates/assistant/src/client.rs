// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::canned::CannedClient;
use crate::error::AssistantError;
use crate::live::LiveClient;
use std::future::Future;
use tracing::{info, warn};

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-4o-2024-08-06";

/// A question for the assistant plus the form context it was asked in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub context: String,
}

impl CompletionRequest {
    #[must_use]
    pub fn new(prompt: &str, context: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            context: context.to_string(),
        }
    }
}

/// Something that can answer a completion request.
pub trait CompletionClient {
    /// Requests a reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the reply cannot be obtained.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<String, AssistantError>> + Send;
}

/// Assistant settings, normally taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            model: String::from(DEFAULT_MODEL),
            api_key: None,
        }
    }
}

/// The client chosen once at startup.
///
/// There is no fallback at request time: a live client that fails reports
/// the failure.
#[derive(Debug, Clone)]
pub enum CompletionBackend {
    Live(LiveClient),
    Canned(CannedClient),
}

impl CompletionBackend {
    /// Picks the live client when an API key is configured, the canned one
    /// otherwise.
    #[must_use]
    pub fn from_config(config: &AssistantConfig) -> Self {
        match config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        {
            Some(api_key) => {
                info!(
                    endpoint = %config.endpoint,
                    model = %config.model,
                    "Using live completion client"
                );
                Self::Live(LiveClient::new(&config.endpoint, &config.model, api_key))
            }
            None => {
                warn!("No API key configured, using canned completion client");
                Self::Canned(CannedClient::new())
            }
        }
    }

    /// Returns whether replies come from a real completion endpoint.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

impl CompletionClient for CompletionBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, AssistantError> {
        match self {
            Self::Live(client) => client.complete(request).await,
            Self::Canned(client) => client.complete(request).await,
        }
    }
}

/// Asks the assistant a question.
///
/// Never fails: any error is returned as displayable text starting with
/// `Error:`.
pub async fn ask<C>(client: &C, prompt: &str, context: &str) -> String
where
    C: CompletionClient + Sync,
{
    let request: CompletionRequest = CompletionRequest::new(prompt, context);
    match client.complete(&request).await {
        Ok(reply) => {
            info!(prompt_len = prompt.len(), reply_len = reply.len(), "Assistant replied");
            reply
        }
        Err(err) => {
            warn!(error = %err, "Assistant request failed");
            format!("Error: {err}")
        }
    }
}
