// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::{CompletionClient, CompletionRequest};
use crate::error::AssistantError;
use std::future::Future;

/// Reply given when no completion endpoint is configured.
pub const CANNED_REPLY: &str = "This is a placeholder response since the OpenAI API key is not configured. In a real deployment, this would be a helpful response from the AI model.";

/// Stand-in client used when no API key is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedClient {
    reply: String,
}

impl CannedClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_reply(CANNED_REPLY)
    }

    /// A client that always answers `reply`.
    #[must_use]
    pub fn with_reply(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
        }
    }
}

impl Default for CannedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletionClient for CannedClient {
    fn complete(
        &self,
        _request: &CompletionRequest,
    ) -> impl Future<Output = Result<String, AssistantError>> + Send {
        std::future::ready(Ok(self.reply.clone()))
    }
}
