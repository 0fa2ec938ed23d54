// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Number of messages shown in the chat panel.
pub const RECENT_MESSAGES: usize = 10;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// The assistant conversation of one session, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Appends a question and its reply.
    pub fn push_exchange(&mut self, question: &str, reply: &str) {
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            content: question.to_string(),
        });
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            content: reply.to_string(),
        });
    }

    /// Returns at most the last `limit` messages, oldest first.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[ChatMessage] {
        let start: usize = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    /// Returns every message, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
