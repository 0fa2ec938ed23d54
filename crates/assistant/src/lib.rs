// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Assistant panel for the SIG configuration workbench.
//!
//! Questions go to a [`CompletionClient`]. The backend is chosen once from
//! configuration: [`LiveClient`] when an API key is available,
//! [`CannedClient`] otherwise. [`ask`] is the only entry point the presenter
//! uses and it never returns an error; failures become `Error: ...` text.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod canned;
mod client;
mod error;
mod history;
mod live;
mod prompts;

#[cfg(test)]
mod tests;

pub use canned::{CANNED_REPLY, CannedClient};
pub use client::{
    AssistantConfig, CompletionBackend, CompletionClient, CompletionRequest, DEFAULT_ENDPOINT,
    DEFAULT_MODEL, ask,
};
pub use error::AssistantError;
pub use history::{ChatHistory, ChatMessage, ChatRole, RECENT_MESSAGES};
pub use live::{LiveClient, MAX_TOKENS, SYSTEM_PROMPT, TEMPERATURE};
pub use prompts::{field_help_query, help_label, help_query, help_topics, tab_context};
