// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-session form state.
//!
//! Every browser tab or client picks a session name; the first request that
//! names a session creates it, seeded the way a fresh form opens. A session
//! lives until it is closed.

use sig::ConfigStore;
use sig_assistant::ChatHistory;
use sig_domain::CalloutReason;
use std::collections::HashMap;
use tracing::info;

/// Longest accepted session name.
pub const MAX_SESSION_NAME_LENGTH: usize = 64;

/// The state behind one open form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The configuration being edited.
    pub store: ConfigStore,
    /// The assistant conversation.
    pub chat: ChatHistory,
}

impl Session {
    /// Creates a session with one blank location entry, one blank job
    /// classification and the given reason catalog.
    #[must_use]
    pub fn seeded(reasons: Vec<CalloutReason>) -> Self {
        let mut store: ConfigStore = ConfigStore::new();
        store.replace_callout_reasons(reasons);
        store.add_location_entry();
        store.add_job_classification();
        Self {
            store,
            chat: ChatHistory::new(),
        }
    }
}

/// Errors raised when addressing a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session name is empty, too long, or has characters outside
    /// `[A-Za-z0-9_-]`.
    InvalidName(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid session name '{name}': use 1-{MAX_SESSION_NAME_LENGTH} letters, digits, '-' or '_'"
            ),
        }
    }
}

impl std::error::Error for SessionError {}

/// Checks that a session name is safe to use as a map key and in logs.
///
/// # Errors
///
/// Returns `SessionError::InvalidName` if the name is rejected.
pub fn validate_session_name(name: &str) -> Result<(), SessionError> {
    let valid: bool = !name.is_empty()
        && name.len() <= MAX_SESSION_NAME_LENGTH
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(SessionError::InvalidName(name.to_string()))
    }
}

/// Open sessions by name.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, Session>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session with this name is open.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sessions.contains_key(name)
    }

    /// Stores `seed` under `name` unless a session already exists there.
    ///
    /// Returns whether `seed` was stored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidName` if the name is rejected.
    pub fn insert_if_absent(&mut self, name: &str, seed: Session) -> Result<bool, SessionError> {
        validate_session_name(name)?;
        if self.sessions.contains_key(name) {
            return Ok(false);
        }
        info!(session = %name, "Opening new session");
        self.sessions.insert(name.to_string(), seed);
        Ok(true)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Session> {
        self.sessions.get_mut(name)
    }

    /// Closes the named session and hands back its state.
    pub fn remove(&mut self, name: &str) -> Option<Session> {
        let removed: Option<Session> = self.sessions.remove(name);
        if removed.is_some() {
            info!(session = %name, remaining = self.sessions.len(), "Closed session");
        }
        removed
    }
}
