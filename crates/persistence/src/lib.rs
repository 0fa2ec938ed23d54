// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! External resources for the SIG configuration workbench.
//!
//! Two JSON files live next to the server:
//!
//! - `callout_reasons.json`: the callout reason catalog. Read when a session
//!   starts and rewritten only by the explicit commit operation. A missing or
//!   malformed file never fails the caller; a small built-in catalog is
//!   substituted and a warning is logged.
//! - `sig_descriptions.json`: tab and field help text, read-only.

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

mod callout_reasons;
mod data_models;
mod descriptions;
mod error;

#[cfg(test)]
mod tests;

pub use callout_reasons::{
    DEFAULT_CALLOUT_REASONS_FILE, fallback_callout_reasons, load_callout_reasons,
    save_callout_reasons, try_load_callout_reasons,
};
pub use data_models::{CalloutReasonRecord, FieldDescription, TabDescription};
pub use descriptions::{
    DEFAULT_DESCRIPTIONS_FILE, FieldSpec, GENERIC_SECTION, TabDescriptions, load_tab_descriptions,
};
pub use error::PersistenceError;
