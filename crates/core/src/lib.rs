// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod preview;
mod store;

#[cfg(test)]
mod tests;

use sig_domain::{DomainError, validate_hierarchy, validate_job_classification};

// Re-export public types and functions
pub use apply::{ApplyOutcome, apply};
pub use command::Command;
pub use error::CoreError;
pub use preview::{EMPTY_PREVIEW, hierarchy_preview};
pub use store::{ConfigStore, DEFAULT_CALLOUT_TYPES, Progress};

/// Collects every validation problem in the store.
///
/// This is a read-only check. Hierarchy problems come first, in entry order,
/// followed by job classification problems.
#[must_use]
pub fn validate_store(store: &ConfigStore) -> Vec<DomainError> {
    let mut issues: Vec<DomainError> = validate_hierarchy(store.hierarchy());
    issues.extend(
        store
            .job_classifications()
            .iter()
            .filter_map(|job| validate_job_classification(job).err()),
    );
    issues
}
