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

mod error;
mod responses;
mod tabs;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use responses::{ResponseKey, ResponseStore, ResponseValue};
pub use tabs::SigTab;
pub use types::{
    CalloutReason, ChargeAction, DEFAULT_LEVEL_LABELS, DEFAULT_TIMEZONE, EntryId, EventType,
    HierarchyConfig, JobClassification, JobType, Level, LevelLabels, LocationEntry, SLOT_COUNT,
};
pub use validation::{
    MAX_CONTIGUOUS_CHARS, MAX_LOCATION_NAME_LEN, validate_hierarchy, validate_job_classification,
    validate_location_codes_unique, validate_location_name,
};
