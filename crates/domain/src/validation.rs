// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{HierarchyConfig, JobClassification, LocationEntry};
use std::collections::HashMap;

/// Maximum length of a location name, in characters.
pub const MAX_LOCATION_NAME_LEN: usize = 50;

/// Maximum number of contiguous non-space characters in a location name.
pub const MAX_CONTIGUOUS_CHARS: usize = 25;

/// Validates a single location name.
///
/// Empty names are accepted; an unfilled level is not an error here.
///
/// # Errors
///
/// Returns an error if:
/// - The name is longer than 50 characters
/// - The name contains more than 25 characters without a space
pub fn validate_location_name(name: &str) -> Result<(), DomainError> {
    let length: usize = name.chars().count();
    if length > MAX_LOCATION_NAME_LEN {
        return Err(DomainError::LocationNameTooLong {
            name: name.to_string(),
            length,
        });
    }

    let longest_run: usize = name
        .split(char::is_whitespace)
        .map(|word| word.chars().count())
        .max()
        .unwrap_or(0);
    if longest_run > MAX_CONTIGUOUS_CHARS {
        return Err(DomainError::LocationNameMissingSpace {
            name: name.to_string(),
            run_length: longest_run,
        });
    }

    Ok(())
}

/// Validates that non-empty location codes are unique across the hierarchy.
///
/// Codes are compared exactly after trimming. Entry numbers in the errors are
/// 1-based positions in `entries`.
///
/// # Errors
///
/// Returns every duplicate found, in entry order.
pub fn validate_location_codes_unique(entries: &[LocationEntry]) -> Result<(), Vec<DomainError>> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut errors: Vec<DomainError> = Vec::new();

    for (position, entry) in entries.iter().enumerate() {
        for code in entry.active_codes() {
            if let Some(&first_entry) = first_seen.get(code) {
                errors.push(DomainError::DuplicateLocationCode {
                    code: code.to_string(),
                    first_entry,
                    duplicate_entry: position + 1,
                });
            } else {
                first_seen.insert(code, position + 1);
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Collects every problem in a hierarchy without stopping at the first.
///
/// Checks, per entry in order: level names, codes entered without a Level 4
/// name, complete entries without a code. Duplicate codes follow at the end.
#[must_use]
pub fn validate_hierarchy(config: &HierarchyConfig) -> Vec<DomainError> {
    let mut issues: Vec<DomainError> = Vec::new();

    for (position, entry) in config.entries.iter().enumerate() {
        let number: usize = position + 1;

        for name in &entry.levels {
            if let Err(err) = validate_location_name(name) {
                issues.push(err);
            }
        }

        let has_codes: bool = entry.active_codes().next().is_some();
        if entry.is_complete() {
            if !has_codes {
                issues.push(DomainError::MissingLocationCode {
                    entry: number,
                    location: entry.location_name().to_string(),
                });
            }
        } else if has_codes {
            issues.push(DomainError::CodesWithoutLocation { entry: number });
        }
    }

    if let Err(duplicates) = validate_location_codes_unique(&config.entries) {
        issues.extend(duplicates);
    }

    issues
}

/// Validates a job classification.
///
/// The type is already constrained by `JobType`; the title is the only
/// required field once any other field has been filled in.
///
/// # Errors
///
/// Returns an error if IDs or a recording were entered without a title.
pub fn validate_job_classification(job: &JobClassification) -> Result<(), DomainError> {
    let has_details: bool = job.active_ids().next().is_some() || !job.recording.trim().is_empty();
    if has_details && !job.has_title() {
        return Err(DomainError::MissingJobTitle);
    }
    Ok(())
}
