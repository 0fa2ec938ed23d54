// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::CalloutReasonRecord;
use crate::error::PersistenceError;
use sig_domain::CalloutReason;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// File name of the callout reasons catalog.
pub const DEFAULT_CALLOUT_REASONS_FILE: &str = "callout_reasons.json";

/// The catalog used when the reasons file cannot be read.
#[must_use]
pub fn fallback_callout_reasons() -> Vec<CalloutReason> {
    vec![
        CalloutReason::new("1008", "Odor", true, false, ""),
        CalloutReason::new("1018", "Carbon Monoxide", true, false, ""),
        CalloutReason::new("1023", "Fire", true, false, ""),
    ]
}

/// Reads the callout reasons catalog.
///
/// Only the first reason of a repeated ID is kept.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// reason objects.
pub fn try_load_callout_reasons(path: &Path) -> Result<Vec<CalloutReason>, PersistenceError> {
    debug!(path = %path.display(), "Reading callout reasons");
    let contents: String = std::fs::read_to_string(path)?;
    let records: Vec<CalloutReasonRecord> = serde_json::from_str(&contents)?;

    let mut seen_ids: BTreeSet<String> = BTreeSet::new();
    let mut reasons: Vec<CalloutReason> = Vec::with_capacity(records.len());
    for reason in records.into_iter().map(CalloutReason::from) {
        if seen_ids.insert(reason.id.clone()) {
            reasons.push(reason);
        } else {
            warn!(
                path = %path.display(),
                id = %reason.id,
                label = %reason.label,
                "Skipping callout reason with repeated ID"
            );
        }
    }
    Ok(reasons)
}

/// Reads the callout reasons catalog, substituting the built-in fallback list
/// when the file is missing or malformed.
#[must_use]
pub fn load_callout_reasons(path: &Path) -> Vec<CalloutReason> {
    match try_load_callout_reasons(path) {
        Ok(reasons) => {
            info!(path = %path.display(), count = reasons.len(), "Loaded callout reasons");
            reasons
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "Failed to load callout reasons, using built-in fallback"
            );
            fallback_callout_reasons()
        }
    }
}

/// Writes the catalog back with its current `Use?` and `Default?` flags.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_callout_reasons(path: &Path, reasons: &[CalloutReason]) -> Result<(), PersistenceError> {
    let records: Vec<CalloutReasonRecord> = reasons.iter().map(CalloutReasonRecord::from).collect();
    let mut contents: String = serde_json::to_string_pretty(&records)?;
    contents.push('\n');
    std::fs::write(path, contents)?;
    info!(path = %path.display(), count = records.len(), "Saved callout reasons");
    Ok(())
}
