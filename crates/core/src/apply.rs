// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::store::ConfigStore;
use serde::{Deserialize, Serialize};
use sig_domain::{EntryId, ResponseKey, SigTab};

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ApplyOutcome {
    /// The store was updated and nothing new needs reporting.
    Updated,
    /// A location entry was appended.
    LocationAdded {
        /// The new entry.
        entry_id: EntryId,
    },
    /// A callout type column was requested.
    CalloutTypeAdded {
        /// `false` when the type already existed.
        added: bool,
    },
    /// A job classification was appended.
    JobClassificationAdded {
        /// Position of the new job classification.
        index: usize,
    },
    /// An event type was appended.
    EventTypeAdded {
        /// Position of the new event type.
        index: usize,
    },
}

/// Applies a command to the store.
///
/// Every check runs before the store is touched, so a rejected command leaves
/// the store exactly as it was.
///
/// # Errors
///
/// Returns an error if:
/// - A position or slot is out of range
/// - The addressed location or callout reason does not exist
/// - The command violates a domain rule (incomplete location, unknown tab,
///   blank callout type)
pub fn apply(store: &mut ConfigStore, command: Command) -> Result<ApplyOutcome, CoreError> {
    match command {
        Command::AddLocationEntry => {
            let entry_id: EntryId = store.add_location_entry();
            return Ok(ApplyOutcome::LocationAdded { entry_id });
        }
        Command::RemoveLocationEntry { index } => {
            store.remove_location_entry(index)?;
        }
        Command::SetLocationLevel { index, level, name } => {
            store.set_location_level(index, level, name)?;
        }
        Command::SetLocationTimezone { index, timezone } => {
            store.set_location_timezone(index, timezone)?;
        }
        Command::SetLocationCode { index, slot, code } => {
            store.set_location_code(index, slot, code)?;
        }
        Command::SetLocationReasonsNote { index, note } => {
            store.set_location_reasons_note(index, note)?;
        }
        Command::SetLevelLabel { level, label } => store.set_level_label(level, label),
        Command::SetDefaultTimezone { timezone } => store.set_default_timezone(timezone),
        Command::AddCalloutType { name } => {
            let added: bool = store.add_callout_type(&name)?;
            return Ok(ApplyOutcome::CalloutTypeAdded { added });
        }
        Command::RemoveCalloutType { index } => {
            store.remove_callout_type(index)?;
        }
        Command::SetCalloutTypeEnabled {
            entry_id,
            callout_type,
            enabled,
        } => store.set_callout_type_enabled(entry_id, &callout_type, enabled)?,
        Command::SetCalloutReasonEnabled {
            entry_id,
            reason_id,
            enabled,
        } => store.set_callout_reason_enabled(entry_id, &reason_id, enabled)?,
        Command::ReplaceCalloutReasons { reasons } => store.replace_callout_reasons(reasons),
        Command::SelectCalloutReason { id, selected } => {
            store.select_callout_reason(&id, selected)?;
        }
        Command::ClearCalloutReasonSelections => store.clear_callout_reason_selections(),
        Command::SetDefaultCalloutReason { id } => {
            if !store.set_default_callout_reason(&id) {
                return Err(CoreError::CalloutReasonNotFound(id));
            }
        }
        Command::AddJobClassification => {
            let index: usize = store.add_job_classification();
            return Ok(ApplyOutcome::JobClassificationAdded { index });
        }
        Command::RemoveJobClassification { index } => {
            store.remove_job_classification(index)?;
        }
        Command::SetJobType { index, job_type } => store.set_job_type(index, job_type)?,
        Command::SetJobTitle { index, title } => store.set_job_title(index, title)?,
        Command::SetJobId { index, slot, id } => store.set_job_id(index, slot, id)?,
        Command::SetJobRecording { index, recording } => {
            store.set_job_recording(index, recording)?;
        }
        Command::AddEventType => {
            let index: usize = store.add_event_type();
            return Ok(ApplyOutcome::EventTypeAdded { index });
        }
        Command::RemoveEventType { index } => {
            store.remove_event_type(index)?;
        }
        Command::UpdateEventType { index, event_type } => {
            store.update_event_type(index, event_type)?;
        }
        Command::SetResponse {
            tab,
            section,
            value,
        } => {
            let tab: SigTab = tab.parse()?;
            store.set_response(ResponseKey::new(tab.as_str(), &section), value);
        }
    }
    Ok(ApplyOutcome::Updated)
}
