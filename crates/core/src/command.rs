// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use sig_domain::{CalloutReason, EntryId, EventType, JobType, Level, ResponseValue};

/// A command represents user intent as data only.
///
/// Commands are the only way the presenter requests store changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Append a blank location entry.
    AddLocationEntry,
    /// Remove the location entry at a position.
    RemoveLocationEntry {
        /// Zero-based entry position.
        index: usize,
    },
    /// Set the name of one hierarchy level of an entry.
    SetLocationLevel {
        /// Zero-based entry position.
        index: usize,
        /// The level to set.
        level: Level,
        /// The new name.
        name: String,
    },
    /// Set the time zone override of an entry.
    SetLocationTimezone {
        /// Zero-based entry position.
        index: usize,
        /// The time zone, or empty to use the default.
        timezone: String,
    },
    /// Set one code slot of an entry.
    SetLocationCode {
        /// Zero-based entry position.
        index: usize,
        /// Zero-based code slot.
        slot: usize,
        /// The code, or empty to clear the slot.
        code: String,
    },
    /// Set the free-text callout reasons note of an entry.
    SetLocationReasonsNote {
        /// Zero-based entry position.
        index: usize,
        /// The note.
        note: String,
    },
    /// Rename a hierarchy level.
    SetLevelLabel {
        /// The level to rename.
        level: Level,
        /// The new label.
        label: String,
    },
    /// Set the default time zone.
    SetDefaultTimezone {
        /// The time zone.
        timezone: String,
    },
    /// Add a callout type column.
    AddCalloutType {
        /// The callout type name.
        name: String,
    },
    /// Remove a callout type column.
    RemoveCalloutType {
        /// Zero-based column position.
        index: usize,
    },
    /// Enable or disable a callout type at a location.
    SetCalloutTypeEnabled {
        /// The location entry.
        entry_id: EntryId,
        /// The callout type name.
        callout_type: String,
        /// Whether the type is enabled.
        enabled: bool,
    },
    /// Enable or disable a callout reason at a location.
    SetCalloutReasonEnabled {
        /// The location entry.
        entry_id: EntryId,
        /// The catalog reason ID.
        reason_id: String,
        /// Whether the reason is enabled.
        enabled: bool,
    },
    /// Replace the callout reason catalog.
    ReplaceCalloutReasons {
        /// The new catalog.
        reasons: Vec<CalloutReason>,
    },
    /// Mark a callout reason as used or unused.
    SelectCalloutReason {
        /// The catalog reason ID.
        id: String,
        /// Whether the reason is used.
        selected: bool,
    },
    /// Mark every callout reason unused.
    ClearCalloutReasonSelections,
    /// Make a callout reason the default.
    SetDefaultCalloutReason {
        /// The catalog reason ID.
        id: String,
    },
    /// Append a blank job classification.
    AddJobClassification,
    /// Remove the job classification at a position.
    RemoveJobClassification {
        /// Zero-based position.
        index: usize,
    },
    /// Set the type of a job classification.
    SetJobType {
        /// Zero-based position.
        index: usize,
        /// The job type.
        job_type: JobType,
    },
    /// Set the title of a job classification.
    SetJobTitle {
        /// Zero-based position.
        index: usize,
        /// The title.
        title: String,
    },
    /// Set one ID slot of a job classification.
    SetJobId {
        /// Zero-based position.
        index: usize,
        /// Zero-based ID slot.
        slot: usize,
        /// The ID, or empty to clear the slot.
        id: String,
    },
    /// Set the recording verbiage of a job classification.
    SetJobRecording {
        /// Zero-based position.
        index: usize,
        /// The verbiage, or empty to use the title.
        recording: String,
    },
    /// Append a blank event type.
    AddEventType,
    /// Remove the event type at a position.
    RemoveEventType {
        /// Zero-based position.
        index: usize,
    },
    /// Replace the event type at a position.
    UpdateEventType {
        /// Zero-based position.
        index: usize,
        /// The new event type.
        event_type: EventType,
    },
    /// Store a free-text or yes/no response.
    SetResponse {
        /// The tab title.
        tab: String,
        /// The section or field name within the tab.
        section: String,
        /// The response.
        value: ResponseValue,
    },
}

impl Command {
    /// Returns the snake-case command name used on the wire and in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddLocationEntry => "add_location_entry",
            Self::RemoveLocationEntry { .. } => "remove_location_entry",
            Self::SetLocationLevel { .. } => "set_location_level",
            Self::SetLocationTimezone { .. } => "set_location_timezone",
            Self::SetLocationCode { .. } => "set_location_code",
            Self::SetLocationReasonsNote { .. } => "set_location_reasons_note",
            Self::SetLevelLabel { .. } => "set_level_label",
            Self::SetDefaultTimezone { .. } => "set_default_timezone",
            Self::AddCalloutType { .. } => "add_callout_type",
            Self::RemoveCalloutType { .. } => "remove_callout_type",
            Self::SetCalloutTypeEnabled { .. } => "set_callout_type_enabled",
            Self::SetCalloutReasonEnabled { .. } => "set_callout_reason_enabled",
            Self::ReplaceCalloutReasons { .. } => "replace_callout_reasons",
            Self::SelectCalloutReason { .. } => "select_callout_reason",
            Self::ClearCalloutReasonSelections => "clear_callout_reason_selections",
            Self::SetDefaultCalloutReason { .. } => "set_default_callout_reason",
            Self::AddJobClassification => "add_job_classification",
            Self::RemoveJobClassification { .. } => "remove_job_classification",
            Self::SetJobType { .. } => "set_job_type",
            Self::SetJobTitle { .. } => "set_job_title",
            Self::SetJobId { .. } => "set_job_id",
            Self::SetJobRecording { .. } => "set_job_recording",
            Self::AddEventType => "add_event_type",
            Self::RemoveEventType { .. } => "remove_event_type",
            Self::UpdateEventType { .. } => "update_event_type",
            Self::SetResponse { .. } => "set_response",
        }
    }
}
