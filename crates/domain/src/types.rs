// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Number of code slots on a location entry and ID slots on a job classification.
pub const SLOT_COUNT: usize = 5;

/// Default level labels, outer to inner.
pub const DEFAULT_LEVEL_LABELS: [&str; 4] =
    ["Parent Company", "Business Unit", "Division", "OpCenter"];

/// Default time zone text used when an entry has no override.
pub const DEFAULT_TIMEZONE: &str = "ET / CT / MT / AZ / PT";

/// Stable identifier of a location entry.
///
/// Identifiers are assigned by the configuration store and never reused, so
/// removing one entry does not change the identity of any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Creates an identifier from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One tier of the location hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    /// Outermost tier (company).
    One,
    /// Second tier.
    Two,
    /// Third tier.
    Three,
    /// Innermost tier (operating center).
    Four,
}

impl Level {
    /// All levels, outer to inner.
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Zero-based position of this level.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
        }
    }

    /// One-based level number as shown to users.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(DomainError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

/// Renameable display labels for the four hierarchy levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLabels([String; 4]);

impl LevelLabels {
    /// Returns the label of a level.
    #[must_use]
    pub fn get(&self, level: Level) -> &str {
        &self.0[level.index()]
    }

    /// Renames a level.
    pub fn set(&mut self, level: Level, label: String) {
        self.0[level.index()] = label;
    }

    /// Returns all labels, outer to inner.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for LevelLabels {
    fn default() -> Self {
        Self(DEFAULT_LEVEL_LABELS.map(String::from))
    }
}

/// One row of the 4-level location hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEntry {
    /// Stable identifier.
    pub id: EntryId,
    /// Level names, outer to inner.
    pub levels: [String; 4],
    /// Per-entry time zone override; blank means the hierarchy default.
    pub timezone: String,
    /// Location code slots.
    pub codes: [String; SLOT_COUNT],
    /// Callout type name to enablement.
    pub callout_types: BTreeMap<String, bool>,
    /// Callout reason ID to enablement.
    pub callout_reasons: BTreeMap<String, bool>,
    /// Free-text notes about the callout reasons used at this location.
    pub callout_reasons_note: String,
}

impl LocationEntry {
    /// Creates a blank entry.
    #[must_use]
    pub fn new(id: EntryId) -> Self {
        Self {
            id,
            levels: Default::default(),
            timezone: String::new(),
            codes: Default::default(),
            callout_types: BTreeMap::new(),
            callout_reasons: BTreeMap::new(),
            callout_reasons_note: String::new(),
        }
    }

    /// Returns the name at a level.
    #[must_use]
    pub fn level(&self, level: Level) -> &str {
        &self.levels[level.index()]
    }

    /// Returns the Level 4 name, which identifies the location in matrix views.
    #[must_use]
    pub fn location_name(&self) -> &str {
        self.level(Level::Four)
    }

    /// Returns whether any level has been filled in.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.levels.iter().any(|name| !name.trim().is_empty())
    }

    /// Returns whether Level 4 is filled in.
    ///
    /// Codes and matrix cells only apply to complete entries.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.location_name().trim().is_empty()
    }

    /// Returns the entry's time zone, falling back to `default` when blank.
    #[must_use]
    pub fn resolved_timezone<'a>(&'a self, default: &'a str) -> &'a str {
        if self.timezone.trim().is_empty() {
            default
        } else {
            &self.timezone
        }
    }

    /// Returns the non-empty codes in slot order.
    pub fn active_codes(&self) -> impl Iterator<Item = &str> {
        self.codes
            .iter()
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
    }

    /// Returns whether a callout type is enabled here. Unknown types are disabled.
    #[must_use]
    pub fn callout_type_enabled(&self, callout_type: &str) -> bool {
        self.callout_types
            .get(callout_type)
            .copied()
            .unwrap_or(false)
    }

    /// Returns whether a callout reason is enabled here. Unknown reasons are disabled.
    #[must_use]
    pub fn callout_reason_enabled(&self, reason_id: &str) -> bool {
        self.callout_reasons.get(reason_id).copied().unwrap_or(false)
    }
}

/// Owns the location entries, level labels and default time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyConfig {
    /// Display labels for each level.
    pub labels: LevelLabels,
    /// Time zone used when an entry has no override.
    pub default_timezone: String,
    /// Entries in insertion order.
    pub entries: Vec<LocationEntry>,
}

impl HierarchyConfig {
    /// Returns the entries with a Level 4 name.
    pub fn complete_entries(&self) -> impl Iterator<Item = &LocationEntry> {
        self.entries.iter().filter(|entry| entry.is_complete())
    }

    /// Finds an entry by identifier.
    #[must_use]
    pub fn entry(&self, id: EntryId) -> Option<&LocationEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Finds an entry by identifier for mutation.
    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut LocationEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            labels: LevelLabels::default(),
            default_timezone: String::from(DEFAULT_TIMEZONE),
            entries: Vec::new(),
        }
    }
}

/// Job classification type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum JobType {
    /// Not specified.
    #[default]
    Unspecified,
    /// Journeyman.
    Journeyman,
    /// Apprentice.
    Apprentice,
}

impl JobType {
    /// Returns the display string; empty for `Unspecified`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Journeyman => "Journeyman",
            Self::Apprentice => "Apprentice",
        }
    }
}

impl FromStr for JobType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Self::Unspecified),
            "Journeyman" => Ok(Self::Journeyman),
            "Apprentice" => Ok(Self::Apprentice),
            other => Err(DomainError::InvalidJobType(other.to_string())),
        }
    }
}

impl TryFrom<String> for JobType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JobType> for String {
    fn from(job_type: JobType) -> Self {
        Self::from(job_type.as_str())
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A job classification that can be called out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobClassification {
    /// Classification type.
    pub job_type: JobType,
    /// Classification title.
    pub title: String,
    /// External ID slots.
    pub ids: [String; SLOT_COUNT],
    /// Verbiage spoken during a callout; blank means the title is spoken.
    pub recording: String,
}

impl JobClassification {
    /// Returns whether the classification has a title.
    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Returns the non-empty IDs in slot order.
    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.ids
            .iter()
            .map(|id| id.trim())
            .filter(|id| !id.is_empty())
    }

    /// Returns the recording verbiage, or the title when no override is set.
    #[must_use]
    pub fn effective_recording(&self) -> &str {
        if self.recording.trim().is_empty() {
            &self.title
        } else {
            &self.recording
        }
    }
}

/// A selectable reason for a callout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutReason {
    /// External identifier.
    pub id: String,
    /// Drop-down label.
    pub label: String,
    /// Whether the reason is offered.
    pub used: bool,
    /// Whether the reason is preselected. At most one reason is default.
    pub default: bool,
    /// Pre-recorded verbiage.
    pub verbiage: String,
}

impl CalloutReason {
    /// Creates a reason.
    #[must_use]
    pub fn new(id: &str, label: &str, used: bool, default: bool, verbiage: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            used,
            default,
            verbiage: verbiage.to_string(),
        }
    }

    /// Formats the reason as `ID: Label`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}: {}", self.id, self.label)
    }
}

/// How an event type counts against a callout response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChargeAction {
    /// Not specified.
    #[default]
    Blank,
    /// Counted as a charged response.
    Charge,
    /// Counted as excused.
    Excuse,
}

impl ChargeAction {
    /// Returns the display string; empty for `Blank`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "",
            Self::Charge => "Charge",
            Self::Excuse => "Excuse",
        }
    }
}

impl FromStr for ChargeAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Ok(Self::Blank),
            "Charge" => Ok(Self::Charge),
            "Excuse" => Ok(Self::Excuse),
            other => Err(DomainError::InvalidChargeAction(other.to_string())),
        }
    }
}

impl TryFrom<String> for ChargeAction {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChargeAction> for String {
    fn from(action: ChargeAction) -> Self {
        Self::from(action.as_str())
    }
}

/// An event type (absence, working status) and how it interacts with callouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct EventType {
    /// External identifier.
    pub id: String,
    /// Description.
    pub description: String,
    /// Whether the event type is used.
    pub use_event: bool,
    /// Whether it appears in the event drop-down.
    pub use_in_dropdown: bool,
    /// Whether it is included in schedule overrides.
    pub include_in_override: bool,
    /// Whether employees may release it from the mobile app.
    pub mobile_release: bool,
    /// Whether a mobile release needs supervisor approval.
    pub mobile_release_requires_approval: bool,
    /// Accounting when the employee is unavailable because of this event.
    pub when_unavailable: ChargeAction,
    /// Accounting when the employee declines during this event.
    pub when_declined: ChargeAction,
    /// Minimum self-service duration, as entered.
    pub min_duration: String,
    /// Maximum self-service duration, as entered.
    pub max_duration: String,
}

impl EventType {
    /// Returns whether anything identifying has been entered.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.id.trim().is_empty() || !self.description.trim().is_empty()
    }
}
