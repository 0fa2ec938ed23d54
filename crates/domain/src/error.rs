// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::EntryId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A location name exceeds the maximum length.
    LocationNameTooLong {
        /// The offending name.
        name: String,
        /// The name length in characters.
        length: usize,
    },
    /// A location name contains too many contiguous non-space characters.
    LocationNameMissingSpace {
        /// The offending name.
        name: String,
        /// The length of the longest run without a space.
        run_length: usize,
    },
    /// A location code is used by more than one entry.
    DuplicateLocationCode {
        /// The duplicated code.
        code: String,
        /// The 1-based entry number where the code first appears.
        first_entry: usize,
        /// The 1-based entry number of the duplicate.
        duplicate_entry: usize,
    },
    /// A complete location entry has no location code.
    MissingLocationCode {
        /// The 1-based entry number.
        entry: usize,
        /// The Level 4 name of the entry.
        location: String,
    },
    /// Location codes were entered on an entry without a Level 4 name.
    CodesWithoutLocation {
        /// The 1-based entry number.
        entry: usize,
    },
    /// A matrix cell was addressed on an entry without a Level 4 name.
    IncompleteLocation(EntryId),
    /// Job classification details were entered without a title.
    MissingJobTitle,
    /// Hierarchy level out of range.
    InvalidLevel(u8),
    /// Job classification type is not one of the known values.
    InvalidJobType(String),
    /// Charge action is not one of the known values.
    InvalidChargeAction(String),
    /// Tab name is not a known SIG tab.
    InvalidTab(String),
    /// Callout type name is empty or invalid.
    InvalidCalloutType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocationNameTooLong { name, length } => {
                write!(
                    f,
                    "Location name '{name}' is {length} characters long. Maximum is {}",
                    crate::MAX_LOCATION_NAME_LEN
                )
            }
            Self::LocationNameMissingSpace { name, run_length } => {
                write!(
                    f,
                    "Location name '{name}' has {run_length} contiguous characters. A space is required at least every {}",
                    crate::MAX_CONTIGUOUS_CHARS
                )
            }
            Self::DuplicateLocationCode {
                code,
                first_entry,
                duplicate_entry,
            } => {
                write!(
                    f,
                    "Location code '{code}' on entry #{duplicate_entry} is already used by entry #{first_entry}"
                )
            }
            Self::MissingLocationCode { entry, location } => {
                write!(
                    f,
                    "Entry #{entry} ('{location}') needs at least one location code"
                )
            }
            Self::CodesWithoutLocation { entry } => {
                write!(
                    f,
                    "Entry #{entry} has location codes but no Level 4 location"
                )
            }
            Self::IncompleteLocation(entry_id) => {
                write!(
                    f,
                    "Location {entry_id} has no Level 4 name and cannot be configured yet"
                )
            }
            Self::MissingJobTitle => {
                write!(f, "Job classification IDs or recording entered without a title")
            }
            Self::InvalidLevel(level) => {
                write!(f, "Invalid hierarchy level: {level}. Must be between 1 and 4")
            }
            Self::InvalidJobType(value) => {
                write!(
                    f,
                    "Invalid job type: '{value}'. Must be empty, Journeyman or Apprentice"
                )
            }
            Self::InvalidChargeAction(value) => {
                write!(
                    f,
                    "Invalid charge action: '{value}'. Must be empty, Charge or Excuse"
                )
            }
            Self::InvalidTab(name) => write!(f, "Unknown tab: '{name}'"),
            Self::InvalidCalloutType(msg) => write!(f, "Invalid callout type: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
