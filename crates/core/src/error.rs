// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sig_domain::{DomainError, EntryId};

/// Errors that can occur while mutating the configuration store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A positional operation addressed a slot that does not exist.
    IndexOutOfRange {
        /// The collection that was addressed.
        collection: &'static str,
        /// The requested index.
        index: usize,
        /// The collection length at the time of the request.
        len: usize,
    },
    /// No location entry has this identifier.
    LocationNotFound(EntryId),
    /// No callout reason in the catalog has this ID.
    CalloutReasonNotFound(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IndexOutOfRange {
                collection,
                index,
                len,
            } => {
                write!(
                    f,
                    "Index {index} is out of range for {collection} (length {len})"
                )
            }
            Self::LocationNotFound(id) => write!(f, "Location {id} not found"),
            Self::CalloutReasonNotFound(id) => write!(f, "Callout reason '{id}' not found"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

/// Checks that `index` addresses an element of a collection of length `len`.
pub(crate) const fn check_index(
    collection: &'static str,
    index: usize,
    len: usize,
) -> Result<(), CoreError> {
    if index < len {
        Ok(())
    } else {
        Err(CoreError::IndexOutOfRange {
            collection,
            index,
            len,
        })
    }
}
