// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The tabs of the System Implementation Guide, in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SigTab {
    /// 4-level location hierarchy.
    LocationHierarchy,
    /// Locations × callout types.
    CalloutTypeMatrix,
    /// Locations × callout reasons.
    CalloutReasonMatrix,
    /// Trouble locations.
    TroubleLocations,
    /// Job classifications.
    JobClassifications,
    /// Callout reasons.
    CalloutReasons,
    /// Event types.
    EventTypes,
    /// Callout type configuration.
    CalloutTypeConfiguration,
    /// Global configuration options.
    GlobalConfigurationOptions,
    /// Data and interfaces.
    DataAndInterfaces,
    /// Additions.
    Additions,
}

impl SigTab {
    /// All tabs in questionnaire order.
    pub const ALL: [Self; 11] = [
        Self::LocationHierarchy,
        Self::CalloutTypeMatrix,
        Self::CalloutReasonMatrix,
        Self::TroubleLocations,
        Self::JobClassifications,
        Self::CalloutReasons,
        Self::EventTypes,
        Self::CalloutTypeConfiguration,
        Self::GlobalConfigurationOptions,
        Self::DataAndInterfaces,
        Self::Additions,
    ];

    /// Returns the tab title.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LocationHierarchy => "Location Hierarchy",
            Self::CalloutTypeMatrix => "Matrix of Locations and CO Types",
            Self::CalloutReasonMatrix => "Matrix of Locations and Reasons",
            Self::TroubleLocations => "Trouble Locations",
            Self::JobClassifications => "Job Classifications",
            Self::CalloutReasons => "Callout Reasons",
            Self::EventTypes => "Event Types",
            Self::CalloutTypeConfiguration => "Callout Type Configuration",
            Self::GlobalConfigurationOptions => "Global Configuration Options",
            Self::DataAndInterfaces => "Data and Interfaces",
            Self::Additions => "Additions",
        }
    }

    /// Returns whether the tab is backed by a dedicated model rather than
    /// free-text responses alone.
    #[must_use]
    pub const fn is_modeled(&self) -> bool {
        matches!(
            self,
            Self::LocationHierarchy
                | Self::CalloutTypeMatrix
                | Self::CalloutReasonMatrix
                | Self::JobClassifications
                | Self::CalloutReasons
                | Self::EventTypes
        )
    }
}

impl FromStr for SigTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| DomainError::InvalidTab(s.to_string()))
    }
}

impl TryFrom<String> for SigTab {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SigTab> for String {
    fn from(tab: SigTab) -> Self {
        Self::from(tab.as_str())
    }
}

impl std::fmt::Display for SigTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
