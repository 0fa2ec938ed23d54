// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::{FieldDescription, TabDescription};
use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// File name of the tab descriptions.
pub const DEFAULT_DESCRIPTIONS_FILE: &str = "sig_descriptions.json";

/// Section name used for tabs without described fields.
pub const GENERIC_SECTION: &str = "Details";

/// A field the presenter should render for a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub description: String,
    pub example: Option<String>,
    pub best_practices: Option<String>,
}

/// Read-only tab and field descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabDescriptions {
    tabs: BTreeMap<String, TabDescription>,
}

impl TabDescriptions {
    /// Creates an empty set; every tab gets the generic section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tabs: BTreeMap::new(),
        }
    }

    /// Returns the description of a tab, if it is described.
    #[must_use]
    pub fn get(&self, tab: &str) -> Option<&TabDescription> {
        self.tabs.get(tab)
    }

    /// Returns the tab summary shown above its fields.
    #[must_use]
    pub fn summary(&self, tab: &str) -> String {
        self.get(tab).map_or_else(
            || format!("This tab allows you to configure {tab} settings in ARCOS."),
            |described| described.description.clone(),
        )
    }

    /// Returns the fields to render for a tab.
    ///
    /// A tab that is not described gets a single free-text `Details` section.
    #[must_use]
    pub fn fields_for_tab(&self, tab: &str) -> Vec<FieldSpec> {
        match self.get(tab) {
            Some(described) if !described.fields.is_empty() => described
                .fields
                .iter()
                .map(|(name, field)| field_spec(name, field))
                .collect(),
            _ => vec![FieldSpec {
                name: String::from(GENERIC_SECTION),
                description: format!("Enter {tab} details"),
                example: None,
                best_practices: None,
            }],
        }
    }

    /// Returns the number of described tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns whether no tab is described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

fn field_spec(name: &str, field: &FieldDescription) -> FieldSpec {
    FieldSpec {
        name: name.to_string(),
        description: field.description.clone(),
        example: field.example.clone(),
        best_practices: field.best_practices.clone(),
    }
}

/// Reads the tab descriptions file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. Callers usually
/// continue with `TabDescriptions::new()`.
pub fn load_tab_descriptions(path: &Path) -> Result<TabDescriptions, PersistenceError> {
    let contents: String = std::fs::read_to_string(path)?;
    let descriptions: TabDescriptions = serde_json::from_str(&contents)?;
    info!(path = %path.display(), tabs = descriptions.len(), "Loaded tab descriptions");
    Ok(descriptions)
}
