// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Composite key of a free-text response: the tab and the section within it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResponseKey {
    /// Tab name.
    pub tab: String,
    /// Field or section name within the tab.
    pub section: String,
}

impl ResponseKey {
    /// Creates a key.
    #[must_use]
    pub fn new(tab: &str, section: &str) -> Self {
        Self {
            tab: tab.to_string(),
            section: section.to_string(),
        }
    }
}

/// A stored response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// Free text.
    Text(String),
    /// A yes/no answer.
    Flag(bool),
}

impl ResponseValue {
    /// Returns the exported text, or `None` when the response is empty.
    ///
    /// Blank text and cleared flags count as unanswered.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Text(text) if !text.trim().is_empty() => Some(text.clone()),
            Self::Flag(true) => Some(String::from("Yes")),
            Self::Text(_) | Self::Flag(false) => None,
        }
    }
}

/// Catch-all store for answers on tabs without a dedicated model.
///
/// Keys iterate in sorted `(tab, section)` order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStore {
    #[serde(with = "entries")]
    values: BTreeMap<ResponseKey, ResponseValue>,
}

impl ResponseStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Inserts or replaces a response.
    pub fn set(&mut self, key: ResponseKey, value: ResponseValue) {
        self.values.insert(key, value);
    }

    /// Returns a response.
    #[must_use]
    pub fn get(&self, key: &ResponseKey) -> Option<&ResponseValue> {
        self.values.get(key)
    }

    /// Removes a response.
    pub fn remove(&mut self, key: &ResponseKey) -> Option<ResponseValue> {
        self.values.remove(key)
    }

    /// Iterates over all responses sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&ResponseKey, &ResponseValue)> {
        self.values.iter()
    }

    /// Returns whether a tab has at least one non-empty answer.
    #[must_use]
    pub fn has_answers_for(&self, tab: &str) -> bool {
        self.values
            .iter()
            .any(|(key, value)| key.tab == tab && value.display_text().is_some())
    }

    /// Returns the number of stored responses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether no responses are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// JSON objects need string keys, so the map travels as a list of entries.
mod entries {
    use super::{ResponseKey, ResponseValue};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        tab: String,
        section: String,
        value: ResponseValue,
    }

    pub fn serialize<S: Serializer>(
        values: &BTreeMap<ResponseKey, ResponseValue>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let entries: Vec<Entry> = values
            .iter()
            .map(|(key, value)| Entry {
                tab: key.tab.clone(),
                section: key.section.clone(),
                value: value.clone(),
            })
            .collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<ResponseKey, ResponseValue>, D::Error> {
        let entries: Vec<Entry> = Vec::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                (
                    ResponseKey {
                        tab: entry.tab,
                        section: entry.section,
                    },
                    entry.value,
                )
            })
            .collect())
    }
}
