// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Deserializer, Serialize};
use sig_domain::CalloutReason;
use std::collections::BTreeMap;

/// Marker used by the reasons file for a set flag.
const FLAG_SET: &str = "x";

/// One object of the callout reasons file, in the file's own shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalloutReasonRecord {
    #[serde(rename = "ID", deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "Callout Reason Drop-Down Label", default)]
    pub label: String,
    #[serde(rename = "Use?", default)]
    pub use_flag: String,
    #[serde(rename = "Default?", default)]
    pub default_flag: String,
    #[serde(rename = "Verbiage", default)]
    pub verbiage: String,
}

impl From<CalloutReasonRecord> for CalloutReason {
    fn from(record: CalloutReasonRecord) -> Self {
        Self {
            used: is_flag_set(&record.use_flag),
            default: is_flag_set(&record.default_flag),
            id: record.id,
            label: record.label,
            verbiage: record.verbiage,
        }
    }
}

impl From<&CalloutReason> for CalloutReasonRecord {
    fn from(reason: &CalloutReason) -> Self {
        Self {
            id: reason.id.clone(),
            label: reason.label.clone(),
            use_flag: flag_text(reason.used),
            default_flag: flag_text(reason.default),
            verbiage: reason.verbiage.clone(),
        }
    }
}

fn is_flag_set(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(FLAG_SET)
}

fn flag_text(set: bool) -> String {
    if set {
        String::from(FLAG_SET)
    } else {
        String::new()
    }
}

/// Accepts `"1008"` and `1008` alike; spreadsheets exported to JSON often
/// write numeric IDs as numbers.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(value) => value.to_string(),
        RawId::Float(value) => value.to_string(),
    })
}

/// Help text for one field of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<String>,
}

/// Description of one tab and its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescription {
    pub description: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldDescription>,
}
