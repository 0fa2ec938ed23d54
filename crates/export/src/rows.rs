// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use sig::ConfigStore;
use sig_domain::{
    CalloutReason, EventType, HierarchyConfig, JobClassification, Level, LocationEntry, SigTab,
};

/// Recording text used when a job classification has no override.
pub const SAME_AS_TITLE: &str = "Same as title";

/// One `Tab, Section, Response` row of the flat export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExportRow {
    pub tab: String,
    pub section: String,
    pub response: String,
}

impl ExportRow {
    fn new(tab: &str, section: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            tab: tab.to_string(),
            section: section.into(),
            response: response.into(),
        }
    }
}

/// Flattens the store into export rows.
///
/// Order: hierarchy, callout-type matrix, reason matrix, job
/// classifications, callout reasons, event types, then free-text responses
/// sorted by tab and section. Sections with nothing to report emit no rows.
#[must_use]
pub fn export_rows(store: &ConfigStore) -> Vec<ExportRow> {
    let mut rows: Vec<ExportRow> = Vec::new();
    rows.extend(hierarchy_rows(store));
    rows.extend(callout_type_matrix_rows(store));
    rows.extend(callout_reason_matrix_rows(store));
    rows.extend(job_classification_rows(store));
    rows.extend(callout_reason_rows(store));
    rows.extend(event_type_rows(store));
    rows.extend(response_rows(store));
    rows
}

fn hierarchy_rows(store: &ConfigStore) -> Vec<ExportRow> {
    let hierarchy: &HierarchyConfig = store.hierarchy();
    let tab: &str = SigTab::LocationHierarchy.as_str();

    let entries: Vec<ExportRow> = hierarchy
        .entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.is_populated())
        .map(|(position, entry)| {
            ExportRow::new(
                tab,
                format!("Location Entry #{}", position + 1),
                location_summary(entry, &hierarchy.default_timezone),
            )
        })
        .collect();

    if entries.is_empty() {
        return entries;
    }

    let labels: String = Level::ALL
        .into_iter()
        .map(|level| format!("Level {}: {}", level.number(), hierarchy.labels.get(level)))
        .collect::<Vec<String>>()
        .join(", ");

    let mut rows: Vec<ExportRow> = vec![ExportRow::new(tab, "Labels", labels)];
    rows.extend(entries);
    rows
}

/// `Level 1: a, Level 2: b, Level 3: c, Level 4: d, Time Zone: tz, Codes: x, y`
fn location_summary(entry: &LocationEntry, default_timezone: &str) -> String {
    let levels: String = Level::ALL
        .into_iter()
        .map(|level| format!("Level {}: {}", level.number(), entry.level(level)))
        .collect::<Vec<String>>()
        .join(", ");
    let codes: String = if entry.is_complete() {
        entry.active_codes().collect::<Vec<&str>>().join(", ")
    } else {
        String::new()
    };
    format!(
        "{levels}, Time Zone: {}, Codes: {codes}",
        entry.resolved_timezone(default_timezone)
    )
}

fn callout_type_matrix_rows(store: &ConfigStore) -> Vec<ExportRow> {
    let tab: &str = SigTab::CalloutTypeMatrix.as_str();
    store
        .hierarchy()
        .complete_entries()
        .filter_map(|entry| {
            let enabled: Vec<&str> = store
                .callout_types()
                .iter()
                .filter(|callout_type| entry.callout_type_enabled(callout_type))
                .map(String::as_str)
                .collect();
            (!enabled.is_empty())
                .then(|| ExportRow::new(tab, entry.location_name(), enabled.join(", ")))
        })
        .collect()
}

fn callout_reason_matrix_rows(store: &ConfigStore) -> Vec<ExportRow> {
    let tab: &str = SigTab::CalloutReasonMatrix.as_str();
    store
        .hierarchy()
        .complete_entries()
        .filter_map(|entry| {
            let mut parts: Vec<String> = store
                .callout_reasons()
                .iter()
                .filter(|reason| entry.callout_reason_enabled(&reason.id))
                .map(|reason| reason.label.clone())
                .collect();
            let note: &str = entry.callout_reasons_note.trim();
            if !note.is_empty() {
                parts.push(format!("Other: {note}"));
            }
            (!parts.is_empty())
                .then(|| ExportRow::new(tab, entry.location_name(), parts.join(", ")))
        })
        .collect()
}

fn job_classification_rows(store: &ConfigStore) -> Vec<ExportRow> {
    let tab: &str = SigTab::JobClassifications.as_str();
    store
        .job_classifications()
        .iter()
        .filter(|job| job.has_title())
        .map(|job| {
            ExportRow::new(
                tab,
                format!("{} ({})", job.title, job.job_type.as_str()),
                job_summary(job),
            )
        })
        .collect()
}

fn job_summary(job: &JobClassification) -> String {
    let ids: String = job.active_ids().collect::<Vec<&str>>().join(", ");
    let recording: &str = if job.recording.trim().is_empty() {
        SAME_AS_TITLE
    } else {
        &job.recording
    };
    format!("IDs: {ids}, Recording: {recording}")
}

fn callout_reason_rows(store: &ConfigStore) -> Vec<ExportRow> {
    let tab: &str = SigTab::CalloutReasons.as_str();
    let mut rows: Vec<ExportRow> = Vec::new();

    let selected: Vec<String> = store
        .selected_callout_reasons()
        .map(CalloutReason::summary)
        .collect();
    if !selected.is_empty() {
        rows.push(ExportRow::new(tab, "Selected Reasons", selected.join(", ")));
    }
    if let Some(default) = store.default_callout_reason() {
        rows.push(ExportRow::new(tab, "Default Reason", default.summary()));
    }
    rows
}

fn event_type_rows(store: &ConfigStore) -> Vec<ExportRow> {
    let tab: &str = SigTab::EventTypes.as_str();
    store
        .event_types()
        .iter()
        .filter(|event| event.is_populated())
        .map(|event| {
            let section: &str = if event.id.trim().is_empty() {
                &event.description
            } else {
                &event.id
            };
            ExportRow::new(tab, section, event_summary(event))
        })
        .collect()
}

pub(crate) const fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn event_summary(event: &EventType) -> String {
    format!(
        "Description: {}, Use: {}, Use in Dropdown: {}, Include in Override: {}, \
         Mobile Release: {}, Requires Approval: {}, When Unavailable: {}, \
         When Declined: {}, Min Duration: {}, Max Duration: {}",
        event.description,
        yes_no(event.use_event),
        yes_no(event.use_in_dropdown),
        yes_no(event.include_in_override),
        yes_no(event.mobile_release),
        yes_no(event.mobile_release_requires_approval),
        event.when_unavailable.as_str(),
        event.when_declined.as_str(),
        event.min_duration,
        event.max_duration,
    )
}

/// Free-text responses, already in key order.
pub(crate) fn response_rows(store: &ConfigStore) -> Vec<ExportRow> {
    store
        .responses()
        .iter()
        .filter_map(|(key, value)| {
            value
                .display_text()
                .map(|text| ExportRow::new(&key.tab, key.section.clone(), text))
        })
        .collect()
}
