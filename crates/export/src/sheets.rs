// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rows::{ExportRow, response_rows, yes_no};
use serde::{Deserialize, Serialize};
use sig::ConfigStore;
use sig_domain::{CalloutReason, HierarchyConfig, Level, LocationEntry, SLOT_COUNT};

pub const LOCATION_HIERARCHY_SHEET: &str = "Location Hierarchy";
pub const CALLOUT_TYPE_MATRIX_SHEET: &str = "Matrix of Callout Types";
pub const CALLOUT_REASON_MATRIX_SHEET: &str = "Matrix of Reasons";
pub const JOB_CLASSIFICATIONS_SHEET: &str = "Job Classifications";
pub const CALLOUT_REASONS_SHEET: &str = "Callout Reasons";
pub const EVENT_TYPES_SHEET: &str = "Event Types";
pub const OTHER_CONFIGURATIONS_SHEET: &str = "Other Configurations";

/// Marker written into matrix and flag cells.
const CHECKED: &str = "X";

/// The contents of one worksheet, before any formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetData {
    fn new(name: &str, headers: Vec<String>, rows: Vec<Vec<String>>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            headers,
            rows,
        })
    }
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

fn checked(value: bool) -> String {
    if value {
        String::from(CHECKED)
    } else {
        String::new()
    }
}

/// Builds every non-empty worksheet in workbook order.
#[must_use]
pub fn build_sheets(store: &ConfigStore) -> Vec<SheetData> {
    [
        location_hierarchy_sheet(store),
        callout_type_matrix_sheet(store),
        callout_reason_matrix_sheet(store),
        job_classifications_sheet(store),
        callout_reasons_sheet(store),
        event_types_sheet(store),
        other_configurations_sheet(store),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn location_hierarchy_sheet(store: &ConfigStore) -> Option<SheetData> {
    let hierarchy: &HierarchyConfig = store.hierarchy();
    let mut columns: Vec<String> = Level::ALL
        .into_iter()
        .map(|level| format!("Level {}", level.number()))
        .collect();
    columns.push(String::from("Time Zone"));
    columns.extend((1..=SLOT_COUNT).map(|slot| format!("Code {slot}")));

    let rows: Vec<Vec<String>> = hierarchy
        .entries
        .iter()
        .filter(|entry| entry.is_populated())
        .map(|entry| {
            let mut row: Vec<String> = entry.levels.to_vec();
            row.push(
                entry
                    .resolved_timezone(&hierarchy.default_timezone)
                    .to_string(),
            );
            row.extend(location_codes(entry));
            row
        })
        .collect();

    SheetData::new(LOCATION_HIERARCHY_SHEET, columns, rows)
}

fn location_codes(entry: &LocationEntry) -> Vec<String> {
    if entry.is_complete() {
        entry.codes.iter().map(|code| code.trim().to_string()).collect()
    } else {
        vec![String::new(); SLOT_COUNT]
    }
}

fn callout_type_matrix_sheet(store: &ConfigStore) -> Option<SheetData> {
    let mut columns: Vec<String> = vec![String::from("Location")];
    columns.extend(store.callout_types().iter().cloned());

    let rows: Vec<Vec<String>> = store
        .hierarchy()
        .complete_entries()
        .map(|entry| {
            let mut row: Vec<String> = vec![entry.location_name().to_string()];
            row.extend(
                store
                    .callout_types()
                    .iter()
                    .map(|callout_type| checked(entry.callout_type_enabled(callout_type))),
            );
            row
        })
        .collect();

    SheetData::new(CALLOUT_TYPE_MATRIX_SHEET, columns, rows)
}

fn callout_reason_matrix_sheet(store: &ConfigStore) -> Option<SheetData> {
    let mut columns: Vec<String> = vec![String::from("Location")];
    columns.extend(store.callout_reasons().iter().map(CalloutReason::summary));
    columns.push(String::from("Other Reasons"));

    let rows: Vec<Vec<String>> = store
        .hierarchy()
        .complete_entries()
        .map(|entry| {
            let mut row: Vec<String> = vec![entry.location_name().to_string()];
            row.extend(
                store
                    .callout_reasons()
                    .iter()
                    .map(|reason| checked(entry.callout_reason_enabled(&reason.id))),
            );
            row.push(entry.callout_reasons_note.trim().to_string());
            row
        })
        .collect();

    SheetData::new(CALLOUT_REASON_MATRIX_SHEET, columns, rows)
}

fn job_classifications_sheet(store: &ConfigStore) -> Option<SheetData> {
    let mut columns: Vec<String> = headers(&["Type", "Classification"]);
    columns.extend((1..=SLOT_COUNT).map(|slot| format!("ID {slot}")));
    columns.push(String::from("Recording"));

    let rows: Vec<Vec<String>> = store
        .job_classifications()
        .iter()
        .filter(|job| job.has_title())
        .map(|job| {
            let mut row: Vec<String> =
                vec![job.job_type.as_str().to_string(), job.title.clone()];
            row.extend(job.ids.iter().map(|id| id.trim().to_string()));
            row.push(job.recording.clone());
            row
        })
        .collect();

    SheetData::new(JOB_CLASSIFICATIONS_SHEET, columns, rows)
}

/// Lists the whole catalog with its flags, but only once a reason is selected.
fn callout_reasons_sheet(store: &ConfigStore) -> Option<SheetData> {
    let any_selected: bool = store.selected_callout_reasons().next().is_some();
    if !any_selected {
        return None;
    }

    let rows: Vec<Vec<String>> = store
        .callout_reasons()
        .iter()
        .map(|reason| {
            vec![
                reason.id.clone(),
                reason.label.clone(),
                checked(reason.used),
                checked(reason.default),
                reason.verbiage.clone(),
            ]
        })
        .collect();

    SheetData::new(
        CALLOUT_REASONS_SHEET,
        headers(&["ID", "Callout Reason", "Use?", "Default?", "Verbiage"]),
        rows,
    )
}

fn event_types_sheet(store: &ConfigStore) -> Option<SheetData> {
    let rows: Vec<Vec<String>> = store
        .event_types()
        .iter()
        .filter(|event| event.is_populated())
        .map(|event| {
            vec![
                event.id.clone(),
                event.description.clone(),
                yes_no(event.use_event).to_string(),
                yes_no(event.use_in_dropdown).to_string(),
                yes_no(event.include_in_override).to_string(),
                yes_no(event.mobile_release).to_string(),
                yes_no(event.mobile_release_requires_approval).to_string(),
                event.when_unavailable.as_str().to_string(),
                event.when_declined.as_str().to_string(),
                event.min_duration.clone(),
                event.max_duration.clone(),
            ]
        })
        .collect();

    SheetData::new(
        EVENT_TYPES_SHEET,
        headers(&[
            "ID",
            "Description",
            "Use?",
            "Use in Dropdown",
            "Include in Override",
            "Mobile Release",
            "Requires Approval",
            "When Unavailable",
            "When Declined",
            "Min Duration",
            "Max Duration",
        ]),
        rows,
    )
}

fn other_configurations_sheet(store: &ConfigStore) -> Option<SheetData> {
    let rows: Vec<Vec<String>> = response_rows(store)
        .into_iter()
        .map(|row: ExportRow| vec![row.tab, row.section, row.response])
        .collect();

    SheetData::new(
        OTHER_CONFIGURATIONS_SHEET,
        headers(&["Tab", "Section", "Response"]),
        rows,
    )
}
