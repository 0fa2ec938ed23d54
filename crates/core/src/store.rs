// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{CoreError, check_index};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use sig_domain::{
    CalloutReason, DomainError, EntryId, EventType, HierarchyConfig, JobClassification, JobType,
    Level, LocationEntry, ResponseKey, ResponseStore, ResponseValue, SLOT_COUNT, SigTab,
};

/// Callout types every new store starts with.
pub const DEFAULT_CALLOUT_TYPES: [&str; 5] = [
    "Normal",
    "All Hands on Deck",
    "Fill Shift",
    "Notification",
    "Notification (No Response)",
];

/// The configuration aggregate for one interactive session.
///
/// Every mutation goes through this type so that the cross-entity invariants
/// hold at all times:
/// - each entry's callout-type map has a key for every known callout type
/// - each entry's callout-reason map has a key for every catalog reason
/// - at most one callout reason is the default, and the default is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigStore {
    hierarchy: HierarchyConfig,
    callout_types: Vec<String>,
    job_classifications: Vec<JobClassification>,
    callout_reasons: Vec<CalloutReason>,
    event_types: Vec<EventType>,
    responses: ResponseStore,
    next_entry_id: u64,
}

impl ConfigStore {
    /// Creates a store with default labels, time zone and callout types and
    /// no entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hierarchy: HierarchyConfig::default(),
            callout_types: DEFAULT_CALLOUT_TYPES.map(String::from).to_vec(),
            job_classifications: Vec::new(),
            callout_reasons: Vec::new(),
            event_types: Vec::new(),
            responses: ResponseStore::new(),
            next_entry_id: 1,
        }
    }

    /// Returns the location hierarchy.
    #[must_use]
    pub const fn hierarchy(&self) -> &HierarchyConfig {
        &self.hierarchy
    }

    /// Returns the known callout types in column order.
    #[must_use]
    pub fn callout_types(&self) -> &[String] {
        &self.callout_types
    }

    /// Returns the job classifications in insertion order.
    #[must_use]
    pub fn job_classifications(&self) -> &[JobClassification] {
        &self.job_classifications
    }

    /// Returns the callout reason catalog.
    #[must_use]
    pub fn callout_reasons(&self) -> &[CalloutReason] {
        &self.callout_reasons
    }

    /// Returns the event types in insertion order.
    #[must_use]
    pub fn event_types(&self) -> &[EventType] {
        &self.event_types
    }

    /// Returns the free-text responses.
    #[must_use]
    pub const fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    // ------------------------------------------------------------------
    // Location hierarchy
    // ------------------------------------------------------------------

    /// Appends a blank location entry.
    ///
    /// The new entry has every known callout type and catalog reason
    /// disabled.
    pub fn add_location_entry(&mut self) -> EntryId {
        let id: EntryId = EntryId::new(self.next_entry_id);
        self.next_entry_id += 1;

        let mut entry: LocationEntry = LocationEntry::new(id);
        for callout_type in &self.callout_types {
            entry.callout_types.insert(callout_type.clone(), false);
        }
        for reason in &self.callout_reasons {
            entry.callout_reasons.insert(reason.id.clone(), false);
        }
        self.hierarchy.entries.push(entry);
        id
    }

    /// Removes the entry at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` if there is no entry at `index`.
    pub fn remove_location_entry(&mut self, index: usize) -> Result<LocationEntry, CoreError> {
        check_index("location entries", index, self.hierarchy.entries.len())?;
        Ok(self.hierarchy.entries.remove(index))
    }

    /// Sets the name of one level of the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no entry at `index`.
    pub fn set_location_level(
        &mut self,
        index: usize,
        level: Level,
        name: String,
    ) -> Result<(), CoreError> {
        self.entry_at_mut(index)?.levels[level.index()] = name;
        Ok(())
    }

    /// Sets the time zone override of the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no entry at `index`.
    pub fn set_location_timezone(&mut self, index: usize, timezone: String) -> Result<(), CoreError> {
        self.entry_at_mut(index)?.timezone = timezone;
        Ok(())
    }

    /// Sets one code slot of the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no entry at `index` or `slot` is not
    /// below 5.
    pub fn set_location_code(
        &mut self,
        index: usize,
        slot: usize,
        code: String,
    ) -> Result<(), CoreError> {
        check_index("location code slots", slot, SLOT_COUNT)?;
        self.entry_at_mut(index)?.codes[slot] = code;
        Ok(())
    }

    /// Sets the callout reasons note of the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no entry at `index`.
    pub fn set_location_reasons_note(&mut self, index: usize, note: String) -> Result<(), CoreError> {
        self.entry_at_mut(index)?.callout_reasons_note = note;
        Ok(())
    }

    /// Renames a hierarchy level.
    pub fn set_level_label(&mut self, level: Level, label: String) {
        self.hierarchy.labels.set(level, label);
    }

    /// Sets the time zone used by entries without an override.
    pub fn set_default_timezone(&mut self, timezone: String) {
        self.hierarchy.default_timezone = timezone;
    }

    /// Returns the position of an entry.
    #[must_use]
    pub fn entry_index(&self, id: EntryId) -> Option<usize> {
        self.hierarchy.entries.iter().position(|entry| entry.id == id)
    }

    fn entry_at_mut(&mut self, index: usize) -> Result<&mut LocationEntry, CoreError> {
        let len: usize = self.hierarchy.entries.len();
        self.hierarchy
            .entries
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange {
                collection: "location entries",
                index,
                len,
            })
    }

    fn complete_entry_mut(&mut self, id: EntryId) -> Result<&mut LocationEntry, CoreError> {
        let entry: &mut LocationEntry = self
            .hierarchy
            .entry_mut(id)
            .ok_or(CoreError::LocationNotFound(id))?;
        if !entry.is_complete() {
            return Err(CoreError::DomainViolation(DomainError::IncompleteLocation(
                id,
            )));
        }
        Ok(entry)
    }

    // ------------------------------------------------------------------
    // Callout types
    // ------------------------------------------------------------------

    /// Adds a callout type column.
    ///
    /// Returns `false` when the type is already known. Every existing entry
    /// gets the new type disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank.
    pub fn add_callout_type(&mut self, name: &str) -> Result<bool, CoreError> {
        let name: &str = name.trim();
        if name.is_empty() {
            return Err(CoreError::DomainViolation(DomainError::InvalidCalloutType(
                String::from("Callout type name cannot be empty"),
            )));
        }
        if self.callout_types.iter().any(|known| known == name) {
            return Ok(false);
        }

        self.callout_types.push(name.to_string());
        for entry in &mut self.hierarchy.entries {
            entry.callout_types.entry(name.to_string()).or_insert(false);
        }
        Ok(true)
    }

    /// Removes the callout type at `index` from the column list and from
    /// every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no callout type at `index`.
    pub fn remove_callout_type(&mut self, index: usize) -> Result<String, CoreError> {
        check_index("callout types", index, self.callout_types.len())?;
        let removed: String = self.callout_types.remove(index);
        for entry in &mut self.hierarchy.entries {
            entry.callout_types.remove(&removed);
        }
        Ok(removed)
    }

    /// Enables or disables a callout type at a location.
    ///
    /// Unknown callout types are added as a new column first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entry has this identifier
    /// - The entry has no Level 4 name
    /// - The callout type name is blank
    pub fn set_callout_type_enabled(
        &mut self,
        entry_id: EntryId,
        callout_type: &str,
        enabled: bool,
    ) -> Result<(), CoreError> {
        self.complete_entry_mut(entry_id)?;
        self.add_callout_type(callout_type)?;
        let entry: &mut LocationEntry = self.complete_entry_mut(entry_id)?;
        entry
            .callout_types
            .insert(callout_type.trim().to_string(), enabled);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Callout reasons
    // ------------------------------------------------------------------

    /// Replaces the callout reason catalog.
    ///
    /// A repeated ID keeps only its first reason. Only the first reason
    /// flagged as default keeps the flag, and a default reason is always used.
    /// Entry reason maps are rebuilt against the new catalog, keeping the
    /// cells of reasons that still exist.
    pub fn replace_callout_reasons(&mut self, mut reasons: Vec<CalloutReason>) {
        let mut seen_ids: BTreeSet<String> = BTreeSet::new();
        reasons.retain(|reason| seen_ids.insert(reason.id.clone()));

        let mut default_seen: bool = false;
        for reason in &mut reasons {
            if reason.default {
                if default_seen {
                    reason.default = false;
                } else {
                    default_seen = true;
                    reason.used = true;
                }
            }
        }

        for entry in &mut self.hierarchy.entries {
            entry
                .callout_reasons
                .retain(|id, _| reasons.iter().any(|reason| &reason.id == id));
            for reason in &reasons {
                entry
                    .callout_reasons
                    .entry(reason.id.clone())
                    .or_insert(false);
            }
        }
        self.callout_reasons = reasons;
    }

    /// Enables or disables a callout reason at a location.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entry has this identifier
    /// - The entry has no Level 4 name
    /// - The reason is not in the catalog
    pub fn set_callout_reason_enabled(
        &mut self,
        entry_id: EntryId,
        reason_id: &str,
        enabled: bool,
    ) -> Result<(), CoreError> {
        if !self.callout_reasons.iter().any(|reason| reason.id == reason_id) {
            return Err(CoreError::CalloutReasonNotFound(reason_id.to_string()));
        }
        let entry: &mut LocationEntry = self.complete_entry_mut(entry_id)?;
        entry
            .callout_reasons
            .insert(reason_id.to_string(), enabled);
        Ok(())
    }

    /// Marks a reason as used or unused.
    ///
    /// Deselecting the default reason also clears the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the reason is not in the catalog.
    pub fn select_callout_reason(&mut self, id: &str, selected: bool) -> Result<(), CoreError> {
        let reason: &mut CalloutReason = self
            .callout_reasons
            .iter_mut()
            .find(|reason| reason.id == id)
            .ok_or_else(|| CoreError::CalloutReasonNotFound(id.to_string()))?;
        reason.used = selected;
        if !selected {
            reason.default = false;
        }
        Ok(())
    }

    /// Marks every reason unused and clears the default.
    pub fn clear_callout_reason_selections(&mut self) {
        for reason in &mut self.callout_reasons {
            reason.used = false;
            reason.default = false;
        }
    }

    /// Makes `id` the default reason.
    ///
    /// Clears the default flag on every other reason and marks this one used.
    /// Returns `false` without changing anything when the ID is not in the
    /// catalog.
    pub fn set_default_callout_reason(&mut self, id: &str) -> bool {
        if !self.callout_reasons.iter().any(|reason| reason.id == id) {
            return false;
        }
        for reason in &mut self.callout_reasons {
            reason.default = reason.id == id;
            if reason.default {
                reason.used = true;
            }
        }
        true
    }

    /// Returns the default reason, if any.
    #[must_use]
    pub fn default_callout_reason(&self) -> Option<&CalloutReason> {
        self.callout_reasons.iter().find(|reason| reason.default)
    }

    /// Returns the used reasons in catalog order.
    pub fn selected_callout_reasons(&self) -> impl Iterator<Item = &CalloutReason> {
        self.callout_reasons.iter().filter(|reason| reason.used)
    }

    /// Filters the catalog by a case-insensitive search on ID or label.
    ///
    /// A blank search matches everything.
    #[must_use]
    pub fn filter_callout_reasons(&self, search: &str, selected_only: bool) -> Vec<&CalloutReason> {
        let needle: String = search.trim().to_lowercase();
        self.callout_reasons
            .iter()
            .filter(|reason| {
                needle.is_empty()
                    || reason.id.to_lowercase().contains(&needle)
                    || reason.label.to_lowercase().contains(&needle)
            })
            .filter(|reason| !selected_only || reason.used)
            .collect()
    }

    // ------------------------------------------------------------------
    // Job classifications
    // ------------------------------------------------------------------

    /// Appends a blank job classification and returns its index.
    pub fn add_job_classification(&mut self) -> usize {
        self.job_classifications.push(JobClassification::default());
        self.job_classifications.len() - 1
    }

    /// Removes the job classification at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no job classification at `index`.
    pub fn remove_job_classification(
        &mut self,
        index: usize,
    ) -> Result<JobClassification, CoreError> {
        check_index("job classifications", index, self.job_classifications.len())?;
        Ok(self.job_classifications.remove(index))
    }

    /// Sets the type of the job classification at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no job classification at `index`.
    pub fn set_job_type(&mut self, index: usize, job_type: JobType) -> Result<(), CoreError> {
        self.job_at_mut(index)?.job_type = job_type;
        Ok(())
    }

    /// Sets the title of the job classification at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no job classification at `index`.
    pub fn set_job_title(&mut self, index: usize, title: String) -> Result<(), CoreError> {
        self.job_at_mut(index)?.title = title;
        Ok(())
    }

    /// Sets one ID slot of the job classification at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no job classification at `index` or
    /// `slot` is not below 5.
    pub fn set_job_id(&mut self, index: usize, slot: usize, id: String) -> Result<(), CoreError> {
        check_index("job classification ID slots", slot, SLOT_COUNT)?;
        self.job_at_mut(index)?.ids[slot] = id;
        Ok(())
    }

    /// Sets the recording verbiage of the job classification at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no job classification at `index`.
    pub fn set_job_recording(&mut self, index: usize, recording: String) -> Result<(), CoreError> {
        self.job_at_mut(index)?.recording = recording;
        Ok(())
    }

    fn job_at_mut(&mut self, index: usize) -> Result<&mut JobClassification, CoreError> {
        let len: usize = self.job_classifications.len();
        self.job_classifications
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange {
                collection: "job classifications",
                index,
                len,
            })
    }

    // ------------------------------------------------------------------
    // Event types
    // ------------------------------------------------------------------

    /// Appends a blank event type and returns its index.
    pub fn add_event_type(&mut self) -> usize {
        self.event_types.push(EventType::default());
        self.event_types.len() - 1
    }

    /// Removes the event type at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no event type at `index`.
    pub fn remove_event_type(&mut self, index: usize) -> Result<EventType, CoreError> {
        check_index("event types", index, self.event_types.len())?;
        Ok(self.event_types.remove(index))
    }

    /// Replaces the event type at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no event type at `index`.
    pub fn update_event_type(&mut self, index: usize, event_type: EventType) -> Result<(), CoreError> {
        check_index("event types", index, self.event_types.len())?;
        self.event_types[index] = event_type;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Free-text responses
    // ------------------------------------------------------------------

    /// Stores a free-text or yes/no response.
    pub fn set_response(&mut self, key: ResponseKey, value: ResponseValue) {
        self.responses.set(key, value);
    }

    /// Returns a stored response.
    #[must_use]
    pub fn response(&self, key: &ResponseKey) -> Option<&ResponseValue> {
        self.responses.get(key)
    }

    /// Renders the location hierarchy as an indented tree.
    #[must_use]
    pub fn hierarchy_preview(&self) -> String {
        crate::preview::hierarchy_preview(&self.hierarchy)
    }

    // ------------------------------------------------------------------
    // Progress
    // ------------------------------------------------------------------

    /// Returns whether a tab has any answer.
    #[must_use]
    pub fn is_tab_started(&self, tab: SigTab) -> bool {
        let modeled: bool = match tab {
            SigTab::LocationHierarchy => self
                .hierarchy
                .entries
                .iter()
                .any(LocationEntry::is_populated),
            SigTab::CalloutTypeMatrix => self
                .hierarchy
                .complete_entries()
                .any(|entry| entry.callout_types.values().any(|enabled| *enabled)),
            SigTab::CalloutReasonMatrix => self.hierarchy.complete_entries().any(|entry| {
                entry.callout_reasons.values().any(|enabled| *enabled)
                    || !entry.callout_reasons_note.trim().is_empty()
            }),
            SigTab::JobClassifications => self
                .job_classifications
                .iter()
                .any(JobClassification::has_title),
            SigTab::CalloutReasons => self.callout_reasons.iter().any(|reason| reason.used),
            SigTab::EventTypes => self.event_types.iter().any(EventType::is_populated),
            _ => false,
        };
        modeled || self.responses.has_answers_for(tab.as_str())
    }

    /// Returns how many tabs have been started.
    #[must_use]
    pub fn progress(&self) -> Progress {
        let completed: usize = SigTab::ALL
            .into_iter()
            .filter(|tab| self.is_tab_started(*tab))
            .count();
        Progress {
            completed,
            total: SigTab::ALL.len(),
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Questionnaire completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Tabs with at least one answer.
    pub completed: usize,
    /// Number of tabs.
    pub total: usize,
}

impl Progress {
    /// Completion as a whole percentage, rounded down.
    #[must_use]
    pub const fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }
}
