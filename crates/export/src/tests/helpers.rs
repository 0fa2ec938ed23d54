// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sig::{ConfigStore, DEFAULT_CALLOUT_TYPES};
use sig_domain::{CalloutReason, EntryId, Level};

/// Adds an entry with every level filled in and returns its identifier.
pub fn add_entry(store: &mut ConfigStore, names: [&str; 4], codes: &[&str]) -> EntryId {
    let id: EntryId = store.add_location_entry();
    let index: usize = store.entry_index(id).unwrap();
    for (level, name) in Level::ALL.into_iter().zip(names) {
        store
            .set_location_level(index, level, String::from(name))
            .unwrap();
    }
    for (slot, code) in codes.iter().enumerate() {
        store
            .set_location_code(index, slot, (*code).to_string())
            .unwrap();
    }
    id
}

/// The Acme/East/Ops/Plant1 store: codes A1 and A2, time zone ET, Normal
/// enabled and Fill Shift disabled.
pub fn create_plant_store() -> ConfigStore {
    let mut store: ConfigStore = ConfigStore::new();
    let id: EntryId = add_entry(&mut store, ["Acme", "East", "Ops", "Plant1"], &["A1", "A2"]);
    store.set_location_timezone(0, String::from("ET")).unwrap();
    store.set_callout_type_enabled(id, "Normal", true).unwrap();
    store.set_callout_type_enabled(id, "Fill Shift", false).unwrap();
    assert_eq!(store.callout_types(), DEFAULT_CALLOUT_TYPES.as_slice());
    store
}

pub fn create_test_reasons() -> Vec<CalloutReason> {
    vec![
        CalloutReason::new("1008", "Odor", false, false, "Odor complaint"),
        CalloutReason::new("1018", "Carbon Monoxide", false, false, "CO alarm"),
        CalloutReason::new("1023", "Fire", false, false, "Fire reported"),
    ]
}
