// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ConfigStore;
use sig_domain::{CalloutReason, EntryId, Level};

pub fn create_test_reasons() -> Vec<CalloutReason> {
    vec![
        CalloutReason::new("1008", "Odor", false, false, "Odor complaint"),
        CalloutReason::new("1018", "Carbon Monoxide", false, false, "CO alarm"),
        CalloutReason::new("1023", "Fire", false, false, "Fire reported"),
    ]
}

/// Adds an entry and fills in every level, returning its identifier.
pub fn add_complete_entry(store: &mut ConfigStore, names: [&str; 4]) -> EntryId {
    let id: EntryId = store.add_location_entry();
    let index: usize = store.entry_index(id).unwrap();
    for (level, name) in Level::ALL.into_iter().zip(names) {
        store
            .set_location_level(index, level, String::from(name))
            .unwrap();
    }
    id
}

/// A store holding the Acme/East/Ops/Plant1 entry with codes A1 and A2.
pub fn create_test_store() -> ConfigStore {
    let mut store: ConfigStore = ConfigStore::new();
    store.replace_callout_reasons(create_test_reasons());
    add_complete_entry(&mut store, ["Acme", "East", "Ops", "Plant1"]);
    store.set_location_code(0, 0, String::from("A1")).unwrap();
    store.set_location_code(0, 1, String::from("A2")).unwrap();
    store.set_location_timezone(0, String::from("ET")).unwrap();
    store
}
