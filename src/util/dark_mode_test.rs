#![cfg(not(feature = "csr"))]

use std::collections::HashMap;

use super::*;

const KEY: &str = "theme";

#[derive(Default)]
struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

#[test]
fn browser_store_is_empty_outside_the_browser() {
    let mut store = BrowserStore;
    store.save(KEY, "dark");
    assert_eq!(store.load(KEY), None);
}

#[test]
fn os_preference_is_light_outside_the_browser() {
    assert!(!os_prefers_dark());
}

#[test]
fn unknown_stored_value_counts_as_absent() {
    let store = MemoryStore::with(KEY, "sepia");
    assert_eq!(stored_theme(&store, KEY), None);
    assert_eq!(initial_state(&store, KEY, true).theme, Theme::Dark);
}

#[test]
fn stored_value_wins_over_os() {
    let store = MemoryStore::with(KEY, "light");
    assert_eq!(initial_state(&store, KEY, true).theme, Theme::Light);
}

#[test]
fn toggle_persists_unconditionally() {
    let mut store = MemoryStore::default();
    let mut state = initial_state(&store, KEY, false);
    assert_eq!(toggle(&mut state, &mut store, KEY), Theme::Dark);
    assert_eq!(store.load(KEY).as_deref(), Some("dark"));
}

#[test]
fn double_toggle_restores_state_and_persisted_value() {
    let mut store = MemoryStore::with(KEY, "dark");
    let mut state = initial_state(&store, KEY, false);
    toggle(&mut state, &mut store, KEY);
    toggle(&mut state, &mut store, KEY);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(store.load(KEY).as_deref(), Some("dark"));
}

#[test]
fn os_change_followed_until_user_toggles() {
    let mut store = MemoryStore::default();
    let mut state = initial_state(&store, KEY, false);
    assert!(follow_os(&mut state, &store, KEY, true));
    assert_eq!(state.theme, Theme::Dark);

    toggle(&mut state, &mut store, KEY);
    assert!(!follow_os(&mut state, &store, KEY, true));
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn os_change_followed_again_after_storage_cleared() {
    let mut store = MemoryStore::default();
    let mut state = initial_state(&store, KEY, false);
    toggle(&mut state, &mut store, KEY);
    store.entries.clear();
    assert!(follow_os(&mut state, &store, KEY, false));
    assert_eq!(state.theme, Theme::Light);
}
