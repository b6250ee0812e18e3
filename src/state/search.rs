//! Search box input policy.
//!
//! Explicit submits (button, Enter) always filter. Live typing goes through a
//! debounce and only acts once the query is long enough to be useful.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Raw contents of the search box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub input: String,
}

/// Outcome of a search trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    Filter(String),
    ShowAll,
    /// Too short to act on; leave the current results alone.
    Ignore,
}

pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Action for an explicit submit.
pub fn submit_action(raw: &str) -> SearchAction {
    let query = normalize_query(raw);
    if query.is_empty() {
        SearchAction::ShowAll
    } else {
        SearchAction::Filter(query)
    }
}

/// Action once the debounce window has elapsed on live input.
pub fn debounced_action(raw: &str, min_len: usize) -> SearchAction {
    let query = normalize_query(raw);
    let len = query.chars().count();
    if len == 0 {
        SearchAction::ShowAll
    } else if len >= min_len {
        SearchAction::Filter(query)
    } else {
        SearchAction::Ignore
    }
}
