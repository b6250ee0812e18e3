//! Search box with button, Enter, and debounced live filtering.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

use crate::config::CatalogConfig;
use crate::state::catalog::CatalogState;
use crate::state::search::{SearchAction, SearchState, debounced_action, submit_action};
use crate::util::timers::{SharedTimers, TimerKind};

/// Apply a search outcome to the catalog; `ShowAll` also clears the input.
pub fn run_search(catalog: RwSignal<CatalogState>, search: RwSignal<SearchState>, action: SearchAction) {
    if action == SearchAction::ShowAll {
        search.update(|s| s.input.clear());
    }
    catalog.maybe_update(|c| c.apply_search(&action));
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let search = expect_context::<RwSignal<SearchState>>();
    let timers = expect_context::<SharedTimers>();
    let config = expect_context::<CatalogConfig>();
    let debounce_ms = config.search_debounce_ms;
    let min_len = config.min_live_query_len;

    let submit = move || {
        timers.update_value(|t| {
            t.cancel(TimerKind::SearchDebounce);
        });
        let action = submit_action(&search.get_untracked().input);
        run_search(catalog, search, action);
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        search.update(|s| s.input = value);
        timers.update_value(|t| {
            t.schedule_timeout(TimerKind::SearchDebounce, debounce_ms, move || {
                let action = debounced_action(&search.get_untracked().input, min_len);
                run_search(catalog, search, action);
            });
        });
    };

    view! {
        <div class="search-container">
            <input
                id="searchInput"
                class="search-input"
                type="search"
                placeholder="Search shoes..."
                aria-label="Search products"
                prop:value=move || search.get().input
                on:input=on_input
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <button id="searchButton" class="search-button" on:click=move |_| submit() aria-label="Search">
                "Search"
            </button>
        </div>
    }
}
