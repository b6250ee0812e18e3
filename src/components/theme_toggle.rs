//! Light/dark toggle button.

use leptos::prelude::*;

use crate::config::CatalogConfig;
use crate::state::theme::ThemeState;
use crate::util::dark_mode::{self, BrowserStore};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let key = expect_context::<CatalogConfig>().theme_storage_key;

    let on_click = move |_| {
        let mut store = BrowserStore;
        theme.update(|state| {
            dark_mode::toggle(state, &mut store, &key);
        });
    };

    view! {
        <button id="themeToggle" class="btn theme-toggle" on:click=on_click title="Toggle dark mode">
            <span class="theme-icon">{move || theme.get().theme.toggle_glyph()}</span>
        </button>
    }
}
