//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::config::CatalogConfig;
use crate::pages::catalog::CatalogPage;
use crate::state::catalog::CatalogState;
use crate::state::search::SearchState;
use crate::state::theme::ThemeState;
use crate::util::dark_mode::{self, BrowserStore};
use crate::util::timers::PageTimers;

/// Root application component.
///
/// Constructs every controller's state once at page start and provides it as
/// context; nothing here is torn down before the page unloads.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = CatalogConfig::embedded();
    let key = config.theme_storage_key.clone();
    let theme = RwSignal::new(dark_mode::initial_state(&BrowserStore, &key, dark_mode::os_prefers_dark()));
    dark_mode::watch_os_scheme(move |prefers_dark| {
        theme.maybe_update(|state| dark_mode::follow_os(state, &BrowserStore, &key, prefers_dark));
    });

    provide_context(config);
    provide_context(theme);
    provide_context(RwSignal::new(CatalogState::default()));
    provide_context(RwSignal::new(SearchState::default()));
    provide_context(StoredValue::new_local(PageTimers::default()));

    view! {
        <Stylesheet id="catalog" href="/styles.css"/>
        <Title text="5PS Shoes"/>
        <CatalogPage/>
    }
}
