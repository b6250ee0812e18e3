//! Theme preference storage and document application.
//!
//! Reads the stored preference from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and applies a `data-theme` attribute to
//! the `<html>` element. Requires a browser environment; native builds no-op.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A missing or failing `localStorage` is logged
//! and otherwise treated as "no preference stored".

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::state::theme::{Theme, ThemeState};

#[cfg(feature = "csr")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Durable key/value storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// The browser's per-origin `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                log::warn!("theme: localStorage unavailable, preference not saved");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("theme: failed to save preference {value}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// The stored preference, if one exists and is valid.
pub fn stored_theme(store: &impl PreferenceStore, key: &str) -> Option<Theme> {
    let raw = store.load(key)?;
    let theme = Theme::parse(&raw);
    if theme.is_none() {
        log::debug!("theme: ignoring unknown stored value {raw:?}");
    }
    theme
}

/// Resolve the starting theme and apply it to the document.
pub fn initial_state(store: &impl PreferenceStore, key: &str, os_prefers_dark: bool) -> ThemeState {
    let state = ThemeState::resolve(stored_theme(store, key), os_prefers_dark);
    apply(state.theme);
    state
}

/// Flip the theme, persist the new value, and apply it.
pub fn toggle(state: &mut ThemeState, store: &mut impl PreferenceStore, key: &str) -> Theme {
    let next = state.toggle();
    store.save(key, next.as_str());
    apply(next);
    log::info!("theme: switched to {}", next.as_str());
    next
}

/// React to an OS color-scheme change. Returns whether the theme changed.
pub fn follow_os(state: &mut ThemeState, store: &impl PreferenceStore, key: &str, os_prefers_dark: bool) -> bool {
    let changed = state.follow_os(stored_theme(store, key), os_prefers_dark);
    if changed {
        apply(state.theme);
    }
    changed
}

/// Whether the OS currently reports a dark color scheme.
pub fn os_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if el.set_attribute("data-theme", theme.as_str()).is_err() {
                log::warn!("theme: could not set data-theme");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Call `on_change` with the new OS preference whenever the color scheme changes.
///
/// The listener lives for the rest of the page.
pub fn watch_os_scheme(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
            log::debug!("theme: matchMedia unavailable, not following OS changes");
            return;
        };
        let query = mq.clone();
        let cb = Closure::<dyn Fn()>::new(move || on_change(query.matches()));
        if mq.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()).is_err() {
            log::warn!("theme: could not listen for color-scheme changes");
            return;
        }
        cb.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
