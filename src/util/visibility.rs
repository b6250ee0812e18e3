//! Page visibility tracking.
//!
//! Wraps the document `visibilitychange` event so components can pause work
//! while the tab is hidden. Requires a browser environment; native builds no-op.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Call `on_change(hidden)` whenever the tab is hidden or shown again.
///
/// The listener lives for the rest of the page.
pub fn watch_visibility(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let target = document.clone();
        let cb = Closure::<dyn Fn()>::new(move || on_change(target.hidden()));
        if document
            .add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("visibility: could not listen for visibilitychange");
            return;
        }
        cb.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = on_change;
    }
}
