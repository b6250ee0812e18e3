//! Client-side page state.
//!
//! DESIGN
//! ======
//! State is split by controller (`catalog`, `theme`, `slideshow`) plus the
//! search input policy, so each component depends on one small model and all
//! transitions are testable without a browser.

pub mod catalog;
pub mod search;
pub mod slideshow;
pub mod theme;
