//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page regions while reading/writing shared state from
//! Leptos context providers.

pub mod hero_slider;
pub mod product_card;
pub mod product_grid;
pub mod search_bar;
pub mod theme_toggle;
