//! Utility helpers shared across page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, media queries, page
//! visibility, timers) from component logic to keep state transitions
//! testable natively.

pub mod dark_mode;
pub mod timers;
pub mod visibility;
