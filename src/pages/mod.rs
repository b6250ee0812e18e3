//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The catalog page owns load orchestration and delegates rendering details
//! to `components`.

pub mod catalog;
