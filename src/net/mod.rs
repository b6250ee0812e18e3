//! Data loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backend; `catalog` stands in for a fetch by resolving the
//! embedded seed after a fixed delay.

pub mod catalog;
