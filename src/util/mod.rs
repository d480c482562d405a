//! Utility helpers shared across view modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate component-lifecycle concerns from view logic to
//! improve reuse and testability.

pub mod mount;
