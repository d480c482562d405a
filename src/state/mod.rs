//! View state and the async flows that drive it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components stay thin: they call into these modules for every decision and
//! only own the Leptos signals that hold the results.

pub mod profile;
pub mod session;
