//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read backend handles from Leptos context and delegate every
//! decision to `state`; `button` is the shared styling primitive.

pub mod auth_button;
pub mod button;
pub mod logout_button;
