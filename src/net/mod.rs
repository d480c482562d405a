//! Networking modules for the session service and profile store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `service` defines the async seams views depend on, `supabase` talks to
//! the hosted backend over REST, and `types` defines the shared wire schema.

#[cfg(test)]
pub(crate) mod fake;
pub mod service;
pub mod supabase;
pub mod types;
