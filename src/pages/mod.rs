//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page only lays out the route; rendering details live in `components`.

pub mod dashboard;
pub mod home;
pub mod login;
