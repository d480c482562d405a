//! Route paths shared by views and the router.

pub const HOME: &str = "/";
pub const DASHBOARD: &str = "/dashboard";
pub const LOGIN: &str = "/auth/login";
