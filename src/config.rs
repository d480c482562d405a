//! Backend connection settings baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so settings are read with
//! `option_env!` when the crate is compiled and validated once on startup.
//! The validated config is provided to components through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "auth-views.session";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {var}")]
    Missing { var: &'static str },
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}

/// Location and public credentials of the auth/profile backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without a trailing slash.
    pub url: String,
    /// Public (anon) API key sent with every request.
    pub anon_key: String,
    /// `localStorage` key holding the persisted session JSON.
    pub storage_key: String,
}

impl BackendConfig {
    /// Build config from build-time environment variables.
    ///
    /// Required:
    /// - `AUTH_BACKEND_URL`
    /// - `AUTH_BACKEND_ANON_KEY`
    ///
    /// Optional:
    /// - `AUTH_STORAGE_KEY`: default [`DEFAULT_STORAGE_KEY`]
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("AUTH_BACKEND_URL"),
            option_env!("AUTH_BACKEND_ANON_KEY"),
            option_env!("AUTH_STORAGE_KEY"),
        )
    }

    pub fn from_vars(
        url: Option<&str>,
        anon_key: Option<&str>,
        storage_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = non_empty(url).ok_or(ConfigError::Missing { var: "AUTH_BACKEND_URL" })?;
        let anon_key = non_empty(anon_key).ok_or(ConfigError::Missing { var: "AUTH_BACKEND_ANON_KEY" })?;
        let storage_key = non_empty(storage_key).unwrap_or(DEFAULT_STORAGE_KEY);

        Ok(Self {
            url: parse_base_url(url)?,
            anon_key: anon_key.to_owned(),
            storage_key: storage_key.to_owned(),
        })
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| ConfigError::InvalidUrl(raw.to_owned()))?;
    if host.is_empty() {
        return Err(ConfigError::InvalidUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}
