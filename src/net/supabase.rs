//! REST client for a Supabase-compatible auth + profile backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the access
//! token read from the session persisted in `localStorage`.
//! Server-side (SSR): every call resolves to "no session" since the
//! browser-held token is not visible during server rendering.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use async_trait::async_trait;

use super::service::{ProfileStore, ServiceError, SessionService};
#[cfg(feature = "hydrate")]
use super::types::AuthUser;
use super::types::{SessionClaims, UserProfile};
use crate::config::BackendConfig;

#[cfg(any(test, feature = "hydrate"))]
const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/user")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(base: &str, user_id: &str) -> String {
    // The id lands inside a PostgREST filter value.
    let user_id = urlencoding::encode(user_id);
    format!("{base}/rest/v1/users?id=eq.{user_id}&select=*")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// How a response status maps onto the `Result<Option<_>>` contract.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusOutcome {
    Body,
    Empty,
    Failed(u16),
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16, empty_on: &[u16]) -> StatusOutcome {
    if (200..300).contains(&status) {
        StatusOutcome::Body
    } else if empty_on.contains(&status) {
        StatusOutcome::Empty
    } else {
        StatusOutcome::Failed(status)
    }
}

/// Expired or revoked tokens mean "no session".
#[cfg(any(test, feature = "hydrate"))]
const NO_SESSION_STATUSES: &[u16] = &[401, 403];

/// Single-object selects answer 406 when no row matched.
#[cfg(any(test, feature = "hydrate"))]
const NO_ROW_STATUSES: &[u16] = &[404, 406];

/// Extract the access token from a persisted session blob.
///
/// Accepts both the flat layout (`{"access_token": ...}`) and the legacy
/// nested one (`{"currentSession": {"access_token": ...}}`).
#[cfg(any(test, feature = "hydrate"))]
fn parse_stored_access_token(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let token = value
        .get("access_token")
        .or_else(|| value.get("currentSession").and_then(|s| s.get("access_token")))?
        .as_str()?;
    if token.is_empty() {
        return None;
    }
    Some(token.to_owned())
}

/// What sign-out has to do for the persisted session blob.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Clone, PartialEq, Eq)]
enum SignOutPlan {
    /// No blob stored.
    Nothing,
    /// Blob present but holds no usable token.
    ClearOnly,
    Revoke(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_out_plan(stored: Option<&str>) -> SignOutPlan {
    match stored {
        None => SignOutPlan::Nothing,
        Some(raw) => parse_stored_access_token(raw).map_or(SignOutPlan::ClearOnly, SignOutPlan::Revoke),
    }
}

/// Session service and profile store backed by one Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    config: BackendConfig,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
impl SupabaseClient {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn stored_session(&self) -> Option<String> {
        Self::storage()?.get_item(&self.config.storage_key).ok().flatten()
    }

    fn access_token(&self) -> Option<String> {
        parse_stored_access_token(&self.stored_session()?)
    }

    fn clear_stored_session(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.config.storage_key);
        }
    }

    async fn fetch_auth_user(&self) -> Result<Option<AuthUser>, ServiceError> {
        let Some(token) = self.access_token() else {
            return Ok(None);
        };
        let resp = gloo_net::http::Request::get(&user_endpoint(&self.config.url))
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        match classify_status(resp.status(), NO_SESSION_STATUSES) {
            StatusOutcome::Body => resp
                .json::<AuthUser>()
                .await
                .map(Some)
                .map_err(|e| ServiceError::Decode(e.to_string())),
            StatusOutcome::Empty => Ok(None),
            StatusOutcome::Failed(status) => Err(ServiceError::Status(status)),
        }
    }
}

#[async_trait(?Send)]
impl SessionService for SupabaseClient {
    async fn claims(&self) -> Result<Option<SessionClaims>, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            Ok(self.fetch_auth_user().await?.map(SessionClaims::from))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    async fn current_user_id(&self) -> Result<Option<String>, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            Ok(self.fetch_auth_user().await?.map(|u| u.id))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let token = match sign_out_plan(self.stored_session().as_deref()) {
                SignOutPlan::Nothing => return Ok(()),
                SignOutPlan::ClearOnly => {
                    self.clear_stored_session();
                    return Ok(());
                }
                SignOutPlan::Revoke(token) => token,
            };
            let sent = gloo_net::http::Request::post(&logout_endpoint(&self.config.url))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &bearer(&token))
                .send()
                .await;
            // The local session is dropped even when revocation fails.
            self.clear_stored_session();
            let resp = sent.map_err(|e| ServiceError::Network(e.to_string()))?;
            match classify_status(resp.status(), NO_SESSION_STATUSES) {
                StatusOutcome::Body | StatusOutcome::Empty => Ok(()),
                StatusOutcome::Failed(status) => Err(ServiceError::Status(status)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl ProfileStore for SupabaseClient {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<UserProfile>, ServiceError> {
        #[cfg(feature = "hydrate")]
        {
            let token = self.access_token().unwrap_or_else(|| self.config.anon_key.clone());
            let resp = gloo_net::http::Request::get(&profile_endpoint(&self.config.url, user_id))
                .header("apikey", &self.config.anon_key)
                .header("Authorization", &bearer(&token))
                .header("Accept", SINGLE_OBJECT_ACCEPT)
                .send()
                .await
                .map_err(|e| ServiceError::Network(e.to_string()))?;
            match classify_status(resp.status(), NO_ROW_STATUSES) {
                StatusOutcome::Body => resp
                    .json::<UserProfile>()
                    .await
                    .map(Some)
                    .map_err(|e| ServiceError::Decode(e.to_string())),
                StatusOutcome::Empty => Ok(None),
                StatusOutcome::Failed(status) => Err(ServiceError::Status(status)),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Ok(None)
        }
    }
}
