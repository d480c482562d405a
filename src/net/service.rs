//! Async seams between views and the external auth/profile backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<Option<_>, ServiceError>` so callers can tell
//! "nothing there" apart from "the request failed". Views then decide how to
//! collapse the two.

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{SessionClaims, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("backend unavailable")]
    Unavailable,
}

/// Authentication state held by the backend.
///
/// Futures are `?Send`: browser fetches run on the single-threaded event loop.
#[async_trait(?Send)]
pub trait SessionService: Send + Sync {
    /// Identity claims for the current session, if any.
    async fn claims(&self) -> Result<Option<SessionClaims>, ServiceError>;

    /// Id of the signed-in user, if any.
    async fn current_user_id(&self) -> Result<Option<String>, ServiceError>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), ServiceError>;
}

/// Persisted user profiles keyed by user id.
#[async_trait(?Send)]
pub trait ProfileStore: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<UserProfile>, ServiceError>;
}

/// Backend handles shared with components through Leptos context.
#[derive(Clone)]
pub struct Services {
    pub session: Arc<dyn SessionService>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl Services {
    pub fn new(session: Arc<dyn SessionService>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { session, profiles }
    }

    /// Services that fail every call, used when the backend is not configured.
    pub fn unavailable() -> Self {
        let backend = Arc::new(NoBackend);
        Self { session: backend.clone(), profiles: backend }
    }
}

struct NoBackend;

#[async_trait(?Send)]
impl SessionService for NoBackend {
    async fn claims(&self) -> Result<Option<SessionClaims>, ServiceError> {
        Err(ServiceError::Unavailable)
    }

    async fn current_user_id(&self) -> Result<Option<String>, ServiceError> {
        Err(ServiceError::Unavailable)
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        Err(ServiceError::Unavailable)
    }
}

#[async_trait(?Send)]
impl ProfileStore for NoBackend {
    async fn find_by_id(&self, _user_id: &str) -> Result<Option<UserProfile>, ServiceError> {
        Err(ServiceError::Unavailable)
    }
}
