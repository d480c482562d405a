//! In-memory backend doubles for async view-logic tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use time::macros::datetime;

use super::service::{ProfileStore, ServiceError, SessionService};
use super::types::{SessionClaims, UserProfile, UserRole};

pub(crate) fn claims(sub: &str) -> SessionClaims {
    SessionClaims { sub: sub.to_owned(), email: None, role: None }
}

pub(crate) fn profile(id: &str, first_name: &str, email: &str) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        email: email.to_owned(),
        first_name: first_name.to_owned(),
        last_name: "Lopez".to_owned(),
        created_at: datetime!(2024-05-01 10:00 UTC),
        role: UserRole::Employee,
    }
}

pub(crate) struct FakeSession {
    pub claims: Result<Option<SessionClaims>, ServiceError>,
    pub user_id: Result<Option<String>, ServiceError>,
    pub sign_out: Result<(), ServiceError>,
    pub sign_out_calls: AtomicUsize,
}

impl FakeSession {
    pub fn signed_in(user_id: &str) -> Self {
        Self {
            claims: Ok(Some(claims(user_id))),
            user_id: Ok(Some(user_id.to_owned())),
            sign_out: Ok(()),
            sign_out_calls: AtomicUsize::new(0),
        }
    }

    pub fn anonymous() -> Self {
        Self { claims: Ok(None), user_id: Ok(None), sign_out: Ok(()), sign_out_calls: AtomicUsize::new(0) }
    }

    pub fn failing(err: ServiceError) -> Self {
        Self {
            claims: Err(err.clone()),
            user_id: Err(err.clone()),
            sign_out: Err(err),
            sign_out_calls: AtomicUsize::new(0),
        }
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl SessionService for FakeSession {
    async fn claims(&self) -> Result<Option<SessionClaims>, ServiceError> {
        self.claims.clone()
    }

    async fn current_user_id(&self) -> Result<Option<String>, ServiceError> {
        self.user_id.clone()
    }

    async fn sign_out(&self) -> Result<(), ServiceError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_out.clone()
    }
}

pub(crate) struct FakeProfiles {
    pub result: Result<Option<UserProfile>, ServiceError>,
    pub lookups: Mutex<Vec<String>>,
}

impl FakeProfiles {
    pub fn returning(result: Result<Option<UserProfile>, ServiceError>) -> Self {
        Self { result, lookups: Mutex::new(Vec::new()) }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl ProfileStore for FakeProfiles {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<UserProfile>, ServiceError> {
        self.lookups.lock().unwrap().push(user_id.to_owned());
        self.result.clone()
    }
}
