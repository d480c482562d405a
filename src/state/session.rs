//! Session-presence decisions: which button group to show, and sign-out.
//!
//! ERROR HANDLING
//! ==============
//! A failed claims lookup is treated as "no session" (fail-open to the
//! anonymous group). Sign-out failures are returned to the caller and logged,
//! but never block the redirect to the login route.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::components::button::ButtonVariant;
use crate::net::service::{ServiceError, SessionService};
use crate::net::types::SessionClaims;
use crate::routes;

/// The two mutually exclusive renderings of the auth status control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionVariant {
    Authenticated,
    Anonymous,
}

/// One link rendered as a button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    pub href: &'static str,
    pub variant: ButtonVariant,
}

const REQUEST_DEMO: NavAction = NavAction { label: "Request a demo", href: routes::HOME, variant: ButtonVariant::Default };

impl SessionVariant {
    pub fn from_claims(result: &Result<Option<SessionClaims>, ServiceError>) -> Self {
        match result {
            Ok(Some(_)) => Self::Authenticated,
            Ok(None) | Err(_) => Self::Anonymous,
        }
    }

    pub fn actions(self) -> [NavAction; 2] {
        let primary = match self {
            Self::Authenticated => {
                NavAction { label: "Go dashboard", href: routes::DASHBOARD, variant: ButtonVariant::Outline }
            }
            Self::Anonymous => NavAction { label: "Sign in", href: routes::LOGIN, variant: ButtonVariant::Outline },
        };
        [primary, REQUEST_DEMO]
    }
}

/// Ask the session service for claims and pick the variant to render.
pub async fn resolve_session_variant<S>(session: &S) -> SessionVariant
where
    S: SessionService + ?Sized,
{
    let result = session.claims().await;
    if let Err(e) = &result {
        log::debug!("claims lookup failed, rendering anonymous controls: {e}");
    }
    SessionVariant::from_claims(&result)
}

/// Fire-and-forget navigation to a route path.
///
/// Implemented for any `FnOnce(&str)`, so views pass a closure over the
/// router and tests pass one that records the path.
pub trait Navigator {
    fn navigate_to(self, path: &str);
}

impl<F> Navigator for F
where
    F: FnOnce(&str),
{
    fn navigate_to(self, path: &str) {
        self(path);
    }
}

/// End the session, then navigate to the login route no matter the outcome.
pub async fn logout<S, N>(session: &S, navigator: N) -> Result<(), ServiceError>
where
    S: SessionService + ?Sized,
    N: Navigator,
{
    let outcome = session.sign_out().await;
    if let Err(e) = &outcome {
        log::warn!("sign-out failed, redirecting anyway: {e}");
    }
    navigator.navigate_to(routes::LOGIN);
    outcome
}
