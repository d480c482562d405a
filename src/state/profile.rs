//! Profile load state for the logout/profile control.
//!
//! Every load ends in a terminal state: `Loaded`, `Missing` (no session or
//! no row) or `Failed`. Only `Loaded` changes what is rendered; the others
//! keep the loading placeholder.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::service::{ProfileStore, ServiceError, SessionService};
use crate::net::types::UserProfile;
use crate::util::mount::MountToken;

pub const LOADING_TEXT: &str = "Loading...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileLoad {
    /// No fetch attempted yet.
    #[default]
    Initial,
    Loading,
    Loaded(UserProfile),
    /// No signed-in user, or no profile row for them.
    Missing,
    Failed(ServiceError),
}

impl ProfileLoad {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Missing | Self::Failed(_))
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Self::Loaded(p) => Some(p),
            _ => None,
        }
    }

    /// Greeting line: `"Hey, {first_name}!"` once loaded, the placeholder otherwise.
    pub fn heading(&self) -> String {
        self.profile()
            .map_or_else(|| LOADING_TEXT.to_owned(), |p| format!("Hey, {}!", p.first_name))
    }

    /// Hover text for the email line: full name and role.
    pub fn identity(&self) -> Option<String> {
        self.profile().map(|p| format!("{} ({})", p.full_name(), p.role.as_str()))
    }

    /// Email shown under the logout button, only once loaded.
    pub fn email(&self) -> Option<String> {
        self.profile().map(|p| p.email.clone())
    }
}

/// Look up the signed-in user's id, then their profile row.
pub async fn load_profile<S, P>(session: &S, profiles: &P) -> ProfileLoad
where
    S: SessionService + ?Sized,
    P: ProfileStore + ?Sized,
{
    let user_id = match session.current_user_id().await {
        Ok(Some(id)) => id,
        Ok(None) => {
            log::debug!("no signed-in user, profile not loaded");
            return ProfileLoad::Missing;
        }
        Err(e) => {
            log::debug!("current user lookup failed: {e}");
            return ProfileLoad::Failed(e);
        }
    };

    match profiles.find_by_id(&user_id).await {
        Ok(Some(profile)) => ProfileLoad::Loaded(profile),
        Ok(None) => {
            log::debug!("no profile row for user {user_id}");
            ProfileLoad::Missing
        }
        Err(e) => {
            log::debug!("profile lookup for user {user_id} failed: {e}");
            ProfileLoad::Failed(e)
        }
    }
}

/// Run [`load_profile`] for a mounted view and apply the result only while
/// `token` is live. Returns whether the result was applied.
pub async fn load_profile_for_mount<S, P>(
    session: &S,
    profiles: &P,
    token: &MountToken,
    apply: impl FnOnce(ProfileLoad),
) -> bool
where
    S: SessionService + ?Sized,
    P: ProfileStore + ?Sized,
{
    let result = load_profile(session, profiles).await;
    debug_assert!(result.is_terminal());
    let applied = token.commit(result, apply);
    if !applied {
        log::debug!("profile settled after unmount, dropped");
    }
    applied
}
