//! Greeting, logout button and email for the signed-in user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonSize};
use crate::net::service::Services;
#[cfg(feature = "hydrate")]
use crate::state::profile::load_profile_for_mount;
use crate::state::profile::ProfileLoad;
use crate::state::session::logout;
#[cfg(feature = "hydrate")]
use crate::util::mount::MountToken;

/// Loads the profile once per mount and always offers "Logout".
///
/// The loading placeholder stays up until the profile is loaded; a missing
/// session or row leaves it in place.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let services = expect_context::<Services>();
    let load = RwSignal::new(ProfileLoad::Initial);
    let redirect = RwSignal::new(None::<String>);

    // Fetch on mount; skip results that land after unmount.
    #[cfg(feature = "hydrate")]
    {
        let token = MountToken::new().bind_to_owner();
        let services = services.clone();
        load.set(ProfileLoad::Loading);
        leptos::task::spawn_local(async move {
            load_profile_for_mount(services.session.as_ref(), services.profiles.as_ref(), &token, |r| load.set(r))
                .await;
        });
    }

    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = redirect.get() {
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_logout = Callback::new(move |()| {
        let services = services.clone();
        leptos::task::spawn_local(async move {
            let _ = logout(services.session.as_ref(), |path: &str| redirect.set(Some(path.to_owned()))).await;
        });
    });

    view! {
        <div class="flex flex-col items-start gap-4">
            <p class="text-sm font-light">{move || load.with(ProfileLoad::heading)}</p>
            <div class="flex flex-col text-center w-full gap-1">
                <Button size=ButtonSize::Full on_click=on_logout>
                    "Logout"
                </Button>
                {move || {
                    load.with(|l| l.email().zip(l.identity()))
                        .map(|(email, identity)| view! { <p class="text-xs font-light" title=identity>{email}</p> })
                }}
            </div>
        </div>
    }
}
