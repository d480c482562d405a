//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::button::ButtonTheme;
use crate::config::BackendConfig;
use crate::net::service::Services;
use crate::net::supabase::SupabaseClient;
use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Backend handles for the configured project, or failing stubs if unset.
pub fn services_from_build_env() -> Services {
    match BackendConfig::from_build_env() {
        Ok(config) => {
            let client = Arc::new(SupabaseClient::new(config));
            log::info!("auth backend: {}", client.config().url);
            Services::new(client.clone(), client)
        }
        Err(e) => {
            log::error!("backend not configured, auth views will render signed out: {e}");
            Services::unavailable()
        }
    }
}

/// Root application component.
///
/// Provides backend services and the button theme, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(services_from_build_env());
    provide_context(ButtonTheme::DEFAULT);

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-views.css"/>
        <Title text="People"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
            </Routes>
        </Router>
    }
}
