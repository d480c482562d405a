//! Sign-in landing route; the sign-in form itself is served by the backend.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::{Button, ButtonVariant};
use crate::routes;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center gap-4">
            <h1 class="text-2xl font-semibold">"Sign in"</h1>
            <p class="text-sm text-muted-foreground">"You are signed out."</p>
            <Button as_child=true variant=ButtonVariant::Link>
                <A href=routes::HOME>"Back to home"</A>
            </Button>
        </main>
    }
}
