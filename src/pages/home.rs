//! Public landing page with the auth status control in the header.

use leptos::prelude::*;

use crate::components::auth_button::AuthButton;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center">
            <nav class="flex h-16 w-full justify-center border-b">
                <div class="flex w-full max-w-5xl items-center justify-between p-3 px-5 text-sm">
                    <span class="font-semibold">"People"</span>
                    <AuthButton/>
                </div>
            </nav>
            <section class="flex max-w-5xl flex-1 flex-col gap-6 p-5">
                <h1 class="text-3xl font-bold">"Your team, in one place"</h1>
                <p class="text-muted-foreground">"Profiles, roles and access for every employee."</p>
            </section>
        </main>
    }
}
