//! Protected area showing the signed-in user's profile and logout control.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <main class="flex min-h-screen">
            <aside class="flex w-64 flex-col justify-between border-r p-4">
                <span class="font-semibold">"Dashboard"</span>
                <LogoutButton/>
            </aside>
            <section class="flex-1 p-6"></section>
        </main>
    }
}
