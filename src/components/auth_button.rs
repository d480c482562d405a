//! Auth status control: dashboard or sign-in link, plus the demo link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered in the site header. Claims are fetched on every mount; nothing
//! is shown until the lookup settles, and there is no loading state.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::button::{Button, ButtonSize};
use crate::net::service::Services;
use crate::state::session::{SessionVariant, resolve_session_variant};

#[component]
pub fn AuthButton() -> impl IntoView {
    let services = expect_context::<Services>();
    let variant = LocalResource::new(move || {
        let services = services.clone();
        async move { resolve_session_variant(services.session.as_ref()).await }
    });

    view! {
        <Suspense fallback=|| ()>
            {move || variant.get().map(render_actions)}
        </Suspense>
    }
}

fn render_actions(variant: SessionVariant) -> impl IntoView {
    view! {
        <div class="flex gap-2">
            {variant
                .actions()
                .into_iter()
                .map(|action| {
                    view! {
                        <Button as_child=true size=ButtonSize::Sm variant=action.variant>
                            <A href=action.href>{action.label}</A>
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
