use leptos::prelude::*;
use leptos_router::components::A;

use super::context::use_auth;

#[component]
fn LoginPrompt(message: &'static str) -> impl IntoView {
    view! {
        <div class="guard-prompt">
            <h2 class="guard-prompt__title">"Please log in"</h2>
            <p class="guard-prompt__text">{message}</p>
            <div class="guard-prompt__actions">
                <A href="/login" attr:class="button button--primary">"Login"</A>
                <A href="/register" attr:class="button button--outline">"Register"</A>
            </div>
        </div>
    }
}

/// Component that requires a session.
/// Shows a login prompt otherwise.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().session.is_some()
            fallback=|| view! { <LoginPrompt message="You need to be logged in to access the dashboard."/> }
        >
            {children()}
        </Show>
    }
}

/// Component that requires the agency role.
/// The role is taken from the session only.
#[component]
pub fn RequireAgency(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_agency()
            fallback=|| view! {
                <div class="guard-prompt">
                    <h2 class="guard-prompt__title">"Access denied"</h2>
                    <p class="guard-prompt__text">"This section is available to travel agencies only."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
