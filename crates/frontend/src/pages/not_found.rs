use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/" attr:class="button button--primary">"Back to home"</A>
        </div>
    }
}
