use crate::layout::toast_service::{ToastHost, ToastService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are shown from any page, so the service lives at the root.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
