use contracts::system::session::LoginForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::form_error::{field_error, FormError};
use crate::system::auth::{api, context::{set_session, use_auth}};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let error = RwSignal::new(Option::<FormError>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };
        if let Err(reason) = form.validate() {
            error.set(Some(reason.into()));
            return;
        }

        is_loading.set(true);
        error.set(None);
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::login(&form).await {
                Ok(session) => {
                    log::info!("Logged in as {} ({})", session.email, session.role.code());
                    toast.success("Login successful!", Some(format!("Welcome back, {}", session.first_name())));
                    set_session(set_auth_state, session);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    error.set(Some(e.into()));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__subtitle">"Log in to manage your bookings"</p>

                {move || error.get().and_then(|e| e.general()).map(|msg| view! {
                    <div class="alert alert--error">{msg}</div>
                })}

                <form class="form" on:submit=on_submit>
                    <Input
                        id="email"
                        label="Email"
                        input_type="email"
                        placeholder="your.email@example.com"
                        autocomplete="username"
                        value=email
                        on_input=Callback::new(move |v| email.set(v))
                        error=field_error(error, "email")
                        disabled=is_loading
                    />
                    <Input
                        id="password"
                        label="Password"
                        input_type="password"
                        placeholder="••••••••"
                        autocomplete="current-password"
                        value=password
                        on_input=Callback::new(move |v| password.set(v))
                        error=field_error(error, "password")
                        disabled=is_loading
                    />
                    <Checkbox
                        id="remember-me"
                        label="Remember me"
                        checked=remember_me
                        on_change=Callback::new(move |v| remember_me.set(v))
                    />
                    <Button button_type="submit" full_width=true disabled=is_loading>
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </Button>
                </form>

                <p class="auth-card__footer">
                    "Don't have an account? " <A href="/register">"Register"</A>
                </p>
                <div class="auth-card__hint">
                    <p>"Demo accounts:"</p>
                    <p><strong>"john.doe@example.com"</strong>" (tourist)"</p>
                    <p><strong>"agency@example.com"</strong>" (agency)"</p>
                </div>
            </div>
        </div>
    }
}
