use contracts::enums::user_role::UserRole;
use contracts::system::session::RegisterForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::form_error::{field_error, FormError};
use crate::system::auth::{api, context::{set_session, use_auth}};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(Option::<FormError>::None);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();

    let user_type = move || form.with(|f| f.user_type);
    let name_label = move || match user_type() {
        UserRole::Tourist => "Full Name",
        UserRole::Agency => "Agency/Company Name",
    };
    let name_placeholder = move || match user_type() {
        UserRole::Tourist => "John Doe",
        UserRole::Agency => "Travel Agency Inc.",
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let current = form.get_untracked();
        if let Err(reason) = current.validate() {
            error.set(Some(reason.into()));
            return;
        }

        is_loading.set(true);
        error.set(None);
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::register(&current).await {
                Ok(session) => {
                    toast.success(
                        "Registration successful!",
                        Some("Your account has been created successfully.".to_string()),
                    );
                    set_session(set_auth_state, session);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    log::warn!("Registration rejected: {}", e.code);
                    error.set(Some(e.into()));
                }
            }
            is_loading.set(false);
        });
    };

    let role_button = move |role: UserRole, label: &'static str| {
        view! {
            <button
                type="button"
                class="segmented__item"
                class:segmented__item--active=move || user_type() == role
                on:click=move |_| form.update(|f| f.user_type = role)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create an account"</h1>
                <p class="auth-card__subtitle">"Enter your information to create an account"</p>

                <div class="segmented">
                    {role_button(UserRole::Tourist, "Tourist")}
                    {role_button(UserRole::Agency, "Agency/Guide")}
                </div>

                {move || error.get().and_then(|e| e.general()).map(|msg| view! {
                    <div class="alert alert--error">{msg}</div>
                })}

                <form class="form" on:submit=on_submit>
                    <Input
                        id="full-name"
                        label=Signal::derive(move || name_label().to_string())
                        placeholder=Signal::derive(move || name_placeholder().to_string())
                        value=Signal::derive(move || form.with(|f| f.full_name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.full_name = v))
                        error=field_error(error, "name")
                    />
                    <Input
                        id="register-email"
                        label="Email"
                        input_type="email"
                        placeholder="email@example.com"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=field_error(error, "email")
                    />
                    <Input
                        id="register-password"
                        label="Password"
                        input_type="password"
                        placeholder="******"
                        autocomplete="new-password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.password = v))
                        error=field_error(error, "password")
                    />
                    <Input
                        id="confirm-password"
                        label="Confirm Password"
                        input_type="password"
                        placeholder="******"
                        autocomplete="new-password"
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.confirm_password = v))
                        error=field_error(error, "confirmPassword")
                    />
                    <Checkbox
                        id="agree-to-terms"
                        label="I agree to the terms of service and privacy policy"
                        checked=Signal::derive(move || form.with(|f| f.agree_to_terms))
                        on_change=Callback::new(move |v| form.update(|f| f.agree_to_terms = v))
                    />
                    {move || field_error(error, "agreeToTerms").get().map(|msg| view! {
                        <div class="form__error">{msg}</div>
                    })}
                    <Button button_type="submit" full_width=true disabled=is_loading>
                        {move || if is_loading.get() { "Creating account..." } else { "Create account" }}
                    </Button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? " <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
