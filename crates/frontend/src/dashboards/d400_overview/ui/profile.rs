use contracts::system::session::{ProfileForm, SessionInfo};
use leptos::prelude::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::form_error::{field_error, FormError};
use crate::system::auth::context::{set_session, use_auth};

fn blank_to_none(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

/// Профиль. Сохранение обновляет имя и e-mail в текущей сессии.
#[component]
pub fn ProfileTab() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let toast = use_toast();

    let initial = auth_state
        .get_untracked()
        .session
        .as_ref()
        .map(ProfileForm::from_session)
        .unwrap_or_default();
    let form = RwSignal::new(initial);
    let error = RwSignal::new(Option::<FormError>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(reason) = current.validate() {
            error.set(Some(reason.into()));
            return;
        }
        error.set(None);
        if let Some(session) = auth_state.get_untracked().session {
            set_session(
                set_auth_state,
                SessionInfo {
                    full_name: current.name.trim().to_string(),
                    email: current.email.trim().to_string(),
                    role: session.role,
                },
            );
        }
        toast.success("Profile updated successfully", None);
    };

    view! {
        <PageHeader title="My Profile"/>
        <div class="profile">
            <div class="card profile__summary">
                <div class="profile__avatar">
                    {move || form.with(|f| f.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default())}
                </div>
                <h2>{move || form.with(|f| f.name.clone())}</h2>
                <p class="text-muted">
                    {move || auth_state.with(|s| s.session.as_ref().map(|s| s.role.display_name()).unwrap_or_default())}
                </p>
            </div>

            <form class="card form profile__form" on:submit=on_submit>
                <h2 class="card__title">"Personal Information"</h2>
                <div class="form__row">
                    <Input
                        id="profile-name"
                        label="Full Name"
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.name = v))
                        error=field_error(error, "name")
                    />
                    <Input
                        id="profile-email"
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v| form.update(|f| f.email = v))
                        error=field_error(error, "email")
                    />
                </div>
                <div class="form__row">
                    <Input
                        id="profile-phone"
                        label="Phone"
                        input_type="tel"
                        value=Signal::derive(move || form.with(|f| f.phone.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v| form.update(|f| f.phone = blank_to_none(v)))
                    />
                    <Input
                        id="profile-address"
                        label="Address"
                        value=Signal::derive(move || form.with(|f| f.address.clone().unwrap_or_default()))
                        on_input=Callback::new(move |v| form.update(|f| f.address = blank_to_none(v)))
                    />
                </div>
                <Textarea
                    id="profile-bio"
                    label="Bio"
                    placeholder="Tell us about yourself"
                    value=Signal::derive(move || form.with(|f| f.bio.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v| form.update(|f| f.bio = blank_to_none(v)))
                />
                <Button button_type="submit">"Save Changes"</Button>
            </form>
        </div>
    }
}
