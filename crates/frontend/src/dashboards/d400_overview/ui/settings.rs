use contracts::system::session::PasswordChangeForm;
use leptos::prelude::*;

use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::components::PageHeader;
use crate::shared::form_error::{field_error, FormError};

#[derive(Clone, Copy, Debug, PartialEq)]
struct NotificationPrefs {
    email: bool,
    booking_updates: bool,
    marketing: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            booking_updates: true,
            marketing: false,
        }
    }
}

/// Настройки аккаунта. Пароль проверяется по общим правилам, но никуда
/// не отправляется.
#[component]
pub fn SettingsTab() -> impl IntoView {
    let toast = use_toast();
    let password = RwSignal::new(PasswordChangeForm::default());
    let error = RwSignal::new(Option::<FormError>::None);
    let prefs = RwSignal::new(NotificationPrefs::default());

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match password.get_untracked().validate() {
            Ok(()) => {
                error.set(None);
                password.set(PasswordChangeForm::default());
                toast.success("Password updated successfully", None);
            }
            Err(reason) => error.set(Some(reason.into())),
        }
    };

    let pref = move |label: &'static str, id: &'static str, get: fn(&NotificationPrefs) -> bool, set: fn(&mut NotificationPrefs, bool)| {
        view! {
            <Checkbox
                id=id
                label=label
                checked=Signal::derive(move || prefs.with(get))
                on_change=Callback::new(move |v| prefs.update(|p| set(p, v)))
            />
        }
    };

    view! {
        <PageHeader title="Account Settings"/>

        <form class="card form" on:submit=on_password_submit>
            <h2 class="card__title">"Change Password"</h2>
            <Input
                id="current-password"
                label="Current Password"
                input_type="password"
                value=Signal::derive(move || password.with(|p| p.current_password.clone()))
                on_input=Callback::new(move |v| password.update(|p| p.current_password = v))
                error=field_error(error, "currentPassword")
            />
            <Input
                id="new-password"
                label="New Password"
                input_type="password"
                value=Signal::derive(move || password.with(|p| p.new_password.clone()))
                on_input=Callback::new(move |v| password.update(|p| p.new_password = v))
                error=field_error(error, "password")
            />
            <Input
                id="confirm-new-password"
                label="Confirm New Password"
                input_type="password"
                value=Signal::derive(move || password.with(|p| p.confirm_password.clone()))
                on_input=Callback::new(move |v| password.update(|p| p.confirm_password = v))
                error=field_error(error, "confirmPassword")
            />
            <Button button_type="submit">"Update Password"</Button>
        </form>

        <section class="card form">
            <h2 class="card__title">"Notifications"</h2>
            {pref("Email Notifications", "pref-email", |p| p.email, |p, v| p.email = v)}
            {pref("Booking Updates", "pref-bookings", |p| p.booking_updates, |p, v| p.booking_updates = v)}
            {pref("Marketing Emails", "pref-marketing", |p| p.marketing, |p, v| p.marketing = v)}
            <Button on_click=Callback::new(move |_| toast.success("Notification settings saved", None))>
                "Save Preferences"
            </Button>
        </section>

        <section class="card card--danger">
            <h2 class="card__title">"Delete Account"</h2>
            <p class="text-muted">"Permanently delete your account and all associated data."</p>
            <Button
                variant="danger"
                on_click=Callback::new(move |_| {
                    toast.error(
                        "Account deletion initiated",
                        Some("Your account will be deleted within 30 days.".into()),
                    )
                })
            >
                "Delete Account"
            </Button>
        </section>
    }
}
