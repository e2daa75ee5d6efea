use contracts::domain::a002_booking::aggregate::BookingConfirmation;
use contracts::domain::a002_booking::pricing::participant_options;
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::model::BookQuery;
use super::view_model::BookingFormVm;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_long_date;
use crate::shared::form_error::field_error;
use crate::shared::icons::icon;

#[component]
pub fn BookTourPage() -> impl IntoView {
    let location = use_location();
    let query = BookQuery::from_query_string(&location.search.get_untracked());
    let vm = BookingFormVm::new(query, use_toast());

    view! {
        <div class="page page--narrow">
            <PageHeader
                title="Book a Tour"
                subtitle="Fill out the form below to book your dream vacation"
            />
            {move || match vm.phase.with(|p| p.confirmation().cloned()) {
                Some(confirmation) => view! { <BookingConfirmed vm=vm confirmation=confirmation/> }.into_any(),
                None => view! { <BookingFormView vm=vm/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn BookingConfirmed(vm: BookingFormVm, confirmation: BookingConfirmation) -> impl IntoView {
    view! {
        <div class="card booking-confirmed">
            <div class="booking-confirmed__icon">{icon("check")}</div>
            <h3>"Your tour has been booked!"</h3>
            <p class="text-muted">
                {format!("A confirmation email has been sent to {}", confirmation.email)}
            </p>
            <div class="booking-confirmed__details">
                <h4>"Booking Details:"</h4>
                <p><strong>"Tour: "</strong>{confirmation.tour_title.clone()}</p>
                <p><strong>"Date: "</strong>{format_long_date(confirmation.date)}</p>
                <p><strong>"Number of Participants: "</strong>{confirmation.participants}</p>
                <p><strong>"Total: "</strong>{format_price(confirmation.total_price)}</p>
                <p class="text-muted">{format!("Reference: {}", confirmation.id.value())}</p>
            </div>
            <button type="button" class="button button--primary" on:click=move |_| vm.book_another()>
                "Book Another Tour"
            </button>
        </div>
    }
}

#[component]
fn BookingFormView(vm: BookingFormVm) -> impl IntoView {
    let error = vm.error;
    let is_submitting = Signal::derive(move || vm.phase.with(|p| p.is_submitting()));
    let participant_opts: Vec<(String, String)> = participant_options()
        .into_iter()
        .map(|n| {
            let label = if n == 1 { "1 person".to_string() } else { format!("{} people", n) };
            (n.to_string(), label)
        })
        .collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="card form" on:submit=on_submit>
            {move || vm.phase.with(|p| p.error().map(str::to_string)).map(|msg| view! {
                <div class="alert alert--error">
                    <strong>"Booking failed. "</strong>{msg}
                </div>
            })}
            {move || error.get().and_then(|e| e.general()).map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}

            <Input
                id="name"
                label="Full Name"
                placeholder="Enter your full name"
                value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| vm.edit(|f| f.name = v))
                error=field_error(error, "name")
            />
            <div class="form__row">
                <Input
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="your.email@example.com"
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |v| vm.edit(|f| f.email = v))
                    error=field_error(error, "email")
                />
                <Input
                    id="phone"
                    label="Phone Number"
                    input_type="tel"
                    placeholder="Enter your phone number"
                    value=Signal::derive(move || vm.form.with(|f| f.phone.clone()))
                    on_input=Callback::new(move |v| vm.edit(|f| f.phone = v))
                    error=field_error(error, "phone")
                />
            </div>

            <Select
                id="tour-id"
                label="Select Tour"
                placeholder=Signal::derive(move || {
                    if vm.tours_loading.get() { "Loading tours...".to_string() } else { "Select a tour package".to_string() }
                })
                value=Signal::derive(move || {
                    vm.form.with(|f| f.tour_id.map(|id| id.value().to_string()).unwrap_or_default())
                })
                options=Signal::derive(move || vm.tour_options())
                on_change=Callback::new(move |v| vm.set_tour(v))
                error=field_error(error, "tourId")
            />
            <div class="form__row">
                <Select
                    id="date"
                    label="Preferred Date"
                    placeholder=Signal::derive(move || {
                        if vm.form.with(|f| f.tour_id.is_none()) { "Select a tour first".to_string() } else { "Select a date".to_string() }
                    })
                    disabled=Signal::derive(move || vm.form.with(|f| f.tour_id.is_none()))
                    value=Signal::derive(move || {
                        vm.form.with(|f| f.date.map(|d| d.to_string()).unwrap_or_default())
                    })
                    options=Signal::derive(move || vm.date_options())
                    on_change=Callback::new(move |v| vm.set_date(v))
                    error=field_error(error, "date")
                />
                <Select
                    id="participants"
                    label="Number of Participants"
                    value=Signal::derive(move || vm.form.with(|f| f.participants.to_string()))
                    options=participant_opts
                    on_change=Callback::new(move |v| vm.set_participants(v))
                    error=field_error(error, "participants")
                />
            </div>

            <Textarea
                id="special-requests"
                label="Special Requests (Optional)"
                placeholder="Any special requirements or requests"
                value=Signal::derive(move || vm.form.with(|f| f.special_requests.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| {
                    vm.edit(|f| f.special_requests = (!v.trim().is_empty()).then_some(v))
                })
            />

            {move || vm.total().map(|total| view! {
                <div class="price-summary">
                    <div class="price-summary__row price-summary__row--total">
                        <span>"Total"</span>
                        <span>{format_price(total)}</span>
                    </div>
                </div>
            })}

            <button
                type="submit"
                class="button button--primary button--block"
                disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() { "Processing..." } else { "Book Now" }}
            </button>
        </form>
    }
}
