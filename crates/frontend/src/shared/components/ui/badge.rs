use contracts::enums::booking_status::BookingStatus;
use contracts::enums::payment_status::PaymentStatus;
use contracts::enums::tour_status::TourStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

#[component]
pub fn BookingStatusBadge(#[prop(into)] status: Signal<BookingStatus>) -> impl IntoView {
    view! {
        <Badge variant=Signal::derive(move || status.get().badge_variant().to_string())>
            {move || status.get().display_name()}
        </Badge>
    }
}

#[component]
pub fn PaymentStatusBadge(#[prop(into)] status: Signal<PaymentStatus>) -> impl IntoView {
    view! {
        <Badge variant=Signal::derive(move || status.get().badge_variant().to_string())>
            {move || status.get().display_name()}
        </Badge>
    }
}

#[component]
pub fn TourStatusBadge(#[prop(into)] status: Signal<TourStatus>) -> impl IntoView {
    view! {
        <Badge variant=Signal::derive(move || status.get().badge_variant().to_string())>
            {move || status.get().display_name()}
        </Badge>
    }
}
