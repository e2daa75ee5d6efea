use chrono::Local;
use contracts::dashboards::d400_overview::dto::DashboardSummary;
use contracts::domain::a002_booking::aggregate::BookingRecord;
use contracts::domain::a003_feedback::aggregate::Review;
use contracts::shared::format::{format_number, format_price};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::super::api;
use super::super::state::{bar_percent, bookings_of, tourist_counters, upcoming};
use crate::domain::a003_feedback::ui::model as feedback_model;
use crate::domain::a003_feedback::ui::ReviewCard;
use crate::shared::components::ui::BookingStatusBadge;
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::date_utils::format_long_date;
use crate::system::auth::context::use_auth;

#[component]
pub fn DashboardOverview() -> impl IntoView {
    let (auth_state, _) = use_auth();

    move || {
        let state = auth_state.get();
        match state.session {
            Some(session) if session.is_agency() => view! { <AgencyOverview/> }.into_any(),
            Some(session) => view! { <TouristOverview email=session.email name=session.full_name/> }.into_any(),
            None => view! { <span></span> }.into_any(),
        }
    }
}

#[component]
fn TouristOverview(email: String, name: String) -> impl IntoView {
    let bookings = RwSignal::new(Vec::<BookingRecord>::new());
    let is_loading = RwSignal::new(true);

    spawn_local(async move {
        match api::get_bookings().await {
            Ok(all) => bookings.set(bookings_of(&all, &email)),
            Err(e) => log::error!("Failed to load bookings: {}", e),
        }
        is_loading.set(false);
    });

    let today = Local::now().date_naive();
    let counters = Memo::new(move |_| bookings.with(|b| tourist_counters(b, today)));
    let first_name = name.split_whitespace().next().unwrap_or("traveler").to_string();

    view! {
        <PageHeader title="Dashboard" subtitle=format!("Welcome back, {}!", first_name)/>
        <div class="stat-grid">
            <StatCard
                label="Upcoming Tours"
                icon_name="calendar"
                value=Signal::derive(move || (!is_loading.get()).then(|| counters.get().upcoming.to_string()))
                subtitle=Signal::derive(|| Some("Tours booked".to_string()))
            />
            <StatCard
                label="Completed Tours"
                icon_name="check"
                value=Signal::derive(move || (!is_loading.get()).then(|| counters.get().completed.to_string()))
                subtitle=Signal::derive(|| Some("Tours completed".to_string()))
            />
            <StatCard
                label="Cancelled"
                icon_name="close"
                value=Signal::derive(move || (!is_loading.get()).then(|| counters.get().cancelled.to_string()))
            />
        </div>

        <section class="card">
            <h2 class="card__title">"Upcoming Trips"</h2>
            {move || {
                let list = bookings.with(|b| upcoming(b, today, 3));
                if list.is_empty() {
                    return view! {
                        <div class="empty-state empty-state--compact">
                            <p>"No upcoming trips."</p>
                            <A href="/tours" attr:class="button button--primary button--sm">"Browse Tours"</A>
                        </div>
                    }
                    .into_any();
                }
                list.into_iter()
                    .map(|b| view! {
                        <div class="trip">
                            <div>
                                <h4 class="trip__title">{b.tour.clone()}</h4>
                                <p class="trip__meta">
                                    {format!("{} • {} participants", format_long_date(b.date), b.participants)}
                                </p>
                            </div>
                            <BookingStatusBadge status=b.status/>
                        </div>
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn AgencyOverview() -> impl IntoView {
    let summary = RwSignal::new(Option::<DashboardSummary>::None);
    let reviews = RwSignal::new(Vec::<Review>::new());
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match api::get_summary().await {
            Ok(s) => summary.set(Some(s)),
            Err(e) => {
                log::error!("Failed to load dashboard summary: {}", e);
                error.set(Some(e));
            }
        }
    });
    spawn_local(async move {
        match feedback_model::fetch_reviews().await {
            Ok(mut list) => {
                list.truncate(3);
                reviews.set(list);
            }
            Err(e) => log::error!("Failed to load reviews: {}", e),
        }
    });

    let stat = move |f: fn(&DashboardSummary) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(f)))
    };

    view! {
        <PageHeader title="Agency Dashboard" subtitle="Bookings, revenue and customer feedback"/>
        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        <div class="stat-grid">
            <StatCard label="Total Bookings" icon_name="calendar" value=stat(|s| format_number(s.total_bookings as u64))/>
            <StatCard
                label="Total Revenue"
                icon_name="dollar"
                value=stat(|s| format_price(s.total_revenue))
                subtitle=Signal::derive(|| Some("Cancelled bookings excluded".to_string()))
            />
            <StatCard
                label="Confirmed"
                icon_name="check"
                value=stat(|s| s.confirmed_bookings.to_string())
                subtitle=stat(|s| format!("{} pending", s.pending_bookings))
            />
            <StatCard
                label="Average Rating"
                icon_name="star"
                value=stat(|s| s.average_rating.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "No reviews".into()))
            />
        </div>

        <div class="dashboard__charts">
            <section class="card">
                <h2 class="card__title">"Tour Popularity"</h2>
                {move || summary.get().map(|s| {
                    let max = s.max_popularity() as f64;
                    s.popularity
                        .into_iter()
                        .map(|p| view! {
                            <div class="bar">
                                <span class="bar__label">{p.name}</span>
                                <div class="bar__track">
                                    <div class="bar__fill" style=format!("width: {:.0}%", bar_percent(p.bookings as f64, max))></div>
                                </div>
                                <span class="bar__value">{p.bookings}</span>
                            </div>
                        })
                        .collect_view()
                })}
            </section>

            <section class="card">
                <h2 class="card__title">"Monthly Bookings"</h2>
                {move || summary.get().map(|s| {
                    let max = s.monthly.iter().map(|m| m.revenue).fold(0.0, f64::max);
                    s.monthly
                        .into_iter()
                        .map(|m| view! {
                            <div class="bar">
                                <span class="bar__label">{m.label}</span>
                                <div class="bar__track">
                                    <div class="bar__fill bar__fill--secondary" style=format!("width: {:.0}%", bar_percent(m.revenue, max))></div>
                                </div>
                                <span class="bar__value">
                                    {format!("{} · {}", m.bookings, format_price(m.revenue))}
                                </span>
                            </div>
                        })
                        .collect_view()
                })}
            </section>
        </div>

        <section class="card">
            <h2 class="card__title">"Recent Reviews"</h2>
            <For
                each=move || reviews.get()
                key=|review| review.id
                children=move |review: Review| view! { <ReviewCard review=review/> }
            />
        </section>
    }
}
