use contracts::domain::a002_booking::aggregate::{BookingId, BookingRecord};
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::{
    Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

use super::super::api;
use super::super::state::{bookings_of, cancel};
use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{BookingStatusBadge, PaymentStatusBadge};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_long_date;
use crate::system::auth::context::use_auth;

#[component]
pub fn DashboardBookings() -> impl IntoView {
    let (auth_state, _) = use_auth();

    move || match auth_state.get().session {
        Some(session) if session.is_agency() => view! { <AgencyBookings/> }.into_any(),
        Some(session) => view! { <MyBookings email=session.email/> }.into_any(),
        None => view! { <span></span> }.into_any(),
    }
}

/// Бронирования туриста. Отмена меняет только локальный список.
#[component]
fn MyBookings(email: String) -> impl IntoView {
    let toast = use_toast();
    let bookings = RwSignal::new(Vec::<BookingRecord>::new());
    let is_loading = RwSignal::new(true);

    spawn_local(async move {
        match api::get_bookings().await {
            Ok(all) => bookings.set(bookings_of(&all, &email)),
            Err(e) => log::error!("Failed to load bookings: {}", e),
        }
        is_loading.set(false);
    });

    let on_cancel = move |id: BookingId| {
        let mut cancelled = false;
        bookings.update(|list| {
            if let Some(b) = list.iter_mut().find(|b| b.id == id) {
                cancelled = cancel(b);
            }
        });
        if cancelled {
            toast.success(
                "Booking cancelled successfully",
                Some("Your refund will be processed within 5-7 business days.".into()),
            );
        }
    };

    view! {
        <PageHeader title="My Bookings"/>
        {move || {
            if is_loading.get() {
                return view! { <div class="loading">"Loading bookings..."</div> }.into_any();
            }
            let list = bookings.get();
            if list.is_empty() {
                return view! {
                    <div class="empty-state">
                        <h3>"No bookings found"</h3>
                        <p>"You haven't made any bookings yet."</p>
                        <A href="/tours" attr:class="button button--primary">"Browse Tours"</A>
                    </div>
                }
                .into_any();
            }
            list.into_iter()
                .map(|b| {
                    let id = b.id;
                    let can_cancel = b.status.is_cancellable();
                    view! {
                        <div class="card booking-item">
                            <div class="booking-item__main">
                                <h3 class="booking-item__title">{b.tour.clone()}</h3>
                                <p class="booking-item__meta">
                                    {format!(
                                        "{} • {} participants • {}",
                                        format_long_date(b.date),
                                        b.participants,
                                        format_price(b.total_amount)
                                    )}
                                </p>
                                <div class="booking-item__badges">
                                    <BookingStatusBadge status=b.status/>
                                    <PaymentStatusBadge status=b.payment_status/>
                                </div>
                            </div>
                            <div class="booking-item__actions">
                                <A href=format!("/tours/{}", b.tour_id.value()) attr:class="button button--outline button--sm">
                                    "View Details"
                                </A>
                                {can_cancel.then(|| view! {
                                    <button
                                        type="button"
                                        class="button button--danger button--sm"
                                        on:click=move |_| on_cancel(id)
                                    >
                                        "Cancel"
                                    </button>
                                })}
                            </div>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        }}
    }
}

/// Все бронирования агентства
#[component]
fn AgencyBookings() -> impl IntoView {
    let bookings = RwSignal::new(Vec::<BookingRecord>::new());
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match api::get_bookings().await {
            Ok(all) => bookings.set(all),
            Err(e) => error.set(Some(e)),
        }
    });

    view! {
        <PageHeader title="Bookings" subtitle="All bookings across your tours"/>
        {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=160.0>"Customer"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Tour"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Date"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"People"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Payment"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Amount"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || bookings.get()
                        key=|b| b.id
                        children=move |b: BookingRecord| view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <div>{b.customer_name.clone()}</div>
                                        <div class="text-muted">{b.email.clone()}</div>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{b.tour.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_long_date(b.date)}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{b.participants}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout><BookingStatusBadge status=b.status/></TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout><PaymentStatusBadge status=b.payment_status/></TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_price(b.total_amount)}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
