use contracts::domain::a001_tour::aggregate::Tour;
use contracts::domain::a002_booking::pricing::participant_options;
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::TourDetailsVm;
use crate::layout::toast_service::use_toast;
use crate::shared::components::StarRating;
use crate::shared::date_utils::format_date_chip;
use crate::shared::icons::icon;

#[component]
pub fn TourDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let vm = TourDetailsVm::new();

    // Повторная загрузка при переходе между турами
    Effect::new(move |_| {
        vm.load(params.with(|p| p.get("id")));
    });

    view! {
        <div class="page tour-details">
            <A href="/tours" attr:class="back-link">{icon("chevron-left")}"Back to Tours"</A>
            {move || {
                if vm.is_loading.get() {
                    return view! { <div class="loading">"Loading tour..."</div> }.into_any();
                }
                match vm.tour.get() {
                    Some(tour) => view! { <TourDetailsContent vm=vm tour=tour/> }.into_any(),
                    None => view! {
                        <div class="empty-state">
                            <h2>{move || vm.error.get().unwrap_or_else(|| "Tour not found".to_string())}</h2>
                            <A href="/tours" attr:class="button button--primary">"Browse tours"</A>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn TourDetailsContent(vm: TourDetailsVm, tour: Tour) -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();
    let gallery = StoredValue::new(tour.gallery());
    let dates = tour.available_dates.clone();
    let price = tour.price;
    let title = tour.title.clone();

    let on_book = move |_| match vm.booking_link() {
        Ok(link) => navigate(&link, Default::default()),
        Err(reason) => toast.error(reason.to_string(), None),
    };

    view! {
        <div class="tour-details__grid">
            <div class="tour-details__main">
                <div class="gallery">
                    {move || {
                        let index = vm.image_index.get();
                        gallery.with_value(|g| g.get(index).cloned()).map(|src| view! {
                            <img class="gallery__image" src=src alt=title.clone()/>
                        })
                    }}
                    <Show when=move || gallery.with_value(|g| g.len() > 1)>
                        <button class="gallery__nav gallery__nav--prev" aria-label="Previous image" on:click=move |_| vm.prev_image()>
                            {icon("chevron-left")}
                        </button>
                        <button class="gallery__nav gallery__nav--next" aria-label="Next image" on:click=move |_| vm.next_image()>
                            {icon("chevron-right")}
                        </button>
                    </Show>
                </div>

                <div class="tour-details__heading">
                    <h1>{tour.title.clone()}</h1>
                    <div class="tour-details__meta">
                        <span>{icon("map-pin")}{tour.location.clone()}</span>
                        <span>{icon("clock")}{tour.duration.clone()}</span>
                        <StarRating rating=tour.rating show_value=true/>
                    </div>
                </div>

                <section class="card">
                    <h2 class="card__title">"Tour Overview"</h2>
                    <p>{tour.full_description().to_string()}</p>
                </section>

                {(!tour.highlights.is_empty()).then(|| view! {
                    <section class="card">
                        <h2 class="card__title">"Highlights"</h2>
                        <ul class="check-list">
                            {tour.highlights.iter().map(|h| view! { <li>{icon("check")}{h.clone()}</li> }).collect_view()}
                        </ul>
                    </section>
                })}

                {(!tour.included.is_empty()).then(|| view! {
                    <section class="card">
                        <h2 class="card__title">"What's Included"</h2>
                        <ul class="check-list">
                            {tour.included.iter().map(|h| view! { <li>{icon("check")}{h.clone()}</li> }).collect_view()}
                        </ul>
                    </section>
                })}

                <section class="card tour-details__facts">
                    {tour.meeting_point.clone().map(|mp| view! {
                        <div>
                            <h3>"Meeting Point"</h3>
                            <p>{mp}</p>
                        </div>
                    })}
                    {tour.group_size.map(|size| view! {
                        <div>
                            <h3>"Group Size"</h3>
                            <p>{format!("{} people", size)}</p>
                        </div>
                    })}
                </section>
            </div>

            <aside class="tour-details__booking card">
                <div class="tour-details__price">
                    <span class="tour-details__price-value">{format_price(price)}</span>
                    <span class="tour-details__price-unit">"per person"</span>
                </div>

                <div class="form__group">
                    <span class="form__label">"Select Date"</span>
                    <div class="date-chips">
                        {dates
                            .into_iter()
                            .map(|date| view! {
                                <button
                                    type="button"
                                    class="date-chip"
                                    class:date-chip--selected=move || vm.selected_date.get() == Some(date)
                                    on:click=move |_| vm.selected_date.set(Some(date))
                                >
                                    {format_date_chip(date)}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="form__group">
                    <label class="form__label" for="group-size">
                        "Number of People: "
                        <strong>{move || vm.participants.get()}</strong>
                    </label>
                    <select
                        id="group-size"
                        class="form__select"
                        on:change=move |ev| {
                            if let Ok(n) = event_target_value(&ev).parse::<u32>() {
                                vm.participants.set(n);
                            }
                        }
                    >
                        {participant_options()
                            .into_iter()
                            .map(|n| view! {
                                <option value=n.to_string() selected=move || vm.participants.get() == n>
                                    {n}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="price-summary">
                    <div class="price-summary__row">
                        <span>"Price per person"</span>
                        <span>{format_price(price)}</span>
                    </div>
                    <div class="price-summary__row">
                        <span>"Number of people"</span>
                        <span>{move || format!("x {}", vm.participants.get())}</span>
                    </div>
                    <div class="price-summary__row price-summary__row--total">
                        <span>"Total"</span>
                        <span>{move || format_price(vm.total())}</span>
                    </div>
                </div>

                <button type="button" class="button button--primary button--lg button--block" on:click=on_book>
                    "Book Now"
                </button>
            </aside>
        </div>
    }
}
