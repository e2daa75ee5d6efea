use contracts::domain::a001_tour::aggregate::Tour;
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::StarRating;
use crate::shared::icons::icon;

/// Карточка тура в каталоге и на главной
#[component]
pub fn TourCard(tour: Tour) -> impl IntoView {
    let href = format!("/tours/{}", tour.id.value());
    let image = tour.image.clone().unwrap_or_default();

    view! {
        <article class="tour-card">
            <div class="tour-card__image">
                <img src=image alt=tour.title.clone() loading="lazy"/>
                <span class="tour-card__category">{tour.category.clone()}</span>
            </div>
            <div class="tour-card__body">
                <div class="tour-card__header">
                    <h3 class="tour-card__title">{tour.title.clone()}</h3>
                    <StarRating rating=tour.rating show_value=true/>
                </div>
                <div class="tour-card__meta">
                    <span>{icon("map-pin")}{tour.location.clone()}</span>
                    <span>{icon("clock")}{tour.duration.clone()}</span>
                </div>
                <p class="tour-card__description">{tour.description.clone()}</p>
            </div>
            <div class="tour-card__footer">
                <span class="tour-card__price">
                    {format_price(tour.price)}
                    <small>" / person"</small>
                </span>
                <A href=href attr:class="button button--primary button--sm">"View Details"</A>
            </div>
        </article>
    }
}
