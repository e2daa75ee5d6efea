use contracts::domain::a001_tour::aggregate::Tour;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a001_tour::ui::card::TourCard;
use crate::domain::a001_tour::ui::model as tour_model;
use crate::shared::icons::icon;

/// Количество туров в блоке "Featured Tours"
const FEATURED_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = RwSignal::new(Vec::<Tour>::new());
    let is_loading = RwSignal::new(true);

    spawn_local(async move {
        match tour_model::fetch_all().await {
            Ok(mut tours) => {
                tours.truncate(FEATURED_COUNT);
                featured.set(tours);
            }
            Err(e) => log::error!("Failed to load featured tours: {}", e),
        }
        is_loading.set(false);
    });

    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">"Discover Amazing Places"</h1>
                    <p class="hero__subtitle">"Explore top destinations with our premium tour packages"</p>
                    <div class="hero__actions">
                        <A href="/tours" attr:class="button button--primary button--lg">"Browse Tours"</A>
                        <A href="/book" attr:class="button button--outline button--lg">"Book Now"</A>
                    </div>
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Featured Tours"</h2>
                <p class="section__subtitle">"Handpicked destinations for your next adventure"</p>
                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <div class="loading">"Loading tours..."</div> }
                >
                    <div class="tour-grid">
                        <For
                            each=move || featured.get()
                            key=|tour| tour.id
                            children=move |tour: Tour| view! { <TourCard tour=tour/> }
                        />
                    </div>
                </Show>
                <div class="section__footer">
                    <A href="/tours" attr:class="button button--outline">"View All Tours"</A>
                </div>
            </section>

            <section class="section section--muted">
                <h2 class="section__title">"Why Choose Us"</h2>
                <p class="section__subtitle">"We offer the best travel experience for our customers"</p>
                <div class="features">
                    <div class="feature">
                        <div class="feature__icon">{icon("map-pin")}</div>
                        <h3>"Handpicked Destinations"</h3>
                        <p>"We carefully select the best destinations for an unforgettable experience."</p>
                    </div>
                    <div class="feature">
                        <div class="feature__icon">{icon("star")}</div>
                        <h3>"Quality Service"</h3>
                        <p>"Our professional guides ensure top-notch service throughout your journey."</p>
                    </div>
                    <div class="feature">
                        <div class="feature__icon">{icon("dollar")}</div>
                        <h3>"Best Price Guarantee"</h3>
                        <p>"We offer competitive prices with no hidden costs for all our tours."</p>
                    </div>
                </div>
            </section>

            <section class="section cta">
                <h2 class="section__title">"Ready to Start Your Adventure?"</h2>
                <p class="section__subtitle">
                    "Book your dream vacation today and create memories that will last a lifetime."
                </p>
                <A href="/book" attr:class="button button--primary button--lg">"Book a Tour Now"</A>
            </section>
        </div>
    }
}
