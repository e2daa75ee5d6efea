use contracts::domain::a003_feedback::aggregate::MAX_RATING;
use leptos::prelude::*;

/// Звёзды только для чтения (карточки туров, отзывы)
#[component]
pub fn StarRating(rating: f64, #[prop(optional)] show_value: bool) -> impl IntoView {
    let filled = rating.round().clamp(0.0, MAX_RATING as f64) as u8;
    view! {
        <span class="star-rating" aria-label=format!("{:.1} out of {}", rating, MAX_RATING)>
            {(1..=MAX_RATING)
                .map(|i| {
                    let class = if i <= filled { "star star--filled" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
            {show_value.then(|| view! { <span class="star-rating__value">{format!("{:.1}", rating)}</span> })}
        </span>
    }
}

/// Выбор оценки 1..=5 на форме отзыва. 0 означает "не выбрано".
#[component]
pub fn StarRatingInput(
    #[prop(into)] value: Signal<u8>,
    on_change: Callback<u8>,
) -> impl IntoView {
    let hovered = RwSignal::new(0u8);
    let shown = move || {
        let h = hovered.get();
        if h > 0 {
            h
        } else {
            value.get()
        }
    };

    view! {
        <div class="star-rating star-rating--input" on:mouseleave=move |_| hovered.set(0)>
            {(1..=MAX_RATING)
                .map(|i| {
                    view! {
                        <button
                            type="button"
                            class=move || if i <= shown() { "star star--filled" } else { "star" }
                            aria-label=format!("{} star", i)
                            on:mouseenter=move |_| hovered.set(i)
                            on:click=move |_| on_change.run(i)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
