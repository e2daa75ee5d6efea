use contracts::domain::a003_feedback::aggregate::{FeedbackForm, Review};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::{PageHeader, StarRating, StarRatingInput};
use crate::shared::date_utils::format_long_date;
use crate::shared::form_error::{field_error, FormError};

/// Карточка отзыва (страница отзывов и обзор кабинета)
#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let initial = review.initial().to_string();
    view! {
        <div class="review">
            {match review.avatar.clone() {
                Some(src) => view! { <img class="review__avatar" src=src alt=review.name.clone()/> }.into_any(),
                None => view! { <div class="review__avatar review__avatar--initial">{initial}</div> }.into_any(),
            }}
            <div class="review__body">
                <div class="review__header">
                    <h3 class="review__name">{review.name.clone()}</h3>
                    <StarRating rating=f64::from(review.rating)/>
                </div>
                <p class="review__tour">{format!("Tour: {}", review.tour)}</p>
                <p class="review__date">{format_long_date(review.date)}</p>
                <p class="review__comment">{review.comment.clone()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let toast = use_toast();
    let form = RwSignal::new(FeedbackForm::default());
    let error = RwSignal::new(Option::<FormError>::None);
    let is_submitting = RwSignal::new(false);
    let reviews = RwSignal::new(Vec::<Review>::new());

    spawn_local(async move {
        match model::fetch_reviews().await {
            Ok(list) => reviews.set(list),
            Err(e) => log::error!("Failed to load reviews: {}", e),
        }
    });

    let edit = move |apply: &dyn Fn(&mut FeedbackForm)| {
        form.update(|f| apply(f));
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        if let Err(reason) = current.validate() {
            toast.error(reason.to_string(), None);
            error.set(Some(reason.into()));
            return;
        }

        is_submitting.set(true);
        spawn_local(async move {
            match model::submit(&current).await {
                Ok(review) => {
                    toast.success(
                        "Thank you for your feedback!",
                        Some("Your review has been submitted successfully.".into()),
                    );
                    reviews.update(|list| list.insert(0, review));
                    form.set(FeedbackForm::default());
                }
                Err(e) => {
                    toast.error("Feedback was not sent", Some(e.message.clone()));
                    error.set(Some(e.into()));
                }
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader
                title="Feedback"
                subtitle="Share your experience and help us improve our tours"
            />
            <div class="feedback">
                <form class="card form feedback__form" on:submit=on_submit>
                    <h2 class="card__title">"Leave a Review"</h2>
                    {move || error.get().and_then(|e| e.general()).map(|msg| view! {
                        <div class="alert alert--error">{msg}</div>
                    })}
                    <div class="form__row">
                        <Input
                            id="feedback-name"
                            label="Name (Optional)"
                            placeholder="Your name"
                            value=Signal::derive(move || form.with(|f| f.name.clone().unwrap_or_default()))
                            on_input=Callback::new(move |v: String| edit(&|f| f.name = model::optional(v.clone())))
                        />
                        <Input
                            id="feedback-email"
                            label="Email (Optional)"
                            input_type="email"
                            placeholder="Your email"
                            value=Signal::derive(move || form.with(|f| f.email.clone().unwrap_or_default()))
                            on_input=Callback::new(move |v: String| edit(&|f| f.email = model::optional(v.clone())))
                            error=field_error(error, "email")
                        />
                    </div>
                    <Input
                        id="tour-name"
                        label="Tour Name"
                        placeholder="Name of the tour you took"
                        value=Signal::derive(move || form.with(|f| f.tour_name.clone()))
                        on_input=Callback::new(move |v: String| edit(&|f| f.tour_name = v.clone()))
                        error=field_error(error, "tourName")
                    />
                    <div class="form__group">
                        <span class="form__label">"Rating"</span>
                        <StarRatingInput
                            value=Signal::derive(move || form.with(|f| f.rating))
                            on_change=Callback::new(move |r: u8| edit(&|f| f.rating = r))
                        />
                        {move || field_error(error, "rating").get().map(|msg| view! {
                            <div class="form__error">{msg}</div>
                        })}
                    </div>
                    <Textarea
                        id="comment"
                        label="Comments"
                        placeholder="Share your experience with us"
                        rows=5
                        value=Signal::derive(move || form.with(|f| f.comment.clone()))
                        on_input=Callback::new(move |v: String| edit(&|f| f.comment = v.clone()))
                        error=field_error(error, "comment")
                    />
                    <button
                        type="submit"
                        class="button button--primary button--block"
                        disabled=move || is_submitting.get()
                    >
                        {move || if is_submitting.get() { "Submitting..." } else { "Submit Feedback" }}
                    </button>
                </form>

                <section class="feedback__reviews">
                    <h2>"Recent Reviews"</h2>
                    <For
                        each=move || reviews.get()
                        key=|review| review.id
                        children=move |review: Review| view! { <ReviewCard review=review/> }
                    />
                </section>
            </div>
        </div>
    }
}
