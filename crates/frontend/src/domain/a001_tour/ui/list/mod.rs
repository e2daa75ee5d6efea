pub mod state;

use contracts::domain::a001_tour::aggregate::Tour;
use contracts::domain::a001_tour::filter::categories_of;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use self::state::{create_state, TourListState};
use super::card::TourCard;
use super::model;
use crate::shared::components::ui::{Button, Checkbox};
use crate::shared::components::PageHeader;

#[component]
pub fn TourListPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let state = create_state(TourListState::from_query_string(
        &location.search.get_untracked(),
    ));
    let tours = RwSignal::new(Vec::<Tour>::new());
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    spawn_local(async move {
        match model::fetch_all().await {
            Ok(list) => tours.set(list),
            Err(e) => {
                log::error!("Failed to load tours: {}", e);
                error.set(Some(e));
            }
        }
        is_loading.set(false);
    });

    // Фильтры -> адресная строка, без новой записи в истории
    Effect::new(move |_| {
        let qs = state.with(|s| s.query_string());
        let path = if qs.is_empty() {
            "/tours".to_string()
        } else {
            format!("/tours?{}", qs)
        };
        navigate(
            &path,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    });

    let categories = Memo::new(move |_| tours.with(|t| categories_of(t)));
    let filtered = Memo::new(move |_| tours.with(|t| state.with(|s| s.apply(t))));

    view! {
        <div class="page">
            <PageHeader
                title="Tour Packages"
                subtitle="Find the perfect tour for your next adventure"
            />

            <div class="tour-list">
                <aside class="tour-list__filters">
                    <div class="form__group">
                        <label class="form__label" for="tour-search">"Search"</label>
                        <input
                            id="tour-search"
                            class="form__input"
                            type="search"
                            placeholder="Search tours..."
                            prop:value=move || state.with(|s| s.q.clone())
                            on:input=move |ev| {
                                let q = event_target_value(&ev);
                                state.update(|s| s.q = q);
                            }
                        />
                    </div>

                    <div class="form__group">
                        <span class="form__label">"Categories"</span>
                        <For
                            each=move || categories.get()
                            key=|c| c.clone()
                            children=move |category: String| {
                                let id = format!("category-{}", category.to_lowercase());
                                let checked_name = category.clone();
                                let toggled_name = category.clone();
                                view! {
                                    <Checkbox
                                        id=id
                                        label=category
                                        checked=Signal::derive(move || state.with(|s| s.categories.contains(&checked_name)))
                                        on_change=Callback::new(move |_| state.update(|s| s.toggle(&toggled_name)))
                                    />
                                }
                            }
                        />
                    </div>

                    <Show when=move || state.with(|s| s.is_filtered())>
                        <Button
                            variant="ghost"
                            size="sm"
                            on_click=Callback::new(move |_| state.set(TourListState::default()))
                        >
                            "Clear filters"
                        </Button>
                    </Show>
                </aside>

                <section class="tour-list__results">
                    {move || {
                        if is_loading.get() {
                            return view! { <div class="loading">"Loading tours..."</div> }.into_any();
                        }
                        if let Some(e) = error.get() {
                            return view! { <div class="alert alert--error">{e}</div> }.into_any();
                        }
                        let items = filtered.get();
                        if items.is_empty() {
                            return view! {
                                <div class="empty-state">
                                    <h3>"No tours found"</h3>
                                    <p>"Try adjusting your search or filters."</p>
                                </div>
                            }
                            .into_any();
                        }
                        view! {
                            <p class="tour-list__count">{format!("{} tours found", items.len())}</p>
                            <div class="tour-grid">
                                {items.into_iter().map(|tour| view! { <TourCard tour=tour/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                </section>
            </div>
        </div>
    }
}
