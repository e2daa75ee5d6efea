use contracts::domain::a001_tour::aggregate::{Tour, TourId};
use contracts::domain::a001_tour::form::{next_tour_id, TourForm, TOUR_CATEGORIES};
use contracts::enums::tour_status::TourStatus;
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a001_tour::ui::model as tour_model;
use crate::layout::toast_service::use_toast;
use crate::shared::components::ui::{Button, Input, Select, Textarea, TourStatusBadge};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::system::auth::guard::RequireAgency;

/// Управление турами агентства.
///
/// Изменения живут только в списке на странице: каталог на сервере
/// не редактируется.
#[component]
pub fn TourManagement() -> impl IntoView {
    view! {
        <RequireAgency>
            <TourManagementList/>
        </RequireAgency>
    }
}

#[component]
fn TourManagementList() -> impl IntoView {
    let toast = use_toast();
    let tours = RwSignal::new(Vec::<Tour>::new());
    let is_loading = RwSignal::new(true);

    spawn_local(async move {
        match tour_model::fetch_all().await {
            Ok(list) => tours.set(list),
            Err(e) => toast.error("Failed to load tours", Some(e)),
        }
        is_loading.set(false);
    });

    let toggle_status = move |id: TourId| {
        let mut title = None;
        tours.update(|list| {
            if let Some(t) = list.iter_mut().find(|t| t.id == id) {
                t.status = t.status.toggled();
                title = Some(format!("{} is now {}", t.title, t.status));
            }
        });
        if let Some(title) = title {
            toast.success("Tour updated successfully", Some(title));
        }
    };

    let editor = RwSignal::new(None::<TourForm>);
    let form_error = RwSignal::new(None::<String>);

    let open_new = move |_| {
        form_error.set(None);
        editor.set(Some(TourForm::default()));
    };

    let open_edit = move |id: TourId| {
        let form = tours.with_untracked(|list| list.iter().find(|t| t.id == id).map(TourForm::from_tour));
        form_error.set(None);
        editor.set(form);
    };

    let save = Callback::new(move |_: ()| {
        let Some(form) = editor.get_untracked() else {
            return;
        };
        let editing = form.is_edit_mode();
        let result = tours.with_untracked(|list| {
            let base = form.id.and_then(|id| list.iter().find(|t| t.id == id));
            form.into_tour(next_tour_id(list), base)
        });
        match result {
            Ok(tour) => {
                tours.update(|list| match list.iter().position(|t| t.id == tour.id) {
                    Some(i) => list[i] = tour,
                    None => list.push(tour),
                });
                editor.set(None);
                form_error.set(None);
                if editing {
                    toast.success("Tour updated successfully", None);
                } else {
                    toast.success("Tour created successfully", None);
                }
            }
            Err(e) => form_error.set(Some(e)),
        }
    });

    let cancel = Callback::new(move |_: ()| {
        editor.set(None);
        form_error.set(None);
    });

    let delete = move |id: TourId| {
        tours.update(|list| list.retain(|t| t.id != id));
        if editor.with_untracked(|f| f.as_ref().and_then(|f| f.id) == Some(id)) {
            editor.set(None);
        }
        toast.success("Tour deleted successfully", None);
    };

    view! {
        <PageHeader title="Tour Management" subtitle="Manage your tour packages">
            <span class="text-muted">{move || format!("{} tours", tours.with(|t| t.len()))}</span>
            <button type="button" class="button button--primary" on:click=open_new>"Add New Tour"</button>
        </PageHeader>
        <Show when=move || editor.with(|f| f.is_some())>
            <TourFormPanel editor=editor error=form_error on_save=save on_cancel=cancel/>
        </Show>
        <Show
            when=move || !is_loading.get()
            fallback=|| view! { <div class="loading">"Loading tours..."</div> }
        >
            <Show
                when=move || tours.with(|t| !t.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <h3>"No tour packages found"</h3>
                        <p>"Add your first tour package."</p>
                    </div>
                }
            >
                <div class="manage-list">
                    <For
                        each=move || tours.get()
                        // ключ меняется при любой правке тура
                        key=|t| format!("{:?}", t)
                        children=move |tour: Tour| {
                            let id = tour.id;
                            view! {
                                <div class="card manage-item">
                                    <img class="manage-item__image" src=tour.image.clone().unwrap_or_default() alt=tour.title.clone()/>
                                    <div class="manage-item__body">
                                        <div class="manage-item__header">
                                            <h3>{tour.title.clone()}</h3>
                                            <TourStatusBadge status=tour.status/>
                                        </div>
                                        <p class="text-muted">
                                            {format!("{} • {} • {}", tour.location, tour.duration, format_price(tour.price))}
                                        </p>
                                        <p class="text-muted">
                                            {format!("{} dates available", tour.available_dates.len())}
                                        </p>
                                    </div>
                                    <div class="manage-item__actions">
                                        <A href=format!("/tours/{}", id.value()) attr:class="button button--ghost button--sm">"View"</A>
                                        <button type="button" class="button button--outline button--sm" on:click=move |_| open_edit(id)>"Edit"</button>
                                        <button type="button" class="button button--outline button--sm" on:click=move |_| toggle_status(id)>
                                            {match tour.status {
                                                TourStatus::Active => "Move to Draft",
                                                TourStatus::Draft => "Publish",
                                            }}
                                        </button>
                                        <button type="button" class="button button--danger button--sm" aria-label="Delete tour" on:click=move |_| delete(id)>
                                            {icon("trash")}
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}

/// Форма добавления и редактирования тура
#[component]
fn TourFormPanel(
    editor: RwSignal<Option<TourForm>>,
    error: RwSignal<Option<String>>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let category_options = Signal::derive(move || {
        let current = editor.with(|f| f.as_ref().map(|f| f.category.clone()).unwrap_or_default());
        let mut options: Vec<(String, String)> = TOUR_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), c.to_string()))
            .collect();
        if !current.is_empty() && !TOUR_CATEGORIES.contains(&current.as_str()) {
            options.push((current.clone(), current));
        }
        options
    });
    let status_options = Signal::derive(|| {
        [TourStatus::Draft, TourStatus::Active]
            .iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string()))
            .collect::<Vec<_>>()
    });
    let date_rows = move || editor.with(|f| f.as_ref().map(|f| f.available_dates.len()).unwrap_or(0));

    view! {
        <div class="card tour-form">
            <h2>
                {move || if editor.with(|f| f.as_ref().is_some_and(|f| f.is_edit_mode())) {
                    "Edit Tour"
                } else {
                    "Add New Tour"
                }}
            </h2>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <form class="form" on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }>
                <Input
                    id="tour-title"
                    label="Title"
                    placeholder="Tour title"
                    value=form_text(editor, |f| &f.title)
                    on_input=Callback::new(move |v: String| edit_form(editor, |f| f.title = v))
                />
                <Textarea
                    id="tour-description"
                    label="Description"
                    rows=3
                    value=form_text(editor, |f| &f.description)
                    on_input=Callback::new(move |v: String| edit_form(editor, |f| f.description = v))
                />
                <div class="form__row">
                    <Input
                        id="tour-location"
                        label="Location"
                        value=form_text(editor, |f| &f.location)
                        on_input=Callback::new(move |v: String| edit_form(editor, |f| f.location = v))
                    />
                    <Select
                        id="tour-category"
                        label="Category"
                        value=form_text(editor, |f| &f.category)
                        options=category_options
                        on_change=Callback::new(move |v: String| edit_form(editor, |f| f.category = v))
                    />
                </div>
                <div class="form__row">
                    <Input
                        id="tour-price"
                        label="Price ($)"
                        input_type="number"
                        value=form_text(editor, |f| &f.price)
                        on_input=Callback::new(move |v: String| edit_form(editor, |f| f.price = v))
                    />
                    <Input
                        id="tour-duration"
                        label="Duration"
                        placeholder="e.g. 3 days"
                        value=form_text(editor, |f| &f.duration)
                        on_input=Callback::new(move |v: String| edit_form(editor, |f| f.duration = v))
                    />
                </div>
                <Input
                    id="tour-image"
                    label="Image URL"
                    value=form_text(editor, |f| &f.image)
                    on_input=Callback::new(move |v: String| edit_form(editor, |f| f.image = v))
                />
                <div class="form__group">
                    <span class="form__label">"Available Dates"</span>
                    <For
                        each=move || 0..date_rows()
                        key=|i| *i
                        children=move |i: usize| {
                            view! {
                                <div class="tour-form__date">
                                    <Input
                                        input_type="date"
                                        value=Signal::derive(move || editor.with(|f| {
                                            f.as_ref()
                                                .and_then(|f| f.available_dates.get(i).cloned())
                                                .unwrap_or_default()
                                        }))
                                        on_input=Callback::new(move |v: String| edit_form(editor, |f| f.set_date(i, v)))
                                    />
                                    <button type="button" class="button button--ghost button--sm" aria-label="Remove date" on:click=move |_| edit_form(editor, |f| f.remove_date(i))>
                                        {icon("trash")}
                                    </button>
                                </div>
                            }
                        }
                    />
                    <button type="button" class="button button--outline button--sm" on:click=move |_| edit_form(editor, |f| f.add_date())>
                        "Add Date"
                    </button>
                </div>
                <Select
                    id="tour-status"
                    label="Status"
                    value=Signal::derive(move || editor.with(|f| f.as_ref().map(|f| f.status.code().to_string()).unwrap_or_default()))
                    options=status_options
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = TourStatus::from_code(&v) {
                            edit_form(editor, |f| f.status = status);
                        }
                    })
                />
                <div class="tour-form__actions">
                    <Button variant="outline" on_click=Callback::new(move |_| on_cancel.run(()))>"Cancel"</Button>
                    <Button button_type="submit">
                        {move || if editor.with(|f| f.as_ref().is_some_and(|f| f.is_edit_mode())) {
                            "Update Tour"
                        } else {
                            "Create Tour"
                        }}
                    </Button>
                </div>
            </form>
        </div>
    }
}

fn edit_form(editor: RwSignal<Option<TourForm>>, f: impl FnOnce(&mut TourForm)) {
    editor.update(|form| {
        if let Some(form) = form.as_mut() {
            f(form);
        }
    });
}

fn form_text(editor: RwSignal<Option<TourForm>>, get: fn(&TourForm) -> &String) -> Signal<String> {
    Signal::derive(move || editor.with(|f| f.as_ref().map(|f| get(f).clone()).unwrap_or_default()))
}
