use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Время показа уведомления
const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Сервис всплывающих уведомлений.
///
/// ```rust,no_run
/// # use frontend::layout::toast_service::use_toast;
/// let toast = use_toast();
/// toast.success("Booking confirmed!", Some("Check your email".into()));
/// ```
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: Option<String>) {
        self.show(ToastKind::Success, title.into(), description);
    }

    pub fn error(&self, title: impl Into<String>, description: Option<String>) {
        self.show(ToastKind::Error, title.into(), description);
    }

    pub fn info(&self, title: impl Into<String>, description: Option<String>) {
        self.show(ToastKind::Info, title.into(), description);
    }

    /// Показать уведомление; оно закроется само через `TOAST_TIMEOUT_MS`
    pub fn show(&self, kind: ToastKind, title: String, description: Option<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                kind,
                title,
                description,
            })
        });

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            service.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Контейнер уведомлений в правом нижнем углу
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.title}</div>
                                {toast.description.map(|d| view! { <div class="toast__description">{d}</div> })}
                            </div>
                            <button class="toast__close" aria-label="Close" on:click=move |_| service.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
