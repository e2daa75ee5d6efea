use crate::system::auth::context::{logout, use_auth};
use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();
    // Мобильное меню: локальное состояние компонента
    let menu_open = RwSignal::new(false);

    // Закрываем меню при переходе на другую страницу
    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        menu_open.set(false);
    });

    let is_logged_in = move || auth_state.get().session.is_some();

    let on_logout = move |_| {
        logout(set_auth_state);
        toast.info("You have been logged out", None);
        navigate("/", Default::default());
    };

    let links = move || {
        view! {
            <A href="/" exact=true>"Home"</A>
            <A href="/tours">"Tours"</A>
            <A href="/book">"Book a Tour"</A>
            <A href="/feedback">"Feedback"</A>
            <Show when=is_logged_in>
                <A href="/dashboard">"Dashboard"</A>
            </Show>
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"TourismApp"</A>
                <nav class="header__nav">{links}</nav>
            </div>
            <div class="header__actions">
                <Show
                    when=is_logged_in
                    fallback=|| view! {
                        <A href="/login" attr:class="button button--ghost">"Login"</A>
                        <A href="/register" attr:class="button button--primary">"Register"</A>
                    }
                >
                    <span class="header__user">
                        {move || auth_state.get().session.map(|s| s.first_name().to_string())}
                    </span>
                    <button class="button button--ghost" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
                <button
                    class="button button--ghost header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("close") } else { icon("menu") }}
                </button>
            </div>
        </header>
        <Show when=move || menu_open.get()>
            <nav class="header__mobile-nav">{links}</nav>
        </Show>
    }
}
