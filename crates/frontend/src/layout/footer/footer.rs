use crate::shared::api_utils::api_url;
use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Server: Online",
            ServerStatus::Offline => "Server: Offline",
            ServerStatus::Checking => "Server: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Проверка сервера при монтировании
    Effect::new(move |_| {
        status.set(ServerStatus::Checking);
        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    let year = Utc::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <h3>"TourismApp"</h3>
                    <p>"Discover amazing places with our premium tour packages."</p>
                </div>
                <div class="footer__column">
                    <h3>"Quick Links"</h3>
                    <ul>
                        <li><A href="/">"Home"</A></li>
                        <li><A href="/tours">"Tours"</A></li>
                        <li><A href="/login">"Login"</A></li>
                        <li><A href="/register">"Register"</A></li>
                    </ul>
                </div>
                <div class="footer__column">
                    <h3>"Contact Us"</h3>
                    <p>"Email: contact@tourismapp.com"</p>
                    <p>"Phone: +1 123 456 7890"</p>
                </div>
            </div>
            <div class="status-bar">
                <span>{format!("© {} TourismApp. All rights reserved.", year)}</span>
                <span class=move || status.get().css_class()>
                    {move || status.get().display_text()}
                </span>
            </div>
        </footer>
    }
}

async fn ping_server() -> bool {
    match gloo_net::http::Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}
