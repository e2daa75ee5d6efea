use crate::dashboards::d400_overview::ui::bookings::DashboardBookings;
use crate::dashboards::d400_overview::ui::layout::DashboardLayout;
use crate::dashboards::d400_overview::ui::overview::DashboardOverview;
use crate::dashboards::d400_overview::ui::profile::ProfileTab;
use crate::dashboards::d400_overview::ui::settings::SettingsTab;
use crate::dashboards::d400_overview::ui::tour_management::TourManagement;
use crate::domain::a001_tour::ui::details::TourDetailsPage;
use crate::domain::a001_tour::ui::list::TourListPage;
use crate::domain::a002_booking::ui::form::BookTourPage;
use crate::domain::a003_feedback::ui::FeedbackPage;
use crate::layout::footer::footer::Footer;
use crate::layout::header::header::Header;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/tours") view=TourListPage />
                    <Route path=path!("/tours/:id") view=TourDetailsPage />
                    <Route path=path!("/book") view=BookTourPage />
                    <Route path=path!("/feedback") view=FeedbackPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                        <Route path=path!("") view=DashboardOverview />
                        <Route path=path!("tours") view=TourManagement />
                        <Route path=path!("bookings") view=DashboardBookings />
                        <Route path=path!("profile") view=ProfileTab />
                        <Route path=path!("settings") view=SettingsTab />
                    </ParentRoute>
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
