use contracts::enums::user_role::UserRole;
use leptos::prelude::*;
use leptos_router::components::{Outlet, A};

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireSession;

/// Вкладки кабинета: (путь, подпись, иконка)
fn tabs_for(role: UserRole) -> Vec<(&'static str, &'static str, &'static str)> {
    match role {
        UserRole::Tourist => vec![
            ("/dashboard", "Overview", "overview"),
            ("/dashboard/bookings", "My Bookings", "calendar"),
            ("/dashboard/profile", "Profile", "user"),
            ("/dashboard/settings", "Settings", "settings"),
        ],
        UserRole::Agency => vec![
            ("/dashboard", "Overview", "overview"),
            ("/dashboard/tours", "Tour Management", "tours"),
            ("/dashboard/bookings", "Bookings", "calendar"),
            ("/dashboard/profile", "Profile", "user"),
            ("/dashboard/settings", "Settings", "settings"),
        ],
    }
}

/// Оболочка `/dashboard/*`: боковое меню по роли из сессии и `<Outlet/>`
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let role = Memo::new(move |_| {
        auth_state.with(|s| s.session.as_ref().map(|s| s.role).unwrap_or_default())
    });

    view! {
        <RequireSession>
            <div class="dashboard">
                <aside class="dashboard__sidebar">
                    <div class="dashboard__user">
                        <div class="dashboard__user-name">
                            {move || auth_state.with(|s| s.session.as_ref().map(|s| s.full_name.clone()))}
                        </div>
                        <div class="dashboard__user-role">{move || role.get().display_name()}</div>
                    </div>
                    <nav class="dashboard__nav">
                        {move || {
                            tabs_for(role.get())
                                .into_iter()
                                .map(|(href, label, icon_name)| view! {
                                    <A href=href exact=true attr:class="dashboard__nav-item">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </A>
                                })
                                .collect_view()
                        }}
                    </nav>
                </aside>
                <section class="dashboard__content">
                    <Outlet/>
                </section>
            </div>
        </RequireSession>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_management_is_agency_only() {
        let has_tours = |role| tabs_for(role).iter().any(|(href, _, _)| *href == "/dashboard/tours");
        assert!(has_tours(UserRole::Agency));
        assert!(!has_tours(UserRole::Tourist));
    }

    #[test]
    fn test_common_tabs() {
        for role in UserRole::all() {
            let hrefs: Vec<_> = tabs_for(role).into_iter().map(|(href, _, _)| href).collect();
            assert_eq!(hrefs.first(), Some(&"/dashboard"));
            assert!(hrefs.contains(&"/dashboard/profile"));
            assert!(hrefs.contains(&"/dashboard/settings"));
        }
    }
}
