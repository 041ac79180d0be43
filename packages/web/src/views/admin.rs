use dioxus::prelude::*;

use ui::views::admin::{
    AdminSection, DashboardLayout, DashboardPage, ExitView, ProjectTable, TimelineTable,
    UserProfile, UserTable,
};

use crate::Route;

fn section_route(section: AdminSection) -> Route {
    match section {
        AdminSection::Dashboard => Route::Dashboard {},
        AdminSection::Timeline => Route::TimelineTables {},
        AdminSection::Projects => Route::ProjectTables {},
        AdminSection::Users => Route::UserTables {},
        AdminSection::Profile => Route::Profile {},
        AdminSection::SignOut => Route::Quit {},
    }
}

/// Sidebar entry to highlight for the current route.
fn active_section(route: &Route) -> AdminSection {
    match route {
        Route::TimelineTables {} => AdminSection::Timeline,
        Route::ProjectTables {} => AdminSection::Projects,
        Route::UserTables {} => AdminSection::Users,
        Route::Profile {} => AdminSection::Profile,
        Route::Quit {} => AdminSection::SignOut,
        _ => AdminSection::Dashboard,
    }
}

#[component]
pub fn AdminLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        DashboardLayout {
            active: active_section(&route),
            on_navigate: move |section| {
                nav.push(section_route(section));
            },
            on_unauthorized: move |_| {
                nav.replace(Route::Home {});
            },
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/admin` to `/admin/dashboard`
#[component]
pub fn AdminIndex() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
pub fn TimelineTables() -> Element {
    rsx! { TimelineTable {} }
}

#[component]
pub fn ProjectTables() -> Element {
    rsx! { ProjectTable {} }
}

#[component]
pub fn UserTables() -> Element {
    rsx! { UserTable {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { UserProfile {} }
}

#[component]
pub fn Quit() -> Element {
    let nav = use_navigator();
    rsx! {
        ExitView {
            on_done: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_paths() {
        assert_eq!(section_route(AdminSection::Dashboard).to_string(), "/admin/dashboard");
        assert_eq!(section_route(AdminSection::Timeline).to_string(), "/admin/tables/timeline");
        assert_eq!(section_route(AdminSection::Projects).to_string(), "/admin/tables/project");
        assert_eq!(section_route(AdminSection::Users).to_string(), "/admin/tables/user");
        assert_eq!(section_route(AdminSection::Profile).to_string(), "/admin/profil");
        assert_eq!(section_route(AdminSection::SignOut).to_string(), "/admin/quit");
    }

    #[test]
    fn test_active_section_follows_route() {
        for section in AdminSection::ALL {
            assert_eq!(active_section(&section_route(section)), section);
        }
        assert_eq!(active_section(&Route::AdminIndex {}), AdminSection::Dashboard);
    }
}
