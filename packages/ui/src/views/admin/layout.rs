use dioxus::prelude::*;

use crate::icons::{
    FaBriefcase, FaClockRotateLeft, FaGauge, FaRightFromBracket, FaUser, FaUsers,
};
use crate::components::Spinner;
use crate::{use_auth, Icon, ThemeToggle};

/// Entries of the back-office sidebar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Dashboard,
    Timeline,
    Projects,
    Users,
    Profile,
    SignOut,
}

impl AdminSection {
    pub const ALL: [AdminSection; 6] = [
        AdminSection::Dashboard,
        AdminSection::Timeline,
        AdminSection::Projects,
        AdminSection::Users,
        AdminSection::Profile,
        AdminSection::SignOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminSection::Dashboard => "Dashboard",
            AdminSection::Timeline => "Timeline",
            AdminSection::Projects => "Projects",
            AdminSection::Users => "Users",
            AdminSection::Profile => "Profile",
            AdminSection::SignOut => "Sign out",
        }
    }

    /// Sidebar group heading.
    pub fn group(self) -> &'static str {
        match self {
            AdminSection::Dashboard => "General",
            AdminSection::Timeline | AdminSection::Projects | AdminSection::Users => "Tables",
            AdminSection::Profile | AdminSection::SignOut => "Settings",
        }
    }
}

#[component]
fn SectionIcon(section: AdminSection) -> Element {
    match section {
        AdminSection::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
        AdminSection::Timeline => rsx! { Icon { icon: FaClockRotateLeft, width: 16, height: 16 } },
        AdminSection::Projects => rsx! { Icon { icon: FaBriefcase, width: 16, height: 16 } },
        AdminSection::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        AdminSection::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
        AdminSection::SignOut => rsx! { Icon { icon: FaRightFromBracket, width: 16, height: 16 } },
    }
}

/// Back-office shell: sidebar navigation and a content area.
///
/// Platform packages provide navigation callbacks and an `Outlet` as children.
/// A spinner shows while the stored session is read. Without an admin session
/// nothing is rendered and `on_unauthorized` fires.
#[component]
pub fn DashboardLayout(
    active: AdminSection,
    on_navigate: EventHandler<AdminSection>,
    on_unauthorized: EventHandler<()>,
    children: Element,
) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if auth().denies_admin() {
            tracing::warn!("Back-office visited without an admin session");
            on_unauthorized.call(());
        }
    });

    if auth().loading {
        return rsx! { Spinner {} };
    }
    if !auth().is_admin() {
        return rsx! {};
    }

    let mut last_group = "";
    let mut items = Vec::new();
    for section in AdminSection::ALL {
        let heading = (section.group() != last_group).then_some(section.group());
        last_group = section.group();
        items.push((heading, section));
    }

    rsx! {
        div { class: "admin-shell",
            aside { class: "admin-sidebar",
                div { class: "admin-brand", "ADMIN PANEL" }
                nav {
                    for (heading, section) in items {
                        div { key: "{section.label()}",
                            if let Some(title) = heading {
                                p { class: "admin-group", "{title}" }
                            }
                            button {
                                class: if section == active { "admin-link active" } else { "admin-link" },
                                onclick: move |_| on_navigate.call(section),
                                SectionIcon { section }
                                span { "{section.label()}" }
                            }
                        }
                    }
                }
            }
            div { class: "admin-main",
                div { class: "admin-topbar",
                    h1 { "{active.label()}" }
                    ThemeToggle {}
                }
                div { class: "admin-content", {children} }
            }
        }
    }
}
