use api::{ApiError, Role, User};
use dioxus::prelude::*;

use crate::brands::{FaGithub, FaLinkedin};
use crate::components::{Alert, IconButton};
use crate::icons::{FaBars, FaBriefcase, FaClockRotateLeft, FaHouse, FaUserShield};
use crate::{use_site_config, Icon, LoginModal, ThemeToggle};

/// Public pages reachable from the navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicPage {
    Home,
    Timeline,
    Projects,
}

/// Sticky app bar with the navigation drawer, the theme toggle and the
/// back-office entry point.
///
/// "Admin" opens the sign-in dialog. Accounts allowed in the back-office
/// trigger `on_admin`; plain users get an access-denied banner.
#[component]
pub fn Header(on_navigate: EventHandler<PublicPage>, on_admin: EventHandler<()>) -> Element {
    let config = use_site_config();
    let mut drawer_open = use_signal(|| false);
    let mut login_open = use_signal(|| false);
    let mut denied = use_signal(|| Option::<&'static str>::None);

    let mut go = move |page: PublicPage| {
        drawer_open.set(false);
        on_navigate.call(page);
    };

    let handle_login = move |user: User| {
        if Role::from_user(&user).can_access_admin() {
            denied.set(None);
            on_admin.call(());
        } else {
            tracing::info!("{} may not open the back-office", user.username);
            denied.set(Some(ApiError::Forbidden(user.role).user_message()));
        }
    };

    rsx! {
        header { class: "app-bar",
            IconButton {
                label: "menu",
                onclick: move |_| drawer_open.set(true),
                Icon { icon: FaBars, width: 20, height: 20 }
            }
            span { class: "app-bar-title", "{config.site.owner}" }
            if let Some(url) = config.site.github_url.clone() {
                a { class: "icon-button", href: "{url}", target: "_blank", title: "GitHub",
                    Icon { icon: FaGithub, width: 18, height: 18 }
                }
            }
            if let Some(url) = config.site.linkedin_url.clone() {
                a { class: "icon-button", href: "{url}", target: "_blank", title: "LinkedIn",
                    Icon { icon: FaLinkedin, width: 18, height: 18 }
                }
            }
            ThemeToggle {}
        }

        if let Some(message) = denied() {
            div { class: "app-bar-alert",
                Alert { message: message.to_string(), on_dismiss: move |_| denied.set(None) }
            }
        }

        if drawer_open() {
            div {
                class: "drawer-backdrop",
                onclick: move |_| drawer_open.set(false),
                nav {
                    class: "drawer",
                    "aria-label": "Navigation menu",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    h2 { class: "drawer-title", "Navigation" }
                    ul { class: "drawer-list",
                        li {
                            button { class: "drawer-item", onclick: move |_| go(PublicPage::Home),
                                Icon { icon: FaHouse, width: 18, height: 18 }
                                span { "Home" }
                            }
                        }
                        li {
                            button { class: "drawer-item", onclick: move |_| go(PublicPage::Timeline),
                                Icon { icon: FaClockRotateLeft, width: 18, height: 18 }
                                span { "Timeline" }
                            }
                        }
                        li {
                            button { class: "drawer-item", onclick: move |_| go(PublicPage::Projects),
                                Icon { icon: FaBriefcase, width: 18, height: 18 }
                                span { "Projects" }
                            }
                        }
                        li {
                            button {
                                class: "drawer-item",
                                onclick: move |_| {
                                    drawer_open.set(false);
                                    login_open.set(true);
                                },
                                Icon { icon: FaUserShield, width: 18, height: 18 }
                                span { "Admin" }
                            }
                        }
                    }
                }
            }
        }

        if login_open() {
            LoginModal {
                on_close: move |_| login_open.set(false),
                on_success: handle_login,
            }
        }
    }
}
