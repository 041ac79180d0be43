use dioxus::prelude::*;

use ui::views::{HomeView, ProjectsView, TimelineView};
use ui::{Header, PublicPage};

use crate::Route;

fn page_route(page: PublicPage) -> Route {
    match page {
        PublicPage::Home => Route::Home {},
        PublicPage::Timeline => Route::Timeline {},
        PublicPage::Projects => Route::Projects {},
    }
}

/// Public shell: app bar and drawer around the routed page.
#[component]
pub fn PublicLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        Header {
            on_navigate: move |page| {
                nav.push(page_route(page));
            },
            on_admin: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
        main { Outlet::<Route> {} }
    }
}

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            on_discover: move |_| {
                nav.push(Route::Projects {});
            },
        }
    }
}

#[component]
pub fn Timeline() -> Element {
    rsx! { TimelineView {} }
}

#[component]
pub fn Projects() -> Element {
    rsx! { ProjectsView {} }
}

/// Unknown paths go back to the home page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}, redirecting home", segments.join("/"));
    nav.replace(Route::Home {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_page_paths() {
        assert_eq!(page_route(PublicPage::Home).to_string(), "/");
        assert_eq!(page_route(PublicPage::Timeline).to_string(), "/timeline");
        assert_eq!(page_route(PublicPage::Projects).to_string(), "/projets");
    }
}
