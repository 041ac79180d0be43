use api::Project;
use dioxus::prelude::*;

use crate::color::{status_color, tech_chip_color, CARD_CHIP_FACTOR, DETAIL_CHIP_FACTOR};
use crate::components::{Alert, Button, ButtonVariant, Chip, EmptyState, Spinner};
use crate::format::{carousel_images, carousel_step, format_date_long, split_technologies};
use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::views::ModalOverlay;
use crate::{use_api, Icon, Markdown};

/// Project gallery. Clicking a card opens the detail dialog.
#[component]
pub fn ProjectsView() -> Element {
    let client = use_api();
    let mut selected = use_signal(|| Option::<Project>::None);

    let projects = use_resource(move || {
        let client = client.clone();
        async move {
            client
                .list_projects()
                .await
                .map(|page| page.into_content())
                .inspect_err(|e| tracing::error!("Failed to load projects: {e}"))
        }
    });

    let body = match &*projects.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! {
            Alert { message: format!("Could not load the projects. {}", e.user_message()) }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { message: "No project found." }
        },
        Some(Ok(list)) => rsx! {
            div { class: "card-grid",
                for (i, project) in list.iter().enumerate() {
                    ProjectCard {
                        key: "{i}",
                        project: project.clone(),
                        on_open: move |project| selected.set(Some(project)),
                    }
                }
            }
        },
    };

    rsx! {
        document::Title { "Projects - My Portfolio" }
        section { class: "page",
            div { class: "page-intro",
                h1 { class: "page-title", "My Projects" }
                p { class: "muted",
                    "The projects I have worked on, with details and links to their repositories or live sites."
                }
            }
            {body}
        }
        if let Some(project) = selected() {
            ProjectDetail { project, on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn ProjectCard(project: Project, on_open: EventHandler<Project>) -> Element {
    let technologies = split_technologies(&project.technologies);
    let opened = project.clone();

    rsx! {
        article {
            class: "card project-card",
            onclick: move |_| on_open.call(opened.clone()),
            if !project.cover_image.is_empty() {
                img { class: "card-media", src: "{project.cover_image}", alt: "{project.title}" }
            }
            div { class: "card-body",
                h3 { "{project.title}" }
                p { class: "muted", "{project.subtitle}" }
                div { class: "chip-row",
                    for (i, tech) in technologies.into_iter().enumerate() {
                        Chip {
                            key: "{i}",
                            color: tech_chip_color(&tech, CARD_CHIP_FACTOR),
                            label: tech,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectDetail(project: Project, on_close: EventHandler<()>) -> Element {
    let images = carousel_images(&project.other_images, &project.cover_image);
    let count = images.len();
    let mut index = use_signal(|| 0usize);
    let technologies = split_technologies(&project.technologies);
    let tags = if project.tags.trim().is_empty() {
        "None".to_string()
    } else {
        project.tags.clone()
    };

    rsx! {
        ModalOverlay { wide: true, on_close: move |_| on_close.call(()),
            if let Some(src) = images.get(index().min(count.saturating_sub(1))) {
                div { class: "carousel",
                    img { class: "carousel-image", src: "{src}", alt: "Image {index() + 1}" }
                    if count > 1 {
                        button {
                            class: "icon-button carousel-arrow prev",
                            "aria-label": "previous image",
                            onclick: move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                index.set(carousel_step(index(), count, false));
                            },
                            Icon { icon: FaChevronLeft, width: 18, height: 18 }
                        }
                        button {
                            class: "icon-button carousel-arrow next",
                            "aria-label": "next image",
                            onclick: move |evt: Event<MouseData>| {
                                evt.stop_propagation();
                                index.set(carousel_step(index(), count, true));
                            },
                            Icon { icon: FaChevronRight, width: 18, height: 18 }
                        }
                        span { class: "carousel-counter", "{index() + 1} / {count}" }
                    }
                }
            }

            h2 { class: "modal-title", "{project.title}" }
            h4 { "{project.subtitle}" }
            Markdown { source: project.description.clone(), fallback: "No description available." }

            p { class: "muted", strong { "Tags: " } "{tags}" }

            div { class: "chip-row",
                if technologies.is_empty() {
                    span { class: "muted", "Not specified" }
                }
                for (i, tech) in technologies.into_iter().enumerate() {
                    Chip {
                        key: "{i}",
                        color: tech_chip_color(&tech, DETAIL_CHIP_FACTOR),
                        label: tech,
                    }
                }
            }

            div { class: "detail-row",
                strong { "Status: " }
                if project.status.is_empty() {
                    span { class: "muted", "Undefined" }
                } else {
                    Chip { label: project.status.clone(), color: status_color(&project.status).to_string() }
                }
            }

            if let Some(start) = project.start_date {
                p { class: "muted", strong { "Start: " } "{format_date_long(start)}" }
            }
            if let Some(end) = project.end_date {
                p { class: "muted", strong { "End: " } "{format_date_long(end)}" }
            }

            div { class: "modal-actions",
                if !project.live_url.is_empty() {
                    a { class: "btn btn-primary", href: "{project.live_url}", target: "_blank", "View site" }
                }
                if !project.repository_url.is_empty() {
                    a { class: "btn btn-outline", href: "{project.repository_url}", target: "_blank", "Repository" }
                }
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Close" }
            }
        }
    }
}
