use api::TimelineEntry;
use dioxus::prelude::*;

use crate::components::{Alert, Button, ButtonVariant, EmptyState, Spinner};
use crate::format::{format_date_fr, sort_timeline_by_date};
use crate::icon_catalog::{timeline_type_icon, GlyphIcon};
use crate::views::ModalOverlay;
use crate::{use_api, Markdown};

/// Career timeline, oldest entry first, alternating sides.
#[component]
pub fn TimelineView() -> Element {
    let client = use_api();
    let mut selected = use_signal(|| Option::<TimelineEntry>::None);

    let entries = use_resource(move || {
        let client = client.clone();
        async move {
            let mut entries = client
                .list_timelines()
                .await
                .inspect_err(|e| tracing::error!("Failed to load timeline: {e}"))?
                .into_content();
            sort_timeline_by_date(&mut entries);
            Ok::<_, api::ApiError>(entries)
        }
    });

    let body = match &*entries.read() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => rsx! {
            Alert { message: format!("Could not load the timeline. {}", e.user_message()) }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            EmptyState { message: "Under construction",
                GlyphIcon { name: "Construction", size: 60 }
            }
        },
        Some(Ok(list)) => rsx! {
            ol { class: "timeline",
                for (i, entry) in list.iter().enumerate() {
                    TimelineItem {
                        key: "{i}",
                        entry: entry.clone(),
                        right: i % 2 == 1,
                        on_open: move |entry| selected.set(Some(entry)),
                    }
                }
            }
        },
    };

    rsx! {
        document::Title { "Timeline - My Portfolio" }
        section { class: "page",
            h1 { class: "page-title", "Portfolio Timeline" }
            {body}
        }
        if let Some(entry) = selected() {
            TimelineDetail { entry, on_close: move |_| selected.set(None) }
        }
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry, right: bool, on_open: EventHandler<TimelineEntry>) -> Element {
    let side = if right { "timeline-item right" } else { "timeline-item left" };
    let date = entry.date.map(format_date_fr).unwrap_or_default();
    let type_icon = timeline_type_icon(entry.kind());
    let icon_name = entry
        .custom_icon
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| type_icon.name.to_string());
    let opened = entry.clone();

    rsx! {
        li { class: "{side}",
            span { class: "timeline-date muted", "{date}" }
            span { class: "timeline-dot {type_icon.tone}",
                GlyphIcon { name: icon_name, size: 18 }
            }
            div {
                class: "timeline-card",
                onclick: move |_| on_open.call(opened.clone()),
                h3 { "{entry.title}" }
                p { class: "muted", "{entry.subtitle}" }
            }
        }
    }
}

#[component]
fn TimelineDetail(entry: TimelineEntry, on_close: EventHandler<()>) -> Element {
    let title = if entry.title.is_empty() {
        "Event details".to_string()
    } else {
        entry.title.clone()
    };
    let date = entry
        .date
        .map(format_date_fr)
        .unwrap_or_else(|| "Not set".to_string());

    rsx! {
        ModalOverlay { title, on_close: move |_| on_close.call(()),
            p { class: "muted", "Subtitle: {entry.subtitle}" }
            p { class: "muted", "Type: {entry.kind}" }
            p { class: "muted", "Date: {date}" }
            Markdown { source: entry.description.clone(), fallback: "No description available." }
            div { class: "modal-actions",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Close" }
            }
        }
    }
}
