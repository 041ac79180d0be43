use api::models::{parse_date, TIMELINE_TYPES};
use api::{RecordId, TimelineEntry};
use dioxus::prelude::*;

use super::table::{use_admin_table, AdminTable};
use super::IconSelector;
use crate::components::{Alert, Button, ButtonVariant, Field, Input, Select, Spinner, Textarea};
use crate::format::{date_input_value, format_date_fr, matches_query};
use crate::icon_catalog::{timeline_type_icon, GlyphIcon};
use crate::icons::{FaIcons, FaPen, FaPlus, FaTrash, FaXmark};
use crate::views::ModalOverlay;
use crate::Icon;

/// Longest description shown in a table cell before it is cut.
const DESCRIPTION_PREVIEW: usize = 60;

fn row_matches(entry: &TimelineEntry, query: &str) -> bool {
    let id = entry.id.as_ref().map(ToString::to_string).unwrap_or_default();
    let date = entry.date.map(format_date_fr).unwrap_or_default();
    matches_query(
        [
            id.as_str(),
            entry.title.as_str(),
            entry.subtitle.as_str(),
            entry.kind.as_str(),
            date.as_str(),
            entry.description.as_str(),
        ],
        query,
    )
}

fn preview(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_PREVIEW {
        return text.to_string();
    }
    let cut: String = text.chars().take(DESCRIPTION_PREVIEW).collect();
    format!("{}…", cut.trim_end())
}

/// Timeline management: list, quick filter, create, edit, delete.
#[component]
pub fn TimelineTable() -> Element {
    let AdminTable {
        rows,
        loading,
        mut error,
        mut editing,
        save,
        delete,
    } = use_admin_table::<TimelineEntry>();
    let mut query = use_signal(String::new);

    let visible: Vec<TimelineEntry> = rows
        .read()
        .iter()
        .filter(|t| row_matches(t, &query()))
        .cloned()
        .collect();

    rsx! {
        document::Title { "Admin - Timeline" }
        if let Some(message) = error() {
            Alert { message, on_dismiss: move |_| error.set(None) }
        }
        div { class: "table-toolbar",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| editing.set(Some(TimelineEntry::default())),
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "Add an entry" }
            }
            Input {
                id: "timeline-filter",
                placeholder: "Search...",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
        }
        if loading() {
            Spinner {}
        } else {
            table { class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Title" }
                        th { "Subtitle" }
                        th { "Type" }
                        th { "Date" }
                        th { "Description" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for (i, entry) in visible.into_iter().enumerate() {
                        TimelineRow {
                            key: "{i}",
                            entry,
                            on_edit: move |t| editing.set(Some(t)),
                            on_delete: move |id| delete.call(id),
                        }
                    }
                }
            }
        }
        if let Some(entry) = editing() {
            TimelineForm {
                initial: entry,
                on_save: move |entry| save.call(entry),
                on_cancel: move |_| editing.set(None),
            }
        }
    }
}

#[component]
fn TimelineRow(
    entry: TimelineEntry,
    on_edit: EventHandler<TimelineEntry>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let id = entry.id.as_ref().map(ToString::to_string).unwrap_or_default();
    let record_id = entry.id.clone();
    let date = entry.date.map(format_date_fr).unwrap_or_default();
    let description = preview(&entry.description);
    let edited = entry.clone();

    rsx! {
        tr {
            td { "{id}" }
            td { "{entry.title}" }
            td { "{entry.subtitle}" }
            td { "{entry.kind}" }
            td { "{date}" }
            td { class: "muted", "{description}" }
            td { class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    title: "Edit",
                    onclick: move |_| on_edit.call(edited.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                if let Some(rid) = record_id {
                    Button {
                        variant: ButtonVariant::Danger,
                        title: "Delete",
                        onclick: move |_| on_delete.call(rid.clone()),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[component]
fn TimelineForm(
    initial: TimelineEntry,
    on_save: EventHandler<TimelineEntry>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if initial.id.is_some() { "Edit entry" } else { "Add an entry" };
    let mut draft = use_signal(move || initial);
    let mut picking_icon = use_signal(|| false);
    let current = draft();

    let kinds: Vec<String> = TIMELINE_TYPES.iter().map(|t| t.to_string()).collect();
    // Preview falls back to the category icon when no custom icon is set.
    let preview_icon = current
        .custom_icon
        .clone()
        .unwrap_or_else(|| timeline_type_icon(current.kind()).name.to_string());
    let has_custom = current.custom_icon.is_some();

    rsx! {
        ModalOverlay { title: title.to_string(), on_close: move |_| on_cancel.call(()),
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_save.call(draft());
                },
                Field { id: "timeline-title", label: "Title",
                    Input { id: "timeline-title", value: current.title.clone(), required: true,
                        oninput: move |evt: FormEvent| draft.write().title = evt.value() }
                }
                Field { id: "timeline-subtitle", label: "Subtitle",
                    Input { id: "timeline-subtitle", value: current.subtitle.clone(),
                        oninput: move |evt: FormEvent| draft.write().subtitle = evt.value() }
                }
                Field { id: "timeline-type", label: "Type",
                    Select { id: "timeline-type", value: current.kind.clone(), options: kinds,
                        placeholder: "Choose a type",
                        onchange: move |kind| draft.write().kind = kind }
                }
                Field { id: "timeline-date", label: "Date",
                    Input { id: "timeline-date", r#type: "date", value: date_input_value(current.date),
                        oninput: move |evt: FormEvent| draft.write().date = parse_date(&evt.value()) }
                }
                Field { id: "timeline-description", label: "Description (markdown)",
                    Textarea { id: "timeline-description", value: current.description.clone(), rows: 5,
                        oninput: move |evt: FormEvent| draft.write().description = evt.value() }
                }
                div { class: "field",
                    span { class: "label", "Icon" }
                    div { class: "icon-preview",
                        GlyphIcon { name: preview_icon.clone(), size: 32 }
                        span { class: "muted",
                            if has_custom { "{preview_icon}" } else { "Default for the type" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| picking_icon.set(true),
                            Icon { icon: FaIcons, width: 14, height: 14 }
                            span { "Choose an icon" }
                        }
                        if has_custom {
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Remove the custom icon",
                                onclick: move |_| draft.write().custom_icon = None,
                                Icon { icon: FaXmark, width: 14, height: 14 }
                            }
                        }
                    }
                }
                div { class: "modal-actions",
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_cancel.call(()), "Cancel" }
                    Button { variant: ButtonVariant::Primary, r#type: "submit", "Save" }
                }
            }
        }
        if picking_icon() {
            IconSelector {
                on_select: move |name| {
                    draft.write().custom_icon = Some(name);
                    picking_icon.set(false);
                },
                on_cancel: move |_| picking_icon.set(false),
            }
        }
    }
}
