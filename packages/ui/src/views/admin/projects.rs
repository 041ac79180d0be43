use api::models::{parse_date, PROJECT_STATUSES, PROJECT_TYPES};
use api::{Project, RecordId};
use dioxus::prelude::*;

use super::table::{use_admin_table, AdminTable};
use crate::color::admin_status_color;
use crate::components::{
    Alert, Button, ButtonVariant, Checkbox, Chip, Field, Input, Select, Spinner, Textarea,
};
use crate::format::{date_input_value, format_date_fr, matches_query, split_images, split_technologies};
use crate::icons::{FaEye, FaPen, FaPlus, FaTrash};
use crate::views::ModalOverlay;
use crate::Icon;

fn row_matches(project: &Project, query: &str) -> bool {
    let id = project.id.as_ref().map(ToString::to_string).unwrap_or_default();
    matches_query(
        [
            id.as_str(),
            project.title.as_str(),
            project.subtitle.as_str(),
            project.status.as_str(),
            project.kind.as_str(),
            project.technologies.as_str(),
        ],
        query,
    )
}

fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Project management: list, quick filter, create, edit, view, delete.
#[component]
pub fn ProjectTable() -> Element {
    let AdminTable {
        rows,
        loading,
        mut error,
        mut editing,
        save,
        delete,
    } = use_admin_table::<Project>();
    let mut query = use_signal(String::new);
    let mut viewing = use_signal(|| Option::<Project>::None);

    let visible: Vec<Project> = rows
        .read()
        .iter()
        .filter(|p| row_matches(p, &query()))
        .cloned()
        .collect();

    rsx! {
        document::Title { "Admin - Projects" }
        if let Some(message) = error() {
            Alert { message, on_dismiss: move |_| error.set(None) }
        }
        div { class: "table-toolbar",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| editing.set(Some(Project::blank())),
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "Add a project" }
            }
            Input {
                id: "project-filter",
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
                        th { "Status" }
                        th { "Type" }
                        th { "Public" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for (i, project) in visible.into_iter().enumerate() {
                        ProjectRow {
                            key: "{i}",
                            project,
                            on_edit: move |p| editing.set(Some(p)),
                            on_view: move |p| viewing.set(Some(p)),
                            on_delete: move |id| delete.call(id),
                        }
                    }
                }
            }
        }
        if let Some(project) = editing() {
            ProjectForm {
                initial: project,
                on_save: move |form| save.call(form),
                on_cancel: move |_| editing.set(None),
            }
        }
        if let Some(project) = viewing() {
            ProjectViewModal { project, on_close: move |_| viewing.set(None) }
        }
    }
}

#[component]
fn ProjectRow(
    project: Project,
    on_edit: EventHandler<Project>,
    on_view: EventHandler<Project>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    let id = project.id.as_ref().map(ToString::to_string).unwrap_or_default();
    let record_id = project.id.clone();
    let (public, public_class) = if project.is_public {
        ("Yes", "text-success")
    } else {
        ("No", "text-error")
    };
    let edited = project.clone();
    let viewed = project.clone();

    rsx! {
        tr {
            td { "{id}" }
            td { "{project.title}" }
            td { "{project.subtitle}" }
            td { "{project.status}" }
            td { "{project.kind}" }
            td { class: "{public_class}", "{public}" }
            td { class: "row-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    title: "Edit",
                    onclick: move |_| on_edit.call(edited.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    title: "View",
                    onclick: move |_| on_view.call(viewed.clone()),
                    Icon { icon: FaEye, width: 12, height: 12 }
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
fn ProjectForm(initial: Project, on_save: EventHandler<Project>, on_cancel: EventHandler<()>) -> Element {
    let title = if initial.id.is_some() { "Edit project" } else { "Add a project" };
    let mut draft = use_signal(move || initial);
    let current = draft();

    rsx! {
        ModalOverlay { title: title.to_string(), wide: true, on_close: move |_| on_cancel.call(()),
            form {
                class: "form form-grid",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_save.call(draft());
                },
                Field { id: "project-title", label: "Title",
                    Input { id: "project-title", value: current.title.clone(), required: true,
                        oninput: move |evt: FormEvent| draft.write().title = evt.value() }
                }
                Field { id: "project-subtitle", label: "Subtitle",
                    Input { id: "project-subtitle", value: current.subtitle.clone(),
                        oninput: move |evt: FormEvent| draft.write().subtitle = evt.value() }
                }
                div { class: "span-2",
                    Field { id: "project-description", label: "Description (markdown)",
                        Textarea { id: "project-description", value: current.description.clone(), rows: 6,
                            oninput: move |evt: FormEvent| draft.write().description = evt.value() }
                    }
                }
                Field { id: "project-technologies", label: "Technologies (comma separated)",
                    Input { id: "project-technologies", value: current.technologies.clone(),
                        oninput: move |evt: FormEvent| draft.write().technologies = evt.value() }
                }
                Field { id: "project-status", label: "Status",
                    Select { id: "project-status", value: current.status.clone(),
                        options: options(&PROJECT_STATUSES), placeholder: "Choose a status",
                        onchange: move |v| draft.write().status = v }
                }
                Field { id: "project-type", label: "Type",
                    Select { id: "project-type", value: current.kind.clone(),
                        options: options(&PROJECT_TYPES), placeholder: "Choose a type",
                        onchange: move |v| draft.write().kind = v }
                }
                Field { id: "project-start", label: "Start date",
                    Input { id: "project-start", r#type: "date", value: date_input_value(current.start_date),
                        oninput: move |evt: FormEvent| draft.write().start_date = parse_date(&evt.value()) }
                }
                Field { id: "project-end", label: "End date",
                    Input { id: "project-end", r#type: "date", value: date_input_value(current.end_date),
                        oninput: move |evt: FormEvent| draft.write().end_date = parse_date(&evt.value()) }
                }
                Field { id: "project-cover", label: "Cover image",
                    Input { id: "project-cover", r#type: "url", value: current.cover_image.clone(),
                        oninput: move |evt: FormEvent| draft.write().cover_image = evt.value() }
                }
                Field { id: "project-images", label: "Other images (separated by |£|)",
                    Input { id: "project-images", value: current.other_images.clone(),
                        oninput: move |evt: FormEvent| draft.write().other_images = evt.value() }
                }
                Field { id: "project-live", label: "Live URL",
                    Input { id: "project-live", r#type: "url", value: current.live_url.clone(),
                        oninput: move |evt: FormEvent| draft.write().live_url = evt.value() }
                }
                Field { id: "project-repo", label: "Repository URL",
                    Input { id: "project-repo", r#type: "url", value: current.repository_url.clone(),
                        oninput: move |evt: FormEvent| draft.write().repository_url = evt.value() }
                }
                Field { id: "project-client", label: "Client",
                    Input { id: "project-client", value: current.client.clone(),
                        oninput: move |evt: FormEvent| draft.write().client = evt.value() }
                }
                Field { id: "project-tags", label: "Tags",
                    Input { id: "project-tags", value: current.tags.clone(),
                        oninput: move |evt: FormEvent| draft.write().tags = evt.value() }
                }
                Checkbox { id: "project-public", label: "Public", checked: current.is_public,
                    onchange: move |checked| draft.write().is_public = checked }
                div { class: "modal-actions span-2",
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_cancel.call(()), "Cancel" }
                    Button { variant: ButtonVariant::Primary, r#type: "submit", "Save" }
                }
            }
        }
    }
}

/// Read-only summary of every project field.
#[component]
fn ProjectViewModal(project: Project, on_close: EventHandler<()>) -> Element {
    let technologies = split_technologies(&project.technologies);
    let images = split_images(&project.other_images);
    let start = project.start_date.map(format_date_fr).unwrap_or_else(|| "Not set".into());
    let end = project.end_date.map(format_date_fr).unwrap_or_else(|| "Not set".into());
    let badge = admin_status_color(&project.status);

    rsx! {
        ModalOverlay { title: "Project details", wide: true, on_close: move |_| on_close.call(()),
            dl { class: "detail-list",
                dt { "Title" }
                dd { "{project.title}" }
                dt { "Subtitle" }
                dd { em { "{project.subtitle}" } }
                dt { "Description" }
                dd { "{project.description}" }
                dt { "Technologies" }
                dd { class: "chip-row",
                    for (i, tech) in technologies.into_iter().enumerate() {
                        Chip { key: "{i}", label: tech }
                    }
                }
                dt { "Status" }
                dd { Chip { label: project.status.clone(), color: badge.to_string() } }
                dt { "Type" }
                dd { "{project.kind}" }
                dt { "Dates" }
                dd { "{start} → {end}" }
                dt { "Public" }
                dd { if project.is_public { "Yes" } else { "No" } }
                dt { "Client" }
                dd { "{project.client}" }
                dt { "Tags" }
                dd { "{project.tags}" }
                dt { "Links" }
                dd {
                    if !project.live_url.is_empty() {
                        a { href: "{project.live_url}", target: "_blank", "{project.live_url}" }
                    }
                    if !project.repository_url.is_empty() {
                        br {}
                        a { href: "{project.repository_url}", target: "_blank", "{project.repository_url}" }
                    }
                }
            }
            if !project.cover_image.is_empty() {
                img { class: "detail-cover", src: "{project.cover_image}", alt: "{project.title}" }
            }
            if !images.is_empty() {
                div { class: "thumb-row",
                    for (i, src) in images.into_iter().enumerate() {
                        img { key: "{i}", class: "thumb", src: "{src}", alt: "" }
                    }
                }
            }
            div { class: "modal-actions",
                Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Close" }
            }
        }
    }
}
