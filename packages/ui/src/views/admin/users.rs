use api::auth::ROLES;
use api::{RecordId, User};
use dioxus::prelude::*;

use super::table::{use_admin_table, AdminTable};
use crate::components::{Alert, Button, ButtonVariant, Checkbox, Field, Input, Select, Spinner};
use crate::format::matches_query;
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::views::ModalOverlay;
use crate::Icon;

fn row_matches(user: &User, query: &str) -> bool {
    let id = user.id.as_ref().map(ToString::to_string).unwrap_or_default();
    matches_query(
        [
            id.as_str(),
            user.username.as_str(),
            user.first_name.as_str(),
            user.last_name.as_str(),
            user.email.as_str(),
            user.role.as_str(),
        ],
        query,
    )
}

/// Account management: list, quick filter, create, edit, delete.
#[component]
pub fn UserTable() -> Element {
    let AdminTable {
        rows,
        loading,
        mut error,
        mut editing,
        save,
        delete,
    } = use_admin_table::<User>();
    let mut query = use_signal(String::new);

    let visible: Vec<User> = rows
        .read()
        .iter()
        .filter(|u| row_matches(u, &query()))
        .cloned()
        .collect();

    rsx! {
        document::Title { "Admin - Users" }
        if let Some(message) = error() {
            Alert { message, on_dismiss: move |_| error.set(None) }
        }
        div { class: "table-toolbar",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| editing.set(Some(User::blank())),
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "Create account" }
            }
            Input {
                id: "user-filter",
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
                        th { "Username" }
                        th { "First name" }
                        th { "Last name" }
                        th { "Email" }
                        th { "Role" }
                        th { "Active" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for (i, user) in visible.into_iter().enumerate() {
                        UserRow {
                            key: "{i}",
                            user,
                            on_edit: move |user| editing.set(Some(user)),
                            on_delete: move |id| delete.call(id),
                        }
                    }
                }
            }
        }
        if let Some(user) = editing() {
            UserForm {
                initial: user,
                on_save: move |form| save.call(form),
                on_cancel: move |_| editing.set(None),
            }
        }
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<RecordId>) -> Element {
    let id = user.id.as_ref().map(ToString::to_string).unwrap_or_default();
    let record_id = user.id.clone();
    let (active, active_class) = if user.active {
        ("Yes", "text-success")
    } else {
        ("No", "text-error")
    };
    let edited = user.clone();

    rsx! {
        tr {
            td { "{id}" }
            td { "{user.username}" }
            td { "{user.first_name}" }
            td { "{user.last_name}" }
            td { "{user.email}" }
            td { "{user.role}" }
            td { class: "{active_class}", "{active}" }
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
fn UserForm(initial: User, on_save: EventHandler<User>, on_cancel: EventHandler<()>) -> Element {
    let editing_existing = initial.id.is_some();
    let mut draft = use_signal(move || initial);

    let mut roles: Vec<String> = ROLES.iter().map(|r| r.to_string()).collect();
    let current_role = draft.read().role.clone();
    if !current_role.is_empty() && !roles.contains(&current_role) {
        roles.push(current_role.clone());
    }

    let title = if editing_existing { "Edit user" } else { "Add a user" };

    rsx! {
        ModalOverlay { title: title.to_string(), on_close: move |_| on_cancel.call(()),
            form {
                class: "form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_save.call(draft());
                },
                Field { id: "user-username", label: "Username",
                    Input { id: "user-username", value: draft.read().username.clone(),
                        oninput: move |evt: FormEvent| draft.write().username = evt.value() }
                }
                Field { id: "user-first-name", label: "First name",
                    Input { id: "user-first-name", value: draft.read().first_name.clone(),
                        oninput: move |evt: FormEvent| draft.write().first_name = evt.value() }
                }
                Field { id: "user-last-name", label: "Last name",
                    Input { id: "user-last-name", value: draft.read().last_name.clone(),
                        oninput: move |evt: FormEvent| draft.write().last_name = evt.value() }
                }
                Field { id: "user-email", label: "Email",
                    Input { id: "user-email", r#type: "email", value: draft.read().email.clone(),
                        oninput: move |evt: FormEvent| draft.write().email = evt.value() }
                }
                Field { id: "user-password", label: "Password",
                    Input { id: "user-password", r#type: "password", value: draft.read().password.clone(),
                        oninput: move |evt: FormEvent| draft.write().password = evt.value() }
                }
                Field { id: "user-role", label: "Role",
                    Select { id: "user-role", value: current_role, options: roles,
                        onchange: move |role| draft.write().role = role }
                }
                Checkbox { id: "user-active", label: "Active", checked: draft.read().active,
                    onchange: move |checked| draft.write().active = checked }
                div { class: "modal-actions",
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_cancel.call(()), "Cancel" }
                    Button { variant: ButtonVariant::Primary, r#type: "submit", "Save" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_filter_covers_visible_columns() {
        let user = User {
            id: Some(RecordId::Number(42)),
            username: "alacour".into(),
            email: "alex@example.com".into(),
            role: "ADMIN".into(),
            ..User::blank()
        };
        assert!(row_matches(&user, "42"));
        assert!(row_matches(&user, "EXAMPLE"));
        assert!(row_matches(&user, "admin"));
        assert!(!row_matches(&user, "guest"));
        // Passwords are not displayed and not searchable.
        let with_password = User { password: "hunter2".into(), ..user };
        assert!(!row_matches(&with_password, "hunter2"));
    }
}
