use api::Role;
use dioxus::prelude::*;

use crate::components::{Avatar, Chip};
use crate::use_auth;

/// Card describing the signed-in user.
#[component]
pub fn UserProfile() -> Element {
    let auth = use_auth();
    let Some(session) = auth().session else {
        return rsx! {
            div { class: "card profile-card",
                h2 { class: "text-error", "No user logged in." }
            }
        };
    };

    let role = Role::parse(&session.role);
    let (status, status_color) = if session.active {
        ("Active", "#4caf50")
    } else {
        ("Inactive", "#f44336")
    };

    rsx! {
        document::Title { "Admin - Profile" }
        div { class: "card profile-card",
            div { class: "profile-head",
                Avatar {
                    first_name: session.first_name.clone(),
                    last_name: session.last_name.clone(),
                    image: session.image_path.clone(),
                }
                h2 { "{session.display_name()}" }
                p { class: "muted", "{role.label()}" }
                Chip { label: status.to_string(), color: status_color.to_string() }
            }
            dl { class: "profile-fields",
                dt { "Email" }
                dd { "{session.email}" }
                dt { "Username" }
                dd { "{session.username}" }
                dt { "Role" }
                dd { "{session.role}" }
                dt { "Status" }
                dd { Chip { label: status.to_string(), color: status_color.to_string() } }
            }
        }
    }
}
