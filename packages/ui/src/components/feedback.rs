use dioxus::prelude::*;

/// Error banner for failed requests.
#[component]
pub fn Alert(message: String, on_dismiss: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "alert alert-error", role: "alert",
            span { "{message}" }
            if let Some(handler) = on_dismiss {
                button {
                    class: "alert-close",
                    r#type: "button",
                    "aria-label": "dismiss",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner", role: "progressbar" }
        }
    }
}

/// Placeholder shown when a list is empty.
#[component]
pub fn EmptyState(message: String, children: Element) -> Element {
    rsx! {
        div { class: "empty-state",
            {children}
            p { "{message}" }
        }
    }
}
