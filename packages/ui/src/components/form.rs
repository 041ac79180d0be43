use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label { class: "label", r#for: "{html_for}", {children} }
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            required,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    id: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = 4)] rows: u32,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input textarea",
            rows: "{rows}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Drop-down over a fixed list of wire values.
#[component]
pub fn Select(
    id: String,
    value: String,
    options: Vec<String>,
    onchange: EventHandler<String>,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input",
            value: "{value}",
            onchange: move |evt| onchange.call(evt.value()),
            if !placeholder.is_empty() {
                option { value: "", disabled: true, "{placeholder}" }
            }
            for opt in options {
                option { key: "{opt}", value: "{opt}", selected: opt == value, "{opt}" }
            }
        }
    }
}

#[component]
pub fn Checkbox(id: String, label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "checkbox", r#for: "{id}",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked,
                onchange: move |evt| onchange.call(evt.checked()),
            }
            span { "{label}" }
        }
    }
}

/// Label above an input, the layout every form in the back-office uses.
#[component]
pub fn Field(id: String, label: String, children: Element) -> Element {
    rsx! {
        div { class: "field",
            Label { html_for: id, "{label}" }
            {children}
        }
    }
}
