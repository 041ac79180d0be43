use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::icon_catalog::{filter_icons, icon_catalog, GlyphIcon, IconStyle};
use crate::views::ModalOverlay;

/// Searchable icon grid. `on_select` receives the chosen catalogue name.
#[component]
pub fn IconSelector(on_select: EventHandler<String>, on_cancel: EventHandler<()>) -> Element {
    let mut query = use_signal(String::new);
    let mut style = use_signal(IconStyle::default);
    let mut selected = use_signal(|| Option::<String>::None);

    let matches: Vec<String> = filter_icons(icon_catalog(), &query(), style())
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        ModalOverlay { title: "Choose an icon", wide: true, on_close: move |_| on_cancel.call(()),
            div { class: "icon-toolbar",
                Input {
                    id: "icon-search",
                    placeholder: "Search",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                select {
                    class: "input",
                    value: style().as_str(),
                    onchange: move |evt| style.set(IconStyle::parse(&evt.value())),
                    for s in IconStyle::ALL {
                        option { key: "{s.as_str()}", value: s.as_str(), "{s.label()}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: selected().is_none(),
                    onclick: move |_| {
                        if let Some(name) = selected() {
                            on_select.call(name);
                        }
                    },
                    "Confirm selection"
                }
            }
            p { class: "muted", "{matches.len()} icons" }
            div { class: "icon-grid",
                for name in matches {
                    IconTile {
                        key: "{name}",
                        selected: selected().as_deref() == Some(name.as_str()),
                        on_pick: move |name| selected.set(Some(name)),
                        name,
                    }
                }
            }
        }
    }
}

#[component]
fn IconTile(name: String, selected: bool, on_pick: EventHandler<String>) -> Element {
    let picked = name.clone();
    rsx! {
        button {
            class: if selected { "icon-tile selected" } else { "icon-tile" },
            r#type: "button",
            onclick: move |_| on_pick.call(picked.clone()),
            GlyphIcon { name: name.clone(), size: 28 }
            span { class: "icon-tile-name", "{name}" }
        }
    }
}
