use dioxus::prelude::*;

use crate::color::{color_from_name, initials};

/// Rounded label. `color` is any CSS colour used as the background.
#[component]
pub fn Chip(label: String, #[props(default)] color: String) -> Element {
    let style = if color.is_empty() {
        String::new()
    } else {
        format!("background-color: {color}; color: #fff;")
    };
    rsx! {
        span { class: "chip", style: "{style}", "{label}" }
    }
}

/// Profile picture, or initials on a colour hashed from the name.
#[component]
pub fn Avatar(
    first_name: String,
    last_name: String,
    image: Option<String>,
    #[props(default = 100)] size: u32,
) -> Element {
    let alt = format!("{first_name} {last_name}");
    match image.filter(|src| !src.trim().is_empty()) {
        Some(src) => rsx! {
            img {
                class: "avatar",
                src: "{src}",
                alt: "{alt}",
                width: "{size}",
                height: "{size}",
            }
        },
        None => {
            let background = color_from_name(&first_name, &last_name);
            let letters = initials(&first_name, &last_name);
            let font = size * 2 / 5;
            rsx! {
                div {
                    class: "avatar",
                    title: "{alt}",
                    style: "width: {size}px; height: {size}px; background-color: {background}; font-size: {font}px;",
                    "{letters}"
                }
            }
        }
    }
}
