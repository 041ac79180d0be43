use dioxus::prelude::*;

use crate::brands::{FaGithub, FaLinkedin};
use crate::components::{Button, ButtonVariant};
use crate::{use_site_config, Icon};

const FEATURES: [(&str, &str); 3] = [
    (
        "Technical skills",
        "React, Node.js, Java, Spring Boot, DevOps and the other building blocks a project needs to succeed.",
    ),
    (
        "Innovative projects",
        "A look at projects that combine performance, innovation and careful design, each answering a different need.",
    ),
    (
        "Contact & collaboration",
        "Open to new opportunities and projects. Get in touch to discuss a collaboration or exchange ideas.",
    ),
];

/// Landing page: hero, feature cards and a footer with social links.
#[component]
pub fn HomeView(on_discover: EventHandler<()>) -> Element {
    let config = use_site_config();
    let site = config.site;

    rsx! {
        document::Title { "Home - My Portfolio" }

        section { class: "hero",
            h1 { class: "hero-title", "Welcome to my portfolio" }
            p { class: "hero-text",
                if site.owner.is_empty() {
                    "{site.tagline}"
                } else {
                    "Hi, I'm {site.owner}. {site.tagline}"
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "hero-cta",
                onclick: move |_| on_discover.call(()),
                "Discover my projects"
            }
        }

        section { class: "feature-grid",
            for (title, text) in FEATURES {
                article { key: "{title}", class: "feature-card",
                    h3 { "{title}" }
                    p { "{text}" }
                }
            }
        }

        footer { class: "site-footer",
            h3 { "Let's connect!" }
            p { class: "muted", "© {site.owner}. All rights reserved." }
            div { class: "footer-links",
                if let Some(url) = site.github_url.clone() {
                    a { class: "btn btn-outline", href: "{url}", target: "_blank",
                        Icon { icon: FaGithub, width: 16, height: 16 }
                        span { "GitHub" }
                    }
                }
                if let Some(url) = site.linkedin_url.clone() {
                    a { class: "btn btn-outline", href: "{url}", target: "_blank",
                        Icon { icon: FaLinkedin, width: 16, height: 16 }
                        span { "LinkedIn" }
                    }
                }
            }
        }
    }
}
