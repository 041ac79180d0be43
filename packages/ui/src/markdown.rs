//! Markdown rendering for project and timeline descriptions.
//!
//! Descriptions are typed by the site owner in the back-office and rendered on
//! the public pages. Raw HTML in the source is shown as text, never injected,
//! and link or image targets with a scheme other than http(s) or mailto are
//! replaced by `#`.

use dioxus::prelude::*;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag};

/// Keep relative, fragment, http(s) and mailto targets; anything else is `#`.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let trimmed = url.trim_start();
    let scheme_end = trimmed.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if trimmed[i..].starts_with(':') => {
            let scheme = trimmed[..i].to_ascii_lowercase();
            if matches!(scheme.as_str(), "http" | "https" | "mailto") {
                url
            } else {
                CowStr::Borrowed("#")
            }
        }
        _ => url,
    }
}

pub fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(source, opts).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Rendered markdown block. Blank sources show `fallback` instead.
#[component]
pub fn Markdown(source: String, #[props(default)] fallback: String) -> Element {
    if source.trim().is_empty() {
        return rsx! {
            p { class: "muted", "{fallback}" }
        };
    }
    let html = render_markdown(&source);
    rsx! {
        div { class: "markdown", dangerous_inner_html: "{html}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_markdown("**Rust** and ~~Go~~");
        assert!(html.contains("<strong>Rust</strong>"));
        assert!(html.contains("<del>Go</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let block = render_markdown("<div onclick=\"x\">hi</div>\n");
        assert!(!block.contains("<div"));
    }

    #[test]
    fn test_script_urls_are_neutralized() {
        let link = render_markdown("[click](javascript:alert(1))");
        assert!(!link.to_lowercase().contains("javascript:"));
        assert!(link.contains(r##"href="#""##));

        let mixed = render_markdown("[x](JavaScript:alert(1)) [y](data:text/html,hi)");
        assert!(!mixed.to_lowercase().contains("javascript:"));
        assert!(!mixed.contains("data:"));

        let image = render_markdown("![pic](javascript:alert(1))");
        assert!(!image.to_lowercase().contains("javascript:"));
        assert!(image.contains(r##"src="#""##));
    }

    #[test]
    fn test_safe_urls_are_kept() {
        let html = render_markdown(
            "[site](https://example.com/a?b=1) [mail](mailto:me@example.com) \
             [rel](/projects/2) [frag](#top) ![img](images/a.png)",
        );
        assert!(html.contains(r#"href="https://example.com/a?b=1""#));
        assert!(html.contains(r#"href="mailto:me@example.com""#));
        assert!(html.contains(r#"href="/projects/2""#));
        assert!(html.contains(r##"href="#top""##));
        assert!(html.contains(r#"src="images/a.png""#));
    }
}
