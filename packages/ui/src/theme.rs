//! Light/dark theme.
//!
//! [`ThemeProvider`] owns a `Signal<ThemeMode>`. It starts light, picks up the
//! stored mode once mounted, and from then on writes every change back. It renders the application root with a
//! `data-theme` attribute and the palette as CSS custom properties, which is
//! all the stylesheets read.

use dioxus::prelude::*;
use store::ThemeMode;

use crate::icons::{FaMoon, FaSun};
use crate::{make_store, Icon};

/// Colours for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub paper: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#ffffff",
        paper: "#f9f9f9",
        text_primary: "#213547",
        text_secondary: "#607d8b",
        primary: "#2196f3",
        primary_dark: "#1976d2",
        secondary: "#03a9f4",
    };

    pub const DARK: Palette = Palette {
        background: "#121212",
        paper: "#1e1e1e",
        text_primary: "#e0e0e0",
        text_secondary: "#b0bec5",
        ..Palette::LIGHT
    };

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }

    /// Inline `style` value declaring the palette as CSS variables.
    pub fn css_variables(&self) -> String {
        format!(
            "--bg: {}; --paper: {}; --text: {}; --text-secondary: {}; \
             --primary: {}; --primary-dark: {}; --secondary: {};",
            self.background,
            self.paper,
            self.text_primary,
            self.text_secondary,
            self.primary,
            self.primary_dark,
            self.secondary,
        )
    }
}

/// The current theme mode signal. Requires a [`ThemeProvider`] ancestor.
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut theme = use_signal(|| ThemeMode::Light);
    let mut loaded = use_signal(|| false);
    use_context_provider(|| theme);

    use_effect(move || {
        theme.set(store::load_theme(&make_store()));
        loaded.set(true);
    });

    use_effect(move || {
        let mode = theme();
        // The seed must not overwrite the stored mode before it is read
        if loaded() {
            store::save_theme(&make_store(), mode);
            tracing::debug!("Theme mode is now {}", mode.as_str());
        }
    });

    let mode = theme();
    let style = Palette::for_mode(mode).css_variables();

    rsx! {
        div {
            class: "app-root",
            "data-theme": mode.as_str(),
            style: "{style}",
            {children}
        }
    }
}

/// Icon button that flips between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let dark = theme().is_dark();
    let title = if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        button {
            class: "icon-button",
            title: "{title}",
            "aria-label": "toggle theme",
            onclick: move |_| {
                let next = theme().toggle();
                theme.set(next);
            },
            if dark {
                Icon { icon: FaSun, width: 18, height: 18 }
            } else {
                Icon { icon: FaMoon, width: 18, height: 18 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_on_surfaces_only() {
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
        assert_eq!(Palette::LIGHT.primary, Palette::DARK.primary);
        assert_eq!(Palette::for_mode(ThemeMode::Dark), Palette::DARK);
    }

    #[test]
    fn test_css_variables() {
        let css = Palette::LIGHT.css_variables();
        assert!(css.starts_with("--bg: #ffffff;"));
        assert!(css.contains("--text: #213547;"));
        assert!(css.contains("--primary: #2196f3;"));
    }
}
