//! This crate contains all shared UI for the workspace: the public pages,
//! the back-office and the providers they read from context.
//!
//! Platform crates only map routes onto the views exported here.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brands {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

mod storage;
pub use storage::make_store;

mod client;
pub use client::{use_api, use_site_config, ApiProvider};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod theme;
pub use theme::{use_theme, Palette, ThemeProvider, ThemeToggle};

pub mod color;
pub mod format;
pub mod icon_catalog;

mod markdown;
pub use markdown::{render_markdown, Markdown};

mod login_modal;
pub use login_modal::LoginModal;

mod header;
pub use header::{Header, PublicPage};

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");
