//! # API crate — REST client for the portfolio back-end
//!
//! Everything the frontends need to talk to the portfolio API lives here:
//! the record types, the HTTP client and the login check. The crate has no
//! Dioxus dependency so it can be tested natively against a local server.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Credential lookup over the user list, role rules for the back-office |
//! | [`error`] | [`ApiError`] and the messages shown in alert banners |
//! | [`models`] | `User`, `Project`, `TimelineEntry`, the paginated `Page` envelope |
//!
//! [`ApiClient`] exposes the CRUD operations for the three resources; see the
//! `client` module docs for the path and verb conventions.

pub mod auth;
mod client;
pub mod error;
pub mod models;

pub use auth::Role;
pub use client::{ApiClient, PROJECTS_PATH, TIMELINES_PATH, USERS_PATH};
pub use error::ApiError;
pub use models::{Page, Project, RecordId, TimelineEntry, User};

pub use store::{PortfolioConfig, Session};
