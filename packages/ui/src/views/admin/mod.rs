//! Back-office views. Every page here assumes an admin session;
//! [`DashboardLayout`] enforces it.

mod dashboard;
pub use dashboard::{DashboardPage, DashboardStats};

mod exit;
pub use exit::ExitView;

mod icon_selector;
pub use icon_selector::IconSelector;

mod layout;
pub use layout::{AdminSection, DashboardLayout};

mod profile;
pub use profile::UserProfile;

mod projects;
pub use projects::ProjectTable;

mod table;

mod timelines;
pub use timelines::TimelineTable;

mod users;
pub use users::UserTable;
