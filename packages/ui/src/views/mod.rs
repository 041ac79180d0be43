mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod home;
pub use home::HomeView;

mod timeline;
pub use timeline::TimelineView;

mod projects;
pub use projects::ProjectsView;

pub mod admin;
