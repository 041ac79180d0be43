mod public;
pub use public::{Home, NotFound, Projects, PublicLayout, Timeline};

mod admin;
pub use admin::{
    AdminIndex, AdminLayout, Dashboard, Profile, ProjectTables, Quit, TimelineTables, UserTables,
};
