pub mod config;
pub mod session;
pub mod theme;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::PortfolioConfig;
pub use session::{clear_session, load_session, save_session, Session};
pub use theme::{load_theme, save_theme, ThemeMode};
