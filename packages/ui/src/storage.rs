//! Shared key-value store constructor for all platforms.
//!
//! Returns a [`store::KeyValueStore`] backed by:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native** (server-side rendering, tests): one process-wide [`store::MemoryStore`]

/// Create the platform's session/preference store.
///
/// Every call on native returns a handle to the same in-memory map, so a
/// session saved by one component is visible to the next.
pub fn make_store() -> impl store::KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        use std::sync::OnceLock;

        static SHARED: OnceLock<store::MemoryStore> = OnceLock::new();
        SHARED.get_or_init(store::MemoryStore::new).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::KeyValueStore;

    #[test]
    fn test_native_store_is_shared() {
        make_store().set("storage-test", "1");
        assert_eq!(make_store().get("storage-test").as_deref(), Some("1"));
        make_store().remove("storage-test");
        assert!(make_store().get("storage-test").is_none());
    }
}
