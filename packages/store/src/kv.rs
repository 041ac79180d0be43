//! Storage abstraction shared by every platform.

/// A string key/value store with the semantics of browser `localStorage`.
///
/// Implementations never fail loudly: an unavailable or broken backend reads
/// as empty and silently drops writes, so the UI degrades to "nothing saved"
/// instead of crashing.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
