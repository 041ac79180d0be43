//! # Persisted login session
//!
//! After a successful login the UI keeps a copy of the user record in local
//! storage under [`SESSION_KEY`] so a reload does not sign the user out.
//! [`Session`] is that persisted shape. It deliberately has no `id` and no
//! `password` field, so neither can end up in storage.
//!
//! Unknown fields in stored JSON (an `id`, say) are ignored.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// Storage key for the serialized session.
pub const SESSION_KEY: &str = "user";

/// The logged-in user, minus its id and credentials.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub active: bool,
    pub image_path: Option<String>,
}

impl Session {
    /// "First Last", falling back to the username when both names are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// Read the stored session. Missing or malformed data reads as `None`.
pub fn load_session(store: &impl KeyValueStore) -> Option<Session> {
    let raw = store.get(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(e) => {
            tracing::warn!("Discarding unreadable stored session: {e}");
            None
        }
    }
}

pub fn save_session(store: &impl KeyValueStore, session: &Session) {
    match serde_json::to_string(session) {
        Ok(json) => store.set(SESSION_KEY, &json),
        Err(e) => tracing::error!("Failed to serialize session: {e}"),
    }
}

pub fn clear_session(store: &impl KeyValueStore) {
    store.remove(SESSION_KEY);
}
