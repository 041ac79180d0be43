//! Light/dark preference, persisted under [`THEME_KEY`].

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const THEME_KEY: &str = "themeMode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` is light.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

pub fn load_theme(store: &impl KeyValueStore) -> ThemeMode {
    store
        .get(THEME_KEY)
        .map(|v| ThemeMode::parse(&v))
        .unwrap_or_default()
}

pub fn save_theme(store: &impl KeyValueStore, mode: ThemeMode) {
    store.set(THEME_KEY, mode.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_toggle_alternates() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
    }

    #[test]
    fn test_default_is_light_when_nothing_stored() {
        let store = MemoryStore::new();
        assert_eq!(load_theme(&store), ThemeMode::Light);
    }

    #[test]
    fn test_unknown_value_reads_as_light() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "sepia");
        assert_eq!(load_theme(&store), ThemeMode::Light);
    }

    #[test]
    fn test_save_persists_mode() {
        let store = MemoryStore::new();
        save_theme(&store, ThemeMode::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), ThemeMode::Dark);
    }
}
