//! Player preferences
//!
//! Persisted separately from high scores, in the same key-value store.

use serde::{Deserialize, Serialize};

use crate::platform::storage::KeyValueStore;

/// Player preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Background music on/off
    pub music_enabled: bool,
    /// Minimize customer slide-in animations and screen transitions
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Off until the player opts in; browsers block autoplaying audio anyway
            music_enabled: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key for the persisted blob
    const STORAGE_KEY: &'static str = "cone_rush_settings";

    /// Load settings from the store, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings");
                return settings;
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to the store, best effort
    pub fn save(&self, store: &dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(err) => log::warn!("Failed to persist settings: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    #[test]
    fn test_roundtrip() {
        let store = MemoryStore::new();
        let settings = Settings {
            music_enabled: true,
            reduced_motion: true,
        };
        settings.save(&store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_missing_or_garbage_falls_back_to_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());

        store.set(Settings::STORAGE_KEY, "{broken").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }
}
