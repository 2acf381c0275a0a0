//! Presentation preferences
//!
//! Persisted separately from highscores in the same key-value store.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, load_json, save_json};

/// Player-facing preferences; none of these affect the simulation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overlay collision primitives on top of the sprites
    pub show_hitboxes: bool,
    /// Hold the background on its first frame
    pub reduced_motion: bool,
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "spaceRidersSettings";

    /// Load settings; missing or corrupt data yields defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json(store, Self::STORAGE_KEY) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match save_json(store, Self::STORAGE_KEY, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }
}
