//! Game settings and preferences
//!
//! Persisted separately from the high-score board, as a JSON file at a
//! path the host supplies. Loading is tolerant: a missing or corrupt file
//! falls back to defaults with a log line, never an error.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Host preferences and difficulty flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Difficulty ===
    /// Jumping off a moving platform keeps its momentum
    pub momentum_transfer: bool,

    // === Frame pacing ===
    /// Platformer frames per second
    pub paradise_fps: u32,
    /// Pong frames per second
    pub pong_fps: u32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            momentum_transfer: false,

            paradise_fps: 24,
            pong_fps: 30,

            show_fps: false,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, defaulting on any failure
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Settings file unreadable ({err}); using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file; failures are logged, not raised
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("Could not save settings to {}: {err}", path.display());
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}
