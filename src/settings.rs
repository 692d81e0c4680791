//! Game settings with persistence
//!
//! Settings are saved to `~/.config/masquerade/settings.toml`

use std::fs;
use std::path::{Path, PathBuf};

use masquerade_core::SpawnConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// All game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSettings {
    pub rules: RuleSettings,
    pub spawn: SpawnConfig,
}

/// Round rules and the shrinking timer curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Clues shown per round
    pub hint_count: usize,
    /// Wrong accusations before the session ends
    pub max_wrong_guesses: u32,
    /// Round 1 time limit in seconds
    pub base_time_limit: f32,
    /// Seconds removed per subsequent round
    pub time_reduction_per_round: f32,
    /// The timer never shrinks below this
    pub minimum_time_limit: f32,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            hint_count: 3,
            max_wrong_guesses: 3,
            base_time_limit: 60.0,
            time_reduction_per_round: 5.0,
            minimum_time_limit: 15.0,
        }
    }
}

impl GameSettings {
    /// Get the settings file path
    fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("masquerade").join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`. A missing file writes the defaults
    /// back so the player has something to edit.
    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file found, writing defaults");
            let defaults = Self::default();
            if let Err(e) = defaults.save_to(path) {
                warn!("Failed to write default settings: {}", e);
            }
            return defaults;
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating parent directories as needed
    fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_persists_defaults() {
        let dir = std::env::temp_dir().join("masquerade-settings-test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("settings.toml");

        let settings = GameSettings::load_from(&path);
        assert!(path.exists(), "defaults were not written on first load");

        let restored = GameSettings::load_from(&path);
        assert_eq!(restored.rules.hint_count, settings.rules.hint_count);
        assert_eq!(
            restored.rules.base_time_limit,
            settings.rules.base_time_limit
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_defaults_round_trip_through_toml() {
        let settings = GameSettings::default();
        let serialized = toml::to_string_pretty(&settings).unwrap();
        let restored: GameSettings = toml::from_str(&serialized).unwrap();
        assert_eq!(restored.rules.hint_count, settings.rules.hint_count);
        assert_eq!(
            restored.spawn.character_count,
            settings.spawn.character_count
        );
    }
}
