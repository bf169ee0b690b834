//! Game configuration
//!
//! Every field has a default, so a partial (or missing) `snake_config.json`
//! is fine.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::grid::MAX_SIDE;

/// Config file looked up in the working directory by the binary
pub const CONFIG_FILE: &str = "snake_config.json";

/// Default save file for the high score
pub const SAVE_FILE: &str = "snake_save.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells
    pub grid_width: i32,
    /// Board height in cells
    pub grid_height: i32,
    /// Preferred cell size in pixels (rendering only)
    pub cell_size: f32,
    /// Snake length at the start of a session
    pub initial_length: usize,
    /// Tick interval at the start of a session
    pub initial_interval_ms: u32,
    /// Speed up every N points
    pub speedup_every: u32,
    /// How much the interval shrinks per speed-up
    pub speedup_ms: u32,
    /// The interval never drops below this
    pub min_interval_ms: u32,
    /// Minimum swipe length in pixels before a touch counts as a turn
    pub swipe_min_distance: f32,
    /// Where the high score is kept (native builds only)
    pub save_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 15,
            cell_size: 20.0,
            initial_length: 3,
            initial_interval_ms: 200,
            speedup_every: 5,
            speedup_ms: 15,
            min_interval_ms: 50,
            swipe_min_distance: 30.0,
            save_path: SAVE_FILE.to_string(),
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::load`], but a missing or broken file yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width <= 0
            || self.grid_height <= 0
            || self.grid_width > MAX_SIDE
            || self.grid_height > MAX_SIDE
        {
            return Err(ConfigError::InvalidGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        // Head sits on the centre column and the tail extends left of it
        let max_length = (self.grid_width / 2 + 1) as usize;
        if self.initial_length == 0 || self.initial_length > max_length {
            return Err(ConfigError::InvalidSnakeLength {
                length: self.initial_length,
                width: self.grid_width,
            });
        }
        if self.min_interval_ms == 0 || self.min_interval_ms > self.initial_interval_ms {
            return Err(ConfigError::InvalidInterval(format!(
                "floor {}ms must be positive and at most the initial {}ms",
                self.min_interval_ms, self.initial_interval_ms
            )));
        }
        if self.speedup_every == 0 {
            return Err(ConfigError::InvalidInterval(
                "speedup_every must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_interval_ms, 200);
        assert_eq!(config.min_interval_ms, 50);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_width": 30, "speedup_ms": 10 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.grid_width, 30);
        assert_eq!(config.speedup_ms, 10);
        assert_eq!(config.grid_height, 15);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = GameConfig { grid_width: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGrid { .. })));

        let config =
            GameConfig { grid_width: i32::MAX, grid_height: i32::MAX, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGrid { .. })));

        let config = GameConfig { initial_length: 12, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSnakeLength { .. })));

        let config = GameConfig { min_interval_ms: 300, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidInterval(_))));
    }

    #[test]
    fn test_broken_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(matches!(GameConfig::load(file.path()), Err(ConfigError::Parse(_))));
        assert_eq!(GameConfig::load_or_default(file.path()), GameConfig::default());
    }
}
