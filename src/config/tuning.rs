use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::game::stats::types::{Health, Speed};

/// All tunable game parameters, loaded from tuning.ron.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
pub struct Tuning {
    /// Fixed simulation step in seconds.
    pub dt: f32,
    pub window_title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    /// Background tile edge in pixels.
    pub tile_size: u32,
    /// Per-tick displacement of a moving player, in pixels.
    pub player_speed: f32,
    pub player_max_health: u32,
    /// Side of the square player sprite, in pixels.
    pub player_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            window_title: "Dungeon Adventure - Two Player Game".into(),
            screen_width: 800,
            screen_height: 600,
            tile_size: 64,
            player_speed: Speed::DEFAULT.get(),
            player_max_health: Health::DEFAULT.max(),
            player_size: 48.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

impl Tuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("dungeon_adventure")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("tuning.ron")
    }

    pub fn from_ron_str(contents: &str) -> Result<Self, TuningError> {
        let tuning: Self = ron::from_str(contents)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load_from(path: &Path) -> Result<Self, TuningError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(TuningError::Invalid(format!("dt must be > 0, got {}", self.dt)));
        }
        if Speed::new(self.player_speed).is_none() {
            return Err(TuningError::Invalid(format!(
                "player_speed must be > 0, got {}",
                self.player_speed
            )));
        }
        if self.player_max_health == 0 {
            return Err(TuningError::Invalid("player_max_health must be > 0".into()));
        }
        if self.screen_width == 0 || self.screen_height == 0 || self.tile_size == 0 {
            return Err(TuningError::Invalid(
                "screen size and tile_size must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Validated speed; falls back to the default if the value is unusable.
    pub fn speed(&self) -> Speed {
        Speed::new(self.player_speed).unwrap_or(Speed::DEFAULT)
    }

    /// Validated full health; falls back to the default for a zero max.
    pub fn health(&self) -> Health {
        Health::full(self.player_max_health).unwrap_or(Health::DEFAULT)
    }

    /// Load from file, or create default if not found.
    pub fn load_or_default() -> Self {
        Self::load_or_default_at(&Self::file_path())
    }

    /// Load from `path`. A missing file is created with defaults; an
    /// unreadable or invalid one is left alone and defaults are used.
    pub fn load_or_default_at(path: &Path) -> Self {
        if path.exists() {
            return match Self::load_from(path) {
                Ok(tuning) => tuning,
                Err(e) => {
                    warn!("{e}, using defaults");
                    Self::default()
                }
            };
        }
        let tuning = Self::default();
        tuning.save_to(path);
        tuning
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Save current tuning to file.
    pub fn save(&self) {
        self.save_to(&Self::file_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!("Failed to create {}: {e}", parent.display());
                return;
            }
        }
        match self.to_ron_string() {
            Ok(s) => {
                if let Err(e) = std::fs::write(path, s) {
                    warn!("Failed to write {}: {e}", path.display());
                }
            }
            Err(e) => {
                warn!("Failed to serialize tuning: {e}");
            }
        }
    }

    /// Reload from file (called by key press).
    pub fn reload(&mut self) {
        self.reload_from(&Self::file_path());
    }

    pub fn reload_from(&mut self, path: &Path) {
        *self = Self::load_or_default_at(path);
        info!("Tuning reloaded");
    }
}
