//! Per-game settings loaded from JSON.
//!
//! ```json
//! { "difficulty": "hard", "default_threshold_ft": 60.0 }
//! ```
//!
//! Every field is optional; missing fields take the [`Default`] values.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{GameDifficulty, GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: GameDifficulty,

    /// Radius in feet used for locations without their own threshold.
    pub default_threshold_ft: f64,
}

impl GameConfig {
    pub const DEFAULT_THRESHOLD_FT: f64 = 100.0;

    /// Reject settings no game could be played with.
    pub fn validate(self) -> GameResult<Self> {
        if !self.default_threshold_ft.is_finite() || self.default_threshold_ft < 0.0 {
            return Err(GameError::Config(format!(
                "default_threshold_ft must be a non-negative number, got {}",
                self.default_threshold_ft
            )));
        }
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty:           GameDifficulty::default(),
            default_threshold_ft: Self::DEFAULT_THRESHOLD_FT,
        }
    }
}

/// Load and validate a [`GameConfig`] from a JSON file.
pub fn load_config_json(path: &Path) -> GameResult<GameConfig> {
    let file = std::fs::File::open(path)?;
    load_config_reader(file)
}

/// Like [`load_config_json`] but accepts any `Read` source.
pub fn load_config_reader<R: Read>(reader: R) -> GameResult<GameConfig> {
    let config: GameConfig =
        serde_json::from_reader(reader).map_err(|e| GameError::Config(e.to_string()))?;
    tracing::debug!(
        difficulty = %config.difficulty,
        default_threshold_ft = config.default_threshold_ft,
        "loaded game config"
    );
    config.validate()
}
