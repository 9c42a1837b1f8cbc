//! Game phase and difficulty enums.
//!
//! These are labels the UI and config layer share.  Moving between phases is
//! the game loop's business; [`GameState::classify`] only answers "which
//! phase does this situation look like".

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{GameError, Position};

/// Top-level phase of a session.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Player has not pressed start.
    #[default]
    BeforeStart,
    /// Started, but no position fix yet.
    AwaitingGps,
    Playing,
}

impl GameState {
    /// Phase implied by whether the session started and whether a fix exists.
    pub fn classify(started: bool, fix: Option<&Position>) -> GameState {
        match (started, fix) {
            (false, _)      => GameState::BeforeStart,
            (true, None)    => GameState::AwaitingGps,
            (true, Some(_)) => GameState::Playing,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameState::BeforeStart => "before_start",
            GameState::AwaitingGps => "awaiting_gps",
            GameState::Playing     => "playing",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "before_start" => Ok(GameState::BeforeStart),
            "awaiting_gps" => Ok(GameState::AwaitingGps),
            "playing"      => Ok(GameState::Playing),
            other => Err(GameError::Parse(format!("unknown game state {other:?}"))),
        }
    }
}

/// Difficulty chosen before the session starts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl GameDifficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            GameDifficulty::Easy   => "easy",
            GameDifficulty::Medium => "medium",
            GameDifficulty::Hard   => "hard",
        }
    }
}

impl std::fmt::Display for GameDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameDifficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(GameDifficulty::Easy),
            "medium" => Ok(GameDifficulty::Medium),
            "hard"   => Ok(GameDifficulty::Hard),
            other => Err(GameError::Parse(format!(
                "unknown difficulty {other:?}: expected \"easy\", \"medium\", or \"hard\""
            ))),
        }
    }
}
