use thiserror::Error;

use gq_geo::GeoError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("location row {row}: {source}")]
    InvalidRow { row: usize, source: GeoError },

    #[error("location row {row}: threshold {value} must be a non-negative number")]
    InvalidThreshold { row: usize, value: f64 },

    #[error("locations parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;
