//! Coordinate error type.
//!
//! The distance and bearing functions never fail; these errors only come out
//! of parsing and the opt-in range check on [`GeoPoint`](crate::GeoPoint).

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("latitude {0} outside -90..=90")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside -180..=180")]
    LongitudeOutOfRange(f64),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type GeoResult<T> = Result<T, GeoError>;
