//! Eight-point compass bearings.
//!
//! The bearing is `atan2(Δlong, Δlat)` in degrees, quantised to the nearest
//! multiple of 45°.  Longitude is not cosine-corrected, so directions skew
//! away from the equator; good enough for "the shrine is NE of you".
//!
//! Rounding is half-up (`floor(x + 0.5)`), so a reading of exactly −22.5°
//! lands on `N`, not `NW`.

use std::str::FromStr;

use crate::GeoError;

/// One of the eight cardinal and intercardinal directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compass {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Index → direction.  Slot 8 repeats `N`: a reading of a full +360° wraps
/// to north.
static TABLE: [Compass; 9] = [
    Compass::N,
    Compass::NE,
    Compass::E,
    Compass::SE,
    Compass::S,
    Compass::SW,
    Compass::W,
    Compass::NW,
    Compass::N,
];

impl Compass {
    /// All eight directions, clockwise from north.
    pub const ALL: [Compass; 8] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
    ];

    /// Quantise a reading in degrees (clockwise from north, as produced by
    /// `atan2`, i.e. within −180..=180) to a compass point.
    ///
    /// Returns `None` for non-finite readings and for readings whose index
    /// falls outside the table.
    pub fn from_degrees(degrees: f64) -> Option<Compass> {
        if !degrees.is_finite() {
            return None;
        }
        let mut index = (degrees / 45.0 + 0.5).floor() as i64;
        if index < 0 {
            index += 8;
        }
        usize::try_from(index).ok().and_then(|i| TABLE.get(i).copied())
    }

    /// Display label: `"N"`, `"NE"`, …
    pub fn as_str(self) -> &'static str {
        match self {
            Compass::N  => "N",
            Compass::NE => "NE",
            Compass::E  => "E",
            Compass::SE => "SE",
            Compass::S  => "S",
            Compass::SW => "SW",
            Compass::W  => "W",
            Compass::NW => "NW",
        }
    }
}

impl std::fmt::Display for Compass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compass {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Compass::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeoError::Parse(format!("unknown compass point {s:?}")))
    }
}

/// Compass direction from `(lat1, long1)` towards `(lat2, long2)`.
///
/// `None` when any input is non-finite.
pub fn try_bearing(lat1: f64, long1: f64, lat2: f64, long2: f64) -> Option<Compass> {
    let radians = (long2 - long1).atan2(lat2 - lat1);
    Compass::from_degrees(radians.to_degrees())
}

/// Compass direction from `(lat1, long1)` towards `(lat2, long2)`.
///
/// Total over `f64`: a non-finite input reads as `N`.  Use [`try_bearing`]
/// to tell that case apart.
pub fn get_bearing(lat1: f64, long1: f64, lat2: f64, long2: f64) -> Compass {
    try_bearing(lat1, long1, lat2, long2).unwrap_or(Compass::N)
}
