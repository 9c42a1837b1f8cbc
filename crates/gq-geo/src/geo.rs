//! Geographic coordinate type and planar distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude in decimal degrees.  Distances
//! are returned in feet, scaled by [`EARTH_SIZE_FT`].
//!
//! # Distance model
//!
//! ```text
//! φ1, φ2, λ1, λ2 = radians(lat1, lat2, long1, long2)
//! mid            = (φ1 + φ2) / 2
//! d              = EARTH_SIZE_FT · √( (φ2 − φ1)² + cos(radians(mid))² · (λ2 − λ1)² )
//! ```
//!
//! `mid` is already in radians and is converted a second time before the
//! cosine, so the longitude term is barely scaled at any latitude.  Location
//! thresholds are expressed against this exact output; changing the formula
//! means re-deriving every threshold.  It is a gameplay-scale approximation,
//! not geodesy.

use std::str::FromStr;

use crate::{GeoError, GeoResult};

/// Earth's radius expressed in feet, used as the distance scale factor.
pub const EARTH_SIZE_FT: f64 = 20_902_000.0;

/// Planar distance in feet between `(lat1, long1)` and `(lat2, long2)`.
///
/// Inputs are degrees and are not range-checked.  Never fails: NaN in, NaN
/// out.
pub fn calculate_distance(lat1: f64, long1: f64, lat2: f64, long2: f64) -> f64 {
    let nlat1 = lat1.to_radians();
    let nlat2 = lat2.to_radians();
    let nlong1 = long1.to_radians();
    let nlong2 = long2.to_radians();

    let midpoint = (nlat1 + nlat2) / 2.0;

    EARTH_SIZE_FT
        * ((nlat2 - nlat1).powi(2)
            + midpoint.to_radians().cos().powi(2) * (nlong2 - nlong1).powi(2))
        .sqrt()
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Distance to `other` in feet.  See [`calculate_distance`].
    #[inline]
    pub fn distance_ft(self, other: GeoPoint) -> f64 {
        calculate_distance(self.lat, self.lon, other.lat, other.lon)
    }

    /// Compass direction from `self` towards `other`.
    #[inline]
    pub fn bearing_to(self, other: GeoPoint) -> crate::Compass {
        crate::get_bearing(self.lat, self.lon, other.lat, other.lon)
    }

    /// `true` when both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Check that the point is a real place on Earth.
    ///
    /// The math functions accept anything; call this at input boundaries
    /// (file loaders, CLI flags) where a typo should be an error rather
    /// than a silently meaningless distance.
    pub fn validate(self) -> GeoResult<Self> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(GeoError::LongitudeOutOfRange(self.lon));
        }
        Ok(self)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

/// Parses `"lat,lon"` (whitespace around either number is ignored).
impl FromStr for GeoPoint {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| GeoError::Parse(format!("expected \"lat,lon\", got {s:?}")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| GeoError::Parse(format!("invalid coordinate {v:?}: {e}")))
        };
        Ok(Self::new(parse(lat)?, parse(lon)?))
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
