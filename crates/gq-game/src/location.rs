//! Named points of interest and proximity ordering.
//!
//! # Sorting
//!
//! [`distance_sort`] builds a comparator for `slice::sort_by`.  Distances
//! are recomputed on every comparison; location lists are a few dozen
//! entries, so there is nothing to cache.  The order is total: a location
//! whose distance is NaN sorts after every real distance instead of
//! scrambling the order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use gq_geo::{calculate_distance, Compass, GeoPoint};

use crate::position::Located;

/// A named place the player is trying to reach.
///
/// Serialises as `{"name": .., "coords": [lat, lon], "threshold": ..}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameLocation {
    pub name: String,

    #[serde(with = "lat_lon_pair")]
    pub coords: GeoPoint,

    /// Proximity radius in feet.  `None` means "use the game default".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl GameLocation {
    pub fn new(name: impl Into<String>, coords: GeoPoint) -> Self {
        Self { name: name.into(), coords, threshold: None }
    }

    pub fn with_threshold(mut self, threshold_ft: f64) -> Self {
        self.threshold = Some(threshold_ft);
        self
    }

    /// Distance in feet from `position` to this location.
    pub fn distance_from(&self, position: impl Located) -> f64 {
        let p = position.point();
        calculate_distance(self.coords.lat, self.coords.lon, p.lat, p.lon)
    }

    /// Direction the player at `position` should head to reach this location.
    pub fn bearing_from(&self, position: impl Located) -> Compass {
        position.point().bearing_to(self.coords)
    }

    /// `true` once `position` is within this location's threshold, falling
    /// back to `default_threshold_ft` when the location has none.
    pub fn is_reached(&self, position: impl Located, default_threshold_ft: f64) -> bool {
        self.distance_from(position) <= self.threshold.unwrap_or(default_threshold_ft)
    }
}

impl Located for GameLocation {
    #[inline]
    fn point(&self) -> GeoPoint {
        self.coords
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

/// Comparator ordering locations by ascending distance from `position`.
///
/// # Example
///
/// ```
/// use gq_geo::GeoPoint;
/// use gq_game::{distance_sort, GameLocation};
///
/// let mut locs = vec![
///     GameLocation::new("A", GeoPoint::new(0.0, 10.0)),
///     GameLocation::new("B", GeoPoint::new(0.0, 1.0)),
/// ];
/// locs.sort_by(distance_sort(GeoPoint::new(0.0, 0.0)));
/// assert_eq!(locs[0].name, "B");
/// ```
pub fn distance_sort(
    position: impl Located,
) -> impl Fn(&GameLocation, &GameLocation) -> Ordering {
    let p = position.point();
    move |a, b| {
        let da = calculate_distance(a.coords.lat, a.coords.lon, p.lat, p.lon);
        let db = calculate_distance(b.coords.lat, b.coords.lon, p.lat, p.lon);
        da.is_nan()
            .cmp(&db.is_nan())
            .then_with(|| da.total_cmp(&db))
    }
}

/// Sort `locations` in place, nearest to `position` first.  Stable: equally
/// distant locations keep their input order.
pub fn sort_by_distance(locations: &mut [GameLocation], position: impl Located) {
    locations.sort_by(distance_sort(position));
}

/// The location closest to `position`; the first one on ties.
pub fn nearest(locations: &[GameLocation], position: impl Located) -> Option<&GameLocation> {
    let cmp = distance_sort(position);
    locations.iter().min_by(|a, b| cmp(*a, *b))
}

/// Locations `position` is currently within range of, in input order.
pub fn reached<'a>(
    locations: &'a [GameLocation],
    position: impl Located,
    default_threshold_ft: f64,
) -> Vec<&'a GameLocation> {
    let p = position.point();
    locations
        .iter()
        .filter(|loc| loc.is_reached(p, default_threshold_ft))
        .collect()
}

// ── serde helper ──────────────────────────────────────────────────────────────

mod lat_lon_pair {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use gq_geo::GeoPoint;

    pub fn serialize<S: Serializer>(p: &GeoPoint, s: S) -> Result<S::Ok, S::Error> {
        [p.lat, p.lon].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<GeoPoint, D::Error> {
        <[f64; 2]>::deserialize(d).map(GeoPoint::from)
    }
}
