//! Location list loaders.
//!
//! # CSV format
//!
//! One row per location.  `threshold` (feet) may be left empty.
//!
//! ```csv
//! name,lat,lon,threshold
//! Fountain,30.6940,-88.0430,50
//! Library,30.6951,-88.0402,
//! ```
//!
//! # JSON format
//!
//! An array of [`GameLocation`] objects:
//!
//! ```json
//! [{ "name": "Fountain", "coords": [30.694, -88.043], "threshold": 50 }]
//! ```
//!
//! Both loaders reject coordinates outside the valid lat/lon ranges and
//! negative thresholds, reporting the 1-based data row.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use gq_geo::GeoPoint;

use crate::{GameError, GameLocation, GameResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name:      String,
    lat:       f64,
    lon:       f64,
    threshold: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load locations from a CSV file, in file order.
pub fn load_locations_csv(path: &Path) -> GameResult<Vec<GameLocation>> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
pub fn load_locations_reader<R: Read>(reader: R) -> GameResult<Vec<GameLocation>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut locations = Vec::new();
    for (i, result) in csv_reader.deserialize::<LocationRecord>().enumerate() {
        let rec = result.map_err(|e| GameError::Parse(e.to_string()))?;
        let location = GameLocation {
            name:      rec.name,
            coords:    GeoPoint::new(rec.lat, rec.lon),
            threshold: rec.threshold,
        };
        locations.push(check_row(i + 1, location)?);
    }

    tracing::debug!(count = locations.len(), "loaded locations from csv");
    Ok(locations)
}

/// Load locations from a JSON array file, in file order.
pub fn load_locations_json(path: &Path) -> GameResult<Vec<GameLocation>> {
    let file = std::fs::File::open(path)?;
    load_locations_json_reader(file)
}

/// Like [`load_locations_json`] but accepts any `Read` source.
pub fn load_locations_json_reader<R: Read>(reader: R) -> GameResult<Vec<GameLocation>> {
    let raw: Vec<GameLocation> =
        serde_json::from_reader(reader).map_err(|e| GameError::Parse(e.to_string()))?;

    let locations = raw
        .into_iter()
        .enumerate()
        .map(|(i, loc)| check_row(i + 1, loc))
        .collect::<GameResult<Vec<_>>>()?;

    tracing::debug!(count = locations.len(), "loaded locations from json");
    Ok(locations)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_row(row: usize, location: GameLocation) -> GameResult<GameLocation> {
    location
        .coords
        .validate()
        .map_err(|source| GameError::InvalidRow { row, source })?;

    if let Some(t) = location.threshold
        && (!t.is_finite() || t < 0.0)
    {
        return Err(GameError::InvalidThreshold { row, value: t });
    }
    Ok(location)
}
