//! `gq-game` — locations, player positions, and proximity ordering.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`location`]  | `GameLocation`, `distance_sort`, `sort_by_distance`, `nearest`, `reached` |
//! | [`position`]  | `Located`, `Position`, `PositionSource`, `FixedPosition`, `FakeGps` |
//! | [`state`]     | `GameState`, `GameDifficulty`                                 |
//! | [`config`]    | `GameConfig`, `load_config_json`, `load_config_reader`        |
//! | [`loader`]    | `load_locations_csv`, `load_locations_json` and reader forms  |
//! | [`error`]     | `GameError`, `GameResult<T>`                                  |
//!
//! # Position model
//!
//! Live device fixes and fake test fixes are two variants of [`Position`].
//! Everything that needs a point takes `impl Located`, so a `Position`, a
//! bare [`GeoPoint`](gq_geo::GeoPoint), or another `GameLocation` all work
//! as the reference for sorting and distance queries.

pub mod config;
pub mod error;
pub mod loader;
pub mod location;
pub mod position;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::{load_config_json, load_config_reader, GameConfig};
pub use error::{GameError, GameResult};
pub use loader::{
    load_locations_csv, load_locations_json, load_locations_json_reader, load_locations_reader,
};
pub use location::{distance_sort, nearest, reached, sort_by_distance, GameLocation};
pub use position::{FakeGps, FixedPosition, Located, Position, PositionSource};
pub use state::{GameDifficulty, GameState};
