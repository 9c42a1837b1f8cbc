//! `gq-geo` — coordinate math for the `geoquest` location game.
//!
//! This crate is a dependency of every other `gq-*` crate.  It has no `gq-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).  Everything here is a pure function of its inputs.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, `calculate_distance`, `EARTH_SIZE_FT`       |
//! | [`compass`]   | `Compass`, `get_bearing`, `try_bearing`                 |
//! | [`error`]     | `GeoError`, `GeoResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod compass;
pub mod error;
pub mod geo;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use compass::{get_bearing, try_bearing, Compass};
pub use error::{GeoError, GeoResult};
pub use geo::{calculate_distance, GeoPoint, EARTH_SIZE_FT};
