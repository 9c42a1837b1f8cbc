//! Player positions and where they come from.
//!
//! A position is either a live device fix or a fake one fed in by tests and
//! demos.  Game code never cares which: it asks for a [`GeoPoint`] through
//! the [`Located`] trait and the variant only matters for display.
//!
//! Real geolocation lives outside this crate; the device adapter converts
//! each fix to [`Position::live`] and exposes it via [`PositionSource`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use gq_geo::GeoPoint;

use crate::{GameError, GameResult};

// ── Located ───────────────────────────────────────────────────────────────────

/// Anything with a latitude and longitude.
pub trait Located {
    fn point(&self) -> GeoPoint;
}

impl Located for GeoPoint {
    #[inline]
    fn point(&self) -> GeoPoint {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    #[inline]
    fn point(&self) -> GeoPoint {
        (**self).point()
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

/// A player position, real or mocked.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Position {
    /// Reported by the device.
    Live {
        coords:       GeoPoint,
        /// Horizontal accuracy radius, if the device reports one.
        accuracy_ft:  Option<f64>,
        /// Fix time, Unix milliseconds.
        timestamp_ms: u64,
    },
    /// Supplied by a test harness or demo.
    Fake { coords: GeoPoint },
}

impl Position {
    pub fn live(coords: GeoPoint, accuracy_ft: Option<f64>, timestamp_ms: u64) -> Self {
        Position::Live { coords, accuracy_ft, timestamp_ms }
    }

    pub fn fake(coords: GeoPoint) -> Self {
        Position::Fake { coords }
    }

    #[inline]
    pub fn coords(&self) -> GeoPoint {
        match *self {
            Position::Live { coords, .. } | Position::Fake { coords } => coords,
        }
    }

    #[inline]
    pub fn is_fake(&self) -> bool {
        matches!(self, Position::Fake { .. })
    }
}

impl Located for Position {
    #[inline]
    fn point(&self) -> GeoPoint {
        self.coords()
    }
}

// ── PositionSource ────────────────────────────────────────────────────────────

/// A stream of position fixes.
///
/// `current` returns `None` while no fix is available yet (the game shows
/// "awaiting GPS" in that case).
pub trait PositionSource {
    fn current(&mut self) -> Option<Position>;
}

/// Always reports the same fake point.
#[derive(Copy, Clone, Debug)]
pub struct FixedPosition(pub GeoPoint);

impl PositionSource for FixedPosition {
    fn current(&mut self) -> Option<Position> {
        Some(Position::fake(self.0))
    }
}

// ── FakeGps ───────────────────────────────────────────────────────────────────

/// Deterministic random-walk position source.
///
/// Each call reports the current point and then moves it by up to
/// `step_deg` degrees on each axis.  The same seed always yields the same
/// walk, so tests can replay a session exactly.
///
/// # Example
///
/// ```
/// use gq_geo::GeoPoint;
/// use gq_game::{FakeGps, PositionSource};
///
/// let mut gps = FakeGps::new(GeoPoint::new(30.694, -88.043), 7).warmup(1);
/// assert!(gps.current().is_none()); // still acquiring
/// let first = gps.current().unwrap();
/// assert!(first.is_fake());
/// assert_eq!(first.coords(), GeoPoint::new(30.694, -88.043));
/// ```
pub struct FakeGps {
    rng:      SmallRng,
    at:       GeoPoint,
    step_deg: f64,
    warmup:   u32,
}

impl FakeGps {
    /// Default walk step: about 36 ft of latitude per fix.
    pub const DEFAULT_STEP_DEG: f64 = 0.0001;

    /// Largest accepted walk step, in degrees.
    pub const MAX_STEP_DEG: f64 = 180.0;

    pub fn new(start: GeoPoint, seed: u64) -> Self {
        Self {
            rng:      SmallRng::seed_from_u64(seed),
            at:       start,
            step_deg: Self::DEFAULT_STEP_DEG,
            warmup:   0,
        }
    }

    /// Maximum movement per fix on each axis, in degrees.  Negative values
    /// are treated as their magnitude; anything non-finite or larger than
    /// [`MAX_STEP_DEG`](Self::MAX_STEP_DEG) is rejected.
    pub fn step(mut self, step_deg: f64) -> GameResult<Self> {
        let step = step_deg.abs();
        if !step.is_finite() || step > Self::MAX_STEP_DEG {
            return Err(GameError::Config(format!(
                "fake gps step must be a finite number of degrees in 0..={}, got {step_deg}",
                Self::MAX_STEP_DEG
            )));
        }
        self.step_deg = step;
        Ok(self)
    }

    /// Report no fix for the first `calls` calls to [`current`](PositionSource::current).
    pub fn warmup(mut self, calls: u32) -> Self {
        self.warmup = calls;
        self
    }

    fn advance(&mut self) {
        let s = self.step_deg;
        let dlat: f64 = self.rng.gen_range(-s..=s);
        let dlon: f64 = self.rng.gen_range(-s..=s);
        self.at.lat = (self.at.lat + dlat).clamp(-90.0, 90.0);
        self.at.lon = (self.at.lon + dlon + 180.0).rem_euclid(360.0) - 180.0;
    }
}

impl PositionSource for FakeGps {
    fn current(&mut self) -> Option<Position> {
        if self.warmup > 0 {
            self.warmup -= 1;
            tracing::trace!(remaining = self.warmup, "fake gps warming up");
            return None;
        }
        let fix = Position::fake(self.at);
        self.advance();
        tracing::trace!(at = %fix.coords(), "fake gps fix");
        Some(fix)
    }
}
