//! nearby — walk a fake player around a set of game locations.
//!
//! Loads a location list (CSV or JSON, or the built-in Mobile, Alabama set),
//! starts a seeded fake GPS at `--at`, and for every fix prints the
//! locations nearest first with their distance and compass bearing.
//!
//! ```text
//! RUST_LOG=debug cargo run -p nearby -- --at 30.6935,-88.0425 --fixes 3
//! ```

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gq_game::{
    load_config_json, load_locations_csv, load_locations_json, load_locations_reader, reached,
    sort_by_distance, FakeGps, GameConfig, GameLocation, GameState, PositionSource,
};
use gq_geo::GeoPoint;

// ── Built-in locations ────────────────────────────────────────────────────────

const DOWNTOWN_CSV: &str = "\
name,lat,lon,threshold\n\
Cathedral,30.6905,-88.0456,\n\
Fountain,30.6940,-88.0430,50\n\
Library,30.6951,-88.0402,\n\
Fort,30.6892,-88.0398,150\n\
Ballpark,30.6791,-88.0817,300\n\
";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "nearby")]
#[command(about = "Sort game locations by distance from a simulated player")]
struct Args {
    /// Location list (`.json` array or CSV).  Defaults to a built-in set.
    #[arg(long)]
    locations: Option<PathBuf>,

    /// Game config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Player start position as `lat,lon`.
    #[arg(long, default_value = "30.6935,-88.0425", allow_hyphen_values = true)]
    at: GeoPoint,

    /// Number of position fixes to take.
    #[arg(long, default_value_t = 1)]
    fixes: u32,

    /// Fake GPS calls that return no fix before the first one.
    #[arg(long, default_value_t = 0)]
    warmup: u32,

    /// Maximum fake GPS movement per fix, in degrees.
    #[arg(long, default_value_t = FakeGps::DEFAULT_STEP_DEG)]
    step: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn load_locations(path: Option<&PathBuf>) -> Result<Vec<GameLocation>> {
    let locations = match path {
        None => load_locations_reader(Cursor::new(DOWNTOWN_CSV))?,
        Some(p) if p.extension().is_some_and(|e| e == "json") => load_locations_json(p)
            .with_context(|| format!("loading {}", p.display()))?,
        Some(p) => load_locations_csv(p).with_context(|| format!("loading {}", p.display()))?,
    };
    Ok(locations)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let at = args.at.validate().context("--at")?;

    let config = match &args.config {
        Some(p) => load_config_json(p).with_context(|| format!("loading {}", p.display()))?,
        None => GameConfig::default(),
    };
    let mut locations = load_locations(args.locations.as_ref())?;
    info!(
        locations = locations.len(),
        difficulty = %config.difficulty,
        default_threshold_ft = config.default_threshold_ft,
        "game ready"
    );
    if locations.is_empty() {
        warn!("no locations loaded; nothing to sort");
    }

    let mut gps = FakeGps::new(at, args.seed)
        .step(args.step)
        .context("--step")?
        .warmup(args.warmup);

    let mut taken = 0;
    while taken < args.fixes {
        let fix = gps.current();
        let state = GameState::classify(true, fix.as_ref());
        let Some(fix) = fix else {
            info!(%state, "no fix yet");
            continue;
        };
        taken += 1;

        sort_by_distance(&mut locations, fix);

        println!();
        println!("Fix {taken} at {}  [{state}]", fix.coords());
        println!("{:<16} {:>12} {:<4}", "Location", "Feet", "Dir");
        println!("{}", "-".repeat(34));
        for loc in &locations {
            println!(
                "{:<16} {:>12.1} {:<4}",
                loc.name,
                loc.distance_from(fix),
                loc.bearing_from(fix),
            );
        }

        for loc in reached(&locations, fix, config.default_threshold_ft) {
            info!(location = %loc.name, "location reached");
        }
    }

    Ok(())
}
