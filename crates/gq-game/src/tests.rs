//! Unit tests for gq-game.

use gq_geo::GeoPoint;

use crate::GameLocation;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn loc(name: &str, lat: f64, lon: f64) -> GameLocation {
    GameLocation::new(name, GeoPoint::new(lat, lon))
}

/// A handful of downtown points, deliberately out of distance order.
fn downtown() -> Vec<GameLocation> {
    vec![
        loc("Cathedral", 30.6905, -88.0456),
        loc("Fountain", 30.6940, -88.0430),
        loc("Library", 30.6951, -88.0402),
        loc("Fort", 30.6892, -88.0398),
        loc("Ballpark", 30.6791, -88.0817),
    ]
}

// ── Sorting ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sorting {
    use gq_geo::{calculate_distance, GeoPoint};

    use super::*;
    use crate::{distance_sort, nearest, sort_by_distance, Position};

    #[test]
    fn closer_location_first() {
        let mut locs = vec![loc("A", 0.0, 10.0), loc("B", 0.0, 1.0)];
        locs.sort_by(distance_sort(GeoPoint::new(0.0, 0.0)));
        let names: Vec<&str> = locs.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn distances_non_decreasing() {
        let player = Position::fake(GeoPoint::new(30.6935, -88.0425));
        let mut locs = downtown();
        sort_by_distance(&mut locs, player);

        let dists: Vec<f64> = locs
            .iter()
            .map(|l| calculate_distance(l.coords.lat, l.coords.lon, 30.6935, -88.0425))
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]), "{dists:?}");
        assert_eq!(locs[0].name, "Fountain");
        assert_eq!(locs[4].name, "Ballpark");
    }

    #[test]
    fn live_and_fake_positions_sort_alike() {
        let at = GeoPoint::new(30.6900, -88.0400);
        let mut by_live = downtown();
        let mut by_fake = downtown();
        sort_by_distance(&mut by_live, Position::live(at, Some(16.0), 1_700_000_000_000));
        sort_by_distance(&mut by_fake, Position::fake(at));
        assert_eq!(by_live, by_fake);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut locs = vec![loc("first", 1.0, 0.0), loc("second", -1.0, 0.0), loc("origin", 0.0, 0.0)];
        sort_by_distance(&mut locs, GeoPoint::new(0.0, 0.0));
        let names: Vec<&str> = locs.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["origin", "first", "second"]);
    }

    #[test]
    fn nan_distance_sorts_last() {
        let mut locs = vec![loc("broken", f64::NAN, 0.0), loc("far", 5.0, 5.0), loc("near", 0.1, 0.1)];
        sort_by_distance(&mut locs, GeoPoint::new(0.0, 0.0));
        let names: Vec<&str> = locs.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["near", "far", "broken"]);
    }

    #[test]
    fn nearest_picks_closest() {
        let locs = downtown();
        let near = nearest(&locs, GeoPoint::new(30.6790, -88.0810)).unwrap();
        assert_eq!(near.name, "Ballpark");
        assert!(nearest(&[], GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn sort_relative_to_another_location() {
        let locs = downtown();
        let fort = locs[3].clone();
        let mut others = locs;
        sort_by_distance(&mut others, &fort);
        assert_eq!(others[0].name, "Fort");
    }
}

// ── GameLocation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod location {
    use gq_geo::{Compass, GeoPoint};

    use super::*;
    use crate::{reached, Position};

    #[test]
    fn distance_and_bearing_from_player() {
        let target = loc("Library", 30.6951, -88.0402);
        let player = Position::fake(GeoPoint::new(30.6940, -88.0430));
        let d = target.distance_from(player);
        assert!((d - 1_097.42).abs() < 0.01, "got {d}");
        assert_eq!(target.bearing_from(player), Compass::E);
    }

    #[test]
    fn own_threshold_beats_default() {
        let target = loc("Fountain", 30.6940, -88.0430).with_threshold(50.0);
        // ~36 ft north
        let player = GeoPoint::new(30.6941, -88.0430);
        assert!(target.is_reached(player, 10.0));

        let strict = target.clone().with_threshold(20.0);
        assert!(!strict.is_reached(player, 1_000.0));
    }

    #[test]
    fn default_threshold_used_when_missing() {
        let target = loc("Fountain", 30.6940, -88.0430);
        let player = GeoPoint::new(30.6941, -88.0430);
        assert!(target.is_reached(player, 100.0));
        assert!(!target.is_reached(player, 30.0));
    }

    #[test]
    fn reached_filters_in_input_order() {
        let locs = vec![
            loc("here", 0.0, 0.0),
            loc("far", 1.0, 0.0),
            loc("also_here", 0.0, 0.0).with_threshold(0.0),
        ];
        let names: Vec<&str> = reached(&locs, GeoPoint::new(0.0, 0.0), 100.0)
            .into_iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["here", "also_here"]);
    }

    #[test]
    fn json_shape_uses_coordinate_pair() {
        let target = loc("Fountain", 30.5, -88.25).with_threshold(50.0);
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, r#"{"name":"Fountain","coords":[30.5,-88.25],"threshold":50.0}"#);

        let back: GameLocation = serde_json::from_str(r#"{"name":"X","coords":[1.0,2.0]}"#).unwrap();
        assert_eq!(back, loc("X", 1.0, 2.0));
    }
}

// ── Positions ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod position {
    use gq_geo::GeoPoint;

    use crate::{FakeGps, FixedPosition, GameError, Located, Position, PositionSource};

    #[test]
    fn variants_expose_same_point() {
        let at = GeoPoint::new(10.0, 20.0);
        let live = Position::live(at, None, 0);
        let fake = Position::fake(at);
        assert_eq!(live.point(), fake.point());
        assert!(!live.is_fake());
        assert!(fake.is_fake());
    }

    #[test]
    fn tagged_json() {
        let fake = Position::fake(GeoPoint::new(1.0, 2.0));
        let json = serde_json::to_string(&fake).unwrap();
        assert_eq!(json, r#"{"kind":"fake","coords":{"lat":1.0,"lon":2.0}}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fake);
    }

    #[test]
    fn fixed_position_never_moves() {
        let mut src = FixedPosition(GeoPoint::new(3.0, 4.0));
        for _ in 0..3 {
            assert_eq!(src.current().unwrap().coords(), GeoPoint::new(3.0, 4.0));
        }
    }

    #[test]
    fn fake_gps_is_deterministic() {
        let start = GeoPoint::new(30.694, -88.043);
        let mut a = FakeGps::new(start, 42);
        let mut b = FakeGps::new(start, 42);
        for _ in 0..50 {
            assert_eq!(a.current(), b.current());
        }
    }

    #[test]
    fn fake_gps_seeds_diverge() {
        let start = GeoPoint::new(30.694, -88.043);
        let mut a = FakeGps::new(start, 1);
        let mut b = FakeGps::new(start, 2);
        // First fix is the start point for both.
        assert_eq!(a.current(), b.current());
        assert_ne!(a.current(), b.current());
    }

    #[test]
    fn fake_gps_step_bounded() {
        let mut gps = FakeGps::new(GeoPoint::new(0.0, 0.0), 9).step(0.001).unwrap();
        let mut prev = gps.current().unwrap().coords();
        for _ in 0..100 {
            let next = gps.current().unwrap().coords();
            assert!((next.lat - prev.lat).abs() <= 0.001 + 1e-12);
            assert!((next.lon - prev.lon).abs() <= 0.001 + 1e-12);
            prev = next;
        }
    }

    #[test]
    fn fake_gps_warmup_then_fix() {
        let mut gps = FakeGps::new(GeoPoint::new(0.0, 0.0), 0).warmup(2);
        assert!(gps.current().is_none());
        assert!(gps.current().is_none());
        assert!(gps.current().is_some());
    }

    #[test]
    fn fake_gps_rejects_unusable_step() {
        let start = GeoPoint::new(0.0, 0.0);
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e308, 180.5] {
            assert!(
                matches!(FakeGps::new(start, 1).step(bad), Err(GameError::Config(_))),
                "step {bad} accepted"
            );
        }
    }

    #[test]
    fn fake_gps_largest_step_walks() {
        let mut gps = FakeGps::new(GeoPoint::new(0.0, 0.0), 1)
            .step(-FakeGps::MAX_STEP_DEG)
            .unwrap();
        for _ in 0..20 {
            assert!(gps.current().unwrap().coords().validate().is_ok());
        }
    }

    #[test]
    fn fake_gps_stays_on_the_globe() {
        let mut gps = FakeGps::new(GeoPoint::new(89.99, 179.99), 5).step(0.5).unwrap();
        for _ in 0..200 {
            let p = gps.current().unwrap().coords();
            assert!(p.validate().is_ok(), "{p}");
        }
    }
}

// ── State enums ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use gq_geo::GeoPoint;

    use crate::{GameDifficulty, GameState, Position};

    #[test]
    fn classify() {
        let fix = Position::fake(GeoPoint::new(0.0, 0.0));
        assert_eq!(GameState::classify(false, Some(&fix)), GameState::BeforeStart);
        assert_eq!(GameState::classify(true, None), GameState::AwaitingGps);
        assert_eq!(GameState::classify(true, Some(&fix)), GameState::Playing);
    }

    #[test]
    fn string_forms() {
        for s in [GameState::BeforeStart, GameState::AwaitingGps, GameState::Playing] {
            assert_eq!(s.to_string().parse::<GameState>().unwrap(), s);
        }
        assert_eq!("Hard".parse::<GameDifficulty>().unwrap(), GameDifficulty::Hard);
        assert!("nightmare".parse::<GameDifficulty>().is_err());
        assert_eq!(GameDifficulty::default(), GameDifficulty::Medium);
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&GameState::AwaitingGps).unwrap(), "\"awaiting_gps\"");
        assert_eq!(serde_json::to_string(&GameDifficulty::Easy).unwrap(), "\"easy\"");
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::io::Cursor;

    use crate::{load_config_json, load_config_reader, GameConfig, GameDifficulty, GameError};

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = load_config_reader(Cursor::new("{}")).unwrap();
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.default_threshold_ft, 100.0);
    }

    #[test]
    fn full_config() {
        let json = r#"{ "difficulty": "hard", "default_threshold_ft": 60.0 }"#;
        let cfg = load_config_reader(Cursor::new(json)).unwrap();
        assert_eq!(cfg.difficulty, GameDifficulty::Hard);
        assert_eq!(cfg.default_threshold_ft, 60.0);
    }

    #[test]
    fn negative_threshold_rejected() {
        let json = r#"{ "default_threshold_ft": -1.0 }"#;
        assert!(matches!(load_config_reader(Cursor::new(json)), Err(GameError::Config(_))));
    }

    #[test]
    fn bad_difficulty_rejected() {
        let json = r#"{ "difficulty": "nightmare" }"#;
        assert!(matches!(load_config_reader(Cursor::new(json)), Err(GameError::Config(_))));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        std::fs::write(&path, r#"{ "difficulty": "easy" }"#).unwrap();
        let cfg = load_config_json(&path).unwrap();
        assert_eq!(cfg.difficulty, GameDifficulty::Easy);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_json(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use gq_geo::{GeoError, GeoPoint};

    use crate::{
        load_locations_csv, load_locations_json, load_locations_json_reader,
        load_locations_reader, GameError,
    };

    const CSV: &[u8] = b"\
name,lat,lon,threshold\n\
Fountain,30.6940,-88.0430,50\n\
Library, 30.6951 , -88.0402,\n\
Fort,30.6892,-88.0398,125.5\n\
";

    #[test]
    fn loads_in_file_order() {
        let locs = load_locations_reader(Cursor::new(CSV)).unwrap();
        let names: Vec<&str> = locs.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Fountain", "Library", "Fort"]);
        assert_eq!(locs[1].coords, GeoPoint::new(30.6951, -88.0402));
    }

    #[test]
    fn empty_threshold_is_none() {
        let locs = load_locations_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(locs[0].threshold, Some(50.0));
        assert_eq!(locs[1].threshold, None);
        assert_eq!(locs[2].threshold, Some(125.5));
    }

    #[test]
    fn out_of_range_row_reported() {
        let bad = b"\
name,lat,lon,threshold\n\
Ok,1.0,1.0,\n\
Typo,300.0,1.0,\n\
";
        match load_locations_reader(Cursor::new(bad.as_slice())) {
            Err(GameError::InvalidRow { row, source }) => {
                assert_eq!(row, 2);
                assert_eq!(source, GeoError::LatitudeOutOfRange(300.0));
            }
            other => panic!("expected InvalidRow, got {other:?}"),
        }
    }

    #[test]
    fn negative_threshold_rejected() {
        let bad = b"name,lat,lon,threshold\nX,1.0,1.0,-5\n";
        assert!(matches!(
            load_locations_reader(Cursor::new(bad.as_slice())),
            Err(GameError::InvalidThreshold { row: 1, .. })
        ));
    }

    #[test]
    fn non_numeric_field_is_parse_error() {
        let bad = b"name,lat,lon,threshold\nX,north,1.0,\n";
        assert!(matches!(
            load_locations_reader(Cursor::new(bad.as_slice())),
            Err(GameError::Parse(_))
        ));
    }

    #[test]
    fn json_array() {
        let json = r#"[
            { "name": "Fountain", "coords": [30.694, -88.043], "threshold": 50 },
            { "name": "Library", "coords": [30.6951, -88.0402] }
        ]"#;
        let locs = load_locations_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(locs.len(), 2);
        assert_eq!(locs[0].threshold, Some(50.0));
        assert_eq!(locs[1].threshold, None);
    }

    #[test]
    fn json_bad_longitude() {
        let json = r#"[{ "name": "X", "coords": [0.0, 181.0] }]"#;
        assert!(matches!(
            load_locations_json_reader(Cursor::new(json)),
            Err(GameError::InvalidRow { row: 1, .. })
        ));
    }

    #[test]
    fn csv_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.csv");
        std::fs::write(&path, CSV).unwrap();
        assert_eq!(load_locations_csv(&path).unwrap().len(), 3);
    }

    #[test]
    fn json_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locations.json");
        std::fs::write(
            &path,
            r#"[{ "name": "Fort", "coords": [30.6892, -88.0398], "threshold": 150 }]"#,
        )
        .unwrap();
        let locs = load_locations_json(&path).unwrap();
        assert_eq!(locs.len(), 1);
        assert_eq!(locs[0].name, "Fort");
        assert_eq!(locs[0].threshold, Some(150.0));
    }

    #[test]
    fn missing_json_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_locations_json(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
