//! Test utilities for Vastu-Layout integration tests.
//!
//! Helpers for building layouts, random block sets and scenario paths.

#![allow(dead_code)]

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vastu_layout::{LayoutScenario, Obstacle, WorldPoint};

/// Shorthand for a block.
pub fn block(id: &str, x: f32, y: f32, width: f32, height: f32) -> Obstacle {
    Obstacle::new(id, x, y, width, height)
}

/// Shorthand for a point.
pub fn pt(x: f32, y: f32) -> WorldPoint {
    WorldPoint::new(x, y)
}

/// Rows of equal shelves separated by `aisle` meters of free floor.
pub fn shelf_rows(rows: usize, cols: usize, shelf: (f32, f32), aisle: f32) -> Vec<Obstacle> {
    let (w, h) = shelf;
    let mut obstacles = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            obstacles.push(block(
                &format!("shelf-{}-{}", r, c),
                aisle + c as f32 * (w + aisle),
                aisle + r as f32 * (h + aisle),
                w,
                h,
            ));
        }
    }
    obstacles
}

/// Four walls of thickness `t` whose outer edge is the given square.
pub fn sealed_room(x: f32, y: f32, side: f32, t: f32) -> Vec<Obstacle> {
    vec![
        block("wall-top", x, y, side, t),
        block("wall-bottom", x, y + side - t, side, t),
        block("wall-left", x, y + t, t, side - 2.0 * t),
        block("wall-right", x + side - t, y + t, t, side - 2.0 * t),
    ]
}

/// Random blocks inside `area` meters square, no side longer than `max_side`.
///
/// Coordinates are snapped to 5 cm so flush contacts occur regularly.
pub fn random_layout(count: usize, area: f32, max_side: f32, seed: u64) -> Vec<Obstacle> {
    let mut rng = StdRng::seed_from_u64(seed);
    let snap = |v: f32| (v / 0.05).round() * 0.05;
    (0..count)
        .map(|i| {
            block(
                &format!("b{}", i),
                snap(rng.gen_range(0.0..area)),
                snap(rng.gen_range(0.0..area)),
                snap(rng.gen_range(0.1..max_side)).max(0.1),
                snap(rng.gen_range(0.1..max_side)).max(0.1),
            )
        })
        .collect()
}

/// Absolute path of a bundled scenario file.
pub fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(format!("{}.yaml", name))
}

/// Load a bundled scenario.
pub fn load_scenario(name: &str) -> LayoutScenario {
    let path = scenario_path(name);
    LayoutScenario::load(&path)
        .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

/// Enable log output for a test run (`RUST_LOG=trace cargo test`).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
