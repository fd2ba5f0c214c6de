//! Layout queries used by navigation.
//!
//! Provides methods to check if positions are safe to route through.

mod traversability;

pub use traversability::TraversabilityChecker;

use crate::core::{Obstacle, WorldPoint};

/// Default clearance kept between a route and any obstacle (meters).
pub const DEFAULT_CLEARANCE: f32 = 0.1;

/// Quick check if a point keeps the default clearance to every obstacle.
pub fn is_safe(obstacles: &[Obstacle], point: WorldPoint) -> bool {
    TraversabilityChecker::new(obstacles, DEFAULT_CLEARANCE).is_position_safe(point)
}
