//! A* pathfinding algorithm.
//!
//! Implements A* search over an implicit grid laid on the layout plane:
//! - Start/end snapped to the grid resolution
//! - Clearance margin around every obstacle
//! - 4-connected movement with a Manhattan heuristic
//! - Deterministic tie-breaking (equal f-scores expand in insertion order)

mod planner;
mod types;

pub use planner::AStarPlanner;
pub use types::{AStarConfig, PathFailure, PathQuery, PathResult};

use crate::core::{Obstacle, WorldPoint};

/// Quick path finding with default configuration
pub fn find_path(start: WorldPoint, end: WorldPoint, obstacles: &[Obstacle]) -> PathResult {
    let planner = AStarPlanner::with_defaults(obstacles);
    planner.find_path(start, end)
}

/// Check if a path exists with default configuration
pub fn path_exists(start: WorldPoint, end: WorldPoint, obstacles: &[Obstacle]) -> bool {
    find_path(start, end, obstacles).success
}
