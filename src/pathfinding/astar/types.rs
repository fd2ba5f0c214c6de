//! A* pathfinding types.

use crate::config::defaults;
use crate::core::{GridCoord, Obstacle, WorldPoint};
use log::debug;
use std::cmp::Ordering;
use thiserror::Error;

use super::planner::AStarPlanner;

/// A node in the A* open set.
///
/// Costs are whole grid steps; multiply by the resolution for meters.
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub coord: GridCoord,
    pub g_cost: u32, // Steps from start
    pub f_cost: u32, // g_cost + heuristic
    pub sequence: u64,
}

impl Eq for SearchNode {}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.sequence == other.sequence
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; equal f pops in insertion order
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinding configuration
#[derive(Clone, Debug, PartialEq)]
pub struct AStarConfig {
    /// Grid cell size in meters. Endpoints are snapped to multiples of it.
    pub resolution: f32,
    /// Distance kept from every obstacle edge (meters)
    pub clearance: f32,
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
    /// Free margin around the start, goal and inflated obstacles that the
    /// search may use (meters). Must be at least one cell wide.
    pub search_padding: f32,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            clearance: defaults::clearance(),
            max_iterations: defaults::max_iterations(),
            search_padding: defaults::search_padding(),
        }
    }
}

impl AStarConfig {
    /// Create with a custom grid resolution
    pub fn with_resolution(resolution: f32) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Override the clearance margin
    pub fn with_clearance(mut self, clearance: f32) -> Self {
        self.clearance = clearance;
        self
    }

    /// Override the expansion limit
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Reason for path failure
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathFailure {
    /// Start position is inside an obstacle's clearance zone
    #[error("Start point is blocked by an obstacle")]
    StartBlocked,
    /// End position is inside an obstacle's clearance zone
    #[error("End point is blocked by an obstacle")]
    EndBlocked,
    /// Start or end was not provided (or is not a finite point)
    #[error("Both start and end points must be set")]
    MissingEndpoints,
    /// Grid resolution is zero, negative or not finite
    #[error("Grid resolution must be a positive finite number")]
    InvalidResolution,
    /// Start or end lies beyond the addressable grid
    #[error("Start or end point is outside the plannable area")]
    OutOfRange,
    /// No path exists between start and end
    #[error("No path exists between start and end")]
    NoPath,
    /// Expansion limit reached before the goal
    #[error("Search stopped after {limit} iterations without reaching the end")]
    MaxIterationsExceeded {
        /// Configured expansion limit
        limit: usize,
    },
    /// Caller raised the cancellation flag
    #[error("Search was cancelled")]
    Cancelled,
}

/// Result of A* pathfinding
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Whether a path was found
    pub success: bool,
    /// Simplified waypoints, start and end included (empty if no path found)
    pub waypoints: Vec<WorldPoint>,
    /// Full cell-by-cell path before simplification
    pub path_grid: Vec<GridCoord>,
    /// Manhattan length of the path in meters
    pub distance: f32,
    /// Human-readable summary, for display only
    pub message: String,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            success: false,
            waypoints: Vec::new(),
            path_grid: Vec::new(),
            distance: 0.0,
            message: reason.to_string(),
            failure_reason: Some(reason),
            nodes_expanded,
        }
    }

    /// Create a successful result
    pub(super) fn found(
        waypoints: Vec<WorldPoint>,
        path_grid: Vec<GridCoord>,
        distance: f32,
        nodes_expanded: usize,
    ) -> Self {
        Self {
            success: true,
            message: format!(
                "Path found: {} waypoints, {:.2}m",
                waypoints.len(),
                distance
            ),
            waypoints,
            path_grid,
            distance,
            failure_reason: None,
            nodes_expanded,
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path_grid.len()
    }
}

/// A path request as the layout editor issues it.
///
/// Either endpoint may still be unset when the user has not placed it yet.
#[derive(Clone, Debug)]
pub struct PathQuery<'a> {
    /// Start point (meters)
    pub start: Option<WorldPoint>,
    /// End point (meters)
    pub end: Option<WorldPoint>,
    /// Layout snapshot to route around
    pub obstacles: &'a [Obstacle],
}

impl<'a> PathQuery<'a> {
    /// Create a query with both endpoints set
    pub fn new(start: WorldPoint, end: WorldPoint, obstacles: &'a [Obstacle]) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            obstacles,
        }
    }

    /// Both endpoints, if both are set and finite
    pub fn endpoints(&self) -> Option<(WorldPoint, WorldPoint)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start.is_finite() && end.is_finite() => Some((start, end)),
            _ => None,
        }
    }

    /// Plan the query, failing with `MissingEndpoints` if it is incomplete
    pub fn run(&self, config: AStarConfig) -> PathResult {
        match self.endpoints() {
            Some((start, end)) => AStarPlanner::new(self.obstacles, config).find_path(start, end),
            None => {
                debug!("[AStar] FAILED: MissingEndpoints - start or end not set");
                PathResult::failed(PathFailure::MissingEndpoints, 0)
            }
        }
    }
}
