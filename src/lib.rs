//! # Vastu-Layout: Floor Layout Geometry Library
//!
//! Collision detection and grid route planning for a 2D floor-plan editor.
//! Blocks are axis-aligned rectangles placed in meters; the editor asks two
//! questions of every layout snapshot:
//!
//! - **May this block go here?** Tolerance-aware overlap tests with a cheap
//!   broad-phase filter, plus placement validation for drag/drop/resize.
//! - **How do I walk from A to B?** 4-connected A* over a uniform grid with a
//!   clearance margin around every block, simplified to corner waypoints.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_layout::{find_path, find_overlapping, Obstacle, WorldPoint};
//!
//! let layout = vec![
//!     Obstacle::new("shelf-a", 2.0, -1.0, 1.0, 2.0),
//!     Obstacle::new("shelf-b", 6.0, 3.0, 1.0, 1.0),
//! ];
//! assert!(find_overlapping(&layout).is_empty());
//!
//! let result = find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(4.0, 0.0), &layout);
//! assert!(result.success);
//! println!("{} ({} waypoints)", result.message, result.waypoints.len());
//! ```
//!
//! ## Coordinate Frame
//!
//! Screen convention, as in the editor canvas:
//! - **X-right**: Positive X grows to the right
//! - **Y-down**: Positive Y grows downward
//! - A block's `(x, y)` is its top-left corner
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (WorldPoint, GridCoord, Rect, Obstacle)
//! - [`collision`]: Overlap tests, overlap sets and placement validation
//! - [`query`]: Clearance-aware traversability checks
//! - [`pathfinding`]: A* planner and waypoint simplification
//! - [`config`]: YAML configuration
//! - [`io`]: Layout scenario files
//!
//! ```text
//!     Layout snapshot ──► collision ──► overlap set / validation result
//!            │
//!            └──► query (clearance) ──► pathfinding (A*) ──► optimize_path ──► PathResult
//! ```
//!
//! Every operation is a pure function of its inputs; a snapshot can be
//! shared across threads and queried concurrently.

pub mod collision;
pub mod config;
pub mod core;
pub mod io;
pub mod pathfinding;
pub mod query;

// Re-export main types at crate root
pub use crate::core::{GridCoord, Obstacle, Rect, WorldPoint};

pub use collision::{
    CollisionChecker, CollisionConfig, PlacementError, ValidationResult, find_overlapping,
    has_collision, overlap_area, overlaps, validate_placement,
};

pub use pathfinding::{
    AStarConfig, AStarPlanner, PathFailure, PathQuery, PathResult, find_path, optimize_path,
    path_exists,
};

pub use config::{ConfigLoadError, LayoutConfig};
pub use io::{LayoutScenario, ScenarioError};
