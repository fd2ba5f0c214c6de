//! Path planning over a layout snapshot.
//!
//! - **A* Search**: shortest obstacle-avoiding route on a regular grid
//! - **Path Simplification**: reduce the cell-by-cell route to its corners
//!
//! ## A* Pathfinding
//!
//! ```rust
//! use vastu_layout::core::{Obstacle, WorldPoint};
//! use vastu_layout::pathfinding::{AStarConfig, AStarPlanner};
//!
//! let layout = vec![Obstacle::new("gondola", 2.0, -1.0, 2.0, 2.0)];
//! let planner = AStarPlanner::new(&layout, AStarConfig::default());
//!
//! let result = planner.find_path(WorldPoint::new(0.0, 0.0), WorldPoint::new(6.0, 0.0));
//! if result.success {
//!     println!("{} waypoints, {:.2}m", result.waypoints.len(), result.distance);
//! }
//! ```
//!
//! ## Path Simplification
//!
//! ```rust
//! use vastu_layout::core::WorldPoint;
//! use vastu_layout::pathfinding::optimize_path;
//!
//! let path = [
//!     WorldPoint::new(0.0, 0.0),
//!     WorldPoint::new(0.4, 0.0),
//!     WorldPoint::new(0.8, 0.0),
//! ];
//! assert_eq!(optimize_path(&path).len(), 2);
//! ```

pub mod astar;
pub mod smoothing;

pub use astar::{
    AStarConfig, AStarPlanner, PathFailure, PathQuery, PathResult, find_path, path_exists,
};

pub use smoothing::{manhattan_length, optimize_path, path_length};
