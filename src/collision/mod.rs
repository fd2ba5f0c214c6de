//! Placement validity and overlap detection.
//!
//! Stateless geometry over axis-aligned layout blocks:
//!
//! - **Overlap test**: rectangles must penetrate by more than a small
//!   tolerance to count, so flush, grid-snapped neighbours are allowed
//! - **Collision query**: one block against a layout, with broad-phase
//!   rejection of distant blocks
//! - **Overlap report**: every block involved in any overlap
//! - **Placement validation**: minimum size plus collision, with a reason
//!
//! ```rust
//! use vastu_layout::collision::{has_collision, overlaps, validate_placement};
//! use vastu_layout::core::Obstacle;
//!
//! let layout = vec![
//!     Obstacle::new("a", 0.0, 0.0, 1.0, 1.0),
//!     Obstacle::new("b", 1.0, 0.0, 1.0, 1.0),
//! ];
//! assert!(!overlaps(&layout[0], &layout[1]));
//!
//! let dragged = layout[0].moved_to(0.5, 0.0);
//! assert!(has_collision(&dragged, &layout, Some("a")));
//! assert!(!validate_placement(&dragged, &layout, Some("a")).valid);
//! ```

mod checker;
mod config;
mod validation;

pub use checker::CollisionChecker;
pub use config::CollisionConfig;
pub use validation::{PlacementError, ValidationResult};

use std::collections::HashSet;

use crate::core::{Obstacle, Rect, WorldPoint};

/// Check if a point lies inside (or on) a rectangle grown by `margin`.
///
/// This is the primitive the path planner classifies grid cells with.
/// Malformed rectangles and non-finite points are never inside.
pub fn contains_point(rect: &Rect, point: WorldPoint, margin: f32) -> bool {
    if !rect.is_well_formed() || !point.is_finite() {
        return false;
    }
    rect.inflated(margin).contains(point)
}

/// Quick pairwise overlap test with default tolerance.
pub fn overlaps(a: &Obstacle, b: &Obstacle) -> bool {
    CollisionChecker::with_defaults().overlaps(&a.rect, &b.rect)
}

/// Quick collision query with default configuration.
pub fn has_collision(target: &Obstacle, obstacles: &[Obstacle], exclude_id: Option<&str>) -> bool {
    CollisionChecker::with_defaults().has_collision(target, obstacles, exclude_id)
}

/// Quick overlap report with default configuration.
pub fn find_overlapping(obstacles: &[Obstacle]) -> HashSet<String> {
    CollisionChecker::with_defaults().find_overlapping(obstacles)
}

/// Quick intersection rectangle with default tolerance.
pub fn overlap_area(a: &Obstacle, b: &Obstacle) -> Option<Rect> {
    CollisionChecker::with_defaults().overlap_area(&a.rect, &b.rect)
}

/// Quick placement validation with default configuration.
pub fn validate_placement(
    target: &Obstacle,
    obstacles: &[Obstacle],
    exclude_id: Option<&str>,
) -> ValidationResult {
    CollisionChecker::with_defaults().validate_placement(target, obstacles, exclude_id)
}
