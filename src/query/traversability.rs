//! Traversability checks against a layout snapshot.

use crate::collision::contains_point;
use crate::core::{Obstacle, Rect, WorldPoint};

/// Classifies positions as free or blocked, keeping `clearance` meters away
/// from every obstacle.
pub struct TraversabilityChecker<'a> {
    obstacles: &'a [Obstacle],
    clearance: f32,
}

impl<'a> TraversabilityChecker<'a> {
    /// Create a new traversability checker.
    pub fn new(obstacles: &'a [Obstacle], clearance: f32) -> Self {
        Self {
            obstacles,
            clearance,
        }
    }

    /// Get the clearance margin (meters).
    pub fn clearance(&self) -> f32 {
        self.clearance
    }

    /// Get the obstacles.
    pub fn obstacles(&self) -> &'a [Obstacle] {
        self.obstacles
    }

    /// Check if a position keeps the clearance to every obstacle.
    pub fn is_position_safe(&self, position: WorldPoint) -> bool {
        self.blocking_obstacle(position).is_none()
    }

    /// First obstacle whose inflated footprint contains `position`.
    pub fn blocking_obstacle(&self, position: WorldPoint) -> Option<&'a Obstacle> {
        self.obstacles
            .iter()
            .find(|o| contains_point(&o.rect, position, self.clearance))
    }

    /// Bounding box of all well-formed obstacles after inflation.
    ///
    /// Returns `None` for an empty (or entirely malformed) layout.
    pub fn inflated_bounds(&self) -> Option<Rect> {
        self.obstacles
            .iter()
            .filter(|o| o.rect.is_well_formed())
            .map(|o| o.rect.inflated(self.clearance))
            .reduce(|acc, r| acc.union(&r))
    }
}
