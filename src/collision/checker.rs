//! Collision checker implementation.

use std::collections::HashSet;

use log::{debug, trace};

use crate::core::{Obstacle, Rect, WorldPoint};

use super::config::CollisionConfig;
use super::validation::{PlacementError, ValidationResult};

/// Stateless overlap and placement checks over axis-aligned blocks.
///
/// Every call works on the slice it is given; nothing is cached between
/// calls.
#[derive(Clone, Debug, Default)]
pub struct CollisionChecker {
    config: CollisionConfig,
}

impl CollisionChecker {
    /// Create a new collision checker.
    pub fn new(config: CollisionConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(CollisionConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    // =========================================================================
    // Pairwise tests
    // =========================================================================

    /// Check if two rectangles overlap by more than the contact tolerance on
    /// both axes.
    ///
    /// Edge-adjacent blocks (within tolerance) do not overlap. Malformed
    /// rectangles never overlap anything.
    pub fn overlaps(&self, a: &Rect, b: &Rect) -> bool {
        if !a.is_well_formed() || !b.is_well_formed() {
            return false;
        }
        let tol = self.config.tolerance;

        a.x < b.right() - tol
            && a.right() > b.x + tol
            && a.y < b.bottom() - tol
            && a.bottom() > b.y + tol
    }

    /// Intersection rectangle of two overlapping rectangles.
    ///
    /// Returns `None` when [`overlaps`](Self::overlaps) is false.
    pub fn overlap_area(&self, a: &Rect, b: &Rect) -> Option<Rect> {
        if !self.overlaps(a, b) {
            return None;
        }
        let min = WorldPoint::new(a.x.max(b.x), a.y.max(b.y));
        let max = WorldPoint::new(a.right().min(b.right()), a.bottom().min(b.bottom()));
        Some(Rect::from_corners(min, max))
    }

    // =========================================================================
    // Target against a layout
    // =========================================================================

    /// Check if `target` overlaps any obstacle in the layout.
    ///
    /// Skips the obstacle whose id equals `exclude_id` (the block's own
    /// previous placement) and `target` itself when it is an element of
    /// `obstacles`.
    pub fn has_collision(
        &self,
        target: &Obstacle,
        obstacles: &[Obstacle],
        exclude_id: Option<&str>,
    ) -> bool {
        self.first_collision(target, obstacles, exclude_id).is_some()
    }

    /// First obstacle that `target` overlaps, in slice order.
    pub fn first_collision<'a>(
        &self,
        target: &Obstacle,
        obstacles: &'a [Obstacle],
        exclude_id: Option<&str>,
    ) -> Option<&'a Obstacle> {
        obstacles.iter().find(|other| {
            if std::ptr::eq(*other, target) || exclude_id == Some(other.id.as_str()) {
                return false;
            }
            !self.is_far(&target.rect, &other.rect) && self.overlaps(&target.rect, &other.rect)
        })
    }

    /// Broad-phase rejection: bounds grown by the margin are disjoint.
    #[inline]
    fn is_far(&self, a: &Rect, b: &Rect) -> bool {
        let margin = self.config.broad_phase_margin;
        let (a, b) = (a.inflated(margin), b.inflated(margin));
        a.x > b.right() || b.x > a.right() || a.y > b.bottom() || b.y > a.bottom()
    }

    /// Identifiers of every obstacle that overlaps at least one other.
    ///
    /// Tests all unordered pairs. Intended for an on-demand overlap view
    /// over interactively sized layouts.
    pub fn find_overlapping(&self, obstacles: &[Obstacle]) -> HashSet<String> {
        let mut overlapping = HashSet::new();

        for (i, a) in obstacles.iter().enumerate() {
            for b in &obstacles[i + 1..] {
                if self.overlaps(&a.rect, &b.rect) {
                    overlapping.insert(a.id.clone());
                    overlapping.insert(b.id.clone());
                }
            }
        }

        trace!(
            "[Collision] find_overlapping: {} of {} obstacles overlap",
            overlapping.len(),
            obstacles.len()
        );
        overlapping
    }

    /// Validate a new or edited placement.
    ///
    /// Rejects blocks smaller than `min_dimension` on either side, then
    /// blocks that overlap the rest of the layout.
    pub fn validate_placement(
        &self,
        target: &Obstacle,
        obstacles: &[Obstacle],
        exclude_id: Option<&str>,
    ) -> ValidationResult {
        let min = self.config.min_dimension;
        let (width, height) = (target.rect.width, target.rect.height);

        // Negated so NaN sizes are rejected too
        if !(width >= min && height >= min) {
            debug!(
                "[Collision] rejected '{}': size {:.2}x{:.2} below {:.2}",
                target.id, width, height, min
            );
            return ValidationResult::rejected(PlacementError::TooSmall { width, height, min });
        }

        if let Some(other) = self.first_collision(target, obstacles, exclude_id) {
            debug!(
                "[Collision] rejected '{}': overlaps '{}'",
                target.id, other.id
            );
            return ValidationResult::rejected(PlacementError::Overlap {
                other_id: other.id.clone(),
            });
        }

        ValidationResult::ok()
    }
}
