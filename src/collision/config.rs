//! Configuration for placement and overlap checks.

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Configuration for the collision checker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollisionConfig {
    /// Penetration below this depth (meters, per axis) is treated as flush
    /// contact, not overlap. Grid-snapped edges rarely land exactly on each
    /// other in floating point.
    /// Default: 0.01m
    pub tolerance: f32,

    /// Broad-phase expansion (meters).
    ///
    /// Target and obstacle bounds are both grown by this margin; obstacles
    /// whose grown bounds do not intersect the target's are skipped without
    /// a precise test. Overlapping rectangles always pass the filter, so the
    /// value never changes a result.
    /// Default: 10.0m
    pub broad_phase_margin: f32,

    /// Smallest width or height accepted by placement validation (meters).
    /// Default: 0.1m
    pub min_dimension: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            tolerance: defaults::tolerance(),
            broad_phase_margin: defaults::broad_phase_margin(),
            min_dimension: defaults::min_dimension(),
        }
    }
}

impl CollisionConfig {
    /// Create with a custom contact tolerance.
    pub fn with_tolerance(tolerance: f32) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }

    /// Override the broad-phase margin.
    pub fn with_broad_phase_margin(mut self, margin: f32) -> Self {
        self.broad_phase_margin = margin;
        self
    }
}
