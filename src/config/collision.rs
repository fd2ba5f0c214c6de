//! Collision configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Collision settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CollisionSection {
    /// Penetration treated as flush contact (meters)
    #[serde(default = "defaults::tolerance")]
    pub tolerance: f32,

    /// Broad-phase bounds expansion (meters)
    #[serde(default = "defaults::broad_phase_margin")]
    pub broad_phase_margin: f32,

    /// Smallest accepted block side (meters)
    #[serde(default = "defaults::min_dimension")]
    pub min_dimension: f32,
}

impl Default for CollisionSection {
    fn default() -> Self {
        Self {
            tolerance: defaults::tolerance(),
            broad_phase_margin: defaults::broad_phase_margin(),
            min_dimension: defaults::min_dimension(),
        }
    }
}
