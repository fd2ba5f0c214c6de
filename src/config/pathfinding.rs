//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Pathfinding settings section
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PathfindingSection {
    /// A* algorithm settings
    #[serde(default)]
    pub astar: AStarSettings,
}

/// A* algorithm settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// Grid cell size (meters)
    #[serde(default = "defaults::resolution")]
    pub resolution: f32,

    /// Distance kept from obstacles (meters)
    #[serde(default = "defaults::clearance")]
    pub clearance: f32,

    /// Maximum nodes to expand
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,

    /// Free margin the search may use around the layout (meters)
    #[serde(default = "defaults::search_padding")]
    pub search_padding: f32,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            clearance: defaults::clearance(),
            max_iterations: defaults::max_iterations(),
            search_padding: defaults::search_padding(),
        }
    }
}
