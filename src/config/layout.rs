//! Main LayoutConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::collision::CollisionConfig;
use crate::pathfinding::AStarConfig;

use super::collision::CollisionSection;
use super::error::ConfigLoadError;
use super::pathfinding::PathfindingSection;

/// Full engine configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct LayoutConfig {
    /// Placement and overlap settings
    #[serde(default)]
    pub collision: CollisionSection,

    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,
}

impl LayoutConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engines cannot work with
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let astar = &self.pathfinding.astar;
        let positive = [
            ("pathfinding.astar.resolution", astar.resolution),
            ("collision.min_dimension", self.collision.min_dimension),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigLoadError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }

        let non_negative = [
            ("pathfinding.astar.clearance", astar.clearance),
            ("pathfinding.astar.search_padding", astar.search_padding),
            ("collision.tolerance", self.collision.tolerance),
            ("collision.broad_phase_margin", self.collision.broad_phase_margin),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigLoadError::Invalid {
                    field,
                    reason: format!("must be zero or positive, got {}", value),
                });
            }
        }

        if astar.max_iterations == 0 {
            return Err(ConfigLoadError::Invalid {
                field: "pathfinding.astar.max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Convert to CollisionConfig
    pub fn to_collision_config(&self) -> CollisionConfig {
        CollisionConfig {
            tolerance: self.collision.tolerance,
            broad_phase_margin: self.collision.broad_phase_margin,
            min_dimension: self.collision.min_dimension,
        }
    }

    /// Convert to AStarConfig
    pub fn to_astar_config(&self) -> AStarConfig {
        let astar = &self.pathfinding.astar;
        AStarConfig {
            resolution: astar.resolution,
            clearance: astar.clearance,
            max_iterations: astar.max_iterations,
            search_padding: astar.search_padding,
        }
    }
}
