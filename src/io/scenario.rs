//! Layout scenario files.
//!
//! A scenario is a layout snapshot plus an optional route request:
//!
//! ```yaml
//! name: corner_store
//! description: Two gondolas and a checkout counter
//! obstacles:
//!   - { id: gondola-1, x: 2.0, y: 1.0, width: 0.8, height: 4.0 }
//!   - { id: checkout, x: 6.0, y: 0.0, width: 2.0, height: 1.0 }
//! start: { x: 0.0, y: 0.0 }
//! end: { x: 9.0, y: 4.0 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Obstacle, WorldPoint};
use crate::pathfinding::PathQuery;

/// Scenario load error
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// File could not be read
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        /// Scenario path
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// File is not a valid scenario
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// A layout snapshot loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LayoutScenario {
    /// Human-readable scenario name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: String,

    /// Placed blocks
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,

    /// Route start (unset until placed)
    #[serde(default)]
    pub start: Option<WorldPoint>,

    /// Route end (unset until placed)
    #[serde(default)]
    pub end: Option<WorldPoint>,
}

impl LayoutScenario {
    /// Load a scenario from a YAML file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ScenarioError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Route request over this scenario's obstacles
    pub fn path_query(&self) -> PathQuery<'_> {
        PathQuery {
            start: self.start,
            end: self.end,
            obstacles: &self.obstacles,
        }
    }

    /// Look up an obstacle by id
    pub fn obstacle(&self, id: &str) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }
}
