//! Unified configuration loading for the layout engines.
//!
//! Loads all tunables from a single YAML file; every key is optional and
//! falls back to the engine default.

mod collision;
pub(crate) mod defaults;
mod error;
mod layout;
mod pathfinding;

// Re-export main types
pub use error::ConfigLoadError;
pub use layout::LayoutConfig;

// Re-export section types
pub use collision::CollisionSection;
pub use pathfinding::{AStarSettings, PathfindingSection};
