//! File formats: layout scenarios for the CLI, tests and benchmarks.

mod scenario;

pub use scenario::{LayoutScenario, ScenarioError};
