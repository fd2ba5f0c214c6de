//! Core types for the vastu-layout engines.
//!
//! - [`WorldPoint`] and [`GridCoord`]: coordinate types
//! - [`Rect`] and [`Obstacle`]: axis-aligned layout blocks

mod point;
mod rect;

pub use point::{GridCoord, WorldPoint};
pub use rect::{Obstacle, Rect};
