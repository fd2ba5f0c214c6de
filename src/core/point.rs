//! Point and coordinate types for the layout plane.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Largest cell index (per axis) accepted by [`try_from_world`](Self::try_from_world).
    ///
    /// Differences and Manhattan sums of two in-range coordinates fit in `i32`.
    pub const MAX_INDEX: i32 = i32::MAX / 4;

    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Nearest grid cell to a world point at the given resolution.
    #[inline]
    pub fn from_world(point: WorldPoint, resolution: f32) -> Self {
        Self {
            x: (point.x / resolution).round() as i32,
            y: (point.y / resolution).round() as i32,
        }
    }

    /// Nearest grid cell, or `None` if the resolution is not a positive
    /// finite number or the cell index would exceed [`MAX_INDEX`](Self::MAX_INDEX).
    pub fn try_from_world(point: WorldPoint, resolution: f32) -> Option<Self> {
        if !(resolution.is_finite() && resolution > 0.0) {
            return None;
        }
        let limit = Self::MAX_INDEX as f32;
        let x = (point.x / resolution).round();
        let y = (point.y / resolution).round();
        // Negated so NaN is rejected too
        if !(x.abs() <= limit && y.abs() <= limit) {
            return None;
        }
        Some(Self::new(x as i32, y as i32))
    }

    /// World position of this cell (always a multiple of `resolution`).
    #[inline]
    pub fn to_world(self, resolution: f32) -> WorldPoint {
        WorldPoint::new(self.x as f32 * resolution, self.y as f32 * resolution)
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y.saturating_add(1)), // North
            GridCoord::new(self.x.saturating_add(1), self.y), // East
            GridCoord::new(self.x, self.y.saturating_sub(1)), // South
            GridCoord::new(self.x.saturating_sub(1), self.y), // West
        ]
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// World coordinates (meters, f32)
///
/// The layout editor uses screen-style axes: `x` grows to the right and `y`
/// grows downward, so an obstacle's `(x, y)` is its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Manhattan (L1) distance to another point
    #[inline]
    pub fn manhattan_distance(&self, other: &WorldPoint) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Snap to the nearest multiple of `resolution` on both axes.
    #[inline]
    pub fn snapped(&self, resolution: f32) -> WorldPoint {
        GridCoord::from_world(*self, resolution).to_world(resolution)
    }

    /// Both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for WorldPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        WorldPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for WorldPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        WorldPoint::new(self.x - other.x, self.y - other.y)
    }
}
