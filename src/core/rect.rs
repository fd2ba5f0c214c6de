//! Axis-aligned rectangles and layout obstacles.
//!
//! [`Rect`] is the geometry shared by both engines: its `(x, y)` is the
//! top-left corner and it extends `width` to the right and `height` downward.
//! [`Obstacle`] pairs a rectangle with the identifier the layout editor uses
//! for the block (shelf, counter, wall segment, ...).
//!
//! ```rust
//! use vastu_layout::core::{Obstacle, WorldPoint};
//!
//! let shelf = Obstacle::new("shelf-1", 5.0, 5.0, 2.0, 1.0);
//! assert!(shelf.rect.contains(WorldPoint::new(6.0, 5.5)));
//!
//! // Rotating a block swaps its footprint
//! let turned = shelf.rotated();
//! assert_eq!((turned.rect.width, turned.rect.height), (1.0, 2.0));
//! ```

use serde::{Deserialize, Serialize};

use super::point::WorldPoint;

/// Axis-aligned rectangle in meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Extent along +X.
    pub width: f32,
    /// Extent along +Y.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle spanning two corners.
    #[inline]
    pub fn from_corners(min: WorldPoint, max: WorldPoint) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Right edge (x + width).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (y + height).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Area in square meters.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Finite position and strictly positive, finite size.
    ///
    /// Everything the engines compute assumes this; malformed rectangles
    /// are treated as absent rather than rejected.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Grow the rectangle by `margin` on all four sides.
    #[inline]
    pub fn inflated(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Point inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Smallest rectangle containing both.
    #[inline]
    pub fn union(&self, other: &Rect) -> Self {
        let min = WorldPoint::new(self.x.min(other.x), self.y.min(other.y));
        let max = WorldPoint::new(
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        );
        Self::from_corners(min, max)
    }

    /// Smallest rectangle containing the rectangle and a point.
    #[inline]
    pub fn expanded_to_include(&self, point: WorldPoint) -> Self {
        self.union(&Rect::new(point.x, point.y, 0.0, 0.0))
    }
}

/// A placed block in the store layout.
///
/// Obstacles are plain values: the engines only ever borrow them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Identifier assigned by the layout editor.
    pub id: String,
    /// Footprint in world coordinates.
    #[serde(flatten)]
    pub rect: Rect,
}

impl Obstacle {
    /// Create an obstacle from its id, top-left corner and size.
    pub fn new(id: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            rect: Rect::new(x, y, width, height),
        }
    }

    /// Create an obstacle from an existing rectangle.
    pub fn from_rect(id: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }

    /// Same block turned by 90 degrees about its top-left corner.
    ///
    /// The editor only supports quarter turns, which for an axis-aligned
    /// footprint is a swap of width and height.
    pub fn rotated(&self) -> Self {
        Self {
            id: self.id.clone(),
            rect: Rect::new(self.rect.x, self.rect.y, self.rect.height, self.rect.width),
        }
    }

    /// Same block with its top-left corner moved to `(x, y)`.
    pub fn moved_to(&self, x: f32, y: f32) -> Self {
        Self {
            id: self.id.clone(),
            rect: Rect::new(x, y, self.rect.width, self.rect.height),
        }
    }

    /// Same block with a new size.
    pub fn resized(&self, width: f32, height: f32) -> Self {
        Self {
            id: self.id.clone(),
            rect: Rect::new(self.rect.x, self.rect.y, width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 6.0);
        assert_eq!(r.center(), WorldPoint::new(2.5, 4.0));
        assert_eq!(r.area(), 12.0);
    }

    #[test]
    fn test_well_formed() {
        assert!(Rect::new(0.0, 0.0, 0.1, 0.1).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, 1.0, -1.0).is_well_formed());
        assert!(!Rect::new(f32::NAN, 0.0, 1.0, 1.0).is_well_formed());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 1.0).is_well_formed());
    }

    #[test]
    fn test_inflated() {
        let r = Rect::new(5.0, 5.0, 2.0, 2.0).inflated(0.1);
        assert_relative_eq!(r.x, 4.9, epsilon = 1e-5);
        assert_relative_eq!(r.right(), 7.1, epsilon = 1e-5);
        assert_relative_eq!(r.bottom(), 7.1, epsilon = 1e-5);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(r.contains(WorldPoint::new(0.0, 0.0)));
        assert!(r.contains(WorldPoint::new(1.0, 1.0)));
        assert!(!r.contains(WorldPoint::new(1.01, 0.5)));
    }

    #[test]
    fn test_union_and_expand() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(2.0, -1.0, 1.0, 1.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, -1.0, 3.0, 2.0));

        let e = a.expanded_to_include(WorldPoint::new(-2.0, 0.5));
        assert_eq!(e, Rect::new(-2.0, 0.0, 3.0, 1.0));
    }

    #[test]
    fn test_obstacle_transforms() {
        let o = Obstacle::new("b1", 1.0, 2.0, 3.0, 0.5);
        let r = o.rotated();
        assert_eq!(r.id, "b1");
        assert_eq!(r.rect, Rect::new(1.0, 2.0, 0.5, 3.0));
        assert_eq!(r.rotated(), o);

        assert_eq!(o.moved_to(4.0, 4.0).rect.origin(), WorldPoint::new(4.0, 4.0));
        assert_eq!(o.resized(1.0, 1.0).rect.area(), 1.0);
    }

    #[test]
    fn test_obstacle_yaml_is_flat() {
        let o: Obstacle =
            serde_yaml::from_str("id: shelf\nx: 1.0\ny: 2.0\nwidth: 0.5\nheight: 4.0\n").unwrap();
        assert_eq!(o, Obstacle::new("shelf", 1.0, 2.0, 0.5, 4.0));
    }
}
