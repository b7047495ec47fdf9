#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are `f64` pixels relative to a containing surface (origin at
//! top-left, y growing downward). [`Offset`] is `Copy`, so snapshotting the
//! geometry at gesture start is a plain assignment and mutating the snapshot
//! can never write through to the live value.

/// A rectangle positioned inside a containing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    /// Left edge, pixels from the container's left.
    pub left: f64,
    /// Top edge, pixels from the container's top.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Offset {
    /// Create a new offset rectangle.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create an offset at the container origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (`left + width`).
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Check if a point is inside the rectangle (edges inclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

/// An absolute pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Total displacement of `self` from `origin`.
    #[inline]
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Delta {
        Delta {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Total pointer displacement since gesture start.
///
/// Always measured from the gesture's origin position, never frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    pub x: f64,
    pub y: f64,
}

impl Delta {
    /// The zero displacement.
    pub const ZERO: Delta = Delta { x: 0.0, y: 0.0 };

    /// Create a new delta.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The containing surface's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::{Delta, Offset, Point, Size};

    #[test]
    fn offset_edges() {
        let offset = Offset::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(offset.right(), 110.0);
        assert_eq!(offset.bottom(), 70.0);
    }

    #[test]
    fn offset_from_size_sits_at_origin() {
        let offset = Offset::from_size(30.0, 40.0);
        assert_eq!(offset, Offset::new(0.0, 0.0, 30.0, 40.0));
    }

    #[test]
    fn offset_contains_interior_and_edges() {
        let offset = Offset::new(10.0, 10.0, 20.0, 20.0);
        assert!(offset.contains(Point::new(15.0, 15.0)));
        assert!(offset.contains(Point::new(10.0, 10.0)));
        assert!(offset.contains(Point::new(30.0, 30.0)));
        assert!(!offset.contains(Point::new(9.9, 15.0)));
        assert!(!offset.contains(Point::new(15.0, 30.1)));
    }

    #[test]
    fn copies_are_independent() {
        let original = Offset::new(1.0, 2.0, 3.0, 4.0);
        let mut copy = original;
        copy.left = 100.0;
        copy.height = 0.0;
        assert_eq!(original, Offset::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn delta_from_origin() {
        let origin = Point::new(300.0, 200.0);
        let current = Point::new(250.0, 150.0);
        assert_eq!(current.delta_from(origin), Delta::new(-50.0, -50.0));
    }

    #[test]
    fn delta_zero() {
        let p = Point::new(42.0, 17.0);
        assert_eq!(p.delta_from(p), Delta::ZERO);
    }

    #[test]
    fn size_constructor() {
        let size = Size::new(1000.0, 500.0);
        assert_eq!(size.width, 1000.0);
        assert_eq!(size.height, 500.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn offset_round_trips_through_json() {
        let offset = Offset::new(100.0, 100.0, 200.0, 100.0);
        let json = serde_json::to_string(&offset).unwrap();
        let back: Offset = serde_json::from_str(&json).unwrap();
        assert_eq!(offset, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn offset_builds_from_plain_record() {
        let offset: Offset =
            serde_json::from_str(r#"{"left":5,"top":6,"width":7,"height":8}"#).unwrap();
        assert_eq!(offset, Offset::new(5.0, 6.0, 7.0, 8.0));
    }
}
