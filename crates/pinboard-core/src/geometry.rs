//! Geometric primitives for board layout and positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in board space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Pinboard uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! One unit is one SVG user unit (a CSS pixel when the document is shown at
//! its natural size).

/// A 2D point representing a position in board coordinate space.
///
/// # Examples
///
/// ```
/// # use pinboard_core::geometry::Point;
/// let hole = Point::new(120.0, 40.0);
/// let next = hole.add_point(Point::new(20.0, 0.0));
/// assert_eq!(next.x(), 140.0);
/// assert_eq!(next.y(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a square size with both sides equal to `side`
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Returns `true` when `point` lies inside or on the edge of the bounds.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pinboard_core::geometry::{Bounds, Point, Size};
    /// let rail = Bounds::new_from_top_left(Point::new(30.0, 20.0), Size::new(60.0, 1340.0));
    /// let bank = Bounds::new_from_top_left(Point::new(120.0, 40.0), Size::new(100.0, 1300.0));
    ///
    /// let combined = rail.merge(&bank);
    /// assert_eq!(combined.min_x(), 30.0);
    /// assert_eq!(combined.max_x(), 220.0);
    /// assert_eq!(combined.max_y(), 1360.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(120.0, 40.0), Size::square(6.0));

        assert_approx_eq!(f32, bounds.min_x(), 117.0);
        assert_approx_eq!(f32, bounds.min_y(), 37.0);
        assert_approx_eq!(f32, bounds.width(), 6.0);
        assert_approx_eq!(f32, bounds.height(), 6.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(40.0, 60.0), Size::new(180.0, 180.0));

        assert_approx_eq!(f32, bounds.max_x(), 220.0);
        assert_approx_eq!(f32, bounds.max_y(), 240.0);
        assert_eq!(bounds.center(), Point::new(130.0, 150.0));
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));

        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(!bounds.contains(Point::new(10.5, 5.0)));
    }

    proptest! {
        #[test]
        fn prop_center_round_trips(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            side in 0.0f32..100.0,
        ) {
            let center = Point::new(x, y);
            let bounds = center.to_bounds(Size::square(side));
            let back = bounds.center();
            prop_assert!((back.x() - x).abs() < 1e-3);
            prop_assert!((back.y() - y).abs() < 1e-3);
        }

        #[test]
        fn prop_merge_contains_both(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
        ) {
            let a = Bounds::new_from_top_left(Point::new(ax, ay), Size::new(10.0, 10.0));
            let b = Bounds::new_from_top_left(Point::new(bx, by), Size::new(10.0, 10.0));
            let merged = a.merge(&b);
            prop_assert!(merged.contains(a.min_point()));
            prop_assert!(merged.contains(b.min_point()));
        }
    }
}
