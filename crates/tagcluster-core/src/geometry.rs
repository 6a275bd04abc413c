#![forbid(unsafe_code)]

//! Geometric primitives in float pixel space.
//!
//! Coordinates are 0-indexed with the origin at the top-left and `y`
//! growing downward.

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Interpolate toward `other` by `t` (unclamped).
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }
}

/// Linear interpolation between two scalars (unclamped).
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// An axis-aligned rectangle for layout bounds and hit testing.
///
/// Containment is half-open: the left/top edges are inside, the
/// right/bottom edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a square of side `2 * half_extent` centered on `center`.
    #[inline]
    pub fn centered_square(center: Point, half_extent: f32) -> Self {
        Self::new(
            center.x - half_extent,
            center.y - half_extent,
            2.0 * half_extent,
            2.0 * half_extent,
        )
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Per-edge distances, used for the anchor's occupancy margins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sides {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Sides {
    /// Create new sides with specific values.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create new sides with equal values.
    pub const fn all(val: f32) -> Self {
        Self::new(val, val, val, val)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Sides, lerp};

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn point_lerp_midpoint() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(4.0, 20.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(2.0, 15.0));
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 8.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 8.0, 1.0), 8.0);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn rect_contains_half_open() {
        let r = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(4.9, 4.9)));
        assert!(!r.contains(Point::new(5.0, 0.0)));
        assert!(!r.contains(Point::new(0.0, 5.0)));
    }

    #[test]
    fn rect_contains_empty() {
        let r = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!r.contains(Point::new(5.0, 5.0)));
        assert!(r.is_empty());
    }

    #[test]
    fn rect_centered_square() {
        let r = Rect::centered_square(Point::new(100.0, 50.0), 8.0);
        assert_eq!(r, Rect::new(92.0, 42.0, 16.0, 16.0));
        assert!(r.contains(Point::new(100.0, 50.0)));
    }

    #[test]
    fn sides_constructors() {
        assert_eq!(Sides::all(3.0), Sides::new(3.0, 3.0, 3.0, 3.0));
        let s = Sides::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(s.left, 1.0);
        assert_eq!(s.top, 2.0);
        assert_eq!(s.right, 3.0);
        assert_eq!(s.bottom, 4.0);
    }
}
