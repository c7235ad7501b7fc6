//! Geometric primitives for node placement.
//!
//! - [`Point`] - a position, or an offset between two positions
//! - [`Size`] - the extent of a node box
//! - [`Bounds`] - an axis-aligned box given by its min and max corners
//! - [`Insets`] - per-side padding applied to [`Bounds`]
//!
//! Coordinates follow screen conventions, the same as SVG: `x` grows to the
//! right and `y` grows downward.
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! A node position is the **top-left corner** of its box. Use
//! [`Point::box_center`] to get the center.

use serde::Serialize;

/// A position in diagram space.
///
/// # Examples
///
/// ```
/// # use lumo_core::geometry::Point;
/// let a = Point::new(10.0, 20.0);
/// let b = Point::new(13.0, 24.0);
///
/// assert_eq!(b.sub_point(a), Point::new(3.0, 4.0));
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Component-wise sum.
    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference, i.e. the offset from `other` to `self`.
    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies both components by `factor`.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Absolute value of both components.
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f32 {
        let offset = self.sub_point(other);
        offset.x.hypot(offset.y)
    }

    /// Center of a box of `size` whose top-left corner is this point.
    pub fn box_center(self, size: Size) -> Self {
        let half = size.half();
        Self::new(self.x + half.width, self.y + half.height)
    }
}

/// Width and height of a node box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Half of each dimension; the distance from a box center to its sides.
    pub fn half(self) -> Self {
        Self::new(self.width / 2.0, self.height / 2.0)
    }
}

/// An axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The box covered by a node of `size` placed at `top_left`.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self::new(
            top_left.x,
            top_left.y,
            top_left.x + size.width,
            top_left.y + size.height,
        )
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Smallest box containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lumo_core::geometry::{Bounds, Point, Size};
    /// let left = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(130.0, 46.0));
    /// let below = Bounds::new_from_top_left(Point::new(20.0, 126.0), Size::new(130.0, 46.0));
    ///
    /// assert_eq!(left.merge(&below), Bounds::new(0.0, 0.0, 150.0, 172.0));
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grows the box outward by `insets` on each side.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self::new(
            self.min_x - insets.left,
            self.min_y - insets.top,
            self.max_x + insets.right,
            self.max_y + insets.bottom,
        )
    }

    /// The box as an SVG `viewBox` value: `"min_x min_y width height"`.
    pub fn to_view_box(self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x,
            self.min_y,
            self.width(),
            self.height()
        )
    }
}

/// Padding on each side of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Insets in CSS order: top, right, bottom, left.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same inset on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(5.0, 8.0);
        let b = Point::new(2.0, 3.0);

        assert_eq!(a.add_point(b), Point::new(7.0, 11.0));
        assert_eq!(a.sub_point(b), Point::new(3.0, 5.0));
        assert_eq!(a.scale(0.5), Point::new(2.5, 4.0));
        assert_eq!(Point::new(-2.5, 3.0).abs(), Point::new(2.5, 3.0));
    }

    #[test]
    fn test_point_distance_is_symmetric() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_box_center() {
        let center = Point::new(10.0, 20.0).box_center(Size::new(130.0, 46.0));
        assert_eq!(center, Point::new(75.0, 43.0));
    }

    #[test]
    fn test_size_half() {
        assert_eq!(Size::new(130.0, 46.0).half(), Size::new(65.0, 23.0));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));

        assert_eq!(bounds, Bounds::new(10.0, 20.0, 40.0, 60.0));
        assert_eq!(bounds.width(), 30.0);
        assert_eq!(bounds.height(), 40.0);
    }

    #[test]
    fn test_bounds_merge_overlapping() {
        let merged = Bounds::new(1.0, 2.0, 5.0, 6.0).merge(&Bounds::new(3.0, 0.0, 8.0, 4.0));
        assert_eq!(merged, Bounds::new(1.0, 0.0, 8.0, 6.0));
    }

    #[test]
    fn test_bounds_add_padding() {
        let bounds = Bounds::new(2.0, 3.0, 6.0, 8.0);

        assert_eq!(
            bounds.add_padding(Insets::uniform(1.0)),
            Bounds::new(1.0, 2.0, 7.0, 9.0)
        );
        assert_eq!(
            bounds.add_padding(Insets::new(1.0, 2.0, 3.0, 4.0)),
            Bounds::new(-2.0, 2.0, 8.0, 11.0)
        );
    }

    #[test]
    fn test_view_box_uses_width_and_height() {
        let bounds = Bounds::new(-24.0, -24.0, 154.0, 70.0);
        assert_eq!(bounds.to_view_box(), "-24 -24 178 94");
    }

    #[test]
    fn test_serialized_field_names() {
        assert_eq!(
            serde_json::to_string(&Point::new(1.5, 2.0)).unwrap(),
            r#"{"x":1.5,"y":2.0}"#
        );
        assert_eq!(
            serde_json::to_string(&Bounds::new(0.0, 0.0, 200.0, 100.0)).unwrap(),
            r#"{"min_x":0.0,"min_y":0.0,"max_x":200.0,"max_y":100.0}"#
        );
    }
}
