//! Edge anchoring on rectangular node borders.

use lumo_core::geometry::{Point, Size};

/// Below this magnitude a center-to-center component counts as zero.
const EPSILON: f32 = 0.01;

/// Returns the point where the ray from the center of the box at `source`
/// toward the center of the box at `target` leaves the source box.
///
/// Both positions are top-left corners of boxes of the same `size`. When the
/// two centers coincide the source center is returned unchanged.
///
/// # Examples
///
/// ```
/// # use lumo::layout::border_point;
/// # use lumo_core::geometry::{Point, Size};
/// let size = Size::new(100.0, 40.0);
/// let right = border_point(Point::new(0.0, 0.0), Point::new(300.0, 0.0), size);
/// assert_eq!(right, Point::new(100.0, 20.0));
/// ```
pub fn border_point(source: Point, target: Point, size: Size) -> Point {
    let half = size.half();
    let center = source.box_center(size);
    let delta = target.box_center(size).sub_point(center);
    let extent = delta.abs();

    if extent.x() < EPSILON && extent.y() < EPSILON {
        return center;
    }

    // Scale needed to reach the vertical sides and the horizontal sides; the
    // ray crosses whichever comes first. Only an exact zero never reaches a
    // side: a tiny non-zero component still bounds the scale.
    let scale_x = if extent.x() > 0.0 {
        half.width() / extent.x()
    } else {
        f32::INFINITY
    };
    let scale_y = if extent.y() > 0.0 {
        half.height() / extent.y()
    } else {
        f32::INFINITY
    };

    center.add_point(delta.scale(scale_x.min(scale_y)))
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1.0f32..300.0, 1.0f32..300.0).prop_map(|(w, h)| Size::new(w, h))
    }

    /// Offsets whose components sit around the coincidence threshold.
    fn near_offset_strategy() -> impl Strategy<Value = Point> {
        (-0.03f32..0.03, -0.03f32..0.03).prop_map(|(x, y)| Point::new(x, y))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// The anchor always has finite coordinates.
    fn check_anchor_is_finite(a: Point, b: Point, size: Size) -> Result<(), TestCaseError> {
        let result = border_point(a, b, size);
        prop_assert!(result.x().is_finite(), "x is not finite: {result:?}");
        prop_assert!(result.y().is_finite(), "y is not finite: {result:?}");
        Ok(())
    }

    /// The anchor lies on the source box border, or is its center when the
    /// boxes coincide.
    fn check_anchor_on_border_or_center(
        a: Point,
        b: Point,
        size: Size,
    ) -> Result<(), TestCaseError> {
        let result = border_point(a, b, size);
        let center = a.box_center(size);

        let on_left = approx_eq!(f32, result.x(), a.x(), epsilon = 0.05);
        let on_right = approx_eq!(f32, result.x(), a.x() + size.width(), epsilon = 0.05);
        let on_top = approx_eq!(f32, result.y(), a.y(), epsilon = 0.05);
        let on_bottom = approx_eq!(f32, result.y(), a.y() + size.height(), epsilon = 0.05);
        let is_center = result == center;

        prop_assert!(
            on_left || on_right || on_top || on_bottom || is_center,
            "{result:?} is neither on the border of the box at {a:?} ({size:?}) nor its center"
        );
        Ok(())
    }

    /// The anchor never leaves the source box.
    fn check_anchor_inside_box(a: Point, b: Point, size: Size) -> Result<(), TestCaseError> {
        let result = border_point(a, b, size);
        prop_assert!(result.x() >= a.x() - 0.05 && result.x() <= a.x() + size.width() + 0.05);
        prop_assert!(result.y() >= a.y() - 0.05 && result.y() <= a.y() + size.height() + 0.05);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn anchor_is_finite(a in point_strategy(), b in point_strategy(), size in size_strategy()) {
            check_anchor_is_finite(a, b, size)?;
        }

        #[test]
        fn anchor_on_border_or_center(
            a in point_strategy(),
            b in point_strategy(),
            size in size_strategy(),
        ) {
            check_anchor_on_border_or_center(a, b, size)?;
        }

        #[test]
        fn anchor_inside_box(
            a in point_strategy(),
            b in point_strategy(),
            size in size_strategy(),
        ) {
            check_anchor_inside_box(a, b, size)?;
        }

        #[test]
        fn anchor_inside_box_for_near_targets(
            a in point_strategy(),
            offset in near_offset_strategy(),
            size in size_strategy(),
        ) {
            let b = a.add_point(offset);
            check_anchor_inside_box(a, b, size)?;
            check_anchor_on_border_or_center(a, b, size)?;
        }
    }
}
