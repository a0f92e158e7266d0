// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap calculation between a container rectangle and an item rectangle.
//!
//! Both functions are pure and total: any pair of rectangles, including
//! degenerate, inverted, or non-finite ones, produces a defined result.

use kurbo::{Point, Rect};

/// Returns `true` if `container` contains the item's top-left or bottom-right corner.
///
/// This is a corner-containment approximation rather than an intersection
/// test. An item that is larger than the container along an axis and
/// straddles both of its edges has neither corner inside and is therefore
/// reported as not visible, even though it covers the container.
///
/// Containment is half-open: a corner lying on the container's minimum
/// edges counts as inside, one lying on its maximum edges does not. An
/// empty container contains no points.
///
/// ```
/// use kurbo::Rect;
/// use understory_visibility::is_roughly_visible;
///
/// let container = Rect::new(0.0, 0.0, 100.0, 100.0);
/// assert!(is_roughly_visible(container, Rect::new(50.0, 50.0, 150.0, 150.0)));
/// assert!(!is_roughly_visible(container, Rect::new(100.0, 0.0, 200.0, 100.0)));
///
/// // Spans the whole container, but neither corner is inside.
/// assert!(!is_roughly_visible(container, Rect::new(-10.0, -10.0, 110.0, 110.0)));
/// ```
#[must_use]
pub fn is_roughly_visible(container: Rect, item: Rect) -> bool {
    let container = container.abs();
    let top_left = Point::new(item.x0, item.y0);
    let bottom_right = Point::new(item.x1, item.y1);
    container.contains(top_left) || container.contains(bottom_right)
}

/// Returns the fraction of the item's area that lies inside `container`.
///
/// The result is in `[0, 1]`. Items with zero area (or a non-finite area)
/// yield `0`.
///
/// ```
/// use kurbo::Rect;
/// use understory_visibility::overlap_ratio;
///
/// let container = Rect::new(0.0, 0.0, 100.0, 100.0);
/// assert_eq!(overlap_ratio(container, Rect::new(50.0, 0.0, 150.0, 100.0)), 0.5);
/// assert_eq!(overlap_ratio(container, Rect::new(10.0, 10.0, 10.0, 60.0)), 0.0);
/// ```
#[must_use]
pub fn overlap_ratio(container: Rect, item: Rect) -> f64 {
    let item = item.abs();
    let item_area = item.area();
    if item_area <= 0.0 || !item_area.is_finite() {
        return 0.0;
    }
    let visible_area = container.abs().intersect(item).area();
    let ratio = visible_area / item_area;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn either_corner_inside_is_visible() {
        // Top-left inside.
        assert!(is_roughly_visible(
            CONTAINER,
            Rect::new(90.0, 90.0, 190.0, 190.0)
        ));
        // Bottom-right inside.
        assert!(is_roughly_visible(
            CONTAINER,
            Rect::new(-50.0, -50.0, 10.0, 10.0)
        ));
        // Fully inside.
        assert!(is_roughly_visible(
            CONTAINER,
            Rect::new(10.0, 10.0, 20.0, 20.0)
        ));
    }

    #[test]
    fn containment_is_half_open() {
        // Origin on the minimum edge is inside.
        assert!(is_roughly_visible(CONTAINER, CONTAINER));
        // Item starting exactly on the maximum edge is outside.
        assert!(!is_roughly_visible(
            CONTAINER,
            Rect::new(0.0, 100.0, 100.0, 200.0)
        ));
        // Item ending exactly on the minimum edge touches it with its bottom-right.
        assert!(is_roughly_visible(
            CONTAINER,
            Rect::new(-100.0, -100.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn spanning_item_is_not_roughly_visible() {
        let tall = Rect::new(10.0, -50.0, 20.0, 150.0);
        assert!(!is_roughly_visible(CONTAINER, tall));
        // It still overlaps, the gate is what hides it.
        assert!(overlap_ratio(CONTAINER, tall) > 0.0);
    }

    #[test]
    fn empty_container_contains_nothing() {
        let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
        assert!(!is_roughly_visible(empty, Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(overlap_ratio(empty, Rect::new(0.0, 0.0, 10.0, 10.0)), 0.0);
    }

    #[test]
    fn inverted_container_is_normalized() {
        let inverted = Rect::new(100.0, 100.0, 0.0, 0.0);
        let item = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(is_roughly_visible(inverted, item));
        assert_eq!(overlap_ratio(inverted, item), 1.0);
    }

    #[test]
    fn ratio_is_intersection_over_item_area() {
        assert_eq!(overlap_ratio(CONTAINER, CONTAINER), 1.0);
        assert_eq!(
            overlap_ratio(CONTAINER, Rect::new(0.0, 75.0, 100.0, 175.0)),
            0.25
        );
        assert_eq!(
            overlap_ratio(CONTAINER, Rect::new(200.0, 0.0, 300.0, 100.0)),
            0.0
        );
        // An item larger than the container is capped by its own area.
        assert_eq!(
            overlap_ratio(CONTAINER, Rect::new(0.0, 0.0, 200.0, 200.0)),
            0.25
        );
    }

    #[test]
    fn zero_area_item_has_zero_ratio() {
        assert_eq!(
            overlap_ratio(CONTAINER, Rect::new(10.0, 10.0, 10.0, 50.0)),
            0.0
        );
        assert_eq!(
            overlap_ratio(CONTAINER, Rect::new(10.0, 10.0, 50.0, 10.0)),
            0.0
        );
        assert_eq!(overlap_ratio(CONTAINER, Rect::ZERO), 0.0);
    }

    #[test]
    fn non_finite_item_has_zero_ratio() {
        let nan = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
        assert_eq!(overlap_ratio(CONTAINER, nan), 0.0);
        let infinite = Rect::new(0.0, 0.0, f64::INFINITY, 10.0);
        assert_eq!(overlap_ratio(CONTAINER, infinite), 0.0);
    }
}
