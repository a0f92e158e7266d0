// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// The axis along which items are ordered.
///
/// A tracker records each visible item's offset from the container origin
/// along this axis, and sorts visible items by that offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollAxis {
    /// Offsets are measured along y; the first visible item is the topmost.
    #[default]
    Vertical,
    /// Offsets are measured along x; the first visible item is the leftmost.
    Horizontal,
}

impl ScrollAxis {
    /// Returns the offset of `item`'s origin from `container`'s origin along this axis.
    #[must_use]
    pub fn offset(self, container: Rect, item: Rect) -> f64 {
        match self {
            Self::Vertical => item.y0 - container.y0,
            Self::Horizontal => item.x0 - container.x0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_relative_to_container_origin() {
        let container = Rect::new(10.0, 20.0, 110.0, 220.0);
        let item = Rect::new(40.0, 70.0, 60.0, 90.0);
        assert_eq!(ScrollAxis::Vertical.offset(container, item), 50.0);
        assert_eq!(ScrollAxis::Horizontal.offset(container, item), 30.0);
    }

    #[test]
    fn items_above_the_container_have_negative_offsets() {
        let container = Rect::new(0.0, 100.0, 100.0, 200.0);
        let item = Rect::new(0.0, 80.0, 100.0, 120.0);
        assert_eq!(ScrollAxis::Vertical.offset(container, item), -20.0);
    }

    #[test]
    fn default_is_vertical() {
        assert_eq!(ScrollAxis::default(), ScrollAxis::Vertical);
    }
}
