//! Axis-aligned rectangular bounds over grid positions
//!
//! Bounds are inclusive on every edge: a bounds with `left == right` is one
//! column wide. The `Null` variant covers no cells and is the seed for
//! accumulating bounds with [`GridBounds::including`].
//!
//! Coordinate arithmetic saturates at the `i32` limits. Edge adjustments
//! do not clamp otherwise. Shrinking an edge past the opposite one
//! produces an inverted rectangle; callers bound how far they shrink.

use serde::{Deserialize, Serialize};

use crate::position::GridPosition;
use crate::size::Size;

/// A rectangle of cells, or `Null` for no area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridBounds {
    #[default]
    Null,
    Area {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },
}

impl GridBounds {
    pub const NULL: GridBounds = GridBounds::Null;

    /// Smallest bounds covering both corners
    pub fn new(a: GridPosition, b: GridPosition) -> Self {
        GridBounds::Null.including(a).including(b)
    }

    /// Bounds of `size` anchored at the origin
    pub fn from_size(size: Size) -> Self {
        if size.width <= 0 || size.height <= 0 {
            return GridBounds::Null;
        }
        GridBounds::Area {
            left: 0,
            top: 0,
            right: size.width - 1,
            bottom: size.height - 1,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GridBounds::Null)
    }

    /// Top-left corner
    pub fn min(&self) -> GridPosition {
        match *self {
            GridBounds::Area { left, top, .. } => GridPosition::new(left, top),
            GridBounds::Null => GridPosition::Null,
        }
    }

    /// Bottom-right corner
    pub fn max(&self) -> GridPosition {
        match *self {
            GridBounds::Area { right, bottom, .. } => GridPosition::new(right, bottom),
            GridBounds::Null => GridPosition::Null,
        }
    }

    pub fn top(&self) -> Option<i32> {
        match *self {
            GridBounds::Area { top, .. } => Some(top),
            GridBounds::Null => None,
        }
    }

    pub fn bottom(&self) -> Option<i32> {
        match *self {
            GridBounds::Area { bottom, .. } => Some(bottom),
            GridBounds::Null => None,
        }
    }

    pub fn left(&self) -> Option<i32> {
        match *self {
            GridBounds::Area { left, .. } => Some(left),
            GridBounds::Null => None,
        }
    }

    pub fn right(&self) -> Option<i32> {
        match *self {
            GridBounds::Area { right, .. } => Some(right),
            GridBounds::Null => None,
        }
    }

    /// Number of columns covered (0 for `Null`)
    pub fn width(&self) -> i32 {
        match *self {
            GridBounds::Area { left, right, .. } => right.saturating_sub(left).saturating_add(1),
            GridBounds::Null => 0,
        }
    }

    /// Number of rows covered (0 for `Null`)
    pub fn height(&self) -> i32 {
        match *self {
            GridBounds::Area { top, bottom, .. } => bottom.saturating_sub(top).saturating_add(1),
            GridBounds::Null => 0,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Move the top edge by `delta` rows (positive shrinks)
    pub fn adjust_top(self, delta: i32) -> Self {
        match self {
            GridBounds::Area { left, top, right, bottom } => GridBounds::Area {
                left,
                top: top.saturating_add(delta),
                right,
                bottom,
            },
            GridBounds::Null => GridBounds::Null,
        }
    }

    /// Move the bottom edge by `delta` rows (negative shrinks)
    pub fn adjust_bottom(self, delta: i32) -> Self {
        match self {
            GridBounds::Area { left, top, right, bottom } => GridBounds::Area {
                left,
                top,
                right,
                bottom: bottom.saturating_add(delta),
            },
            GridBounds::Null => GridBounds::Null,
        }
    }

    /// Move the left edge by `delta` columns (positive shrinks)
    pub fn adjust_left(self, delta: i32) -> Self {
        match self {
            GridBounds::Area { left, top, right, bottom } => GridBounds::Area {
                left: left.saturating_add(delta),
                top,
                right,
                bottom,
            },
            GridBounds::Null => GridBounds::Null,
        }
    }

    /// Move the right edge by `delta` columns (negative shrinks)
    pub fn adjust_right(self, delta: i32) -> Self {
        match self {
            GridBounds::Area { left, top, right, bottom } => GridBounds::Area {
                left,
                top,
                right: right.saturating_add(delta),
                bottom,
            },
            GridBounds::Null => GridBounds::Null,
        }
    }

    /// Grow minimally to cover `position`. A `Null` position changes nothing.
    pub fn including(self, position: GridPosition) -> Self {
        let Some((column, row)) = position.coords() else {
            return self;
        };
        match self {
            GridBounds::Null => GridBounds::Area {
                left: column,
                top: row,
                right: column,
                bottom: row,
            },
            GridBounds::Area { left, top, right, bottom } => GridBounds::Area {
                left: left.min(column),
                top: top.min(row),
                right: right.max(column),
                bottom: bottom.max(row),
            },
        }
    }

    pub fn contains(&self, position: GridPosition) -> bool {
        match (*self, position.coords()) {
            (GridBounds::Area { left, top, right, bottom }, Some((column, row))) => {
                column >= left && column <= right && row >= top && row <= bottom
            }
            _ => false,
        }
    }

    /// Grow symmetrically until at least `size`.
    ///
    /// When the missing amount is odd the extra cell goes to the right or
    /// bottom edge. `Null` bounds become `size` anchored at the origin.
    pub fn sized_at_least(self, size: Size) -> Self {
        if self.is_null() {
            return GridBounds::from_size(size);
        }

        let mut bounds = self;
        let fill_width = size.width.saturating_sub(bounds.width());
        if fill_width > 0 {
            bounds = bounds
                .adjust_left(-(fill_width / 2))
                .adjust_right(fill_width - fill_width / 2);
        }
        let fill_height = size.height.saturating_sub(bounds.height());
        if fill_height > 0 {
            bounds = bounds
                .adjust_top(-(fill_height / 2))
                .adjust_bottom(fill_height - fill_height / 2);
        }
        bounds
    }

    /// Every position inside the bounds, row by row
    pub fn positions(&self) -> Positions {
        match *self {
            GridBounds::Area { left, top, right, bottom } if left <= right && top <= bottom => {
                Positions {
                    left,
                    right,
                    bottom,
                    column: left,
                    row: top,
                }
            }
            _ => Positions::empty(),
        }
    }
}

/// Row-major iterator over the cells of a [`GridBounds`]
#[derive(Debug, Clone)]
pub struct Positions {
    left: i32,
    right: i32,
    bottom: i32,
    column: i32,
    row: i32,
}

impl Positions {
    fn empty() -> Self {
        Positions {
            left: 0,
            right: 0,
            bottom: -1,
            column: 0,
            row: 0,
        }
    }

    fn remaining(&self) -> usize {
        if self.row > self.bottom {
            return 0;
        }
        let span = |from: i32, to: i32| (i64::from(to) - i64::from(from)) as usize;
        let width = span(self.left, self.right) + 1;
        let full_rows = span(self.row, self.bottom);
        let current_row = span(self.column, self.right) + 1;
        full_rows.saturating_mul(width).saturating_add(current_row)
    }
}

impl Iterator for Positions {
    type Item = GridPosition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row > self.bottom {
            return None;
        }
        let position = GridPosition::new(self.column, self.row);
        if self.column == self.right {
            self.column = self.left;
            match self.row.checked_add(1) {
                Some(row) => self.row = row,
                None => self.bottom = self.row - 1,
            }
        } else {
            self.column += 1;
        }
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Positions {}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(left: i32, top: i32, right: i32, bottom: i32) -> GridBounds {
        GridBounds::Area { left, top, right, bottom }
    }

    #[test]
    fn test_null_bounds() {
        let b = GridBounds::NULL;
        assert!(b.is_null());
        assert_eq!(b.width(), 0);
        assert_eq!(b.height(), 0);
        assert_eq!(b.top(), None);
        assert!(b.min().is_null());
        assert!(!b.contains(GridPosition::ZERO));
        assert_eq!(b.positions().count(), 0);
    }

    #[test]
    fn test_new_normalizes_corners() {
        let b = GridBounds::new(GridPosition::new(4, 1), GridPosition::new(1, 3));
        assert_eq!(b, bounds(1, 1, 4, 3));
        assert_eq!(b.min(), GridPosition::new(1, 1));
        assert_eq!(b.max(), GridPosition::new(4, 3));
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 3);
    }

    #[test]
    fn test_including() {
        let b = GridBounds::NULL.including(GridPosition::new(2, 2));
        assert_eq!(b, bounds(2, 2, 2, 2));
        assert_eq!(b.size(), Size::new(1, 1));

        let b = b.including(GridPosition::new(0, 5));
        assert_eq!(b, bounds(0, 2, 2, 5));

        // Already covered
        assert_eq!(b.including(GridPosition::new(1, 3)), b);
        // Null is ignored
        assert_eq!(b.including(GridPosition::NULL), b);
        assert!(GridBounds::NULL.including(GridPosition::NULL).is_null());
    }

    #[test]
    fn test_contains() {
        let b = bounds(0, 0, 2, 1);
        assert!(b.contains(GridPosition::new(0, 0)));
        assert!(b.contains(GridPosition::new(2, 1)));
        assert!(!b.contains(GridPosition::new(3, 1)));
        assert!(!b.contains(GridPosition::new(0, -1)));
        assert!(!b.contains(GridPosition::NULL));
    }

    #[test]
    fn test_adjust_edges() {
        let b = bounds(0, 0, 4, 4);
        assert_eq!(b.adjust_top(1), bounds(0, 1, 4, 4));
        assert_eq!(b.adjust_bottom(-1), bounds(0, 0, 4, 3));
        assert_eq!(b.adjust_left(-2), bounds(-2, 0, 4, 4));
        assert_eq!(b.adjust_right(3), bounds(0, 0, 7, 4));
        assert!(GridBounds::NULL.adjust_top(1).is_null());
    }

    #[test]
    fn test_sized_at_least() {
        let b = bounds(1, 1, 1, 1);
        let grown = b.sized_at_least(Size::new(3, 4));
        assert_eq!(grown, bounds(0, 0, 2, 3));

        // Odd remainder goes right / bottom
        let grown = bounds(0, 0, 0, 0).sized_at_least(Size::new(2, 2));
        assert_eq!(grown, bounds(0, 0, 1, 1));

        // Already large enough
        let big = bounds(0, 0, 5, 5);
        assert_eq!(big.sized_at_least(Size::new(3, 3)), big);
    }

    #[test]
    fn test_sized_at_least_null_anchors_at_origin() {
        let b = GridBounds::NULL.sized_at_least(Size::new(3, 2));
        assert_eq!(b, bounds(0, 0, 2, 1));
    }

    #[test]
    fn test_from_size() {
        assert_eq!(GridBounds::from_size(Size::new(3, 2)), bounds(0, 0, 2, 1));
        assert!(GridBounds::from_size(Size::new(0, 2)).is_null());
    }

    #[test]
    fn test_positions_row_major() {
        let b = bounds(1, 0, 2, 1);
        let positions: Vec<_> = b.positions().collect();
        assert_eq!(
            positions,
            vec![
                GridPosition::new(1, 0),
                GridPosition::new(2, 0),
                GridPosition::new(1, 1),
                GridPosition::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_positions_exact_size_and_restartable() {
        let b = bounds(0, 0, 3, 2);
        let mut iter = b.positions();
        assert_eq!(iter.len(), 12);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 10);
        assert_eq!(b.positions().count(), 12);
    }

    #[test]
    fn test_positions_of_inverted_bounds_is_empty() {
        let inverted = bounds(0, 0, 0, 0).adjust_top(1);
        assert_eq!(inverted.positions().count(), 0);
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let wide = bounds(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(wide.width(), i32::MAX);
        assert_eq!(wide.height(), 1);
        assert_eq!(wide.adjust_right(1).right(), Some(i32::MAX));
        assert_eq!(wide.adjust_left(-1).left(), Some(i32::MIN));
        assert_eq!(wide.sized_at_least(Size::new(3, 3)).height(), 3);
    }

    #[test]
    fn test_positions_at_max_row() {
        let corner = bounds(i32::MAX - 1, i32::MAX, i32::MAX, i32::MAX);
        let positions: Vec<_> = corner.positions().collect();
        assert_eq!(positions.len(), 2);
        assert_eq!(corner.positions().len(), 2);
        assert_eq!(positions[1], GridPosition::new(i32::MAX, i32::MAX));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn positions_cover_exactly_the_bounds(
                left in -20i32..20, top in -20i32..20, w in 1i32..10, h in 1i32..10,
            ) {
                let b = bounds(left, top, left + w - 1, top + h - 1);
                let positions: Vec<_> = b.positions().collect();
                prop_assert_eq!(positions.len(), (w * h) as usize);
                prop_assert!(positions.iter().all(|p| b.contains(*p)));
                let rebuilt = positions.iter().fold(GridBounds::NULL, |acc, p| acc.including(*p));
                prop_assert_eq!(rebuilt, b);
            }

            #[test]
            fn sized_at_least_covers_and_contains(
                w in 1i32..10, h in 1i32..10, min_w in 1i32..12, min_h in 1i32..12,
            ) {
                let b = bounds(0, 0, w - 1, h - 1);
                let grown = b.sized_at_least(Size::new(min_w, min_h));
                prop_assert_eq!(grown.width(), w.max(min_w));
                prop_assert_eq!(grown.height(), h.max(min_h));
                prop_assert!(grown.contains(b.min()));
                prop_assert!(grown.contains(b.max()));
            }
        }
    }
}
