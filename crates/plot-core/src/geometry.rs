// File: crates/plot-core/src/geometry.rs
// Summary: Integer pixel rectangles and grid cell layout.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`; never inverts (a too-small rect collapses to its left/top edge).
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left);
        let bottom = (self.bottom - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    /// Cell `index` (row-major) of a `columns` x `rows` grid laid over this rect.
    pub fn grid_cell(&self, columns: usize, rows: usize, index: usize) -> Self {
        let (columns, rows) = (columns.max(1) as i32, rows.max(1) as i32);
        let (col, row) = (index as i32 % columns, index as i32 / columns);
        let x0 = self.left + self.width() * col / columns;
        let x1 = self.left + self.width() * (col + 1) / columns;
        let y0 = self.top + self.height() * row / rows;
        let y1 = self.top + self.height() * (row + 1) / rows;
        Self::from_ltrb(x0, y0, x1, y1)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_cells_tile_the_rect() {
        let r = RectI32::from_ltwh(0, 0, 100, 60);
        assert_eq!(r.grid_cell(2, 2, 0), RectI32::from_ltrb(0, 0, 50, 30));
        assert_eq!(r.grid_cell(2, 2, 3), RectI32::from_ltrb(50, 30, 100, 60));
        assert_eq!(r.grid_cell(3, 1, 2), RectI32::from_ltrb(66, 0, 100, 60));
    }
}
