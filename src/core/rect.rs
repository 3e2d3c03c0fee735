//! Axis-aligned cell rectangles for window clipping.
//!
//! [`GridRect`] represents a rectangular region of grid cells with inclusive
//! corners. Window extraction and merge both reduce to one rectangle
//! intersection followed by a block copy, so the clipping arithmetic lives
//! here rather than in the copy loops.

use super::point::GridCoord;
use serde::{Deserialize, Serialize};

/// Inclusive axis-aligned rectangle of grid cells.
///
/// `min` and `max` are both inside the rectangle; a rectangle with
/// `min > max` on either axis is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRect {
    /// Corner with the smallest x and y indices (inclusive).
    pub min: GridCoord,
    /// Corner with the largest x and y indices (inclusive).
    pub max: GridCoord,
}

impl GridRect {
    /// Create a rectangle from inclusive min and max corners.
    #[inline]
    pub const fn new(min: GridCoord, max: GridCoord) -> Self {
        Self { min, max }
    }

    /// Rectangle covering a full `rows x cols` grid, anchored at (0, 0).
    #[inline]
    pub fn from_dims(rows: usize, cols: usize) -> Self {
        Self {
            min: GridCoord::new(0, 0),
            max: GridCoord::new(rows as i32 - 1, cols as i32 - 1),
        }
    }

    /// Rectangle of the given odd extents centered on `center`.
    ///
    /// Half-extents round down, so the center cell is the exact middle.
    #[inline]
    pub fn centered(center: GridCoord, rows: usize, cols: usize) -> Self {
        debug_assert!(
            rows % 2 == 1 && cols % 2 == 1,
            "centered rect requires odd extents"
        );
        let hx = (rows / 2) as i32;
        let hy = (cols / 2) as i32;
        Self {
            min: GridCoord::new(center.x - hx, center.y - hy),
            max: GridCoord::new(center.x + hx, center.y + hy),
        }
    }

    /// Check if the rectangle contains no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// First-axis extent in cells (0 when empty).
    #[inline]
    pub fn rows(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.max.x - self.min.x + 1) as usize
        }
    }

    /// Second-axis extent in cells (0 when empty).
    #[inline]
    pub fn cols(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.max.y - self.min.y + 1) as usize
        }
    }

    /// Number of cells covered.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Check if a cell is inside the rectangle.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
    }

    /// Check if this rectangle shares at least one cell with another.
    #[inline]
    pub fn intersects(&self, other: &GridRect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Compute the intersection of two rectangles.
    ///
    /// Returns an empty rectangle if they don't intersect.
    #[inline]
    pub fn intersection(&self, other: &GridRect) -> Self {
        Self {
            min: GridCoord::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: GridCoord::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }
}
