//! Centered window extraction and merge.
//!
//! Both operations place an odd-sized rectangle around a center cell and
//! clip it against the grid's bounds before copying, so requests near or
//! past the edge shed only their out-of-range portion instead of failing or
//! reading out of bounds. A request with no overlap at all is an error.
//!
//! Extraction reports the realized rectangle alongside the copied counts:
//! a clipped window can be smaller than requested and can end up with even
//! extents, and the caller needs the actual placement to reason about it.
//! Merge accepts only odd-sized windows, so a well-defined center cell
//! always exists on the way back in.

use log::{debug, trace};

use super::storage::HistogramGrid;
use crate::core::{GridCoord, GridRect};
use crate::error::{GridError, Result};

/// A window copied out of a larger grid, together with the rectangle of the
/// parent grid it was actually taken from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedWindow {
    /// The copied counts; resolution matches the parent grid.
    pub grid: HistogramGrid,
    /// Realized rectangle in the parent grid's coordinates. Smaller than
    /// the requested window when the request reached past the parent's
    /// bounds.
    pub rect: GridRect,
}

/// Force an extent odd so the window has a single center cell.
#[inline]
fn force_odd(extent: usize) -> usize {
    if extent % 2 == 0 {
        extent + 1
    } else {
        extent
    }
}

/// Copy an odd-sized window centered on `center` out of `grid`.
///
/// Even `rows`/`cols` are bumped up by one. The requested rectangle is
/// clipped to the grid's bounds; the returned [`ExtractedWindow::rect`]
/// records what was actually copied. Fails with
/// [`GridError::WindowOutOfBounds`] when the request has no overlap with
/// the grid at all.
pub fn extract_centered(
    grid: &HistogramGrid,
    center: GridCoord,
    rows: usize,
    cols: usize,
) -> Result<ExtractedWindow> {
    let rows = force_odd(rows);
    let cols = force_odd(cols);

    let requested = GridRect::centered(center, rows, cols);
    let realized = requested.intersection(&grid.rect());
    if realized.is_empty() {
        return Err(GridError::WindowOutOfBounds {
            center,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if realized != requested {
        debug!(
            "window {}x{} at ({}, {}) clipped to {}x{} at ({}, {})",
            rows,
            cols,
            center.x,
            center.y,
            realized.rows(),
            realized.cols(),
            realized.min.x,
            realized.min.y,
        );
    }

    let mut window =
        HistogramGrid::with_resolution(realized.rows(), realized.cols(), grid.resolution());
    let y0 = realized.min.y as usize;
    for wx in 0..realized.rows() {
        let sx = realized.min.x as usize + wx;
        let src = grid.row_segment(sx, y0, realized.cols());
        window.row_segment_mut(wx, 0, realized.cols()).copy_from_slice(src);
    }
    trace!(
        "extracted {} cells with mass {}",
        window.cell_count(),
        window.total_mass()
    );

    Ok(ExtractedWindow {
        grid: window,
        rect: realized,
    })
}

/// Write `source` into `target`, centered on `center`, overwriting the
/// overlapped cells.
///
/// `source` must have odd extents ([`GridError::InvalidWindowShape`]
/// otherwise) and the placement must overlap `target` by at least one cell
/// ([`GridError::WindowOutOfBounds`] otherwise). Both checks run before any
/// cell is written. The copy replaces the destination region; it does not
/// accumulate into it. Cells outside the overlap are untouched.
pub fn merge_centered(
    target: &mut HistogramGrid,
    source: &HistogramGrid,
    center: GridCoord,
) -> Result<()> {
    if source.rows() % 2 == 0 || source.cols() % 2 == 0 {
        return Err(GridError::InvalidWindowShape {
            rows: source.rows(),
            cols: source.cols(),
        });
    }

    let placement = GridRect::centered(center, source.rows(), source.cols());
    let overlap = placement.intersection(&target.rect());
    if overlap.is_empty() {
        return Err(GridError::WindowOutOfBounds {
            center,
            rows: target.rows(),
            cols: target.cols(),
        });
    }
    if overlap != placement {
        debug!(
            "merge of {}x{} window at ({}, {}) clipped to {}x{}",
            source.rows(),
            source.cols(),
            center.x,
            center.y,
            overlap.rows(),
            overlap.cols(),
        );
    }

    // Top-left of the overlap in the source's own coordinates
    let sx0 = (overlap.min.x - placement.min.x) as usize;
    let sy0 = (overlap.min.y - placement.min.y) as usize;
    let ty0 = overlap.min.y as usize;
    for dx in 0..overlap.rows() {
        let src = source.row_segment(sx0 + dx, sy0, overlap.cols());
        target
            .row_segment_mut(overlap.min.x as usize + dx, ty0, overlap.cols())
            .copy_from_slice(src);
    }

    Ok(())
}
