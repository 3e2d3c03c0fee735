//! Error types for DrishtiGrid.

use crate::core::GridCoord;
use thiserror::Error;

/// Errors reported by grid, window, and histogram operations.
///
/// Every variant is a local precondition violation detected before any
/// mutation is committed; nothing here is retried internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Cell access outside `[0, rows) x [0, cols)`.
    #[error("cell {coord:?} is outside the {rows}x{cols} grid")]
    IndexOutOfRange {
        /// The offending cell coordinate.
        coord: GridCoord,
        /// First-axis extent of the grid that was accessed.
        rows: usize,
        /// Second-axis extent of the grid that was accessed.
        cols: usize,
    },

    /// A window passed to a centered merge has an even row or column count.
    #[error("window is {rows}x{cols}; centered placement requires odd extents")]
    InvalidWindowShape {
        /// First-axis extent of the rejected window.
        rows: usize,
        /// Second-axis extent of the rejected window.
        cols: usize,
    },

    /// A window placement has no overlap with its target grid.
    #[error("window centered at {center:?} lies entirely outside the {rows}x{cols} grid")]
    WindowOutOfBounds {
        /// Requested window center, in the target grid's coordinates.
        center: GridCoord,
        /// First-axis extent of the target grid.
        rows: usize,
        /// Second-axis extent of the target grid.
        cols: usize,
    },

    /// A polar histogram was requested with zero sectors.
    #[error("polar histogram requires at least one sector")]
    InvalidSectorCount,
}

/// Convenience alias for results of grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
