//! Core coordinate types for the histogram grid.
//!
//! - [`GridCoord`]: integer cell indices for grid access
//! - [`GridPoint`]: continuous cell-space point, used as the bearing origin
//! - [`GridRect`]: inclusive cell rectangle, the clipping primitive for
//!   window extraction and merge

mod point;
mod rect;

pub use point::{GridCoord, GridPoint};
pub use rect::GridRect;
