//! Histogram grid storage and windowing.
//!
//! This module provides the count grid itself and the centered-window
//! operations that move local neighborhoods in and out of it:
//!
//! - [`HistogramGrid`]: dense per-cell obstacle-detection counts
//! - [`window::extract_centered`]: copy an odd-sized neighborhood out,
//!   clipped to the grid's bounds
//! - [`window::merge_centered`]: write a window back over the grid,
//!   clipped the same way

mod storage;
pub mod window;

pub use storage::HistogramGrid;
pub use window::{extract_centered, merge_centered, ExtractedWindow};
