#![warn(missing_docs)]

//! # DrishtiGrid
//!
//! Histogram-grid perception layer for Vector-Field-Histogram style
//! obstacle avoidance.
//!
//! ## Overview
//!
//! A bounded 2-D grid accumulates per-cell obstacle-detection counts fed
//! by an upstream sensor layer. On top of the counts, three operations
//! cover what a local avoidance pipeline needs from its perception side:
//!
//! - **Windowing**: copy an odd-sized neighborhood centered on the robot
//!   out of the grid, clipped to the grid's bounds
//!   ([`extract_centered`])
//! - **Merging**: write a (possibly externally decayed or aged) window
//!   back over the grid at a center point, again clipped
//!   ([`merge_centered`])
//! - **Polar binning**: collapse the counts into a fixed number of
//!   angular sectors around the robot's position, the directional
//!   obstacle-density signal a steering layer consumes
//!   ([`compute_polar_histogram`])
//!
//! Sensor acquisition, physical-to-cell coordinate conversion, and the
//! steering decision itself live outside this crate.
//!
//! ## Coordinate Convention
//!
//! One convention everywhere, chosen once:
//!
//! - A cell is addressed as `(x, y)`; `x` is the FIRST axis (one of
//!   `rows` slots, the outer loop), `y` the second (one of `cols` slots).
//! - Cell `(x, y)` has its center at `(x + 0.5, y + 0.5)` in continuous
//!   cell space.
//! - Bearings are measured counter-clockwise from the +X (first) axis and
//!   normalized to `[0, 2pi)`.
//!
//! ## Quick Start
//!
//! ```
//! use drishti_grid::{
//!     compute_polar_histogram, extract_centered, merge_centered, GridCoord, GridPoint,
//!     HistogramGrid,
//! };
//!
//! // 10m x 10m area at 10 cells per meter
//! let mut grid = HistogramGrid::with_resolution(100, 100, 10);
//!
//! // Obstacle detections, already converted to cell coordinates upstream
//! grid.increment(GridCoord::new(42, 17))?;
//! grid.increment(GridCoord::new(42, 17))?;
//!
//! // Snapshot the robot's neighborhood, then write it back
//! let window = extract_centered(&grid, GridCoord::new(42, 17), 11, 11)?;
//! merge_centered(&mut grid, &window.grid, GridCoord::new(42, 17))?;
//!
//! // Obstacle density by direction from the robot's position
//! let histogram = compute_polar_histogram(&grid, GridPoint::new(42.5, 17.5), 72)?;
//! assert_eq!(histogram.total_mass(), 2);
//! # Ok::<(), drishti_grid::GridError>(())
//! ```
//!
//! ## Concurrency
//!
//! All operations are synchronous, single-threaded, and bounded by grid
//! size. A grid embedded in a multi-threaded pipeline needs external
//! serialization of writers against readers; the types carry no locks.

// Core coordinate types
pub mod core;

// Count storage and windowing
pub mod grid;

// Polar histogram binning
pub mod polar;

// Unified configuration
pub mod config;

// Error types
pub mod error;

// Debug output (SVG rendering)
pub mod io;

// Re-export commonly used types
pub use config::{ConfigError, GridConfig, PerceptionConfig, PolarConfig};
pub use crate::core::{GridCoord, GridPoint, GridRect};
pub use error::{GridError, Result};
pub use grid::{extract_centered, merge_centered, ExtractedWindow, HistogramGrid};
pub use polar::{compute_polar_histogram, PolarHistogram};
