//! Debug output for grids and histograms.
//!
//! Nothing here persists grid state; the SVG renderer exists so a human can
//! eyeball what the perception layer currently believes.

pub mod svg;
