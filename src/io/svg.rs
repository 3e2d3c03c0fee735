//! SVG visualization for grid and histogram audit.
//!
//! Renders a count grid as a shaded cell raster and a polar histogram as a
//! sector rose. The output is an audit artifact for debugging sessions, not
//! a persistence format.
//!
//! Drawing follows the crate's coordinate convention: the first (x) axis
//! runs rightward, the second (y) axis upward, bearings counter-clockwise
//! from +X. SVG's y axis points down, so the renderer flips y.

use std::fmt::Write;
use std::path::Path;

use crate::grid::HistogramGrid;
use crate::polar::PolarHistogram;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Page background
    pub background: &'static str,
    /// Empty cell color
    pub empty_cell: &'static str,
    /// Occupied cell color (shaded by count)
    pub occupied_cell: &'static str,
    /// Sector wedge fill
    pub sector: &'static str,
    /// Sector wedge outline
    pub sector_stroke: &'static str,
    /// Origin / rose center marker
    pub origin_marker: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            background: "#FFFFFF",
            empty_cell: "#EEEEEE",
            occupied_cell: "#333333",
            sector: "#2266BB",
            sector_stroke: "#113355",
            origin_marker: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per grid cell
    pub cell_px: f32,
    /// Padding around the drawing in pixels
    pub padding: f32,
    /// Radius of the histogram rose in pixels
    pub rose_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_px: 8.0,
            padding: 16.0,
            rose_radius: 120.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// Render a count grid as a shaded cell raster.
///
/// Every cell gets a background square; nonzero cells are overdrawn with an
/// opacity proportional to their count relative to the grid maximum.
pub fn render_grid(grid: &HistogramGrid, config: &SvgConfig) -> String {
    let px = config.cell_px;
    let pad = config.padding;
    let width = pad * 2.0 + grid.rows() as f32 * px;
    let height = pad * 2.0 + grid.cols() as f32 * px;
    let max_count = grid.counts().iter().copied().max().unwrap_or(0).max(1);

    let mut svg = String::new();
    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        width, height, width, height
    )
    .unwrap();
    writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        config.colors.background
    )
    .unwrap();

    writeln!(
        svg,
        r#"  <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
        pad,
        pad,
        grid.rows() as f32 * px,
        grid.cols() as f32 * px,
        config.colors.empty_cell
    )
    .unwrap();

    writeln!(svg, r#"  <g id="cells">"#).unwrap();
    for (coord, count) in grid.occupied() {
        let sx = pad + coord.x as f32 * px;
        // y axis points up; SVG's points down
        let sy = pad + (grid.cols() as i32 - 1 - coord.y) as f32 * px;
        let opacity = (count as f32 / max_count as f32).clamp(0.15, 1.0);
        writeln!(
            svg,
            r#"    <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" fill-opacity="{:.3}"/>"#,
            sx, sy, px, px, config.colors.occupied_cell, opacity
        )
        .unwrap();
    }
    writeln!(svg, "  </g>").unwrap();
    writeln!(svg, "</svg>").unwrap();

    svg
}

/// Render a polar histogram as a sector rose.
///
/// Each sector becomes a wedge whose radius scales with its mass relative
/// to the densest sector. Sector 0 starts on the +X axis and sectors
/// proceed counter-clockwise.
pub fn render_histogram(histogram: &PolarHistogram, config: &SvgConfig) -> String {
    let r_max = config.rose_radius;
    let pad = config.padding;
    let cx = pad + r_max;
    let cy = pad + r_max;
    let side = (pad + r_max) * 2.0;
    let peak = histogram
        .iter()
        .max()
        .unwrap_or(0)
        .max(1) as f32;

    let mut svg = String::new();
    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        side, side, side, side
    )
    .unwrap();
    writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        config.colors.background
    )
    .unwrap();
    writeln!(
        svg,
        r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-dasharray="4 4"/>"#,
        cx, cy, r_max, config.colors.sector_stroke
    )
    .unwrap();

    let width = histogram.sector_width();
    writeln!(svg, r#"  <g id="sectors">"#).unwrap();
    for (k, mass) in histogram.iter().enumerate() {
        if mass == 0 {
            continue;
        }
        let r = r_max * mass as f32 / peak;
        let a0 = k as f32 * width;
        let a1 = a0 + width;
        // Flip y: the math-CCW direction is screen-CCW after negating sin
        let (x0, y0) = (cx + r * a0.cos(), cy - r * a0.sin());
        let (x1, y1) = (cx + r * a1.cos(), cy - r * a1.sin());
        writeln!(
            svg,
            r#"    <path d="M {:.1} {:.1} L {:.1} {:.1} A {:.1} {:.1} 0 0 0 {:.1} {:.1} Z" fill="{}" fill-opacity="0.8" stroke="{}"/>"#,
            cx, cy, x0, y0, r, r, x1, y1, config.colors.sector, config.colors.sector_stroke
        )
        .unwrap();
    }
    writeln!(svg, "  </g>").unwrap();
    writeln!(
        svg,
        r#"  <circle cx="{:.1}" cy="{:.1}" r="3" fill="{}"/>"#,
        cx, cy, config.colors.origin_marker
    )
    .unwrap();
    writeln!(svg, "</svg>").unwrap();

    svg
}

/// Write an already-rendered SVG document to disk.
pub fn write_svg_file(path: &Path, svg: &str) -> std::io::Result<()> {
    std::fs::write(path, svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridCoord, GridPoint};
    use crate::polar::compute_polar_histogram;

    #[test]
    fn test_grid_render_has_one_rect_per_occupied_cell() {
        let mut grid = HistogramGrid::new(6, 6);
        grid.set(GridCoord::new(1, 1), 3).unwrap();
        grid.set(GridCoord::new(4, 2), 9).unwrap();

        let svg = render_grid(&grid, &SvgConfig::default());
        let cell_rects = svg.matches("fill-opacity").count();
        assert_eq!(cell_rects, 2);
        assert!(svg.starts_with(r#"<?xml version="1.0""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_grid_render_peak_cell_is_opaque() {
        let mut grid = HistogramGrid::new(4, 4);
        grid.set(GridCoord::new(0, 0), 7).unwrap();

        let svg = render_grid(&grid, &SvgConfig::default());
        assert!(svg.contains(r#"fill-opacity="1.000""#));
    }

    #[test]
    fn test_histogram_render_has_one_wedge_per_occupied_sector() {
        let mut grid = HistogramGrid::new(7, 7);
        grid.set(GridCoord::new(6, 3), 2).unwrap();
        grid.set(GridCoord::new(0, 3), 5).unwrap();

        let histogram =
            compute_polar_histogram(&grid, GridPoint::new(3.5, 3.5), 8).unwrap();
        let svg = render_histogram(&histogram, &SvgConfig::default());

        let wedges = svg.matches("<path").count();
        assert_eq!(wedges, 2);
    }

    #[test]
    fn test_write_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.svg");

        let grid = HistogramGrid::new(3, 3);
        let svg = render_grid(&grid, &SvgConfig::default());
        write_svg_file(&path, &svg).unwrap();

        let read_back = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, svg);
    }
}
