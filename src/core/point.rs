//! Point and coordinate types for the histogram grid.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices).
///
/// `x` addresses the first grid axis (one of `rows` slots, the outer loop)
/// and `y` the second axis (one of `cols` slots, the inner loop). Signed so
/// that window centers near or beyond the grid edge stay expressible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// First-axis index (row)
    pub x: i32,
    /// Second-axis index (column)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Center of this cell in continuous cell space.
    ///
    /// Cell `(x, y)` covers the unit square `[x, x+1) x [y, y+1)`, so its
    /// center sits at `(x + 0.5, y + 0.5)`.
    #[inline]
    pub fn center(&self) -> GridPoint {
        GridPoint::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

/// Continuous point in cell space (units of cells, f32).
///
/// Used for positions that fall between cell centers, such as the robot's
/// position when binning obstacle bearings.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// First-axis position in cell units
    pub x: f32,
    /// Second-axis position in cell units
    pub y: f32,
}

impl GridPoint {
    /// Origin of cell space (corner of cell (0, 0))
    pub const ZERO: GridPoint = GridPoint { x: 0.0, y: 0.0 };

    /// Create a new cell-space point
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &GridPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle from this point to another (radians, CCW from +X, in `(-pi, pi]`)
    #[inline]
    pub fn angle_to(&self, other: &GridPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dy.atan2(dx)
    }

    /// Bearing from this point to another, normalized to `[0, 2*pi)`.
    ///
    /// Measured counter-clockwise from the +X (first) axis. This is the
    /// single angular convention used throughout the crate.
    #[inline]
    pub fn bearing_to(&self, other: &GridPoint) -> f32 {
        let angle = self.angle_to(other);
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_cell_center() {
        let c = GridCoord::new(3, 0);
        assert_eq!(c.center(), GridPoint::new(3.5, 0.5));
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridCoord::new(1, 2);
        let b = GridCoord::new(4, -2);
        assert_eq!(a.manhattan_distance(&b), 7);
    }

    #[test]
    fn test_angle_to() {
        let origin = GridPoint::ZERO;
        let east = GridPoint::new(1.0, 0.0);
        let north = GridPoint::new(0.0, 1.0);

        assert!((origin.angle_to(&east) - 0.0).abs() < 1e-6);
        assert!((origin.angle_to(&north) - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_bearing_normalized() {
        let origin = GridPoint::ZERO;
        // Straight down the -Y axis: atan2 gives -pi/2, bearing wraps to 3pi/2
        let south = GridPoint::new(0.0, -1.0);
        let bearing = origin.bearing_to(&south);
        assert!((bearing - 3.0 * FRAC_PI_2).abs() < 1e-6);
        assert!(bearing >= 0.0 && bearing < TAU);

        // -X axis stays at exactly pi
        let west = GridPoint::new(-1.0, 0.0);
        assert!((origin.bearing_to(&west) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_distance() {
        let a = GridPoint::new(0.0, 0.0);
        let b = GridPoint::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    }
}
