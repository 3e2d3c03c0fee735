//! Polar obstacle-density histogram.
//!
//! [`compute_polar_histogram`] collapses a [`HistogramGrid`] into a fixed
//! number of angular sectors around an origin point: every nonzero cell
//! contributes its full count to the sector its bearing falls in. The
//! result is the directional obstacle-density signal a steering layer
//! consumes to pick a traversable heading.
//!
//! ## Sector Convention
//!
//! Sector `k` of an `n`-sector histogram spans bearings
//! `[k * 2pi/n, (k+1) * 2pi/n)`, counter-clockwise from the +X (first)
//! axis. Bearings are computed with [`GridPoint::bearing_to`], so the axis
//! convention is exactly the grid's own.

use log::trace;
use std::f32::consts::TAU;

use crate::core::GridPoint;
use crate::error::{GridError, Result};
use crate::grid::HistogramGrid;

/// Obstacle mass per angular sector around an origin point.
///
/// Immutable once built; the binner is the only constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolarHistogram {
    sectors: Vec<u32>,
}

impl PolarHistogram {
    /// Number of sectors.
    #[inline]
    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    /// True when the histogram has no sectors. Never the case for a
    /// histogram built by [`compute_polar_histogram`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Angular width of one sector in radians.
    #[inline]
    pub fn sector_width(&self) -> f32 {
        TAU / self.sectors.len() as f32
    }

    /// Mass of sector `k`, or `None` past the end.
    #[inline]
    pub fn get(&self, k: usize) -> Option<u32> {
        self.sectors.get(k).copied()
    }

    /// All sector masses in angular order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.sectors
    }

    /// Iterate over sector masses in angular order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.sectors.iter().copied()
    }

    /// Sum of every sector, i.e. the total obstacle mass that was binned.
    pub fn total_mass(&self) -> u64 {
        self.sectors.iter().map(|&m| m as u64).sum()
    }

    /// Index of the sector whose span contains `bearing` (radians).
    ///
    /// The bearing is normalized into `[0, 2pi)` first, so any finite angle
    /// is accepted.
    #[inline]
    pub fn sector_containing(&self, bearing: f32) -> usize {
        let n = self.sectors.len();
        let normalized = bearing.rem_euclid(TAU);
        ((normalized * n as f32 / TAU).floor() as usize).min(n - 1)
    }

    /// Index of the densest sector (lowest index on ties).
    pub fn peak_sector(&self) -> usize {
        let mut best = 0;
        for (k, &mass) in self.sectors.iter().enumerate() {
            if mass > self.sectors[best] {
                best = k;
            }
        }
        best
    }

    /// Sum the mass of the sectors covering the counter-clockwise angular
    /// range from `from` to `to` (radians), whole-sector granularity.
    ///
    /// The range runs CCW from the sector containing `from` through the
    /// sector containing `to`, inclusive, wrapping through the zero axis
    /// when needed. Equal endpoints select a single sector; a full sweep is
    /// `total_mass()`.
    pub fn mass_in_range(&self, from: f32, to: f32) -> u64 {
        let n = self.sectors.len();
        let start = self.sector_containing(from);
        let end = self.sector_containing(to);

        let mut k = start;
        let mut sum = self.sectors[k] as u64;
        while k != end {
            k = (k + 1) % n;
            sum += self.sectors[k] as u64;
        }
        sum
    }
}

/// Bin a grid's obstacle mass into `n` angular sectors around `origin`.
///
/// For every nonzero cell, the bearing from `origin` to the cell's center
/// selects a sector, and the cell's full count is added to it — obstacle
/// mass accumulates, not just presence. The grid is not modified, and the
/// sum over all sectors equals [`HistogramGrid::total_mass`].
///
/// `origin` is a continuous point in the grid's own cell space (the robot
/// typically sits between cell centers). Fails with
/// [`GridError::InvalidSectorCount`] when `n` is zero.
pub fn compute_polar_histogram(
    grid: &HistogramGrid,
    origin: GridPoint,
    n: usize,
) -> Result<PolarHistogram> {
    if n == 0 {
        return Err(GridError::InvalidSectorCount);
    }

    let mut sectors = vec![0u32; n];
    for (coord, count) in grid.occupied() {
        let bearing = origin.bearing_to(&coord.center());
        // floor() can land exactly on n when the bearing rounds up to 2pi;
        // clamp keeps the boundary case in the last sector.
        let k = ((bearing * n as f32 / TAU).floor() as usize).min(n - 1);
        sectors[k] = sectors[k].saturating_add(count);
    }

    let histogram = PolarHistogram { sectors };
    trace!(
        "binned mass {} into {} sectors from ({}, {})",
        histogram.total_mass(),
        n,
        origin.x,
        origin.y
    );
    Ok(histogram)
}
