//! spatial::weights — implicit locality matrices for common layouts.
//!
//! Purpose
//! -------
//! Provide ready-made [`Locality`] implementations whose entries are computed
//! on demand, so callers do not have to materialize an n×n buffer just to
//! describe a regular layout.
//!
//! Key behaviors
//! -------------
//! - [`InverseDistanceGrid`]: points on an `nx × ny` unit grid, weight
//!   `1 / hypot(Δx, Δy)` between distinct points and zero on the diagonal.
//! - [`PathContiguity`]: points on a line, weight 1 between direct
//!   neighbours only.
//! - [`BandedWindow`]: points on a line, weight 1 for every pair within
//!   `radius` of each other, including each point with itself.
//!
//! Conventions
//! -----------
//! - Point `k` of an `nx × ny` grid sits at column `k % nx`, row `k / nx`.
//! - Like dense `ndarray` indexing, `at(i, j)` panics when either index is
//!   outside the matrix.
//!
//! Testing notes
//! -------------
//! - Unit tests check dimensions, symmetry, diagonal handling, and a few
//!   hand-computed entries for each layout.
use crate::spatial::locality::Locality;

/// Inverse-distance weights over an `nx × ny` unit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InverseDistanceGrid {
    nx: usize,
    ny: usize,
}

impl InverseDistanceGrid {
    pub fn new(nx: usize, ny: usize) -> Self {
        InverseDistanceGrid { nx, ny }
    }

    #[inline]
    fn side(&self) -> usize {
        self.nx * self.ny
    }
}

impl Locality for InverseDistanceGrid {
    fn dims(&self) -> (usize, usize) {
        (self.side(), self.side())
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        let d = self.side();
        assert!(i < d && j < d, "locality index ({i}, {j}) out of bounds for {d}×{d} grid");
        if i == j {
            return 0.0;
        }
        let dx = (j % self.nx) as f64 - (i % self.nx) as f64;
        let dy = (j / self.nx) as f64 - (i / self.nx) as f64;
        1.0 / dx.hypot(dy)
    }
}

/// Path-graph contiguity: `w[i][j] = 1` iff `|i − j| = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathContiguity {
    n: usize,
}

impl PathContiguity {
    pub fn new(n: usize) -> Self {
        PathContiguity { n }
    }
}

impl Locality for PathContiguity {
    fn dims(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "locality index ({i}, {j}) out of bounds for n = {}", self.n);
        if i.abs_diff(j) == 1 { 1.0 } else { 0.0 }
    }
}

/// Banded window: `w[i][j] = 1` iff `|i − j| ≤ radius` (self included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandedWindow {
    n: usize,
    radius: usize,
}

impl BandedWindow {
    pub fn new(n: usize, radius: usize) -> Self {
        BandedWindow { n, radius }
    }
}

impl Locality for BandedWindow {
    fn dims(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "locality index ({i}, {j}) out of bounds for n = {}", self.n);
        if i.abs_diff(j) <= self.radius { 1.0 } else { 0.0 }
    }
}
