//! spatial::getis_ord — Local Getis-Ord G* hot-spot statistic.
//!
//! Purpose
//! -------
//! Compute the local Getis-Ord G*ᵢ z-score for each location of a dataset:
//! how far the weighted neighborhood sum around location i departs from what
//! spatial randomness would predict.
//!
//! Key behaviors
//! -------------
//! - [`GetisOrd`] holds a [`DataSet`] plus the cached second moment
//!   `s = (1/n)·Σxᵢ² − x̄²`, refreshed whenever the observations change.
//! - [`GetisOrd::gstar`] evaluates one location in O(n):
//!
//!   ```text
//!   wᵢ   = row i of the locality matrix
//!   ws   = x̄ · Σⱼ wᵢⱼ
//!   G*ᵢ  = (wᵢ·x − ws) / ( s · √((n·wᵢ·wᵢ − ws²) / (n − 1)) )
//!   ```
//!
//! - [`GetisOrd::gstar_all`] evaluates every location, on rayon when the
//!   `parallel` feature is enabled.
//! - [`GetisOrd::p_values`] converts the z-scores to normal tail
//!   probabilities.
//!
//! Invariants & assumptions
//! ------------------------
//! - Meaningful results need `n ≥ 2`. With `n = 1` the `(n − 1)` divisor is
//!   zero and G* is NaN; this is returned, not reported as an error.
//! - A location whose weight row is all zero, or a constant data vector,
//!   gives a zero denominator and therefore a non-finite z-score.
//! - Query methods take `&self`; concurrent reads are safe, mutation needs
//!   `&mut self` and is therefore serialized by the borrow checker.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the published 10-point banded example, `s` refresh on
//!   mutation, the weighting rejection, the index guard, and the degenerate
//!   single-point case.
use crate::logging::logger;
use crate::spatial::{
    dataset::DataSet,
    errors::SpatialResult,
    inference::{Tail, p_value},
    locality::Locality,
    maybe_rayon::*,
    moments,
    validation::{validate_index, validate_weights},
};
use ndarray::{Array1, Array2};
use slog::debug;

/// `GetisOrd` — Local Getis-Ord G* engine.
///
/// Fields
/// ------
/// - `dataset`: [`DataSet`]
///   Observations, locality matrix, and cached mean.
/// - `s`: `f64`
///   Population second moment of the observations.
///
/// Performance
/// -----------
/// - `gstar` is O(n); `gstar_all` is O(n²) total.
#[derive(Debug, Clone, PartialEq)]
pub struct GetisOrd {
    dataset: DataSet,
    s: f64,
}

impl GetisOrd {
    /// Build an engine from observations and a locality matrix.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&[f64]`
    ///   The n observations; copied.
    /// - `weights`: `Option<&[f64]>`
    ///   Per-observation weighting. Only `None` (or an empty slice) is
    ///   supported.
    /// - `locality`: `&L`
    ///   n×n spatial weights; deep-copied.
    ///
    /// Errors
    /// ------
    /// - `SpatialError::NotImplemented` for a non-empty `weights`.
    /// - `SpatialError::DimensionMismatch` when `locality` is not n×n.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_spatial::spatial::{GetisOrd, weights::BandedWindow};
    /// let data = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
    /// let g = GetisOrd::new(&data, None, &BandedWindow::new(10, 1)).unwrap();
    /// assert!((g.gstar(4).unwrap() - 4.2102).abs() < 1e-3);
    /// ```
    pub fn new<L: Locality + ?Sized>(
        data: &[f64], weights: Option<&[f64]>, locality: &L,
    ) -> SpatialResult<Self> {
        validate_weights(weights)?;
        let dataset = DataSet::new(data, locality)?;
        let s = moments::second_moment(dataset.data().view(), dataset.mean());
        Ok(GetisOrd { dataset, s })
    }

    /// Replace the observations and refresh the cached moments.
    pub fn set_data(&mut self, data: &[f64]) -> SpatialResult<()> {
        self.dataset.set_data(data)?;
        self.refresh_moments();
        Ok(())
    }

    /// Replace the locality matrix. Cached moments are unaffected.
    pub fn set_locality<L: Locality>(&mut self, locality: &L) -> SpatialResult<()> {
        self.dataset.set_locality(locality)
    }

    /// Replace either field, both, or neither; see [`DataSet::reset`].
    pub fn reset(
        &mut self, data: Option<&[f64]>, locality: Option<&dyn Locality>,
    ) -> SpatialResult<()> {
        self.dataset.reset(data, locality)?;
        if data.is_some() {
            self.refresh_moments();
        }
        Ok(())
    }

    /// G* z-score for location `i`.
    ///
    /// Errors
    /// ------
    /// - `SpatialError::IndexOutOfRange` when `i >= self.len()`.
    pub fn gstar(&self, i: usize) -> SpatialResult<f64> {
        validate_index(i, self.len())?;
        Ok(self.gstar_at(i))
    }

    /// G* z-scores for every location, in index order.
    pub fn gstar_all(&self) -> Array1<f64> {
        debug!(logger(), "computing G* for all locations"; "n" => self.len());
        let z: Vec<f64> = (0..self.len()).into_par_iter().map(|i| self.gstar_at(i)).collect();
        Array1::from(z)
    }

    /// Normal tail probabilities of [`gstar_all`](Self::gstar_all).
    pub fn p_values(&self, tail: Tail) -> Array1<f64> {
        self.gstar_all().mapv(|z| p_value(z, tail))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    pub fn data(&self) -> &Array1<f64> {
        self.dataset.data()
    }

    pub fn locality(&self) -> &Array2<f64> {
        self.dataset.locality()
    }

    pub fn mean(&self) -> f64 {
        self.dataset.mean()
    }

    /// Cached population second moment `mean(x²) − mean²`.
    pub fn s(&self) -> f64 {
        self.s
    }

    fn refresh_moments(&mut self) {
        self.s = moments::second_moment(self.dataset.data().view(), self.dataset.mean());
    }

    fn gstar_at(&self, i: usize) -> f64 {
        let data = self.dataset.data();
        let wi = self.dataset.locality().row(i);
        let ws = self.dataset.mean() * wi.sum();
        let n = data.len() as f64;
        let num = wi.dot(data) - ws;
        let den = self.s * ((n * wi.dot(&wi) - ws * ws) / (n - 1.0)).sqrt();
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::errors::SpatialError;
    use crate::spatial::weights::BandedWindow;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - G* values on the 10-point window-of-3 reference example.
    // - Cached-moment refresh through `set_data` and `reset`.
    // - Rejection paths (weighting, dimensions, index).
    // - Degenerate inputs (single point, zero weight row).
    //
    // They intentionally DO NOT cover:
    // - Parallel vs sequential equality; both paths share `gstar_at` and the
    //   `parallel` feature is exercised by the integration suite.
    // -------------------------------------------------------------------------

    const DATA: [f64; 10] = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
    const EXPECTED: [f64; 10] =
        [-2.273, -2.807, -0.4678, 1.871, 4.21, 1.871, 1.871, -0.4678, -0.4678, -2.273];

    #[test]
    // Purpose
    // -------
    // Verify G* for every location of the banded reference example.
    //
    // Given
    // -----
    // - data = {0,0,0,1,1,1,0,1,0,0}; locality[i][j] = 1 iff |i − j| ≤ 1.
    //
    // Expect
    // ------
    // - Both `gstar(i)` and `gstar_all()` match the published sequence to 1e-3.
    fn gstar_matches_banded_reference() {
        // Arrange
        let g = GetisOrd::new(&DATA, None, &BandedWindow::new(10, 1)).unwrap();

        // Act
        let all = g.gstar_all();

        // Assert
        for (i, &want) in EXPECTED.iter().enumerate() {
            assert_abs_diff_eq!(g.gstar(i).unwrap(), want, epsilon = 1e-3);
            assert_eq!(all[i].to_bits(), g.gstar(i).unwrap().to_bits());
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that replacing the data refreshes both the mean and `s`, and
    // that replacing only the locality leaves them alone.
    //
    // Given
    // -----
    // - A 3-point engine on [1, 2, 3] then `set_data([2, 4, 6])`, then a new
    //   locality via `reset(None, Some(..))`.
    //
    // Expect
    // ------
    // - s goes from 2/3 to 8/3; the locality reset keeps s at 8/3.
    fn mutations_refresh_cached_moments() {
        // Arrange
        let mut g = GetisOrd::new(&[1.0, 2.0, 3.0], None, &BandedWindow::new(3, 1)).unwrap();
        let s_before = g.s();

        // Act
        g.set_data(&[2.0, 4.0, 6.0]).unwrap();
        let s_after_data = g.s();
        g.reset(None, Some(&Array2::<f64>::eye(3))).unwrap();

        // Assert
        assert_abs_diff_eq!(s_before, 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s_after_data, 8.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.s(), 8.0 / 3.0, epsilon = 1e-12);
        assert_eq!(g.mean(), 4.0);
        assert_eq!(g.locality(), &Array2::<f64>::eye(3));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a non-empty weighting is rejected as not implemented and
    // that a mismatched locality is rejected as a dimension error.
    fn new_rejects_weighting_and_mismatch() {
        // Act
        let weighted = GetisOrd::new(&DATA, Some(&[1.0; 10][..]), &BandedWindow::new(10, 1));
        let mismatched = GetisOrd::new(&DATA, None, &BandedWindow::new(9, 1));

        // Assert
        assert!(matches!(weighted, Err(SpatialError::NotImplemented { .. })));
        assert!(matches!(mismatched, Err(SpatialError::DimensionMismatch { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify the index guard on `gstar`.
    fn gstar_out_of_range_index_is_rejected() {
        // Arrange
        let g = GetisOrd::new(&DATA, None, &BandedWindow::new(10, 1)).unwrap();

        // Act / Assert
        assert_eq!(g.gstar(10), Err(SpatialError::IndexOutOfRange { index: 10, len: 10 }));
    }

    #[test]
    // Purpose
    // -------
    // Check that degenerate inputs produce non-finite values instead of
    // errors.
    //
    // Given
    // -----
    // - A single observation with a 1×1 locality.
    // - A 3-point engine whose row 0 is all zeros.
    //
    // Expect
    // ------
    // - Both G* values are non-finite and returned as `Ok`.
    fn degenerate_inputs_yield_non_finite_gstar() {
        // Arrange
        let single = GetisOrd::new(&[3.0], None, &array![[1.0]]).unwrap();
        let w = array![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]];
        let zero_row = GetisOrd::new(&[1.0, 2.0, 4.0], None, &w).unwrap();

        // Act
        let g_single = single.gstar(0).unwrap();
        let g_zero = zero_row.gstar(0).unwrap();

        // Assert
        assert!(!g_single.is_finite(), "n = 1 should give a non-finite G*, got {g_single}");
        assert!(!g_zero.is_finite(), "zero weight row should give a non-finite G*, got {g_zero}");
    }
}
