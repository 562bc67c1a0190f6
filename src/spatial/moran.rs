//! spatial::moran — Global Moran's I engine and outcome.
//!
//! Purpose
//! -------
//! Measure global spatial autocorrelation of an observation vector under a
//! locality matrix: whether similar values cluster (I above its
//! expectation), disperse (below), or look random.
//!
//! Key behaviors
//! -------------
//! - [`Moran`] wraps a [`DataSet`] and exposes the four quantities of the
//!   randomization test:
//!   - [`Moran::morans_i`]: `I = n·Σᵢⱼ wᵢⱼ zᵢ zⱼ / (S₀·Σᵢ zᵢ²)`, O(n²);
//!   - [`Moran::expectation`]: `E(I) = −1/(n − 1)`, O(1);
//!   - [`Moran::variance`]: `Var(I)` from the S₀/S₁/S₂ moment formulas, O(n²);
//!   - [`Moran::z_score`]: `(I − E)/√Var`.
//! - [`Moran::outcome`] evaluates all of them once and returns a
//!   [`MoranOutcome`]; `z_score` alone recomputes I and Var on every call.
//! - The arithmetic lives in `spatial::kernels` and is shared with
//!   [`global_morans_i`](crate::spatial::global_morans_i).
//!
//! Invariants & assumptions
//! ------------------------
//! - `expectation` needs `n ≥ 2` and `variance` needs `n ≥ 4` to be finite;
//!   smaller inputs return infinities or NaNs rather than errors.
//! - Constant data (Σ zᵢ² = 0) and an all-zero locality (S₀ = 0) likewise
//!   produce non-finite statistics.
//!
//! Downstream usage
//! ----------------
//! - Build once, then alternate `set_data` / `set_locality` / `reset` with
//!   queries. Cache `outcome()` when the same state is queried repeatedly.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the 10-point path-graph example, z-score
//!   self-consistency, reset idempotence, and rejection paths. The
//!   100-point grid examples live in the integration suite.
use crate::spatial::{
    dataset::DataSet,
    errors::SpatialResult,
    inference::{Tail, p_value},
    kernels,
    locality::Locality,
    validation::validate_weights,
};
use ndarray::{Array1, Array2};

/// `MoranOutcome` — Moran's I together with its null moments.
///
/// Fields
/// ------
/// - `morans_i`: observed statistic I.
/// - `expectation`: E(I) under the randomization null.
/// - `variance`: Var(I) under the randomization null.
/// - `z_score`: `(I − E)/√Var`.
///
/// Notes
/// -----
/// - Plain `Copy` value; it does not own or reference the input data.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MoranOutcome {
    morans_i: f64,
    expectation: f64,
    variance: f64,
    z_score: f64,
}

impl MoranOutcome {
    pub(crate) fn new(morans_i: f64, expectation: f64, variance: f64) -> Self {
        MoranOutcome {
            morans_i,
            expectation,
            variance,
            z_score: kernels::z_score(morans_i, expectation, variance),
        }
    }

    /// Observed Moran's I.
    pub fn morans_i(&self) -> f64 {
        self.morans_i
    }

    /// E(I) = −1/(n − 1).
    pub fn expectation(&self) -> f64 {
        self.expectation
    }

    /// Var(I) under randomization.
    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn z_score(&self) -> f64 {
        self.z_score
    }

    /// Normal tail probability of [`z_score`](Self::z_score).
    pub fn p_value(&self, tail: Tail) -> f64 {
        p_value(self.z_score, tail)
    }
}

/// `Moran` — Global Moran's I engine over a mutable dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Moran {
    dataset: DataSet,
}

impl Moran {
    /// Build an engine from observations and a locality matrix.
    ///
    /// Errors
    /// ------
    /// - `SpatialError::NotImplemented` for a non-empty `weights`.
    /// - `SpatialError::DimensionMismatch` when `locality` is not n×n.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_spatial::spatial::{Moran, weights::PathContiguity};
    /// let data = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
    /// let m = Moran::new(&data, None, &PathContiguity::new(10)).unwrap();
    /// assert!((m.morans_i() - 0.1111).abs() < 1e-3);
    /// assert!((m.z_score() - 0.6335).abs() < 1e-3);
    /// ```
    pub fn new<L: Locality + ?Sized>(
        data: &[f64], weights: Option<&[f64]>, locality: &L,
    ) -> SpatialResult<Self> {
        validate_weights(weights)?;
        Ok(Moran { dataset: DataSet::new(data, locality)? })
    }

    /// Replace the observations; the mean is recomputed.
    pub fn set_data(&mut self, data: &[f64]) -> SpatialResult<()> {
        self.dataset.set_data(data)
    }

    /// Replace the locality matrix.
    pub fn set_locality<L: Locality>(&mut self, locality: &L) -> SpatialResult<()> {
        self.dataset.set_locality(locality)
    }

    /// Replace either field, both, or neither; see [`DataSet::reset`].
    pub fn reset(
        &mut self, data: Option<&[f64]>, locality: Option<&dyn Locality>,
    ) -> SpatialResult<()> {
        self.dataset.reset(data, locality)
    }

    /// Global Moran's I.
    pub fn morans_i(&self) -> f64 {
        kernels::morans_i(self.dataset.data().view(), self.dataset.mean(), self.dataset.locality())
    }

    /// E(I) = −1/(n − 1).
    pub fn expectation(&self) -> f64 {
        kernels::expectation(self.len())
    }

    /// Var(I) under the randomization null.
    pub fn variance(&self) -> f64 {
        kernels::variance(self.dataset.data().view(), self.dataset.mean(), self.dataset.locality())
    }

    /// `(I − E)/√Var`, recomputing all three terms.
    pub fn z_score(&self) -> f64 {
        kernels::z_score(self.morans_i(), self.expectation(), self.variance())
    }

    /// Normal tail probability of the z-score.
    pub fn p_value(&self, tail: Tail) -> f64 {
        p_value(self.z_score(), tail)
    }

    /// Evaluate I, E, Var, and Z once.
    pub fn outcome(&self) -> MoranOutcome {
        MoranOutcome::new(self.morans_i(), self.expectation(), self.variance())
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::errors::SpatialError;
    use crate::spatial::weights::{BandedWindow, PathContiguity};
    use approx::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - I, E, Var, and Z on the 10-point path-graph reference example.
    // - `outcome()` agreeing with the individual queries.
    // - Reset idempotence and mutation behavior.
    // - Weighting and dimension rejection; degenerate n.
    // -------------------------------------------------------------------------

    const DATA: [f64; 10] = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0];

    #[test]
    // Purpose
    // -------
    // Verify the path-graph reference values.
    //
    // Given
    // -----
    // - data = {0,0,0,1,1,1,0,1,0,0}; locality[i][i±1] = 1.
    //
    // Expect
    // ------
    // - I ≈ 0.1111, E = −1/9, Var ≈ 0.12307, Z ≈ 0.6335.
    fn path_graph_reference_values() {
        // Arrange
        let m = Moran::new(&DATA, None, &PathContiguity::new(10)).unwrap();

        // Act / Assert
        assert_abs_diff_eq!(m.morans_i(), 0.1111, epsilon = 1e-3);
        assert_abs_diff_eq!(m.expectation(), -1.0 / 9.0, epsilon = 1e-15);
        assert_abs_diff_eq!(m.variance(), 0.123_068_129_858_253_3, epsilon = 1e-9);
        assert_abs_diff_eq!(m.z_score(), 0.6335, epsilon = 1e-3);
    }

    #[test]
    // Purpose
    // -------
    // Check that the z-score is exactly `(I − E)/√Var` and that `outcome()`
    // matches the individual queries bit for bit.
    fn z_score_is_self_consistent_and_outcome_matches() {
        // Arrange
        let m = Moran::new(&DATA, None, &BandedWindow::new(10, 2)).unwrap();

        // Act
        let o = m.outcome();

        // Assert
        let z = (m.morans_i() - m.expectation()) / m.variance().sqrt();
        assert_eq!(m.z_score().to_bits(), z.to_bits());
        assert_eq!(o.morans_i().to_bits(), m.morans_i().to_bits());
        assert_eq!(o.variance().to_bits(), m.variance().to_bits());
        assert_eq!(o.z_score().to_bits(), m.z_score().to_bits());
        assert_eq!(o.p_value(Tail::Upper).to_bits(), m.p_value(Tail::Upper).to_bits());
    }

    #[test]
    // Purpose
    // -------
    // Ensure that resetting to the currently held data and locality leaves
    // every statistic unchanged.
    fn reset_with_current_values_is_idempotent() {
        // Arrange
        let mut m = Moran::new(&DATA, None, &PathContiguity::new(10)).unwrap();
        let before = m.outcome();
        let data = m.data().to_vec();
        let locality = m.locality().clone();

        // Act
        m.reset(Some(data.as_slice()), Some(&locality)).unwrap();

        // Assert
        assert_eq!(m.outcome(), before);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `set_data` changes I and that a rejected `set_locality`
    // keeps the previous statistics.
    fn mutations_update_or_preserve_statistics() {
        // Arrange
        let mut m = Moran::new(&DATA, None, &PathContiguity::new(10)).unwrap();
        let before = m.morans_i();

        // Act
        m.set_data(&[1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let clustered = m.morans_i();
        let rejected = m.set_locality(&PathContiguity::new(11));

        // Assert
        assert!(clustered > before, "block pattern should raise I: {clustered} vs {before}");
        assert!(matches!(rejected, Err(SpatialError::DimensionMismatch { .. })));
        assert_eq!(m.morans_i().to_bits(), clustered.to_bits());
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a non-empty weighting is rejected.
    fn new_rejects_weighting() {
        // Act
        let result = Moran::new(&DATA, Some(&[0.5; 10][..]), &PathContiguity::new(10));

        // Assert
        assert!(matches!(result, Err(SpatialError::NotImplemented { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Check the documented division-by-zero behavior for tiny n.
    //
    // Given
    // -----
    // - n = 1 and n = 3 path graphs.
    //
    // Expect
    // ------
    // - E(I) is −∞ for n = 1; Var(I) is non-finite for n = 3.
    fn small_n_yields_non_finite_moments() {
        // Arrange
        let one = Moran::new(&[2.0], None, &PathContiguity::new(1)).unwrap();
        let three = Moran::new(&[1.0, 2.0, 4.0], None, &PathContiguity::new(3)).unwrap();

        // Act / Assert
        assert!(one.expectation().is_infinite());
        assert!(!three.variance().is_finite());
    }
}
