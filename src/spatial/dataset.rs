//! spatial::dataset — observation vector plus locality matrix.
//!
//! Purpose
//! -------
//! Own the data shared by the spatial engines: a copy of the observation
//! vector, a dense copy of the locality matrix, and the cached mean of the
//! observations. All construction and mutation goes through a single
//! validate-then-commit path so the dimension invariant can never be broken.
//!
//! Key behaviors
//! -------------
//! - [`DataSet::new`] deep-copies caller data and weights; nothing is aliased.
//! - [`DataSet::set_data`], [`DataSet::set_locality`], and the general
//!   [`DataSet::reset`] validate the *resulting* combination before any
//!   field is overwritten, then copy and swap.
//! - The mean is recomputed (never patched) whenever data is supplied.
//!
//! Invariants & assumptions
//! ------------------------
//! - `locality.dim() == (n, n)` with `n == data.len()` at all times.
//! - A rejected mutation leaves every field untouched.
//! - Replacing both fields at once may change `n`; replacing one field alone
//!   must match the dimension of the other.
//!
//! Conventions
//! -----------
//! - Committed mutations are logged at `debug` and rejected ones at `warn`
//!   on the crate root logger.
//!
//! Testing notes
//! -------------
//! - Unit tests cover copying semantics, every mutation path, rejection with
//!   unchanged state, growth through `reset`, and the no-op reset.
use crate::logging::logger;
use crate::spatial::{
    errors::SpatialResult,
    locality::Locality,
    moments,
    validation::validate_dims,
};
use ndarray::{Array1, Array2};
use slog::{debug, warn};

/// `DataSet` — validated observations and spatial weights.
///
/// Fields
/// ------
/// - `data`: `Array1<f64>`
///   Owned copy of the n observations.
/// - `locality`: `Array2<f64>`
///   Owned n×n copy of the spatial-weights matrix; `locality[[i, j]]` is the
///   weight of location `j` on location `i`.
/// - `mean`: `f64`
///   Cached arithmetic mean of `data`.
///
/// Performance
/// -----------
/// - Construction and locality replacement are O(n²) copies; data
///   replacement is O(n) including the mean.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    data: Array1<f64>,
    locality: Array2<f64>,
    mean: f64,
}

impl DataSet {
    /// Build a `DataSet` from observations and a locality matrix.
    ///
    /// Errors
    /// ------
    /// - `SpatialError::DimensionMismatch`
    ///   Returned when `locality` is not `data.len()` × `data.len()`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_spatial::spatial::DataSet;
    /// let w = array![[0.0, 1.0], [1.0, 0.0]];
    /// let ds = DataSet::new(&[1.0, 3.0], &w).unwrap();
    /// assert_eq!(ds.len(), 2);
    /// assert_eq!(ds.mean(), 2.0);
    /// ```
    pub fn new<L: Locality + ?Sized>(data: &[f64], locality: &L) -> SpatialResult<Self> {
        let dims = locality.dims();
        if let Err(err) = validate_dims(data.len(), dims) {
            warn!(logger(), "dataset rejected"; "n" => data.len(), "rows" => dims.0, "cols" => dims.1);
            return Err(err);
        }

        let data = Array1::from(data.to_vec());
        let mean = moments::mean(data.view());
        debug!(logger(), "dataset constructed"; "n" => data.len(), "mean" => mean);
        Ok(DataSet { data, locality: locality.to_dense(), mean })
    }

    /// Replace the observation vector. Its length must equal the current n.
    pub fn set_data(&mut self, data: &[f64]) -> SpatialResult<()> {
        self.reset(Some(data), None)
    }

    /// Replace the locality matrix. It must be n×n for the current n; the
    /// cached mean is left alone.
    pub fn set_locality<L: Locality>(&mut self, locality: &L) -> SpatialResult<()> {
        self.reset(None, Some(locality as &dyn Locality))
    }

    /// Replace either field, both, or neither.
    ///
    /// `None` keeps the current value. The combination of new and kept values
    /// must satisfy the dimension invariant; it is checked before anything is
    /// copied, so an `Err` leaves the receiver unchanged. Supplying both may
    /// change the number of observations.
    ///
    /// Errors
    /// ------
    /// - `SpatialError::DimensionMismatch` for an inconsistent combination.
    pub fn reset(
        &mut self, data: Option<&[f64]>, locality: Option<&dyn Locality>,
    ) -> SpatialResult<()> {
        if data.is_none() && locality.is_none() {
            return Ok(());
        }

        let n = data.map_or(self.data.len(), <[f64]>::len);
        let dims = locality.map_or(self.locality.dim(), |l| l.dims());
        if let Err(err) = validate_dims(n, dims) {
            warn!(logger(), "dataset mutation rejected"; "n" => n, "rows" => dims.0, "cols" => dims.1);
            return Err(err);
        }

        let next_data = data.map(|d| Array1::from(d.to_vec()));
        let next_locality = locality.map(|l| l.to_dense());

        if let Some(d) = next_data {
            self.mean = moments::mean(d.view());
            self.data = d;
        }
        if let Some(l) = next_locality {
            self.locality = l;
        }
        debug!(
            logger(), "dataset updated";
            "n" => n, "data" => data.is_some(), "locality" => locality.is_some(), "mean" => self.mean
        );
        Ok(())
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Observation vector.
    #[inline]
    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    /// Locality matrix.
    #[inline]
    pub fn locality(&self) -> &Array2<f64> {
        &self.locality
    }

    /// Cached mean of the observations.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}
