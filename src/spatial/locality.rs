//! spatial::locality — the spatial-weights matrix contract.
//!
//! Purpose
//! -------
//! Abstract the n×n "locality" (spatial weights) matrix behind a minimal
//! trait so that the statistics can consume dense `ndarray` matrices, views
//! borrowed from other code (e.g. NumPy buffers), and implicit matrices whose
//! entries are computed on demand.
//!
//! Key behaviors
//! -------------
//! - [`Locality::dims`] and [`Locality::at`] are the only required methods.
//! - [`Locality::sum`] adds every entry in row-major order.
//! - [`Locality::to_dense`] deep-copies the matrix into an owned
//!   `Array2<f64>`; the engines never alias caller storage.
//!
//! Conventions
//! -----------
//! - `at(i, j)` is the influence weight of location `j` on location `i`. The
//!   matrix need not be symmetric and self-weights are used as supplied.
//! - Out-of-range `at` calls panic, matching `ndarray` indexing. Callers in
//!   this crate only index after the dimension invariant has been checked.
//!
//! Testing notes
//! -------------
//! - Unit tests check that owned arrays and views agree on `dims`, `at`,
//!   `sum`, and `to_dense`, and that the provided `sum` traverses rows in
//!   order.
use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Read access to an n×n spatial-weights matrix.
///
/// Implementors only have to supply `dims` and `at`; the provided methods
/// are written in terms of those two so that implicit matrices work out of
/// the box. Dense `ndarray` matrices override [`to_dense`](Self::to_dense)
/// with a buffer copy.
pub trait Locality {
    /// `(rows, cols)` of the matrix.
    fn dims(&self) -> (usize, usize);

    /// Weight of location `j` on location `i`.
    fn at(&self, i: usize, j: usize) -> f64;

    /// Sum of all entries, accumulated row by row.
    fn sum(&self) -> f64 {
        let (rows, cols) = self.dims();
        let mut total = 0.0;
        for i in 0..rows {
            for j in 0..cols {
                total += self.at(i, j);
            }
        }
        total
    }

    /// Owned deep copy of the matrix.
    fn to_dense(&self) -> Array2<f64> {
        Array2::from_shape_fn(self.dims(), |(i, j)| self.at(i, j))
    }
}

impl<S> Locality for ArrayBase<S, Ix2>
where
    S: Data<Elem = f64>,
{
    #[inline]
    fn dims(&self) -> (usize, usize) {
        self.dim()
    }

    #[inline]
    fn at(&self, i: usize, j: usize) -> f64 {
        self[[i, j]]
    }

    fn to_dense(&self) -> Array2<f64> {
        self.to_owned()
    }
}
