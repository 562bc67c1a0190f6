//! spatial — spatial autocorrelation statistics and shared infrastructure.
//!
//! Purpose
//! -------
//! Compute spatial autocorrelation of scalar observations placed on a fixed
//! spatial structure described by an n×n locality (spatial weights) matrix:
//! Global Moran's I for overall clustering or dispersion, and Local
//! Getis-Ord G* for per-location hot and cold spots.
//!
//! Key behaviors
//! -------------
//! - Stateful engines [`Moran`] and [`GetisOrd`] own copies of the data and
//!   the locality matrix, keep cached moments consistent across
//!   [`set_data`](Moran::set_data), [`set_locality`](Moran::set_locality), and
//!   [`reset`](Moran::reset), and answer queries from that state.
//! - The stateless [`global_morans_i`] computes the same Moran statistics in a
//!   single call, bit-identical to the engine.
//! - The [`Locality`] trait is the matrix contract; dense `ndarray` matrices,
//!   views, and the implicit layouts in [`weights`] all implement it.
//! - [`inference`] converts z-scores into normal tail probabilities.
//!
//! Invariants & assumptions
//! ------------------------
//! - `rows(locality) == cols(locality) == len(data)` is checked on every
//!   construction and mutation, before any state changes.
//! - Per-observation weighting is rejected with
//!   [`SpatialError::NotImplemented`].
//! - Degenerate arithmetic (too few points, zero denominators) is reported
//!   through non-finite floats, never through errors.
//!
//! Conventions
//! -----------
//! - `locality[i][j]` is the influence of location `j` on location `i`; the
//!   matrix may be asymmetric and self-weights are used as given.
//! - Errors are [`SpatialError`] values propagated via [`SpatialResult`].
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use rust_spatial::spatial::prelude::*;
//!   use rust_spatial::spatial::weights::PathContiguity;
//!
//!   let data = [0.0, 1.0, 1.0, 0.0, 0.0];
//!   let moran = Moran::new(&data, None, &PathContiguity::new(5))?;
//!   let outcome = moran.outcome();
//!   # Ok::<(), SpatialError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own contract; the reference
//!   scenarios (100-point grids, 10-point path and window) are in
//!   `tests/integration_spatial_pipeline.rs`.

pub mod dataset;
pub mod errors;
pub mod getis_ord;
pub mod global;
pub mod inference;
pub mod locality;
pub mod moments;
pub mod moran;
pub mod validation;
pub mod weights;

mod kernels;
mod maybe_rayon;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::dataset::DataSet;
pub use self::errors::{SpatialError, SpatialResult};
pub use self::getis_ord::GetisOrd;
pub use self::global::global_morans_i;
pub use self::inference::Tail;
pub use self::locality::Locality;
pub use self::moran::{Moran, MoranOutcome};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_spatial::spatial::prelude::*;
//
// to import the main spatial-statistics surface in a single line.

pub mod prelude {
    pub use super::errors::{SpatialError, SpatialResult};
    pub use super::getis_ord::GetisOrd;
    pub use super::global::global_morans_i;
    pub use super::inference::Tail;
    pub use super::locality::Locality;
    pub use super::moran::{Moran, MoranOutcome};
}
