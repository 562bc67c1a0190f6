//! spatial::global — one-shot Global Moran's I.
//!
//! [`global_morans_i`] computes I, E(I), Var(I) and the z-score straight from
//! caller-supplied arrays without building or retaining an engine. The
//! locality matrix is read in place through [`Locality::at`], so implicit
//! matrices are never materialized. Results are bit-identical to
//! [`Moran::outcome`](crate::spatial::Moran::outcome) on the same inputs.
use crate::spatial::{
    errors::SpatialResult,
    kernels,
    locality::Locality,
    moments,
    moran::MoranOutcome,
    validation::{validate_dims, validate_weights},
};
use ndarray::ArrayView1;

/// Global Moran's I of `data` under `locality`.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   The n observations.
/// - `weights`: `Option<&[f64]>`
///   Per-observation weighting; only `None` or an empty slice is supported.
/// - `locality`: `&L`
///   n×n spatial weights, read but not copied.
///
/// Returns
/// -------
/// `SpatialResult<MoranOutcome>` carrying I, E(I), Var(I), and Z.
///
/// Errors
/// ------
/// - `SpatialError::NotImplemented` for a non-empty `weights`.
/// - `SpatialError::DimensionMismatch` when `locality` is not n×n.
///
/// Examples
/// --------
/// ```rust
/// # use rust_spatial::spatial::{global_morans_i, weights::PathContiguity};
/// let data = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
/// let out = global_morans_i(&data, None, &PathContiguity::new(10)).unwrap();
/// assert!((out.morans_i() - 0.1111).abs() < 1e-3);
/// assert!((out.z_score() - 0.6335).abs() < 1e-3);
/// ```
pub fn global_morans_i<L: Locality + ?Sized>(
    data: &[f64], weights: Option<&[f64]>, locality: &L,
) -> SpatialResult<MoranOutcome> {
    validate_weights(weights)?;
    validate_dims(data.len(), locality.dims())?;

    let data = ArrayView1::from(data);
    let mean = moments::mean(data);
    let i = kernels::morans_i(data, mean, locality);
    let e = kernels::expectation(data.len());
    let v = kernels::variance(data, mean, locality);
    Ok(MoranOutcome::new(i, e, v))
}
