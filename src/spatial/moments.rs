//! spatial::moments — cached moments of the observation vector.
//!
//! The mean comes from `statrs`; the second moment `s` is the population
//! variance written as `mean(x²) − mean²`, the form the G* denominator uses.
//! Both return NaN on empty input; an empty dataset paired with a 0×0
//! locality passes the dimension check and simply carries NaN moments.
use ndarray::ArrayView1;
use statrs::statistics::Statistics;

/// Arithmetic mean of `data`.
#[inline]
pub fn mean(data: ArrayView1<'_, f64>) -> f64 {
    data.iter().mean()
}

/// Population second moment about the mean, `(1/n)·Σxᵢ² − mean²`.
pub fn second_moment(data: ArrayView1<'_, f64>, mean: f64) -> f64 {
    let ss: f64 = data.iter().map(|v| v * v).sum();
    ss / data.len() as f64 - mean * mean
}
