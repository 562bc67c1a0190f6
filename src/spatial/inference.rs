//! spatial::inference — normal-approximation p-values for spatial z-scores.
//!
//! Purpose
//! -------
//! Turn the z-scores produced by Moran's I and Getis-Ord G* into tail
//! probabilities under the standard normal approximation.
//!
//! Key behaviors
//! -------------
//! - [`Tail`] selects the alternative hypothesis: two-sided (default),
//!   upper (clustering of high values / positive autocorrelation), or lower.
//! - [`p_value`] evaluates the selected tail with `statrs`'s `Normal`.
//!
//! Conventions
//! -----------
//! - Non-finite z-scores (from degenerate inputs) map to NaN p-values rather
//!   than to 0 or 1.
//! - `Tail` parses from `"two-sided"`, `"greater"`, and `"less"`, the names
//!   used by the Python bindings.
use statrs::distribution::{ContinuousCDF, Normal};
use std::str::FromStr;

/// Alternative hypothesis for a z-score test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tail {
    /// `P(|Z| ≥ |z|)`.
    #[default]
    TwoSided,
    /// `P(Z ≥ z)`.
    Upper,
    /// `P(Z ≤ z)`.
    Lower,
}

impl FromStr for Tail {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-sided" | "two_sided" => Ok(Tail::TwoSided),
            "greater" | "upper" => Ok(Tail::Upper),
            "less" | "lower" => Ok(Tail::Lower),
            other => Err(format!(
                "Unknown alternative '{other}'. Expected 'two-sided', 'greater', or 'less'."
            )),
        }
    }
}

/// Standard-normal tail probability of `z` for the chosen `tail`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_spatial::spatial::inference::{p_value, Tail};
/// let p = p_value(1.959_963_984_540_054, Tail::TwoSided);
/// assert!((p - 0.05).abs() < 1e-9);
/// ```
pub fn p_value(z: f64, tail: Tail) -> f64 {
    if !z.is_finite() {
        return f64::NAN;
    }
    let std_normal = Normal::standard();
    match tail {
        Tail::TwoSided => 2.0 * std_normal.sf(z.abs()),
        Tail::Upper => std_normal.sf(z),
        Tail::Lower => std_normal.cdf(z),
    }
}
