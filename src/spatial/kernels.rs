//! spatial::kernels — O(n²) summation kernels for Global Moran's I.
//!
//! Both the [`Moran`](crate::spatial::Moran) engine and the stateless
//! [`global_morans_i`](crate::spatial::global_morans_i) run these exact
//! routines, so the two produce bit-identical statistics for the same inputs.
//!
//! Notation: `zᵢ = xᵢ − x̄`, `wᵢⱼ = locality.at(i, j)`, `S₀ = Σᵢ Σⱼ wᵢⱼ`.
//! Callers have already checked `locality.dims() == (n, n)`.
//!
//! Degenerate inputs are not guarded. `n < 2` makes E(I) infinite, `n < 4`
//! zeroes the variance denominator, constant data zeroes `Σ zᵢ²`; all of these
//! propagate as IEEE infinities or NaNs.
use crate::spatial::locality::Locality;
use ndarray::ArrayView1;

/// Moran's I: `n · Σᵢ Σⱼ wᵢⱼ zᵢ zⱼ / (S₀ · Σᵢ zᵢ²)`.
pub fn morans_i<L: Locality + ?Sized>(data: ArrayView1<'_, f64>, mean: f64, locality: &L) -> f64 {
    let mut num = 0.0;
    let mut den = 0.0;
    for (i, &xi) in data.iter().enumerate() {
        let zi = xi - mean;
        den += zi * zi;
        for (j, &xj) in data.iter().enumerate() {
            let zj = xj - mean;
            num += locality.at(i, j) * zi * zj;
        }
    }
    (data.len() as f64 * num) / (locality.sum() * den)
}

/// E(I) under the randomization null: `−1 / (n − 1)`.
#[inline]
pub fn expectation(n: usize) -> f64 {
    -1.0 / (n as f64 - 1.0)
}

/// Var(I) under the randomization null.
///
/// Accumulates, in one pass over (i, j):
/// - `S₀ = Σ wᵢⱼ`,
/// - `S₁ = ½ Σ (wᵢⱼ + wⱼᵢ)²`,
/// - `S₂ = Σᵢ (Σⱼ wᵢⱼ + wⱼᵢ)²`,
/// - `m₂ = Σ zᵢ²`, `m₄ = Σ zᵢ⁴`,
///
/// then returns `(A − B)/C − E(I)²` with
/// `A = n[(n² − 3n + 3)S₁ − nS₂ + 3S₀²]`,
/// `B = (m₄/m₂²)[(n² − n)S₁ − 2nS₂ + 6S₀²]`,
/// `C = (n − 1)(n − 2)(n − 3)S₀²`.
pub fn variance<L: Locality + ?Sized>(data: ArrayView1<'_, f64>, mean: f64, locality: &L) -> f64 {
    let len = data.len();
    let (mut s0, mut s1, mut s2) = (0.0, 0.0, 0.0);
    let (mut var2, mut var4) = (0.0, 0.0);
    for (i, &xi) in data.iter().enumerate() {
        let mut v = xi - mean;
        v *= v;
        var2 += v;
        var4 += v * v;

        let mut p2 = 0.0;
        for j in 0..len {
            let wij = locality.at(i, j);
            let wji = locality.at(j, i);

            s0 += wij;

            let sym = wij + wji;
            s1 += sym * sym;

            p2 += wij + wji;
        }
        s2 += p2 * p2;
    }
    s1 *= 0.5;

    let n = len as f64;
    let e = expectation(len);
    let a = n * ((n * n - 3.0 * n + 3.0) * s1 - n * s2 + 3.0 * s0 * s0);
    let c = (n - 1.0) * (n - 2.0) * (n - 3.0) * s0 * s0;
    let d = var4 / (var2 * var2);
    let b = d * ((n * n - n) * s1 - 2.0 * n * s2 + 6.0 * s0 * s0);

    (a - b) / c - e * e
}

/// z-score `(I − E) / √Var`.
#[inline]
pub fn z_score(i: f64, e: f64, var: f64) -> f64 {
    (i - e) / var.sqrt()
}
