//! rust_spatial — spatial autocorrelation statistics with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the spatial statistics engines to Python via the `_rust_spatial` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing classes and the `spatial` submodule.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`spatial`) as the public crate surface,
//!   alongside the crate-wide `logging` root.
//! - Define `#[pyclass]` wrappers for [`GetisOrd`](spatial::GetisOrd) and
//!   [`Moran`](spatial::Moran), a `#[pyfunction]` for
//!   [`global_morans_i`](spatial::global_morans_i), and the `#[pymodule]`
//!   initializer for `_rust_spatial`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in `spatial`; this file performs only
//!   FFI glue, input conversion, and error mapping.
//! - Python-visible types mirror the signatures of their Rust counterparts,
//!   with `weights` as an optional trailing keyword.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_rust_spatial.spatial` and are
//!   registered in `sys.modules` as `rust_spatial.spatial`.
//! - Errors from core Rust code are [`SpatialError`](spatial::SpatialError)
//!   values converted to `ValueError` at the PyO3 boundary.
//!
//! Cargo features
//! --------------
//! - `python-bindings`: build the PyO3 extension module.
//! - `obs_slog`: send engine logs to stderr (see [`logging`]).
//! - `parallel`: evaluate per-location G* scores on rayon.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in `spatial` and by the
//!   integration tests under `tests/`.

pub mod logging;
pub mod spatial;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    spatial::{GetisOrd, Moran, global_morans_i},
    utils::{as_f64_slice, extract_f64_array, extract_locality, extract_tail, reset_from_py},
};

/// GetisOrd — Python-facing wrapper for the Local Getis-Ord G* engine.
///
/// Constructed from Python via `GetisOrd(data, locality, weights=None)`:
/// - `data`: one-dimensional array-like of float64.
/// - `locality`: square 2-D float64 array with side `len(data)`.
/// - `weights`: must be `None` or empty; weighting raises `ValueError`.
#[cfg(feature = "python-bindings")]
#[pyclass(name = "GetisOrd", module = "rust_spatial.spatial")]
pub struct PyGetisOrd {
    inner: GetisOrd,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyGetisOrd {
    #[new]
    #[pyo3(
        signature = (data, locality, weights = None),
        text_signature = "(data, locality, /, weights=None)"
    )]
    pub fn new<'py>(
        py: Python<'py>, data: &Bound<'py, PyAny>, locality: &Bound<'py, PyAny>,
        weights: Option<Vec<f64>>,
    ) -> PyResult<Self> {
        let arr = extract_f64_array(py, data)?;
        let loc = extract_locality(locality)?;
        let inner = GetisOrd::new(as_f64_slice(&arr)?, weights.as_deref(), &loc.as_array())?;
        Ok(PyGetisOrd { inner })
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    /// G* z-score for location `i`.
    pub fn gstar(&self, i: usize) -> PyResult<f64> {
        Ok(self.inner.gstar(i)?)
    }

    /// G* z-scores for every location.
    pub fn gstar_all<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.gstar_all().into_pyarray(py)
    }

    /// Normal tail probabilities; `alternative` is "two-sided", "greater", or "less".
    #[pyo3(signature = (alternative = None))]
    pub fn p_values<'py>(
        &self, py: Python<'py>, alternative: Option<&str>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let tail = extract_tail(alternative)?;
        Ok(self.inner.p_values(tail).into_pyarray(py))
    }

    pub fn set_data<'py>(&mut self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<()> {
        reset_from_py(py, Some(data), None, |d, l| self.inner.reset(d, l))
    }

    pub fn set_locality<'py>(
        &mut self, py: Python<'py>, locality: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        reset_from_py(py, None, Some(locality), |d, l| self.inner.reset(d, l))
    }

    #[pyo3(signature = (data = None, locality = None))]
    pub fn reset<'py>(
        &mut self, py: Python<'py>, data: Option<&Bound<'py, PyAny>>,
        locality: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<()> {
        reset_from_py(py, data, locality, |d, l| self.inner.reset(d, l))
    }
}

/// Moran — Python-facing wrapper for the Global Moran's I engine.
///
/// Constructed from Python via `Moran(data, locality, weights=None)` with the
/// same argument rules as [`PyGetisOrd`].
#[cfg(feature = "python-bindings")]
#[pyclass(name = "Moran", module = "rust_spatial.spatial")]
pub struct PyMoran {
    inner: Moran,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyMoran {
    #[new]
    #[pyo3(
        signature = (data, locality, weights = None),
        text_signature = "(data, locality, /, weights=None)"
    )]
    pub fn new<'py>(
        py: Python<'py>, data: &Bound<'py, PyAny>, locality: &Bound<'py, PyAny>,
        weights: Option<Vec<f64>>,
    ) -> PyResult<Self> {
        let arr = extract_f64_array(py, data)?;
        let loc = extract_locality(locality)?;
        let inner = Moran::new(as_f64_slice(&arr)?, weights.as_deref(), &loc.as_array())?;
        Ok(PyMoran { inner })
    }

    pub fn __len__(&self) -> usize {
        self.inner.len()
    }

    #[getter]
    pub fn morans_i(&self) -> f64 {
        self.inner.morans_i()
    }

    #[getter]
    pub fn expectation(&self) -> f64 {
        self.inner.expectation()
    }

    #[getter]
    pub fn variance(&self) -> f64 {
        self.inner.variance()
    }

    #[getter]
    pub fn z_score(&self) -> f64 {
        self.inner.z_score()
    }

    #[pyo3(signature = (alternative = None))]
    pub fn p_value(&self, alternative: Option<&str>) -> PyResult<f64> {
        Ok(self.inner.p_value(extract_tail(alternative)?))
    }

    /// `(I, E, Var, Z)` evaluated once.
    pub fn outcome(&self) -> (f64, f64, f64, f64) {
        let o = self.inner.outcome();
        (o.morans_i(), o.expectation(), o.variance(), o.z_score())
    }

    pub fn set_data<'py>(&mut self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<()> {
        reset_from_py(py, Some(data), None, |d, l| self.inner.reset(d, l))
    }

    pub fn set_locality<'py>(
        &mut self, py: Python<'py>, locality: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        reset_from_py(py, None, Some(locality), |d, l| self.inner.reset(d, l))
    }

    #[pyo3(signature = (data = None, locality = None))]
    pub fn reset<'py>(
        &mut self, py: Python<'py>, data: Option<&Bound<'py, PyAny>>,
        locality: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<()> {
        reset_from_py(py, data, locality, |d, l| self.inner.reset(d, l))
    }
}

/// `global_morans_i(data, locality, weights=None) -> (I, Var, Z)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "global_morans_i", signature = (data, locality, weights = None))]
fn py_global_morans_i<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, locality: &Bound<'py, PyAny>,
    weights: Option<Vec<f64>>,
) -> PyResult<(f64, f64, f64)> {
    let arr = extract_f64_array(py, data)?;
    let loc = extract_locality(locality)?;
    let out = global_morans_i(as_f64_slice(&arr)?, weights.as_deref(), &loc.as_array())?;
    Ok((out.morans_i(), out.variance(), out.z_score()))
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_spatial<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let spatial_mod = PyModule::new(_py, "spatial")?;
    spatial(_py, m, &spatial_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_spatial.spatial", spatial_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn spatial<'py>(
    _py: Python, rust_spatial: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PyGetisOrd>()?;
    m.add_class::<PyMoran>()?;
    m.add_function(wrap_pyfunction!(py_global_morans_i, m)?)?;
    rust_spatial.add_submodule(m)?;
    Ok(())
}
