#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
use crate::spatial::{errors::SpatialResult, inference::Tail, locality::Locality};

/// Accept a 1-D numpy array, a pandas Series, or any float sequence.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Borrow the contiguous slice behind an extracted 1-D array.
#[cfg(feature = "python-bindings")]
pub fn as_f64_slice<'a>(arr: &'a PyReadonlyArray1<'_, f64>) -> PyResult<&'a [f64]> {
    arr.as_slice().map_err(|_| PyValueError::new_err("data must be a contiguous float64 array"))
}

/// Accept a 2-D numpy array or a DataFrame-like object exposing `to_numpy`.
#[cfg(feature = "python-bindings")]
pub fn extract_locality<'py>(raw: &Bound<'py, PyAny>) -> PyResult<PyReadonlyArray2<'py, f64>> {
    if let Ok(arr_ro) = raw.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro);
    }
    if let Ok(obj) = raw.call_method("to_numpy", (), None) {
        if let Ok(arr_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(arr_ro);
        }
    }
    Err(pyo3::exceptions::PyTypeError::new_err(
        "locality must be a 2-D numpy.ndarray or pandas.DataFrame of float64",
    ))
}

/// Parse the `alternative` keyword used by the p-value methods.
#[cfg(feature = "python-bindings")]
pub fn extract_tail(alternative: Option<&str>) -> PyResult<Tail> {
    alternative.map_or(Ok(Tail::default()), |s| s.parse::<Tail>().map_err(PyValueError::new_err))
}

/// Convert optional Python inputs and hand them to an engine `reset`.
///
/// The extracted buffers stay borrowed for the duration of `apply`, so the
/// engine copies straight out of NumPy memory.
#[cfg(feature = "python-bindings")]
pub fn reset_from_py<'py, F>(
    py: Python<'py>, data: Option<&Bound<'py, PyAny>>, locality: Option<&Bound<'py, PyAny>>,
    apply: F,
) -> PyResult<()>
where
    F: FnOnce(Option<&[f64]>, Option<&dyn Locality>) -> SpatialResult<()>,
{
    let data_arr = data.map(|d| extract_f64_array(py, d)).transpose()?;
    let locality_arr = locality.map(extract_locality).transpose()?;

    let data_slice = data_arr.as_ref().map(as_f64_slice).transpose()?;
    let locality_view = locality_arr.as_ref().map(|l| l.as_array());
    apply(data_slice, locality_view.as_ref().map(|v| v as &dyn Locality))?;
    Ok(())
}
