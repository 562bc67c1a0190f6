//! spatial::validation — shared input guards for spatial statistics.
//!
//! Purpose
//! -------
//! Centralize the shape and argument checks run at the top of every
//! constructor, mutator, and per-location query, so that the engines and the
//! stateless function report violations identically.
//!
//! Invariants & assumptions
//! ------------------------
//! - The locality matrix must be square with side equal to the number of
//!   observations: `rows == cols == data_len`.
//! - Per-observation weighting is not part of the algorithm; any non-empty
//!   weighting is rejected rather than silently ignored.
//! - Guards never inspect data values. Non-finite observations flow through
//!   the arithmetic unchanged.
//!
//! Conventions
//! -----------
//! - Guards are pure and allocation free. They only build a `SpatialError`
//!   on failure.
//! - Callers run guards *before* touching any owned state.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every branch of each guard, including the empty
//!   weighting slice accepted as "no weighting".

use crate::spatial::errors::{SpatialError, SpatialResult};

/// Check the dimension invariant `rows == cols == data_len`.
///
/// Errors
/// ------
/// - `SpatialError::DimensionMismatch { data_len, rows, cols }` when either
///   side of the matrix differs from `data_len`.
///
/// Examples
/// --------
/// ```rust
/// # use rust_spatial::spatial::validation::validate_dims;
/// assert!(validate_dims(3, (3, 3)).is_ok());
/// assert!(validate_dims(3, (3, 4)).is_err());
/// ```
pub fn validate_dims(data_len: usize, dims: (usize, usize)) -> SpatialResult<()> {
    let (rows, cols) = dims;
    if rows != data_len || cols != data_len {
        return Err(SpatialError::DimensionMismatch { data_len, rows, cols });
    }
    Ok(())
}

/// Reject per-observation weighting.
///
/// `None` and an empty slice both mean "unweighted". Anything else returns
/// `SpatialError::NotImplemented`.
pub fn validate_weights(weights: Option<&[f64]>) -> SpatialResult<()> {
    match weights {
        Some(w) if !w.is_empty() => Err(SpatialError::NotImplemented { feature: "weighted data" }),
        _ => Ok(()),
    }
}

/// Check that `index` addresses one of `len` locations.
#[inline]
pub fn validate_index(index: usize, len: usize) -> SpatialResult<()> {
    if index >= len {
        return Err(SpatialError::IndexOutOfRange { index, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `validate_dims` for square matching, non-square, and length mismatch.
    // - `validate_weights` for None, empty, and non-empty weightings.
    // - `validate_index` at and beyond the upper bound.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that a square matrix matching the data length is accepted.
    //
    // Given
    // -----
    // - data_len = 4, dims = (4, 4).
    //
    // Expect
    // ------
    // - `Ok(())`.
    fn validate_dims_matching_square_succeeds() {
        // Act
        let result = validate_dims(4, (4, 4));

        // Assert
        assert!(result.is_ok(), "Expected Ok(()), got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a non-square matrix is rejected even when the row count
    // matches the data length.
    //
    // Given
    // -----
    // - data_len = 4, dims = (4, 5).
    //
    // Expect
    // ------
    // - `DimensionMismatch` carrying (4, 4, 5).
    fn validate_dims_non_square_returns_dimension_mismatch() {
        // Act
        let result = validate_dims(4, (4, 5));

        // Assert
        assert_eq!(result, Err(SpatialError::DimensionMismatch { data_len: 4, rows: 4, cols: 5 }));
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a square matrix of the wrong size is rejected.
    //
    // Given
    // -----
    // - data_len = 3, dims = (4, 4).
    //
    // Expect
    // ------
    // - `DimensionMismatch` carrying (3, 4, 4).
    fn validate_dims_wrong_side_returns_dimension_mismatch() {
        // Act
        let result = validate_dims(3, (4, 4));

        // Assert
        match result {
            Err(SpatialError::DimensionMismatch { data_len: 3, rows: 4, cols: 4 }) => (),
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that absent and empty weightings are both treated as the
    // unweighted path.
    //
    // Given
    // -----
    // - `None` and `Some(&[])`.
    //
    // Expect
    // ------
    // - Both return `Ok(())`.
    fn validate_weights_none_or_empty_succeeds() {
        // Act / Assert
        assert!(validate_weights(None).is_ok());
        assert!(validate_weights(Some(&[][..])).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a non-empty weighting is rejected as not implemented.
    //
    // Given
    // -----
    // - `Some(&[1.0, 2.0])`.
    //
    // Expect
    // ------
    // - `NotImplemented`.
    fn validate_weights_non_empty_returns_not_implemented() {
        // Act
        let result = validate_weights(Some(&[1.0, 2.0][..]));

        // Assert
        match result {
            Err(SpatialError::NotImplemented { .. }) => (),
            other => panic!("expected NotImplemented, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the index guard at the last valid index and one past it.
    //
    // Given
    // -----
    // - len = 5, index = 4 and index = 5.
    //
    // Expect
    // ------
    // - 4 is accepted; 5 yields `IndexOutOfRange { index: 5, len: 5 }`.
    fn validate_index_bounds() {
        // Act / Assert
        assert!(validate_index(4, 5).is_ok());
        assert_eq!(validate_index(5, 5), Err(SpatialError::IndexOutOfRange { index: 5, len: 5 }));
    }
}
