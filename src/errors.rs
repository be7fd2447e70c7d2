//! Error types and validation functions for correlation dimension analysis.
//!
//! The numeric core works on pre-validated inputs. Everything that can be
//! checked up front (point buffers, curve parameters, bin counts, allocation
//! sizes) is checked here and reported through [`CorrDimError`].

use std::sync::Arc;
use thiserror::Error;

/// Error types for correlation dimension operations.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum CorrDimError {
    /// Not enough points (or values) for the requested operation.
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData {
        /// Minimum required count
        required: usize,
        /// Actual count provided
        actual: usize,
    },

    /// Invalid parameter value.
    #[error("Invalid parameter: {parameter} = {value}, expected {constraint}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Invalid value provided
        value: f64,
        /// Valid range or constraint description
        constraint: String,
    },

    /// Flat buffer length does not match the requested dimensionality.
    #[error("Dimension mismatch: buffer of {len} values is not a multiple of dimension {dimension}")]
    DimensionMismatch {
        /// Buffer length
        len: usize,
        /// Requested point dimension
        dimension: usize,
    },

    /// Every pairwise distance is zero, so no log-space range exists.
    #[error("Degenerate data: {num_points} points have no strictly positive pairwise distance")]
    DegenerateData {
        /// Number of points in the set
        num_points: usize,
    },

    /// Numerical computation error.
    #[error("Numerical computation failed: {reason}")]
    NumericalError {
        /// Detailed reason for the failure
        reason: String,
    },

    /// Malformed numeric input.
    #[error("Parse error at value {index}: '{token}'")]
    ParseError {
        /// Zero-based position of the offending value
        index: usize,
        /// The token that failed to parse
        token: String,
    },

    /// I/O operation error.
    #[error("I/O operation failed: {operation}")]
    IoError {
        /// I/O operation that failed
        operation: String,
        /// Underlying error if available
        #[source]
        source: Option<Arc<std::io::Error>>,
    },
}

impl CorrDimError {
    /// Wrap an [`std::io::Error`] with a description of the failed operation.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        CorrDimError::IoError {
            operation: operation.into(),
            source: Some(Arc::new(source)),
        }
    }
}

/// Result type for correlation dimension operations.
pub type CorrDimResult<T> = Result<T, CorrDimError>;

/// Validates that data has sufficient length for analysis.
///
/// # Example
/// ```rust
/// use fractal_corrdim::errors::validate_data_length;
///
/// let data = vec![1.0, 2.0, 3.0];
/// assert!(validate_data_length(&data, 2).is_ok());
/// assert!(validate_data_length(&data, 5).is_err());
/// ```
pub fn validate_data_length(data: &[f64], min_required: usize) -> CorrDimResult<()> {
    if data.len() < min_required {
        Err(CorrDimError::InsufficientData {
            required: min_required,
            actual: data.len(),
        })
    } else {
        Ok(())
    }
}

/// Validates that a parameter is within `[min, max]`.
///
/// # Example
/// ```rust
/// use fractal_corrdim::errors::validate_parameter;
///
/// assert!(validate_parameter(0.5, 0.0, 1.0, "x0").is_ok());
/// assert!(validate_parameter(1.5, 0.0, 1.0, "x0").is_err());
/// ```
pub fn validate_parameter(value: f64, min: f64, max: f64, name: &str) -> CorrDimResult<()> {
    if value.is_nan() {
        return Err(CorrDimError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: "must not be NaN".to_string(),
        });
    }

    if min.is_nan() || max.is_nan() || min > max {
        return Err(CorrDimError::NumericalError {
            reason: format!(
                "Invalid bounds for parameter {}: min={}, max={}",
                name, min, max
            ),
        });
    }

    if value < min || value > max {
        Err(CorrDimError::InvalidParameter {
            parameter: name.to_string(),
            value,
            constraint: format!("[{}, {}]", min, max),
        })
    } else {
        Ok(())
    }
}

/// Validates that a count is strictly positive.
pub fn validate_positive(value: usize, name: &str) -> CorrDimResult<()> {
    if value == 0 {
        Err(CorrDimError::InvalidParameter {
            parameter: name.to_string(),
            value: 0.0,
            constraint: "must be positive".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Validates that all values in a slice are finite.
///
/// Returns on the first non-finite value and reports its index.
///
/// # Example
/// ```rust
/// use fractal_corrdim::errors::validate_all_finite;
///
/// assert!(validate_all_finite(&[1.0, 2.0], "coords").is_ok());
/// assert!(validate_all_finite(&[1.0, f64::NAN], "coords").is_err());
/// ```
pub fn validate_all_finite(data: &[f64], name: &str) -> CorrDimResult<()> {
    if let Some((i, &value)) = data.iter().enumerate().find(|(_, &v)| !v.is_finite()) {
        let value_desc = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };

        return Err(CorrDimError::NumericalError {
            reason: format!(
                "{} contains non-finite value at index {}: {}",
                name, i, value_desc
            ),
        });
    }

    Ok(())
}

/// Refuses allocation requests above the safety limit.
///
/// The full engine allocates `N(N-1)/2` distances up front. For large `N`
/// that request is refused here instead of aborting the process.
///
/// # Example
/// ```rust
/// use fractal_corrdim::errors::validate_allocation_size;
///
/// assert!(validate_allocation_size(1000, "test").is_ok());
/// assert!(validate_allocation_size(usize::MAX, "test").is_err());
/// ```
pub fn validate_allocation_size(size: usize, operation: &str) -> CorrDimResult<()> {
    // 8 GiB
    const MAX_SAFE_ALLOCATION: u64 = 1 << 33;

    if size as u64 > MAX_SAFE_ALLOCATION {
        return Err(CorrDimError::NumericalError {
            reason: format!(
                "Attempted allocation of {} bytes ({:.2} GB) in '{}' exceeds safety limit of {} bytes. \
                 Use the low-memory engine for point sets of this size.",
                size,
                size as f64 / (1024.0 * 1024.0 * 1024.0),
                operation,
                MAX_SAFE_ALLOCATION
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_data_length() {
        let data = vec![1.0, 2.0];
        match validate_data_length(&data, 5) {
            Err(CorrDimError::InsufficientData { required, actual }) => {
                assert_eq!(required, 5);
                assert_eq!(actual, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }
        assert!(validate_data_length(&data, 2).is_ok());
    }

    #[test]
    fn test_validate_parameter_bounds() {
        assert!(validate_parameter(0.0, 0.0, 1.0, "x0").is_ok());
        assert!(validate_parameter(1.0, 0.0, 1.0, "x0").is_ok());

        match validate_parameter(2.5, 0.0, 2.0, "mu") {
            Err(CorrDimError::InvalidParameter {
                parameter,
                value,
                constraint,
            }) => {
                assert_eq!(parameter, "mu");
                assert_eq!(value, 2.5);
                assert_eq!(constraint, "[0, 2]");
            }
            _ => panic!("Expected InvalidParameter error"),
        }
    }

    #[test]
    fn test_validate_parameter_nan() {
        assert!(matches!(
            validate_parameter(f64::NAN, 0.0, 1.0, "x0"),
            Err(CorrDimError::InvalidParameter { .. })
        ));
        assert!(matches!(
            validate_parameter(0.5, 1.0, 0.0, "x0"),
            Err(CorrDimError::NumericalError { .. })
        ));
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(1, "num_bins").is_ok());
        assert!(matches!(
            validate_positive(0, "num_bins"),
            Err(CorrDimError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_validate_all_finite_reports_index() {
        match validate_all_finite(&[1.0, 2.0, f64::NEG_INFINITY], "coords") {
            Err(CorrDimError::NumericalError { reason }) => {
                assert!(reason.contains("index 2"));
                assert!(reason.contains("-Infinity"));
            }
            _ => panic!("Expected NumericalError"),
        }
        assert!(validate_all_finite(&[], "coords").is_ok());
    }

    #[test]
    fn test_error_display_formatting() {
        let err = CorrDimError::DegenerateData { num_points: 7 };
        let msg = format!("{}", err);
        assert!(msg.contains("Degenerate data"));
        assert!(msg.contains('7'));

        let err = CorrDimError::DimensionMismatch { len: 5, dimension: 2 };
        assert!(format!("{}", err).contains("not a multiple of dimension 2"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = CorrDimError::io(
            "open curve dump",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(format!("{}", err).contains("open curve dump"));
    }
}
