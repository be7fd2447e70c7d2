//! Least-squares line fitting over the scaling region of a curve.

use crate::errors::{CorrDimError, CorrDimResult};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coefficients of `y ≈ slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegressionResult {
    /// Slope `c0`; the correlation dimension when fitted to a log-log curve
    pub slope: f64,
    /// Intercept `c1`
    pub intercept: f64,
}

impl RegressionResult {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// True when both coefficients are finite.
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// Ordinary least squares via the closed-form normal equations.
///
/// With `n` points and the sums `Σx`, `Σy`, `Σxy`, `Σx²`:
///
/// - slope `c0 = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)`
/// - intercept `c1 = (Σx²Σy − ΣxΣxy) / (nΣx² − (Σx)²)`
///
/// Sums accumulate in index order. When the `x` values have zero variance
/// (`nΣx² = (Σx)²`) the coefficients come out NaN or infinite; no error is
/// raised, callers inspect [`RegressionResult::is_finite`].
///
/// # Example
/// ```rust
/// use fractal_corrdim::regression::linear_least_squares;
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [3.0, 5.0, 7.0, 9.0];
/// let fit = linear_least_squares(&x, &y);
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.intercept - 3.0).abs() < 1e-12);
/// ```
pub fn linear_least_squares(x: &[f64], y: &[f64]) -> RegressionResult {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len().min(y.len()) as f64;

    let mut x_sum = 0.0;
    let mut y_sum = 0.0;
    let mut xy_sum = 0.0;
    let mut x_sum2 = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        x_sum += xi;
        y_sum += yi;
        xy_sum += xi * yi;
        x_sum2 += xi * xi;
    }

    let denominator = n * x_sum2 - x_sum * x_sum;
    RegressionResult {
        slope: (n * xy_sum - x_sum * y_sum) / denominator,
        intercept: (x_sum2 * y_sum - x_sum * xy_sum) / denominator,
    }
}

/// Index window left after discarding points at both ends of a curve of
/// length `len`.
///
/// Each discard count must be strictly less than `len / 2` (integer halving),
/// which keeps at least two points in the window.
pub fn fit_window(len: usize, discard_left: usize, discard_right: usize) -> CorrDimResult<Range<usize>> {
    let half = len / 2;
    for (name, discard) in [("discard_left", discard_left), ("discard_right", discard_right)] {
        if discard >= half {
            return Err(CorrDimError::InvalidParameter {
                parameter: name.to_string(),
                value: discard as f64,
                constraint: format!("< {} (half the number of curve points)", half),
            });
        }
    }
    Ok(discard_left..len - discard_right)
}

/// Fit `y` against `x` over the window that survives the discards.
pub fn fit_scaling_region(
    x: &[f64],
    y: &[f64],
    discard_left: usize,
    discard_right: usize,
) -> CorrDimResult<RegressionResult> {
    if x.len() != y.len() {
        return Err(CorrDimError::InsufficientData {
            required: x.len(),
            actual: y.len(),
        });
    }
    let window = fit_window(x.len(), discard_left, discard_right)?;
    Ok(linear_least_squares(&x[window.clone()], &y[window]))
}
