//! Correlation-sum curves and their scaling-region fit.
//!
//! The curve samples `K` radii evenly in log space over `(log_min, log_max]`:
//! `log_r[i] = log_min + step * (i + 1)` with `step = (log_max - log_min) / K`.
//! Each radius is turned back into a linear distance, handed to an engine, and
//! the resulting correlation sums are logged. The slope of a least-squares
//! line through the trimmed middle of the curve is the dimension estimate; the
//! fitted line is then evaluated at every radius, discarded ones included.

use crate::distance::DistanceRange;
use crate::engine::CorrelationSumEngine;
use crate::errors::{validate_positive, CorrDimError, CorrDimResult};
use crate::regression::{fit_window, linear_least_squares, RegressionResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parallel arrays describing one log-log curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrSumCurve {
    /// `ln(R)` at each sampled radius
    pub log_r: Vec<f64>,
    /// `ln(C(R))` at each sampled radius
    pub log_cr: Vec<f64>,
    /// Fitted line evaluated at each `log_r`
    pub inter: Vec<f64>,
}

impl CorrSumCurve {
    /// Number of sampled radii `K`.
    pub fn len(&self) -> usize {
        self.log_r.len()
    }

    /// True for a curve without samples.
    pub fn is_empty(&self) -> bool {
        self.log_r.is_empty()
    }
}

/// Result of one correlation dimension evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrDimEstimate {
    /// Estimated correlation dimension (slope of the fit)
    pub dimension: f64,
    /// Slope and intercept of the fit
    pub fit: RegressionResult,
    /// First curve index used by the fit
    pub fit_start: usize,
    /// One past the last curve index used by the fit
    pub fit_end: usize,
    /// The sampled curve with its fitted overlay
    pub curve: CorrSumCurve,
}

/// `K` log radii spanning `(log_min, log_max]`.
///
/// The first radius sits one step above the smallest distance and the last
/// one at the largest distance.
pub fn log_radii(range: &DistanceRange, k: usize) -> Vec<f64> {
    let step = (range.log_max - range.log_min) / k as f64;
    (0..k)
        .map(|i| range.log_min + step * (i + 1) as f64)
        .collect()
}

/// Assemble a curve from sampled `ln(R)` and linear correlation sums, fit the
/// window left after the discards, and fill the overlay.
pub fn fit_curve(
    log_r: Vec<f64>,
    corr_sums: &[f64],
    discard_left: usize,
    discard_right: usize,
) -> CorrDimResult<CorrDimEstimate> {
    if corr_sums.len() != log_r.len() {
        return Err(CorrDimError::InsufficientData {
            required: log_r.len(),
            actual: corr_sums.len(),
        });
    }

    let window = fit_window(log_r.len(), discard_left, discard_right)?;
    let log_cr: Vec<f64> = corr_sums.iter().map(|c| c.ln()).collect();
    let fit = linear_least_squares(&log_r[window.clone()], &log_cr[window.clone()]);
    if !fit.is_finite() {
        log::warn!(
            "Scaling-region fit over curve points {}..{} is ill-conditioned (slope={}, intercept={})",
            window.start,
            window.end,
            fit.slope,
            fit.intercept
        );
    }
    let inter = log_r.iter().map(|&x| fit.predict(x)).collect();

    Ok(CorrDimEstimate {
        dimension: fit.slope,
        fit,
        fit_start: window.start,
        fit_end: window.end,
        curve: CorrSumCurve { log_r, log_cr, inter },
    })
}

/// Evaluate the correlation dimension with any engine.
///
/// Validates `k` and the discard counts before any pair is scanned, and
/// refuses degenerate data sets (no strictly positive distance).
pub fn evaluate<E: CorrelationSumEngine + ?Sized>(
    engine: &E,
    k: usize,
    discard_left: usize,
    discard_right: usize,
) -> CorrDimResult<CorrDimEstimate> {
    validate_positive(k, "num_radii")?;
    fit_window(k, discard_left, discard_right)?;

    let range = engine.distance_range();
    if range.is_degenerate() {
        return Err(CorrDimError::DegenerateData {
            num_points: engine.num_points(),
        });
    }

    let log_r = log_radii(&range, k);
    let radii: Vec<f64> = log_r.iter().map(|v| v.exp()).collect();
    let corr_sums = engine.correlation_sums(&radii)?;
    fit_curve(log_r, &corr_sums, discard_left, discard_right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_log_radii_spacing() {
        let range = DistanceRange {
            log_min: 0.0,
            log_max: 4.0f64.ln(),
        };
        let radii = log_radii(&range, 4);
        assert_eq!(radii.len(), 4);
        let step = 4.0f64.ln() / 4.0;
        for (i, r) in radii.iter().enumerate() {
            assert_approx_eq!(*r, step * (i + 1) as f64, 1e-12);
        }
        assert_approx_eq!(*radii.last().unwrap(), range.log_max, 1e-12);
        assert!(radii[0] > range.log_min);
    }

    #[test]
    fn test_fit_curve_window_and_overlay() {
        // K=10, discard 2 on the left and 1 on the right: indices 2..9 are fitted.
        let log_r: Vec<f64> = (0..10).map(|i| i as f64 * 0.5 - 3.0).collect();
        let mut corr_sums: Vec<f64> = log_r.iter().map(|&x| (1.5 * x - 0.25).exp()).collect();
        // Perturb the discarded ends only.
        corr_sums[0] *= 10.0;
        corr_sums[1] *= 0.1;
        corr_sums[9] *= 3.0;

        let estimate = fit_curve(log_r.clone(), &corr_sums, 2, 1).unwrap();
        assert_eq!(estimate.fit_start, 2);
        assert_eq!(estimate.fit_end, 9);
        assert_approx_eq!(estimate.dimension, 1.5, 1e-10);
        assert_approx_eq!(estimate.fit.intercept, -0.25, 1e-10);

        let curve = &estimate.curve;
        assert_eq!(curve.len(), 10);
        assert_eq!(curve.inter.len(), 10);
        for (x, fitted) in log_r.iter().zip(&curve.inter) {
            assert_approx_eq!(*fitted, 1.5 * x - 0.25, 1e-10);
        }
    }

    #[test]
    fn test_fit_curve_rejects_oversized_discards() {
        let log_r = vec![0.0, 1.0, 2.0, 3.0];
        let sums = vec![0.1, 0.2, 0.3, 0.4];
        assert!(matches!(
            fit_curve(log_r, &sums, 2, 0),
            Err(CorrDimError::InvalidParameter { .. })
        ));
    }
}
