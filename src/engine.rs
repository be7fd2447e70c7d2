//! The correlation-sum capability shared by both engines.
//!
//! [`DistanceMatrixEngine`] trades `O(N²)` memory for cheap repeated queries;
//! [`StreamingCorrSumEngine`] keeps only the points and answers a whole batch
//! of radii in one pass. Callers pick one through [`MemoryPolicy`] and then
//! work against [`CorrelationSumEngine`].

use crate::curve::{self, CorrDimEstimate};
use crate::distance::DistanceRange;
use crate::errors::CorrDimResult;
use crate::histogram::Histogram;
use crate::matrix::DistanceMatrixEngine;
use crate::points::PointSet;
use crate::streaming::StreamingCorrSumEngine;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Memory/time trade-off used to pick an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemoryPolicy {
    /// Precompute and store all `N(N-1)/2` distances
    #[default]
    Full,
    /// Recompute distances on every pass, storing none
    LowMemory,
}

/// Distance statistics over an owned point set.
pub trait CorrelationSumEngine {
    /// Which memory policy this engine implements.
    fn policy(&self) -> MemoryPolicy;

    /// Number of points `N`.
    fn num_points(&self) -> usize;

    /// Point dimension `D`.
    fn dimension(&self) -> usize;

    /// Log range of the strictly positive pairwise distances.
    fn distance_range(&self) -> DistanceRange;

    /// Correlation sums `C(R)` for ascending linear radii.
    ///
    /// `C(R) = 2 · #{pairs with distance < R} / N²`.
    fn correlation_sums(&self, radii: &[f64]) -> CorrDimResult<Vec<f64>>;

    /// Equal-width histogram of all pairwise distances in linear units.
    fn histogram(&self, num_bins: usize) -> CorrDimResult<Histogram>;

    /// Sample `k` log-spaced radii, fit the slope after discarding points at
    /// both ends, and return the estimate with its curve.
    fn eval_corr_dim(
        &self,
        k: usize,
        discard_left: usize,
        discard_right: usize,
    ) -> CorrDimResult<CorrDimEstimate> {
        curve::evaluate(self, k, discard_left, discard_right)
    }
}

/// Build the engine selected by `policy`, moving the points into it.
pub fn build_engine(
    points: PointSet,
    policy: MemoryPolicy,
) -> CorrDimResult<Box<dyn CorrelationSumEngine>> {
    Ok(match policy {
        MemoryPolicy::Full => Box::new(DistanceMatrixEngine::new(points)?),
        MemoryPolicy::LowMemory => Box::new(StreamingCorrSumEngine::new(points)),
    })
}
