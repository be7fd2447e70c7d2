//! Low-memory engine: distances are recomputed on every pass, never stored.
//!
//! ## Batch threshold counts
//!
//! A `K`-point curve needs `K` threshold counts. Instead of `K` separate scans,
//! [`StreamingCorrSumEngine::batch_corr_sum`] makes a single pass over all
//! pairs. With radii sorted ascending, a pair at distance `d` is below every
//! radius from the first `k` with `d < radii[k]` onwards. The pass records only
//! that first index (a binary search over the thresholds) in a per-index hit
//! array; one prefix accumulation after the pass turns hits into counts,
//! `count[k] = hits[0] + ... + hits[k]`. Total cost is `O(N² log K + K)` with
//! `O(K)` extra memory.

use crate::distance::{for_each_pair_distance, DistanceMetric, DistanceRange, RangeTracker};
use crate::engine::{CorrelationSumEngine, MemoryPolicy};
use crate::errors::{CorrDimError, CorrDimResult};
use crate::histogram::{Histogram, HistogramBuilder};
use crate::points::PointSet;

/// Correlation sums computed by streaming over all pairs.
#[derive(Debug, Clone)]
pub struct StreamingCorrSumEngine {
    points: PointSet,
    metric: DistanceMetric,
    range: DistanceRange,
    norm: f64,
}

impl StreamingCorrSumEngine {
    /// Scan all pairs once for the distance range, keeping nothing else.
    pub fn new(points: PointSet) -> Self {
        let metric = DistanceMetric::new(points.dimension());
        let mut tracker = RangeTracker::new(metric.domain());
        for_each_pair_distance(&points, &metric, |d| tracker.observe(d));
        let range = tracker.finish();

        if range.is_degenerate() {
            log::warn!(
                "All pairwise distances of {} points are zero; distance range is degenerate",
                points.len()
            );
        } else {
            log::debug!(
                "Streaming scan: {} points, dim {}, ln(min)={:.6}, ln(max)={:.6}",
                points.len(),
                points.dimension(),
                range.log_min,
                range.log_max
            );
        }

        let n = points.len() as f64;
        Self {
            points,
            metric,
            range,
            norm: n * n,
        }
    }

    /// The owned points.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Threshold counts for a batch of ascending linear radii in one pass.
    ///
    /// Returns `count[k]`, the number of unordered pairs strictly closer than
    /// `radii[k]`.
    pub fn batch_counts(&self, radii: &[f64]) -> CorrDimResult<Vec<usize>> {
        if let Some(k) = radii.iter().position(|r| r.is_nan()) {
            return Err(CorrDimError::InvalidParameter {
                parameter: format!("radii[{}]", k),
                value: radii[k],
                constraint: "must not be NaN".to_string(),
            });
        }
        if let Some(k) = radii.windows(2).position(|w| w[0] > w[1]) {
            return Err(CorrDimError::InvalidParameter {
                parameter: format!("radii[{}]", k + 1),
                value: radii[k + 1],
                constraint: "radii must be sorted ascending".to_string(),
            });
        }

        let domain = self.metric.domain();
        let thresholds: Vec<f64> = radii.iter().map(|&r| domain.from_linear(r)).collect();
        let mut hits = vec![0usize; thresholds.len()];
        for_each_pair_distance(&self.points, &self.metric, |d| {
            let first = thresholds.partition_point(|&t| t <= d);
            if let Some(slot) = hits.get_mut(first) {
                *slot += 1;
            }
        });

        let mut running = 0;
        Ok(hits
            .into_iter()
            .map(|h| {
                running += h;
                running
            })
            .collect())
    }

    /// Correlation sums `C(R) = 2 · count / N²` for ascending linear radii.
    pub fn batch_corr_sum(&self, radii: &[f64]) -> CorrDimResult<Vec<f64>> {
        Ok(self
            .batch_counts(radii)?
            .into_iter()
            .map(|count| (2 * count) as f64 / self.norm)
            .collect())
    }
}

impl CorrelationSumEngine for StreamingCorrSumEngine {
    fn policy(&self) -> MemoryPolicy {
        MemoryPolicy::LowMemory
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }

    fn dimension(&self) -> usize {
        self.points.dimension()
    }

    fn distance_range(&self) -> DistanceRange {
        self.range
    }

    fn correlation_sums(&self, radii: &[f64]) -> CorrDimResult<Vec<f64>> {
        self.batch_corr_sum(radii)
    }

    fn histogram(&self, num_bins: usize) -> CorrDimResult<Histogram> {
        let mut builder = HistogramBuilder::new(&self.range, num_bins, self.points.len())?;
        let domain = self.metric.domain();
        for_each_pair_distance(&self.points, &self.metric, |d| builder.add(domain.to_linear(d)));
        Ok(builder.build())
    }
}
