//! Full engine: the lower-triangular distance matrix, computed once.
//!
//! Pair `(i, j)` with `i > j` is stored at `((i - 1) * i) / 2 + j`, giving
//! exactly `N(N-1)/2` entries with no diagonal and no mirrored half. Entries
//! are in the metric's domain (squared for `D > 1`). Construction is
//! `O(N²)`; each [`DistanceMatrixEngine::corr_sum`] query is another `O(N²)`
//! scan over the stored values, so a `K`-point curve costs `O(K·N²)`.

use crate::distance::{for_each_pair_distance, DistanceMetric, DistanceRange, RangeTracker};
use crate::engine::{CorrelationSumEngine, MemoryPolicy};
use crate::errors::{validate_allocation_size, CorrDimResult};
use crate::histogram::{Histogram, HistogramBuilder};
use crate::points::PointSet;

/// Correlation sums from a stored distance matrix.
#[derive(Debug, Clone)]
pub struct DistanceMatrixEngine {
    points: PointSet,
    metric: DistanceMetric,
    distances: Vec<f64>,
    range: DistanceRange,
    /// `N²`, the correlation-sum denominator
    norm: f64,
}

impl DistanceMatrixEngine {
    /// Compute and store all pairwise distances, tracking their range.
    ///
    /// Fails only when the matrix would exceed the allocation safety limit.
    /// A set whose distances are all zero still builds; its range is
    /// degenerate and curve/histogram evaluation will refuse it.
    pub fn new(points: PointSet) -> CorrDimResult<Self> {
        let num_pairs = points.num_pairs();
        validate_allocation_size(
            num_pairs.saturating_mul(std::mem::size_of::<f64>()),
            "distance matrix",
        )?;

        let metric = DistanceMetric::new(points.dimension());
        let mut distances = Vec::with_capacity(num_pairs);
        let mut tracker = RangeTracker::new(metric.domain());
        for_each_pair_distance(&points, &metric, |d| {
            tracker.observe(d);
            distances.push(d);
        });
        let range = tracker.finish();

        if range.is_degenerate() {
            log::warn!(
                "All {} pairwise distances of {} points are zero; distance range is degenerate",
                num_pairs,
                points.len()
            );
        } else {
            log::debug!(
                "Distance matrix: {} points, dim {}, {} pairs, ln(min)={:.6}, ln(max)={:.6}",
                points.len(),
                points.dimension(),
                num_pairs,
                range.log_min,
                range.log_max
            );
        }

        let n = points.len() as f64;
        Ok(Self {
            points,
            metric,
            distances,
            range,
            norm: n * n,
        })
    }

    /// Offset of pair `(i, j)`, `i > j`, in the triangular storage.
    #[inline]
    pub fn triangular_index(i: usize, j: usize) -> usize {
        debug_assert!(i > j, "triangular index requires i > j");
        ((i - 1) * i) / 2 + j
    }

    /// Stored distance between points `i` and `j` (either order), in the
    /// metric's domain. Zero on the diagonal.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        match i.cmp(&j) {
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Greater => self.distances[Self::triangular_index(i, j)],
            std::cmp::Ordering::Less => self.distances[Self::triangular_index(j, i)],
        }
    }

    /// All stored distances in triangular-index order.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Metric used to fill the matrix.
    pub fn metric(&self) -> &DistanceMetric {
        &self.metric
    }

    /// The owned points.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// Correlation sum at linear radius `r`.
    ///
    /// Counts stored pairs strictly closer than `r` (compared in the stored
    /// domain), doubles the count for both orderings, and divides by `N²`.
    /// Self-pairs sit in the denominator but never in the numerator.
    pub fn corr_sum(&self, r: f64) -> f64 {
        let threshold = self.metric.domain().from_linear(r);
        let count = self.distances.iter().filter(|&&d| d < threshold).count();
        (2 * count) as f64 / self.norm
    }
}

impl CorrelationSumEngine for DistanceMatrixEngine {
    fn policy(&self) -> MemoryPolicy {
        MemoryPolicy::Full
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
        Ok(radii.iter().map(|&r| self.corr_sum(r)).collect())
    }

    fn histogram(&self, num_bins: usize) -> CorrDimResult<Histogram> {
        let mut builder = HistogramBuilder::new(&self.range, num_bins, self.points.len())?;
        let domain = self.metric.domain();
        for &d in &self.distances {
            builder.add(domain.to_linear(d));
        }
        Ok(builder.build())
    }
}
