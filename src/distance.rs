//! Pairwise distances and the observed distance range.
//!
//! ## Domains
//!
//! For one-dimensional data the distance is `|x - y|`. For `D > 1` it is the
//! *squared* Euclidean distance: thresholding `d < R` is equivalent to
//! `d² < R²`, so the square root is only taken where a linear distance is
//! needed (histograms, range reporting). Every stored or compared value is in
//! the [`DistanceDomain`] of its metric, and radii are moved into that domain
//! with [`DistanceDomain::from_linear`] before comparison.

use crate::points::PointSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which domain a distance value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceDomain {
    /// Plain distance (absolute difference for scalar data)
    Linear,
    /// Squared Euclidean distance, square root deferred
    Squared,
}

impl DistanceDomain {
    /// Domain used for points of the given dimension.
    #[inline]
    pub fn for_dimension(dimension: usize) -> Self {
        if dimension == 1 {
            DistanceDomain::Linear
        } else {
            DistanceDomain::Squared
        }
    }

    /// Move a linear distance (e.g. a radius) into this domain.
    ///
    /// Negative radii square to zero so that no distance is ever below them.
    #[inline]
    pub fn from_linear(self, value: f64) -> f64 {
        match self {
            DistanceDomain::Linear => value,
            DistanceDomain::Squared => {
                let value = value.max(0.0);
                value * value
            }
        }
    }

    /// Move a value of this domain back to a linear distance.
    #[inline]
    pub fn to_linear(self, value: f64) -> f64 {
        match self {
            DistanceDomain::Linear => value,
            DistanceDomain::Squared => value.sqrt(),
        }
    }
}

/// L1 distance for scalars, squared Euclidean distance otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceMetric {
    dimension: usize,
    domain: DistanceDomain,
}

impl DistanceMetric {
    /// Metric for points of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            domain: DistanceDomain::for_dimension(dimension),
        }
    }

    /// Domain of the values returned by [`DistanceMetric::distance`].
    #[inline]
    pub fn domain(&self) -> DistanceDomain {
        self.domain
    }

    /// Point dimension this metric was built for.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Distance between two points, in [`DistanceMetric::domain`].
    #[inline]
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        debug_assert_eq!(a.len(), self.dimension);
        debug_assert_eq!(b.len(), self.dimension);
        match self.domain {
            DistanceDomain::Linear => (a[0] - b[0]).abs(),
            DistanceDomain::Squared => a
                .iter()
                .zip(b)
                .map(|(&x, &y)| {
                    let diff = x - y;
                    diff * diff
                })
                .sum(),
        }
    }
}

/// Visit every unordered pair `(i, j)`, `i > j`, in triangular-index order
/// (`i` ascending, then `j` ascending) and hand its distance to `f`.
#[inline]
pub fn for_each_pair_distance<F>(points: &PointSet, metric: &DistanceMetric, mut f: F)
where
    F: FnMut(f64),
{
    for i in 1..points.len() {
        let x = points.point(i);
        for j in 0..i {
            f(metric.distance(x, points.point(j)));
        }
    }
}

/// Natural logs of the smallest strictly positive and the largest pairwise
/// distance, both in linear units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceRange {
    /// `ln(min positive distance)`; `ln(f64::MAX)` when degenerate
    pub log_min: f64,
    /// `ln(max distance)`; NaN when degenerate
    pub log_max: f64,
}

impl DistanceRange {
    /// True when no strictly positive distance was observed.
    pub fn is_degenerate(&self) -> bool {
        !self.log_max.is_finite()
    }

    /// Smallest positive distance in linear units.
    pub fn min(&self) -> f64 {
        self.log_min.exp()
    }

    /// Largest distance in linear units.
    pub fn max(&self) -> f64 {
        self.log_max.exp()
    }
}

/// Running non-zero minimum and maximum over a stream of distances.
///
/// Values are fed in the metric's domain; [`RangeTracker::finish`] converts the
/// extremes to linear units before taking logs. Zero distances (coincident
/// points) never move either extreme.
#[derive(Debug, Clone)]
pub struct RangeTracker {
    domain: DistanceDomain,
    min: f64,
    max: f64,
}

impl RangeTracker {
    /// Empty tracker with the sentinel extremes.
    pub fn new(domain: DistanceDomain) -> Self {
        Self {
            domain,
            min: f64::MAX,
            max: -1.0,
        }
    }

    /// Observe one distance.
    #[inline]
    pub fn observe(&mut self, d: f64) {
        if d > 0.0 {
            if d > self.max {
                self.max = d;
            }
            if d < self.min {
                self.min = d;
            }
        }
    }

    /// True once a strictly positive distance has been observed.
    pub fn has_positive(&self) -> bool {
        self.max > 0.0
    }

    /// Convert the extremes to linear units and take logs.
    pub fn finish(&self) -> DistanceRange {
        let (min, max) = if self.has_positive() {
            (self.domain.to_linear(self.min), self.domain.to_linear(self.max))
        } else {
            (self.min, self.max)
        };
        DistanceRange {
            log_min: min.ln(),
            log_max: max.ln(),
        }
    }
}
