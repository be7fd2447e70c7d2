//! # Analysis Results Structures
//!
//! Outputs of one [`crate::analyzer::CorrelationDimensionAnalyzer`] run and
//! the memory estimate reported alongside them.

use crate::config::CorrDimConfig;
use crate::curve::CorrDimEstimate;
use crate::distance::DistanceRange;
use crate::engine::MemoryPolicy;
use crate::histogram::Histogram;
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete result of analysing one point set.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrDimAnalysis {
    /// Configuration the run used
    pub config: CorrDimConfig,
    /// Number of points `N`
    pub num_points: usize,
    /// Point dimension `D`
    pub dimension: usize,
    /// Observed range of the positive pairwise distances
    pub distance_range: DistanceRange,
    /// Slope estimate and curve
    pub estimate: CorrDimEstimate,
    /// Pairwise-distance histogram
    pub histogram: Histogram,
    /// Estimated peak memory of the run
    pub memory: MemoryFootprint,
    /// Time spent building the engine
    pub construction_time: Duration,
    /// Time spent on the curve, fit and histogram
    pub evaluation_time: Duration,
}

impl CorrDimAnalysis {
    /// The estimated correlation dimension.
    pub fn correlation_dimension(&self) -> f64 {
        self.estimate.dimension
    }
}

/// Byte counts of the buffers one run holds at its peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryFootprint {
    /// Point coordinates, `N·D` doubles
    pub points: usize,
    /// Triangular distance matrix, zero for the streaming engine
    pub distance_matrix: usize,
    /// Histogram counts and bin edges
    pub histogram: usize,
    /// `log_r`, `log_cr` and fitted overlay
    pub curves: usize,
}

impl MemoryFootprint {
    /// Estimate the footprint before running anything.
    pub fn estimate(num_points: usize, dimension: usize, config: &CorrDimConfig) -> Self {
        const F64: usize = std::mem::size_of::<f64>();
        let distance_matrix = match config.policy {
            MemoryPolicy::Full => {
                num_points.saturating_mul(num_points.saturating_sub(1)) / 2 * F64
            }
            MemoryPolicy::LowMemory => 0,
        };
        Self {
            points: num_points.saturating_mul(dimension).saturating_mul(F64),
            distance_matrix,
            histogram: config.num_bins * (std::mem::size_of::<usize>() + F64),
            curves: 3 * config.num_radii * F64,
        }
    }

    /// Sum of all parts in bytes.
    pub fn total(&self) -> usize {
        self.points
            .saturating_add(self.distance_matrix)
            .saturating_add(self.histogram)
            .saturating_add(self.curves)
    }
}

impl fmt::Display for MemoryFootprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total();
        if total < 1 << 10 {
            write!(f, "~{} B", total)
        } else if total < 1 << 20 {
            write!(f, "~{} kB", total >> 10)
        } else {
            write!(f, "~{} MB", total >> 20)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_parts() {
        let config = CorrDimConfig::full();
        let mem = MemoryFootprint::estimate(2000, 1, &config);
        assert_eq!(mem.points, 16_000);
        assert_eq!(mem.distance_matrix, 1999 * 1000 * 8);
        assert_eq!(mem.histogram, 25 * (std::mem::size_of::<usize>() + 8));
        assert_eq!(mem.curves, 3 * 25 * 8);
        assert_eq!(format!("{}", mem), format!("~{} MB", mem.total() >> 20));

        let low = MemoryFootprint::estimate(2000, 1, &CorrDimConfig::low_memory());
        assert_eq!(low.distance_matrix, 0);
        assert_eq!(format!("{}", low), format!("~{} kB", low.total() >> 10));
    }

    #[test]
    fn test_footprint_small_units() {
        let config = CorrDimConfig {
            num_radii: 4,
            discard_left: 1,
            discard_right: 1,
            num_bins: 2,
            policy: MemoryPolicy::LowMemory,
        };
        let mem = MemoryFootprint::estimate(10, 2, &config);
        assert_eq!(mem.total(), 160 + 2 * (std::mem::size_of::<usize>() + 8) + 96);
        assert!(format!("{}", mem).ends_with(" B"));
    }
}
