//! Equal-width histograms of the raw pairwise-distance distribution.
//!
//! Bins span `[min, max]` of the observed (strictly positive) distances in
//! linear units. Both engines bin through the same [`HistogramBuilder`], so a
//! distance equal to `max` lands in the last bin and a zero distance lands in
//! the first one; counts always sum to the number of pairs fed in.

use crate::distance::DistanceRange;
use crate::errors::{validate_positive, CorrDimError, CorrDimResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Left bin edges and per-bin counts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    /// Left edge of each bin, linearly spaced from the minimum distance
    pub bin_edges: Vec<f64>,
    /// Number of pairwise distances in each bin
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Number of bins.
    pub fn num_bins(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Width of each bin (zero when all positive distances are equal).
    pub fn bin_width(&self) -> f64 {
        match self.bin_edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }
}

/// Accumulates linear distances into equal-width bins.
#[derive(Debug, Clone)]
pub struct HistogramBuilder {
    min: f64,
    step: f64,
    histogram: Histogram,
}

impl HistogramBuilder {
    /// Bins spanning the given range.
    ///
    /// Fails on a zero bin count or a degenerate range.
    pub fn new(range: &DistanceRange, num_bins: usize, num_points: usize) -> CorrDimResult<Self> {
        validate_positive(num_bins, "num_bins")?;
        if range.is_degenerate() {
            return Err(CorrDimError::DegenerateData { num_points });
        }

        let min = range.min();
        let max = range.max();
        let step = (max - min) / num_bins as f64;
        let bin_edges = (0..num_bins).map(|i| min + i as f64 * step).collect();

        Ok(Self {
            min,
            step,
            histogram: Histogram {
                bin_edges,
                counts: vec![0; num_bins],
            },
        })
    }

    /// Bin index for a linear distance.
    ///
    /// `floor((d - min) / step)`, clamped to the valid bins. The float-to-int
    /// cast saturates, so negative offsets and the NaN produced by a zero
    /// step both map to bin 0.
    #[inline]
    pub fn bin_index(&self, d: f64) -> usize {
        let loc = ((d - self.min) / self.step) as usize;
        loc.min(self.histogram.counts.len() - 1)
    }

    /// Count one linear distance.
    #[inline]
    pub fn add(&mut self, d: f64) {
        let loc = self.bin_index(d);
        self.histogram.counts[loc] += 1;
    }

    /// Finished histogram.
    pub fn build(self) -> Histogram {
        self.histogram
    }
}
