//! # Analysis Configuration
//!
//! Parameters for one correlation dimension run: how many radii to sample,
//! how much of each end of the curve to leave out of the fit, how finely to
//! bin the distance histogram, and which engine to use.

use crate::engine::MemoryPolicy;
use crate::errors::{validate_positive, CorrDimResult};
use crate::regression::fit_window;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::analyzer::CorrelationDimensionAnalyzer`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrDimConfig {
    /// Number of log-spaced radii `K` on the curve
    pub num_radii: usize,
    /// Curve points excluded from the start of the fit
    pub discard_left: usize,
    /// Curve points excluded from the end of the fit
    pub discard_right: usize,
    /// Bins in the pairwise-distance histogram
    pub num_bins: usize,
    /// Engine selection
    pub policy: MemoryPolicy,
}

impl Default for CorrDimConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl CorrDimConfig {
    /// Default parameters with the stored distance matrix.
    pub fn full() -> Self {
        Self {
            num_radii: 25,
            discard_left: 5,
            discard_right: 2,
            num_bins: 25,
            policy: MemoryPolicy::Full,
        }
    }

    /// Default parameters with the streaming engine.
    pub fn low_memory() -> Self {
        Self {
            policy: MemoryPolicy::LowMemory,
            ..Self::full()
        }
    }

    /// Check the parameters before any pair is scanned.
    ///
    /// `K` and the bin count must be positive and each discard must stay
    /// below `K / 2`, which leaves at least one point to fit.
    pub fn validate(&self) -> CorrDimResult<()> {
        validate_positive(self.num_radii, "num_radii")?;
        validate_positive(self.num_bins, "num_bins")?;
        fit_window(self.num_radii, self.discard_left, self.discard_right)?;
        Ok(())
    }
}
