//! # Correlation Dimension Analyzer
//!
//! [`CorrelationDimensionAnalyzer`] is the one-call entry point: it validates
//! a [`CorrDimConfig`], builds the engine its memory policy selects, evaluates
//! the correlation-sum curve and the distance histogram, and reports timings
//! and the estimated memory footprint through the `log` facade.
//!
//! ## Usage Example
//!
//! ```rust
//! use fractal_corrdim::{CorrDimConfig, CorrelationDimensionAnalyzer, PointSet};
//!
//! # fn main() -> Result<(), fractal_corrdim::CorrDimError> {
//! let values: Vec<f64> = (0..200).map(|i| i as f64 * 0.01).collect();
//! let analyzer = CorrelationDimensionAnalyzer::new(CorrDimConfig::low_memory());
//! let analysis = analyzer.analyze(PointSet::from_scalars(values)?)?;
//! assert!((analysis.correlation_dimension() - 1.0).abs() < 0.1);
//! # Ok(())
//! # }
//! ```

use crate::config::CorrDimConfig;
use crate::engine::{build_engine, CorrelationSumEngine};
use crate::errors::CorrDimResult;
use crate::generators::{generate_points, GeneratorConfig, PointSource};
use crate::points::PointSet;
use crate::results::{CorrDimAnalysis, MemoryFootprint};
use std::time::Instant;

/// Runs the full estimation pipeline for one configuration.
#[derive(Debug, Clone, Default)]
pub struct CorrelationDimensionAnalyzer {
    config: CorrDimConfig,
}

impl CorrelationDimensionAnalyzer {
    /// Analyzer with the given configuration.
    pub fn new(config: CorrDimConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &CorrDimConfig {
        &self.config
    }

    /// Replace the configuration.
    pub fn set_config(&mut self, config: CorrDimConfig) {
        self.config = config;
    }

    /// Estimate the correlation dimension of `points`, consuming them.
    ///
    /// The configuration is validated before the engine is built, so bad
    /// parameters never cost an `O(N²)` scan.
    pub fn analyze(&self, points: PointSet) -> CorrDimResult<CorrDimAnalysis> {
        let config = &self.config;
        config.validate()?;

        let num_points = points.len();
        let dimension = points.dimension();
        let memory = MemoryFootprint::estimate(num_points, dimension, config);
        log::info!(
            "Analysing {} points of dimension {} with {:?} engine (K={}, discard {}/{}, {} bins), memory {}",
            num_points,
            dimension,
            config.policy,
            config.num_radii,
            config.discard_left,
            config.discard_right,
            config.num_bins,
            memory
        );

        let start = Instant::now();
        let engine = build_engine(points, config.policy)?;
        let construction_time = start.elapsed();
        log::info!("Engine construction took {:.6} s", construction_time.as_secs_f64());

        let start = Instant::now();
        let estimate = engine.eval_corr_dim(config.num_radii, config.discard_left, config.discard_right)?;
        let histogram = engine.histogram(config.num_bins)?;
        let evaluation_time = start.elapsed();
        log::info!(
            "Evaluation took {:.6} s; correlation dimension = {:.6}",
            evaluation_time.as_secs_f64(),
            estimate.dimension
        );

        Ok(CorrDimAnalysis {
            config: config.clone(),
            num_points,
            dimension,
            distance_range: engine.distance_range(),
            estimate,
            histogram,
            memory,
            construction_time,
            evaluation_time,
        })
    }

    /// Generate points from `source` and analyse them.
    pub fn analyze_source(
        &self,
        source: &PointSource,
        generator: &GeneratorConfig,
    ) -> CorrDimResult<CorrDimAnalysis> {
        self.config.validate()?;
        let start = Instant::now();
        let points = generate_points(source, generator)?;
        log::info!("Point generation took {:.6} s", start.elapsed().as_secs_f64());
        self.analyze(points)
    }
}
