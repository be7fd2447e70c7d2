//! # Correlation Dimension Estimation
//!
//! Grassberger–Procaccia correlation dimension of point sets: chaotic map
//! trajectories, delay-embedded series, or any cloud of points in `D`
//! dimensions.
//!
//! For `N` points the correlation sum `C(R) = 2 · #{pairs closer than R} / N²`
//! grows like `R^ν` over the scaling region; `ν` is the correlation dimension.
//! The crate samples `K` radii evenly in log space between the smallest
//! positive and the largest pairwise distance, fits a least-squares line to
//! `ln C` against `ln R` after discarding points at both ends of the curve,
//! and reports the slope together with the curve, the fitted overlay, and a
//! histogram of the pairwise distances.
//!
//! ## Key Features
//!
//! - **Two engines**: a stored triangular distance matrix for repeated queries,
//!   or a streaming engine that keeps only the points and answers all `K`
//!   radii in one pass
//! - **Point sources**: logistic, tent and Hénon maps, lattices, seeded
//!   uniform clouds, and whitespace-separated vector files
//! - **Plain-text dumps** of the curve and histogram for plotting
//! - **Memory estimates** before a run, timings through `log`
//!
//! ## Quick Start
//!
//! ```rust
//! use fractal_corrdim::{
//!     generate_points, CorrDimConfig, CorrelationDimensionAnalyzer, GeneratorConfig,
//!     PointSource,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = GeneratorConfig { num_points: 500, seed: None };
//!     let points = generate_points(&PointSource::default(), &generator)?;
//!
//!     let analyzer = CorrelationDimensionAnalyzer::new(CorrDimConfig::default());
//!     let analysis = analyzer.analyze(points)?;
//!     println!(
//!         "correlation dimension = {:.6} (memory {})",
//!         analysis.correlation_dimension(),
//!         analysis.memory
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! [`CorrelationSumEngine`] is the seam between the two engines and the curve
//! evaluation in [`curve`]. [`build_engine`] picks an engine from a
//! [`MemoryPolicy`]; [`CorrelationDimensionAnalyzer`] wraps validation, engine
//! construction, evaluation and logging into one call. The crate never
//! installs a logger.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod points;
pub mod results;

// Distances and engines
pub mod distance;
pub mod engine;
pub mod histogram;
pub mod matrix;
pub mod streaming;

// Curve fitting
pub mod curve;
pub mod regression;

// Inputs, outputs and orchestration
pub mod analyzer;
pub mod dump;
pub mod generators;

// Re-exports for convenience - main public API
pub use analyzer::CorrelationDimensionAnalyzer;
pub use config::CorrDimConfig;
pub use errors::{CorrDimError, CorrDimResult};
pub use points::PointSet;
pub use results::{CorrDimAnalysis, MemoryFootprint};

// Engine exports
pub use distance::{DistanceDomain, DistanceMetric, DistanceRange};
pub use engine::{build_engine, CorrelationSumEngine, MemoryPolicy};
pub use histogram::Histogram;
pub use matrix::DistanceMatrixEngine;
pub use streaming::StreamingCorrSumEngine;

// Curve exports
pub use curve::{CorrDimEstimate, CorrSumCurve};
pub use regression::{linear_least_squares, RegressionResult};

// Point source exports
pub use generators::{
    generate_henon_map, generate_lattice, generate_logistic_map, generate_points,
    generate_tent_map, generate_uniform_cloud, GeneratorConfig, HenonMapConfig, LatticeConfig,
    LogisticMapConfig, PointSource, TentMapConfig, UniformCloudConfig,
};

// Dump exports
pub use dump::{
    read_vectors, read_vectors_file, write_curve, write_curve_file, write_histogram,
    write_histogram_file,
};
