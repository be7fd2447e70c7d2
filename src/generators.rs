//! Point sources with known or reference scaling behaviour.
//!
//! ## Available Sources
//!
//! - **Logistic map** `x ← λx(1−x)`: scalar orbit, chaotic near λ = 4
//! - **Tent map** `x ← μ(1−x)` for `x ≥ 0.5`, else `μx`: scalar orbit
//! - **Hénon map** `x' = y + 1 − a x²`, `y' = b x`: planar orbit
//! - **Lattice**: regular grid with dimension equal to its embedding dimension
//! - **Uniform cloud**: i.i.d. uniform points in `[0, 1)^D`
//!
//! Map orbits start from the configured initial condition and emit the
//! iterates *after* each update, so the initial condition itself is never part
//! of the output.

use crate::errors::{
    validate_allocation_size, validate_parameter, validate_positive, CorrDimError, CorrDimResult,
};
use crate::points::PointSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters shared by every point source.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// Number of points to emit (ignored by the lattice, which is sized by its
    /// side length)
    pub num_points: usize,
    /// Random seed for reproducible generation; `None` draws OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_points: 2000,
            seed: None,
        }
    }
}

/// Logistic map parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogisticMapConfig {
    /// Growth parameter λ, in `[0, 4]`
    pub lambda: f64,
    /// Initial condition, in `[0, 1]`
    pub x0: f64,
}

impl Default for LogisticMapConfig {
    fn default() -> Self {
        Self {
            lambda: 3.97,
            x0: 0.44,
        }
    }
}

/// Tent map parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TentMapConfig {
    /// Slope μ, in `[0, 2]`
    pub mu: f64,
    /// Initial condition, in `[0, 1]`
    pub x0: f64,
}

impl Default for TentMapConfig {
    fn default() -> Self {
        Self { mu: 1.12, x0: 0.44 }
    }
}

/// Hénon map parameters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HenonMapConfig {
    /// Quadratic coefficient `a`
    pub a: f64,
    /// Contraction `b`, in `[0, 1]`
    pub b: f64,
    /// Initial `x`
    pub x0: f64,
    /// Initial `y`
    pub y0: f64,
}

impl Default for HenonMapConfig {
    fn default() -> Self {
        Self {
            a: 1.12,
            b: 0.12,
            x0: 1.44,
            y0: 0.89,
        }
    }
}

/// Regular grid of `side^dimension` points.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatticeConfig {
    /// Embedding dimension
    pub dimension: usize,
    /// Points per axis
    pub side: usize,
    /// Distance between neighbouring grid points
    pub spacing: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            dimension: 2,
            side: 40,
            spacing: 1.0,
        }
    }
}

/// Uniform random points in the unit cube.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniformCloudConfig {
    /// Embedding dimension
    pub dimension: usize,
}

impl Default for UniformCloudConfig {
    fn default() -> Self {
        Self { dimension: 2 }
    }
}

/// Every built-in point source.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointSource {
    /// Logistic map orbit (`D = 1`)
    LogisticMap(LogisticMapConfig),
    /// Tent map orbit (`D = 1`)
    TentMap(TentMapConfig),
    /// Hénon map orbit (`D = 2`)
    HenonMap(HenonMapConfig),
    /// Regular grid
    Lattice(LatticeConfig),
    /// Uniform random cloud
    UniformCloud(UniformCloudConfig),
}

impl Default for PointSource {
    fn default() -> Self {
        PointSource::LogisticMap(LogisticMapConfig::default())
    }
}

/// Generate points from any source.
///
/// # Example
/// ```rust
/// use fractal_corrdim::generators::{generate_points, GeneratorConfig, PointSource};
///
/// let config = GeneratorConfig { num_points: 100, seed: None };
/// let points = generate_points(&PointSource::default(), &config).unwrap();
/// assert_eq!(points.len(), 100);
/// assert_eq!(points.dimension(), 1);
/// ```
pub fn generate_points(source: &PointSource, config: &GeneratorConfig) -> CorrDimResult<PointSet> {
    let points = match source {
        PointSource::LogisticMap(map) => generate_logistic_map(config, map),
        PointSource::TentMap(map) => generate_tent_map(config, map),
        PointSource::HenonMap(map) => generate_henon_map(config, map),
        PointSource::Lattice(lattice) => generate_lattice(lattice),
        PointSource::UniformCloud(cloud) => generate_uniform_cloud(config, cloud),
    }?;
    log::debug!(
        "Generated {} points of dimension {} from {:?}",
        points.len(),
        points.dimension(),
        source
    );
    Ok(points)
}

fn validate_num_points(num_points: usize, dimension: usize) -> CorrDimResult<()> {
    validate_positive(num_points, "num_points")?;
    validate_allocation_size(
        num_points
            .saturating_mul(dimension)
            .saturating_mul(std::mem::size_of::<f64>()),
        "point generation",
    )
}

/// Scalar orbit of the logistic map.
pub fn generate_logistic_map(
    config: &GeneratorConfig,
    map: &LogisticMapConfig,
) -> CorrDimResult<PointSet> {
    validate_num_points(config.num_points, 1)?;
    validate_parameter(map.lambda, 0.0, 4.0, "lambda")?;
    validate_parameter(map.x0, 0.0, 1.0, "x0")?;

    let mut x = map.x0;
    let orbit = (0..config.num_points)
        .map(|_| {
            x = map.lambda * x * (1.0 - x);
            x
        })
        .collect();
    PointSet::from_scalars(orbit)
}

/// Scalar orbit of the tent map.
pub fn generate_tent_map(config: &GeneratorConfig, map: &TentMapConfig) -> CorrDimResult<PointSet> {
    validate_num_points(config.num_points, 1)?;
    validate_parameter(map.mu, 0.0, 2.0, "mu")?;
    validate_parameter(map.x0, 0.0, 1.0, "x0")?;

    let mut x = map.x0;
    let orbit = (0..config.num_points)
        .map(|_| {
            x = if x >= 0.5 { map.mu * (1.0 - x) } else { map.mu * x };
            x
        })
        .collect();
    PointSet::from_scalars(orbit)
}

/// Planar orbit of the Hénon map, emitted as `(x, y)` pairs.
///
/// Parameters outside the bounded regime make the orbit escape to infinity;
/// that surfaces as a non-finite coordinate error.
pub fn generate_henon_map(config: &GeneratorConfig, map: &HenonMapConfig) -> CorrDimResult<PointSet> {
    validate_num_points(config.num_points, 2)?;
    validate_parameter(map.b, 0.0, 1.0, "b")?;

    let (mut x, mut y) = (map.x0, map.y0);
    let mut coords = Vec::with_capacity(config.num_points * 2);
    for _ in 0..config.num_points {
        let next_x = y + 1.0 - map.a * x * x;
        y = map.b * x;
        x = next_x;
        coords.push(x);
        coords.push(y);
    }
    PointSet::new(coords, 2)
}

/// Regular grid; the first coordinate varies fastest.
pub fn generate_lattice(lattice: &LatticeConfig) -> CorrDimResult<PointSet> {
    validate_positive(lattice.dimension, "dimension")?;
    validate_positive(lattice.side, "side")?;
    if !(lattice.spacing.is_finite() && lattice.spacing > 0.0) {
        return Err(CorrDimError::InvalidParameter {
            parameter: "spacing".to_string(),
            value: lattice.spacing,
            constraint: "positive and finite".to_string(),
        });
    }

    let exponent = u32::try_from(lattice.dimension).map_err(|_| CorrDimError::InvalidParameter {
        parameter: "dimension".to_string(),
        value: lattice.dimension as f64,
        constraint: "fits in u32".to_string(),
    })?;
    let num_points = lattice
        .side
        .checked_pow(exponent)
        .ok_or_else(|| CorrDimError::NumericalError {
            reason: format!(
                "Lattice of side {} in {} dimensions overflows the point count",
                lattice.side, lattice.dimension
            ),
        })?;
    validate_num_points(num_points, lattice.dimension)?;

    let mut coords = Vec::with_capacity(num_points * lattice.dimension);
    for i in 0..num_points {
        let mut rest = i;
        for _ in 0..lattice.dimension {
            coords.push((rest % lattice.side) as f64 * lattice.spacing);
            rest /= lattice.side;
        }
    }
    PointSet::new(coords, lattice.dimension)
}

/// Uniform points in `[0, 1)^D` from a ChaCha20 stream.
pub fn generate_uniform_cloud(
    config: &GeneratorConfig,
    cloud: &UniformCloudConfig,
) -> CorrDimResult<PointSet> {
    validate_positive(cloud.dimension, "dimension")?;
    validate_num_points(config.num_points, cloud.dimension)?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    let coords = (0..config.num_points * cloud.dimension)
        .map(|_| rng.gen_range(0.0..1.0))
        .collect();
    PointSet::new(coords, cloud.dimension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn config(num_points: usize) -> GeneratorConfig {
        GeneratorConfig {
            num_points,
            seed: Some(42),
        }
    }

    #[test]
    fn test_logistic_map_skips_initial_condition() {
        let points = generate_logistic_map(&config(3), &LogisticMapConfig::default()).unwrap();
        assert_eq!(points.len(), 3);
        let first = 3.97 * 0.44 * 0.56;
        assert_approx_eq!(points.point(0)[0], first, 1e-12);
        assert_approx_eq!(points.point(1)[0], 3.97 * first * (1.0 - first), 1e-12);
        assert!(points.as_slice().iter().all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_tent_map_branches() {
        let points = generate_tent_map(&config(3), &TentMapConfig::default()).unwrap();
        // 0.44 -> 0.4928 -> 0.551936 -> 1.12 * (1 - 0.551936)
        assert_approx_eq!(points.point(0)[0], 0.4928, 1e-12);
        assert_approx_eq!(points.point(1)[0], 0.551936, 1e-12);
        assert_approx_eq!(points.point(2)[0], 1.12 * (1.0 - 0.551936), 1e-12);
    }

    #[test]
    fn test_henon_map_emits_pairs() {
        let points = generate_henon_map(&config(2), &HenonMapConfig::default()).unwrap();
        assert_eq!(points.dimension(), 2);
        let p0 = points.point(0);
        assert_approx_eq!(p0[0], 0.89 + 1.0 - 1.12 * 1.44 * 1.44, 1e-12);
        assert_approx_eq!(p0[1], 0.12 * 1.44, 1e-12);
        let p1 = points.point(1);
        assert_approx_eq!(p1[0], p0[1] + 1.0 - 1.12 * p0[0] * p0[0], 1e-12);
        assert_approx_eq!(p1[1], 0.12 * p0[0], 1e-12);
    }

    #[test]
    fn test_map_parameter_ranges() {
        let bad_x0 = LogisticMapConfig {
            x0: 1.5,
            ..Default::default()
        };
        assert!(generate_logistic_map(&config(10), &bad_x0).is_err());

        let bad_mu = TentMapConfig {
            mu: 2.5,
            ..Default::default()
        };
        assert!(generate_tent_map(&config(10), &bad_mu).is_err());

        let bad_b = HenonMapConfig {
            b: -0.1,
            ..Default::default()
        };
        assert!(generate_henon_map(&config(10), &bad_b).is_err());

        assert!(generate_logistic_map(&config(0), &LogisticMapConfig::default()).is_err());
    }

    #[test]
    fn test_escaping_henon_orbit_is_rejected() {
        let escaping = HenonMapConfig {
            a: 3.0,
            ..Default::default()
        };
        assert!(matches!(
            generate_henon_map(&config(2000), &escaping),
            Err(CorrDimError::NumericalError { .. })
        ));
    }

    #[test]
    fn test_lattice_layout() {
        let lattice = LatticeConfig {
            dimension: 2,
            side: 3,
            spacing: 0.5,
        };
        let points = generate_lattice(&lattice).unwrap();
        assert_eq!(points.len(), 9);
        assert_eq!(points.point(0), &[0.0, 0.0]);
        assert_eq!(points.point(1), &[0.5, 0.0]);
        assert_eq!(points.point(3), &[0.0, 0.5]);
        assert_eq!(points.point(8), &[1.0, 1.0]);

        let bad = LatticeConfig {
            spacing: 0.0,
            ..lattice
        };
        assert!(generate_lattice(&bad).is_err());
    }

    #[test]
    fn test_uniform_cloud_is_seeded() {
        let cloud = UniformCloudConfig { dimension: 3 };
        let a = generate_uniform_cloud(&config(50), &cloud).unwrap();
        let b = generate_uniform_cloud(&config(50), &cloud).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        assert!(a.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));

        let other = GeneratorConfig {
            seed: Some(7),
            ..config(50)
        };
        assert_ne!(a, generate_uniform_cloud(&other, &cloud).unwrap());
    }

    #[test]
    fn test_generate_points_dispatch() {
        let points = generate_points(&PointSource::default(), &config(25)).unwrap();
        assert_eq!(points.len(), 25);
        let henon = generate_points(&PointSource::HenonMap(HenonMapConfig::default()), &config(25)).unwrap();
        assert_eq!(henon.dimension(), 2);
        let lattice = generate_points(&PointSource::Lattice(LatticeConfig::default()), &config(1)).unwrap();
        assert_eq!(lattice.len(), 1600);
    }
}
