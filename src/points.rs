//! Owned point buffers.
//!
//! A [`PointSet`] holds `N` points of dimension `D` as one flat, row-major
//! buffer of `N * D` values: point `i` occupies `[i * D, i * D + D)`. The set is
//! immutable once built and is moved into exactly one engine, which drops it
//! together with everything derived from it.

use crate::errors::{validate_all_finite, validate_positive, CorrDimError, CorrDimResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `N` points of dimension `D` stored row-major.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointSet {
    coords: Vec<f64>,
    dimension: usize,
}

impl PointSet {
    /// Take ownership of a flat coordinate buffer.
    ///
    /// Fails when the dimension is zero, the buffer is empty, the length is not
    /// a multiple of the dimension, or any coordinate is not finite.
    ///
    /// # Example
    /// ```rust
    /// use fractal_corrdim::PointSet;
    ///
    /// let points = PointSet::new(vec![0.0, 0.0, 1.0, 1.0, 2.0, 0.5], 2).unwrap();
    /// assert_eq!(points.len(), 3);
    /// assert_eq!(points.point(1), &[1.0, 1.0]);
    /// ```
    pub fn new(coords: Vec<f64>, dimension: usize) -> CorrDimResult<Self> {
        validate_positive(dimension, "dimension")?;
        if coords.is_empty() {
            return Err(CorrDimError::InsufficientData {
                required: dimension,
                actual: 0,
            });
        }
        if coords.len() % dimension != 0 {
            return Err(CorrDimError::DimensionMismatch {
                len: coords.len(),
                dimension,
            });
        }
        validate_all_finite(&coords, "point coordinates")?;

        Ok(Self { coords, dimension })
    }

    /// One-dimensional point set (a scalar series).
    pub fn from_scalars(values: Vec<f64>) -> CorrDimResult<Self> {
        Self::new(values, 1)
    }

    /// Number of points `N`.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / self.dimension
    }

    /// Always false for a constructed set; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Dimension `D` of each point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Coordinates of point `i`.
    #[inline]
    pub fn point(&self, i: usize) -> &[f64] {
        let start = i * self.dimension;
        &self.coords[start..start + self.dimension]
    }

    /// The flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// Give the buffer back, consuming the set.
    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }

    /// Number of unordered pairs `N(N-1)/2`.
    #[inline]
    pub fn num_pairs(&self) -> usize {
        let n = self.len();
        n * n.saturating_sub(1) / 2
    }
}
