//! Plain-text dumps of curves and histograms, and whitespace-separated vector
//! input.
//!
//! Curve rows are `ln(R)  ln(C(R))  fit(ln R)` and histogram rows are
//! `left_edge  count`, both with two-space separators and six decimals, so the
//! files plot directly with gnuplot-style tools.

use crate::curve::CorrSumCurve;
use crate::errors::{validate_positive, CorrDimError, CorrDimResult};
use crate::histogram::Histogram;
use crate::points::PointSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write one `log_r  log_cr  inter` row per curve sample.
pub fn write_curve<W: Write>(writer: &mut W, curve: &CorrSumCurve) -> CorrDimResult<()> {
    for ((r, c), fit) in curve.log_r.iter().zip(&curve.log_cr).zip(&curve.inter) {
        writeln!(writer, "{:.6}  {:.6}  {:.6}", r, c, fit)
            .map_err(|e| CorrDimError::io("write curve row", e))?;
    }
    writer.flush().map_err(|e| CorrDimError::io("flush curve", e))
}

/// Write one `left_edge  count` row per histogram bin.
pub fn write_histogram<W: Write>(writer: &mut W, histogram: &Histogram) -> CorrDimResult<()> {
    for (edge, count) in histogram.bin_edges.iter().zip(&histogram.counts) {
        writeln!(writer, "{:.6}  {}", edge, count)
            .map_err(|e| CorrDimError::io("write histogram row", e))?;
    }
    writer.flush().map_err(|e| CorrDimError::io("flush histogram", e))
}

/// Read `num_points * dimension` whitespace-separated reals into a point set.
///
/// Values may be split across lines arbitrarily; anything after the last
/// needed value is ignored.
///
/// # Example
/// ```rust
/// use fractal_corrdim::dump::read_vectors;
///
/// let input = "0.0 0.0\n1.0 0.5\n2.0 1.0\n";
/// let points = read_vectors(input.as_bytes(), 3, 2).unwrap();
/// assert_eq!(points.point(2), &[2.0, 1.0]);
/// ```
pub fn read_vectors<R: BufRead>(reader: R, num_points: usize, dimension: usize) -> CorrDimResult<PointSet> {
    validate_positive(num_points, "num_points")?;
    validate_positive(dimension, "dimension")?;
    let wanted = num_points.saturating_mul(dimension);

    let mut coords = Vec::with_capacity(wanted);
    'lines: for line in reader.lines() {
        let line = line.map_err(|e| CorrDimError::io("read vectors", e))?;
        for token in line.split_whitespace() {
            if coords.len() == wanted {
                break 'lines;
            }
            let value = token.parse::<f64>().map_err(|_| CorrDimError::ParseError {
                index: coords.len(),
                token: token.to_string(),
            })?;
            coords.push(value);
        }
        if coords.len() == wanted {
            break;
        }
    }

    if coords.len() < wanted {
        return Err(CorrDimError::InsufficientData {
            required: wanted,
            actual: coords.len(),
        });
    }
    PointSet::new(coords, dimension)
}

/// [`write_curve`] into a newly created file.
pub fn write_curve_file<P: AsRef<Path>>(path: P, curve: &CorrSumCurve) -> CorrDimResult<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| CorrDimError::io(format!("create curve dump '{}'", path.display()), e))?;
    write_curve(&mut BufWriter::new(file), curve)?;
    log::debug!("Dumped {} curve rows to {}", curve.len(), path.display());
    Ok(())
}

/// [`write_histogram`] into a newly created file.
pub fn write_histogram_file<P: AsRef<Path>>(path: P, histogram: &Histogram) -> CorrDimResult<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| CorrDimError::io(format!("create histogram dump '{}'", path.display()), e))?;
    write_histogram(&mut BufWriter::new(file), histogram)?;
    log::debug!("Dumped {} histogram bins to {}", histogram.num_bins(), path.display());
    Ok(())
}

/// [`read_vectors`] from a file.
pub fn read_vectors_file<P: AsRef<Path>>(
    path: P,
    num_points: usize,
    dimension: usize,
) -> CorrDimResult<PointSet> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| CorrDimError::io(format!("open vectors '{}'", path.display()), e))?;
    read_vectors(BufReader::new(file), num_points, dimension)
}
