//! Integration tests for error handling and invalid input scenarios
//!
//! Bad parameters must be reported before any pair is scanned, degenerate
//! point sets must be refused by the curve and histogram operations, and I/O
//! failures must surface as errors rather than panics.

use fractal_corrdim::{
    build_engine, read_vectors, read_vectors_file, write_curve_file, CorrDimConfig, CorrDimError,
    CorrSumCurve, CorrelationDimensionAnalyzer, CorrelationSumEngine, GeneratorConfig,
    LogisticMapConfig, MemoryPolicy, PointSet, PointSource,
};

fn spread(n: usize) -> PointSet {
    PointSet::from_scalars((0..n).map(|i| (i as f64).sqrt()).collect()).unwrap()
}

/// Test scenario: discard counts at or above K/2 are rejected for both engines
#[test]
fn test_discard_bounds() {
    for policy in [MemoryPolicy::Full, MemoryPolicy::LowMemory] {
        let engine = build_engine(spread(50), policy).unwrap();
        assert!(matches!(
            engine.eval_corr_dim(10, 5, 0),
            Err(CorrDimError::InvalidParameter { .. })
        ));
        assert!(matches!(
            engine.eval_corr_dim(10, 0, 5),
            Err(CorrDimError::InvalidParameter { .. })
        ));
        assert!(engine.eval_corr_dim(10, 4, 4).is_ok());
        assert!(engine.eval_corr_dim(10, 0, 0).is_ok());
        assert!(engine.eval_corr_dim(0, 0, 0).is_err());
        assert!(engine.histogram(0).is_err());
    }
}

/// Test scenario: identical points build, but curves and histograms refuse them
#[test]
fn test_coincident_points_are_degenerate() {
    for policy in [MemoryPolicy::Full, MemoryPolicy::LowMemory] {
        let points = PointSet::new(vec![0.25; 12], 3).unwrap();
        let engine = build_engine(points, policy).unwrap();
        assert!(engine.distance_range().is_degenerate());

        // All six pairs are closer than any positive radius
        let sums = engine.correlation_sums(&[1.0]).unwrap();
        assert_eq!(sums[0], 12.0 / 16.0);

        match engine.eval_corr_dim(25, 5, 2) {
            Err(CorrDimError::DegenerateData { num_points }) => assert_eq!(num_points, 4),
            other => panic!("Expected DegenerateData, got {:?}", other),
        }
        assert!(matches!(
            engine.histogram(10),
            Err(CorrDimError::DegenerateData { .. })
        ));
    }
}

/// Test scenario: a single point has no pairs at all
#[test]
fn test_single_point() {
    let engine = build_engine(PointSet::from_scalars(vec![1.0]).unwrap(), MemoryPolicy::LowMemory).unwrap();
    assert_eq!(engine.correlation_sums(&[1.0]).unwrap(), vec![0.0]);
    assert!(engine.eval_corr_dim(25, 5, 2).is_err());
}

/// Test scenario: invalid analyzer configuration and generator parameters
#[test]
fn test_analyzer_rejects_bad_configuration() {
    let analyzer = CorrelationDimensionAnalyzer::new(CorrDimConfig {
        num_bins: 0,
        ..CorrDimConfig::default()
    });
    assert!(analyzer.analyze(spread(20)).is_err());

    let analyzer = CorrelationDimensionAnalyzer::default();
    let source = PointSource::LogisticMap(LogisticMapConfig {
        lambda: 4.5,
        x0: 0.3,
    });
    let generator = GeneratorConfig {
        num_points: 100,
        seed: None,
    };
    match analyzer.analyze_source(&source, &generator) {
        Err(CorrDimError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "lambda"),
        other => panic!("Expected InvalidParameter, got {:?}", other),
    }
}

/// Test scenario: unsorted radii are refused by the streaming engine
#[test]
fn test_unsorted_radii() {
    let engine = build_engine(spread(10), MemoryPolicy::LowMemory).unwrap();
    assert!(engine.correlation_sums(&[2.0, 1.0]).is_err());
    assert!(engine.correlation_sums(&[1.0, f64::NAN]).is_err());
}

/// Test scenario: malformed or short vector input
#[test]
fn test_vector_input_errors() {
    match read_vectors("0.1 0.2\n0.3 oops\n".as_bytes(), 2, 2) {
        Err(CorrDimError::ParseError { index, token }) => {
            assert_eq!(index, 3);
            assert_eq!(token, "oops");
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
    assert!(matches!(
        read_vectors("1 2 3".as_bytes(), 4, 1),
        Err(CorrDimError::InsufficientData { required: 4, actual: 3 })
    ));
    assert!(matches!(
        read_vectors("1 inf".as_bytes(), 2, 1),
        Err(CorrDimError::NumericalError { .. })
    ));
}

/// Test scenario: unwritable and unreadable paths
#[test]
fn test_file_errors() {
    let curve = CorrSumCurve {
        log_r: vec![0.0],
        log_cr: vec![0.0],
        inter: vec![0.0],
    };
    assert!(matches!(
        write_curve_file("/nonexistent-dir/corrdim/curve.dat", &curve),
        Err(CorrDimError::IoError { .. })
    ));
    assert!(matches!(
        read_vectors_file("/nonexistent-dir/corrdim/points.dat", 5, 1),
        Err(CorrDimError::IoError { .. })
    ));
}
