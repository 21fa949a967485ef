#![cfg(feature = "cpu")]
//! Tests for parallel and sequential consistency.
//!
//! These tests verify that the rayon passes produce exactly the results of
//! the sequential kernels for:
//! - Nonlinear weights
//! - Fused reconstruction, biased and unbiased
//! - Strided component outputs
//! - Full reconstructor steps
//!
//! ## Test Organization
//!
//! 1. **Kernels** - Parallel functions against sequential functions
//! 2. **Reconstructor** - Parallel builder against sequential builder
//! 3. **Validation** - Identical rejection behavior

use fastWeno::prelude::*;

/// Marker value for entries a kernel must not write.
const SENTINEL: f64 = -7.0;

/// Deterministic, rough test signal with a jump.
fn signal(n_cells: usize) -> Vec<f64> {
    (0..n_cells)
        .map(|i| {
            let x = i as f64 / n_cells as f64;
            let jump = if x > 0.6 { 2.0 } else { 0.0 };
            (7.0 * x).sin() + 0.3 * (41.0 * x).cos() + jump
        })
        .collect()
}

/// Arbitrary but fixed per-entry values in `[lo, lo + span)`.
fn pattern(len: usize, lo: f64, span: f64, seed: usize) -> Vec<f64> {
    (0..len)
        .map(|j| lo + span * (((j * 7919 + seed * 104_729) % 1000) as f64 / 1000.0))
        .collect()
}

/// Inputs of a `(n_cells, k, n)` reconstruction.
struct Case {
    n_cells: usize,
    k: usize,
    n: usize,
    q: Vec<f64>,
    sigma: Vec<f64>,
    w: Vec<f64>,
    c: Vec<f64>,
}

impl Case {
    fn new(n_cells: usize, k: usize, n: usize) -> Self {
        Self {
            n_cells,
            k,
            n,
            q: signal(n_cells),
            sigma: pattern(n_cells * k, 0.0, 2.0, 1),
            w: pattern(n_cells * k, 0.1, 1.0, 2),
            c: pattern(n_cells * k * n * k, -1.0, 2.0, 3),
        }
    }

    fn weights_with(
        &self,
        pass: fn(
            usize,
            usize,
            &ArrayView<'_, f64, 2>,
            &ArrayView<'_, f64, 2>,
            &mut ArrayViewMut<'_, f64, 2>,
        ) -> Result<(), WenoError>,
        imin: usize,
        imax: usize,
    ) -> Vec<f64> {
        let (n_cells, k) = (self.n_cells, self.k);
        let mut wr = vec![SENTINEL; n_cells * k];
        pass(
            imin,
            imax,
            &ArrayView::from_shape(&self.sigma, [n_cells, k]).unwrap(),
            &ArrayView::from_shape(&self.w, [n_cells, k]).unwrap(),
            &mut ArrayViewMut::from_shape(&mut wr, [n_cells, k]).unwrap(),
        )
        .unwrap();
        wr
    }

    fn reconstruct_with(
        &self,
        pass: fn(
            &ArrayView<'_, f64, 1>,
            isize,
            usize,
            usize,
            &ArrayView<'_, f64, 4>,
            &ArrayView<'_, f64, 2>,
            &mut ArrayViewMut<'_, f64, 3>,
            &mut ArrayViewMut<'_, f64, 2>,
        ) -> Result<(), WenoError>,
        bias: isize,
        imin: usize,
        imax: usize,
    ) -> (Vec<f64>, Vec<f64>) {
        let (n_cells, k, n) = (self.n_cells, self.k, self.n);
        let wr = self.weights_with(compute_weights, 0, n_cells - 1);
        let wr: Vec<f64> = wr.iter().map(|&v| if v == SENTINEL { 0.0 } else { v }).collect();
        let mut qr = vec![SENTINEL; n_cells * k * n];
        let mut qs = vec![SENTINEL; n_cells * n];
        pass(
            &ArrayView::from_shape(&self.q, [n_cells]).unwrap(),
            bias,
            imin,
            imax,
            &ArrayView::from_shape(&self.c, [n_cells, k, n, k]).unwrap(),
            &ArrayView::from_shape(&wr, [n_cells, k]).unwrap(),
            &mut ArrayViewMut::from_shape(&mut qr, [n_cells, k, n]).unwrap(),
            &mut ArrayViewMut::from_shape(&mut qs, [n_cells, n]).unwrap(),
        )
        .unwrap();
        (qr, qs)
    }
}

/// Bitwise comparison that treats equal NaN payloads as equal.
fn assert_bitwise_eq(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (j, (x, y)) in a.iter().zip(b).enumerate() {
        assert_eq!(x.to_bits(), y.to_bits(), "mismatch at {j}: {x} vs {y}");
    }
}

// ============================================================================
// Kernel Tests
// ============================================================================

/// Test parallel weights against sequential weights.
#[test]
fn test_weights_parallel_matches_sequential() {
    for (n_cells, k) in [(3, 3), (50, 3), (1000, 4), (257, 1)] {
        let case = Case::new(n_cells, k, 1);
        for (imin, imax) in [(0, n_cells - 1), (1, n_cells / 2), (n_cells - 1, n_cells - 1)] {
            let seq = case.weights_with(compute_weights, imin, imax);
            let par = case.weights_with(compute_weights_parallel, imin, imax);
            assert_bitwise_eq(&seq, &par);
        }
    }
}

/// Test the parallel fused reconstruction against the sequential one.
#[test]
fn test_reconstruct_parallel_matches_sequential() {
    for (n_cells, k, n) in [(5, 3, 2), (200, 3, 2), (999, 2, 3), (64, 4, 1)] {
        let case = Case::new(n_cells, k, n);
        let seq = case.reconstruct_with(reconstruct, 0, 0, n_cells - 1);
        let par = case.reconstruct_with(reconstruct_parallel, 0, 0, n_cells - 1);
        assert_bitwise_eq(&seq.0, &par.0);
        assert_bitwise_eq(&seq.1, &par.1);
    }
}

/// Test biased reconstructions over partial cell ranges.
#[test]
fn test_reconstruct_parallel_biased() {
    let case = Case::new(120, 3, 2);
    for (bias, imin, imax) in [(1, 1, 119), (-1, 0, 118), (2, 2, 60), (-2, 50, 117), (0, 7, 7)] {
        let seq = case.reconstruct_with(reconstruct, bias, imin, imax);
        let par = case.reconstruct_with(reconstruct_parallel, bias, imin, imax);
        assert_bitwise_eq(&seq.0, &par.0);
        assert_bitwise_eq(&seq.1, &par.1);
    }
}

/// Test strided component output of vector-valued state.
#[test]
fn test_reconstruct_parallel_component() {
    let (n_cells, k, n, m) = (300, 3, 2, 4);
    let case = Case::new(n_cells, k, n);
    let state: Vec<f64> = pattern(n_cells * m, -3.0, 6.0, 9);
    let wr = vec![1.0 / 3.0; n_cells * k];

    let mut outputs = Vec::new();
    for pass in [
        reconstruct
            as fn(
                &ArrayView<'_, f64, 1>,
                isize,
                usize,
                usize,
                &ArrayView<'_, f64, 4>,
                &ArrayView<'_, f64, 2>,
                &mut ArrayViewMut<'_, f64, 3>,
                &mut ArrayViewMut<'_, f64, 2>,
            ) -> Result<(), WenoError>,
        reconstruct_parallel,
    ] {
        let mut qr = vec![0.0; n_cells * k * n];
        let mut faces = vec![SENTINEL; n_cells * n * m];
        for component in [1, 3] {
            pass(
                &ArrayView::component(&state, n_cells, m, component).unwrap(),
                0,
                0,
                n_cells - 1,
                &ArrayView::from_shape(&case.c, [n_cells, k, n, k]).unwrap(),
                &ArrayView::from_shape(&wr, [n_cells, k]).unwrap(),
                &mut ArrayViewMut::from_shape(&mut qr, [n_cells, k, n]).unwrap(),
                &mut ArrayViewMut::component(&mut faces, n_cells, n, m, component).unwrap(),
            )
            .unwrap();
        }
        outputs.push(faces);
    }

    assert_bitwise_eq(&outputs[0], &outputs[1]);
    // Components 0 and 2 are never written.
    for record in outputs[1].chunks_exact(m) {
        assert_eq!(record[0], SENTINEL);
        assert_eq!(record[2], SENTINEL);
        assert_ne!(record[1], SENTINEL);
        assert_ne!(record[3], SENTINEL);
    }
}

// ============================================================================
// Reconstructor Tests
// ============================================================================

/// Test parallel and sequential reconstructors on the same step.
#[test]
fn test_reconstructor_parallel_matches_sequential() {
    let case = Case::new(512, 3, 2);
    let (n_cells, k, n) = (case.n_cells, case.k, case.n);

    let mut results = Vec::new();
    for parallel in [false, true] {
        let mut weno = Weno::new().order(k).points(n).parallel(parallel).build().unwrap();
        let mut qs = vec![0.0; n_cells * n];
        weno.reconstruct(
            &ArrayView::from_shape(&case.q, [n_cells]).unwrap(),
            0,
            n_cells - 1,
            &ArrayView::from_shape(&case.sigma, [n_cells, k]).unwrap(),
            &ArrayView::from_shape(&case.w, [n_cells, k]).unwrap(),
            &ArrayView::from_shape(&case.c, [n_cells, k, n, k]).unwrap(),
            &mut ArrayViewMut::from_shape(&mut qs, [n_cells, n]).unwrap(),
        )
        .unwrap();
        let wr = weno.nonlinear_weights().unwrap().data().to_vec();
        results.push((wr, qs));
    }

    assert_bitwise_eq(&results[0].0, &results[1].0);
    assert_bitwise_eq(&results[0].1, &results[1].1);
}

/// Test that the parallel flag can only be set once.
#[test]
fn test_builder_duplicate_parallel() {
    let err = Weno::<f64>::new().parallel(true).parallel(false).build().unwrap_err();
    assert_eq!(err, WenoError::DuplicateParameter { parameter: "parallel" });
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that the parallel passes reject like the sequential ones and leave
/// outputs untouched.
#[test]
fn test_parallel_validation() {
    let case = Case::new(10, 3, 1);
    let mut wr = vec![SENTINEL; 30];
    let err = compute_weights_parallel(
        4,
        10,
        &ArrayView::from_shape(&case.sigma, [10, 3]).unwrap(),
        &ArrayView::from_shape(&case.w, [10, 3]).unwrap(),
        &mut ArrayViewMut::from_shape(&mut wr, [10, 3]).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, WenoError::InvalidRange { .. }));
    assert!(wr.iter().all(|&v| v == SENTINEL));

    let mut qr = vec![SENTINEL; 30];
    let mut qs = vec![SENTINEL; 20];
    let err = reconstruct_parallel(
        &ArrayView::from_shape(&case.q, [10]).unwrap(),
        0,
        0,
        9,
        &ArrayView::from_shape(&case.c, [10, 3, 1, 3]).unwrap(),
        &ArrayView::from_shape(&case.w, [10, 3]).unwrap(),
        &mut ArrayViewMut::from_shape(&mut qr, [10, 3, 1]).unwrap(),
        &mut ArrayViewMut::new(&mut qs, Layout::strided([10, 1], [0, 1], 0)).unwrap(),
    )
    .unwrap_err();
    assert_eq!(err, WenoError::AliasedLayout { array: "qs" });
    assert!(qr.iter().chain(qs.iter()).all(|&v| v == SENTINEL));
}
