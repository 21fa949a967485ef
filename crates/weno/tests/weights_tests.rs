//! Tests for nonlinear weight computation.
//!
//! These tests verify the weight kernel used in WENO for:
//! - Normalization of the nonlinear weights
//! - Collapse to the optimal linear weights on smooth data
//! - Suppression of non-smooth stencils
//! - Boundary clamping of the admissible shifts
//!
//! ## Test Organization
//!
//! 1. **Normalization** - Weights sum to one
//! 2. **Smoothness Response** - Equal and unequal indicators
//! 3. **Boundary Handling** - Clamped shift ranges and untouched entries

use approx::{assert_abs_diff_eq, assert_relative_eq};

use weno::prelude::*;

/// Marker value for entries a kernel must not write.
const SENTINEL: f64 = -7.0;

/// Run `compute_weights` on row-major `(n_cells, k)` arrays.
fn weights(
    imin: usize,
    imax: usize,
    n_cells: usize,
    k: usize,
    sigma: &[f64],
    w: &[f64],
    wr: &mut [f64],
) -> Result<(), WenoError> {
    compute_weights(
        imin,
        imax,
        &ArrayView::from_shape(sigma, [n_cells, k])?,
        &ArrayView::from_shape(w, [n_cells, k])?,
        &mut ArrayViewMut::from_shape(wr, [n_cells, k])?,
    )
}

// ============================================================================
// Normalization Tests
// ============================================================================

/// Test that the weights of every interior cell sum to one.
///
/// Uses indicators spanning several orders of magnitude.
#[test]
fn test_weights_normalized() {
    let (n_cells, k) = (7, 3);
    let mut sigma = Vec::new();
    for i in 0..n_cells {
        let scale = 10f64.powi(i as i32 - 3);
        sigma.extend_from_slice(&[0.5 * scale, 2.0 * scale, 0.01 + scale]);
    }
    let w: Vec<f64> = (0..n_cells).flat_map(|_| [0.3, 0.6, 0.1]).collect();
    let mut wr = vec![0.0; n_cells * k];

    weights(2, 4, n_cells, k, &sigma, &w, &mut wr).unwrap();

    for i in 2..=4 {
        let sum: f64 = wr[i * k..(i + 1) * k].iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        assert!(wr[i * k..(i + 1) * k].iter().all(|&v| v > 0.0));
    }
}

/// Test the two-shift scenario with zero indicators.
///
/// Verifies that equal optimal weights stay equal.
#[test]
fn test_weights_two_shift_zero_sigma() {
    let sigma = [0.0; 6];
    let w = [0.5; 6];
    let mut wr = [0.0; 6];

    weights(1, 1, 3, 2, &sigma, &w, &mut wr).unwrap();

    assert_abs_diff_eq!(wr[2], 0.5, epsilon = 1e-15);
    assert_abs_diff_eq!(wr[3], 0.5, epsilon = 1e-15);
}

/// Test the regularized weight formula on known values.
///
/// With eps = 1e-5: alpha = [0.5 / 1e-10, 0.5 / 4e-10], so wr = [0.8, 0.2].
#[test]
fn test_weights_known_values() {
    let sigma = [0.0, 0.0, 0.0, 1e-5, 0.0, 0.0];
    let w = [0.5; 6];
    let mut wr = [0.0; 6];

    weights(1, 1, 3, 2, &sigma, &w, &mut wr).unwrap();

    assert_relative_eq!(wr[2], 0.8, epsilon = 1e-12);
    assert_relative_eq!(wr[3], 0.2, epsilon = 1e-12);
    assert_relative_eq!(EPSILON, 1e-5);
}

// ============================================================================
// Smoothness Response Tests
// ============================================================================

/// Test that uniform smoothness gives back the optimal weights.
///
/// Verifies collapse to `w` for several indicator levels.
#[test]
fn test_weights_uniform_sigma_collapse() {
    let (n_cells, k) = (5, 3);
    let optimal = [0.3, 0.6, 0.1];

    for level in [0.0, 1e-8, 0.25, 42.0] {
        let sigma = vec![level; n_cells * k];
        let w: Vec<f64> = (0..n_cells).flat_map(|_| optimal).collect();
        let mut wr = vec![0.0; n_cells * k];

        weights(2, 2, n_cells, k, &sigma, &w, &mut wr).unwrap();

        for r in 0..k {
            assert_relative_eq!(wr[2 * k + r], optimal[r], epsilon = 1e-12);
        }
    }
}

/// Test that raising one indicator lowers that shift's weight.
///
/// Verifies monotone response and renormalization of the others.
#[test]
fn test_weights_raised_sigma_suppressed() {
    let (n_cells, k) = (5, 3);
    let w: Vec<f64> = (0..n_cells).flat_map(|_| [0.3, 0.6, 0.1]).collect();

    let mut previous = f64::INFINITY;
    for raised in [0.0, 1e-4, 1e-2, 1.0, 100.0] {
        let mut sigma = vec![1e-6; n_cells * k];
        sigma[2 * k + 1] = raised;
        let mut wr = vec![0.0; n_cells * k];

        weights(2, 2, n_cells, k, &sigma, &w, &mut wr).unwrap();

        assert!(wr[2 * k + 1] < previous, "weight must shrink as sigma grows");
        previous = wr[2 * k + 1];
    }
    assert!(previous < 1e-9);
}

// ============================================================================
// Boundary Handling Tests
// ============================================================================

/// Test the clamped shift ranges at both grid edges.
///
/// With N = 5, k = 3 only shift 0 is usable at cell 0 and only shift 2 at
/// cell 4; the other entries keep their previous values.
#[test]
fn test_weights_boundary_cells() {
    let (n_cells, k) = (5, 3);
    let sigma = vec![0.1; n_cells * k];
    let w: Vec<f64> = (0..n_cells).flat_map(|_| [0.3, 0.6, 0.1]).collect();
    let mut wr = vec![SENTINEL; n_cells * k];

    weights(0, n_cells - 1, n_cells, k, &sigma, &w, &mut wr).unwrap();

    assert_relative_eq!(wr[0], 1.0, epsilon = 1e-15);
    assert_eq!(&wr[1..3], &[SENTINEL, SENTINEL]);

    assert_eq!(&wr[4 * k..4 * k + 2], &[SENTINEL, SENTINEL]);
    assert_relative_eq!(wr[4 * k + 2], 1.0, epsilon = 1e-15);

    // Cell 1 admits shifts 0 and 1, cell 3 admits shifts 1 and 2.
    assert_eq!(wr[k + 2], SENTINEL);
    assert_relative_eq!(wr[k] + wr[k + 1], 1.0, epsilon = 1e-12);
    assert_eq!(wr[3 * k], SENTINEL);
    assert_relative_eq!(wr[3 * k + 1] + wr[3 * k + 2], 1.0, epsilon = 1e-12);
}

/// Test that cells outside `[imin, imax]` are never written.
#[test]
fn test_weights_cells_outside_range_untouched() {
    let (n_cells, k) = (6, 2);
    let sigma = vec![0.0; n_cells * k];
    let w = vec![0.5; n_cells * k];
    let mut wr = vec![SENTINEL; n_cells * k];

    weights(2, 3, n_cells, k, &sigma, &w, &mut wr).unwrap();

    assert!(wr[..2 * k].iter().all(|&v| v == SENTINEL));
    assert!(wr[4 * k..].iter().all(|&v| v == SENTINEL));
    assert!(wr[2 * k..4 * k].iter().all(|&v| v == 0.5));
}

/// Test single precision support.
#[test]
fn test_weights_f32() {
    let sigma = [0.0f32; 6];
    let w = [0.25f32, 0.75, 0.25, 0.75, 0.25, 0.75];
    let mut wr = [0.0f32; 6];

    compute_weights(
        1,
        1,
        &ArrayView::from_shape(&sigma, [3, 2]).unwrap(),
        &ArrayView::from_shape(&w, [3, 2]).unwrap(),
        &mut ArrayViewMut::from_shape(&mut wr, [3, 2]).unwrap(),
    )
    .unwrap();

    assert_relative_eq!(wr[2], 0.25, epsilon = 1e-6);
    assert_relative_eq!(wr[3], 0.75, epsilon = 1e-6);
}
