#![cfg(feature = "dev")]
//! Tests for the numerical building blocks.
//!
//! These tests verify the math layer used in WENO for:
//! - Strided inner products
//! - Reproducible accumulation order
//! - The regularized nonlinear weight formula
//!
//! ## Test Organization
//!
//! 1. **Dot Product** - Strides, empty input, accumulation order
//! 2. **Nonlinear Weights** - Alpha formula and epsilon conversion

use approx::assert_relative_eq;

use weno::internals::math::dot::dot;
use weno::internals::math::nonlinear::{EPSILON, alpha, epsilon};

// ============================================================================
// Dot Product Tests
// ============================================================================

/// Test a contiguous dot product.
#[test]
fn test_dot_contiguous() {
    let u = [1.0, 2.0, 3.0];
    let v = [4.0, 5.0, 6.0];
    assert_eq!(dot(&u, &v, 1), 32.0);
}

/// Test a strided dot product reading one component of records.
#[test]
fn test_dot_strided() {
    let u = [1.0, -1.0, 0.5];
    let v = [2.0, 99.0, 3.0, 99.0, 8.0];
    assert_eq!(dot(&u, &v, 2), 2.0 - 3.0 + 4.0);
}

/// Test that trailing elements beyond the stencil are ignored.
#[test]
fn test_dot_longer_operand() {
    let u = [0.5, 0.5];
    let v = [1.0, 3.0, 1e300, f64::NAN];
    assert_eq!(dot(&u, &v, 1), 2.0);
}

/// Test that an empty stencil yields zero.
#[test]
fn test_dot_empty() {
    let u: [f64; 0] = [];
    assert_eq!(dot(&u, &[], 1), 0.0);
}

/// Test strict left-to-right accumulation.
///
/// `(1e16 + 1) - 1e16` is 0 in double precision while any reordering that
/// adds the small term last gives 1.
#[test]
fn test_dot_accumulation_order() {
    let u = [1.0, 1.0, -1.0];
    let v = [1e16, 1.0, 1e16];
    assert_eq!(dot(&u, &v, 1), 0.0);

    let v = [1e16, -1e16, 1.0];
    let u = [1.0, 1.0, 1.0];
    assert_eq!(dot(&u, &v, 1), 1.0);
}

/// Test that the sum starts from the first product.
///
/// Starting from `+0.0` would turn a lone `-0.0` product into `+0.0`.
#[test]
fn test_dot_negative_zero() {
    let result: f64 = dot(&[-1.0], &[0.0], 1);
    assert!(result == 0.0 && result.is_sign_negative());
}

// ============================================================================
// Nonlinear Weight Tests
// ============================================================================

/// Test the alpha formula.
#[test]
fn test_alpha_formula() {
    assert_relative_eq!(alpha(0.3, 0.0, 1e-5), 0.3 / 1e-10, max_relative = 1e-14);
    assert_relative_eq!(alpha(1.0, 1.0, 0.0), 1.0);
    assert_relative_eq!(alpha(0.5, 0.5, 0.5), 0.5);
}

/// Test epsilon conversion to single and double precision.
#[test]
fn test_epsilon_conversion() {
    assert_eq!(epsilon::<f64>().to_bits(), EPSILON.to_bits());
    assert_eq!(epsilon::<f32>().to_bits(), 1e-5f32.to_bits());
}
