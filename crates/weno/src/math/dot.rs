//! Strided inner product.
//!
//! ## Purpose
//!
//! Both the low-order stencil reconstruction and the final WENO combination
//! reduce to `sum_j u[j] * v[j * stride]`, with `u` contiguous and `v` read
//! every `stride` elements (a scalar component of a record, or one point of
//! a point-major block).
//!
//! ## Invariants
//!
//! * Terms are accumulated strictly in index order, starting from the first
//!   product rather than from zero. Results are reproducible bit for bit.
//! * No fused multiply-add is used.
//!
//! ## Non-goals
//!
//! * This module does not vectorize or reorder the reduction.

// External dependencies
use num_traits::Float;

/// Compute `sum_{j < u.len()} u[j] * v[j * stride]` in index order.
///
/// `v` must hold at least `(u.len() - 1) * stride + 1` elements and
/// `stride` must be at least 1. An empty `u` yields zero.
#[inline(always)]
pub fn dot<T: Float>(u: &[T], v: &[T], stride: usize) -> T {
    debug_assert!(stride >= 1, "dot: stride must be at least 1");
    debug_assert!(
        u.is_empty() || v.len() > (u.len() - 1) * stride,
        "dot: strided operand too short"
    );

    let mut terms = u
        .iter()
        .zip(v.iter().step_by(stride))
        .map(|(&a, &b)| a * b);

    match terms.next() {
        Some(first) => terms.fold(first, |acc, term| acc + term),
        None => T::zero(),
    }
}
