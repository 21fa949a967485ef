//! Weighted combination of stencil reconstructions for a single cell.
//!
//! ## Purpose
//!
//! Blends the low-order values `qr[i, r, l]` with the nonlinear weights
//! `wr[i, r]` into the order `2k-1` value `qs[i, l]`. In smooth regions the
//! result approaches the optimal linear combination; next to a jump the
//! oscillating stencils drop out.
//!
//! ## Invariants
//!
//! * Shifts are accumulated in ascending order over the same range the
//!   stencils were reconstructed on, so unreconstructed entries of `qr` are
//!   never read.
//! * `qr` is point-major within a shift, hence the dot product runs with
//!   stride `n`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::dot::dot;
use crate::primitives::shift::ShiftRange;

/// Output placement of one cell's points inside the `qs` backing slice.
#[derive(Debug, Clone, Copy)]
pub struct PointSlots {
    /// Position of `qs[i, 0]`.
    pub base: usize,

    /// Distance between `qs[i, l]` and `qs[i, l + 1]`.
    pub stride: usize,
}

/// High-order reconstructions `qs[i, :]` for one cell.
///
/// `wr` is the cell's row of weights (length `k`), `qr` the cell's block of
/// low-order values (length `k * n`).
#[inline]
pub fn cell_combine<T: Float>(
    wr: &[T],
    qr: &[T],
    qs: &mut [T],
    slots: PointSlots,
    points: usize,
    range: ShiftRange,
) {
    let weights = &wr[range.rmin..=range.rmax];
    for l in 0..points {
        qs[slots.base + l * slots.stride] = dot(weights, &qr[range.rmin * points + l..], points);
    }
}
