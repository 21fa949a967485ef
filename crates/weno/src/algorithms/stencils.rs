//! Low-order stencil reconstructions for a single cell.
//!
//! ## Purpose
//!
//! For every usable shift `r`, evaluates the degree `k-1` polynomial that
//! matches the cell averages `q[i-r], ..., q[i-r+k-1]` at each of the `n`
//! evaluation points of cell `i`. The polynomial is encoded entirely in the
//! precomputed coefficients `c[i, r, l, :]`, so evaluation is one dot
//! product per point.
//!
//! ## Invariants
//!
//! * The stencil window is read through the cell field's stride, so a single
//!   component of vector-valued state needs no reshaping.
//! * Only shifts inside `range` are written to `qr`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::dot::dot;
use crate::primitives::layout::ArrayView;
use crate::primitives::shift::ShiftRange;

/// Stencil geometry shared by every cell of one reconstruction.
#[derive(Debug, Clone, Copy)]
pub struct StencilShape {
    /// Stencil order `k` (cells per stencil and number of shifts).
    pub order: usize,

    /// Evaluation points per cell `n`.
    pub points: usize,
}

impl StencilShape {
    /// Elements of `c` belonging to one cell (`k * n * k`).
    #[inline]
    pub fn coeffs_per_cell(&self) -> usize {
        self.order * self.points * self.order
    }

    /// Elements of `qr` belonging to one cell (`k * n`).
    #[inline]
    pub fn values_per_cell(&self) -> usize {
        self.order * self.points
    }
}

/// Low-order reconstructions `qr[i, r, l]` for one cell.
///
/// `coeffs` is the cell's block `c[i, :, :, :]` and `qr` the cell's block
/// `qr[i, :, :]`, both row-major.
#[inline]
pub fn cell_stencils<T: Float>(
    q: &ArrayView<'_, T, 1>,
    cell: usize,
    coeffs: &[T],
    qr: &mut [T],
    shape: StencilShape,
    range: ShiftRange,
) {
    let StencilShape { order: k, points: n } = shape;
    let stride = q.stride().max(1);

    for r in range.iter() {
        let window = q.tail_from([cell - r]);
        let c_shift = &coeffs[r * n * k..(r + 1) * n * k];
        let qr_shift = &mut qr[r * n..(r + 1) * n];

        for (c_point, out) in c_shift.chunks_exact(k).zip(qr_shift.iter_mut()) {
            *out = dot(c_point, window, stride);
        }
    }
}
