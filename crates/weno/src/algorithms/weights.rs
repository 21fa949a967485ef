//! Nonlinear WENO weights for a single cell.
//!
//! ## Purpose
//!
//! Converts the smoothness indicators of one cell into normalized weights
//! that favour smooth stencils and suppress stencils crossing a
//! discontinuity.
//!
//! ## Key concepts
//!
//! * **Alpha**: `w_r / (eps + sigma_r)^2`, see [`alpha`].
//! * **Normalization**: `wr_r = alpha_r / sum(alpha)` over the admissible shifts.
//! * **Collapse**: Equal indicators give back the optimal linear weights.
//!
//! ## Invariants
//!
//! * Shifts are visited in ascending order and `sum(alpha)` starts from zero.
//! * Entries outside the shift range are never written.
//! * Normalized weights sum to one up to rounding.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::nonlinear::alpha;
use crate::primitives::shift::ShiftRange;

/// Normalized nonlinear weights for one cell.
///
/// `sigma`, `w` and `wr` are the cell's rows (length `k`). Only
/// `wr[range.rmin..=range.rmax]` is written.
#[inline]
pub fn cell_weights<T: Float>(sigma: &[T], w: &[T], wr: &mut [T], range: ShiftRange, eps: T) {
    let mut sum_alpha = T::zero();
    for r in range.iter() {
        let a = alpha(w[r], sigma[r], eps);
        wr[r] = a;
        sum_alpha = sum_alpha + a;
    }

    for r in range.iter() {
        wr[r] = wr[r] / sum_alpha;
    }
}
