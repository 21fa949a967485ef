//! Execution engine for WENO reconstruction steps.
//!
//! ## Purpose
//!
//! This module provides the sequential entry points that validate a whole
//! call and then drive the per-cell kernels of the algorithms layer over the
//! requested cell range. It is the reference execution path; extension crates
//! supply parallel replacements with the same signatures.
//!
//! ## Design notes
//!
//! * Every entry point validates first and writes second.
//! * Contiguous arrays are indexed through row slices, strided ones through
//!   their layout offsets.
//! * The fused `reconstruct` runs all stencil reconstructions before any
//!   combination, like two separate calls.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * No entry point allocates.
//! * Each cell's output depends only on that cell's inputs.
//!
//! ## Non-goals
//!
//! * This module does not compute smoothness indicators or coefficients.
//! * This module does not handle parallel execution directly (handled by extension crates).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::combine::{PointSlots, cell_combine};
use crate::algorithms::stencils::{StencilShape, cell_stencils};
use crate::algorithms::weights::cell_weights;
use crate::engine::validator::{ReconstructDims, Validator};
use crate::math::nonlinear::epsilon;
use crate::primitives::errors::WenoError;
use crate::primitives::layout::{ArrayView, ArrayViewMut};
use crate::primitives::shift::ShiftRange;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom weight pass function
#[doc(hidden)]
pub type WeightsPassFn<T> = fn(
    usize,                      // imin
    usize,                      // imax
    &ArrayView<'_, T, 2>,       // sigma
    &ArrayView<'_, T, 2>,       // w
    &mut ArrayViewMut<'_, T, 2>, // wr (output)
) -> Result<(), WenoError>;

/// Signature for custom fused reconstruction pass function
#[doc(hidden)]
pub type ReconstructPassFn<T> = fn(
    &ArrayView<'_, T, 1>,        // q
    isize,                       // bias
    usize,                       // imin
    usize,                       // imax
    &ArrayView<'_, T, 4>,        // c
    &ArrayView<'_, T, 2>,        // wr
    &mut ArrayViewMut<'_, T, 3>, // qr (scratch)
    &mut ArrayViewMut<'_, T, 2>, // qs (output)
) -> Result<(), WenoError>;

// ============================================================================
// Weight Computation
// ============================================================================

/// Compute nonlinear weights `wr` for cells `imin..=imax`.
///
/// For each cell, `wr[i, r]` is written only for the shifts whose stencil
/// stays inside the grid; other entries are left untouched.
pub fn compute_weights<T: Float>(
    imin: usize,
    imax: usize,
    sigma: &ArrayView<'_, T, 2>,
    w: &ArrayView<'_, T, 2>,
    wr: &mut ArrayViewMut<'_, T, 2>,
) -> Result<(), WenoError> {
    let dims = Validator::check_weights(imin, imax, sigma, w, wr)
        .inspect_err(|err| log::debug!("compute_weights rejected: {err}"))?;
    let (n_cells, k) = (dims.n_cells, dims.order);

    log::trace!("compute_weights: cells {imin}..={imax} of {n_cells}, k={k}");

    let sigma = sigma.data();
    let w = w.data();
    let wr = wr.data_mut();
    let eps = epsilon::<T>();

    for i in imin..=imax {
        let row = i * k..(i + 1) * k;
        cell_weights(
            &sigma[row.clone()],
            &w[row.clone()],
            &mut wr[row],
            ShiftRange::admissible(i, n_cells, k),
            eps,
        );
    }

    Ok(())
}

// ============================================================================
// Reconstruction
// ============================================================================

/// Compute low-order reconstructions `qr` for cells `imin..=imax`.
///
/// Only shifts eligible under `bias` and inside the grid are written.
pub fn reconstruct_stencils<T: Float>(
    q: &ArrayView<'_, T, 1>,
    bias: isize,
    imin: usize,
    imax: usize,
    c: &ArrayView<'_, T, 4>,
    qr: &mut ArrayViewMut<'_, T, 3>,
) -> Result<(), WenoError> {
    let dims = Validator::check_stencils(q, bias, imin, imax, c, &qr.view())
        .inspect_err(|err| log::debug!("reconstruct_stencils rejected: {err}"))?;

    log::trace!(
        "reconstruct_stencils: cells {imin}..={imax} of {}, k={}, n={}, bias={bias}",
        dims.n_cells,
        dims.order,
        dims.points
    );

    stencil_pass(q, bias, imin, imax, c.data(), qr.data_mut(), dims);
    Ok(())
}

/// Combine `qr` with `wr` into `qs` for cells `imin..=imax`.
///
/// Each cell sums over the same shifts `reconstruct_stencils` wrote for it.
/// With a nonzero bias the caller keeps `wr` zero on excluded shifts, so
/// the summed weights still add up to one.
pub fn combine<T: Float>(
    wr: &ArrayView<'_, T, 2>,
    qr: &ArrayView<'_, T, 3>,
    bias: isize,
    imin: usize,
    imax: usize,
    qs: &mut ArrayViewMut<'_, T, 2>,
) -> Result<(), WenoError> {
    let dims = Validator::check_combine(wr, qr, bias, imin, imax, qs.layout())
        .inspect_err(|err| log::debug!("combine rejected: {err}"))?;

    log::trace!(
        "combine: cells {imin}..={imax} of {}, k={}, n={}, bias={bias}",
        dims.n_cells,
        dims.order,
        dims.points
    );

    combine_pass(wr.data(), qr.data(), bias, imin, imax, qs, dims);
    Ok(())
}

/// Reconstruct `qs` from cell averages `q` for cells `imin..=imax`.
///
/// Runs the stencil reconstruction into the scratch `qr` over every cell,
/// then combines with the nonlinear weights `wr`.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct<T: Float>(
    q: &ArrayView<'_, T, 1>,
    bias: isize,
    imin: usize,
    imax: usize,
    c: &ArrayView<'_, T, 4>,
    wr: &ArrayView<'_, T, 2>,
    qr: &mut ArrayViewMut<'_, T, 3>,
    qs: &mut ArrayViewMut<'_, T, 2>,
) -> Result<(), WenoError> {
    let dims = Validator::check_reconstruct(q, bias, imin, imax, c, wr, &qr.view(), qs.layout())
        .inspect_err(|err| log::debug!("reconstruct rejected: {err}"))?;

    log::trace!(
        "reconstruct: cells {imin}..={imax} of {}, k={}, n={}, bias={bias}",
        dims.n_cells,
        dims.order,
        dims.points
    );

    stencil_pass(q, bias, imin, imax, c.data(), qr.data_mut(), dims);
    combine_pass(wr.data(), qr.view().data(), bias, imin, imax, qs, dims);
    Ok(())
}

// ============================================================================
// Cell Loops
// ============================================================================

fn stencil_pass<T: Float>(
    q: &ArrayView<'_, T, 1>,
    bias: isize,
    imin: usize,
    imax: usize,
    c: &[T],
    qr: &mut [T],
    dims: ReconstructDims,
) {
    let shape = StencilShape {
        order: dims.order,
        points: dims.points,
    };
    let c_len = shape.coeffs_per_cell();
    let qr_len = shape.values_per_cell();

    for i in imin..=imax {
        if let Some(range) = ShiftRange::for_cell(i, dims.n_cells, dims.order, bias) {
            cell_stencils(
                q,
                i,
                &c[i * c_len..(i + 1) * c_len],
                &mut qr[i * qr_len..(i + 1) * qr_len],
                shape,
                range,
            );
        }
    }
}

fn combine_pass<T: Float>(
    wr: &[T],
    qr: &[T],
    bias: isize,
    imin: usize,
    imax: usize,
    qs: &mut ArrayViewMut<'_, T, 2>,
    dims: ReconstructDims,
) {
    let ReconstructDims {
        n_cells,
        order: k,
        points: n,
    } = dims;
    let layout = *qs.layout();
    let qs = qs.data_mut();

    for i in imin..=imax {
        if let Some(range) = ShiftRange::for_cell(i, n_cells, k, bias) {
            let slots = PointSlots {
                base: layout.offset_of([i, 0]),
                stride: layout.strides[1],
            };
            cell_combine(
                &wr[i * k..(i + 1) * k],
                &qr[i * k * n..(i + 1) * k * n],
                qs,
                slots,
                n,
                range,
            );
        }
    }
}
