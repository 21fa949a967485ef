//! Parallel execution engine for WENO reconstruction steps.
//!
//! ## Purpose
//!
//! This module provides the parallel weight and reconstruction passes that
//! are injected into the `weno` crate's reconstructor. Cells are independent,
//! so every output array is split into disjoint per-cell chunks and the
//! per-cell kernels run on all available CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential passes, same signatures.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Fusion**: Each task reconstructs its cell's stencils and immediately
//!   combines them; a cell's combination only reads that cell's stencils.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Per-cell chunks**: `wr` and `qr` rows are contiguous; `qs` is split
//!   into records of one cell stride, which the validator guarantees do not
//!   overlap.
//! * **Integration**: Plugs into the `weno` reconstructor via the
//!   `WeightsPassFn` / `ReconstructPassFn` hooks.
//!
//! ## Invariants
//!
//! * Validation is identical to the sequential passes and precedes any write.
//! * Per-cell accumulation order is unchanged, so results equal the
//!   sequential results bit for bit.
//!
//! ## Non-goals
//!
//! * This module does not implement the per-cell kernels (handled by `weno::algorithms`).
//! * This module does not decide between sequential and parallel execution (handled by the API).

// External dependencies
use num_traits::Float;
use rayon::prelude::*;

// Export dependencies from weno crate
use weno::internals::algorithms::combine::{PointSlots, cell_combine};
use weno::internals::algorithms::stencils::{StencilShape, cell_stencils};
use weno::internals::algorithms::weights::cell_weights;
use weno::internals::engine::executor::reconstruct;
use weno::internals::engine::validator::{ReconstructDims, Validator};
use weno::internals::math::nonlinear::epsilon;
use weno::internals::primitives::errors::WenoError;
use weno::internals::primitives::layout::{ArrayView, ArrayViewMut};
use weno::internals::primitives::shift::ShiftRange;

// ============================================================================
// Parallel Weight Computation
// ============================================================================

/// Compute nonlinear weights for cells `imin..=imax` in parallel.
pub fn compute_weights_parallel<T>(
    imin: usize,
    imax: usize,
    sigma: &ArrayView<'_, T, 2>,
    w: &ArrayView<'_, T, 2>,
    wr: &mut ArrayViewMut<'_, T, 2>,
) -> Result<(), WenoError>
where
    T: Float + Send + Sync,
{
    let dims = Validator::check_weights(imin, imax, sigma, w, wr)
        .inspect_err(|err| log::debug!("compute_weights_parallel rejected: {err}"))?;
    let (n_cells, k) = (dims.n_cells, dims.order);

    log::trace!("compute_weights_parallel: cells {imin}..={imax} of {n_cells}, k={k}");

    let sigma = sigma.data();
    let w = w.data();
    let eps = epsilon::<T>();

    wr.data_mut()[imin * k..(imax + 1) * k]
        .par_chunks_mut(k)
        .enumerate()
        .for_each(|(offset, wr_cell)| {
            let i = imin + offset;
            let row = i * k..(i + 1) * k;
            cell_weights(
                &sigma[row.clone()],
                &w[row],
                wr_cell,
                ShiftRange::admissible(i, n_cells, k),
                eps,
            );
        });

    Ok(())
}

// ============================================================================
// Parallel Reconstruction
// ============================================================================

/// Reconstruct `qs` from cell averages `q` for cells `imin..=imax` in parallel.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_parallel<T>(
    q: &ArrayView<'_, T, 1>,
    bias: isize,
    imin: usize,
    imax: usize,
    c: &ArrayView<'_, T, 4>,
    wr: &ArrayView<'_, T, 2>,
    qr: &mut ArrayViewMut<'_, T, 3>,
    qs: &mut ArrayViewMut<'_, T, 2>,
) -> Result<(), WenoError>
where
    T: Float + Send + Sync,
{
    // A single cell has no record stride to split on.
    if imin == imax {
        return reconstruct(q, bias, imin, imax, c, wr, qr, qs);
    }

    let dims = Validator::check_reconstruct(q, bias, imin, imax, c, wr, &qr.view(), qs.layout())
        .inspect_err(|err| log::debug!("reconstruct_parallel rejected: {err}"))?;
    let ReconstructDims {
        n_cells,
        order: k,
        points: n,
    } = dims;

    log::trace!(
        "reconstruct_parallel: cells {imin}..={imax} of {n_cells}, k={k}, n={n}, bias={bias}"
    );

    let shape = StencilShape {
        order: k,
        points: n,
    };
    let c_len = shape.coeffs_per_cell();
    let qr_len = shape.values_per_cell();
    let point_stride = qs.layout().strides[1];

    let c = c.data();
    let wr = wr.data();
    let qr_cells = &mut qr.data_mut()[imin * qr_len..(imax + 1) * qr_len];
    let (qs_records, record_len, local) = qs.cell_records(imin..imax + 1);

    qr_cells
        .par_chunks_mut(qr_len)
        .zip(qs_records.par_chunks_mut(record_len))
        .enumerate()
        .for_each(|(offset, (qr_cell, qs_cell))| {
            let i = imin + offset;
            if let Some(range) = ShiftRange::for_cell(i, n_cells, k, bias) {
                cell_stencils(q, i, &c[i * c_len..(i + 1) * c_len], qr_cell, shape, range);
                cell_combine(
                    &wr[i * k..(i + 1) * k],
                    qr_cell,
                    qs_cell,
                    PointSlots {
                        base: local,
                        stride: point_stride,
                    },
                    n,
                    range,
                );
            }
        });

    Ok(())
}
