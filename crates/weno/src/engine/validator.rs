//! Precondition and layout validation for WENO kernels.
//!
//! ## Purpose
//!
//! This module checks, before any output is touched, that every array a
//! kernel will read or write has the layout and shape the kernel assumes and
//! that the requested cell range and bias keep every stencil inside the
//! grid. Once a call passes validation its hot loops index without checks.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Layout checks run before shape checks, shape checks
//!   before range checks.
//! * **Shared**: The sequential engine and parallel extension crates call
//!   the same `check_*` entry points.
//!
//! ## Key concepts
//!
//! * **Dimensions**: `N` and `k` come from `w` (weights) or `c`/`qr`
//!   (reconstruction); every other array must agree with them.
//! * **Cell range**: Admissible shifts shrink monotonically towards the grid
//!   edges, so checking the first and last processed cell covers all cells.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check values for finiteness.
//! * This module does not correct or reshape invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WenoError;
use crate::primitives::layout::{ArrayView, ArrayViewMut, Layout};
use crate::primitives::shift::ShiftRange;

// ============================================================================
// Validated Dimensions
// ============================================================================

/// Grid dimensions of a validated weight computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightsDims {
    /// Number of cells `N`.
    pub n_cells: usize,

    /// Stencil order `k`.
    pub order: usize,
}

/// Grid dimensions of a validated reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconstructDims {
    /// Number of cells `N`.
    pub n_cells: usize,

    /// Stencil order `k`.
    pub order: usize,

    /// Evaluation points per cell `n`.
    pub points: usize,
}

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for WENO kernel arguments.
///
/// Provides static methods returning `Result<_, WenoError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Layout Validation
    // ========================================================================

    /// Validate that a layout is row-major with zero offset.
    pub fn validate_contiguous<const D: usize>(
        array: &'static str,
        layout: &Layout<D>,
    ) -> Result<(), WenoError> {
        if !layout.is_contiguous() {
            return Err(WenoError::NonContiguous { array });
        }
        Ok(())
    }

    /// Validate the extent of every axis.
    pub fn validate_shape<const D: usize>(
        array: &'static str,
        layout: &Layout<D>,
        expected: [usize; D],
    ) -> Result<(), WenoError> {
        for axis in 0..D {
            if layout.shape[axis] != expected[axis] {
                return Err(WenoError::ShapeMismatch {
                    array,
                    axis,
                    expected: expected[axis],
                    got: layout.shape[axis],
                });
            }
        }
        Ok(())
    }

    /// Validate a strided cell field `q` covering `n_cells` cells.
    pub fn validate_cell_field(layout: &Layout<1>, n_cells: usize) -> Result<(), WenoError> {
        Self::validate_shape("q", layout, [n_cells])?;
        if n_cells > 1 && layout.strides[0] == 0 {
            return Err(WenoError::AliasedLayout { array: "q" });
        }
        Ok(())
    }

    /// Validate a strided point field `qs` of shape `(n_cells, points)`.
    ///
    /// Each cell's points must lie inside its own record of `strides[0]`
    /// elements so that cells can be written independently. Layouts whose
    /// records overlap are `AliasedLayout`; layouts that are disjoint but
    /// interleave cells (point-major, such as the transpose of a row-major
    /// `(n, N)` array) are `UnsupportedLayout`.
    pub fn validate_point_field(
        layout: &Layout<2>,
        n_cells: usize,
        points: usize,
    ) -> Result<(), WenoError> {
        Self::validate_shape("qs", layout, [n_cells, points])?;

        let [cell_stride, point_stride] = layout.strides;
        if points > 1 && point_stride == 0 {
            return Err(WenoError::AliasedLayout { array: "qs" });
        }
        if n_cells > 1 && points > 0 {
            if cell_stride == 0 {
                return Err(WenoError::AliasedLayout { array: "qs" });
            }
            let local = layout.offset % cell_stride;
            if local + (points - 1) * point_stride >= cell_stride {
                let interleaved = (n_cells - 1) * cell_stride < point_stride;
                return Err(if interleaved {
                    WenoError::UnsupportedLayout { array: "qs" }
                } else {
                    WenoError::AliasedLayout { array: "qs" }
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the stencil order against the grid size.
    pub fn validate_order(order: usize, n_cells: usize) -> Result<(), WenoError> {
        if order == 0 {
            return Err(WenoError::InvalidOrder(order));
        }
        if n_cells < order {
            return Err(WenoError::TooFewCells {
                got: n_cells,
                min: order,
            });
        }
        Ok(())
    }

    /// Validate the number of evaluation points.
    pub fn validate_points(points: usize) -> Result<(), WenoError> {
        if points == 0 {
            return Err(WenoError::InvalidPoints(points));
        }
        Ok(())
    }

    /// Validate the inclusive cell range `[imin, imax]`.
    pub fn validate_range(imin: usize, imax: usize, n_cells: usize) -> Result<(), WenoError> {
        if imin > imax || imax >= n_cells {
            return Err(WenoError::InvalidRange {
                imin,
                imax,
                n_cells,
            });
        }
        Ok(())
    }

    /// Validate that the bias leaves at least one eligible shift.
    pub fn validate_bias(bias: isize, order: usize) -> Result<(), WenoError> {
        if ShiftRange::biased(order, bias).is_none() {
            return Err(WenoError::InvalidBias { bias, order });
        }
        Ok(())
    }

    /// Validate that every cell in `[imin, imax]` keeps a usable stencil.
    pub fn validate_cell_ranges(
        imin: usize,
        imax: usize,
        n_cells: usize,
        order: usize,
        bias: isize,
    ) -> Result<(), WenoError> {
        for cell in [imin, imax] {
            if ShiftRange::for_cell(cell, n_cells, order, bias).is_none() {
                return Err(WenoError::NoAdmissibleStencil { cell, bias });
            }
        }
        Ok(())
    }

    /// Validate that `w` is zero on every in-grid shift the bias excludes.
    ///
    /// Weights are normalized over the admissible shifts while the
    /// combination sums only eligible ones; a nonzero excluded weight would
    /// leave the blend unnormalized.
    pub fn validate_excluded_weights<T: Float>(
        w: &ArrayView<'_, T, 2>,
        imin: usize,
        imax: usize,
        bias: isize,
    ) -> Result<(), WenoError> {
        let [n_cells, order] = w.shape();
        if bias == 0 {
            return Ok(());
        }
        let eligible =
            ShiftRange::biased(order, bias).ok_or(WenoError::InvalidBias { bias, order })?;

        for cell in imin..=imax {
            for shift in ShiftRange::admissible(cell, n_cells, order).iter() {
                if !eligible.contains(shift) && w.at([cell, shift]) != T::zero() {
                    return Err(WenoError::ExcludedWeight { cell, shift, bias });
                }
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), WenoError> {
        if let Some(param) = duplicate_param {
            return Err(WenoError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Kernel Entry Points
    // ========================================================================

    /// Validate the arguments of a weight computation.
    pub fn check_weights<T>(
        imin: usize,
        imax: usize,
        sigma: &ArrayView<'_, T, 2>,
        w: &ArrayView<'_, T, 2>,
        wr: &ArrayViewMut<'_, T, 2>,
    ) -> Result<WeightsDims, WenoError> {
        Self::validate_contiguous("sigma", sigma.layout())?;
        Self::validate_contiguous("w", w.layout())?;
        Self::validate_contiguous("wr", wr.layout())?;

        let [n_cells, order] = w.shape();
        Self::validate_shape("sigma", sigma.layout(), [n_cells, order])?;
        Self::validate_shape("wr", wr.layout(), [n_cells, order])?;

        Self::validate_order(order, n_cells)?;
        Self::validate_range(imin, imax, n_cells)?;

        Ok(WeightsDims { n_cells, order })
    }

    /// Validate the arguments of a stencil reconstruction.
    pub fn check_stencils<T>(
        q: &ArrayView<'_, T, 1>,
        bias: isize,
        imin: usize,
        imax: usize,
        c: &ArrayView<'_, T, 4>,
        qr: &ArrayView<'_, T, 3>,
    ) -> Result<ReconstructDims, WenoError> {
        Self::validate_contiguous("c", c.layout())?;
        Self::validate_contiguous("qr", qr.layout())?;

        let [n_cells, order, points, _] = c.shape();
        Self::validate_shape("c", c.layout(), [n_cells, order, points, order])?;
        Self::validate_shape("qr", qr.layout(), [n_cells, order, points])?;
        Self::validate_cell_field(q.layout(), n_cells)?;

        Self::validate_order(order, n_cells)?;
        Self::validate_points(points)?;
        Self::validate_range(imin, imax, n_cells)?;
        Self::validate_bias(bias, order)?;
        Self::validate_cell_ranges(imin, imax, n_cells, order, bias)?;

        Ok(ReconstructDims {
            n_cells,
            order,
            points,
        })
    }

    /// Validate the arguments of a weighted combination.
    pub fn check_combine<T>(
        wr: &ArrayView<'_, T, 2>,
        qr: &ArrayView<'_, T, 3>,
        bias: isize,
        imin: usize,
        imax: usize,
        qs: &Layout<2>,
    ) -> Result<ReconstructDims, WenoError> {
        Self::validate_contiguous("wr", wr.layout())?;
        Self::validate_contiguous("qr", qr.layout())?;

        let [n_cells, order, points] = qr.shape();
        Self::validate_shape("wr", wr.layout(), [n_cells, order])?;
        Self::validate_points(points)?;
        Self::validate_point_field(qs, n_cells, points)?;

        Self::validate_order(order, n_cells)?;
        Self::validate_range(imin, imax, n_cells)?;
        Self::validate_bias(bias, order)?;
        Self::validate_cell_ranges(imin, imax, n_cells, order, bias)?;

        Ok(ReconstructDims {
            n_cells,
            order,
            points,
        })
    }

    /// Validate the caller arrays of a full reconstruction step.
    ///
    /// Covers everything the weight and reconstruction passes will check on
    /// `q`, `sigma`, `w`, `c` and `qs`, plus the excluded weights, so a step
    /// can be rejected before its scratch buffers are touched.
    #[allow(clippy::too_many_arguments)]
    pub fn check_step<T: Float>(
        q: &ArrayView<'_, T, 1>,
        bias: isize,
        imin: usize,
        imax: usize,
        sigma: &ArrayView<'_, T, 2>,
        w: &ArrayView<'_, T, 2>,
        c: &ArrayView<'_, T, 4>,
        qs: &Layout<2>,
        order: usize,
        points: usize,
    ) -> Result<ReconstructDims, WenoError> {
        Self::validate_contiguous("sigma", sigma.layout())?;
        Self::validate_contiguous("w", w.layout())?;
        Self::validate_contiguous("c", c.layout())?;

        let n_cells = c.dim(0);
        Self::validate_shape("c", c.layout(), [n_cells, order, points, order])?;
        Self::validate_shape("w", w.layout(), [n_cells, order])?;
        Self::validate_shape("sigma", sigma.layout(), [n_cells, order])?;
        Self::validate_cell_field(q.layout(), n_cells)?;

        Self::validate_order(order, n_cells)?;
        Self::validate_points(points)?;
        Self::validate_point_field(qs, n_cells, points)?;
        Self::validate_range(imin, imax, n_cells)?;
        Self::validate_bias(bias, order)?;
        Self::validate_cell_ranges(imin, imax, n_cells, order, bias)?;
        Self::validate_excluded_weights(w, imin, imax, bias)?;

        Ok(ReconstructDims {
            n_cells,
            order,
            points,
        })
    }

    /// Validate the arguments of a fused reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn check_reconstruct<T>(
        q: &ArrayView<'_, T, 1>,
        bias: isize,
        imin: usize,
        imax: usize,
        c: &ArrayView<'_, T, 4>,
        wr: &ArrayView<'_, T, 2>,
        qr: &ArrayView<'_, T, 3>,
        qs: &Layout<2>,
    ) -> Result<ReconstructDims, WenoError> {
        let dims = Self::check_stencils(q, bias, imin, imax, c, qr)?;
        Self::check_combine(wr, qr, bias, imin, imax, qs)?;
        Ok(dims)
    }
}
