//! High-level API for WENO reconstruction.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point for solvers that call
//! the WENO kernels every time step. It implements a fluent builder for the
//! stencil configuration and a reconstructor that owns the per-step scratch
//! buffers, so the solver only hands in its own arrays.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (fifth-order WENO,
//!   two points per cell, unbiased).
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Pluggable**: Extension crates inject parallel passes through hidden hooks.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WenoBuilder`] via `Weno::new()`.
//! 2. Chain configuration methods (`.order()`, `.points()`, `.bias()`).
//! 3. Call `.build()` to obtain a [`WenoReconstructor`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ReconstructPassFn, WeightsPassFn};
use crate::engine::validator::Validator;
use crate::primitives::buffer::WenoBuffer;

// Publicly re-exported types
pub use crate::engine::executor::{combine, compute_weights, reconstruct, reconstruct_stencils};
pub use crate::math::dot::dot;
pub use crate::math::nonlinear::EPSILON;
pub use crate::primitives::errors::{ErrorKind, WenoError};
pub use crate::primitives::layout::{ArrayView, ArrayViewMut, Layout};
pub use crate::primitives::shift::ShiftRange;

/// Default stencil order (fifth-order WENO).
const DEFAULT_ORDER: usize = 3;

/// Default evaluation points per cell (left and right faces).
const DEFAULT_POINTS: usize = 2;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a WENO reconstructor.
#[derive(Debug, Clone)]
pub struct WenoBuilder<T> {
    /// Stencil order `k`; the reconstruction is of order `2k - 1`.
    pub order: Option<usize>,

    /// Evaluation points per cell `n`.
    pub points: Option<usize>,

    /// Bias parameter restricting eligible shifts.
    pub bias: Option<isize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom weight pass function.
    #[doc(hidden)]
    pub custom_weights_pass: Option<WeightsPassFn<T>>,

    /// Custom fused reconstruction pass function.
    #[doc(hidden)]
    pub custom_reconstruct_pass: Option<ReconstructPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for WenoBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> WenoBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            order: None,
            points: None,
            bias: None,
            custom_weights_pass: None,
            custom_reconstruct_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the stencil order `k` (number of cells per low-order stencil).
    pub fn order(mut self, order: usize) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Set the number of evaluation points per cell.
    pub fn points(mut self, points: usize) -> Self {
        if self.points.is_some() {
            self.duplicate_param = Some("points");
        }
        self.points = Some(points);
        self
    }

    /// Set the bias parameter.
    ///
    /// `s > 0` keeps shifts `s..k`, `s < 0` keeps shifts `0..k+s`.
    /// The optimal weights `w` passed to each step must be zero on the
    /// excluded shifts.
    pub fn bias(mut self, bias: isize) -> Self {
        if self.bias.is_some() {
            self.duplicate_param = Some("bias");
        }
        self.bias = Some(bias);
        self
    }

    /// Set parallel execution hint (used by extension crates).
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom weight pass function.
    #[doc(hidden)]
    pub fn custom_weights_pass(mut self, pass: WeightsPassFn<T>) -> Self {
        self.custom_weights_pass = Some(pass);
        self
    }

    /// Set a custom fused reconstruction pass function.
    #[doc(hidden)]
    pub fn custom_reconstruct_pass(mut self, pass: ReconstructPassFn<T>) -> Self {
        self.custom_reconstruct_pass = Some(pass);
        self
    }

    /// Validate the configuration and build the reconstructor.
    pub fn build(self) -> Result<WenoReconstructor<T>, WenoError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let order = self.order.unwrap_or(DEFAULT_ORDER);
        let points = self.points.unwrap_or(DEFAULT_POINTS);
        let bias = self.bias.unwrap_or(0);

        if order == 0 {
            return Err(WenoError::InvalidOrder(order));
        }
        Validator::validate_points(points)?;
        Validator::validate_bias(bias, order)?;

        Ok(WenoReconstructor {
            order,
            points,
            bias,
            weights_pass: self.custom_weights_pass.unwrap_or(compute_weights::<T>),
            reconstruct_pass: self.custom_reconstruct_pass.unwrap_or(reconstruct::<T>),
            buffer: WenoBuffer::default(),
        })
    }
}

// ============================================================================
// Reconstructor
// ============================================================================

/// Configured WENO reconstructor owning its scratch buffers.
#[derive(Debug, Clone)]
pub struct WenoReconstructor<T> {
    order: usize,
    points: usize,
    bias: isize,
    weights_pass: WeightsPassFn<T>,
    reconstruct_pass: ReconstructPassFn<T>,
    buffer: WenoBuffer<T>,
}

impl<T: Float> WenoReconstructor<T> {
    /// Stencil order `k`.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Evaluation points per cell `n`.
    pub fn points(&self) -> usize {
        self.points
    }

    /// Bias parameter `s`.
    pub fn bias(&self) -> isize {
        self.bias
    }

    /// Run one full reconstruction step for cells `imin..=imax`.
    ///
    /// Computes nonlinear weights from `sigma` and `w`, reconstructs every
    /// eligible stencil from `q` with coefficients `c`, and writes the
    /// high-order values to `qs`. `c` must have shape `(N, k, n, k)` matching
    /// the configured order and points.
    ///
    /// With a nonzero bias, `w` must be zero on every shift the bias
    /// excludes (`ExcludedWeight` otherwise), so the eligible weights alone
    /// sum to one. All arguments are validated before the scratch buffers
    /// are touched; after a rejected call, [`Self::nonlinear_weights`] and
    /// [`Self::stencil_values`] still describe the last successful step.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        &mut self,
        q: &ArrayView<'_, T, 1>,
        imin: usize,
        imax: usize,
        sigma: &ArrayView<'_, T, 2>,
        w: &ArrayView<'_, T, 2>,
        c: &ArrayView<'_, T, 4>,
        qs: &mut ArrayViewMut<'_, T, 2>,
    ) -> Result<(), WenoError> {
        let dims = Validator::check_step(
            q,
            self.bias,
            imin,
            imax,
            sigma,
            w,
            c,
            qs.layout(),
            self.order,
            self.points,
        )
        .inspect_err(|err| log::debug!("reconstruction step rejected: {err}"))?;

        self.buffer.prepare(dims.n_cells, self.order, self.points);
        let (mut wr, mut qr) = self.buffer.views_mut()?;

        (self.weights_pass)(imin, imax, sigma, w, &mut wr)?;
        (self.reconstruct_pass)(q, self.bias, imin, imax, c, &wr.view(), &mut qr, qs)
    }

    /// Nonlinear weights `wr` of the last step, shape `(N, k)`.
    pub fn nonlinear_weights(&self) -> Result<ArrayView<'_, T, 2>, WenoError> {
        self.buffer.weights_view()
    }

    /// Low-order reconstructions `qr` of the last step, shape `(N, k, n)`.
    pub fn stencil_values(&self) -> Result<ArrayView<'_, T, 3>, WenoError> {
        self.buffer.stencils_view()
    }
}
