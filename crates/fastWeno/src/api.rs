//! High-level API for WENO reconstruction with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for WENO with
//! parallel execution. It wraps the `weno` builder and injects the rayon
//! passes into the reconstructor it builds.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `weno` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Feature-Gated**: Without the `cpu` feature every reconstructor runs sequentially.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelWenoBuilder`] via `Weno::new()`.
//! 2. Chain configuration methods (`.order()`, `.points()`, `.bias()`, `.parallel()`).
//! 3. Call `.build()` to obtain a [`WenoReconstructor`].

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{compute_weights_parallel, reconstruct_parallel};

// External dependencies
use num_traits::Float;

// Publicly re-exported types
pub use weno::internals::api::{
    ArrayView, ArrayViewMut, EPSILON, ErrorKind, Layout, ShiftRange, WenoBuilder, WenoError,
    WenoReconstructor, combine, compute_weights, reconstruct, reconstruct_stencils,
};

// ============================================================================
// Extended WENO Builder
// ============================================================================

/// Builder for a WENO reconstructor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelWenoBuilder<T: Float> {
    /// Base builder from the weno crate
    pub base: WenoBuilder<T>,
}

impl<T: Float + Send + Sync> Default for ParallelWenoBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> ParallelWenoBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the weno builder
    /// * parallel: true (fastWeno extension)
    pub fn new() -> Self {
        Self {
            base: WenoBuilder::new(),
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the stencil order `k`.
    pub fn order(mut self, order: usize) -> Self {
        self.base = self.base.order(order);
        self
    }

    /// Set the number of evaluation points per cell.
    pub fn points(mut self, points: usize) -> Self {
        self.base = self.base.points(points);
        self
    }

    /// Set the bias parameter.
    pub fn bias(mut self, bias: isize) -> Self {
        self.base = self.base.bias(bias);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the reconstructor.
    pub fn build(self) -> Result<WenoReconstructor<T>, WenoError> {
        let mut builder = self.base;

        // Determine parallel mode: user choice OR default to true for fastWeno
        let parallel = builder.parallel.unwrap_or(true);

        #[cfg(feature = "cpu")]
        {
            if parallel {
                builder = builder
                    .custom_weights_pass(compute_weights_parallel)
                    .custom_reconstruct_pass(reconstruct_parallel);
            } else {
                builder.custom_weights_pass = None;
                builder.custom_reconstruct_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            if parallel {
                log::debug!("parallel execution requested without the 'cpu' feature");
            }
            builder.custom_weights_pass = None;
            builder.custom_reconstruct_pass = None;
        }

        builder.build()
    }
}
