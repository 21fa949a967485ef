//! Layer 3: Algorithms
//!
//! This layer implements the per-cell WENO kernels: nonlinear weights,
//! low-order stencil reconstruction and the weighted combination. Each
//! function handles exactly one cell so the engine layer (or an extension
//! crate) can drive the cell loop sequentially or in parallel.

// Nonlinear weights from smoothness indicators.
pub mod weights;

// Low-order reconstructions from cell averages.
pub mod stencils;

// Weighted combination into the high-order reconstruction.
pub mod combine;
