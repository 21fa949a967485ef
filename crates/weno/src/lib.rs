//! # WENO (Weighted Essentially Non-Oscillatory reconstruction)
//!
//! High-order WENO reconstruction kernels for finite-volume solvers of
//! conservation laws.
//!
//! ## What is WENO?
//!
//! Given the cell averages of a function, a finite-volume solver needs point
//! values (typically at cell faces). WENO builds `k` low-order polynomial
//! reconstructions from `k` shifted stencils and blends them with
//! solution-dependent weights. In smooth regions the blend reaches order
//! `2k - 1`; next to a discontinuity the stencils crossing it receive
//! vanishing weight, which avoids spurious oscillations.
//!
//! This crate provides the two kernels sitting in a solver's innermost loop:
//!
//! - **Weights**: smoothness indicators `sigma` and optimal linear weights `w`
//!   → normalized nonlinear weights `wr`.
//! - **Reconstruction**: cell averages `q` and coefficients `c` → low-order
//!   values `qr` → weighted high-order values `qs`.
//!
//! Coefficients, optimal weights and smoothness indicators are inputs; they
//! depend on the grid and are computed elsewhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use weno::prelude::*;
//!
//! // Four cells, second-order stencils (k = 2), one point per cell (right face).
//! let n_cells = 4;
//! let q = [1.0, 1.0, 1.0, 1.0];
//! let mut c = Vec::new();
//! for _ in 0..n_cells {
//!     c.extend_from_slice(&[0.5, 0.5]);  // r = 0: cells i, i+1
//!     c.extend_from_slice(&[-0.5, 1.5]); // r = 1: cells i-1, i
//! }
//! let w: Vec<f64> = (0..n_cells).flat_map(|_| [2.0 / 3.0, 1.0 / 3.0]).collect();
//! let sigma = vec![0.0; n_cells * 2];
//! let mut qs = vec![0.0; n_cells];
//!
//! let mut weno = Weno::new().order(2).points(1).build()?;
//! weno.reconstruct(
//!     &ArrayView::from_shape(&q, [n_cells])?,
//!     0,
//!     n_cells - 1,
//!     &ArrayView::from_shape(&sigma, [n_cells, 2])?,
//!     &ArrayView::from_shape(&w, [n_cells, 2])?,
//!     &ArrayView::from_shape(&c, [n_cells, 2, 1, 2])?,
//!     &mut ArrayViewMut::from_shape(&mut qs, [n_cells, 1])?,
//! )?;
//!
//! assert!(qs.iter().all(|&v| (v - 1.0).abs() < 1e-12));
//! # Result::<(), WenoError>::Ok(())
//! ```
//!
//! ### Kernel-level Use
//!
//! Solvers that manage their own scratch call the kernels directly:
//!
//! ```rust
//! use weno::prelude::*;
//!
//! // Three cells, k = 2: the middle cell admits both shifts.
//! let sigma = [0.0; 6];
//! let w = [0.5; 6];
//! let mut wr = [0.0; 6];
//!
//! compute_weights(
//!     1,
//!     1,
//!     &ArrayView::from_shape(&sigma, [3, 2])?,
//!     &ArrayView::from_shape(&w, [3, 2])?,
//!     &mut ArrayViewMut::from_shape(&mut wr, [3, 2])?,
//! )?;
//!
//! assert_eq!(&wr[2..4], &[0.5, 0.5]);
//! # Result::<(), WenoError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every kernel returns `Result<(), WenoError>`. Arguments are validated
//! before any output is written; [`WenoError::kind`](prelude::WenoError::kind)
//! tells layout problems (`InvalidLayout`) from incompatible shapes or ranges
//! (`PreconditionViolation`).
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! weno = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Jiang, G.-S. & Shu, C.-W. (1996). "Efficient Implementation of Weighted ENO Schemes"
//! - Shu, C.-W. (1998). "Essentially Non-Oscillatory and Weighted Essentially Non-Oscillatory Schemes for Hyperbolic Conservation Laws"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - per-cell WENO kernels.
mod algorithms;

// Layer 4: Engine - validation and cell loops.
mod engine;

// High-level fluent API for WENO reconstruction.
mod api;

// Standard WENO prelude.
pub mod prelude {
    pub use crate::api::{
        ArrayView, ArrayViewMut, EPSILON, ErrorKind, Layout, ShiftRange, WenoBuilder as Weno,
        WenoError, WenoReconstructor, combine, compute_weights, dot, reconstruct,
        reconstruct_stencils,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
