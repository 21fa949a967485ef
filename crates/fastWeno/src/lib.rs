//! # Fast WENO (Weighted Essentially Non-Oscillatory reconstruction)
//!
//! Parallel WENO reconstruction for finite-volume solvers, built on the
//! `weno` kernels with [rayon](https://docs.rs/rayon) and
//! [ndarray](https://docs.rs/ndarray) support.
//!
//! ## What is WENO?
//!
//! WENO blends `k` low-order stencil reconstructions of cell averages with
//! nonlinear weights. In smooth regions the blend is of order `2k - 1`; near
//! a discontinuity the stencils crossing it are switched off. Every cell is
//! reconstructed independently, which makes the kernels embarrassingly
//! parallel.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastWeno::prelude::*;
//! use ndarray::{Array1, Array2, Array4};
//!
//! let n_cells = 64;
//! let q = Array1::from_shape_fn(n_cells, |i| if i < n_cells / 2 { 1.0 } else { 0.125 });
//! let sigma = Array2::<f64>::zeros((n_cells, 2));
//! let w = Array2::from_shape_fn((n_cells, 2), |(_, r)| [2.0 / 3.0, 1.0 / 3.0][r]);
//! // Right-face coefficients of the k = 2 stencils on a uniform grid.
//! let c = Array4::from_shape_fn((n_cells, 2, 1, 2), |(_, r, _, j)| {
//!     [[0.5, 0.5], [-0.5, 1.5]][r][j]
//! });
//! let mut qs = Array2::<f64>::zeros((n_cells, 1));
//!
//! // Build the reconstructor with parallel execution (default)
//! let mut weno = Weno::new().order(2).points(1).build()?;
//!
//! weno.reconstruct(
//!     &q.as_weno_view()?,
//!     0,
//!     n_cells - 1,
//!     &sigma.as_weno_view()?,
//!     &w.as_weno_view()?,
//!     &c.as_weno_view()?,
//!     &mut qs.as_weno_view_mut()?,
//! )?;
//!
//! assert!((qs[[0, 0]] - 1.0).abs() < 1e-12);
//! # Result::<(), WenoError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every call returns `Result<_, WenoError>`. Arrays that are not in
//! standard layout are rejected with `WenoError::NonContiguous`; all other
//! preconditions are checked exactly as in the sequential kernels.
//!
//! ```rust
//! use fastWeno::prelude::*;
//! use ndarray::Array2;
//!
//! let sigma = Array2::<f64>::zeros((3, 4));
//! let transposed = sigma.t();
//!
//! match transposed.as_weno_view() {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidLayout),
//! }
//! ```
//!
//! ### Vector-valued State
//!
//! Systems of conservation laws store several components per cell. Each
//! component is reconstructed through a strided view, without copying:
//!
//! ```rust
//! use fastWeno::prelude::*;
//! use ndarray::{Array2, Array3};
//!
//! let state = Array2::<f64>::ones((16, 3));
//! let mut faces = Array3::<f64>::zeros((16, 2, 3));
//!
//! let density = component_view(&state, 0)?;
//! let density_faces = component_view_mut(&mut faces, 0)?;
//! assert_eq!(density.shape(), [16]);
//! assert_eq!(density_faces.shape(), [16, 2]);
//! # Result::<(), WenoError>::Ok(())
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

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution.
mod engine;

// High-level fluent API for WENO reconstruction.
mod api;

// Input data handling.
mod input;

// Standard fastWeno prelude.
pub mod prelude {
    pub use crate::api::{
        ArrayView, ArrayViewMut, EPSILON, ErrorKind, Layout, ParallelWenoBuilder as Weno,
        ShiftRange, WenoError, WenoReconstructor, combine, compute_weights, reconstruct,
        reconstruct_stencils,
    };
    #[cfg(feature = "cpu")]
    pub use crate::engine::executor::{compute_weights_parallel, reconstruct_parallel};
    pub use crate::input::{WenoArray, WenoArrayMut, component_view, component_view_mut};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
