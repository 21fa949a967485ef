//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks of WENO:
//! - The strided dot product shared by reconstruction and combination
//! - The regularized nonlinear weight formula
//!
//! These are reusable mathematical building blocks with no grid logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Order-preserving strided inner product.
pub mod dot;

/// Unnormalized nonlinear weights.
pub mod nonlinear;
