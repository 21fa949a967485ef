//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates kernel calls and drives the per-cell algorithms over
//! the requested cell range. It provides the sequential execution path and
//! the hooks extension crates use to substitute parallel ones.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sequential execution of WENO kernels.
pub mod executor;

/// Validation utilities.
pub mod validator;
