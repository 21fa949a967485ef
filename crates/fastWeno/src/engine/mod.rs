//! Layer 4: Engine
//!
//! This layer provides the parallel execution engine for WENO reconstruction.
//! It distributes independent cells across CPU cores.

// Parallel execution engine using CPU threads
#[cfg(feature = "cpu")]
pub mod executor;
