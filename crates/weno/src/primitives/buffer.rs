//! Reusable scratch storage for WENO reconstruction steps.
//!
//! ## Purpose
//!
//! The kernels never allocate: nonlinear weights `wr` and low-order
//! reconstructions `qr` live in caller-owned buffers. This module provides
//! such a buffer so a solver can allocate once and reuse it every time step.
//!
//! ## Design notes
//!
//! * **Caller-owned**: The reconstructor owns a `WenoBuffer`; kernels only borrow views into it.
//! * **Lazy Expansion**: Slots grow on demand but never shrink, stabilizing at the grid size.
//! * **Zeroed**: `prepare` zero-fills, so weights outside a cell's admissible range read as zero.
//!
//! ## Invariants
//!
//! * After `prepare(n_cells, k, n)`, `weights` holds `n_cells * k` and
//!   `stencils` holds `n_cells * k * n` elements.
//! * Capacity is monotonically increasing.
//!
//! ## Non-goals
//!
//! * Thread-local caching (one buffer per reconstructor).
//! * Shrinking or memory reclamation.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::WenoError;
use crate::primitives::layout::{ArrayView, ArrayViewMut};

// ============================================================================
// Slot - Unified Vector Abstraction
// ============================================================================

/// A reusable vector slot with automatic capacity management.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Create a new slot with the given initial capacity.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Clear the slot (sets length to 0, preserves capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Get a mutable reference to the underlying vector.
    #[inline]
    pub fn as_vec_mut(&mut self) -> &mut Vec<T> {
        &mut self.0
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Helper trait to simplify resizing and filling vectors.
pub trait VecExt<T> {
    /// Resize the vector to `n` and fill with `val`.
    fn assign(&mut self, n: usize, val: T);
}

impl<T: Clone> VecExt<T> for Vec<T> {
    fn assign(&mut self, n: usize, val: T) {
        if self.len() != n {
            self.clear();
            self.resize(n, val);
        } else {
            self.fill(val);
        }
    }
}

// ============================================================================
// WenoBuffer - Per-step Scratch
// ============================================================================

/// Scratch storage for one reconstruction step over an `(N, k, n)` grid.
#[derive(Debug, Clone)]
pub struct WenoBuffer<T> {
    /// Nonlinear weights `wr`, shape `(N, k)`.
    pub weights: Slot<T>,

    /// Low-order reconstructions `qr`, shape `(N, k, n)`.
    pub stencils: Slot<T>,

    shape: [usize; 3],
}

impl<T> Default for WenoBuffer<T> {
    fn default() -> Self {
        Self {
            weights: Slot::default(),
            stencils: Slot::default(),
            shape: [0; 3],
        }
    }
}

impl<T: Clone + Zero> WenoBuffer<T> {
    /// Create a buffer pre-allocated for `n_cells` cells of order `k` with `n` points.
    pub fn with_capacity(n_cells: usize, k: usize, n: usize) -> Self {
        Self {
            weights: Slot::new(n_cells * k),
            stencils: Slot::new(n_cells * k * n),
            shape: [0; 3],
        }
    }

    /// Size both slots for `(n_cells, k, n)` and zero them.
    pub fn prepare(&mut self, n_cells: usize, k: usize, n: usize) {
        self.weights.as_vec_mut().assign(n_cells * k, T::zero());
        self.stencils.as_vec_mut().assign(n_cells * k * n, T::zero());
        self.shape = [n_cells, k, n];
    }

    /// Shape `(N, k, n)` of the last `prepare`.
    #[inline]
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Read-only view of `wr`.
    pub fn weights_view(&self) -> Result<ArrayView<'_, T, 2>, WenoError> {
        let [n_cells, k, _] = self.shape;
        ArrayView::from_shape(&self.weights, [n_cells, k])
    }

    /// Read-only view of `qr`.
    pub fn stencils_view(&self) -> Result<ArrayView<'_, T, 3>, WenoError> {
        ArrayView::from_shape(&self.stencils, self.shape)
    }

    /// Disjoint mutable views of `wr` and `qr`.
    pub fn views_mut(
        &mut self,
    ) -> Result<(ArrayViewMut<'_, T, 2>, ArrayViewMut<'_, T, 3>), WenoError> {
        let [n_cells, k, n] = self.shape;
        let wr = ArrayViewMut::from_shape(self.weights.as_mut_slice(), [n_cells, k])?;
        let qr = ArrayViewMut::from_shape(self.stencils.as_mut_slice(), [n_cells, k, n])?;
        Ok((wr, qr))
    }
}
