//! Input abstractions for WENO reconstruction.
//!
//! ## Purpose
//!
//! This module bridges `ndarray` arrays and the explicit-layout views the
//! WENO kernels take, so a solver that stores its state in `ndarray` can
//! call the kernels without copying.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Views borrow the array's buffer directly.
//! * **Interoperability**: Works for owned arrays, views and mutable views alike.
//! * **Fail-fast validation**: Arrays not in standard (row-major) layout are rejected.
//!
//! ## Key concepts
//!
//! * **WenoArray / WenoArrayMut**: Turn a D-dimensional array into an
//!   `ArrayView` / `ArrayViewMut` of the same rank.
//! * **Component views**: Select one scalar component of vector-valued cell
//!   state `(N, m)` or point values `(N, n, m)`.
//!
//! ## Invariants
//!
//! * Returned views cover every element of the array.
//!
//! ## Non-goals
//!
//! * This module does not copy, transpose or reorder non-standard layouts.

// External dependencies
use ndarray::{ArrayBase, Data, DataMut, Dim, Dimension, Ix2, Ix3};
use num_traits::Float;

// Export dependencies from weno crate
use weno::internals::primitives::errors::WenoError;
use weno::internals::primitives::layout::{ArrayView, ArrayViewMut};

/// Name reported for arrays that are not in standard layout.
const NDARRAY: &str = "ndarray";

/// Trait for arrays that can be read by the WENO kernels.
pub trait WenoArray<T: Float, const D: usize> {
    /// Borrow the array as a row-major view.
    fn as_weno_view(&self) -> Result<ArrayView<'_, T, D>, WenoError>;
}

/// Trait for arrays the WENO kernels can write into.
pub trait WenoArrayMut<T: Float, const D: usize> {
    /// Borrow the array as a mutable row-major view.
    fn as_weno_view_mut(&mut self) -> Result<ArrayViewMut<'_, T, D>, WenoError>;
}

impl<T, S, const D: usize> WenoArray<T, D> for ArrayBase<S, Dim<[usize; D]>>
where
    T: Float,
    S: Data<Elem = T>,
    Dim<[usize; D]>: Dimension,
{
    fn as_weno_view(&self) -> Result<ArrayView<'_, T, D>, WenoError> {
        let shape = fixed_shape::<D>(self.shape())?;
        let data = self
            .as_slice()
            .ok_or(WenoError::NonContiguous { array: NDARRAY })?;
        ArrayView::from_shape(data, shape)
    }
}

impl<T, S, const D: usize> WenoArrayMut<T, D> for ArrayBase<S, Dim<[usize; D]>>
where
    T: Float,
    S: DataMut<Elem = T>,
    Dim<[usize; D]>: Dimension,
{
    fn as_weno_view_mut(&mut self) -> Result<ArrayViewMut<'_, T, D>, WenoError> {
        let shape = fixed_shape::<D>(self.shape())?;
        let data = self
            .as_slice_mut()
            .ok_or(WenoError::NonContiguous { array: NDARRAY })?;
        ArrayViewMut::from_shape(data, shape)
    }
}

/// One component of cell state stored as an `(N, m)` array.
pub fn component_view<T, S>(
    state: &ArrayBase<S, Ix2>,
    component: usize,
) -> Result<ArrayView<'_, T, 1>, WenoError>
where
    T: Float,
    S: Data<Elem = T>,
{
    let (n_cells, n_components) = state.dim();
    let data = state
        .as_slice()
        .ok_or(WenoError::NonContiguous { array: NDARRAY })?;
    ArrayView::component(data, n_cells, n_components, component)
}

/// One component of point values stored as an `(N, n, m)` array.
pub fn component_view_mut<T, S>(
    values: &mut ArrayBase<S, Ix3>,
    component: usize,
) -> Result<ArrayViewMut<'_, T, 2>, WenoError>
where
    T: Float,
    S: DataMut<Elem = T>,
{
    let (n_cells, n_points, n_components) = values.dim();
    let data = values
        .as_slice_mut()
        .ok_or(WenoError::NonContiguous { array: NDARRAY })?;
    ArrayViewMut::component(data, n_cells, n_points, n_components, component)
}

fn fixed_shape<const D: usize>(shape: &[usize]) -> Result<[usize; D], WenoError> {
    shape.try_into().map_err(|_| WenoError::ShapeMismatch {
        array: NDARRAY,
        axis: 0,
        expected: D,
        got: shape.len(),
    })
}
