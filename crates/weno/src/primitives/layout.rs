//! Non-owning multi-dimensional array views.
//!
//! ## Purpose
//!
//! This module gives every kernel argument an explicit layout: a shape, one
//! stride per axis and a starting offset into a borrowed slice. Kernels read
//! the layout once during validation and then index with plain offsets in
//! their inner loops.
//!
//! ## Design notes
//!
//! * **Borrowed**: Views never own, copy or resize their data.
//! * **Two access paths**: `get`/`get_mut` are bounds-checked per axis,
//!   `at`/`offset_of` trust the caller and only do stride arithmetic.
//! * **Const-generic rank**: `ArrayView<'a, T, 2>` is a matrix, `4` the
//!   coefficient table, and so on.
//!
//! ## Key concepts
//!
//! * **Contiguous**: Row-major strides and zero offset. Required for
//!   `sigma`, `w`, `wr`, `c` and `qr`.
//! * **Component view**: One scalar component of an array of vector-valued
//!   cell states, expressed as a stride over records plus a fixed offset.
//!
//! ## Invariants
//!
//! * A constructed view always fits its slice: `required_len() <= data.len()`.
//!
//! ## Non-goals
//!
//! * This module does not provide arithmetic, broadcasting or slicing.

// External dependencies
use core::ops::Range;

// Internal dependencies
use crate::primitives::errors::WenoError;

// ============================================================================
// Layout
// ============================================================================

/// Shape, strides (in elements) and offset of a D-dimensional array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout<const D: usize> {
    /// Extent along each axis.
    pub shape: [usize; D],

    /// Distance in elements between neighbours along each axis.
    pub strides: [usize; D],

    /// Position of element `[0; D]` in the backing slice.
    pub offset: usize,
}

impl<const D: usize> Layout<D> {
    /// Row-major layout with zero offset.
    pub fn contiguous(shape: [usize; D]) -> Self {
        let mut strides = [0; D];
        let mut acc = 1usize;
        for axis in (0..D).rev() {
            strides[axis] = acc;
            acc = acc.saturating_mul(shape[axis]);
        }
        Self {
            shape,
            strides,
            offset: 0,
        }
    }

    /// Arbitrary strided layout.
    pub fn strided(shape: [usize; D], strides: [usize; D], offset: usize) -> Self {
        Self {
            shape,
            strides,
            offset,
        }
    }

    /// Total number of addressable elements.
    pub fn size(&self) -> usize {
        self.shape.iter().fold(1usize, |acc, &n| acc.saturating_mul(n))
    }

    /// Extent along `axis`.
    #[inline]
    pub fn dim(&self, axis: usize) -> usize {
        self.shape[axis]
    }

    /// Minimum slice length able to hold every element.
    pub fn required_len(&self) -> usize {
        if self.size() == 0 {
            return 0;
        }
        let last = self
            .shape
            .iter()
            .zip(self.strides.iter())
            .fold(self.offset, |acc, (&n, &s)| {
                acc.saturating_add((n - 1).saturating_mul(s))
            });
        last.saturating_add(1)
    }

    /// Whether the layout is row-major with zero offset.
    ///
    /// Axes of extent 1 may carry any stride.
    pub fn is_contiguous(&self) -> bool {
        if self.offset != 0 {
            return false;
        }
        let expected = Self::contiguous(self.shape);
        (0..D).all(|axis| self.shape[axis] <= 1 || self.strides[axis] == expected.strides[axis])
    }

    /// Offset of `index` without bounds checks.
    #[inline(always)]
    pub fn offset_of(&self, index: [usize; D]) -> usize {
        let mut pos = self.offset;
        for axis in 0..D {
            pos += index[axis] * self.strides[axis];
        }
        pos
    }

    /// Offset of `index`, or `None` if any coordinate is out of range.
    pub fn checked_offset(&self, index: [usize; D]) -> Option<usize> {
        if index.iter().zip(self.shape.iter()).any(|(&i, &n)| i >= n) {
            return None;
        }
        Some(self.offset_of(index))
    }

    fn check_fits(&self, len: usize) -> Result<(), WenoError> {
        let required = self.required_len();
        if required > len {
            return Err(WenoError::BufferTooSmall { len, required });
        }
        Ok(())
    }
}

// ============================================================================
// Immutable View
// ============================================================================

/// Borrowed, read-only D-dimensional array.
#[derive(Debug, Clone, Copy)]
pub struct ArrayView<'a, T, const D: usize> {
    data: &'a [T],
    layout: Layout<D>,
}

impl<'a, T, const D: usize> ArrayView<'a, T, D> {
    /// Wrap `data` with an explicit layout.
    pub fn new(data: &'a [T], layout: Layout<D>) -> Result<Self, WenoError> {
        layout.check_fits(data.len())?;
        Ok(Self { data, layout })
    }

    /// Wrap `data` as a row-major array of the given shape.
    ///
    /// The slice length must equal the number of elements exactly.
    pub fn from_shape(data: &'a [T], shape: [usize; D]) -> Result<Self, WenoError> {
        let layout = Layout::contiguous(shape);
        if data.len() != layout.size() {
            return Err(WenoError::BufferTooSmall {
                len: data.len(),
                required: layout.size(),
            });
        }
        Ok(Self { data, layout })
    }

    /// Layout metadata.
    #[inline]
    pub fn layout(&self) -> &Layout<D> {
        &self.layout
    }

    /// Shape of the view.
    #[inline]
    pub fn shape(&self) -> [usize; D] {
        self.layout.shape
    }

    /// Extent along `axis`.
    #[inline]
    pub fn dim(&self, axis: usize) -> usize {
        self.layout.shape[axis]
    }

    /// The whole backing slice.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Bounds-checked element access.
    pub fn get(&self, index: [usize; D]) -> Option<&'a T> {
        self.layout
            .checked_offset(index)
            .and_then(|pos| self.data.get(pos))
    }

    /// Raw-stride element access.
    #[inline(always)]
    pub fn at(&self, index: [usize; D]) -> T
    where
        T: Copy,
    {
        self.data[self.layout.offset_of(index)]
    }

    /// The elements as one row-major slice, if the view is contiguous.
    pub fn as_slice(&self) -> Option<&'a [T]> {
        if self.layout.is_contiguous() {
            Some(&self.data[..self.layout.size()])
        } else {
            None
        }
    }

    /// The backing slice starting at `index`, for strided reads.
    #[inline]
    pub fn tail_from(&self, index: [usize; D]) -> &'a [T] {
        &self.data[self.layout.offset_of(index)..]
    }
}

impl<'a, T> ArrayView<'a, T, 1> {
    /// One component of `n_cells` records holding `n_components` values each.
    ///
    /// `data` is laid out `[cell][component]`.
    pub fn component(
        data: &'a [T],
        n_cells: usize,
        n_components: usize,
        component: usize,
    ) -> Result<Self, WenoError> {
        if component >= n_components {
            return Err(WenoError::ShapeMismatch {
                array: "component",
                axis: 1,
                expected: n_components,
                got: component + 1,
            });
        }
        Self::new(
            data,
            Layout::strided([n_cells], [n_components], component),
        )
    }

    /// Stride between consecutive cells.
    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.strides[0]
    }
}

// ============================================================================
// Mutable View
// ============================================================================

/// Borrowed, writable D-dimensional array.
#[derive(Debug)]
pub struct ArrayViewMut<'a, T, const D: usize> {
    data: &'a mut [T],
    layout: Layout<D>,
}

impl<'a, T, const D: usize> ArrayViewMut<'a, T, D> {
    /// Wrap `data` with an explicit layout.
    pub fn new(data: &'a mut [T], layout: Layout<D>) -> Result<Self, WenoError> {
        layout.check_fits(data.len())?;
        Ok(Self { data, layout })
    }

    /// Wrap `data` as a row-major array of the given shape.
    pub fn from_shape(data: &'a mut [T], shape: [usize; D]) -> Result<Self, WenoError> {
        let layout = Layout::contiguous(shape);
        if data.len() != layout.size() {
            return Err(WenoError::BufferTooSmall {
                len: data.len(),
                required: layout.size(),
            });
        }
        Ok(Self { data, layout })
    }

    /// Layout metadata.
    #[inline]
    pub fn layout(&self) -> &Layout<D> {
        &self.layout
    }

    /// Shape of the view.
    #[inline]
    pub fn shape(&self) -> [usize; D] {
        self.layout.shape
    }

    /// Extent along `axis`.
    #[inline]
    pub fn dim(&self, axis: usize) -> usize {
        self.layout.shape[axis]
    }

    /// Read-only reborrow.
    pub fn view(&self) -> ArrayView<'_, T, D> {
        ArrayView {
            data: &*self.data,
            layout: self.layout,
        }
    }

    /// Bounds-checked element access.
    pub fn get(&self, index: [usize; D]) -> Option<&T> {
        self.layout
            .checked_offset(index)
            .and_then(|pos| self.data.get(pos))
    }

    /// Bounds-checked mutable element access.
    pub fn get_mut(&mut self, index: [usize; D]) -> Option<&mut T> {
        self.layout
            .checked_offset(index)
            .and_then(|pos| self.data.get_mut(pos))
    }

    /// Raw-stride element access.
    #[inline(always)]
    pub fn at(&self, index: [usize; D]) -> T
    where
        T: Copy,
    {
        self.data[self.layout.offset_of(index)]
    }

    /// Raw-stride element write.
    #[inline(always)]
    pub fn set(&mut self, index: [usize; D], value: T) {
        let pos = self.layout.offset_of(index);
        self.data[pos] = value;
    }

    /// The elements as one row-major slice, if the view is contiguous.
    pub fn as_slice(&self) -> Option<&[T]> {
        if self.layout.is_contiguous() {
            Some(&self.data[..self.layout.size()])
        } else {
            None
        }
    }

    /// The elements as one mutable row-major slice, if the view is contiguous.
    pub fn as_slice_mut(&mut self) -> Option<&mut [T]> {
        if self.layout.is_contiguous() {
            let size = self.layout.size();
            Some(&mut self.data[..size])
        } else {
            None
        }
    }

    /// The whole backing slice, for kernels that index by offset.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data
    }

    /// Mutable records of the cells in `cells` (axis 0), together with the
    /// cell stride and the position of element `[cell, 0, ..]` inside a record.
    ///
    /// Only meaningful for layouts whose cell records do not overlap.
    pub fn cell_records(&mut self, cells: Range<usize>) -> (&mut [T], usize, usize) {
        let stride = self.layout.strides[0].max(1);
        let local = self.layout.offset % stride;
        let base = self.layout.offset - local;
        let len = self.data.len();
        let start = (base + cells.start * stride).min(len);
        let end = (base + cells.end * stride).min(len);
        (&mut self.data[start..end], stride, local)
    }
}

impl<'a, T> ArrayViewMut<'a, T, 2> {
    /// One component of `n_cells × n_points` records holding `n_components`
    /// values each.
    ///
    /// `data` is laid out `[cell][point][component]`.
    pub fn component(
        data: &'a mut [T],
        n_cells: usize,
        n_points: usize,
        n_components: usize,
        component: usize,
    ) -> Result<Self, WenoError> {
        if component >= n_components {
            return Err(WenoError::ShapeMismatch {
                array: "component",
                axis: 2,
                expected: n_components,
                got: component + 1,
            });
        }
        Self::new(
            data,
            Layout::strided(
                [n_cells, n_points],
                [n_points * n_components, n_components],
                component,
            ),
        )
    }
}
