//! Tests for array layouts and views.
//!
//! These tests verify the array abstraction used in WENO for:
//! - Row-major and strided layouts
//! - Bounds-checked and raw-stride element access
//! - Construction failures for undersized buffers
//!
//! ## Test Organization
//!
//! 1. **Layout Metadata** - Strides, sizes and contiguity
//! 2. **Views** - Construction and element access
//! 3. **Component Views** - Strided views into vector-valued state

use weno::prelude::*;

// ============================================================================
// Layout Metadata Tests
// ============================================================================

/// Test row-major strides and sizes.
#[test]
fn test_contiguous_layout() {
    let layout = Layout::contiguous([4, 3, 2, 3]);
    assert_eq!(layout.strides, [18, 6, 3, 1]);
    assert_eq!(layout.size(), 72);
    assert_eq!(layout.required_len(), 72);
    assert!(layout.is_contiguous());
    assert_eq!(layout.offset_of([1, 2, 1, 0]), 18 + 12 + 3);
}

/// Test the minimum backing length of strided layouts.
#[test]
fn test_strided_required_len() {
    let layout = Layout::strided([5], [3], 2);
    assert_eq!(layout.required_len(), 2 + 4 * 3 + 1);
    assert!(!layout.is_contiguous());

    let empty = Layout::strided([0, 4], [4, 1], 7);
    assert_eq!(empty.size(), 0);
    assert_eq!(empty.required_len(), 0);
}

/// Test contiguity rules.
///
/// Axes of extent one may carry any stride; a non-zero offset never counts
/// as contiguous.
#[test]
fn test_contiguity_rules() {
    assert!(Layout::strided([3, 1], [1, 99], 0).is_contiguous());
    assert!(!Layout::strided([3, 2], [1, 3], 0).is_contiguous());
    assert!(!Layout::strided([3], [1], 1).is_contiguous());
}

/// Test checked offsets.
#[test]
fn test_checked_offset() {
    let layout = Layout::contiguous([2, 3]);
    assert_eq!(layout.checked_offset([1, 2]), Some(5));
    assert_eq!(layout.checked_offset([2, 0]), None);
    assert_eq!(layout.checked_offset([0, 3]), None);
}

// ============================================================================
// View Tests
// ============================================================================

/// Test that a view never outgrows its slice.
#[test]
fn test_view_buffer_too_small() {
    let data = [0.0f64; 5];
    let err = ArrayView::new(&data, Layout::strided([3], [2], 1)).unwrap_err();
    assert_eq!(err, WenoError::BufferTooSmall { len: 5, required: 6 });
    assert_eq!(err.kind(), ErrorKind::InvalidLayout);

    let err = ArrayView::from_shape(&data, [2, 3]).unwrap_err();
    assert_eq!(err, WenoError::BufferTooSmall { len: 5, required: 6 });
}

/// Test that `from_shape` requires an exact length.
#[test]
fn test_from_shape_exact_length() {
    let data = [0.0f64; 7];
    assert!(ArrayView::from_shape(&data, [2, 3]).is_err());
    assert!(ArrayView::from_shape(&data[..6], [2, 3]).is_ok());
}

/// Test element access on an immutable view.
#[test]
fn test_view_access() {
    let data: Vec<f64> = (0..6).map(f64::from).collect();
    let view = ArrayView::from_shape(&data, [2, 3]).unwrap();

    assert_eq!(view.shape(), [2, 3]);
    assert_eq!(view.dim(1), 3);
    assert_eq!(view.get([1, 1]), Some(&4.0));
    assert_eq!(view.get([2, 0]), None);
    assert_eq!(view.at([0, 2]), 2.0);
    assert_eq!(view.as_slice(), Some(&data[..]));
}

/// Test element access and writes on a mutable view.
#[test]
fn test_view_mut_access() {
    let mut data = vec![0.0f64; 8];
    {
        let mut view = ArrayViewMut::new(&mut data, Layout::strided([2, 2], [4, 1], 1)).unwrap();
        view.set([0, 0], 1.0);
        view.set([1, 1], 2.0);
        *view.get_mut([0, 1]).unwrap() = 3.0;
        assert!(view.get_mut([2, 0]).is_none());
        assert!(view.as_slice_mut().is_none());
        assert_eq!(view.view().at([1, 1]), 2.0);
    }
    assert_eq!(data, vec![0.0, 1.0, 3.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
}

// ============================================================================
// Component View Tests
// ============================================================================

/// Test the cell-field component view.
#[test]
fn test_component_cell_view() {
    let state = [1.0, 10.0, 2.0, 20.0, 3.0, 30.0];
    let view = ArrayView::component(&state, 3, 2, 1).unwrap();

    assert_eq!(view.stride(), 2);
    assert_eq!(view.layout().offset, 1);
    assert_eq!(view.at([2]), 30.0);
    assert!(view.as_slice().is_none());
}

/// Test the point-field component view.
#[test]
fn test_component_point_view() {
    let mut faces = vec![0.0; 2 * 2 * 3];
    let mut view = ArrayViewMut::component(&mut faces, 2, 2, 3, 2).unwrap();

    assert_eq!(view.layout().strides, [6, 3]);
    view.set([1, 0], 5.0);
    assert_eq!(faces[6 + 2], 5.0);
}
