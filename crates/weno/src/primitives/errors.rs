//! Error types for WENO operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions a WENO kernel can report before
//! touching any output: malformed buffer layouts and index ranges or shapes
//! that would make a stencil read outside the grid.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending array name, axis and values.
//! * **Allocation-free**: No variant owns heap data, so the type works in `no_std`.
//! * **Classified**: Every variant maps to one [`ErrorKind`].
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Layout errors**: Buffer too short, non-contiguous, overlapping or
//!    scattered cell records.
//! 2. **Precondition errors**: Shape disagreement, invalid order, cell range or bias.
//! 3. **Builder errors**: Parameters set more than once.
//!
//! ## Invariants
//!
//! * An error is always reported before any output element is written.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Broad classification of a [`WenoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A buffer does not match the memory layout the kernel requires.
    InvalidLayout,

    /// Index ranges, shapes or parameters are incompatible with each other.
    PreconditionViolation,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for WENO operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WenoError {
    /// The backing slice is shorter than its declared layout requires.
    BufferTooSmall {
        /// Length of the backing slice.
        len: usize,
        /// Minimum length implied by shape, strides and offset.
        required: usize,
    },

    /// Array must be contiguous (row-major, zero offset) but is not.
    NonContiguous {
        /// Name of the offending array.
        array: &'static str,
    },

    /// Strided output whose per-cell records overlap each other.
    AliasedLayout {
        /// Name of the offending array.
        array: &'static str,
    },

    /// Strided output that does not overlap but spreads a cell's points
    /// across other cells' records (e.g. a point-major layout).
    UnsupportedLayout {
        /// Name of the offending array.
        array: &'static str,
    },

    /// Array extent along one axis disagrees with the other inputs.
    ShapeMismatch {
        /// Name of the offending array.
        array: &'static str,
        /// Axis whose extent disagrees.
        axis: usize,
        /// Expected extent.
        expected: usize,
        /// Actual extent.
        got: usize,
    },

    /// Stencil order `k` must be at least 1.
    InvalidOrder(usize),

    /// Number of evaluation points per cell must be at least 1.
    InvalidPoints(usize),

    /// Grid has fewer cells than one stencil spans.
    TooFewCells {
        /// Number of cells in the grid.
        got: usize,
        /// Minimum required cells (the stencil order).
        min: usize,
    },

    /// Cell range `[imin, imax]` is empty or leaves the grid.
    InvalidRange {
        /// First cell to process.
        imin: usize,
        /// Last cell to process (inclusive).
        imax: usize,
        /// Number of cells in the grid.
        n_cells: usize,
    },

    /// Bias parameter leaves no eligible shift at all.
    InvalidBias {
        /// Bias parameter provided.
        bias: isize,
        /// Stencil order.
        order: usize,
    },

    /// A processed cell has no stencil that is both eligible and inside the grid.
    NoAdmissibleStencil {
        /// Index of the cell.
        cell: usize,
        /// Bias parameter in effect.
        bias: isize,
    },

    /// An optimal weight is nonzero for a shift the bias excludes.
    ///
    /// The combination only sums eligible shifts, so such a weight would
    /// leave the blend unnormalized.
    ExcludedWeight {
        /// Index of the cell.
        cell: usize,
        /// Excluded shift carrying the weight.
        shift: usize,
        /// Bias parameter in effect.
        bias: isize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl WenoError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BufferTooSmall { .. }
            | Self::NonContiguous { .. }
            | Self::AliasedLayout { .. }
            | Self::UnsupportedLayout { .. } => ErrorKind::InvalidLayout,
            _ => ErrorKind::PreconditionViolation,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for WenoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::BufferTooSmall { len, required } => {
                write!(
                    f,
                    "Buffer too small: got {len} elements, layout requires {required}"
                )
            }
            Self::NonContiguous { array } => {
                write!(f, "Array '{array}' is not contiguous")
            }
            Self::AliasedLayout { array } => {
                write!(f, "Array '{array}' has overlapping per-cell records")
            }
            Self::UnsupportedLayout { array } => {
                write!(
                    f,
                    "Array '{array}' must keep each cell's points inside one cell record"
                )
            }
            Self::ShapeMismatch {
                array,
                axis,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Shape mismatch: '{array}' has extent {got} on axis {axis}, expected {expected}"
                )
            }
            Self::InvalidOrder(k) => write!(f, "Invalid order: {k} (must be >= 1)"),
            Self::InvalidPoints(n) => write!(f, "Invalid points: {n} (must be >= 1)"),
            Self::TooFewCells { got, min } => {
                write!(f, "Too few cells: got {got}, need at least {min}")
            }
            Self::InvalidRange {
                imin,
                imax,
                n_cells,
            } => {
                write!(
                    f,
                    "Invalid cell range: [{imin}, {imax}] (must satisfy imin <= imax < {n_cells})"
                )
            }
            Self::InvalidBias { bias, order } => {
                write!(
                    f,
                    "Invalid bias: {bias} (must satisfy |bias| < order {order})"
                )
            }
            Self::NoAdmissibleStencil { cell, bias } => {
                write!(
                    f,
                    "No admissible stencil for cell {cell} with bias {bias}"
                )
            }
            Self::ExcludedWeight { cell, shift, bias } => {
                write!(
                    f,
                    "Nonzero weight w[{cell}, {shift}] for a shift excluded by bias {bias}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for WenoError {}
