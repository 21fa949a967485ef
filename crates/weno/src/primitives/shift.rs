//! Stencil shift ranges for WENO reconstruction.
//!
//! A cell `i` can be reconstructed from `k` candidate stencils. Shift `r`
//! selects the window of cells `i-r, ..., i-r+k-1`. This module decides
//! which shifts are usable for a cell, and is the only place that clamp is
//! computed.

// External dependencies
use core::ops::RangeInclusive;

/// Inclusive shift bounds `[rmin, rmax]` for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShiftRange {
    /// Smallest usable shift (inclusive).
    pub rmin: usize,

    /// Largest usable shift (inclusive).
    pub rmax: usize,
}

impl ShiftRange {
    /// Shifts whose stencil lies entirely inside `[0, n_cells)`.
    ///
    /// Requires `1 <= k <= n_cells` and `cell < n_cells`.
    #[inline]
    pub fn admissible(cell: usize, n_cells: usize, k: usize) -> Self {
        debug_assert!(k >= 1 && k <= n_cells, "admissible: need 1 <= k <= n_cells");
        debug_assert!(cell < n_cells, "admissible: cell out of bounds");

        Self {
            rmin: (cell + k).saturating_sub(n_cells),
            rmax: usize::min(k - 1, cell),
        }
    }

    /// Shifts eligible under bias `s`: `[max(0, s), min(k-1+s, k-1)]`.
    ///
    /// Returns `None` when the bias excludes every shift.
    #[inline]
    pub fn biased(k: usize, bias: isize) -> Option<Self> {
        let top = k as isize - 1;
        let lo = bias.max(0);
        let hi = (top + bias).min(top);
        if k == 0 || lo > hi {
            return None;
        }
        Some(Self {
            rmin: lo as usize,
            rmax: hi as usize,
        })
    }

    /// Shifts both eligible under `bias` and inside the grid for `cell`.
    #[inline]
    pub fn for_cell(cell: usize, n_cells: usize, k: usize, bias: isize) -> Option<Self> {
        Self::biased(k, bias)?.intersect(Self::admissible(cell, n_cells, k))
    }

    /// Overlap of two ranges, if any.
    #[inline]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let rmin = usize::max(self.rmin, other.rmin);
        let rmax = usize::min(self.rmax, other.rmax);
        (rmin <= rmax).then_some(Self { rmin, rmax })
    }

    /// Number of shifts in the range (at least one).
    #[inline]
    pub fn count(&self) -> usize {
        self.rmax - self.rmin + 1
    }

    /// Whether shift `r` belongs to the range.
    #[inline]
    pub fn contains(&self, r: usize) -> bool {
        self.rmin <= r && r <= self.rmax
    }

    /// Shifts in ascending order.
    #[inline]
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.rmin..=self.rmax
    }
}
