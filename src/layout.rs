//! `GridLayout`: the (rows, columns) sub-grid splitting one cube face.

/// The rectangular grid of ranks subdividing a single cube face.
///
/// Immutable value; every topology object derives from one of these and
/// never mutates it afterwards.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct GridLayout {
    rows: usize,
    columns: usize,
}

impl GridLayout {
    /// Creates a layout with the given number of rank rows and columns.
    ///
    /// # Panics
    ///
    /// Panics if either extent is zero; a face must be covered by at least
    /// one rank along each axis.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows > 0 && columns > 0,
            "GridLayout extents must be positive, got {rows}x{columns}"
        );
        GridLayout { rows, columns }
    }

    /// Number of rank rows along a face.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of rank columns along a face.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The layout shape as a `(rows, columns)` pair.
    #[inline]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Whether the per-face sub-grid is square. Cross-face boundary
    /// resolution is only defined for square layouts.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Number of ranks on one face.
    #[inline]
    pub const fn total_ranks(&self) -> usize {
        self.rows * self.columns
    }
}
