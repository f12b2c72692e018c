//! Geometric transforms of face-local rank numbers.
//!
//! Lay the `rows × columns` face-local ranks out in row-major order and
//! apply a whole-grid transform; each function returns the row-major
//! position at which the given rank's value sits afterwards. The
//! transforms are expressed as closed-form coordinate maps on the rank's
//! (row, column) pair, so no grid is ever materialized, and they are
//! defined for arbitrary rectangular layouts.

use crate::layout::GridLayout;

/// Splits a face-local rank into its (row, column) position.
#[inline]
fn position(rank: usize, layout: GridLayout) -> (usize, usize) {
    (rank / layout.columns(), rank % layout.columns())
}

/// Face-local rank after `n_clockwise_rotations` quarter-turns of the rank
/// arrangement. One quarter-turn sends the value at `(r, c)` of an `R×C`
/// arrangement to `(C−1−c, r)` of the `C×R` result.
pub fn rotate_subtile_rank(rank: usize, layout: GridLayout, n_clockwise_rotations: usize) -> usize {
    let (rows, columns) = layout.shape();
    let (r, c) = position(rank, layout);
    match n_clockwise_rotations % 4 {
        0 => rank,
        1 => (columns - 1 - c) * rows + r,
        2 => (rows - 1 - r) * columns + (columns - 1 - c),
        _ => c * rows + (rows - 1 - r),
    }
}

/// Face-local rank after reversing the column order of the arrangement.
pub fn fliplr_subtile_rank(rank: usize, layout: GridLayout) -> usize {
    let (_, columns) = layout.shape();
    let (r, c) = position(rank, layout);
    r * columns + (columns - 1 - c)
}

/// Face-local rank after reversing the row order of the arrangement.
pub fn flipud_subtile_rank(rank: usize, layout: GridLayout) -> usize {
    let (rows, columns) = layout.shape();
    let (r, c) = position(rank, layout);
    (rows - 1 - r) * columns + c
}

/// Face-local rank after transposing the arrangement.
pub fn transpose_subtile_rank(rank: usize, layout: GridLayout) -> usize {
    let (rows, _) = layout.shape();
    let (r, c) = position(rank, layout);
    c * rows + r
}
