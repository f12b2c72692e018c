//! Dimension-name tokens shared with the quantity abstraction.
//!
//! The decomposition core treats dimension names as opaque tokens and
//! classifies them only by membership in the sets below: row-horizontal
//! (`Y_DIMS`), column-horizontal (`X_DIMS`), or non-horizontal, crossed
//! with interface (points on cell edges, shared between adjacent
//! sub-regions) versus center (points interior to a cell, never shared).

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cell-center dimension along the column (x) direction.
pub const X_DIM: &str = "x";
/// Cell-interface dimension along the column (x) direction.
pub const X_INTERFACE_DIM: &str = "x_interface";
/// Cell-center dimension along the row (y) direction.
pub const Y_DIM: &str = "y";
/// Cell-interface dimension along the row (y) direction.
pub const Y_INTERFACE_DIM: &str = "y_interface";
/// Cell-center vertical dimension.
pub const Z_DIM: &str = "z";
/// Cell-interface vertical dimension.
pub const Z_INTERFACE_DIM: &str = "z_interface";

/// Dimensions scaled by the column count of a layout.
pub static X_DIMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from([X_DIM, X_INTERFACE_DIM]));

/// Dimensions scaled by the row count of a layout.
pub static Y_DIMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from([Y_DIM, Y_INTERFACE_DIM]));

/// Dimensions whose extent depends on the horizontal layout at all.
pub static HORIZONTAL_DIMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from([X_DIM, X_INTERFACE_DIM, Y_DIM, Y_INTERFACE_DIM]));

/// Dimensions whose grid points lie on cell edges and are shared by
/// adjacent sub-regions. Everything else is a center dimension.
pub static INTERFACE_DIMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from([X_INTERFACE_DIM, Y_INTERFACE_DIM, Z_INTERFACE_DIM]));

/// True if `dim` carries one shared boundary point per sub-region edge.
pub fn is_interface_dim(dim: &str) -> bool {
    INTERFACE_DIMS.contains(dim)
}

/// True if `dim` is affected by the horizontal layout.
pub fn is_horizontal_dim(dim: &str) -> bool {
    HORIZONTAL_DIMS.contains(dim)
}
