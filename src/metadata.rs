//! Shape metadata read from the external quantity abstraction.
//!
//! The decomposition core never touches quantity data; it only reads an
//! ordered list of dimension names and matching extents (plus an optional
//! per-dimension origin offset) and classifies each name via
//! [`crate::constants`].

use crate::constants;

/// Ordered dimension names and extents describing one quantity's shape.
///
/// # Invariants
///
/// - `dims` and `extent` have equal length.
/// - `origin`, when present, has that same length.
///
/// Enforced at construction; all accessors rely on it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DimensionMetadata {
    dims: Vec<String>,
    extent: Vec<usize>,
    origin: Option<Vec<usize>>,
}

impl DimensionMetadata {
    /// Builds metadata from parallel dimension-name and extent lists.
    ///
    /// # Panics
    ///
    /// Panics if the two lists differ in length.
    pub fn new(dims: Vec<String>, extent: Vec<usize>) -> Self {
        assert_eq!(
            dims.len(),
            extent.len(),
            "dimension names and extents must be parallel lists"
        );
        DimensionMetadata {
            dims,
            extent,
            origin: None,
        }
    }

    /// Attaches per-dimension origin offsets (the quantity's first owned
    /// index along each dimension, inside any ghost padding).
    ///
    /// # Panics
    ///
    /// Panics if `origin` does not match the number of dimensions.
    pub fn with_origin(mut self, origin: Vec<usize>) -> Self {
        assert_eq!(
            origin.len(),
            self.dims.len(),
            "origin must have one offset per dimension"
        );
        self.origin = Some(origin);
        self
    }

    /// The ordered dimension names.
    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    /// The ordered per-dimension extents.
    pub fn extent(&self) -> &[usize] {
        &self.extent
    }

    /// The per-dimension origin offsets, if the producer supplied them.
    pub fn origin(&self) -> Option<&[usize]> {
        self.origin.as_deref()
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }
}

/// Expands a (row, column) pair into one value per dimension: `row_value`
/// for row-horizontal dims, `column_value` for column-horizontal dims, and
/// `non_horizontal` for everything else.
pub(crate) fn list_by_dims(
    dims: &[String],
    row_value: usize,
    column_value: usize,
    non_horizontal: usize,
) -> Vec<usize> {
    dims.iter()
        .map(|dim| {
            if constants::Y_DIMS.contains(dim.as_str()) {
                row_value
            } else if constants::X_DIMS.contains(dim.as_str()) {
                column_value
            } else {
                non_horizontal
            }
        })
        .collect()
}
