//! `TopologyError`: unified error type for cubesphere public APIs.
//!
//! Both variants are non-recoverable configuration errors raised
//! synchronously by the call that detects them; there is no partial-result
//! or retry path inside the topology resolution itself.

use thiserror::Error;

/// Unified error type for cubed-sphere decomposition operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// A rank total that cannot be split evenly across the six cube faces.
    #[error("total rank count {0} is not evenly divisible by 6")]
    InvalidRankCount(usize),
    /// Cross-face boundary resolution was requested for a layout whose
    /// per-face sub-grid is not square.
    #[error("cross-face boundary resolution requires a square layout, got {rows}x{columns}")]
    UnsupportedLayout {
        /// Rows of the offending per-face layout.
        rows: usize,
        /// Columns of the offending per-face layout.
        columns: usize,
    },
}
