//! # cubesphere
//!
//! cubesphere computes the domain-decomposition topology of a cubed-sphere
//! grid: which rank owns which rectangular sub-region of each of the six
//! cube faces, and which neighboring rank lies across each of a rank's
//! eight edge and corner boundaries, including the 90°-rotation needed
//! where cube faces meet at non-trivial angles.
//!
//! The crate is the combinatorial core of a larger decomposition system:
//! the transport layer (halo exchange, scatter/gather) consumes the
//! [`BoundaryDescriptor`]s and index windows produced here but lives
//! elsewhere, as does the quantity abstraction whose shape metadata
//! ([`DimensionMetadata`]) this crate reads.
//!
//! ## Determinism
//!
//! Every result is a pure function of `(rank, GridLayout)`. Topology
//! objects are immutable after construction and memoize per-rank lookups
//! internally, so they can be queried concurrently and every process
//! constructing the same layout derives the same global view.
//!
//! ## Usage
//!
//! ```rust
//! use cubesphere::prelude::*;
//!
//! let topology = CubeTopology::new(GridLayout::new(2, 2));
//! assert_eq!(topology.total_ranks(), 24);
//! let boundary = topology.boundary(BoundaryType::Left, 1).unwrap();
//! assert_eq!(boundary.unwrap().to_rank, 0);
//! ```

pub mod boundary;
pub mod constants;
pub mod error;
pub mod layout;
pub mod metadata;
pub mod partition;

pub use boundary::{BoundaryDescriptor, BoundaryType};
pub use error::TopologyError;
pub use layout::GridLayout;
pub use metadata::DimensionMetadata;
pub use partition::{CubeTopology, FacePartitioner, SubtileIndex, face_index};

/// A convenient prelude importing the most-used types.
pub mod prelude {
    pub use crate::boundary::{BoundaryDescriptor, BoundaryType};
    pub use crate::error::TopologyError;
    pub use crate::layout::GridLayout;
    pub use crate::metadata::DimensionMetadata;
    pub use crate::partition::cube::{CubeTopology, face_index};
    pub use crate::partition::face::{FacePartitioner, SubtileIndex};
}
