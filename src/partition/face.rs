//! Single-face rank geometry and index arithmetic.

use std::ops::Range;

use dashmap::DashMap;
use itertools::izip;

use crate::constants;
use crate::layout::GridLayout;
use crate::metadata::{DimensionMetadata, list_by_dims};

/// A rank's (row, column) position within the sub-grid of one face.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SubtileIndex {
    /// Row within the layout, in `[0, rows)`.
    pub row: usize,
    /// Column within the layout, in `[0, columns)`.
    pub column: usize,
}

/// Subdivides a single cube face into a rectangular grid of ranks and
/// answers per-rank shape and ownership questions.
///
/// Immutable once constructed; per-rank lookups are memoized in a
/// read-through cache, so the partitioner is cheap to query repeatedly and
/// safe to share across threads.
#[derive(Debug)]
pub struct FacePartitioner {
    layout: GridLayout,
    subtile_cache: DashMap<usize, SubtileIndex>,
}

impl FacePartitioner {
    /// Creates a partitioner for one face with the given layout.
    pub fn new(layout: GridLayout) -> Self {
        FacePartitioner {
            layout,
            subtile_cache: DashMap::new(),
        }
    }

    /// The layout this partitioner was built from.
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Number of ranks on this face.
    pub fn total_ranks(&self) -> usize {
        self.layout.total_ranks()
    }

    /// The (row, column) sub-grid position of a rank. Accepts global
    /// ranks: only the face-local remainder is used.
    pub fn subtile_index(&self, rank: usize) -> SubtileIndex {
        *self
            .subtile_cache
            .entry(rank)
            .or_insert_with(|| {
                let within_face = rank % self.total_ranks();
                SubtileIndex {
                    row: within_face / self.layout.columns(),
                    column: within_face % self.layout.columns(),
                }
            })
            .value()
    }

    /// True if the rank owns the top row of its face.
    pub fn on_top(&self, rank: usize) -> bool {
        self.subtile_index(rank).row == self.layout.rows() - 1
    }

    /// True if the rank owns the bottom row of its face.
    pub fn on_bottom(&self, rank: usize) -> bool {
        self.subtile_index(rank).row == 0
    }

    /// True if the rank owns the leftmost column of its face.
    pub fn on_left(&self, rank: usize) -> bool {
        self.subtile_index(rank).column == 0
    }

    /// True if the rank owns the rightmost column of its face.
    pub fn on_right(&self, rank: usize) -> bool {
        self.subtile_index(rank).column == self.layout.columns() - 1
    }

    /// Full-face shape for a quantity described by per-rank metadata.
    ///
    /// Center dimensions scale by the layout factor along their axis;
    /// interface dimensions scale their interior points and add back the
    /// single shared boundary point: `(e − 1) × F + 1`. Non-horizontal
    /// dimensions are unchanged.
    pub fn face_extent(&self, rank_metadata: &DimensionMetadata) -> Vec<usize> {
        let factors = list_by_dims(
            rank_metadata.dims(),
            self.layout.rows(),
            self.layout.columns(),
            1,
        );
        izip!(rank_metadata.dims(), rank_metadata.extent(), &factors)
            .map(|(dim, &extent, &factor)| {
                if constants::is_interface_dim(dim) {
                    (extent - 1) * factor + 1
                } else {
                    extent * factor
                }
            })
            .collect()
    }

    /// Per-rank shape for a quantity described by face-level metadata.
    /// Exact inverse of [`face_extent`](Self::face_extent).
    pub fn subregion_extent(&self, face_metadata: &DimensionMetadata) -> Vec<usize> {
        let factors = list_by_dims(
            face_metadata.dims(),
            self.layout.rows(),
            self.layout.columns(),
            1,
        );
        izip!(face_metadata.dims(), face_metadata.extent(), &factors)
            .map(|(dim, &extent, &factor)| {
                if constants::is_interface_dim(dim) {
                    (extent - 1) / factor + 1
                } else {
                    extent / factor
                }
            })
            .collect()
    }

    /// The half-open index window a rank owns within a face-level array.
    ///
    /// Along each horizontal axis every non-last rank excludes the
    /// trailing shared interface point, so each point of the face is owned
    /// by exactly one rank. With `include_overlap` the shared point stays
    /// in both neighboring windows. Non-horizontal dimensions span their
    /// full extent.
    pub fn subregion_slice(
        &self,
        rank: usize,
        face_metadata: &DimensionMetadata,
        include_overlap: bool,
    ) -> Vec<Range<usize>> {
        let index = self.subtile_index(rank);
        let extents = self.subregion_extent(face_metadata);
        let positions = list_by_dims(face_metadata.dims(), index.row, index.column, 0);
        let rank_counts = list_by_dims(
            face_metadata.dims(),
            self.layout.rows(),
            self.layout.columns(),
            1,
        );
        izip!(face_metadata.dims(), &extents, &positions, &rank_counts)
            .map(|(dim, &extent, &position, &n_ranks)| {
                let base = if constants::is_interface_dim(dim) {
                    extent - 1
                } else {
                    extent
                };
                let start = position * base;
                let is_last = position == n_ranks - 1;
                let end = if is_last || include_overlap {
                    start + extent
                } else {
                    start + base
                };
                start..end
            })
            .collect()
    }
}
