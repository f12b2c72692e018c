//! Whole-sphere rank topology across the six cube faces.
//!
//! The six faces form a fixed net with alternating orientation: faces with
//! even index meet their neighbors differently from odd-index faces, and
//! crossing certain face edges requires rotating the neighbor's data by a
//! quarter-turn to line the two local frames up. `CubeTopology` resolves,
//! for any rank and boundary direction, which rank lies across the
//! boundary and how many clockwise quarter-turns reconcile the frames.

use dashmap::DashMap;

use crate::boundary::{BoundaryDescriptor, BoundaryType};
use crate::error::TopologyError;
use crate::layout::GridLayout;
use crate::partition::face::FacePartitioner;
use crate::partition::transform::{
    fliplr_subtile_rank, flipud_subtile_rank, rotate_subtile_rank,
};

/// Face index of `rank` for an arbitrary rank total.
///
/// # Errors
///
/// Returns [`TopologyError::InvalidRankCount`] if `total_ranks` cannot be
/// split evenly across the six faces.
pub fn face_index(rank: usize, total_ranks: usize) -> Result<usize, TopologyError> {
    if total_ranks == 0 || total_ranks % 6 != 0 {
        return Err(TopologyError::InvalidRankCount(total_ranks));
    }
    let ranks_per_face = total_ranks / 6;
    Ok(rank / ranks_per_face)
}

/// Maps the six faces into a whole-sphere rank space and resolves
/// cross-rank adjacency in all eight boundary directions.
///
/// Immutable once constructed; every per-rank result is a pure function of
/// `(rank, layout)` and is memoized for the instance's lifetime, so
/// concurrent queries are safe and only ever converge to the same value.
#[derive(Debug)]
pub struct CubeTopology {
    face: FacePartitioner,
    boundary_cache: DashMap<(BoundaryType, usize), Option<BoundaryDescriptor>>,
}

impl CubeTopology {
    /// Creates the topology for six faces each split by `layout`.
    pub fn new(layout: GridLayout) -> Self {
        CubeTopology {
            face: FacePartitioner::new(layout),
            boundary_cache: DashMap::new(),
        }
    }

    /// The per-face partitioner this topology delegates face-local
    /// geometry to.
    pub fn face(&self) -> &FacePartitioner {
        &self.face
    }

    /// The per-face layout.
    pub fn layout(&self) -> GridLayout {
        self.face.layout()
    }

    /// Number of ranks over the whole sphere.
    pub fn total_ranks(&self) -> usize {
        6 * self.face.total_ranks()
    }

    /// Face index of a rank. Infallible here: the total is six times the
    /// per-face count by construction.
    pub fn face_index(&self, rank: usize) -> usize {
        rank / self.face.total_ranks()
    }

    /// Lowest rank on the same face as `rank`.
    pub fn face_master_rank(&self, rank: usize) -> usize {
        self.face.total_ranks() * self.face_index(rank)
    }

    /// Resolves the neighbor of `rank` across `boundary_type`.
    ///
    /// Edge queries always yield a descriptor. A corner query yields
    /// `None` when the rank sits at one of the four true geometric corners
    /// of its face, where three faces meet and no single diagonal neighbor
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::UnsupportedLayout`] for any boundary query
    /// on a non-square per-face layout.
    pub fn boundary(
        &self,
        boundary_type: BoundaryType,
        rank: usize,
    ) -> Result<Option<BoundaryDescriptor>, TopologyError> {
        self.ensure_square_layout()?;
        Ok(self.resolve(boundary_type, rank))
    }

    fn ensure_square_layout(&self) -> Result<(), TopologyError> {
        let layout = self.face.layout();
        if layout.is_square() {
            Ok(())
        } else {
            Err(TopologyError::UnsupportedLayout {
                rows: layout.rows(),
                columns: layout.columns(),
            })
        }
    }

    fn resolve(&self, boundary_type: BoundaryType, rank: usize) -> Option<BoundaryDescriptor> {
        if let Some(hit) = self.boundary_cache.get(&(boundary_type, rank)) {
            return *hit;
        }
        let resolved = match boundary_type {
            BoundaryType::Left => Some(self.left_edge(rank)),
            BoundaryType::Right => Some(self.right_edge(rank)),
            BoundaryType::Top => Some(self.top_edge(rank)),
            BoundaryType::Bottom => Some(self.bottom_edge(rank)),
            BoundaryType::TopLeft => self.top_left_corner(rank),
            BoundaryType::TopRight => self.top_right_corner(rank),
            BoundaryType::BottomLeft => self.bottom_left_corner(rank),
            BoundaryType::BottomRight => self.bottom_right_corner(rank),
        };
        log::trace!("resolved {boundary_type:?} boundary of rank {rank}: {resolved:?}");
        self.boundary_cache.insert((boundary_type, rank), resolved);
        resolved
    }

    /// Edge lookup for internal composition; edge resolution always
    /// produces a descriptor.
    fn edge(&self, boundary_type: BoundaryType, rank: usize) -> BoundaryDescriptor {
        debug_assert!(boundary_type.is_edge());
        self.resolve(boundary_type, rank)
            .unwrap_or_else(|| unreachable!("edge resolution always yields a descriptor"))
    }

    /// Lowest rank of the face containing signed rank `rank`, floored so
    /// that negative ranks land on the face below zero before wrapping.
    fn master_rank_of(&self, rank: i64) -> i64 {
        let per_face = self.face.total_ranks() as i64;
        per_face * rank.div_euclid(per_face)
    }

    /// Face-local rank on the far side of a quarter-turn face junction:
    /// rotate the arrangement once, then flip it left-to-right.
    fn rotated_face_rank(&self, rank: usize) -> i64 {
        let layout = self.face.layout();
        let face_rank = rank % self.face.total_ranks();
        fliplr_subtile_rank(rotate_subtile_rank(face_rank, layout, 1), layout) as i64
    }

    fn descriptor(
        &self,
        boundary_type: BoundaryType,
        from_rank: usize,
        to_rank: i64,
        n_clockwise_rotations: usize,
    ) -> BoundaryDescriptor {
        BoundaryDescriptor {
            boundary_type,
            from_rank,
            to_rank: to_rank.rem_euclid(self.total_ranks() as i64) as usize,
            n_clockwise_rotations,
        }
    }

    fn left_edge(&self, rank: usize) -> BoundaryDescriptor {
        let per_face = self.face.total_ranks() as i64;
        let columns = self.face.layout().columns() as i64;
        let (to_rank, rotations) = if self.face.on_left(rank) {
            if is_even(self.face_index(rank)) {
                let to_master = self.master_rank_of(rank as i64 - 2 * per_face);
                (to_master + self.rotated_face_rank(rank), 1)
            } else {
                (rank as i64 - per_face + columns - 1, 0)
            }
        } else {
            (rank as i64 - 1, 0)
        };
        self.descriptor(BoundaryType::Left, rank, to_rank, rotations)
    }

    fn right_edge(&self, rank: usize) -> BoundaryDescriptor {
        let per_face = self.face.total_ranks() as i64;
        let columns = self.face.layout().columns() as i64;
        let (to_rank, rotations) = if self.face.on_right(rank) {
            if !is_even(self.face_index(rank)) {
                let to_master = self.master_rank_of(rank as i64 + 2 * per_face);
                (to_master + self.rotated_face_rank(rank), 1)
            } else {
                (rank as i64 + per_face - columns + 1, 0)
            }
        } else {
            (rank as i64 + 1, 0)
        };
        self.descriptor(BoundaryType::Right, rank, to_rank, rotations)
    }

    fn top_edge(&self, rank: usize) -> BoundaryDescriptor {
        let per_face = self.face.total_ranks() as i64;
        let columns = self.face.layout().columns() as i64;
        let (to_rank, rotations) = if self.face.on_top(rank) {
            if is_even(self.face_index(rank)) {
                let to_master = (self.face_index(rank) as i64 + 2) * per_face;
                (to_master + self.rotated_face_rank(rank), 3)
            } else {
                let to_master = (self.face_index(rank) as i64 + 1) * per_face;
                let layout = self.face.layout();
                let face_rank = rank % self.face.total_ranks();
                (to_master + flipud_subtile_rank(face_rank, layout) as i64, 0)
            }
        } else {
            (rank as i64 + columns, 0)
        };
        self.descriptor(BoundaryType::Top, rank, to_rank, rotations)
    }

    fn bottom_edge(&self, rank: usize) -> BoundaryDescriptor {
        let per_face = self.face.total_ranks() as i64;
        let columns = self.face.layout().columns() as i64;
        let (to_rank, rotations) =
            if self.face.on_bottom(rank) && !is_even(self.face_index(rank)) {
                let to_master = (self.face_index(rank) as i64 - 2) * per_face;
                (to_master + self.rotated_face_rank(rank), 3)
            } else {
                // Uniform offset: covers the interior case, and wraps the
                // even-face bottom edge around the net via the modulo.
                (rank as i64 - columns, 0)
            };
        self.descriptor(BoundaryType::Bottom, rank, to_rank, rotations)
    }

    fn top_left_corner(&self, rank: usize) -> Option<BoundaryDescriptor> {
        if self.face.on_top(rank) && self.face.on_left(rank) {
            return None;
        }
        let second = if is_even(self.face_index(rank)) && self.face.on_left(rank) {
            BoundaryType::Left
        } else {
            BoundaryType::Top
        };
        Some(self.corner(BoundaryType::TopLeft, rank, BoundaryType::Left, second))
    }

    fn top_right_corner(&self, rank: usize) -> Option<BoundaryDescriptor> {
        if self.face.on_top(rank) && self.face.on_right(rank) {
            return None;
        }
        let second = if is_even(self.face_index(rank)) && self.face.on_top(rank) {
            BoundaryType::Bottom
        } else {
            BoundaryType::Right
        };
        Some(self.corner(BoundaryType::TopRight, rank, BoundaryType::Top, second))
    }

    fn bottom_left_corner(&self, rank: usize) -> Option<BoundaryDescriptor> {
        if self.face.on_bottom(rank) && self.face.on_left(rank) {
            return None;
        }
        let second = if !is_even(self.face_index(rank)) && self.face.on_bottom(rank) {
            BoundaryType::Top
        } else {
            BoundaryType::Left
        };
        Some(self.corner(BoundaryType::BottomLeft, rank, BoundaryType::Bottom, second))
    }

    fn bottom_right_corner(&self, rank: usize) -> Option<BoundaryDescriptor> {
        if self.face.on_bottom(rank) && self.face.on_right(rank) {
            return None;
        }
        let second = if !is_even(self.face_index(rank)) && self.face.on_bottom(rank) {
            BoundaryType::Bottom
        } else {
            BoundaryType::Right
        };
        Some(self.corner(BoundaryType::BottomRight, rank, BoundaryType::Bottom, second))
    }

    /// Composes two edge resolutions into a corner descriptor. Rotation
    /// counts add without reduction; consumers treat them modulo 4.
    fn corner(
        &self,
        boundary_type: BoundaryType,
        rank: usize,
        first: BoundaryType,
        second: BoundaryType,
    ) -> BoundaryDescriptor {
        let edge_1 = self.edge(first, rank);
        let edge_2 = self.edge(second, edge_1.to_rank);
        BoundaryDescriptor {
            boundary_type,
            from_rank: rank,
            to_rank: edge_2.to_rank,
            n_clockwise_rotations: edge_1.n_clockwise_rotations + edge_2.n_clockwise_rotations,
        }
    }
}

fn is_even(value: usize) -> bool {
    value % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_index_requires_divisibility_by_six() {
        assert_eq!(face_index(7, 24), Ok(1));
        assert_eq!(face_index(23, 24), Ok(5));
        assert_eq!(face_index(0, 7), Err(TopologyError::InvalidRankCount(7)));
        assert_eq!(face_index(0, 0), Err(TopologyError::InvalidRankCount(0)));
    }

    #[test]
    fn face_arithmetic() {
        let topology = CubeTopology::new(GridLayout::new(2, 2));
        assert_eq!(topology.total_ranks(), 24);
        assert_eq!(topology.face_index(0), 0);
        assert_eq!(topology.face_index(11), 2);
        assert_eq!(topology.face_master_rank(11), 8);
        assert_eq!(topology.face_master_rank(23), 20);
    }

    #[test]
    fn non_square_layout_rejected_for_all_boundary_types() {
        let topology = CubeTopology::new(GridLayout::new(1, 2));
        let expected = TopologyError::UnsupportedLayout { rows: 1, columns: 2 };
        for ty in BoundaryType::EDGES.into_iter().chain(BoundaryType::CORNERS) {
            assert_eq!(topology.boundary(ty, 0), Err(expected.clone()));
        }
    }

    #[test]
    fn boundary_results_are_memoized_consistently() {
        let topology = CubeTopology::new(GridLayout::new(2, 2));
        for rank in 0..topology.total_ranks() {
            for ty in BoundaryType::EDGES.into_iter().chain(BoundaryType::CORNERS) {
                let first = topology.boundary(ty, rank).unwrap();
                let second = topology.boundary(ty, rank).unwrap();
                assert_eq!(first, second);
            }
        }
    }
}
