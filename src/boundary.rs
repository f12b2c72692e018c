//! Boundary directions and resolved adjacency descriptors.

/// The eight directions in which a rank's sub-region can touch a neighbor.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum BoundaryType {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl BoundaryType {
    /// The four edge directions, in dispatch order.
    pub const EDGES: [BoundaryType; 4] = [
        BoundaryType::Left,
        BoundaryType::Right,
        BoundaryType::Top,
        BoundaryType::Bottom,
    ];

    /// The four corner directions, in dispatch order.
    pub const CORNERS: [BoundaryType; 4] = [
        BoundaryType::TopLeft,
        BoundaryType::TopRight,
        BoundaryType::BottomLeft,
        BoundaryType::BottomRight,
    ];

    /// True for the four edge directions, false for the corners.
    pub const fn is_edge(self) -> bool {
        matches!(
            self,
            BoundaryType::Left | BoundaryType::Right | BoundaryType::Top | BoundaryType::Bottom
        )
    }
}

/// A resolved directed adjacency between two ranks.
///
/// `n_clockwise_rotations` is the number of 90° clockwise quarter-turns to
/// apply to data received from `to_rank` before combining it with
/// `from_rank`'s local frame. Corner descriptors carry the sum of the two
/// composed edges' rotation counts; the sum is handed through without
/// mod-4 reduction, matching what two-sided exchange consumers expect to
/// reduce themselves.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BoundaryDescriptor {
    /// Direction of this adjacency, from the perspective of `from_rank`.
    pub boundary_type: BoundaryType,
    /// The querying rank.
    pub from_rank: usize,
    /// The neighboring rank across the boundary.
    pub to_rank: usize,
    /// Quarter-turns reconciling the neighbor's orientation with ours.
    pub n_clockwise_rotations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(BoundaryDescriptor: Copy, Send, Sync);
    assert_impl_all!(BoundaryType: Copy, Send, Sync);

    #[test]
    fn edge_corner_split_covers_all_eight() {
        for ty in BoundaryType::EDGES {
            assert!(ty.is_edge());
        }
        for ty in BoundaryType::CORNERS {
            assert!(!ty.is_edge());
        }
    }

    #[test]
    fn serde_roundtrip() {
        let b = BoundaryDescriptor {
            boundary_type: BoundaryType::TopLeft,
            from_rank: 3,
            to_rank: 11,
            n_clockwise_rotations: 1,
        };
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(serde_json::from_str::<BoundaryDescriptor>(&json).unwrap(), b);
    }
}
