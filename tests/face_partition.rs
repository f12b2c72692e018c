use std::collections::HashSet;

use cubesphere::constants::{X_DIM, X_INTERFACE_DIM, Y_DIM, Y_INTERFACE_DIM, Z_DIM};
use cubesphere::{DimensionMetadata, FacePartitioner, GridLayout};

fn meta(dims: &[&str], extent: &[usize]) -> DimensionMetadata {
    DimensionMetadata::new(
        dims.iter().map(|d| d.to_string()).collect(),
        extent.to_vec(),
    )
}

#[test]
fn subtile_index_is_a_bijection() {
    for (rows, columns) in [(1, 1), (2, 2), (2, 3), (4, 1), (3, 5)] {
        let face = FacePartitioner::new(GridLayout::new(rows, columns));
        let seen: HashSet<(usize, usize)> = (0..face.total_ranks())
            .map(|rank| {
                let index = face.subtile_index(rank);
                (index.row, index.column)
            })
            .collect();
        assert_eq!(seen.len(), rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                assert!(seen.contains(&(row, column)));
            }
        }
    }
}

#[test]
fn extent_examples() {
    // Center dim, rank extent 2, factor 3 -> 6; interface dim, rank
    // extent 3 (including the shared point), factor 3 -> (3-1)*3+1 = 7.
    let face = FacePartitioner::new(GridLayout::new(3, 3));
    let rank_meta = meta(&[Y_DIM, X_INTERFACE_DIM], &[2, 3]);
    assert_eq!(face.face_extent(&rank_meta), vec![6, 7]);
}

#[test]
fn face_and_subregion_extent_are_mutual_inverses() {
    for (rows, columns) in [(1, 1), (2, 2), (2, 3), (3, 2), (4, 4)] {
        let face = FacePartitioner::new(GridLayout::new(rows, columns));
        let rank_meta = meta(
            &[Z_DIM, Y_INTERFACE_DIM, X_DIM],
            &[17, 5, 4],
        );
        let on_face = face.face_extent(&rank_meta);
        let face_meta = meta(&[Z_DIM, Y_INTERFACE_DIM, X_DIM], &on_face);
        assert_eq!(face.subregion_extent(&face_meta), rank_meta.extent());
    }
}

#[test]
fn slices_tile_the_face_exactly_once() {
    let layout = GridLayout::new(3, 3);
    let face = FacePartitioner::new(layout);
    let rank_meta = meta(&[Y_INTERFACE_DIM, X_DIM], &[4, 5]);
    let face_extent = face.face_extent(&rank_meta);
    assert_eq!(face_extent, vec![10, 15]);
    let face_meta = meta(&[Y_INTERFACE_DIM, X_DIM], &face_extent);

    let mut covered = vec![vec![0u32; face_extent[1]]; face_extent[0]];
    for rank in 0..face.total_ranks() {
        let slices = face.subregion_slice(rank, &face_meta, false);
        for y in slices[0].clone() {
            for x in slices[1].clone() {
                covered[y][x] += 1;
            }
        }
    }
    assert!(covered.iter().flatten().all(|&count| count == 1));
}

#[test]
fn overlap_duplicates_only_shared_interface_points() {
    let layout = GridLayout::new(2, 2);
    let face = FacePartitioner::new(layout);
    let face_meta = meta(&[Y_INTERFACE_DIM, X_INTERFACE_DIM], &[7, 7]);

    let mut covered = vec![vec![0u32; 7]; 7];
    for rank in 0..face.total_ranks() {
        let slices = face.subregion_slice(rank, &face_meta, true);
        for y in slices[0].clone() {
            for x in slices[1].clone() {
                covered[y][x] += 1;
            }
        }
    }
    // The middle interface row/column is shared by both neighbors; the
    // center point by all four ranks.
    for y in 0..7 {
        for x in 0..7 {
            let expected = match (y == 3, x == 3) {
                (true, true) => 4,
                (true, false) | (false, true) => 2,
                (false, false) => 1,
            };
            assert_eq!(covered[y][x], expected, "at ({y}, {x})");
        }
    }
}

#[test]
fn non_horizontal_dimensions_span_their_full_extent() {
    let face = FacePartitioner::new(GridLayout::new(2, 2));
    let face_meta = meta(&[Z_DIM, Y_DIM, X_DIM], &[9, 8, 8]);
    for rank in 0..face.total_ranks() {
        let slices = face.subregion_slice(rank, &face_meta, false);
        assert_eq!(slices[0], 0..9);
    }
}
