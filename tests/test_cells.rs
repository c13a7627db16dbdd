use std::collections::HashSet;

use hexrefine::{cell_counts_for, node_lattice_index, structured_cells, MeshError, HEX_VERTEX_OFFSETS};
use proptest::prelude::*;

fn lattice_coord(shape: [usize; 3], index: u32) -> [usize; 3] {
    let index = index as usize;
    let z = index % shape[2];
    let y = (index / shape[2]) % shape[1];
    let x = index / (shape[1] * shape[2]);
    [x, y, z]
}

#[test]
fn single_cell_uses_standard_hex_ordering() {
    let cells = structured_cells(1, 1, 1).unwrap();
    // 2x2x2 lattice: index = 4x + 2y + z
    assert_eq!(cells, vec![[0, 2, 6, 4, 1, 3, 7, 5]]);
}

#[test]
fn enumeration_runs_axis2_fastest() {
    let (c0, c1, c2) = (2, 3, 2);
    let shape = [c0 + 1, c1 + 1, c2 + 1];
    let cells = structured_cells(c0, c1, c2).unwrap();

    let mut n = 0;
    for x in 0..c0 {
        for y in 0..c1 {
            for z in 0..c2 {
                assert_eq!(lattice_coord(shape, cells[n][0]), [x, y, z], "cell {n}");
                n += 1;
            }
        }
    }
    assert_eq!(n, cells.len());
}

#[test]
fn second_cell_of_thin_column() {
    // 1 x 1 x 2 cells on a 2 x 2 x 3 lattice: index = 6x + 3y + z
    let cells = structured_cells(1, 1, 2).unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0], [0, 3, 9, 6, 1, 4, 10, 7]);
    assert_eq!(cells[1], [1, 4, 10, 7, 2, 5, 11, 8]);
}

#[test]
fn every_vertex_matches_offset_table() {
    let (c0, c1, c2) = (3, 2, 4);
    let shape = [c0 + 1, c1 + 1, c2 + 1];
    let cells = structured_cells(c0, c1, c2).unwrap();
    for hex in &cells {
        let [x, y, z] = lattice_coord(shape, hex[0]);
        for (v, [dx, dy, dz]) in HEX_VERTEX_OFFSETS.iter().enumerate() {
            let expected = node_lattice_index(shape, x + dx, y + dy, z + dz) as u32;
            assert_eq!(hex[v], expected);
        }
    }
}

#[test]
fn refined_single_cell_node_valence() {
    // one original cell refines to a 3x3x3 lattice with 8 cells
    let [c0, c1, c2] = cell_counts_for([3, 3, 3]);
    assert_eq!([c0, c1, c2], [2, 2, 2]);
    let cells = structured_cells(c0, c1, c2).unwrap();
    assert_eq!(cells.len(), 8);

    let mut uses = vec![0usize; 27];
    for hex in &cells {
        for &n in hex {
            uses[n as usize] += 1;
        }
    }
    for (index, &count) in uses.iter().enumerate() {
        let middle = lattice_coord([3, 3, 3], index as u32)
            .iter()
            .filter(|&&c| c == 1)
            .count();
        // corner 1, edge midpoint 2, face centre 4, body centre 8
        assert_eq!(count, 1 << middle, "node {index}");
    }
}

#[test]
fn zero_cells_along_an_axis() {
    assert!(structured_cells(0, 3, 3).unwrap().is_empty());
}

#[test]
fn lattice_too_large_for_u32() {
    let side = 1usize << 11;
    match structured_cells(side, side, side) {
        Err(MeshError::TooLarge { .. }) => {}
        other => panic!("expected TooLarge, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn cell_count_at_usize_limit_is_rejected() {
    for counts in [(usize::MAX, 1, 1), (1, usize::MAX, 1), (1, 1, usize::MAX)] {
        let (c0, c1, c2) = counts;
        assert!(
            matches!(structured_cells(c0, c1, c2), Err(MeshError::TooLarge { .. })),
            "counts {counts:?}"
        );
    }
}

proptest! {
    #[test]
    fn counts_ranges_and_distinct_vertices(c0 in 1usize..6, c1 in 1usize..6, c2 in 1usize..6) {
        let cells = structured_cells(c0, c1, c2).unwrap();
        let nodes = ((c0 + 1) * (c1 + 1) * (c2 + 1)) as u32;
        prop_assert_eq!(cells.len(), c0 * c1 * c2);
        for hex in &cells {
            let distinct: HashSet<u32> = hex.iter().copied().collect();
            prop_assert_eq!(distinct.len(), 8);
            prop_assert!(hex.iter().all(|&n| n < nodes));
        }
    }

    #[test]
    fn top_face_sits_above_bottom_face(c0 in 1usize..5, c1 in 1usize..5, c2 in 1usize..5) {
        let shape = [c0 + 1, c1 + 1, c2 + 1];
        for hex in structured_cells(c0, c1, c2).unwrap() {
            for v in 0..4 {
                let [x0, y0, z0] = lattice_coord(shape, hex[v]);
                let [x1, y1, z1] = lattice_coord(shape, hex[v + 4]);
                prop_assert_eq!((x0, y0), (x1, y1));
                prop_assert_eq!(z1, z0 + 1);
            }
        }
    }
}
