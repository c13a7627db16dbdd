//! Connectivity of regular structured hexahedral grids.
//!
//! Connectivity is derived from the lattice shape alone. Whatever cell
//! records came with an input mesh play no part in it.

use crate::error::{MeshError, MeshResult};

/// Eight 0-based node indices of one linear hexahedron.
pub type Hexahedron = [u32; 8];

/// Lattice offsets `(d0, d1, d2)` of the eight hexahedron vertices.
///
/// Vertices 0-3 walk the `d2 = 0` face, 4-7 repeat the walk on `d2 = 1`,
/// so vertex `v + 4` sits directly above vertex `v` along axis 2.
pub const HEX_VERTEX_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [1, 0, 0],
    [0, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
    [1, 0, 1],
];

/// Cell counts of a node lattice with the given extents: `A - 1` per axis.
pub fn cell_counts_for(extents: [usize; 3]) -> [usize; 3] {
    extents.map(|a| a.saturating_sub(1))
}

/// Row-major index of lattice node `(x, y, z)` in a lattice of `shape` nodes.
#[inline]
pub fn node_lattice_index(shape: [usize; 3], x: usize, y: usize, z: usize) -> usize {
    debug_assert!(x < shape[0] && y < shape[1] && z < shape[2]);
    (x * shape[1] + y) * shape[2] + z
}

/// Hexahedral connectivity for a regular grid of `c0 x c1 x c2` cells.
///
/// Cells come out with axis 0 outermost and axis 2 varying fastest, so cell
/// `n` depends on `(c0, c1, c2)` only. Indices address the
/// `(c0 + 1) x (c1 + 1) x (c2 + 1)` node lattice flattened row-major.
pub fn structured_cells(c0: usize, c1: usize, c2: usize) -> MeshResult<Vec<Hexahedron>> {
    let shape = match [c0, c1, c2].map(|c| c.checked_add(1)) {
        [Some(s0), Some(s1), Some(s2)] => [s0, s1, s2],
        _ => {
            return Err(MeshError::TooLarge {
                what: "refined node count",
                count: usize::MAX,
            })
        }
    };
    let nodes = shape
        .iter()
        .try_fold(1usize, |acc, &n| acc.checked_mul(n))
        .unwrap_or(usize::MAX);
    // 1-based output indices and the header point count are both u32
    if nodes > u32::MAX as usize {
        return Err(MeshError::TooLarge {
            what: "refined node count",
            count: nodes,
        });
    }
    let ncells = c0 * c1 * c2;
    log::trace!("generating {ncells} cells over {nodes} lattice nodes");

    let mut cells = Vec::with_capacity(ncells);
    for x in 0..c0 {
        for y in 0..c1 {
            for z in 0..c2 {
                let mut hex = [0u32; 8];
                for (v, [dx, dy, dz]) in HEX_VERTEX_OFFSETS.iter().enumerate() {
                    // fits: every index is below the node count checked above
                    hex[v] = node_lattice_index(shape, x + dx, y + dy, z + dz) as u32;
                }
                cells.push(hex);
            }
        }
    }
    Ok(cells)
}
