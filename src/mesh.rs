use serde::Serialize;

use crate::cells::{cell_counts_for, structured_cells, Hexahedron};
use crate::error::{MeshError, MeshResult};
use crate::grid::NodeGrid;
use crate::refine::refine_nodes;

/// First record of a mesh file: `[point_count, element_count, J, I, K, reserved]`.
///
/// Always derived from the node and cell arrays, never edited on its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MeshHeader {
    pub point_count: u32,
    pub element_count: u32,
    /// Node extents along axes 0, 1, 2 (`J`, `I`, `K`).
    pub extents: [u32; 3],
    pub reserved: u32,
}

impl MeshHeader {
    pub const WORDS: usize = 6;

    /// Summarises a node grid and its connectivity.
    pub fn describe(nodes: &NodeGrid, cells: &[Hexahedron]) -> MeshResult<Self> {
        let to_u32 = |what: &'static str, count: usize| {
            u32::try_from(count).map_err(|_| MeshError::TooLarge { what, count })
        };
        let [j, i, k] = nodes.extents();
        Ok(Self {
            point_count: to_u32("point count", nodes.point_count())?,
            element_count: to_u32("element count", cells.len())?,
            extents: [to_u32("J extent", j)?, to_u32("I extent", i)?, to_u32("K extent", k)?],
            reserved: 0,
        })
    }

    pub fn to_words(&self) -> [u32; Self::WORDS] {
        let [j, i, k] = self.extents;
        [self.point_count, self.element_count, j, i, k, self.reserved]
    }
}

/// A structured hexahedral mesh held in memory. Cell indices are 0-based.
#[derive(Clone, Debug, PartialEq)]
pub struct HexMesh {
    pub nodes: NodeGrid,
    pub cells: Vec<Hexahedron>,
}

impl HexMesh {
    pub fn new(nodes: NodeGrid, cells: Vec<Hexahedron>) -> Self {
        Self { nodes, cells }
    }

    pub fn header(&self) -> MeshResult<MeshHeader> {
        MeshHeader::describe(&self.nodes, &self.cells)
    }

    /// Checks the one structural property that can be checked cheaply: a
    /// regular grid with these extents has `(J-1)(I-1)(K-1)` cells.
    ///
    /// Cell contents are not compared. A mesh with the right count but
    /// scrambled connectivity passes.
    pub fn check_structured(&self) -> MeshResult<()> {
        let expected: usize = cell_counts_for(self.nodes.extents()).iter().product();
        if self.cells.len() != expected {
            return Err(MeshError::StructureMismatch {
                expected,
                actual: self.cells.len(),
            });
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct RefineOptions {
    /// Reject meshes whose cell count disagrees with their extents instead
    /// of only logging a warning.
    pub strict: bool,
}

/// Refines a structured mesh once along every axis.
///
/// Nodes are interpolated with [`refine_nodes`]; connectivity is rebuilt with
/// [`structured_cells`] from the refined extents. The input cells are only
/// consulted for the count check and are dropped afterwards.
pub fn refine_mesh(mesh: HexMesh, opts: RefineOptions) -> MeshResult<HexMesh> {
    if let Err(err) = mesh.check_structured() {
        if opts.strict {
            return Err(err);
        }
        log::warn!("{err}; regenerating connectivity from extents anyway");
    }

    let HexMesh { nodes, cells } = mesh;
    drop(cells);

    let nodes = refine_nodes(nodes)?;
    let [c0, c1, c2] = cell_counts_for(nodes.extents());
    let cells = structured_cells(c0, c1, c2)?;
    log::debug!(
        "refined mesh: {:?} nodes, {} cells",
        nodes.extents(),
        cells.len()
    );
    Ok(HexMesh { nodes, cells })
}
