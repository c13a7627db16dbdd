pub mod cells;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod read;
pub mod refine;
pub mod utils;
pub mod write;

pub use cells::{cell_counts_for, node_lattice_index, structured_cells, Hexahedron, HEX_VERTEX_OFFSETS};
pub use error::{MeshError, MeshResult, Record};
pub use grid::{Grid, NodeGrid, COMPONENTS};
pub use mesh::{refine_mesh, HexMesh, MeshHeader, RefineOptions};
pub use read::{read_hex_mesh, read_hex_mesh_from};
pub use refine::{refine, refine_nodes, refined_extents};
pub use utils::Endian;
pub use write::{write_hex_mesh, write_hex_mesh_to};
