use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MeshError, MeshResult};
use crate::mesh::HexMesh;
use crate::utils::{write_fortran_record, Endian};

/// Write `mesh` as three Fortran sequential records: header, node
/// coordinates, 1-based cell indices. The header is recomputed from the
/// arrays.
pub fn write_hex_mesh(path: impl AsRef<Path>, mesh: &HexMesh, endian: Endian) -> MeshResult<()> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    write_hex_mesh_to(&mut w, mesh, endian)?;
    w.flush()?;
    Ok(())
}

pub fn write_hex_mesh_to(w: &mut impl Write, mesh: &HexMesh, endian: Endian) -> MeshResult<()> {
    let header = mesh.header()?;
    write_fortran_record(w, &Endian::write_u32_slice(&header.to_words(), endian), endian)?;

    let xyz = Endian::write_f32_slice(mesh.nodes.coords(), endian);
    write_fortran_record(w, &xyz, endian)?;
    drop(xyz);

    let one_based = mesh
        .cells
        .iter()
        .flatten()
        .map(|&n| {
            n.checked_add(1).ok_or_else(|| MeshError::TooLarge {
                what: "node index",
                count: n as usize + 1,
            })
        })
        .collect::<MeshResult<Vec<u32>>>()?;
    write_fortran_record(w, &Endian::write_u32_slice(&one_based, endian), endian)?;
    Ok(())
}
