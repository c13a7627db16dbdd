use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::cells::Hexahedron;
use crate::error::{MeshError, MeshResult, Record};
use crate::grid::{NodeGrid, COMPONENTS};
use crate::mesh::{HexMesh, MeshHeader};
use crate::utils::{read_fortran_record, Endian};

/// Read a structured hexahedral mesh from a Fortran sequential binary file.
///
/// The file holds three records:
/// 1. `[point_count, element_count, J, I, K, reserved]` as `u32`,
/// 2. `point_count * 3` `f32` coordinates in `(J, I, K, component)` order,
/// 3. `element_count * 8` `u32` node indices, 1-based.
///
/// Cell indices are converted to 0-based on the way in.
pub fn read_hex_mesh(path: impl AsRef<Path>, endian: Endian) -> MeshResult<HexMesh> {
    let f = File::open(path)?;
    read_hex_mesh_from(&mut BufReader::new(f), endian)
}

pub fn read_hex_mesh_from(r: &mut impl Read, endian: Endian) -> MeshResult<HexMesh> {
    let header = read_header(r, endian)?;
    let point_count = header.point_count as usize;
    let element_count = header.element_count as usize;
    let [j, i, k] = header.extents.map(|e| e as usize);

    // declared point count must agree with the extents
    let lattice = j
        .checked_mul(i)
        .and_then(|n| n.checked_mul(k))
        .ok_or(MeshError::TooLarge {
            what: "node lattice",
            count: usize::MAX,
        })?;
    if lattice != point_count {
        return Err(MeshError::HeaderExtents {
            point_count,
            j,
            i,
            k,
        });
    }

    let rec = read_fortran_record(r, Record::Nodes, endian)?;
    expect_len(Record::Nodes, point_count * COMPONENTS * 4, rec.len())?;
    let coords = Endian::read_f32_slice(&rec, endian);
    drop(rec);
    let nodes = NodeGrid::new([j, i, k], coords)?;

    let rec = read_fortran_record(r, Record::Cells, endian)?;
    expect_len(Record::Cells, element_count * 8 * 4, rec.len())?;
    let raw = Endian::read_u32_slice(&rec, endian);
    drop(rec);

    let mut cells: Vec<Hexahedron> = Vec::with_capacity(element_count);
    for (cell, chunk) in raw.chunks_exact(8).enumerate() {
        let mut hex = [0u32; 8];
        for (slot, &index) in hex.iter_mut().zip(chunk) {
            if index == 0 || index as usize > point_count {
                return Err(MeshError::IndexOutOfRange {
                    cell,
                    index,
                    point_count,
                });
            }
            *slot = index - 1;
        }
        cells.push(hex);
    }

    log::debug!(
        "read mesh: {point_count} points, {element_count} cells, extents J={j} I={i} K={k}"
    );
    Ok(HexMesh::new(nodes, cells))
}

fn read_header(r: &mut impl Read, endian: Endian) -> MeshResult<MeshHeader> {
    let rec = read_fortran_record(r, Record::Header, endian)?;
    expect_len(Record::Header, MeshHeader::WORDS * 4, rec.len())?;
    let w = Endian::read_u32_slice(&rec, endian);
    Ok(MeshHeader {
        point_count: w[0],
        element_count: w[1],
        extents: [w[2], w[3], w[4]],
        reserved: w[5],
    })
}

fn expect_len(record: Record, expected: usize, actual: usize) -> MeshResult<()> {
    if expected != actual {
        return Err(MeshError::RecordSize {
            record,
            expected,
            actual,
        });
    }
    Ok(())
}
