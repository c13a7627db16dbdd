//! Error types shared by the reader, the refiner and the writer.

use std::io;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type MeshResult<T> = Result<T, MeshError>;

/// Names the three records of a mesh file, for error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Header,
    Nodes,
    Cells,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Record::Header => "header",
            Record::Nodes => "node",
            Record::Cells => "cell",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("{record} record is truncated")]
    Truncated { record: Record },

    #[error("{record} record framing mismatch: prefix {prefix} bytes, suffix {suffix} bytes")]
    RecordLengthMismatch {
        record: Record,
        prefix: usize,
        suffix: usize,
    },

    #[error("{record} record holds {actual} bytes, header implies {expected}")]
    RecordSize {
        record: Record,
        expected: usize,
        actual: usize,
    },

    #[error("header declares {point_count} points but extents {j} x {i} x {k} imply {}", .j * .i * .k)]
    HeaderExtents {
        point_count: usize,
        j: usize,
        i: usize,
        k: usize,
    },

    #[error("cell {cell} references node {index} (1-based), valid range is 1..={point_count}")]
    IndexOutOfRange {
        cell: usize,
        index: u32,
        point_count: usize,
    },

    #[error("axis {axis} has {len} sample(s); refinement needs at least 2")]
    DegenerateAxis { axis: usize, len: usize },

    #[error("axis {axis} is out of bounds for a {ndim}-dimensional grid")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    #[error("grid shape {shape:?} needs {expected} values, got {actual}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("{what} of {count} does not fit in a 32-bit field")]
    TooLarge { what: &'static str, count: usize },

    #[error("mesh is not structured: extents imply {expected} cells, connectivity holds {actual}")]
    StructureMismatch { expected: usize, actual: usize },
}

impl MeshError {
    /// Maps an I/O failure while reading `record` into the crate taxonomy.
    /// Running out of bytes is a truncated record, not a generic I/O error.
    pub(crate) fn reading(record: Record, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            MeshError::Truncated { record }
        } else {
            MeshError::Io(err)
        }
    }
}
