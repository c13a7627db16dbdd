//! Axis-wise node refinement by midpoint interpolation.

use crate::error::{MeshError, MeshResult};
use crate::grid::{Grid, NodeGrid};

/// Doubles the sampling of `grid` along `axis`.
///
/// The result has `2n - 1` layers along `axis`, where `n` is the input
/// extent. Even layers `2k` are copies of input layer `k`; odd layers
/// `2k + 1` hold the mean of input layers `k` and `k + 1`. Every other axis
/// keeps its extent. The input is left untouched.
///
/// Fails with [`MeshError::DegenerateAxis`] when the axis has fewer than two
/// samples.
pub fn refine(grid: &Grid, axis: usize) -> MeshResult<Grid> {
    let shape = grid.shape();
    if axis >= shape.len() {
        return Err(MeshError::AxisOutOfBounds {
            axis,
            ndim: shape.len(),
        });
    }
    let n = shape[axis];
    if n < 2 {
        return Err(MeshError::DegenerateAxis { axis, len: n });
    }

    // [outer, n, inner] view of the buffer
    let outer: usize = shape[..axis].iter().product();
    let inner: usize = shape[axis + 1..].iter().product();
    let refined_n = 2 * n - 1;
    let mut new_shape = shape.to_vec();
    new_shape[axis] = refined_n;
    if inner == 0 {
        return Grid::new(new_shape, Vec::new());
    }

    let src = grid.as_slice();
    let mut out = Vec::with_capacity(outer * refined_n * inner);
    for o in 0..outer {
        let slab = &src[o * n * inner..(o + 1) * n * inner];
        let mut layers = slab.chunks_exact(inner);
        let mut prev = match layers.next() {
            Some(layer) => layer,
            None => continue,
        };
        out.extend_from_slice(prev);
        for next in layers {
            out.extend(prev.iter().zip(next).map(|(a, b)| (a + b) / 2.0));
            out.extend_from_slice(next);
            prev = next;
        }
    }
    Grid::new(new_shape, out)
}

/// Refines all three mesh axes of a node grid, axis 0 first.
///
/// Each pass consumes the previous one's output, so only two node buffers
/// are alive at a time. All extents are checked before any work is done.
pub fn refine_nodes(nodes: NodeGrid) -> MeshResult<NodeGrid> {
    for (axis, &len) in nodes.extents().iter().enumerate() {
        if len < 2 {
            return Err(MeshError::DegenerateAxis { axis, len });
        }
    }

    let mut grid = nodes.into_grid();
    for axis in 0..3 {
        let refined = refine(&grid, axis)?;
        log::debug!(
            "refined axis {axis}: {:?} -> {:?}",
            grid.shape(),
            refined.shape()
        );
        grid = refined;
    }
    NodeGrid::from_grid(grid)
}

/// Node extents after one refinement: `2A - 1` per axis.
pub fn refined_extents(extents: [usize; 3]) -> [usize; 3] {
    extents.map(|a| (2 * a).saturating_sub(1))
}
