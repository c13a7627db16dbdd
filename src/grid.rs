//! Owned, row-major value arrays for node coordinates.

use crate::error::{MeshError, MeshResult};

/// Number of spatial components stored per node.
pub const COMPONENTS: usize = 3;

/// An N-dimensional array of `f32` stored row-major, first axis most
/// significant.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl Grid {
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> MeshResult<Self> {
        let expected = shape.iter().product::<usize>();
        if shape.is_empty() || data.len() != expected {
            return Err(MeshError::ShapeMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Linear offset of a full multi-index.
    #[inline]
    pub fn offset(&self, index: &[usize]) -> usize {
        debug_assert_eq!(index.len(), self.shape.len());
        index
            .iter()
            .zip(&self.shape)
            .fold(0, |acc, (&i, &n)| {
                debug_assert!(i < n);
                acc * n + i
            })
    }
}

/// Node coordinates of a structured mesh, shape `(A0, A1, A2, 3)`.
///
/// Axis 0 is the `J` extent of the mesh file, axis 1 is `I` and axis 2 is `K`.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGrid {
    grid: Grid,
}

impl NodeGrid {
    pub fn new(extents: [usize; 3], coords: Vec<f32>) -> MeshResult<Self> {
        let shape = vec![extents[0], extents[1], extents[2], COMPONENTS];
        Ok(Self {
            grid: Grid::new(shape, coords)?,
        })
    }

    /// Wraps a grid that must already have shape `(A0, A1, A2, 3)`.
    pub fn from_grid(grid: Grid) -> MeshResult<Self> {
        let shape = grid.shape();
        if shape.len() != 4 || shape[3] != COMPONENTS {
            return Err(MeshError::ShapeMismatch {
                shape: shape.to_vec(),
                expected: shape[..shape.len().min(3)].iter().product::<usize>() * COMPONENTS,
                actual: grid.len(),
            });
        }
        Ok(Self { grid })
    }

    #[inline]
    pub fn extents(&self) -> [usize; 3] {
        let s = self.grid.shape();
        [s[0], s[1], s[2]]
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.grid.len() / COMPONENTS
    }

    #[inline]
    pub fn xyz(&self, a0: usize, a1: usize, a2: usize) -> [f32; 3] {
        let o = self.grid.offset(&[a0, a1, a2, 0]);
        let d = self.grid.as_slice();
        [d[o], d[o + 1], d[o + 2]]
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Flattened coordinates, `(A0, A1, A2, component)` order.
    #[inline]
    pub fn coords(&self) -> &[f32] {
        self.grid.as_slice()
    }
}
