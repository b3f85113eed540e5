use serde::{Deserialize, Serialize};

use crate::geometry::{BBox, Block};

/// Largest bounding-box side, in cells, a shape may have.
pub const MAX_GRID_SPAN: usize = 64;

/// Row-major occupancy grid over a shape's bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl ShapeGrid {
    /// A 1×1 grid with nothing occupied. Shapes without blocks get this.
    pub fn empty() -> Self {
        Self {
            rows: 1,
            cols: 1,
            cells: vec![false],
        }
    }

    /// Occupancy of `blocks` over their bounding box.
    ///
    /// Shapes wider or taller than [`MAX_GRID_SPAN`] are not laid out and get
    /// the empty grid; shape-set validation rejects them before they get here.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let Some(bbox) = BBox::from_blocks(blocks) else {
            return Self::empty();
        };
        let rows = bbox.rows();
        let cols = bbox.cols();
        if rows > MAX_GRID_SPAN || cols > MAX_GRID_SPAN {
            return Self::empty();
        }
        let mut cells = vec![false; rows * cols];
        for b in blocks {
            if let Some((r, c)) = bbox.relative(b) {
                cells[r * cols + c] = true;
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// All cells in row-major order as `(row, col, occupied)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &occupied)| (i / self.cols, i % self.cols, occupied))
    }
}
