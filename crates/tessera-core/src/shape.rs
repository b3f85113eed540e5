use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::ShapeColor;
use crate::geometry::{BBox, Block};
use crate::grid::ShapeGrid;

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// A named, colored game piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Identifier, unique within a palette. Generated when a file omits it.
    #[serde(default = "generate_id")]
    pub id: String,
    /// Blocks in declaration order.
    pub blocks: Vec<Block>,
    pub color: ShapeColor,
}

impl Shape {
    pub fn new(id: &str, blocks: Vec<Block>, color: impl Into<ShapeColor>) -> Self {
        Self {
            id: id.to_string(),
            blocks,
            color: color.into(),
        }
    }

    /// Build from `(row, col)` pairs.
    pub fn from_coords(id: &str, coords: &[(i32, i32)], color: impl Into<ShapeColor>) -> Self {
        Self::new(id, coords.iter().copied().map(Block::from).collect(), color)
    }

    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_blocks(&self.blocks)
    }

    /// Occupancy grid over the shape's bounding box.
    pub fn grid(&self) -> ShapeGrid {
        ShapeGrid::from_blocks(&self.blocks)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
