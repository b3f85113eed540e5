use serde::{Deserialize, Serialize};

/// A single block of a shape, addressed by grid row and column.
///
/// Serialized as a `[row, col]` pair, which is how shape files list blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Block {
    pub row: i32,
    pub col: i32,
}

impl Block {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<[i32; 2]> for Block {
    fn from([row, col]: [i32; 2]) -> Self {
        Self { row, col }
    }
}

impl From<Block> for [i32; 2] {
    fn from(block: Block) -> Self {
        [block.row, block.col]
    }
}

impl From<(i32, i32)> for Block {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// An inclusive, axis-aligned bounding box over block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Block,
    pub max: Block,
}

impl BBox {
    pub fn new(min: Block, max: Block) -> Self {
        Self { min, max }
    }

    /// Tightest box covering every block, seeded from the first one.
    pub fn from_blocks(blocks: &[Block]) -> Option<Self> {
        let (first, rest) = blocks.split_first()?;
        let mut bbox = Self::new(*first, *first);
        for b in rest {
            bbox.min.row = bbox.min.row.min(b.row);
            bbox.min.col = bbox.min.col.min(b.col);
            bbox.max.row = bbox.max.row.max(b.row);
            bbox.max.col = bbox.max.col.max(b.col);
        }
        Some(bbox)
    }

    /// Number of grid rows covered (`max - min + 1`).
    pub fn rows(&self) -> usize {
        span(self.min.row, self.max.row) as usize + 1
    }

    /// Number of grid columns covered (`max - min + 1`).
    pub fn cols(&self) -> usize {
        span(self.min.col, self.max.col) as usize + 1
    }

    pub fn contains(&self, b: &Block) -> bool {
        b.row >= self.min.row && b.row <= self.max.row && b.col >= self.min.col && b.col <= self.max.col
    }

    /// Position of `b` relative to the top-left corner of the box.
    pub fn relative(&self, b: &Block) -> Option<(usize, usize)> {
        if !self.contains(b) {
            return None;
        }
        Some((
            span(self.min.row, b.row) as usize,
            span(self.min.col, b.col) as usize,
        ))
    }
}

/// `hi - lo` for `lo <= hi`; the full `i32` range needs 33 bits.
fn span(lo: i32, hi: i32) -> u64 {
    (i64::from(hi) - i64::from(lo)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(coords: &[(i32, i32)]) -> Vec<Block> {
        coords.iter().copied().map(Block::from).collect()
    }

    #[test]
    fn test_bbox_dimensions() {
        let bbox = BBox::from_blocks(&blocks(&[(0, 0), (0, 1), (0, 2), (1, 1)])).unwrap();
        assert_eq!(bbox.rows(), 2);
        assert_eq!(bbox.cols(), 3);
    }

    #[test]
    fn test_bbox_seeded_from_first_block() {
        // All coordinates away from the origin must still give a tight box.
        let bbox = BBox::from_blocks(&blocks(&[(5, 7), (6, 7), (6, 8)])).unwrap();
        assert_eq!(bbox.min, Block::new(5, 7));
        assert_eq!(bbox.max, Block::new(6, 8));
        assert_eq!((bbox.rows(), bbox.cols()), (2, 2));

        let bbox = BBox::from_blocks(&blocks(&[(-3, -1), (-2, -1)])).unwrap();
        assert_eq!((bbox.rows(), bbox.cols()), (2, 1));
    }

    #[test]
    fn test_bbox_empty() {
        assert!(BBox::from_blocks(&[]).is_none());
    }

    #[test]
    fn test_bbox_relative() {
        let bbox = BBox::from_blocks(&blocks(&[(-1, 2), (1, 4)])).unwrap();
        assert_eq!(bbox.relative(&Block::new(-1, 2)), Some((0, 0)));
        assert_eq!(bbox.relative(&Block::new(1, 4)), Some((2, 2)));
        assert_eq!(bbox.relative(&Block::new(2, 4)), None);
    }

    #[test]
    fn test_bbox_extreme_coordinates() {
        let bbox = BBox::from_blocks(&blocks(&[(i32::MIN, 0), (i32::MAX, 0)])).unwrap();
        assert_eq!(bbox.rows() as u64, 1 << 32);
        assert_eq!(bbox.cols(), 1);
        assert_eq!(bbox.relative(&Block::new(i32::MAX, 0)), Some((u32::MAX as usize, 0)));
    }

    #[test]
    fn test_bbox_wide_spread() {
        let bbox = BBox::from_blocks(&blocks(&[(0, 0), (0, 100_000_000)])).unwrap();
        assert_eq!((bbox.rows(), bbox.cols()), (1, 100_000_001));
        assert_eq!(bbox.relative(&Block::new(0, 100_000_000)), Some((0, 100_000_000)));
    }

    #[test]
    fn test_block_serializes_as_pair() {
        let json = serde_json::to_string(&Block::new(3, -1)).unwrap();
        assert_eq!(json, "[3,-1]");
        let back: Block = serde_json::from_str("[2,5]").unwrap();
        assert_eq!(back, Block::new(2, 5));
    }
}
