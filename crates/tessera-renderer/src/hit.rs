use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};

use crate::layout::Rect;

/// An entry in the R-tree, referencing a preview by its palette index.
#[derive(Debug, Clone)]
pub struct HitEntry {
    pub index: usize,
    pub rect: Rect,
}

impl RTreeObject for HitEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.x, self.rect.y],
            [self.rect.max_x(), self.rect.max_y()],
        )
    }
}

/// Descends only into nodes whose envelope contains the point.
struct ContainsPoint([f64; 2]);

impl SelectionFunction<HitEntry> for ContainsPoint {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.contains_point(&self.0)
    }

    fn should_unpack_leaf(&self, leaf: &HitEntry) -> bool {
        leaf.rect.contains(self.0[0], self.0[1])
    }
}

/// Point lookup from frame coordinates to preview index.
pub struct HitIndex {
    tree: RTree<HitEntry>,
}

impl HitIndex {
    pub fn build(entries: Vec<HitEntry>) -> Self {
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn from_slots(slots: &[Rect]) -> Self {
        Self::build(
            slots
                .iter()
                .enumerate()
                .map(|(index, rect)| HitEntry { index, rect: *rect })
                .collect(),
        )
    }

    /// Index of the preview under `(x, y)`. Lowest index wins on shared edges.
    pub fn hit(&self, x: f64, y: f64) -> Option<usize> {
        self.tree
            .locate_with_selection_function(ContainsPoint([x, y]))
            .map(|e| e.index)
            .min()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
