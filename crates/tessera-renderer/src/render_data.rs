use serde::{Deserialize, Serialize};

/// A translucent polygon drawn on top of a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOverlay {
    pub color: [f32; 4], // RGBA
    /// Flat array of vertices in frame coordinates: [x0, y0, x1, y1, ...]
    pub vertices: Vec<f64>,
}

/// One cell of a preview's bounding grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderCell {
    pub row: usize,
    pub col: usize,
    /// [min_x, min_y, max_x, max_y]
    pub bounds: [f64; 4],
    pub corner_radius: f64,
    /// `None` draws nothing: the cell is transparent.
    pub fill: Option<[f32; 4]>,
    pub overlays: Vec<RenderOverlay>,
}

impl RenderCell {
    pub fn is_occupied(&self) -> bool {
        self.fill.is_some()
    }
}

/// The preview of one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPreview {
    /// Position in the shape list; reported back on click.
    pub index: usize,
    pub shape_id: String,
    /// [min_x, min_y, max_x, max_y]
    pub bounds: [f64; 4],
    pub selected: bool,
    /// Highlight behind the selected preview.
    pub background: Option<[f32; 4]>,
    pub corner_radius: f64,
    pub rows: usize,
    pub cols: usize,
    /// Row-major, `rows * cols` entries.
    pub cells: Vec<RenderCell>,
}

impl RenderPreview {
    pub fn cell(&self, row: usize, col: usize) -> Option<&RenderCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    pub fn occupied_cells(&self) -> impl Iterator<Item = &RenderCell> {
        self.cells.iter().filter(|c| c.is_occupied())
    }
}

/// Complete render frame data handed to a frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub width: f64,
    pub height: f64,
    pub previews: Vec<RenderPreview>,
}

impl RenderFrame {
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            previews: Vec::new(),
        }
    }

    pub fn selected(&self) -> Option<&RenderPreview> {
        self.previews.iter().find(|p| p.selected)
    }
}
