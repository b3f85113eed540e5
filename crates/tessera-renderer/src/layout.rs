use serde::{Deserialize, Serialize};

use crate::style::PaletteStyle;

/// An axis-aligned rectangle in frame coordinates (logical pixels, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.max_x() && y >= self.y && y <= self.max_y()
    }

    /// `[min_x, min_y, max_x, max_y]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.max_x(), self.max_y()]
    }

    /// Map a point given in fractions of this rect to frame coordinates.
    pub fn at(&self, fx: f64, fy: f64) -> [f64; 2] {
        [self.x + fx * self.width, self.y + fy * self.height]
    }
}

/// Placement of every preview in the palette row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    pub width: f64,
    pub height: f64,
    pub slots: Vec<Rect>,
}

impl RowLayout {
    /// Place previews of the given outer sizes in one row.
    ///
    /// Leftover width is shared "space-around": every preview gets an equal
    /// share, half on each side. When the previews are wider than the
    /// container the frame grows to fit them and they sit edge to edge.
    pub fn compute(sizes: &[(f64, f64)], style: &PaletteStyle) -> Self {
        let content_width: f64 = sizes.iter().map(|(w, _)| w).sum();
        let row_height = sizes.iter().map(|(_, h)| *h).fold(0.0, f64::max);
        let width = style.container_width.max(content_width);

        let share = if sizes.is_empty() {
            0.0
        } else {
            (width - content_width) / sizes.len() as f64
        };

        let mut x = share / 2.0;
        let slots = sizes
            .iter()
            .map(|&(w, h)| {
                let y = style.margin_top + (row_height - h) / 2.0;
                let slot = Rect::new(x, y, w, h);
                x += w + share;
                slot
            })
            .collect();

        Self {
            width,
            height: style.margin_top + row_height + style.margin_bottom,
            slots,
        }
    }

    /// Rect of cell (`row`, `col`) inside a preview slot.
    pub fn cell_rect(slot: &Rect, row: usize, col: usize, style: &PaletteStyle) -> Rect {
        let pitch = style.cell_size + style.cell_gap;
        Rect::new(
            slot.x + style.preview_padding + col as f64 * pitch,
            slot.y + style.preview_padding + row as f64 * pitch,
            style.cell_size,
            style.cell_size,
        )
    }
}
