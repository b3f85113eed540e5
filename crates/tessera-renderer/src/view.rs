use tessera_core::{Shape, ShapeGrid};

use crate::hit::HitIndex;
use crate::layout::{Rect, RowLayout};
use crate::render_data::{RenderCell, RenderFrame, RenderOverlay, RenderPreview};
use crate::style::{Bevel, PaletteStyle, HIGHLIGHT_CLIP, SHADE_CLIP};

/// The shape palette: a row of selectable shape previews.
///
/// The view borrows the shape list and the selection; it never changes
/// either. Activating a preview only reports its index to the callback
/// installed with [`PaletteView::on_select`].
pub struct PaletteView<'a> {
    shapes: &'a [Shape],
    selected: Option<usize>,
    style: PaletteStyle,
    on_select: Option<Box<dyn FnMut(usize) + 'a>>,
}

impl<'a> PaletteView<'a> {
    pub fn new(shapes: &'a [Shape], selected: Option<usize>) -> Self {
        Self {
            shapes,
            selected,
            style: PaletteStyle::default(),
            on_select: None,
        }
    }

    pub fn with_style(mut self, style: PaletteStyle) -> Self {
        self.style = style;
        self
    }

    pub fn on_select(mut self, callback: impl FnMut(usize) + 'a) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn style(&self) -> &PaletteStyle {
        &self.style
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn layout(&self) -> (Vec<ShapeGrid>, RowLayout) {
        let grids: Vec<ShapeGrid> = self.shapes.iter().map(Shape::grid).collect();
        let sizes: Vec<(f64, f64)> = grids
            .iter()
            .map(|g| self.style.preview_size(g.rows(), g.cols()))
            .collect();
        let layout = RowLayout::compute(&sizes, &self.style);
        (grids, layout)
    }

    /// Build the render data for every preview, in list order.
    pub fn render(&self) -> RenderFrame {
        let (grids, layout) = self.layout();
        if let Some(sel) = self.selected.filter(|&i| i >= self.shapes.len()) {
            log::debug!("selection {} is outside a palette of {}", sel, self.shapes.len());
        }

        let mut frame = RenderFrame::empty(layout.width, layout.height);
        for (index, ((shape, grid), slot)) in self
            .shapes
            .iter()
            .zip(&grids)
            .zip(&layout.slots)
            .enumerate()
        {
            frame.previews.push(self.render_preview(index, shape, grid, slot));
        }

        log::debug!(
            "rendered palette: {} previews, {}x{} px",
            frame.previews.len(),
            frame.width,
            frame.height
        );
        frame
    }

    fn render_preview(&self, index: usize, shape: &Shape, grid: &ShapeGrid, slot: &Rect) -> RenderPreview {
        let selected = self.selected == Some(index);
        let fill = shape.color.rgb().to_f32_array(1.0);

        let cells = grid
            .iter()
            .map(|(row, col, occupied)| {
                let rect = RowLayout::cell_rect(slot, row, col, &self.style);
                let (fill, overlays) = if occupied {
                    (
                        Some(fill),
                        vec![
                            overlay(&rect, &self.style.shade, &SHADE_CLIP),
                            overlay(&rect, &self.style.highlight, &HIGHLIGHT_CLIP),
                        ],
                    )
                } else {
                    (None, Vec::new())
                };
                RenderCell {
                    row,
                    col,
                    bounds: rect.to_array(),
                    corner_radius: self.style.cell_radius,
                    fill,
                    overlays,
                }
            })
            .collect();

        RenderPreview {
            index,
            shape_id: shape.id.clone(),
            bounds: slot.to_array(),
            selected,
            background: selected.then(|| self.style.selection_fill()),
            corner_radius: if selected { self.style.selected_radius } else { 0.0 },
            rows: grid.rows(),
            cols: grid.cols(),
            cells,
        }
    }

    /// Handle a pointer click at frame coordinates.
    ///
    /// Returns the index reported to the callback, if the click hit a preview.
    pub fn click(&mut self, x: f64, y: f64) -> Option<usize> {
        let (_, layout) = self.layout();
        let index = HitIndex::from_slots(&layout.slots).hit(x, y)?;
        self.activate(index).then_some(index)
    }

    /// Activate preview `index` as if it had been clicked.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.shapes.len() {
            log::debug!("ignoring activation of preview {} (palette has {})", index, self.shapes.len());
            return false;
        }
        log::debug!("preview {} ({}) activated", index, self.shapes[index].id);
        if let Some(callback) = self.on_select.as_mut() {
            callback(index);
        }
        true
    }
}

fn overlay(rect: &Rect, bevel: &Bevel, clip: &[[f64; 2]]) -> RenderOverlay {
    RenderOverlay {
        color: bevel.to_f32_array(),
        vertices: clip.iter().flat_map(|&[fx, fy]| rect.at(fx, fy)).collect(),
    }
}
