use serde::{Deserialize, Serialize};
use tessera_core::Rgb;

/// Clip polygon of the shading overlay (top and left bevel), in cell fractions.
pub const SHADE_CLIP: [[f64; 2]; 6] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [0.85, 0.15],
    [0.15, 0.15],
    [0.15, 0.85],
    [0.0, 1.0],
];

/// Clip polygon of the highlight overlay (right and bottom bevel), in cell fractions.
pub const HIGHLIGHT_CLIP: [[f64; 2]; 6] = [
    [1.0, 1.0],
    [1.0, 0.0],
    [0.85, 0.15],
    [0.85, 0.85],
    [0.15, 0.85],
    [0.0, 1.0],
];

/// A translucent layer drawn over occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bevel {
    pub color: Rgb,
    pub opacity: f32,
}

impl Bevel {
    pub fn to_f32_array(&self) -> [f32; 4] {
        self.color.to_f32_array(self.opacity)
    }
}

/// Visual parameters of the palette, in logical pixels.
///
/// Every field is optional in settings files; missing ones keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteStyle {
    pub cell_size: f64,
    pub cell_gap: f64,
    pub cell_radius: f64,
    pub preview_padding: f64,
    pub selected_background: Rgb,
    pub selected_radius: f64,
    /// Width the row is distributed over.
    pub container_width: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub shade: Bevel,
    pub highlight: Bevel,
}

impl Default for PaletteStyle {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            cell_gap: 2.0,
            cell_radius: 2.0,
            preview_padding: 8.0,
            selected_background: Rgb::new(55, 65, 81),
            selected_radius: 8.0,
            container_width: 448.0,
            margin_top: 32.0,
            margin_bottom: 16.0,
            shade: Bevel {
                color: Rgb::BLACK,
                opacity: 0.2,
            },
            highlight: Bevel {
                color: Rgb::WHITE,
                opacity: 0.3,
            },
        }
    }
}

impl PaletteStyle {
    /// Fill of the selected preview's background.
    pub fn selection_fill(&self) -> [f32; 4] {
        self.selected_background.to_f32_array(1.0)
    }

    /// Outer size of a preview showing a `rows` × `cols` grid.
    pub fn preview_size(&self, rows: usize, cols: usize) -> (f64, f64) {
        (
            self.span(cols) + 2.0 * self.preview_padding,
            self.span(rows) + 2.0 * self.preview_padding,
        )
    }

    fn span(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        n as f64 * self.cell_size + (n - 1) as f64 * self.cell_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_size() {
        let style = PaletteStyle::default();
        // 3 cells + 2 gaps + padding on both sides
        assert_eq!(style.preview_size(2, 3), (3.0 * 20.0 + 2.0 * 2.0 + 16.0, 2.0 * 20.0 + 2.0 + 16.0));
        assert_eq!(style.preview_size(1, 1), (36.0, 36.0));
    }

    #[test]
    fn test_partial_style_keeps_defaults() {
        let style: PaletteStyle = serde_json::from_str(r#"{"cell_size": 12.0}"#).unwrap();
        assert_eq!(style.cell_size, 12.0);
        assert_eq!(style.cell_gap, 2.0);
        assert_eq!(style.container_width, 448.0);
        assert_eq!(style.shade.opacity, 0.2);
    }

    #[test]
    fn test_bevel_clips_share_the_inner_corners() {
        assert_eq!(SHADE_CLIP[2], HIGHLIGHT_CLIP[2]);
        assert_eq!(SHADE_CLIP[5], HIGHLIGHT_CLIP[5]);
    }
}
