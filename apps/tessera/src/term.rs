//! Terminal rendering of a [`RenderFrame`].
//!
//! Each grid cell becomes two characters. Previews are laid side by side,
//! vertically centered, with the palette index and shape id underneath.

use tessera_renderer::{RenderFrame, RenderPreview};

const CELL: &str = "██";
const EMPTY: &str = "  ";
const SEPARATOR: &str = "  ";

fn to_rgb8(color: [f32; 4]) -> (u8, u8, u8) {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    (c(color[0]), c(color[1]), c(color[2]))
}

fn fg((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

fn bg((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}

const RESET: &str = "\x1b[0m";

/// Width of a preview in characters, including one column of padding per side.
fn preview_width(preview: &RenderPreview, label: &str) -> usize {
    (preview.cols * 2 + 2).max(label.chars().count())
}

fn label(preview: &RenderPreview) -> String {
    format!("{}:{}", preview.index, preview.shape_id)
}

/// Render with ANSI true-color escapes, or as plain text with `[]` for
/// occupied cells and ` .` for empty ones.
pub fn render(frame: &RenderFrame, color: bool) -> String {
    let rows = frame.previews.iter().map(|p| p.rows).max().unwrap_or(0);
    let mut out = String::new();

    // one padding line above and below the cells
    for line in 0..rows + 2 {
        let mut parts = Vec::with_capacity(frame.previews.len());
        for preview in &frame.previews {
            let width = preview_width(preview, &label(preview));
            let top = (rows - preview.rows) / 2 + 1;
            let mut text = String::new();
            let cell_row = line.checked_sub(top).filter(|&r| r < preview.rows);
            let content = preview.cols * 2;
            let left = (width - content) / 2;
            let right = width - content - left;
            let highlight = preview.background.filter(|_| color).map(|c| bg(to_rgb8(c)));

            if let Some(h) = &highlight {
                text.push_str(h);
            }
            text.push_str(&" ".repeat(left));
            match cell_row {
                Some(row) => {
                    for col in 0..preview.cols {
                        let cell = preview.cell(row, col);
                        match cell.and_then(|c| c.fill) {
                            Some(fill) if color => {
                                text.push_str(&fg(to_rgb8(fill)));
                                text.push_str(CELL);
                                text.push_str(RESET);
                                if let Some(h) = &highlight {
                                    text.push_str(h);
                                }
                            }
                            Some(_) => text.push_str("[]"),
                            None if color => text.push_str(EMPTY),
                            None => text.push_str(" ."),
                        }
                    }
                }
                None => text.push_str(&" ".repeat(content)),
            }
            text.push_str(&" ".repeat(right));
            if highlight.is_some() {
                text.push_str(RESET);
            }
            parts.push(text);
        }
        out.push_str(parts.join(SEPARATOR).trim_end());
        out.push('\n');
    }

    let labels: Vec<String> = frame
        .previews
        .iter()
        .map(|p| {
            let l = label(p);
            let marked = if p.selected && !color { format!("*{l}") } else { l };
            format!("{:^width$}", marked, width = preview_width(p, &label(p)))
        })
        .collect();
    out.push_str(labels.join(SEPARATOR).trim_end());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Shape;
    use tessera_renderer::PaletteView;

    #[test]
    fn test_plain_render() {
        let shapes = vec![
            Shape::from_coords("T", &[(0, 0), (0, 1), (0, 2), (1, 1)], "purple"),
            Shape::from_coords("I", &[(0, 0), (1, 0)], "cyan"),
        ];
        let frame = PaletteView::new(&shapes, Some(1)).render();
        let text = render(&frame, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], " [][][]    []");
        assert_eq!(lines[2], "  .[] .    []");
        assert!(lines[4].contains("0:T"));
        assert!(lines[4].contains("*1:I"));
    }

    #[test]
    fn test_color_render_uses_fill() {
        let shapes = vec![Shape::from_coords("o", &[(0, 0)], "red")];
        let frame = PaletteView::new(&shapes, Some(0)).render();
        let text = render(&frame, true);
        assert!(text.contains("\x1b[38;2;239;68;68m██"));
        assert!(text.contains("\x1b[48;2;55;65;81m"));
    }

    #[test]
    fn test_empty_frame() {
        let frame = PaletteView::new(&[], None).render();
        assert_eq!(render(&frame, false), "\n\n\n");
    }
}
