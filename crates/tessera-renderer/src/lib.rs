//! # Tessera Renderer
//!
//! The shape palette view. Lays previews out in a row, resolves colors and
//! bevel overlays, and hit-tests clicks back to palette indices.
//!
//! Nothing is rasterized here: the view emits JSON-serializable render data
//! that a frontend (terminal, canvas, GPU) draws.

pub mod style;
pub mod layout;
pub mod render_data;
pub mod hit;
pub mod view;

pub use style::PaletteStyle;
pub use layout::{Rect, RowLayout};
pub use render_data::{RenderCell, RenderFrame, RenderOverlay, RenderPreview};
pub use view::PaletteView;
