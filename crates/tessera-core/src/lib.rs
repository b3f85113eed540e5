//! # Tessera Core
//!
//! Shape model for the Tessera shape palette: block coordinates, bounding
//! boxes, occupancy grids, and the closed color set with its fallback.

pub mod geometry;
pub mod color;
pub mod shape;
pub mod grid;
pub mod library;

pub use geometry::{BBox, Block};
pub use color::{Rgb, ShapeColor};
pub use shape::Shape;
pub use grid::{ShapeGrid, MAX_GRID_SPAN};
pub use library::standard_tetrominoes;
