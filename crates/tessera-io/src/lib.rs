//! # Tessera I/O
//!
//! Readers and writers for JSON shape sets and palette settings files.

pub mod shapes;
pub mod settings;

pub use shapes::{load_shapes, save_shapes, validate, ShapeSetError, ShapeSetReader, ShapeSetWriter};
pub use settings::{Settings, SettingsError};
