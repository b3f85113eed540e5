//! JSON shape-set files.
//!
//! Two layouts are accepted on read: a bare array of shapes, or an object
//! with a `shapes` array. The writer always emits the object form.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tessera_core::{Shape, MAX_GRID_SPAN};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum ShapeSetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid shape set: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shape id '{id}' is used more than once")]
    DuplicateId { id: String },

    #[error("Shape '{id}' spans {rows}x{cols} cells, limit is {limit} per side")]
    TooLarge {
        id: String,
        rows: usize,
        cols: usize,
        limit: usize,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ShapeSetFile {
    Bare(Vec<Shape>),
    Wrapped { shapes: Vec<Shape> },
}

#[derive(Serialize)]
struct ShapeSetOut<'a> {
    shapes: &'a [Shape],
}

/// Check a shape set. Duplicate ids and shapes wider or taller than
/// [`MAX_GRID_SPAN`] are rejected; degenerate shapes are only reported.
pub fn validate(shapes: &[Shape]) -> Result<(), ShapeSetError> {
    let mut ids = HashSet::new();
    for shape in shapes {
        if !ids.insert(shape.id.as_str()) {
            return Err(ShapeSetError::DuplicateId {
                id: shape.id.clone(),
            });
        }
        let Some(bbox) = shape.bbox() else {
            log::warn!("Shape '{}' has no blocks", shape.id);
            continue;
        };
        if bbox.rows() > MAX_GRID_SPAN || bbox.cols() > MAX_GRID_SPAN {
            return Err(ShapeSetError::TooLarge {
                id: shape.id.clone(),
                rows: bbox.rows(),
                cols: bbox.cols(),
                limit: MAX_GRID_SPAN,
            });
        }
        let distinct: HashSet<_> = shape.blocks.iter().collect();
        if distinct.len() != shape.blocks.len() {
            log::warn!(
                "Shape '{}' repeats {} block coordinate(s)",
                shape.id,
                shape.blocks.len() - distinct.len()
            );
        }
        if !shape.color.is_known() {
            log::warn!("Shape '{}' has unknown color '{}'", shape.id, shape.color);
        }
    }
    Ok(())
}

// ── Reader ────────────────────────────────────────────────────────────

pub struct ShapeSetReader<R: Read> {
    reader: R,
}

impl<R: Read> ShapeSetReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn read(&mut self) -> Result<Vec<Shape>, ShapeSetError> {
        let file: ShapeSetFile = serde_json::from_reader(&mut self.reader)?;
        let shapes = match file {
            ShapeSetFile::Bare(shapes) => shapes,
            ShapeSetFile::Wrapped { shapes } => shapes,
        };
        validate(&shapes)?;
        log::info!("Read {} shapes", shapes.len());
        Ok(shapes)
    }
}

// ── Writer ────────────────────────────────────────────────────────────

pub struct ShapeSetWriter<W: Write> {
    writer: W,
}

impl<W: Write> ShapeSetWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, shapes: &[Shape]) -> Result<(), ShapeSetError> {
        validate(shapes)?;
        serde_json::to_writer_pretty(&mut self.writer, &ShapeSetOut { shapes })?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn load_shapes(path: impl AsRef<Path>) -> Result<Vec<Shape>, ShapeSetError> {
    let path = path.as_ref();
    log::debug!("Loading shapes from {}", path.display());
    let file = File::open(path)?;
    ShapeSetReader::new(BufReader::new(file)).read()
}

pub fn save_shapes(path: impl AsRef<Path>, shapes: &[Shape]) -> Result<(), ShapeSetError> {
    let file = File::create(path.as_ref())?;
    ShapeSetWriter::new(BufWriter::new(file)).write(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tessera_core::{standard_tetrominoes, Block, ShapeColor};

    #[test]
    fn test_read_bare_array() {
        let json = r#"[
            {"id": "a", "blocks": [[0,0],[0,1]], "color": "red"},
            {"id": "b", "blocks": [[1,1]], "color": "mauve"}
        ]"#;
        let shapes = ShapeSetReader::new(Cursor::new(json)).read().unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].blocks, vec![Block::new(0, 0), Block::new(0, 1)]);
        assert_eq!(shapes[1].color, ShapeColor::Other("mauve".into()));
    }

    #[test]
    fn test_read_wrapped_object() {
        let json = r#"{"shapes": [{"id": "x", "blocks": [[2,3]], "color": "cyan"}]}"#;
        let shapes = ShapeSetReader::new(Cursor::new(json)).read().unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].id, "x");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": "dup", "blocks": [[0,0]], "color": "red"},
            {"id": "dup", "blocks": [[0,0]], "color": "blue"}
        ]"#;
        let err = ShapeSetReader::new(Cursor::new(json)).read().unwrap_err();
        match err {
            ShapeSetError::DuplicateId { id } => assert_eq!(id, "dup"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_oversized_shapes_rejected() {
        let json = r#"[{"id": "tall", "blocks": [[-2147483648,0],[2147483647,0]], "color": "red"}]"#;
        let err = ShapeSetReader::new(Cursor::new(json)).read().unwrap_err();
        match err {
            ShapeSetError::TooLarge { id, rows, cols, .. } => {
                assert_eq!(id, "tall");
                assert_eq!(rows as u64, 1 << 32);
                assert_eq!(cols, 1);
            }
            other => panic!("unexpected error: {other}"),
        }

        let json = r#"[{"id": "wide", "blocks": [[0,0],[0,100000000]], "color": "red"}]"#;
        let err = ShapeSetReader::new(Cursor::new(json)).read().unwrap_err();
        assert!(matches!(err, ShapeSetError::TooLarge { cols: 100_000_001, .. }));

        let edge = Shape::from_coords("edge", &[(0, 0), (MAX_GRID_SPAN as i32 - 1, 0)], "red");
        assert!(validate(&[edge]).is_ok());
    }

    #[test]
    fn test_missing_ids_are_generated() {
        let json = r#"[
            {"blocks": [[0,0]], "color": "red"},
            {"blocks": [[0,0],[0,1]], "color": "blue"}
        ]"#;
        let shapes = ShapeSetReader::new(Cursor::new(json)).read().unwrap();
        assert_eq!(shapes.len(), 2);
        assert!(!shapes[0].id.is_empty());
        assert_ne!(shapes[0].id, shapes[1].id);
    }

    #[test]
    fn test_degenerate_shapes_are_kept() {
        let json = r#"[
            {"id": "empty", "blocks": [], "color": "red"},
            {"id": "twice", "blocks": [[0,0],[0,0]], "color": "blue"}
        ]"#;
        let shapes = ShapeSetReader::new(Cursor::new(json)).read().unwrap();
        assert_eq!(shapes.len(), 2);
        assert!(shapes[0].is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = ShapeSetReader::new(Cursor::new("[{\"id\": 3}]")).read().unwrap_err();
        assert!(matches!(err, ShapeSetError::Json(_)));
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let mut shapes = standard_tetrominoes();
        shapes.push(Shape::from_coords("odd", &[(-1, 4)], "teal"));

        let mut buffer: Vec<u8> = Vec::new();
        ShapeSetWriter::new(&mut buffer).write(&shapes).unwrap();
        assert!(String::from_utf8_lossy(&buffer).contains("\"shapes\""));

        let read = ShapeSetReader::new(Cursor::new(buffer)).read().unwrap();
        assert_eq!(read, shapes);
    }

    #[test]
    fn test_load_and_save_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shapes.json");
        let shapes = standard_tetrominoes();
        save_shapes(&path, &shapes).unwrap();
        assert_eq!(load_shapes(&path).unwrap(), shapes);

        let missing = load_shapes(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ShapeSetError::Io(_)));
    }
}
