//! Command-line front end for the Tessera shape palette.
//!
//! Loads a shape set (or the standard tetrominoes), replays clicks against
//! the palette, and prints the result. The binary owns the selection: every
//! index the palette reports replaces the current one.

mod term;

use std::path::PathBuf;

use anyhow::Context;
use tessera_core::{standard_tetrominoes, Shape};
use tessera_io::Settings;
use tessera_renderer::{PaletteStyle, PaletteView};

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
enum Format {
    /// ANSI true-color blocks
    Text,
    /// `[]` and `.` without escapes
    Plain,
    /// The render frame as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ClickPoint {
    x: f64,
    y: f64,
}

fn parse_point(s: &str) -> Result<ClickPoint, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("'{v}': {e}"));
    Ok(ClickPoint {
        x: parse(x)?,
        y: parse(y)?,
    })
}

#[derive(Debug, clap::Parser)]
#[command(about, version)]
struct Args {
    /// JSON shape set; the standard tetrominoes are used when omitted
    #[arg(long)]
    shapes: Option<PathBuf>,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Initially selected palette index
    #[arg(long)]
    selected: Option<usize>,

    /// Click at frame coordinates X,Y (repeatable, applied in order)
    #[arg(long = "click", value_parser = parse_point)]
    clicks: Vec<ClickPoint>,

    /// Activate a preview by index (repeatable, applied after clicks)
    #[arg(long = "activate")]
    activations: Vec<usize>,

    /// Write the loaded shape set to this file
    #[arg(long)]
    export: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

/// Replay clicks and activations, returning the resulting selection.
fn apply_input(
    shapes: &[Shape],
    style: &PaletteStyle,
    mut selected: Option<usize>,
    clicks: &[ClickPoint],
    activations: &[usize],
) -> Option<usize> {
    for click in clicks {
        let mut view = PaletteView::new(shapes, selected)
            .with_style(style.clone())
            .on_select(|index| selected = Some(index));
        if view.click(click.x, click.y).is_none() {
            log::info!("Click at ({}, {}) hit no preview", click.x, click.y);
        }
    }
    for &index in activations {
        let mut view = PaletteView::new(shapes, selected)
            .with_style(style.clone())
            .on_select(|index| selected = Some(index));
        if !view.activate(index) {
            log::warn!("No preview at index {}", index);
        }
    }
    selected
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = <Args as clap::Parser>::parse();

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let shapes = match &args.shapes {
        Some(path) => tessera_io::load_shapes(path)
            .with_context(|| format!("loading shapes from {}", path.display()))?,
        None => {
            log::debug!("No shape file given, using the standard tetrominoes");
            standard_tetrominoes()
        }
    };

    if let Some(path) = &args.export {
        tessera_io::save_shapes(path, &shapes)
            .with_context(|| format!("writing shapes to {}", path.display()))?;
        log::info!("Wrote {} shapes to {}", shapes.len(), path.display());
    }

    let selected = apply_input(
        &shapes,
        &settings.style,
        args.selected,
        &args.clicks,
        &args.activations,
    );

    let frame = PaletteView::new(&shapes, selected)
        .with_style(settings.style)
        .render();

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&frame)?),
        Format::Text => print!("{}", term::render(&frame, true)),
        Format::Plain => print!("{}", term::render(&frame, false)),
    }
    Ok(())
}
