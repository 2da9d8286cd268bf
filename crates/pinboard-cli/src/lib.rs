//! CLI logic for the Pinboard board renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use pinboard::{BoardBuilder, PinboardError, identifier::Id, view::ViewShell};

/// Run the Pinboard CLI application
///
/// Depending on the arguments this lists the board's holes, writes the live
/// view with one hole hovered, or exports the board as a static SVG file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PinboardError` for:
/// - Configuration loading errors
/// - A hovered hole that the board does not contain
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), PinboardError> {
    info!(board = args.board.name(); "Processing board");

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = BoardBuilder::new(app_config)?;

    if args.list_holes {
        let model = builder.layout(args.board);
        for hole in model.holes() {
            println!("{}", hole.id());
        }
        info!(holes = model.hole_count(); "Listed holes");
        return Ok(());
    }

    let output = args.output_path();

    if let Some(name) = &args.hover {
        let mut shell = ViewShell::new(builder.config())?;
        shell.select(args.board);

        let id = Id::lookup(name)
            .filter(|id| shell.model().contains_hole(*id))
            .ok_or_else(|| PinboardError::UnknownHole(name.clone()))?;
        shell.pointer_enter(id);
        let svg = shell.render().to_svg_string();

        if let Some(status) = shell.status() {
            println!("{status}");
        }
        fs::write(&output, svg)?;

        info!(output_file = output.as_str(); "Live SVG written");
        return Ok(());
    }

    let path = builder.export(args.board).write_as(&output)?;
    info!(output_file = path.display().to_string(); "SVG exported successfully");

    Ok(())
}
