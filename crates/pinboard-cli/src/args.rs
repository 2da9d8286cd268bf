//! Command-line argument definitions for the Pinboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the board, the output path, the
//! configuration file and logging verbosity.

use clap::Parser;

use pinboard::model::BoardKind;

/// Command-line arguments for the Pinboard board renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Board to draw
    #[arg(help = "Board to draw: breadboard or gpio-board")]
    pub board: BoardKind,

    /// Path to the output SVG file (defaults to the board's export name)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render the live view with this hole hovered instead of exporting
    #[arg(long, value_name = "HOLE_ID")]
    pub hover: Option<String>,

    /// Print every hole identifier in document order and exit
    #[arg(long)]
    pub list_holes: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Creates arguments that export `board` with defaults for everything else.
    pub fn new(board: BoardKind) -> Self {
        Self {
            board,
            output: None,
            config: None,
            hover: None,
            list_holes: false,
            log_level: "info".to_string(),
        }
    }

    /// Returns the output path, falling back to the board's export name.
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.svg", self.board.export_stem()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["pinboard", "gpio-board"]).unwrap();
        assert_eq!(args.board, BoardKind::GpioBoard);
        assert_eq!(args.log_level, "info");
        assert!(!args.list_holes);
        assert_eq!(args.output_path(), "microbit-gpio-board.svg");
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "pinboard",
            "breadboard",
            "-o",
            "board.svg",
            "-c",
            "pinboard.toml",
            "--hover",
            "main-1-a",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.board, BoardKind::Breadboard);
        assert_eq!(args.output_path(), "board.svg");
        assert_eq!(args.config.as_deref(), Some("pinboard.toml"));
        assert_eq!(args.hover.as_deref(), Some("main-1-a"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_rejects_unknown_board() {
        assert!(Args::try_parse_from(["pinboard", "stripboard"]).is_err());
    }
}
