//! Error adapter for converting PinboardError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use pinboard::PinboardError;

/// Adapter rendering a [`PinboardError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a PinboardError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            PinboardError::Io(err) => Some(err),
            PinboardError::Export(err) => Some(err.as_ref()),
            PinboardError::Config(_) | PinboardError::UnknownHole(_) => None,
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PinboardError::Io(_) => "pinboard::io",
            PinboardError::Config(_) => "pinboard::config",
            PinboardError::UnknownHole(_) => "pinboard::unknown_hole",
            PinboardError::Export(_) => "pinboard::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            PinboardError::UnknownHole(_) => "run with --list-holes to see every hole of the board",
            PinboardError::Config(_) => "check the [breadboard], [gpio] and [style] tables",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = PinboardError::UnknownHole("main-0-a".to_string());
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "pinboard::unknown_hole");
        assert!(adapter.help().unwrap().to_string().contains("--list-holes"));
        assert_eq!(adapter.to_string(), "Unknown hole `main-0-a`");
    }

    #[test]
    fn test_io_error_has_source_and_no_help() {
        let err = PinboardError::Io(std::io::Error::other("disk full"));
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "pinboard::io");
        assert!(adapter.help().is_none());
        assert!(std::error::Error::source(&adapter).is_some());
    }
}
