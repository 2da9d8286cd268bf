//! Error types for Pinboard operations.
//!
//! Layout and rendering cannot fail; errors only arise at the edges, when
//! configuration is loaded, a hole is named by the user, or a file is written.

use std::io;

use thiserror::Error;

/// The main error type for Pinboard operations.
#[derive(Debug, Error)]
pub enum PinboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown hole `{0}`")]
    UnknownHole(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for PinboardError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PinboardError::UnknownHole("main-99-z".to_string());
        assert_eq!(err.to_string(), "Unknown hole `main-99-z`");

        let err = PinboardError::Config("pitch must be a positive number, got 0".to_string());
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_export_error_conversion() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let err = PinboardError::from(crate::export::Error::Io(io));
        assert!(matches!(err, PinboardError::Export(_)));
        assert!(err.to_string().contains("read-only"));
    }
}
