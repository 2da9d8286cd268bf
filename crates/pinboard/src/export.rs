pub mod svg;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{error, info};

use crate::render::RenderedDiagram;

/// Turns a rendered diagram into a standalone file.
pub trait Exporter {
    /// Exports the diagram, or does nothing when no diagram has been rendered yet.
    fn export(&self, rendered: Option<&RenderedDiagram>) -> Option<ExportedFile>;
}

/// A file ready to be saved by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    file_name: String,
    mime_type: &'static str,
    contents: String,
}

impl ExportedFile {
    pub fn new(file_name: impl Into<String>, mime_type: &'static str, contents: String) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type,
            contents,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Saves the file into `dir` under its own name and returns the written path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
        self.write_as(dir.as_ref().join(&self.file_name))
    }

    /// Saves the file at an explicit path.
    pub fn write_as(&self, path: impl Into<PathBuf>) -> Result<PathBuf, Error> {
        let path = path.into();
        info!(path = path.display().to_string(); "Writing exported file");

        if let Err(err) = fs::write(&path, &self.contents) {
            error!(path = path.display().to_string(), err:err; "Failed to write exported file");
            return Err(Error::Io(err));
        }

        Ok(path)
    }
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}
