//! Pinboard - deterministic SVG layouts for prototyping boards.
//!
//! Two boards are supported: a solderless breadboard and a micro:bit GPIO
//! extension board. Each is laid out from a handful of numeric parameters,
//! rendered with hover highlighting of individual holes, and exported as a
//! static SVG document.

pub mod config;
pub mod export;
pub mod layout;
pub mod model;
pub mod render;
pub mod view;

mod error;

pub use pinboard_core::{color, draw, geometry, identifier};

pub use error::PinboardError;

use log::{debug, info};

use config::AppConfig;
use export::{ExportedFile, svg::Svg};
use model::{BoardKind, DiagramModel};
use render::{RenderedDiagram, Renderer};

/// Builder for laying out, rendering and exporting boards.
///
/// # Examples
///
/// ```rust
/// use pinboard::{BoardBuilder, config::AppConfig, model::BoardKind};
///
/// let builder = BoardBuilder::new(AppConfig::default())?;
///
/// let model = builder.layout(BoardKind::Breadboard);
/// assert_eq!(model.hole_count(), 850);
///
/// let file = builder.export(BoardKind::GpioBoard);
/// assert_eq!(file.file_name(), "microbit-gpio-board.svg");
/// # Ok::<(), pinboard::PinboardError>(())
/// ```
#[derive(Debug, Default)]
pub struct BoardBuilder {
    config: AppConfig,
}

impl BoardBuilder {
    /// Create a new board builder with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PinboardError::Config`] when the board parameters fail
    /// [`AppConfig::validate`].
    pub fn new(config: AppConfig) -> Result<Self, PinboardError> {
        config.validate().map_err(PinboardError::Config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lay out a board.
    pub fn layout(&self, kind: BoardKind) -> DiagramModel {
        layout::layout(kind, &self.config)
    }

    /// Create a renderer using the configured palette.
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.config.style().palette())
    }

    /// Lay out and render a board with no hole hovered.
    pub fn render(&self, kind: BoardKind) -> RenderedDiagram {
        self.renderer().render(&self.layout(kind))
    }

    /// Render a board to the live, interactive SVG string.
    pub fn render_svg(&self, kind: BoardKind) -> String {
        let svg = self.render(kind).to_svg_string();
        debug!(bytes = svg.len(); "SVG rendered");
        svg
    }

    /// Lay out, render and export a board as a static SVG file.
    pub fn export(&self, kind: BoardKind) -> ExportedFile {
        info!(board = kind.name(); "Exporting board");
        Svg::new().export_rendered(&self.render(kind))
    }
}
