//! Board layout engines.
//!
//! Each engine is a pure function from a board configuration to a
//! [`DiagramModel`]. The same configuration always yields the same model,
//! down to the last coordinate.

pub mod breadboard;
pub mod gpio;

pub use breadboard::BreadboardEngine;
pub use gpio::GpioEngine;

use log::{debug, info, trace};

use crate::{
    config::AppConfig,
    model::{BoardKind, DiagramModel},
};

/// Interface shared by the board layout engines.
pub trait LayoutEngine {
    /// Calculates the complete model of the board.
    fn calculate(&self) -> DiagramModel;
}

/// Lays out the board of the given kind using the matching configuration.
pub fn layout(kind: BoardKind, config: &AppConfig) -> DiagramModel {
    info!(board = kind.name(); "Calculating board layout");

    let engine: Box<dyn LayoutEngine + '_> = match kind {
        BoardKind::Breadboard => Box::new(BreadboardEngine::new(config.breadboard())),
        BoardKind::GpioBoard => Box::new(GpioEngine::new(config.gpio())),
    };
    let model = engine.calculate();

    debug!(
        board = kind.name(),
        holes = model.hole_count(),
        width = model.canvas().width(),
        height = model.canvas().height();
        "Layout calculated"
    );
    trace!(model:?; "Diagram model");

    model
}
