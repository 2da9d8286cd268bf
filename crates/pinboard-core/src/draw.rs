//! Drawable primitives for board rendering.
//!
//! Every primitive implements [`Drawable`], producing SVG nodes grouped by
//! [`RenderLayer`] so that backgrounds, decorations, holes and text keep a
//! stable z-order regardless of insertion order.

mod layer;
mod line;
mod rectangle;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use line::Line;
pub use rectangle::{Rectangle, RectangleDefinition};
pub use stroke::StrokeDefinition;
pub use text::{FontWeight, Orientation, Text, TextAnchor, TextDefinition};

/// A positioned visual element that can render itself to layered SVG output.
pub trait Drawable: std::fmt::Debug {
    /// Renders this element, returning its SVG nodes tagged by layer.
    fn render_to_layers(&self) -> LayeredOutput;
}
