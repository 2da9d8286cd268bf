//! Straight decorative lines, such as power-rail polarity stripes.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
};

/// A straight line segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
    opacity: Option<f32>,
}

impl Line {
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self {
            start,
            end,
            stroke,
            opacity: None,
        }
    }

    /// Sets the whole-element opacity (builder style).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Drawable for Line {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y());
        line = crate::apply_stroke!(line, &self.stroke);

        if let Some(opacity) = self.opacity {
            line = line.set("opacity", opacity);
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Decoration, Box::new(line));
        output
    }
}
