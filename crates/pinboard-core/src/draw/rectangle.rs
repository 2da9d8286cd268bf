//! Filled and outlined rectangles used for board backgrounds and sections.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Bounds,
};

/// Visual style of a rectangle.
///
/// A definition without fill renders with `fill="none"`, which is how board
/// outlines are drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectangleDefinition {
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
    corner_radius: f32,
    opacity: Option<f32>,
}

impl RectangleDefinition {
    /// Creates an unfilled, unstroked, square-cornered definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill color (builder style).
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the outline stroke (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the corner radius (builder style).
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Sets the whole-element opacity (builder style).
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    /// Builds the SVG `<rect>` for this definition covering `bounds`.
    pub fn to_svg(&self, bounds: Bounds) -> svg_element::Rectangle {
        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height());

        rect = match self.fill {
            Some(fill) => rect.set("fill", fill.to_string()),
            None => rect.set("fill", "none"),
        };

        if let Some(stroke) = &self.stroke {
            rect = crate::apply_stroke!(rect, stroke);
        }

        if self.corner_radius > 0.0 {
            rect = rect.set("rx", self.corner_radius);
        }

        if let Some(opacity) = self.opacity {
            rect = rect.set("opacity", opacity);
        }

        rect
    }
}

/// A rectangle placed at fixed bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    definition: RectangleDefinition,
    bounds: Bounds,
}

impl Rectangle {
    pub fn new(definition: RectangleDefinition, bounds: Bounds) -> Self {
        Self { definition, bounds }
    }

    pub fn definition(&self) -> &RectangleDefinition {
        &self.definition
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl Drawable for Rectangle {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        output.add_to_layer(
            RenderLayer::Background,
            Box::new(self.definition.to_svg(self.bounds)),
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};

    fn bounds() -> Bounds {
        Bounds::new_from_top_left(Point::new(30.0, 20.0), Size::new(60.0, 1340.0))
    }

    #[test]
    fn test_unfilled_rectangle_renders_fill_none() {
        let rect = RectangleDefinition::new().to_svg(bounds()).to_string();
        assert!(rect.contains("fill=\"none\""));
        assert!(!rect.contains("rx="));
    }

    #[test]
    fn test_rectangle_attributes() {
        let definition = RectangleDefinition::new()
            .with_fill(Color::new("#f1f1f1").unwrap())
            .with_corner_radius(4.0)
            .with_opacity(0.5);
        let rect = definition.to_svg(bounds()).to_string();

        assert!(rect.contains("x=\"30\""));
        assert!(rect.contains("y=\"20\""));
        assert!(rect.contains("width=\"60\""));
        assert!(rect.contains("height=\"1340\""));
        assert!(rect.contains("rx=\"4\""));
        assert!(rect.contains("opacity=\"0.5\""));
    }

    #[test]
    fn test_rectangle_renders_on_background_layer() {
        let rectangle = Rectangle::new(RectangleDefinition::new(), bounds());
        let nodes = rectangle.render_to_layers().render();

        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].to_string().contains("data-layer=\"background\""));
    }
}
