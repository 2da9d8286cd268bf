//! Text rendering definitions for board labels.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A positioned label combining content with a [`TextDefinition`]
//!
//! # Quick Start
//!
//! ```
//! # use pinboard_core::draw::{Drawable, Orientation, Text, TextAnchor, TextDefinition};
//! # use pinboard_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_family("monospace");
//! style.set_font_size(9);
//! style.set_anchor(TextAnchor::Middle);
//!
//! let label = Text::new(style, "65", Point::new(105.0, 1320.0));
//! assert_eq!(label.orientation(), Orientation::Horizontal);
//! assert!(!label.render_to_layers().is_empty());
//! ```
//!
//! Text renders as a single SVG `<text>` element on the
//! [`Text`](crate::draw::RenderLayer::Text) layer.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Horizontal alignment of the text relative to its anchor point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
}

impl TextAnchor {
    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// Font weight of a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Orientation of a label around its anchor point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Orientation {
    #[default]
    Horizontal,
    /// Rotated clockwise by the given number of degrees around the anchor.
    Rotated(f32),
}

/// Defines the visual style for text elements.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `10` |
/// | Text color | `None` (SVG default, typically black) |
/// | Weight | `Normal` |
/// | Anchor | `Start` |
/// | Centered baseline | `true` |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    color: Option<Color>,
    weight: FontWeight,
    anchor: TextAnchor,
    centered_baseline: bool,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in user units.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    ///
    /// # Arguments
    ///
    /// * `family` - The font family list (e.g., "monospace", "Arial, sans-serif")
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the text color. `None` leaves the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    pub fn set_anchor(&mut self, anchor: TextAnchor) {
        self.anchor = anchor;
    }

    /// Controls whether the text is vertically centred on its anchor point.
    ///
    /// When disabled the anchor marks the alphabetic baseline.
    pub fn set_centered_baseline(&mut self, centered: bool) {
        self.centered_baseline = centered;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    pub fn centered_baseline(&self) -> bool {
        self.centered_baseline
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 10,
            color: None,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Start,
            centered_baseline: true,
        }
    }
}

/// A positioned, renderable text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    definition: TextDefinition,
    content: String,
    position: Point,
    orientation: Orientation,
}

impl Text {
    /// Creates a new horizontal text element.
    ///
    /// # Arguments
    ///
    /// * `definition` - The [`TextDefinition`] controlling text appearance.
    /// * `content` - The text string to render.
    /// * `position` - The anchor point of the text.
    pub fn new(definition: TextDefinition, content: impl Into<String>, position: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            position,
            orientation: Orientation::Horizontal,
        }
    }

    /// Sets the orientation (builder style).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }
}

impl Drawable for Text {
    fn render_to_layers(&self) -> LayeredOutput {
        let x = self.position.x();
        let y = self.position.y();

        let mut rendered = svg_element::Text::new(self.content.as_str())
            .set("x", x)
            .set("y", y)
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.weight().to_svg_value())
            .set("text-anchor", self.definition.anchor().to_svg_value());

        if self.definition.centered_baseline() {
            rendered = rendered.set("alignment-baseline", "middle");
        }

        if let Some(color) = self.definition.color() {
            rendered = rendered.set("fill", color.to_string());
        }

        if let Orientation::Rotated(angle) = self.orientation {
            rendered = rendered.set("transform", format!("rotate({angle}, {x}, {y})"));
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(rendered));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &Text) -> String {
        text.render_to_layers()
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_text_definition_defaults() {
        let definition = TextDefinition::default();
        assert_eq!(definition.font_family(), "Arial");
        assert_eq!(definition.font_size(), 10);
        assert_eq!(definition.anchor(), TextAnchor::Start);
        assert!(definition.centered_baseline());
    }

    #[test]
    fn test_text_renders_content_and_style() {
        let mut definition = TextDefinition::new();
        definition.set_font_family("monospace");
        definition.set_anchor(TextAnchor::Middle);
        let text = Text::new(definition, "a", Point::new(120.0, 25.0));

        let svg = render(&text);
        assert!(svg.contains("\na\n"));
        assert!(svg.contains("font-family=\"monospace\""));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("alignment-baseline=\"middle\""));
        assert!(!svg.contains("transform"));
    }

    #[test]
    fn test_rotated_text_has_transform_around_anchor() {
        let text = Text::new(TextDefinition::new(), "Edge Connector", Point::new(395.0, 460.0))
            .with_orientation(Orientation::Rotated(90.0));

        let svg = render(&text);
        assert!(svg.contains("rotate(90, 395, 460)"));
    }

    #[test]
    fn test_uncentered_baseline_omits_alignment() {
        let mut definition = TextDefinition::new();
        definition.set_centered_baseline(false);
        let text = Text::new(definition, "title", Point::new(0.0, 0.0));

        assert!(!render(&text).contains("alignment-baseline"));
    }
}
