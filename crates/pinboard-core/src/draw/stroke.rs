//! Stroke definitions for outlines and stripes.
//!
//! | Rust Property | SVG Attribute |
//! |--------------|---------------|
//! | `color` | `stroke` |
//! | `width` | `stroke-width` |

use crate::color::Color;

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use pinboard_core::draw::StrokeDefinition;
/// use pinboard_core::color::Color;
///
/// let outline = StrokeDefinition::new(Color::new("#164e3f").unwrap(), 2.0);
/// assert_eq!(outline.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
        }
    }
}

/// Applies all stroke attributes of a [`StrokeDefinition`] to an SVG element.
///
/// # Examples
///
/// ```
/// use pinboard_core::draw::StrokeDefinition;
/// use pinboard_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 0.5);
/// let pin = svg_element::Circle::new().set("r", 4);
/// let pin = pinboard_core::apply_stroke!(pin, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width())
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
    }

    #[test]
    fn test_apply_stroke_sets_attributes() {
        let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 0.5);
        let circle = crate::apply_stroke!(svg_element::Circle::new(), &stroke);
        let rendered = circle.to_string();

        assert!(rendered.contains("stroke=\"black\""));
        assert!(rendered.contains("stroke-width=\"0.5\""));
        assert!(!rendered.contains("stroke-opacity"));
    }
}
