//! Breadboard layout.
//!
//! The board has two power rails, one on each side, and a main grid of two
//! banks (`a`-`e` and `f`-`j` by default) split by a central divider. Each
//! power rail has a negative and a positive line of holes grouped into
//! segments, with a polarity stripe running alongside each line.

use pinboard_core::{
    color::Color,
    draw::{Rectangle, RectangleDefinition, StrokeDefinition, Text, TextAnchor, TextDefinition},
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use crate::{
    config::BreadboardConfig,
    layout::LayoutEngine,
    model::{BoardKind, DiagramModel, Group, Hole, HoleRole, HoleShape, Stripe},
};

const BOARD_FILL: &str = "#f8f9fa";
const RAIL_FILL: &str = "#f1f1f1";
const NEGATIVE_COLOR: &str = "#3b82f6";
const POSITIVE_COLOR: &str = "#ef4444";
const LABEL_COLOR: &str = "#888";
const ROW_LABEL_COLOR: &str = "#666";

const HOLE_CORNER_RADIUS: f32 = 1.0;
const STRIPE_WIDTH: f32 = 2.0;
const STRIPE_OPACITY: f32 = 0.6;
const RAIL_PADDING_X: f32 = 10.0;
const RAIL_PADDING_TOP: f32 = 20.0;
const RAIL_CORNER_RADIUS: f32 = 4.0;
const RAIL_OPACITY: f32 = 0.5;
/// Distance of column and polarity labels above the first row.
const TOP_LABEL_OFFSET: f32 = 15.0;
/// Distance of the bottom column labels below the grid height.
const BOTTOM_LABEL_OFFSET: f32 = 5.0;
/// Horizontal distance of row numbers from the outer columns.
const ROW_LABEL_OFFSET: f32 = 15.0;
const ROW_LABEL_SIZE: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Layout engine for the solderless breadboard.
pub struct BreadboardEngine<'a> {
    config: &'a BreadboardConfig,
}

impl<'a> BreadboardEngine<'a> {
    pub fn new(config: &'a BreadboardConfig) -> Self {
        Self { config }
    }

    fn label_style(&self) -> TextDefinition {
        let mut style = TextDefinition::new();
        style.set_font_family("monospace");
        style.set_font_size(10);
        style.set_color(Some(Color::from_literal(LABEL_COLOR)));
        style.set_anchor(TextAnchor::Middle);
        style
    }

    fn hole(&self, id: String, center: Point, role: HoleRole) -> Hole {
        Hole::new(
            Id::new(&id),
            center,
            role,
            HoleShape::Square {
                size: self.config.hole_size(),
                corner_radius: HOLE_CORNER_RADIUS,
            },
        )
    }

    /// Height of the main grid in rows times pitch.
    fn grid_height(&self) -> f32 {
        self.config.main_rows() as f32 * self.config.pitch()
    }

    fn rail_background(&self, start_x: f32) -> Rectangle {
        let definition = RectangleDefinition::new()
            .with_fill(Color::from_literal(RAIL_FILL))
            .with_corner_radius(RAIL_CORNER_RADIUS)
            .with_opacity(RAIL_OPACITY);
        let top_left = Point::new(
            start_x - RAIL_PADDING_X,
            self.config.start_y() - RAIL_PADDING_TOP,
        );
        let size = Size::new(
            self.config.power_rail_width() + 2.0 * RAIL_PADDING_X,
            self.grid_height() + 2.0 * RAIL_PADDING_TOP,
        );
        Rectangle::new(definition, Bounds::new_from_top_left(top_left, size))
    }

    fn stripe(&self, x: f32, color: &'static str) -> Stripe {
        let start_y = self.config.start_y();
        let rows = self.config.main_rows().saturating_sub(1);
        let end_y = start_y + rows as f32 * self.config.pitch();
        Stripe::new(
            Point::new(x, start_y),
            Point::new(x, end_y),
            StrokeDefinition::new(Color::from_literal(color), STRIPE_WIDTH),
        )
        .with_opacity(STRIPE_OPACITY)
    }

    fn power_rail(&self, side: Side) -> Group {
        let config = self.config;
        let pitch = config.pitch();
        let start_x = match side {
            Side::Left => config.start_x_power_left(),
            Side::Right => config.start_x_power_right(),
        };
        let negative_x = start_x;
        let positive_x = start_x + pitch;

        let mut group = Group::new(&format!("power-{}", side.name()));
        group.push(self.stripe(negative_x - pitch / 2.0, NEGATIVE_COLOR));
        group.push(self.stripe(positive_x + pitch / 2.0, POSITIVE_COLOR));

        let segment_spacing = config.segment_spacing();
        for segment in 1..=config.power_segments() {
            let segment_start_y =
                config.start_y() + (segment - 1) as f32 * segment_spacing + pitch / 2.0;

            for row in 1..=config.holes_per_segment() {
                let y = segment_start_y + (row - 1) as f32 * pitch;
                group.push(self.hole(
                    format!("pwr-{}-neg-{segment}-{row}", side.name()),
                    Point::new(negative_x, y),
                    HoleRole::PowerNegative,
                ));
                group.push(self.hole(
                    format!("pwr-{}-pos-{segment}-{row}", side.name()),
                    Point::new(positive_x, y),
                    HoleRole::PowerPositive,
                ));
            }
        }

        let label_y = config.start_y() - TOP_LABEL_OFFSET;
        for (text, x, color) in [
            ("-", negative_x, NEGATIVE_COLOR),
            ("+", positive_x, POSITIVE_COLOR),
        ] {
            let mut style = self.label_style();
            style.set_color(Some(Color::from_literal(color)));
            group.push(Text::new(style, text, Point::new(x, label_y)));
        }

        group
    }

    /// Returns the letter and x coordinate of every main-grid column, left to right.
    ///
    /// Columns past `z` are not laid out; [`BreadboardConfig::validate`]
    /// rejects such boards.
    fn columns(&self) -> Vec<(char, f32)> {
        let config = self.config;
        let per_bank = config.columns_per_bank();
        let pitch = config.pitch();
        let banks = [config.start_x_bank_left(), config.start_x_bank_right()];

        let xs = banks.into_iter().flat_map(|bank_x| {
            (0..per_bank).map(move |column| bank_x + column as f32 * pitch)
        });
        ('a'..='z').zip(xs).collect()
    }

    fn main_grid(&self) -> Group {
        let config = self.config;
        let pitch = config.pitch();
        let columns = self.columns();
        let last_row = config.main_rows();

        let mut group = Group::new("main-grid");

        for row in 1..=last_row {
            let y = self.row_y(row);
            for &(letter, x) in &columns {
                group.push(self.hole(
                    format!("main-{row}-{letter}"),
                    Point::new(x, y),
                    HoleRole::MainGrid,
                ));
            }
        }

        let top_y = config.start_y() - TOP_LABEL_OFFSET;
        let bottom_y = config.start_y() + self.grid_height() + BOTTOM_LABEL_OFFSET;
        for &(letter, x) in &columns {
            let text = letter.to_string();
            group.push(Text::new(self.label_style(), text.as_str(), Point::new(x, top_y)));
            group.push(Text::new(self.label_style(), text, Point::new(x, bottom_y)));
        }

        let mut row_style = self.label_style();
        row_style.set_font_size(ROW_LABEL_SIZE);
        row_style.set_color(Some(Color::from_literal(ROW_LABEL_COLOR)));

        let left_x = config.start_x_bank_left() - ROW_LABEL_OFFSET;
        let right_x = config.start_x_bank_right()
            + config.columns_per_bank().saturating_sub(1) as f32 * pitch
            + ROW_LABEL_OFFSET;
        for row in (1..=last_row).filter(|&row| row == 1 || row % 5 == 0 || row == last_row) {
            let y = self.row_y(row);
            group.push(Text::new(row_style.clone(), row.to_string(), Point::new(left_x, y)));
            group.push(Text::new(row_style.clone(), row.to_string(), Point::new(right_x, y)));
        }

        group
    }

    /// Returns the y coordinate of a 1-based main-grid row.
    fn row_y(&self, row: u32) -> f32 {
        self.config.start_y() + row.saturating_sub(1) as f32 * self.config.pitch()
    }
}

impl LayoutEngine for BreadboardEngine<'_> {
    fn calculate(&self) -> DiagramModel {
        let canvas = self.config.canvas_size();
        let mut model = DiagramModel::new(BoardKind::Breadboard, canvas);

        model.push(Rectangle::new(
            RectangleDefinition::new().with_fill(Color::from_literal(BOARD_FILL)),
            Bounds::new_from_top_left(Point::default(), canvas),
        ));
        model.push(self.rail_background(self.config.start_x_power_left()));
        model.push(self.rail_background(self.config.start_x_power_right()));

        model.push(self.power_rail(Side::Left));
        model.push(self.main_grid());
        model.push(self.power_rail(Side::Right));

        model
    }
}
