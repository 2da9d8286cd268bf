//! micro:bit GPIO extension board layout.
//!
//! The board carries four pin-header sections on its left half (POWER,
//! ANALOG, DIGITAL, I2C) and purely decorative components along its edges.
//! Header sections keep fixed origins; the pin pitch and the dense row
//! factor come from [`GpioBoardConfig`].

use pinboard_core::{
    color::Color,
    draw::{
        FontWeight, Orientation, Rectangle, RectangleDefinition, StrokeDefinition, Text,
        TextAnchor, TextDefinition,
    },
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use crate::{
    config::GpioBoardConfig,
    layout::LayoutEngine,
    model::{BoardKind, DiagramModel, Group, Hole, HoleRole, HoleShape, Section},
};

const PCB_FILL: &str = "#0a3d2e";
const OUTLINE_COLOR: &str = "#164e3f";
const SECTION_FILL: &str = "#1a1a1a";
const TEXT_COLOR: &str = "#fff";
const PIN_OUTLINE: &str = "#000";

const OUTLINE_INSET: f32 = 10.0;
const OUTLINE_WIDTH: f32 = 2.0;
const SECTION_CORNER_RADIUS: f32 = 4.0;
const PIN_OUTLINE_WIDTH: f32 = 0.5;
const SECTION_TITLE_OFFSET: f32 = 20.0;
const SECTION_TITLE_SIZE: u16 = 12;
/// Distance between the first pin of a two-column row and its label.
const PAIR_LABEL_OFFSET: f32 = 50.0;
/// Gap between the last POWER pin of a row and its label.
const POWER_LABEL_GAP: f32 = 10.0;
const POWER_PINS_PER_ROW: u32 = 4;

/// Width of the column of edge components on the right of the board.
const COMPONENT_WIDTH: f32 = 70.0;
/// Distance of the component column's left edge from the board's right edge.
const COMPONENT_INSET: f32 = 90.0;
const COMPONENT_HEIGHT: f32 = 50.0;
const COMPONENT_TOP: f32 = 30.0;
const DC_JACK_WIDTH: f32 = 80.0;
const EDGE_CONNECTOR_RATIO: f32 = 0.8;
const COMPONENT_TEXT_SIZE: u16 = 10;
const BOARD_TITLE: &str = "micro:bit GPIO Extension Board";
const BOARD_TITLE_SIZE: u16 = 14;
const BOARD_TITLE_GAP: f32 = 20.0;

const LABEL_FONT: &str = "Arial, sans-serif";

/// How pins are arranged in a header section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderKind {
    /// Four duplicate pins side by side per row.
    Power,
    /// A left and a right pin per row.
    Pair,
}

/// One row of a header section.
#[derive(Debug, Clone, Copy)]
struct HeaderRow {
    function: &'static str,
    description: Option<&'static str>,
    role: HoleRole,
}

impl HeaderRow {
    const fn signal(function: &'static str) -> Self {
        Self {
            function,
            description: None,
            role: HoleRole::SignalPin,
        }
    }

    const fn described(function: &'static str, description: &'static str) -> Self {
        Self {
            function,
            description: Some(description),
            role: HoleRole::SignalPin,
        }
    }

    const fn with_role(function: &'static str, role: HoleRole) -> Self {
        Self {
            function,
            description: None,
            role,
        }
    }

    fn label(&self) -> String {
        match self.description {
            Some(description) => format!("{} {description}", self.function),
            None => self.function.to_string(),
        }
    }
}

/// Static description of a header section.
#[derive(Debug)]
struct HeaderSection {
    id: &'static str,
    title: &'static str,
    kind: HeaderKind,
    origin: (f32, f32),
    size: (f32, f32),
    /// Offset of the first pin from the section origin.
    first_pin: (f32, f32),
    /// Rows use `dense_row_factor * pitch` instead of the full pitch.
    dense: bool,
    label_size: u16,
    rows: &'static [HeaderRow],
}

const POWER: HeaderSection = HeaderSection {
    id: "power",
    title: "POWER",
    kind: HeaderKind::Power,
    origin: (40.0, 60.0),
    size: (180.0, 180.0),
    first_pin: (30.0, 50.0),
    dense: false,
    label_size: 10,
    rows: &[
        HeaderRow::with_role("GND", HoleRole::GroundPin),
        HeaderRow::with_role("GND", HoleRole::GroundPin),
        HeaderRow::with_role("3.3V", HoleRole::SupplyPin),
        HeaderRow::with_role("5V", HoleRole::SupplyPin),
        HeaderRow::with_role("VIN", HoleRole::SupplyPin),
    ],
};

const ANALOG: HeaderSection = HeaderSection {
    id: "analog",
    title: "ANALOG",
    kind: HeaderKind::Pair,
    origin: (40.0, 260.0),
    size: (180.0, 200.0),
    first_pin: (40.0, 50.0),
    dense: false,
    label_size: 9,
    rows: &[
        HeaderRow::signal("P0"),
        HeaderRow::signal("P1"),
        HeaderRow::signal("P2"),
        HeaderRow::described("P3", "led col 1"),
        HeaderRow::described("P4", "led col 2"),
        HeaderRow::described("P10", "led col 3"),
    ],
};

const DIGITAL: HeaderSection = HeaderSection {
    id: "digital",
    title: "DIGITAL",
    kind: HeaderKind::Pair,
    origin: (40.0, 480.0),
    size: (180.0, 260.0),
    first_pin: (40.0, 50.0),
    dense: true,
    label_size: 9,
    rows: &[
        HeaderRow::described("P5", "button A"),
        HeaderRow::described("P6", "led col 9"),
        HeaderRow::described("P7", "led col 8"),
        HeaderRow::described("P9", "led col 7"),
        HeaderRow::described("P11", "button B"),
        HeaderRow::signal("P8"),
        HeaderRow::signal("P12"),
        HeaderRow::described("P13", "SCK"),
        HeaderRow::described("P14", "MISO"),
        HeaderRow::described("P15", "MOSI"),
        HeaderRow::signal("P16"),
    ],
};

const I2C: HeaderSection = HeaderSection {
    id: "i2c",
    title: "I2C",
    kind: HeaderKind::Pair,
    origin: (40.0, 760.0),
    size: (180.0, 120.0),
    first_pin: (40.0, 50.0),
    dense: true,
    label_size: 10,
    rows: &[
        HeaderRow::signal("SDA"),
        HeaderRow::signal("SCL"),
        // Highlighted like a signal; only POWER rows use the supply color.
        HeaderRow::signal("5V"),
        HeaderRow::with_role("GND", HoleRole::GroundPin),
    ],
};

const HEADER_SECTIONS: [&HeaderSection; 4] = [&POWER, &ANALOG, &DIGITAL, &I2C];

/// Layout engine for the micro:bit GPIO extension board.
pub struct GpioEngine<'a> {
    config: &'a GpioBoardConfig,
}

impl<'a> GpioEngine<'a> {
    pub fn new(config: &'a GpioBoardConfig) -> Self {
        Self { config }
    }

    fn text_style(&self, size: u16) -> TextDefinition {
        let mut style = TextDefinition::new();
        style.set_font_family(LABEL_FONT);
        style.set_font_size(size);
        style.set_color(Some(Color::from_literal(TEXT_COLOR)));
        style
    }

    fn pin(&self, id: String, center: Point, role: HoleRole) -> Hole {
        Hole::new(
            Id::new(&id),
            center,
            role,
            HoleShape::Round {
                diameter: self.config.pin_size(),
                outline: StrokeDefinition::new(
                    Color::from_literal(PIN_OUTLINE),
                    PIN_OUTLINE_WIDTH,
                ),
            },
        )
    }

    fn board(&self) -> [Rectangle; 2] {
        let config = self.config;
        let canvas = config.canvas_size();

        let background = Rectangle::new(
            RectangleDefinition::new()
                .with_fill(Color::from_literal(PCB_FILL))
                .with_corner_radius(config.corner_radius()),
            Bounds::new_from_top_left(Point::default(), canvas),
        );
        let outline = Rectangle::new(
            RectangleDefinition::new()
                .with_stroke(StrokeDefinition::new(
                    Color::from_literal(OUTLINE_COLOR),
                    OUTLINE_WIDTH,
                ))
                .with_corner_radius(config.corner_radius()),
            Bounds::new_from_top_left(
                Point::new(OUTLINE_INSET, OUTLINE_INSET),
                Size::new(
                    canvas.width() - 2.0 * OUTLINE_INSET,
                    canvas.height() - 2.0 * OUTLINE_INSET,
                ),
            ),
        );

        [background, outline]
    }

    /// Builds a dark, titled panel.
    fn panel(&self, bounds: Bounds, title: Option<Text>) -> Section {
        let body = Rectangle::new(
            RectangleDefinition::new()
                .with_fill(Color::from_literal(SECTION_FILL))
                .with_corner_radius(SECTION_CORNER_RADIUS),
            bounds,
        );
        Section::new(body, title)
    }

    fn header(&self, section: &HeaderSection) -> Group {
        let pitch = self.config.pitch();
        let origin = Point::new(section.origin.0, section.origin.1);
        let bounds = Bounds::new_from_top_left(origin, Size::new(section.size.0, section.size.1));

        let mut title_style = self.text_style(SECTION_TITLE_SIZE);
        title_style.set_weight(FontWeight::Bold);
        title_style.set_anchor(TextAnchor::Middle);
        let title = Text::new(
            title_style,
            section.title,
            Point::new(
                origin.x() + section.size.0 / 2.0,
                origin.y() + SECTION_TITLE_OFFSET,
            ),
        );

        let mut group = Group::new(section.id);
        group.push(self.panel(bounds, Some(title)));

        let first_pin = origin.add_point(Point::new(section.first_pin.0, section.first_pin.1));
        let start_x = first_pin.x();
        let start_y = first_pin.y();
        let row_step = if section.dense {
            pitch * self.config.dense_row_factor()
        } else {
            pitch
        };
        let label_style = self.text_style(section.label_size);

        for (index, row) in section.rows.iter().enumerate() {
            let y = start_y + index as f32 * row_step;

            let label_x = match section.kind {
                HeaderKind::Power => {
                    let spacing = self.config.power_pin_spacing();
                    for i in 1..=POWER_PINS_PER_ROW {
                        group.push(self.pin(
                            format!("{}-{}-{index}-{i}", section.id, row.function),
                            Point::new(start_x + (i - 1) as f32 * spacing, y),
                            row.role,
                        ));
                    }
                    start_x + (POWER_PINS_PER_ROW - 1) as f32 * spacing + POWER_LABEL_GAP
                }
                HeaderKind::Pair => {
                    for (column, x) in [("L", start_x), ("R", start_x + pitch)] {
                        group.push(self.pin(
                            format!("{}-{}-{column}", section.id, row.function),
                            Point::new(x, y),
                            row.role,
                        ));
                    }
                    start_x + PAIR_LABEL_OFFSET
                }
            };

            group.push(Text::new(label_style.clone(), row.label(), Point::new(label_x, y)));
        }

        group
    }

    fn components(&self) -> Group {
        let config = self.config;
        let width = config.width();
        let height = config.height();
        let column_x = width - COMPONENT_INSET;
        let column_center = column_x + COMPONENT_WIDTH / 2.0;

        let mut style = self.text_style(COMPONENT_TEXT_SIZE);
        style.set_font_family("Arial");
        style.set_anchor(TextAnchor::Middle);

        let mut group = Group::new("components");

        let usb = Bounds::new_from_top_left(
            Point::new(column_x, COMPONENT_TOP),
            Size::new(COMPONENT_WIDTH, COMPONENT_HEIGHT),
        );
        group.push(self.panel(usb, Some(Text::new(style.clone(), "USB", usb.center()))));

        // Sits to the right of the POWER header.
        let power_right = POWER.origin.0 + POWER.size.0;
        let dc_jack = Bounds::new_from_top_left(
            Point::new(power_right + config.dc_jack_gap(), COMPONENT_TOP),
            Size::new(DC_JACK_WIDTH, COMPONENT_HEIGHT),
        );
        group.push(self.panel(
            dc_jack,
            Some(Text::new(style.clone(), "DC Jack", dc_jack.center())),
        ));

        let edge_height = height * EDGE_CONNECTOR_RATIO;
        let edge = Bounds::new_from_top_left(
            Point::new(column_x, (height - edge_height) / 2.0),
            Size::new(COMPONENT_WIDTH, edge_height),
        );
        let edge_title = Text::new(
            style.clone(),
            "Edge Connector",
            Point::new(column_center, height / 2.0),
        )
        .with_orientation(Orientation::Rotated(90.0));
        group.push(self.panel(edge, Some(edge_title)));

        let type_a = Bounds::new_from_top_left(
            Point::new(column_x, height - COMPONENT_INSET),
            Size::new(COMPONENT_WIDTH, COMPONENT_HEIGHT),
        );
        group.push(self.panel(type_a, Some(Text::new(style, "Type-A", type_a.center()))));

        group
    }

    fn title(&self) -> Text {
        let x = self.config.width() - COMPONENT_INSET - BOARD_TITLE_GAP;
        let y = self.config.height() / 2.0;

        let mut style = self.text_style(BOARD_TITLE_SIZE);
        style.set_weight(FontWeight::Bold);
        style.set_anchor(TextAnchor::Middle);
        style.set_centered_baseline(false);

        Text::new(style, BOARD_TITLE, Point::new(x, y)).with_orientation(Orientation::Rotated(90.0))
    }
}

impl LayoutEngine for GpioEngine<'_> {
    fn calculate(&self) -> DiagramModel {
        let mut model = DiagramModel::new(BoardKind::GpioBoard, self.config.canvas_size());

        for region in self.board() {
            model.push(region);
        }
        for section in HEADER_SECTIONS {
            model.push(self.header(section));
        }
        model.push(self.components());
        model.push(self.title());

        model
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::model::Element;

    fn default_model() -> DiagramModel {
        GpioEngine::new(&GpioBoardConfig::default()).calculate()
    }

    fn group_holes<'a>(model: &'a DiagramModel, name: &str) -> Vec<&'a Hole> {
        model
            .group(name)
            .unwrap_or_else(|| panic!("missing group {name}"))
            .elements()
            .iter()
            .filter_map(Element::as_hole)
            .collect()
    }

    #[test]
    fn test_holes_lie_on_canvas() {
        let model = default_model();
        let canvas = Bounds::new_from_top_left(Point::default(), model.canvas());
        let extent = model.hole_extent().unwrap();

        assert!(canvas.contains(extent.min_point()));
        assert!(canvas.contains(Point::new(extent.max_x(), extent.max_y())));
    }

    fn group_labels(model: &DiagramModel, name: &str) -> Vec<String> {
        model
            .group(name)
            .unwrap()
            .elements()
            .iter()
            .filter_map(|element| match element {
                Element::Label(label) => Some(label.content().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_canvas_size() {
        let model = default_model();
        assert_approx_eq!(f32, model.canvas().width(), 450.0);
        assert_approx_eq!(f32, model.canvas().height(), 920.0);
    }

    #[test]
    fn test_group_order() {
        let model = default_model();
        let groups: Vec<String> = model
            .elements()
            .iter()
            .filter_map(|element| match element {
                Element::Group(group) => Some(group.id().to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(groups, ["power", "analog", "digital", "i2c", "components"]);
        assert!(matches!(model.elements().last(), Some(Element::Label(_))));
    }

    #[test]
    fn test_power_section_pins() {
        let model = default_model();
        let holes = group_holes(&model, "power");
        assert_eq!(holes.len(), 20);
        assert_eq!(group_labels(&model, "power"), ["GND", "GND", "3.3V", "5V", "VIN"]);

        let first = model.hole(Id::new("power-GND-0-1")).unwrap();
        assert_eq!(first.center(), Point::new(70.0, 110.0));
        assert_eq!(first.role(), HoleRole::GroundPin);

        let vin = model.hole(Id::new("power-VIN-4-4")).unwrap();
        assert_eq!(vin.center(), Point::new(106.0, 210.0));
        assert_eq!(vin.role(), HoleRole::SupplyPin);
    }

    #[test]
    fn test_power_labels_follow_last_pin() {
        let model = default_model();
        let label = model
            .labels()
            .into_iter()
            .find(|label| label.content() == "3.3V")
            .unwrap();
        assert_eq!(label.position(), Point::new(116.0, 160.0));
    }

    #[test]
    fn test_analog_pairs() {
        let model = default_model();
        assert_eq!(group_holes(&model, "analog").len(), 12);
        assert_eq!(
            model.hole(Id::new("analog-P0-L")).unwrap().center(),
            Point::new(80.0, 310.0)
        );
        assert_eq!(
            model.hole(Id::new("analog-P10-R")).unwrap().center(),
            Point::new(105.0, 435.0)
        );
        assert!(group_labels(&model, "analog").contains(&"P3 led col 1".to_string()));
    }

    #[test]
    fn test_digital_rows_are_dense() {
        let model = default_model();
        let lefts: Vec<f32> = group_holes(&model, "digital")
            .iter()
            .filter(|hole| hole.id().to_string().ends_with("-L"))
            .map(|hole| hole.center().y())
            .collect();

        assert_eq!(lefts.len(), 11);
        for pair in lefts.windows(2) {
            assert_approx_eq!(f32, pair[1] - pair[0], 20.0, epsilon = 0.001);
        }
        assert_approx_eq!(f32, lefts[0], 530.0);
    }

    #[test]
    fn test_i2c_roles() {
        let model = default_model();
        let role = |name: &str| model.hole(Id::new(name)).unwrap().role();
        assert_eq!(role("i2c-SDA-L"), HoleRole::SignalPin);
        assert_eq!(role("i2c-5V-R"), HoleRole::SignalPin);
        assert_eq!(role("power-5V-3-1"), HoleRole::SupplyPin);
        assert_eq!(role("i2c-GND-L"), HoleRole::GroundPin);
        assert_eq!(group_labels(&model, "i2c"), ["SDA", "SCL", "5V", "GND"]);
    }

    #[test]
    fn test_hole_ids_are_unique() {
        let model = default_model();
        let ids: HashSet<_> = model.holes().iter().map(|hole| hole.id()).collect();
        assert_eq!(ids.len(), model.hole_count());
        assert_eq!(model.hole_count(), 20 + 12 + 22 + 8);
    }

    #[test]
    fn test_components_have_no_holes() {
        let model = default_model();
        let components = model.group("components").unwrap();
        assert_eq!(components.elements().len(), 4);
        assert!(group_holes(&model, "components").is_empty());
    }

    #[test]
    fn test_component_geometry() {
        let model = default_model();
        let components = model.group("components").unwrap();
        let bounds: Vec<(String, Bounds)> = components
            .elements()
            .iter()
            .filter_map(|element| match element {
                Element::Section(section) => Some((
                    section.title().unwrap().content().to_string(),
                    section.body().bounds(),
                )),
                _ => None,
            })
            .collect();

        let find = |name: &str| bounds.iter().find(|(title, _)| title == name).unwrap().1;

        assert_eq!(find("USB").min_point(), Point::new(360.0, 30.0));
        assert_eq!(find("DC Jack").min_point(), Point::new(250.0, 30.0));
        assert_eq!(find("Type-A").min_point(), Point::new(360.0, 830.0));

        let edge = find("Edge Connector");
        assert_approx_eq!(f32, edge.min_y(), 92.0, epsilon = 0.001);
        assert_approx_eq!(f32, edge.height(), 736.0, epsilon = 0.001);
    }

    #[test]
    fn test_board_title() {
        let model = default_model();
        let Some(Element::Label(title)) = model.elements().last() else {
            panic!("board title must be the last element");
        };
        assert_eq!(title.content(), "micro:bit GPIO Extension Board");
        assert_eq!(title.position(), Point::new(340.0, 460.0));
        assert_eq!(title.orientation(), Orientation::Rotated(90.0));
        assert!(!title.definition().centered_baseline());
    }

    proptest! {
        #[test]
        fn prop_layout_is_deterministic(pitch in 10.0f32..40.0) {
            let config = GpioBoardConfig::default().with_pitch(pitch);

            let first = GpioEngine::new(&config).calculate();
            let second = GpioEngine::new(&config).calculate();
            prop_assert_eq!(&first, &second);

            let ids: HashSet<_> = first.holes().iter().map(|hole| hole.id()).collect();
            prop_assert_eq!(ids.len(), first.hole_count());
        }
    }
}
