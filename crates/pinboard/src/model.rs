//! Diagram model shared by the layout engines, the renderer and the exporter.
//!
//! A [`DiagramModel`] is an ordered tree of [`Element`]s. Only [`Hole`]s carry
//! an identifier; every other element is decorative and never takes part in
//! hover interaction.

use std::{collections::HashSet, fmt, str::FromStr};

use pinboard_core::{
    draw::{Drawable, LayeredOutput, Line, Rectangle, StrokeDefinition, Text},
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

/// Stable identifier of a hole or header pin.
pub type HoleId = Id;

/// A positioned, non-interactive text label.
pub type Label = Text;

/// A plain rectangle such as a board background or outline.
pub type Region = Rectangle;

/// A straight decorative line such as a power-rail polarity stripe.
pub type Stripe = Line;

/// The two boards Pinboard can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardKind {
    Breadboard,
    GpioBoard,
}

impl BoardKind {
    /// Every board, in toggle order.
    pub const ALL: [BoardKind; 2] = [BoardKind::Breadboard, BoardKind::GpioBoard];

    /// Returns the view name of this board.
    pub fn name(self) -> &'static str {
        match self {
            Self::Breadboard => "breadboard",
            Self::GpioBoard => "gpio-board",
        }
    }

    /// Returns the file stem used when exporting this board.
    pub fn export_stem(self) -> &'static str {
        match self {
            Self::Breadboard => "breadboard-layout",
            Self::GpioBoard => "microbit-gpio-board",
        }
    }

    /// Returns the page title shown above this board.
    pub fn title(self) -> &'static str {
        match self {
            Self::Breadboard => "Precision Breadboard Layout",
            Self::GpioBoard => "Micro:bit GPIO Extension Board",
        }
    }

    /// Returns the other board.
    pub fn other(self) -> Self {
        match self {
            Self::Breadboard => Self::GpioBoard,
            Self::GpioBoard => Self::Breadboard,
        }
    }
}

impl fmt::Display for BoardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BoardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breadboard" => Ok(Self::Breadboard),
            "gpio-board" | "gpio" => Ok(Self::GpioBoard),
            other => Err(format!(
                "unknown board `{other}`, expected `breadboard` or `gpio-board`"
            )),
        }
    }
}

/// What a hole is for. The renderer picks hole colors by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoleRole {
    PowerNegative,
    PowerPositive,
    MainGrid,
    /// 3.3V, 5V and VIN pins of the POWER header.
    SupplyPin,
    GroundPin,
    SignalPin,
}

/// Geometry of a hole around its centre.
#[derive(Debug, Clone, PartialEq)]
pub enum HoleShape {
    /// Breadboard hole.
    Square { size: f32, corner_radius: f32 },
    /// Header pin with an outline.
    Round {
        diameter: f32,
        outline: StrokeDefinition,
    },
}

/// A single interactive hole or header pin.
#[derive(Debug, Clone, PartialEq)]
pub struct Hole {
    id: HoleId,
    center: Point,
    role: HoleRole,
    shape: HoleShape,
}

impl Hole {
    pub fn new(id: HoleId, center: Point, role: HoleRole, shape: HoleShape) -> Self {
        Self {
            id,
            center,
            role,
            shape,
        }
    }

    pub fn id(&self) -> HoleId {
        self.id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn role(&self) -> HoleRole {
        self.role
    }

    pub fn shape(&self) -> &HoleShape {
        &self.shape
    }
}

/// A titled, decorative panel: a header background or a board component.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    body: Region,
    title: Option<Label>,
}

impl Section {
    pub fn new(body: Region, title: Option<Label>) -> Self {
        Self { body, title }
    }

    pub fn body(&self) -> &Region {
        &self.body
    }

    pub fn title(&self) -> Option<&Label> {
        self.title.as_ref()
    }
}

impl Drawable for Section {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = self.body.render_to_layers();
        if let Some(title) = &self.title {
            output.merge(title.render_to_layers());
        }
        output
    }
}

/// A named, ordered list of elements, serialized as `<g id="...">`.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: Id,
    elements: Vec<Element>,
}

impl Group {
    pub fn new(id: &str) -> Self {
        Self {
            id: Id::new(id),
            elements: Vec::new(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }
}

/// One node of the diagram tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Region(Region),
    Stripe(Stripe),
    Section(Section),
    Label(Label),
    Hole(Hole),
    Group(Group),
}

impl Element {
    /// Returns the element as a plain drawable, or `None` for holes and groups.
    pub fn as_drawable(&self) -> Option<&dyn Drawable> {
        match self {
            Self::Region(region) => Some(region),
            Self::Stripe(stripe) => Some(stripe),
            Self::Section(section) => Some(section),
            Self::Label(label) => Some(label),
            Self::Hole(_) | Self::Group(_) => None,
        }
    }

    pub fn as_hole(&self) -> Option<&Hole> {
        match self {
            Self::Hole(hole) => Some(hole),
            _ => None,
        }
    }
}

impl From<Rectangle> for Element {
    fn from(region: Rectangle) -> Self {
        Self::Region(region)
    }
}

impl From<Line> for Element {
    fn from(stripe: Line) -> Self {
        Self::Stripe(stripe)
    }
}

impl From<Section> for Element {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}

impl From<Text> for Element {
    fn from(label: Text) -> Self {
        Self::Label(label)
    }
}

impl From<Hole> for Element {
    fn from(hole: Hole) -> Self {
        Self::Hole(hole)
    }
}

impl From<Group> for Element {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

/// A fully laid out board.
///
/// Hole identifiers are indexed as elements are pushed, so membership checks
/// on pointer events do not walk the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramModel {
    kind: BoardKind,
    canvas: Size,
    elements: Vec<Element>,
    hole_ids: HashSet<HoleId>,
}

impl DiagramModel {
    pub fn new(kind: BoardKind, canvas: Size) -> Self {
        Self {
            kind,
            canvas,
            elements: Vec::new(),
            hole_ids: HashSet::new(),
        }
    }

    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        let element = element.into();
        let hole_ids = &mut self.hole_ids;
        collect(std::slice::from_ref(&element), &mut |element| {
            if let Element::Hole(hole) = element {
                hole_ids.insert(hole.id());
            }
        });
        self.elements.push(element);
    }

    /// Returns every hole in document order (depth first).
    pub fn holes(&self) -> Vec<&Hole> {
        let mut holes = Vec::new();
        collect(&self.elements, &mut |element| {
            if let Element::Hole(hole) = element {
                holes.push(hole);
            }
        });
        holes
    }

    /// Returns every label in document order, including section titles.
    pub fn labels(&self) -> Vec<&Label> {
        let mut labels = Vec::new();
        collect(&self.elements, &mut |element| match element {
            Element::Label(label) => labels.push(label),
            Element::Section(section) => labels.extend(section.title()),
            _ => {}
        });
        labels
    }

    /// Finds a hole by identifier.
    pub fn hole(&self, id: HoleId) -> Option<&Hole> {
        if !self.contains_hole(id) {
            return None;
        }
        self.holes().into_iter().find(|hole| hole.id() == id)
    }

    pub fn contains_hole(&self, id: HoleId) -> bool {
        self.hole_ids.contains(&id)
    }

    pub fn hole_count(&self) -> usize {
        self.holes().len()
    }

    /// Returns the smallest bounds containing every hole centre, or `None`
    /// for a model without holes.
    pub fn hole_extent(&self) -> Option<Bounds> {
        self.holes()
            .iter()
            .map(|hole| hole.center().to_bounds(Size::default()))
            .reduce(|extent, bounds| extent.merge(&bounds))
    }

    /// Finds a top-level or nested group by name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        let mut found = None;
        collect(&self.elements, &mut |element| {
            if let Element::Group(group) = element {
                if found.is_none() && group.id() == name {
                    found = Some(group);
                }
            }
        });
        found
    }
}

/// Visits `elements` and their descendants in document order.
fn collect<'a>(elements: &'a [Element], visit: &mut impl FnMut(&'a Element)) {
    for element in elements {
        visit(element);
        if let Element::Group(group) = element {
            collect(group.elements(), visit);
        }
    }
}
