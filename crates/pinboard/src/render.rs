//! Hole-aware rendering of a [`DiagramModel`].
//!
//! The [`Renderer`] owns the hover [`InteractionState`] of one view. Pointer
//! events for every hole go through a single [`Renderer::dispatch`] keyed by
//! hole identifier, so no per-hole handler is ever built. Rendering produces
//! a [`RenderedDiagram`]: a tree of static drawables and hole nodes carrying
//! their resolved fill and the interaction markers a host uses to wire
//! pointer events back to the renderer.
//!
//! # Example
//!
//! ```
//! # use pinboard::config::AppConfig;
//! # use pinboard::identifier::Id;
//! # use pinboard::layout;
//! # use pinboard::model::BoardKind;
//! # use pinboard::render::{Palette, PointerEvent, Renderer};
//! let model = layout::layout(BoardKind::Breadboard, &AppConfig::default());
//! let mut renderer = Renderer::new(Palette::default());
//!
//! renderer.dispatch(PointerEvent::Enter(Id::new("main-1-a")));
//! let rendered = renderer.render(&model);
//! assert!(rendered.to_svg_string().contains("data-hole-id=\"main-1-a\""));
//! ```

use std::mem;

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use pinboard_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, SvgNode},
    geometry::Size,
    identifier::Id,
};

use crate::model::{BoardKind, DiagramModel, Element, Hole, HoleId, HoleRole, HoleShape};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const INTERACTIVE_CLASS: &str = "hole interactive";
const INTERACTIVE_STYLE: &str = "cursor: pointer";

/// Base and highlight colors of one hole role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleColors {
    base: Color,
    hover: Color,
}

impl HoleColors {
    pub fn new(base: Color, hover: Color) -> Self {
        Self { base, hover }
    }

    pub fn base(&self) -> Color {
        self.base
    }

    pub fn hover(&self) -> Color {
        self.hover
    }
}

/// Hole colors for every [`HoleRole`].
///
/// | Role | Base | Hover |
/// |------|------|-------|
/// | `MainGrid`, `PowerNegative`, `PowerPositive` | `#333` | `#3b82f6` |
/// | `SupplyPin` | `#6b7280` | `#ef4444` |
/// | `GroundPin`, `SignalPin` | `#6b7280` | `#10b981` |
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    main_grid: HoleColors,
    power_negative: HoleColors,
    power_positive: HoleColors,
    supply_pin: HoleColors,
    ground_pin: HoleColors,
    signal_pin: HoleColors,
}

impl Palette {
    pub fn new(
        main_grid: HoleColors,
        power_negative: HoleColors,
        power_positive: HoleColors,
        supply_pin: HoleColors,
        ground_pin: HoleColors,
        signal_pin: HoleColors,
    ) -> Self {
        Self {
            main_grid,
            power_negative,
            power_positive,
            supply_pin,
            ground_pin,
            signal_pin,
        }
    }

    /// Returns the colors of the given role.
    pub fn colors(&self, role: HoleRole) -> HoleColors {
        match role {
            HoleRole::MainGrid => self.main_grid,
            HoleRole::PowerNegative => self.power_negative,
            HoleRole::PowerPositive => self.power_positive,
            HoleRole::SupplyPin => self.supply_pin,
            HoleRole::GroundPin => self.ground_pin,
            HoleRole::SignalPin => self.signal_pin,
        }
    }

    pub fn main_grid(&self) -> HoleColors {
        self.main_grid
    }

    pub fn power_negative(&self) -> HoleColors {
        self.power_negative
    }

    pub fn power_positive(&self) -> HoleColors {
        self.power_positive
    }

    pub fn supply_pin(&self) -> HoleColors {
        self.supply_pin
    }

    pub fn ground_pin(&self) -> HoleColors {
        self.ground_pin
    }

    pub fn signal_pin(&self) -> HoleColors {
        self.signal_pin
    }
}

impl Default for Palette {
    fn default() -> Self {
        let breadboard = HoleColors::new(Color::from_literal("#333"), Color::from_literal("#3b82f6"));
        let pin_base = Color::from_literal("#6b7280");
        let signal = HoleColors::new(pin_base, Color::from_literal("#10b981"));

        Self {
            main_grid: breadboard,
            power_negative: breadboard,
            power_positive: breadboard,
            supply_pin: HoleColors::new(pin_base, Color::from_literal("#ef4444")),
            ground_pin: signal,
            signal_pin: signal,
        }
    }
}

/// The hovered hole of one view, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<HoleId>,
}

impl InteractionState {
    pub fn hovered(&self) -> Option<HoleId> {
        self.hovered
    }

    pub fn is_hovered(&self, id: HoleId) -> bool {
        self.hovered == Some(id)
    }
}

/// A pointer event on a hole, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(HoleId),
    Leave(HoleId),
}

/// Draws diagram models and tracks which hole is hovered.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
    state: InteractionState,
}

impl Renderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            state: InteractionState::default(),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Returns the hovered hole, if any.
    pub fn hovered(&self) -> Option<HoleId> {
        self.state.hovered()
    }

    /// Applies a pointer event to the interaction state.
    ///
    /// Entering a hole makes it the hovered one. Leaving always clears the
    /// state, whichever hole it names; the last event wins.
    pub fn dispatch(&mut self, event: PointerEvent) {
        debug!(event:?; "Pointer event");
        self.state.hovered = match event {
            PointerEvent::Enter(id) => Some(id),
            PointerEvent::Leave(_) => None,
        };
    }

    pub fn pointer_enter(&mut self, id: HoleId) {
        self.dispatch(PointerEvent::Enter(id));
    }

    pub fn pointer_leave(&mut self, id: HoleId) {
        self.dispatch(PointerEvent::Leave(id));
    }

    /// Clears the interaction state when the view is torn down.
    pub fn reset(&mut self) {
        self.state = InteractionState::default();
    }

    /// Resolves the current fill of a hole.
    pub fn fill_for(&self, hole: &Hole) -> Color {
        let colors = self.palette.colors(hole.role());
        if self.state.is_hovered(hole.id()) {
            colors.hover()
        } else {
            colors.base()
        }
    }

    /// Draws the model with the current interaction state.
    pub fn render(&self, model: &DiagramModel) -> RenderedDiagram {
        info!(board = model.kind().name(); "Rendering board");

        let nodes = self.render_elements(model.elements());
        let rendered = RenderedDiagram {
            kind: model.kind(),
            canvas: model.canvas(),
            nodes,
        };

        debug!(
            holes = rendered.holes().len(),
            hovered:? = self.hovered().map(|id| id.to_string());
            "Board rendered"
        );
        rendered
    }

    fn render_elements(&self, elements: &[Element]) -> Vec<RenderedNode> {
        elements
            .iter()
            .map(|element| match element {
                Element::Hole(hole) => RenderedNode::Hole(RenderedHole {
                    hole: hole.clone(),
                    fill: self.fill_for(hole),
                    base_fill: self.palette.colors(hole.role()).base(),
                    interactive: true,
                }),
                Element::Group(group) => RenderedNode::Group {
                    id: group.id(),
                    children: self.render_elements(group.elements()),
                },
                other => RenderedNode::Static(other.clone()),
            })
            .collect()
    }
}

/// A hole as drawn, with its resolved fill.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedHole {
    hole: Hole,
    fill: Color,
    base_fill: Color,
    interactive: bool,
}

/// Adds the interaction markers a host uses to route pointer events.
macro_rules! apply_interaction {
    ($element:expr, $hole:expr) => {{
        if $hole.interactive {
            $element
                .set("data-hole-id", $hole.hole.id().to_string())
                .set("class", INTERACTIVE_CLASS)
                .set("style", INTERACTIVE_STYLE)
        } else {
            $element
        }
    }};
}

impl RenderedHole {
    pub fn hole(&self) -> &Hole {
        &self.hole
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn base_fill(&self) -> Color {
        self.base_fill
    }

    /// Returns `true` while the hole carries interaction markers.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Drops interaction markers and hover coloring.
    fn strip_interaction(&mut self) {
        self.fill = self.base_fill;
        self.interactive = false;
    }

    fn to_svg(&self) -> SvgNode {
        let center = self.hole.center();
        match self.hole.shape() {
            HoleShape::Square {
                size,
                corner_radius,
            } => {
                let bounds = center.to_bounds(Size::square(*size));
                let mut rect = svg_element::Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", self.fill.to_string());
                if *corner_radius > 0.0 {
                    rect = rect.set("rx", *corner_radius);
                }
                Box::new(apply_interaction!(rect, self))
            }
            HoleShape::Round { diameter, outline } => {
                let circle = svg_element::Circle::new()
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", diameter / 2.0)
                    .set("fill", self.fill.to_string());
                let circle = pinboard_core::apply_stroke!(circle, outline);
                Box::new(apply_interaction!(circle, self))
            }
        }
    }
}

/// One node of a rendered diagram.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedNode {
    /// A decorative element, drawn as-is.
    Static(Element),
    Hole(RenderedHole),
    Group { id: Id, children: Vec<RenderedNode> },
}

/// The drawn form of a [`DiagramModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDiagram {
    kind: BoardKind,
    canvas: Size,
    nodes: Vec<RenderedNode>,
}

impl RenderedDiagram {
    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn nodes(&self) -> &[RenderedNode] {
        &self.nodes
    }

    /// Returns every rendered hole in document order.
    pub fn holes(&self) -> Vec<&RenderedHole> {
        fn visit<'a>(nodes: &'a [RenderedNode], holes: &mut Vec<&'a RenderedHole>) {
            for node in nodes {
                match node {
                    RenderedNode::Hole(hole) => holes.push(hole),
                    RenderedNode::Group { children, .. } => visit(children, holes),
                    RenderedNode::Static(_) => {}
                }
            }
        }

        let mut holes = Vec::new();
        visit(&self.nodes, &mut holes);
        holes
    }

    /// Finds a rendered hole by identifier.
    pub fn hole(&self, id: HoleId) -> Option<&RenderedHole> {
        self.holes().into_iter().find(|hole| hole.hole().id() == id)
    }

    /// Removes interaction markers and hover coloring from every hole.
    pub(crate) fn strip_interaction(&mut self) {
        fn visit(nodes: &mut [RenderedNode]) {
            for node in nodes {
                match node {
                    RenderedNode::Hole(hole) => hole.strip_interaction(),
                    RenderedNode::Group { children, .. } => visit(children),
                    RenderedNode::Static(_) => {}
                }
            }
        }

        visit(&mut self.nodes);
    }

    /// Builds the SVG document of this diagram.
    pub fn to_document(&self) -> Document {
        let width = self.canvas.width();
        let height = self.canvas.height();

        let mut doc = Document::new()
            .set("xmlns", SVG_NAMESPACE)
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        for node in render_nodes(&self.nodes) {
            doc = doc.add(node);
        }

        doc
    }

    /// Serializes the live, interactive diagram.
    pub fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }
}

/// Converts rendered nodes to SVG.
///
/// Siblings are collected into layers and flushed at every group boundary,
/// so z-order follows layers within a run of siblings while groups keep
/// their document position.
fn render_nodes(nodes: &[RenderedNode]) -> Vec<SvgNode> {
    let mut result = Vec::new();
    let mut pending = LayeredOutput::new();

    for node in nodes {
        match node {
            RenderedNode::Static(element) => {
                if let Some(drawable) = element.as_drawable() {
                    pending.merge(drawable.render_to_layers());
                }
            }
            RenderedNode::Hole(hole) => pending.add_to_layer(RenderLayer::Hole, hole.to_svg()),
            RenderedNode::Group { id, children } => {
                result.extend(mem::take(&mut pending).render());

                let mut group = svg_element::Group::new().set("id", id.to_string());
                for child in render_nodes(children) {
                    group = group.add(child);
                }
                result.push(Box::new(group) as SvgNode);
            }
        }
    }

    result.extend(pending.render());
    result
}
