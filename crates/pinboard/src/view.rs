//! View shell toggling between the two boards.
//!
//! Each board view owns its model, its [`Renderer`] and its last rendering.
//! Switching views tears down the outgoing one: its hover state is cleared and
//! its rendering dropped, so exporting right after a switch is a no-op until
//! the new view is drawn.

use log::{debug, info};

use crate::{
    PinboardError,
    config::AppConfig,
    export::{ExportedFile, Exporter, svg::Svg},
    layout,
    model::{BoardKind, DiagramModel, HoleId},
    render::{Renderer, RenderedDiagram},
};

const GPIO_SUBTITLE: &str = "Interactive Header Pin Layout";

#[derive(Debug)]
struct BoardView {
    model: DiagramModel,
    renderer: Renderer,
    rendered: Option<RenderedDiagram>,
}

impl BoardView {
    fn new(model: DiagramModel, renderer: Renderer) -> Self {
        Self {
            model,
            renderer,
            rendered: None,
        }
    }

    fn redraw(&mut self) -> &RenderedDiagram {
        self.rendered.insert(self.renderer.render(&self.model))
    }

    fn teardown(&mut self) {
        self.renderer.reset();
        self.rendered = None;
    }
}

/// Host-facing shell presenting one board at a time.
#[derive(Debug)]
pub struct ViewShell {
    current: BoardKind,
    subtitle: String,
    breadboard: BoardView,
    gpio: BoardView,
    exporter: Svg,
}

impl ViewShell {
    /// Lays out both boards and starts on the breadboard.
    ///
    /// # Errors
    ///
    /// Returns [`PinboardError::Config`] when the board parameters fail
    /// [`AppConfig::validate`].
    pub fn new(config: &AppConfig) -> Result<Self, PinboardError> {
        config.validate().map_err(PinboardError::Config)?;

        let palette = config.style().palette();
        let breadboard = config.breadboard();

        Ok(Self {
            current: BoardKind::Breadboard,
            subtitle: format!(
                "{} Rows • {} Power Segments • Standard Pitch",
                breadboard.main_rows(),
                breadboard.power_segments()
            ),
            breadboard: BoardView::new(
                layout::layout(BoardKind::Breadboard, config),
                Renderer::new(palette.clone()),
            ),
            gpio: BoardView::new(
                layout::layout(BoardKind::GpioBoard, config),
                Renderer::new(palette),
            ),
            exporter: Svg::new(),
        })
    }

    fn view(&self, kind: BoardKind) -> &BoardView {
        match kind {
            BoardKind::Breadboard => &self.breadboard,
            BoardKind::GpioBoard => &self.gpio,
        }
    }

    fn view_mut(&mut self, kind: BoardKind) -> &mut BoardView {
        match kind {
            BoardKind::Breadboard => &mut self.breadboard,
            BoardKind::GpioBoard => &mut self.gpio,
        }
    }

    /// Returns the board currently shown.
    pub fn current(&self) -> BoardKind {
        self.current
    }

    /// Shows the given board, tearing down the previous one.
    pub fn select(&mut self, kind: BoardKind) {
        if kind == self.current {
            return;
        }

        info!(from = self.current.name(), to = kind.name(); "Switching view");
        self.view_mut(self.current).teardown();
        self.current = kind;
    }

    /// Switches to the other board and returns it.
    pub fn toggle(&mut self) -> BoardKind {
        self.select(self.current.other());
        self.current
    }

    /// Returns the model of the current board.
    pub fn model(&self) -> &DiagramModel {
        &self.view(self.current).model
    }

    /// Draws the current board.
    pub fn render(&mut self) -> &RenderedDiagram {
        self.view_mut(self.current).redraw()
    }

    /// Returns the last drawing of the current board, if any.
    pub fn rendered(&self) -> Option<&RenderedDiagram> {
        self.view(self.current).rendered.as_ref()
    }

    /// Reports the pointer entering a hole of the current board.
    ///
    /// Identifiers the board does not contain are ignored and `false` is
    /// returned. A board already drawn is redrawn with the new highlight.
    pub fn pointer_enter(&mut self, id: HoleId) -> bool {
        let view = self.view_mut(self.current);
        if !view.model.contains_hole(id) {
            debug!(hole = id.to_string(); "Ignoring pointer on unknown hole");
            return false;
        }

        view.renderer.pointer_enter(id);
        if view.rendered.is_some() {
            view.redraw();
        }
        true
    }

    /// Reports the pointer leaving a hole of the current board.
    pub fn pointer_leave(&mut self, id: HoleId) {
        let view = self.view_mut(self.current);
        view.renderer.pointer_leave(id);
        if view.rendered.is_some() {
            view.redraw();
        }
    }

    /// Returns the hovered hole of the current board.
    pub fn hovered(&self) -> Option<HoleId> {
        self.view(self.current).renderer.hovered()
    }

    /// Returns the status line describing the hovered hole.
    pub fn status(&self) -> Option<String> {
        let hovered = self.hovered()?.to_string();
        let status = match self.current {
            BoardKind::Breadboard => format!(
                "Position: {}",
                hovered.replacen("main-", "", 1).replacen("pwr-", "Power ", 1)
            ),
            BoardKind::GpioBoard => format!("Pin: {hovered}"),
        };
        Some(status)
    }

    /// Exports the current board, or does nothing when it has not been drawn.
    pub fn export(&self) -> Option<ExportedFile> {
        self.exporter.export(self.rendered())
    }

    /// Returns the page title of the current board.
    pub fn title(&self) -> &'static str {
        self.current.title()
    }

    /// Returns the page subtitle of the current board.
    pub fn subtitle(&self) -> &str {
        match self.current {
            BoardKind::Breadboard => &self.subtitle,
            BoardKind::GpioBoard => GPIO_SUBTITLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{BreadboardConfig, GpioBoardConfig, StyleConfig},
        identifier::Id,
    };

    fn shell() -> ViewShell {
        ViewShell::new(&AppConfig::default()).unwrap()
    }

    #[test]
    fn test_starts_on_breadboard() {
        let shell = shell();
        assert_eq!(shell.current(), BoardKind::Breadboard);
        assert_eq!(shell.title(), "Precision Breadboard Layout");
        assert_eq!(
            shell.subtitle(),
            "65 Rows • 10 Power Segments • Standard Pitch"
        );
        assert!(shell.rendered().is_none());
    }

    #[test]
    fn test_toggle_switches_boards() {
        let mut shell = shell();
        assert_eq!(shell.toggle(), BoardKind::GpioBoard);
        assert_eq!(shell.title(), "Micro:bit GPIO Extension Board");
        assert_eq!(shell.subtitle(), "Interactive Header Pin Layout");
        assert_eq!(shell.model().kind(), BoardKind::GpioBoard);
        assert_eq!(shell.toggle(), BoardKind::Breadboard);
    }

    #[test]
    fn test_subtitle_follows_config() {
        let config = AppConfig::new(
            BreadboardConfig::default()
                .with_main_rows(30)
                .with_power_segments(4, 5),
            GpioBoardConfig::default(),
            StyleConfig::default(),
        );
        let shell = ViewShell::new(&config).unwrap();
        assert_eq!(shell.subtitle(), "30 Rows • 4 Power Segments • Standard Pitch");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AppConfig::new(
            BreadboardConfig::default().with_main_rows(0),
            GpioBoardConfig::default(),
            StyleConfig::default(),
        );
        let err = ViewShell::new(&config).unwrap_err();
        assert!(matches!(err, PinboardError::Config(msg) if msg.contains("main_rows")));
    }

    #[test]
    fn test_export_before_render_is_noop() {
        let shell = shell();
        assert!(shell.export().is_none());
    }

    #[test]
    fn test_render_then_export() {
        let mut shell = shell();
        shell.render();
        let file = shell.export().unwrap();
        assert_eq!(file.file_name(), "breadboard-layout.svg");
    }

    #[test]
    fn test_breadboard_status() {
        let mut shell = shell();
        assert_eq!(shell.status(), None);

        assert!(shell.pointer_enter(Id::new("main-12-g")));
        assert_eq!(shell.status().as_deref(), Some("Position: 12-g"));

        assert!(shell.pointer_enter(Id::new("pwr-left-neg-1-3")));
        assert_eq!(shell.status().as_deref(), Some("Position: Power left-neg-1-3"));

        shell.pointer_leave(Id::new("pwr-left-neg-1-3"));
        assert_eq!(shell.status(), None);
    }

    #[test]
    fn test_gpio_status() {
        let mut shell = shell();
        shell.select(BoardKind::GpioBoard);
        assert!(shell.pointer_enter(Id::new("analog-P3-R")));
        assert_eq!(shell.status().as_deref(), Some("Pin: analog-P3-R"));
    }

    #[test]
    fn test_unknown_hole_is_ignored() {
        let mut shell = shell();
        assert!(!shell.pointer_enter(Id::new("digital-P5-L")));
        assert_eq!(shell.hovered(), None);
    }

    #[test]
    fn test_hover_redraws_rendered_view() {
        let mut shell = shell();
        shell.render();
        let id = Id::new("main-20-b");

        shell.pointer_enter(id);
        let hole = shell.rendered().unwrap().hole(id).unwrap();
        assert_ne!(hole.fill(), hole.base_fill());

        shell.pointer_leave(id);
        let hole = shell.rendered().unwrap().hole(id).unwrap();
        assert_eq!(hole.fill(), hole.base_fill());
    }

    #[test]
    fn test_switching_tears_down_outgoing_view() {
        let mut shell = shell();
        shell.render();
        shell.pointer_enter(Id::new("main-1-a"));

        shell.toggle();
        assert!(shell.rendered().is_none());
        assert!(shell.export().is_none());

        shell.toggle();
        assert_eq!(shell.hovered(), None);
        assert!(shell.rendered().is_none());
    }

    #[test]
    fn test_switching_keeps_other_view_model() {
        let mut shell = shell();
        let before = shell.model().clone();
        shell.toggle();
        shell.toggle();
        assert_eq!(shell.model(), &before);
    }

    #[test]
    fn test_selecting_current_view_keeps_state() {
        let mut shell = shell();
        shell.render();
        shell.pointer_enter(Id::new("main-1-a"));

        shell.select(BoardKind::Breadboard);
        assert_eq!(shell.hovered(), Some(Id::new("main-1-a")));
        assert!(shell.rendered().is_some());
    }
}
