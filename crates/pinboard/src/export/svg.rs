use log::{debug, info};

use crate::{
    export::{ExportedFile, Exporter},
    render::RenderedDiagram,
};

/// MIME type of exported documents.
pub const SVG_MIME_TYPE: &str = "image/svg+xml;charset=utf-8";

/// Exports rendered boards as static SVG documents.
///
/// The rendered tree is copied and every hole loses its interaction markers
/// and hover fill before serialization, so an export always shows the board
/// at rest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Svg;

impl Svg {
    pub fn new() -> Self {
        Self
    }

    /// Exports a rendered diagram.
    pub fn export_rendered(&self, rendered: &RenderedDiagram) -> ExportedFile {
        let mut snapshot = rendered.clone();
        snapshot.strip_interaction();

        let contents = snapshot.to_svg_string();
        let file_name = format!("{}.svg", rendered.kind().export_stem());

        info!(file_name = file_name.as_str(), bytes = contents.len(); "SVG document exported");
        ExportedFile::new(file_name, SVG_MIME_TYPE, contents)
    }
}

impl Exporter for Svg {
    fn export(&self, rendered: Option<&RenderedDiagram>) -> Option<ExportedFile> {
        let Some(rendered) = rendered else {
            debug!("Nothing rendered yet, skipping export");
            return None;
        };
        Some(self.export_rendered(rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        identifier::Id,
        layout,
        model::BoardKind,
        render::Renderer,
    };

    fn rendered(kind: BoardKind, hovered: Option<&str>) -> RenderedDiagram {
        let model = layout::layout(kind, &AppConfig::default());
        let mut renderer = Renderer::default();
        if let Some(name) = hovered {
            renderer.pointer_enter(Id::new(name));
        }
        renderer.render(&model)
    }

    #[test]
    fn test_export_without_rendering_is_noop() {
        assert!(Svg::new().export(None).is_none());
    }

    #[test]
    fn test_file_names_and_mime() {
        let exporter = Svg::new();

        let breadboard = exporter.export_rendered(&rendered(BoardKind::Breadboard, None));
        assert_eq!(breadboard.file_name(), "breadboard-layout.svg");
        assert_eq!(breadboard.mime_type(), "image/svg+xml;charset=utf-8");

        let gpio = exporter.export_rendered(&rendered(BoardKind::GpioBoard, None));
        assert_eq!(gpio.file_name(), "microbit-gpio-board.svg");
    }

    #[test]
    fn test_export_is_idempotent() {
        let diagram = rendered(BoardKind::GpioBoard, None);
        let first = Svg::new().export(Some(&diagram)).unwrap();
        let second = Svg::new().export(Some(&diagram)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_export_ignores_hover() {
        let idle = Svg::new().export_rendered(&rendered(BoardKind::Breadboard, None));
        let hovered =
            Svg::new().export_rendered(&rendered(BoardKind::Breadboard, Some("main-33-h")));
        assert_eq!(idle.contents(), hovered.contents());
    }

    #[test]
    fn test_export_has_no_interaction_markers() {
        let file = Svg::new().export_rendered(&rendered(BoardKind::GpioBoard, Some("power-VIN-4-1")));
        let contents = file.contents();

        assert!(contents.starts_with("<svg"));
        assert!(contents.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(!contents.contains("data-hole-id"));
        assert!(!contents.contains("interactive"));
        assert!(!contents.contains("cursor"));
    }

    #[test]
    fn test_export_leaves_live_diagram_untouched() {
        let diagram = rendered(BoardKind::Breadboard, Some("main-1-a"));
        let before = diagram.clone();

        Svg::new().export_rendered(&diagram);

        assert_eq!(diagram, before);
        assert!(diagram.to_svg_string().contains("data-hole-id"));
    }
}
