use std::fs;

use tempfile::tempdir;

use pinboard::{
    BoardBuilder, PinboardError,
    config::AppConfig,
    export::{Exporter, svg::Svg},
    identifier::Id,
    model::BoardKind,
    view::ViewShell,
};

#[test]
fn export_writes_named_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let builder = BoardBuilder::default();

    for kind in BoardKind::ALL {
        let file = builder.export(kind);
        let path = file.write_to(temp_dir.path()).expect("Failed to write export");

        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("{}.svg", kind.export_stem())
        );
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, file.contents());
    }
}

#[test]
fn export_matches_unhovered_rendering() {
    let builder = BoardBuilder::new(AppConfig::default()).expect("Default config is valid");
    let model = builder.layout(BoardKind::GpioBoard);

    let mut renderer = builder.renderer();
    renderer.pointer_enter(Id::new("power-3.3V-2-2"));
    let hovered = renderer.render(&model);
    renderer.pointer_leave(Id::new("power-3.3V-2-2"));
    let idle = renderer.render(&model);

    let exporter = Svg::new();
    let from_hovered = exporter.export(Some(&hovered)).unwrap();
    let from_idle = exporter.export(Some(&idle)).unwrap();

    assert_eq!(from_hovered, from_idle);
    assert_ne!(hovered.to_svg_string(), idle.to_svg_string());
}

#[test]
fn view_shell_session() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let mut shell = ViewShell::new(&AppConfig::default()).expect("Default config is valid");

    assert!(shell.export().is_none());

    shell.render();
    assert!(shell.pointer_enter(Id::new("main-40-f")));
    assert_eq!(shell.status().as_deref(), Some("Position: 40-f"));

    let exported = shell.export().unwrap();
    assert!(!exported.contents().contains("data-hole-id"));

    shell.toggle();
    assert!(shell.export().is_none());
    shell.render();

    let path = shell.export().unwrap().write_to(temp_dir.path()).unwrap();
    assert!(path.ends_with("microbit-gpio-board.svg"));
    assert!(fs::read_to_string(path).unwrap().contains("micro:bit GPIO Extension Board"));
}

#[test]
fn live_rendering_differs_from_export_only_by_markers() {
    let builder = BoardBuilder::default();
    let live = builder.render_svg(BoardKind::Breadboard);
    let exported = builder.export(BoardKind::Breadboard);

    assert!(live.contains("data-hole-id"));
    assert!(!exported.contents().contains("data-hole-id"));
    assert!(live.len() > exported.contents().len());
}

#[test]
fn builder_rejects_boards_that_cannot_be_laid_out() {
    let cases = [
        ("[breadboard]\nmain_rows = 0\n", "main_rows"),
        ("[breadboard]\ncolumns_per_bank = 0\n", "columns_per_bank"),
        ("[breadboard]\ncolumns_per_bank = 14\n", "columns_per_bank"),
        ("[gpio]\npin_size = -2.0\n", "pin_size"),
    ];

    for (source, parameter) in cases {
        let config: AppConfig = toml::from_str(source).expect("Failed to parse config");
        match BoardBuilder::new(config) {
            Err(PinboardError::Config(msg)) => {
                assert!(msg.contains(parameter), "{parameter}: unexpected message {msg}")
            }
            other => panic!("{parameter}: expected a configuration error, got {other:?}"),
        }
    }
}
