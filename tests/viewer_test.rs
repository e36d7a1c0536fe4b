//! Full sessions against a scripted terminal, starting from an image file.

use std::path::PathBuf;

use tui_imgview::core::{CoreError, Image};
use tui_imgview::engine::{fixed_geometry, run, Mode, ViewerSetup};
use tui_imgview::term::{ScriptEvent, ScriptedTerminal};
use tui_imgview::types::{Key, TerminalGeometry, ViewState};

fn write_test_png(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("tui-imgview-{}-{}.png", std::process::id(), name));
    let img = image::RgbImage::from_fn(64, 32, |x, y| image::Rgb([x as u8 * 4, y as u8 * 8, 200]));
    img.save(&path).unwrap();
    path
}

#[test]
fn loads_png_and_renders_static_frame() {
    let path = write_test_png("static");
    let image = Image::load(&path).unwrap();
    assert_eq!((image.width(), image.height()), (64, 32));

    let mut term = ScriptedTerminal::new(TerminalGeometry::new(32, 9));
    let state = run(&mut term, &image, &ViewerSetup::new(Mode::Static)).unwrap();
    // usable 32x8 -> 16 render rows; fit zoom = max(64/32, 32/16) = 2
    assert_eq!(state, ViewState::new(32, 16, 2.0));

    let frame = String::from_utf8(term.writes()[1].clone()).unwrap();
    assert_eq!(frame.matches('\n').count(), 8);
    assert_eq!(frame.matches('\u{2580}').count(), 8 * 32);

    std::fs::remove_file(path).ok();
}

#[test]
fn missing_file_is_a_load_error() {
    let err = Image::load("/no/such/dir/picture.png").unwrap_err();
    assert!(matches!(err, CoreError::ImageLoad { .. }));
}

#[test]
fn corrupt_file_is_a_load_error() {
    let path = std::env::temp_dir().join(format!("tui-imgview-{}-corrupt.png", std::process::id()));
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nnot really a png").unwrap();
    let err = Image::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::ImageLoad { .. }));
    std::fs::remove_file(path).ok();
}

#[test]
fn interactive_pan_and_zoom_session() {
    let path = write_test_png("interactive");
    let image = Image::load(&path).unwrap();

    let mut term = ScriptedTerminal::new(TerminalGeometry::new(32, 9))
        .with_chars("dddw")
        .with_keys([Key::Other])
        .with_chars("==-q");
    let mut setup = ViewerSetup::new(Mode::Interactive);
    setup.zoom = Some(3.0);

    let state = run(&mut term, &image, &setup).unwrap();
    assert_eq!(state, ViewState::new(35, 15, 2.0));
    assert!(!term.is_raw());
    // start, 9 frames, end
    assert_eq!(term.writes().len(), 11);

    std::fs::remove_file(path).ok();
}

#[test]
fn shrinking_terminal_mid_session() {
    let image = Image::solid(200, 100, tui_imgview::types::Rgb::new(0, 255, 0));
    let mut term = ScriptedTerminal::new(TerminalGeometry::new(80, 25))
        .with_event(ScriptEvent::Resize(TerminalGeometry::new(10, 3)))
        .with_chars("xq");
    run(&mut term, &image, &ViewerSetup::new(Mode::Interactive)).unwrap();

    let resized = String::from_utf8(term.writes()[2].clone()).unwrap();
    assert!(resized.starts_with("\x1b[2J"));
    assert_eq!(resized.matches("\r\n").count(), 2);
}

#[test]
fn pinned_geometry_ignores_terminal_size() {
    let image = Image::solid(10, 10, tui_imgview::types::Rgb::new(1, 2, 3));
    let mut term = ScriptedTerminal::new(TerminalGeometry::new(300, 90));
    let mut setup = ViewerSetup::new(Mode::Static);
    setup.overrides = fixed_geometry(TerminalGeometry::new(4, 3));
    run(&mut term, &image, &setup).unwrap();

    let frame = String::from_utf8(term.writes()[1].clone()).unwrap();
    assert_eq!(frame.matches('\n').count(), 2);
    assert_eq!(frame.matches('\u{2580}').count(), 8);
}
