use super::*;

#[test]
fn initial_state_is_closed_and_hidden() {
    let controller = PreviewController::new();
    assert_eq!(controller.state(), &PreviewState::Closed);
    assert!(controller.overlay().aria_hidden);
    assert_eq!(controller.overlay().viewer_src, "");
    assert_eq!(controller.overlay().focus, None);
}

#[test]
fn open_points_viewer_and_download_at_file() {
    let mut controller = PreviewController::new();
    controller.open("pdfs/dbms_notes.pdf");

    assert_eq!(controller.state().file(), Some("pdfs/dbms_notes.pdf"));
    let overlay = controller.overlay();
    assert_eq!(overlay.viewer_src, "pdfs/dbms_notes.pdf");
    assert_eq!(overlay.download_href, "pdfs/dbms_notes.pdf");
    assert!(overlay.download_attr);
    assert!(!overlay.aria_hidden);
    assert_eq!(overlay.focus, Some(FocusTarget::CloseButton));
}

#[test]
fn close_clears_viewer_source_and_hides() {
    let mut controller = PreviewController::new();
    controller.open("a&b.pdf");
    controller.close();

    assert_eq!(controller.state(), &PreviewState::Closed);
    assert_eq!(controller.overlay().viewer_src, "");
    assert!(controller.overlay().aria_hidden);
    assert_eq!(controller.overlay().focus, None);
}

#[test]
fn open_while_open_replaces_file() {
    let mut controller = PreviewController::new();
    controller.open("a.pdf");
    controller.open("b.pdf");

    assert_eq!(controller.state().file(), Some("b.pdf"));
    assert_eq!(controller.overlay().viewer_src, "b.pdf");
}

#[test]
fn escape_closes_when_open() {
    let mut controller = PreviewController::new();
    controller.open("a.pdf");

    assert!(controller.handle_key(Key::Escape));
    assert!(!controller.state().is_open());
}

#[test]
fn escape_while_closed_is_noop() {
    let mut controller = PreviewController::new();
    assert!(!controller.handle_key(Key::Escape));
    assert_eq!(controller.state(), &PreviewState::Closed);
    assert_eq!(controller.overlay(), &Overlay::default());
}

#[test]
fn other_keys_do_not_close() {
    let mut controller = PreviewController::new();
    controller.open("a.pdf");

    assert!(!controller.handle_key(Key::Other));
    assert!(controller.state().is_open());
}
