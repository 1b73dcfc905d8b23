use curve_warp_editor::app::NO_IMAGE_NOTICE;
use curve_warp_editor::{AppCommand, AppController, AppIntent, AppState};

mod controller_flow;

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_export_without_image_shows_notice_instead_of_dialog() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExportRequested)
        .expect("ExportRequested sollte ohne Fehler durchlaufen");

    assert!(!state.ui.show_export_dialog);
    assert_eq!(state.ui.notice.as_deref(), Some(NO_IMAGE_NOTICE));
    assert_eq!(state.config.save_trigger(), 0);

    controller
        .handle_intent(&mut state, AppIntent::NoticeDismissed)
        .expect("NoticeDismissed sollte ohne Fehler durchlaufen");
    assert!(state.ui.notice.is_none());
}

#[test]
fn test_open_image_requested_sets_dialog_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenImageRequested)
        .expect("OpenImageRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_image_dialog);
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::RequestImageDialog)
    ));
}

#[test]
fn test_options_dialog_open_and_close() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("OpenOptionsDialogRequested sollte funktionieren");
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("CloseOptionsDialogRequested sollte funktionieren");
    assert!(!state.show_options_dialog);
}

#[test]
fn test_viewport_resize_updates_view_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [800.0, 600.0],
            },
        )
        .expect("ViewportResized sollte funktionieren");

    assert_eq!(state.view.viewport_size, [800.0, 600.0]);
}

#[test]
fn test_pointer_release_without_drag_logs_nothing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte funktionieren");

    assert!(state.command_log.is_empty());
}
