//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;
use anyhow::Context;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Zeigt eine blockierende Meldung an.
pub fn show_notice(state: &mut AppState, message: String) {
    log::warn!("{}", message);
    state.ui.notice = Some(message);
}

/// Schließt die blockierende Meldung.
pub fn dismiss_notice(state: &mut AppState) {
    state.ui.notice = None;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.view.camera.view_height = options.view_height;
    state.options = options;
    let path = EditorOptions::config_path();
    state
        .options
        .save_to_file(&path)
        .with_context(|| format!("Optionen nicht gespeichert: {}", path.display()))
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    state.view.camera.view_height = state.options.view_height;
    let path = EditorOptions::config_path();
    state
        .options
        .save_to_file(&path)
        .with_context(|| format!("Optionen nicht gespeichert: {}", path.display()))
}
