//! Handler für den PNG-Export.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Öffnet den Speichern-Dialog.
pub fn request_dialog(state: &mut AppState) {
    use_cases::export::request_export_dialog(state);
}

/// Merkt den Export vor (wird im nächsten Frame ausgeführt).
pub fn schedule(state: &mut AppState, path: PathBuf) {
    use_cases::export::schedule_export(state, path);
}

/// Zeigt das Ergebnis eines Exports an.
pub fn report(state: &mut AppState, message: String) {
    use_cases::export::report_result(state, message);
}
