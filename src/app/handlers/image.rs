//! Handler für das Laden des Quellbildes.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ImageSource, SourceImage};
use std::sync::Arc;

/// Öffnet den Bild-Dateidialog.
pub fn request_dialog(state: &mut AppState) {
    use_cases::source_image::request_image_dialog(state);
}

/// Startet das Laden im Hintergrund und propagiert Fehler beim Thread-Start.
pub fn load(state: &mut AppState, source: ImageSource) -> anyhow::Result<()> {
    use_cases::source_image::request_load(state, source)
}

/// Übernimmt ein fertig geladenes Bild.
pub fn apply_loaded(state: &mut AppState, image: Arc<SourceImage>) {
    use_cases::source_image::apply_loaded_image(state, image);
}

/// Zeigt einen Ladefehler an.
pub fn report_failure(state: &mut AppState, message: String) {
    use_cases::source_image::report_load_failure(state, message);
}
