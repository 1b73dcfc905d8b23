//! Use-Case-Funktionen für das Laden des Quellbildes.

use crate::app::render_events::RenderEvent;
use crate::app::AppState;
use crate::core::{ImageSource, SourceImage};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Öffnet den Bild-Auswahl-Dialog.
pub fn request_image_dialog(state: &mut AppState) {
    state.ui.show_image_dialog = true;
}

/// Startet das Laden einer Bilddatei oder URL im Hintergrund.
///
/// Das aktuelle Bild bleibt sichtbar, bis das neue fertig dekodiert ist.
pub fn request_load(state: &mut AppState, source: ImageSource) -> Result<()> {
    let name = source.display_name();
    log::info!("Lade Bild: {}", name);
    state
        .image_loader
        .request(source.clone())
        .with_context(|| format!("Lade-Thread für '{}' konnte nicht starten", name))?;
    state.ui.status_message = Some(format!("Lade {} ...", name));
    state.ui.loading_source = Some(source);
    Ok(())
}

/// Übernimmt ein fertig geladenes Bild und meldet den Texturtausch an den Renderer.
pub fn apply_loaded_image(state: &mut AppState, image: Arc<SourceImage>) {
    let (width, height) = image.dimensions();
    log::info!(
        "Bild übernommen: {} ({}x{})",
        image.source().display_name(),
        width,
        height
    );

    // Neue Quelle setzt den Export-Zähler zurück, der Beobachter muss mit
    state.config.set_image_source(Some(image.source().clone()));
    state.export_watch.reset();
    state.image = Some(Arc::clone(&image));
    state.ui.loading_source = None;
    state.ui.status_message = Some(format!(
        "{} ({}x{})",
        image.source().display_name(),
        width,
        height
    ));
    state.push_render_event(RenderEvent::ImageChanged(image));
}

/// Meldet einen Ladefehler; ein zuvor geladenes Bild bleibt erhalten.
pub fn report_load_failure(state: &mut AppState, message: String) {
    log::error!("Bild konnte nicht geladen werden: {}", message);
    state.ui.loading_source = None;
    state.ui.status_message = Some(format!("Bild konnte nicht geladen werden: {}", message));
}
