//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Übernimmt die Viewport-Größe; ungültige Maße (nicht endlich, negativ) werden verworfen.
///
/// Schrumpft der Viewport auf null (minimiertes Fenster), endet ein laufender Drag.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    let [width, height] = size;
    if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
        log::warn!("Ungültige Viewport-Größe ignoriert: {:?}", size);
        return;
    }
    if state.view.viewport_size != size {
        log::debug!("Viewport {:.0}x{:.0}", width, height);
    }
    state.view.viewport_size = size;

    if (width == 0.0 || height == 0.0) && state.interaction.is_dragging() {
        state.interaction = Default::default();
    }
}
