//! Handler für Zeiger-Interaktion (Kontrollpunkte und Bildband).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Vector3;

/// Hit-Test beim Drücken; startet ggf. einen Drag.
pub fn begin_drag(state: &mut AppState, world_pos: Vector3) -> anyhow::Result<()> {
    use_cases::interaction::begin_drag(state, world_pos)
}

/// Aktualisiert den laufenden Drag.
pub fn drag_to(state: &mut AppState, world_pos: Vector3) -> anyhow::Result<()> {
    use_cases::interaction::drag_to(state, world_pos)
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::interaction::end_drag(state);
}

/// Aktualisiert das Hover-Feedback.
pub fn update_hover(state: &mut AppState, world_pos: Vector3) -> anyhow::Result<()> {
    use_cases::interaction::update_hover(state, world_pos)
}
