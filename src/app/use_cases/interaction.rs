//! Use-Case-Funktionen für Zeiger-Interaktion im Viewport.
//!
//! Kontrollpunkte werden direkt gezogen, das Bildband verschiebt den
//! Pfad-Offset. Alle Positionen sind Weltkoordinaten.

use crate::app::state::{DragState, PathDrag};
use crate::app::AppState;
use crate::core::{hit_test, path_drag_offset, PointerHit, Vector3};
use anyhow::Result;

/// Führt den Hit-Test beim Drücken aus und startet ggf. einen Drag.
pub fn begin_drag(state: &mut AppState, world_pos: Vector3) -> Result<()> {
    let curve = state.config.curve()?;
    let params = state.options.hit_test_params();

    let hit = hit_test(
        &curve,
        world_pos,
        state.config.height_scale(),
        state.config.warp_intensity(),
        &params,
    );

    state.interaction.drag = match hit {
        PointerHit::ControlPoint { index, grab_offset } => {
            log::debug!("Drag Kontrollpunkt {} gestartet", index);
            DragState::ControlPoint { index, grab_offset }
        }
        PointerHit::PathBand { u, distance } => {
            log::debug!(
                "Band-Drag gestartet bei u = {:.3} (Abstand {:.3})",
                u,
                distance
            );
            let curve_length = curve.length();
            DragState::Path(PathDrag {
                start_point: world_pos,
                start_offset: state.config.path_offset(),
                start_u: u,
                curve,
                curve_length,
            })
        }
        PointerHit::Miss => DragState::Idle,
    };
    Ok(())
}

/// Wendet die aktuelle Zeigerposition auf den laufenden Drag an.
pub fn drag_to(state: &mut AppState, world_pos: Vector3) -> Result<()> {
    match &state.interaction.drag {
        DragState::Idle => {}
        DragState::ControlPoint { index, grab_offset } => {
            let index = *index;
            let target = world_pos + *grab_offset;
            if let Err(e) = state.config.update_control_point(index, target) {
                log::warn!("Kontrollpunkt-Drag ignoriert: {}", e);
                state.interaction.drag = DragState::Idle;
            }
        }
        DragState::Path(drag) => {
            let tangent = drag.curve.tangent_at_normalized(drag.start_u);
            let offset = path_drag_offset(
                drag.start_offset,
                drag.start_point,
                world_pos,
                tangent,
                drag.curve_length,
            );
            state.config.set_path_offset(offset);
        }
    }
    Ok(())
}

/// Beendet den laufenden Drag.
pub fn end_drag(state: &mut AppState) {
    if state.interaction.is_dragging() {
        log::debug!("Drag beendet");
    }
    state.interaction.drag = DragState::Idle;
}

/// Aktualisiert den Hover-Zustand für Cursor-Feedback.
pub fn update_hover(state: &mut AppState, world_pos: Vector3) -> Result<()> {
    let curve = state.config.curve()?;
    let params = state.options.hit_test_params();
    match hit_test(
        &curve,
        world_pos,
        state.config.height_scale(),
        state.config.warp_intensity(),
        &params,
    ) {
        PointerHit::ControlPoint { index, .. } => {
            state.interaction.hovered_point = Some(index);
            state.interaction.hovering_band = false;
        }
        PointerHit::PathBand { .. } => {
            state.interaction.hovered_point = None;
            state.interaction.hovering_band = true;
        }
        PointerHit::Miss => {
            state.interaction.hovered_point = None;
            state.interaction.hovering_band = false;
        }
    }
    Ok(())
}
