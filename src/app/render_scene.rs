//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{deform_positions, DeformParams};
use crate::shared::RenderScene;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Stellt vorher sicher, dass das Gitter zu Auflösung und Höhenskalierung
/// passt. Ist die Kurve ungültig, bleibt die Szene ohne Verformung und Linie.
pub fn build(state: &mut AppState, viewport_size: [f32; 2]) -> RenderScene {
    state.mesh_cache.ensure(
        state.config.resolution(),
        state.config.height_scale(),
        state.options.mesh_height_segments,
    );
    let mesh = state.mesh_cache.mesh().cloned();

    let (deformed_positions, curve_polyline) = match state.config.curve() {
        Ok(curve) => {
            let deformed = mesh
                .as_ref()
                .map(|mesh| {
                    deform_positions(
                        &curve,
                        mesh.positions(),
                        &DeformParams::from_config(&state.config),
                    )
                })
                .unwrap_or_default();
            let polyline = curve.sample_points_normalized(state.options.curve_divisions);
            (deformed, polyline)
        }
        Err(e) => {
            log::error!("Kurve kann nicht gebaut werden: {}", e);
            (Vec::new(), Vec::new())
        }
    };

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        mesh,
        mesh_generation: state.mesh_cache.generation(),
        deformed_positions: Arc::new(deformed_positions),
        has_image: state.has_image(),
        curve_polyline,
        control_points: state.config.control_points().to_vec(),
        active_control_point: state.interaction.active_control_point(),
        options: state.options.clone(),
    }
}
