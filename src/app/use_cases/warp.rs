//! Use-Case-Funktionen für Warp-Parameter und Kontrollpunkte.

use crate::app::AppState;
use crate::core::Vector3;
use anyhow::Result;

/// Abstand eines angehängten Punkts, falls die letzten beiden Punkte zusammenfallen.
const APPEND_FALLBACK_STEP: f32 = 0.5;

pub fn set_resolution(state: &mut AppState, value: u32) {
    state.config.set_resolution(value);
}

pub fn set_warp_intensity(state: &mut AppState, value: f32) {
    state.config.set_warp_intensity(value);
}

pub fn set_height_scale(state: &mut AppState, value: f32) {
    state.config.set_height_scale(value);
}

pub fn set_path_offset(state: &mut AppState, value: f32) {
    state.config.set_path_offset(value);
}

pub fn set_image_length_ratio(state: &mut AppState, value: f32) {
    state.config.set_image_length_ratio(value);
}

/// Hängt einen Punkt an, der das letzte Segment um die halbe Länge verlängert.
pub fn append_control_point(state: &mut AppState) -> Result<()> {
    let points = state.config.control_points();
    let last = points[points.len() - 1];
    let previous = points[points.len() - 2];
    let direction = last - previous;
    let next = if direction.length_squared() > f32::EPSILON {
        last + direction * 0.5
    } else {
        last + Vector3::new(APPEND_FALLBACK_STEP, 0.0, 0.0)
    };

    let index = points.len();
    state.config.insert_control_point(index, next)?;
    log::info!(
        "Kontrollpunkt {} angehängt bei ({:.3}, {:.3})",
        index,
        next.x,
        next.y
    );
    Ok(())
}

/// Entfernt den letzten Kontrollpunkt, sofern danach noch zwei übrig bleiben.
pub fn remove_last_control_point(state: &mut AppState) -> Result<()> {
    let index = state.config.control_points().len() - 1;
    state.config.remove_control_point(index)?;
    // Hover- und Drag-Index könnten auf den entfernten Punkt zeigen
    state.interaction = Default::default();
    log::info!("Kontrollpunkt {} entfernt", index);
    Ok(())
}

/// Stellt die Startkurve wieder her.
pub fn reset_control_points(state: &mut AppState) {
    state.config.reset_control_points();
    state.interaction = Default::default();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn append_extends_last_segment() {
        let mut state = AppState::new();

        append_control_point(&mut state).unwrap();

        let points = state.config.control_points();
        assert_eq!(points.len(), 5);
        // Letztes Segment (0.75, 0.5) → (1.5, -0.5), halbe Verlängerung
        assert_relative_eq!(points[4].x, 1.875);
        assert_relative_eq!(points[4].y, -1.0);
    }

    #[test]
    fn removal_stops_at_two_points() {
        let mut state = AppState::new();

        remove_last_control_point(&mut state).unwrap();
        remove_last_control_point(&mut state).unwrap();
        assert!(remove_last_control_point(&mut state).is_err());

        assert_eq!(state.config.control_points().len(), 2);
    }

    #[test]
    fn setters_keep_span_invariant() {
        let mut state = AppState::new();

        set_path_offset(&mut state, 0.9);
        set_image_length_ratio(&mut state, 0.7);

        assert!(state.config.path_offset() + state.config.image_length_ratio() <= 1.0 + 1e-6);
    }
}
