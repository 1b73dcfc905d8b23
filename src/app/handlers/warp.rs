//! Handler für Warp-Parameter und Kontrollpunkte.

use crate::app::use_cases;
use crate::app::AppState;

pub fn set_resolution(state: &mut AppState, value: u32) {
    use_cases::warp::set_resolution(state, value);
}

pub fn set_warp_intensity(state: &mut AppState, value: f32) {
    use_cases::warp::set_warp_intensity(state, value);
}

pub fn set_height_scale(state: &mut AppState, value: f32) {
    use_cases::warp::set_height_scale(state, value);
}

pub fn set_path_offset(state: &mut AppState, value: f32) {
    use_cases::warp::set_path_offset(state, value);
}

pub fn set_image_length_ratio(state: &mut AppState, value: f32) {
    use_cases::warp::set_image_length_ratio(state, value);
}

/// Hängt einen Kontrollpunkt an.
pub fn append_control_point(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::warp::append_control_point(state)
}

/// Entfernt den letzten Kontrollpunkt; unter zwei Punkte wird abgelehnt.
pub fn remove_last_control_point(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::warp::remove_last_control_point(state)
}

/// Stellt die Startkurve wieder her.
pub fn reset_control_points(state: &mut AppState) {
    use_cases::warp::reset_control_points(state);
}
