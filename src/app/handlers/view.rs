//! Handler für den Viewport (feste Kamera, nur Größe veränderlich).

use crate::app::use_cases;
use crate::app::AppState;

pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
