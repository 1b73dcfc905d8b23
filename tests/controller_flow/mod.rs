//! Gemeinsame Helfer für die Controller-Flow-Tests.

mod image_and_export;
mod interaction;

use curve_warp_editor::core::ImageSource;
use curve_warp_editor::{AppState, SourceImage};
use std::path::PathBuf;
use std::sync::Arc;

/// AppState mit einem einfarbigen 32x16-Bild.
pub fn state_with_image() -> AppState {
    let mut state = AppState::new();
    let pixels = image::RgbaImage::from_pixel(32, 16, image::Rgba([200, 40, 40, 255]));
    state.image = Some(Arc::new(SourceImage::from_rgba(
        ImageSource::File(PathBuf::from("rot.png")),
        pixels,
    )));
    state.view.viewport_size = [1280.0, 720.0];
    state
}

/// Schreibt ein Test-PNG ins Temp-Verzeichnis.
pub fn write_temp_png(name: &str, width: u32, height: u32) -> PathBuf {
    let dir = std::env::temp_dir().join("curve_warp_editor_flow_tests");
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis sollte anlegbar sein");
    let path = dir.join(name);
    image::RgbaImage::from_pixel(width, height, image::Rgba([10, 200, 30, 255]))
        .save(&path)
        .expect("Test-PNG sollte schreibbar sein");
    path
}
