//! Feste orthografische 2D-Kamera für Viewport und Hit-Tests.

use glam::{Mat4, Vec2};

use super::Vector3;

/// Orthografische Kamera mit fester Sichthöhe, zentriert auf den Ursprung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Sichtbare Welthöhe (Halbausdehnung = `view_height / 2`)
    pub view_height: f32,
}

impl Camera2D {
    /// Standard-Sichthöhe in Welt-Einheiten.
    pub const DEFAULT_VIEW_HEIGHT: f32 = 4.0;
    /// Nahe Clip-Ebene der Projektion.
    pub const NEAR: f32 = -10.0;
    /// Ferne Clip-Ebene der Projektion.
    pub const FAR: f32 = 10.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            view_height: Self::DEFAULT_VIEW_HEIGHT,
        }
    }

    /// Sichtbare Weltbreite für ein Viewport-Seitenverhältnis.
    pub fn view_width(&self, screen_size: Vec2) -> f32 {
        let height = screen_size.y.max(1.0);
        self.view_height * (screen_size.x / height)
    }

    /// Orthografische Projektion für den aktuellen Viewport.
    pub fn projection(&self, screen_size: Vec2) -> Mat4 {
        let half_w = self.view_width(screen_size) / 2.0;
        let half_h = self.view_height / 2.0;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, Self::NEAR, Self::FAR)
    }

    /// Konvertiert Screen-Koordinaten (Pixel, y nach unten) zu Welt-Koordinaten (y nach oben).
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vector3 {
        let size = screen_size.max(Vec2::ONE);
        let ndc = (screen_pos / size) * 2.0 - Vec2::ONE;
        Vector3::new(
            ndc.x * self.view_width(size) / 2.0,
            -ndc.y * self.view_height / 2.0,
            0.0,
        )
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        self.view_height / viewport_height.max(1.0)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_screen_to_world_center() {
        let camera = Camera2D::new();
        let screen_size = Vec2::new(800.0, 600.0);
        let world = camera.screen_to_world(Vec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(world.x, 0.0);
        assert_relative_eq!(world.y, 0.0);
    }

    #[test]
    fn test_screen_to_world_top_left_corner() {
        let camera = Camera2D::new();
        let screen_size = Vec2::new(800.0, 400.0);
        let world = camera.screen_to_world(Vec2::ZERO, screen_size);
        // Breite = 4 · 2 = 8 → Halbbreite 4; Halbhöhe 2, y zeigt nach oben
        assert_relative_eq!(world.x, -4.0);
        assert_relative_eq!(world.y, 2.0);
    }

    #[test]
    fn test_projection_maps_view_corner_to_ndc() {
        let camera = Camera2D::new();
        let screen_size = Vec2::new(800.0, 400.0);
        let clip = camera.projection(screen_size) * glam::Vec4::new(4.0, 2.0, 0.0, 1.0);
        assert_relative_eq!(clip.x / clip.w, 1.0, epsilon = 1e-6);
        assert_relative_eq!(clip.y / clip.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_world_per_pixel() {
        let camera = Camera2D::new();
        assert_relative_eq!(camera.world_per_pixel(400.0), 0.01);
        // Null-Höhe darf nicht durch null teilen
        assert!(camera.world_per_pixel(0.0).is_finite());
    }
}
