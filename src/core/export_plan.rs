//! Berechnung von Ausschnitt, Zielgröße und Projektion für den Bild-Export.

use glam::Mat4;
use thiserror::Error;

use super::{Bounds2D, Camera2D, Vector3};

/// Einstellungen für die Größenberechnung beim Export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSettings {
    /// Rand als Anteil der längeren Seite des Begrenzungsrechtecks
    pub padding_fraction: f32,
    /// Untergrenze für die längere Ausgabeseite in Pixeln
    pub min_long_side: u32,
    /// Obergrenze je Ausgabeseite in Pixeln
    pub max_dimension: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            padding_fraction: 0.05,
            min_long_side: 2048,
            max_dimension: 16384,
        }
    }
}

/// Fehler bei der Export-Planung.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportPlanError {
    #[error("Keine verformten Positionen vorhanden")]
    NoVertices,
    #[error("Verformtes Gitter hat keine Fläche ({width} x {height})")]
    DegenerateBounds { width: f32, height: f32 },
    #[error("Ausgabe {width}x{height} überschreitet das Limit von {max} Pixeln")]
    TargetTooLarge { width: u32, height: u32, max: u32 },
}

/// Ergebnis der Planung: was gerendert wird und wie groß.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportPlan {
    /// Begrenzungsrechteck inklusive Rand
    pub bounds: Bounds2D,
    pub width: u32,
    pub height: u32,
    /// Orthografische Projektion exakt auf `bounds`
    pub projection: Mat4,
}

impl ExportPlan {
    /// Plant den Export für die verformten Positionen und die Quellbildgröße.
    pub fn compute(
        deformed: &[Vector3],
        source_dimensions: (u32, u32),
        settings: &ExportSettings,
    ) -> Result<Self, ExportPlanError> {
        let raw = Bounds2D::from_points(deformed).ok_or(ExportPlanError::NoVertices)?;
        // Eine flache Linie bekommt erst durch den Rand eine Fläche
        let bounds = raw.padded(settings.padding_fraction);
        if bounds.is_degenerate() {
            return Err(ExportPlanError::DegenerateBounds {
                width: raw.width(),
                height: raw.height(),
            });
        }

        let (width, height) = output_size(bounds.aspect_ratio(), source_dimensions, settings);
        if width > settings.max_dimension || height > settings.max_dimension {
            return Err(ExportPlanError::TargetTooLarge {
                width,
                height,
                max: settings.max_dimension,
            });
        }

        let projection = Mat4::orthographic_rh(
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            Camera2D::NEAR,
            Camera2D::FAR,
        );

        log::debug!(
            "Export geplant: {}x{} px, Ausschnitt x[{:.3}, {:.3}] y[{:.3}, {:.3}]",
            width,
            height,
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y
        );

        Ok(Self {
            bounds,
            width,
            height,
            projection,
        })
    }
}

/// Ausgabegröße mit dem Seitenverhältnis `aspect` (Breite / Höhe).
///
/// Die längere Seite ist `max(Bildbreite, Bildhöhe, min_long_side)`, die
/// kürzere wird gerundet und ist mindestens 1 Pixel.
pub fn output_size(
    aspect: f32,
    source_dimensions: (u32, u32),
    settings: &ExportSettings,
) -> (u32, u32) {
    let (src_w, src_h) = source_dimensions;
    let long_side = src_w.max(src_h).max(settings.min_long_side).max(1);
    let long = long_side as f32;
    if aspect >= 1.0 {
        let height = (long / aspect).round().max(1.0) as u32;
        (long_side, height)
    } else {
        let width = (long * aspect).round().max(1.0) as u32;
        (width, long_side)
    }
}
