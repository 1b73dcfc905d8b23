//! Zentrale Konfiguration für den Curve Warp Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{ExportSettings, HitTestParams};

// ── Viewport ────────────────────────────────────────────────────────

/// Sichtbare Welthöhe des Viewports.
pub const VIEW_HEIGHT: f32 = 4.0;
/// Hintergrundfarbe des Viewports (RGBA, dunkles Grau).
pub const VIEWPORT_CLEAR_COLOR: [f32; 4] = [0.11, 0.12, 0.13, 1.0];

// ── Gitter ──────────────────────────────────────────────────────────

/// Anzahl der Zeilen im Bildgitter.
pub const MESH_HEIGHT_SEGMENTS: u32 = 1;

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Radius um Kontrollpunkte in Welteinheiten.
pub const CONTROL_POINT_HIT_RADIUS: f32 = 0.1;
/// Faktor auf `height_scale · warp_intensity` für das Bildband.
pub const BAND_THRESHOLD_FACTOR: f32 = 1.2;
/// Fester Zuschlag auf die Bandbreite.
pub const BAND_THRESHOLD_SLACK: f32 = 0.1;
/// Segmente der groben Kurvenprojektion.
pub const BAND_SAMPLES: usize = 100;

// ── Overlays ────────────────────────────────────────────────────────

/// Segmente der Kurvenlinie.
pub const CURVE_DIVISIONS: usize = 100;
/// Linienstärke der Kurve in Welteinheiten.
pub const CURVE_THICKNESS_WORLD: f32 = 0.015;
/// Farbe der Kurvenlinie (RGBA: Weiß, halbtransparent).
pub const CURVE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
/// Radius der Kontrollpunkt-Marker in Welteinheiten.
pub const MARKER_RADIUS_WORLD: f32 = 0.05;
/// Segmente je Marker-Kreis.
pub const MARKER_SEGMENTS: u32 = 24;
/// Farbe der Kontrollpunkt-Marker (RGBA: Weiß).
pub const MARKER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
/// Farbe des gezogenen Kontrollpunkts (RGBA: Pink).
pub const MARKER_COLOR_ACTIVE: [f32; 4] = [1.0, 0.41, 0.7, 0.8];

// ── Export ──────────────────────────────────────────────────────────

/// Rand um das verformte Bild als Anteil der längeren Seite.
pub const EXPORT_PADDING_FRACTION: f32 = 0.05;
/// Mindestlänge der längeren Ausgabeseite in Pixeln.
pub const EXPORT_MIN_LONG_SIDE: u32 = 2048;
/// Obergrenze je Ausgabeseite in Pixeln.
pub const EXPORT_MAX_DIMENSION: u32 = 16384;
/// Vorgeschlagener Dateiname im Speichern-Dialog.
pub const EXPORT_DEFAULT_FILE_NAME: &str = "warped-image.png";

// ── Bildquelle ──────────────────────────────────────────────────────
/// Liefert bei jedem Abruf ein anderes Zufallsbild (1024x1024).
pub const RANDOM_IMAGE_URL: &str = "https://picsum.photos/1024/1024";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_warp_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Viewport ────────────────────────────────────────────────
    /// Sichtbare Welthöhe
    pub view_height: f32,
    /// Hintergrundfarbe (RGBA)
    pub viewport_clear_color: [f32; 4],

    // ── Gitter ──────────────────────────────────────────────────
    /// Zeilen im Bildgitter (1 = ein Streifen)
    #[serde(default = "default_mesh_height_segments")]
    pub mesh_height_segments: u32,

    // ── Hit-Tests ───────────────────────────────────────────────
    /// Radius um Kontrollpunkte (Welteinheiten)
    pub control_point_hit_radius: f32,
    /// Faktor für die Bandbreite
    pub band_threshold_factor: f32,
    /// Zuschlag für die Bandbreite
    pub band_threshold_slack: f32,
    /// Segmente der Kurvenprojektion
    pub band_samples: usize,

    // ── Overlays ────────────────────────────────────────────────
    /// Segmente der Kurvenlinie
    pub curve_divisions: usize,
    /// Linienstärke der Kurve (Welteinheiten)
    pub curve_thickness_world: f32,
    /// Farbe der Kurvenlinie
    pub curve_color: [f32; 4],
    /// Radius der Marker (Welteinheiten)
    pub marker_radius_world: f32,
    /// Segmente je Marker-Kreis
    pub marker_segments: u32,
    /// Farbe der Marker
    pub marker_color: [f32; 4],
    /// Farbe des gezogenen Markers
    pub marker_color_active: [f32; 4],

    // ── Export ──────────────────────────────────────────────────
    /// Rand als Anteil der längeren Seite
    pub export_padding_fraction: f32,
    /// Mindestlänge der längeren Ausgabeseite
    pub export_min_long_side: u32,
    /// Obergrenze je Ausgabeseite
    #[serde(default = "default_export_max_dimension")]
    pub export_max_dimension: u32,

    // ── Bildquelle ──────────────────────────────────────────────
    /// Adresse für "Load Random Image"
    #[serde(default = "default_random_image_url")]
    pub random_image_url: String,
    /// Zufallsbild laden, wenn beim Start kein Bild angegeben wurde
    #[serde(default = "default_load_random_image_on_start")]
    pub load_random_image_on_start: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            view_height: VIEW_HEIGHT,
            viewport_clear_color: VIEWPORT_CLEAR_COLOR,

            mesh_height_segments: MESH_HEIGHT_SEGMENTS,

            control_point_hit_radius: CONTROL_POINT_HIT_RADIUS,
            band_threshold_factor: BAND_THRESHOLD_FACTOR,
            band_threshold_slack: BAND_THRESHOLD_SLACK,
            band_samples: BAND_SAMPLES,

            curve_divisions: CURVE_DIVISIONS,
            curve_thickness_world: CURVE_THICKNESS_WORLD,
            curve_color: CURVE_COLOR,
            marker_radius_world: MARKER_RADIUS_WORLD,
            marker_segments: MARKER_SEGMENTS,
            marker_color: MARKER_COLOR,
            marker_color_active: MARKER_COLOR_ACTIVE,

            export_padding_fraction: EXPORT_PADDING_FRACTION,
            export_min_long_side: EXPORT_MIN_LONG_SIDE,
            export_max_dimension: EXPORT_MAX_DIMENSION,

            random_image_url: RANDOM_IMAGE_URL.to_string(),
            load_random_image_on_start: true,
        }
    }
}

/// Serde-Default für `mesh_height_segments` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_mesh_height_segments() -> u32 {
    MESH_HEIGHT_SEGMENTS
}

/// Serde-Default für `export_max_dimension` (Abwärtskompatibilität).
fn default_export_max_dimension() -> u32 {
    EXPORT_MAX_DIMENSION
}

fn default_random_image_url() -> String {
    RANDOM_IMAGE_URL.to_string()
}

fn default_load_random_image_on_start() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_warp_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_warp_editor.toml")
    }

    /// Schwellwerte für Zeiger-Tests.
    pub fn hit_test_params(&self) -> HitTestParams {
        HitTestParams {
            point_radius: self.control_point_hit_radius,
            band_factor: self.band_threshold_factor,
            band_slack: self.band_threshold_slack,
            band_samples: self.band_samples.max(1),
        }
    }

    /// Größenvorgaben für den Export.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            padding_fraction: self.export_padding_fraction.max(0.0),
            min_long_side: self.export_min_long_side.max(1),
            max_dimension: self.export_max_dimension.max(1),
        }
    }
}
