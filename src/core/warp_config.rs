//! Anwendungsweite Warp-Konfiguration mit klemmenden Settern.
//!
//! Invariante: `path_offset ≥ 0` und `path_offset + image_length_ratio ≤ 1`
//! gilt nach jeder Mutation. Die Kontrollpunktliste hat immer mindestens zwei Punkte.

use std::path::PathBuf;

use thiserror::Error;

use super::{CatmullRomCurve, CurveError, Vector3};

/// Kleinste erlaubte Gitterauflösung.
pub const RESOLUTION_MIN: u32 = 2;
/// Größte erlaubte Gitterauflösung.
pub const RESOLUTION_MAX: u32 = 500;
/// Untergrenze für die Höhenskalierung.
pub const HEIGHT_SCALE_MIN: f32 = 0.01;
/// Untergrenze für den Längenanteil des Bildes.
pub const IMAGE_LENGTH_RATIO_MIN: f32 = 0.01;
/// Mindestanzahl Kontrollpunkte.
pub const MIN_CONTROL_POINTS: usize = 2;

/// Herkunft des geladenen Bildes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Lokale Bilddatei
    File(PathBuf),
    /// Entfernte Adresse (`http`, `https`) oder `file://`-URL
    Url(String),
}

impl ImageSource {
    /// Kurzname für Statuszeile und Logs.
    pub fn display_name(&self) -> String {
        match self {
            ImageSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            ImageSource::Url(url) => url.clone(),
        }
    }
}

/// Abgelehnte Änderungen an der Konfiguration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Mindestens 2 Kontrollpunkte erforderlich, übrig wären: {remaining}")]
    TooFewControlPoints { remaining: usize },
    #[error("Kontrollpunkt-Index {index} ungültig (Anzahl: {len})")]
    ControlPointIndexOutOfRange { index: usize, len: usize },
}

/// Warp-Parameter, Kontrollpunkte und Export-Zähler.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpConfig {
    image_source: Option<ImageSource>,
    resolution: u32,
    warp_intensity: f32,
    height_scale: f32,
    path_offset: f32,
    image_length_ratio: f32,
    control_points: Vec<Vector3>,
    save_trigger: u64,
}

impl WarpConfig {
    /// Standardwerte beim Programmstart.
    pub fn new() -> Self {
        Self {
            image_source: None,
            resolution: 50,
            warp_intensity: 1.0,
            height_scale: 1.0,
            path_offset: 0.0,
            image_length_ratio: 0.5,
            control_points: Self::default_control_points(),
            save_trigger: 0,
        }
    }

    /// Konfiguration mit eigenen Kontrollpunkten (mindestens zwei).
    pub fn with_control_points(points: Vec<Vector3>) -> Result<Self, ConfigError> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(ConfigError::TooFewControlPoints {
                remaining: points.len(),
            });
        }
        Ok(Self {
            control_points: points,
            ..Self::new()
        })
    }

    /// S-förmige Startkurve.
    pub fn default_control_points() -> Vec<Vector3> {
        vec![
            Vector3::new(-1.5, 0.5, 0.0),
            Vector3::new(-0.75, -0.5, 0.0),
            Vector3::new(0.75, 0.5, 0.0),
            Vector3::new(1.5, -0.5, 0.0),
        ]
    }

    // ── Lesen ───────────────────────────────────────────────────────

    pub fn image_source(&self) -> Option<&ImageSource> {
        self.image_source.as_ref()
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn warp_intensity(&self) -> f32 {
        self.warp_intensity
    }

    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    pub fn path_offset(&self) -> f32 {
        self.path_offset
    }

    pub fn image_length_ratio(&self) -> f32 {
        self.image_length_ratio
    }

    pub fn control_points(&self) -> &[Vector3] {
        &self.control_points
    }

    /// Monoton steigender Zähler; jede Erhöhung fordert einen Export an.
    pub fn save_trigger(&self) -> u64 {
        self.save_trigger
    }

    /// Größter erlaubter Pfad-Offset bei aktuellem Längenanteil.
    pub fn max_path_offset(&self) -> f32 {
        (1.0 - self.image_length_ratio).max(0.0)
    }

    /// Baut die Kurve aus einer Kopie der aktuellen Kontrollpunkte.
    pub fn curve(&self) -> Result<CatmullRomCurve, CurveError> {
        CatmullRomCurve::new(&self.control_points)
    }

    // ── Setter ──────────────────────────────────────────────────────

    /// Setzt eine neue Bildquelle und setzt den Export-Zähler zurück.
    pub fn set_image_source(&mut self, source: Option<ImageSource>) {
        self.image_source = source;
        self.save_trigger = 0;
    }

    pub fn set_resolution(&mut self, resolution: u32) {
        self.resolution = resolution.clamp(RESOLUTION_MIN, RESOLUTION_MAX);
    }

    pub fn set_warp_intensity(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("Ungültige Warp-Intensität ignoriert: {}", value);
            return;
        }
        self.warp_intensity = value.max(0.0);
    }

    pub fn set_height_scale(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("Ungültige Höhenskalierung ignoriert: {}", value);
            return;
        }
        self.height_scale = value.max(HEIGHT_SCALE_MIN);
    }

    /// Setzt den Pfad-Offset, geklemmt auf [0, 1 − Längenanteil].
    pub fn set_path_offset(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("Ungültiger Pfad-Offset ignoriert: {}", value);
            return;
        }
        self.path_offset = value.clamp(0.0, self.max_path_offset());
    }

    /// Setzt den Längenanteil und klemmt den Pfad-Offset nach.
    pub fn set_image_length_ratio(&mut self, value: f32) {
        if !value.is_finite() {
            log::warn!("Ungültiger Längenanteil ignoriert: {}", value);
            return;
        }
        self.image_length_ratio = value.clamp(IMAGE_LENGTH_RATIO_MIN, 1.0);
        self.path_offset = self.path_offset.min(self.max_path_offset());
    }

    /// Verschiebt einen Kontrollpunkt.
    pub fn update_control_point(
        &mut self,
        index: usize,
        position: Vector3,
    ) -> Result<(), ConfigError> {
        let len = self.control_points.len();
        let point = self
            .control_points
            .get_mut(index)
            .ok_or(ConfigError::ControlPointIndexOutOfRange { index, len })?;
        *point = position;
        Ok(())
    }

    /// Fügt einen Kontrollpunkt an `index` ein (`index == len` hängt an).
    pub fn insert_control_point(
        &mut self,
        index: usize,
        position: Vector3,
    ) -> Result<(), ConfigError> {
        let len = self.control_points.len();
        if index > len {
            return Err(ConfigError::ControlPointIndexOutOfRange { index, len });
        }
        self.control_points.insert(index, position);
        Ok(())
    }

    /// Entfernt einen Kontrollpunkt, sofern danach noch zwei übrig bleiben.
    pub fn remove_control_point(&mut self, index: usize) -> Result<Vector3, ConfigError> {
        let len = self.control_points.len();
        if index >= len {
            return Err(ConfigError::ControlPointIndexOutOfRange { index, len });
        }
        if len <= MIN_CONTROL_POINTS {
            return Err(ConfigError::TooFewControlPoints {
                remaining: len - 1,
            });
        }
        Ok(self.control_points.remove(index))
    }

    /// Ersetzt die Kontrollpunkte durch die Startkurve.
    pub fn reset_control_points(&mut self) {
        self.control_points = Self::default_control_points();
    }

    /// Fordert einen Export an (Zähler +1).
    pub fn trigger_save(&mut self) {
        self.save_trigger = self.save_trigger.saturating_add(1);
    }
}

impl Default for WarpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Flankengesteuerter Beobachter des Export-Zählers.
///
/// Meldet nur eine Erhöhung gegenüber dem zuletzt gesehenen Wert. Ein
/// Zurücksetzen des Zählers (neues Bild) wird still übernommen.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveTriggerWatch {
    last_seen: u64,
}

impl SaveTriggerWatch {
    /// `true`, wenn der Zähler seit dem letzten Aufruf gestiegen ist.
    pub fn poll(&mut self, current: u64) -> bool {
        let fired = current > self.last_seen;
        self.last_seen = current;
        fired
    }

    /// Vergisst den zuletzt gesehenen Wert.
    ///
    /// Muss zusammen mit jedem Zurücksetzen des Zählers aufgerufen werden,
    /// sonst geht ein Anstieg 0 → n verloren, der vor dem nächsten
    /// `poll` wieder den alten Wert erreicht.
    pub fn reset(&mut self) {
        self.last_seen = 0;
    }
}
