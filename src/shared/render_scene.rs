//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Camera2D, PlaneMesh, Vector3};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Unverformtes Gitter (UVs + Indizes), `None` solange nichts erzeugt wurde
    pub mesh: Option<Arc<PlaneMesh>>,
    /// Generation des Gitters; ändert sich nur bei Neuaufbau
    pub mesh_generation: u64,
    /// Verformte Positionen, parallel zu `mesh.positions()`
    pub deformed_positions: Arc<Vec<Vector3>>,
    /// Ob ein Bild geladen ist (ohne Bild wird kein Gitter gezeichnet)
    pub has_image: bool,
    /// Kurvenlinie, gleichmäßig in der Bogenlänge abgetastet
    pub curve_polyline: Vec<Vector3>,
    /// Aktuelle Kontrollpunkte
    pub control_points: Vec<Vector3>,
    /// Index des gerade gezogenen Kontrollpunkts
    pub active_control_point: Option<usize>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob das Bildgitter gezeichnet werden kann.
    pub fn has_mesh(&self) -> bool {
        self.has_image
            && self
                .mesh
                .as_ref()
                .is_some_and(|mesh| mesh.vertex_count() == self.deformed_positions.len())
    }
}
