//! Cache für das unverformte Bildgitter.
//!
//! Neu erzeugt wird nur, wenn sich Auflösung, Höhenskalierung oder
//! Zeilenanzahl gegenüber dem letzten Aufbau unterscheiden.

use crate::core::PlaneMesh;
use std::sync::Arc;

/// Parameter, aus denen das Gitter zuletzt gebaut wurde.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MeshKey {
    resolution: u32,
    height_scale: f32,
    height_segments: u32,
}

/// Hält das aktuelle Gitter und zählt Neuaufbauten.
#[derive(Debug, Default)]
pub struct MeshCache {
    mesh: Option<Arc<PlaneMesh>>,
    last_key: Option<MeshKey>,
    generation: u64,
}

impl MeshCache {
    /// Erstellt einen leeren Cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stellt sicher, dass das Gitter zu den Parametern passt.
    ///
    /// Gibt `true` zurück, wenn neu aufgebaut wurde.
    pub fn ensure(&mut self, resolution: u32, height_scale: f32, height_segments: u32) -> bool {
        let key = MeshKey {
            resolution,
            height_scale,
            height_segments,
        };
        if self.mesh.is_some() && self.last_key == Some(key) {
            return false;
        }

        self.mesh = Some(Arc::new(PlaneMesh::new(
            resolution,
            height_scale,
            height_segments,
        )));
        self.last_key = Some(key);
        self.generation += 1;
        log::debug!(
            "Bildgitter neu aufgebaut: {} x {} Segmente, Höhe {:.3} (Generation {})",
            resolution,
            height_segments,
            height_scale,
            self.generation
        );
        true
    }

    /// Aktuelles Gitter, falls schon gebaut.
    pub fn mesh(&self) -> Option<&Arc<PlaneMesh>> {
        self.mesh.as_ref()
    }

    /// Anzahl bisheriger Neuaufbauten.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
