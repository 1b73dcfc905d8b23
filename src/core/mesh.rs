//! Flaches Gitter (Plane), auf das das Bild gelegt wird.
//!
//! Breite 2 (x ∈ [−1, 1]), Höhe `2 · height_scale`. Positionen bleiben
//! unverformt; die Verformung erzeugt pro Frame eine eigene Positionsliste.

use super::Vector3;

/// Unverformtes Gitter mit UVs und Dreiecksindizes.
#[derive(Debug, Clone)]
pub struct PlaneMesh {
    width_segments: u32,
    height_segments: u32,
    height_scale: f32,
    positions: Vec<Vector3>,
    uvs: Vec<[f32; 2]>,
    indices: Vec<u32>,
}

impl PlaneMesh {
    /// Erzeugt ein Gitter mit `resolution` Spalten und `height_segments` Zeilen.
    ///
    /// Beide Segmentzahlen werden auf mindestens 1 angehoben.
    pub fn new(resolution: u32, height_scale: f32, height_segments: u32) -> Self {
        let width_segments = resolution.max(1);
        let height_segments = height_segments.max(1);
        let columns = width_segments + 1;
        let rows = height_segments + 1;
        let vertex_count = (columns * rows) as usize;

        let mut positions = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);

        // Zeile 0 ist die Oberkante (y = +height_scale, v = 0)
        for iy in 0..rows {
            let v = iy as f32 / height_segments as f32;
            let y = (0.5 - v) * 2.0 * height_scale;
            for ix in 0..columns {
                let u = ix as f32 / width_segments as f32;
                let x = (u - 0.5) * 2.0;
                positions.push(Vector3::new(x, y, 0.0));
                uvs.push([u, v]);
            }
        }

        let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);
        for iy in 0..height_segments {
            for ix in 0..width_segments {
                let a = ix + columns * iy;
                let b = ix + columns * (iy + 1);
                let c = (ix + 1) + columns * (iy + 1);
                let d = (ix + 1) + columns * iy;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            width_segments,
            height_segments,
            height_scale,
            positions,
            uvs,
            indices,
        }
    }

    pub fn width_segments(&self) -> u32 {
        self.width_segments
    }

    pub fn height_segments(&self) -> u32 {
        self.height_segments
    }

    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    /// Unverformte Positionen (Zeilen von oben nach unten).
    pub fn positions(&self) -> &[Vector3] {
        &self.positions
    }

    pub fn uvs(&self) -> &[[f32; 2]] {
        &self.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
