//! Verformung des flachen Gitters entlang der Kurve.
//!
//! Reine Funktionen ohne versteckten Zustand: dieselbe Eingabe liefert
//! immer dieselben Positionen, auf dem Bildschirm wie beim Export.

use super::{in_plane_normal, CatmullRomCurve, Vector3, WarpConfig};

/// Momentaufnahme der Parameter, die die Verformung beeinflussen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeformParams {
    /// Multiplikator für den seitlichen Versatz
    pub warp_intensity: f32,
    /// Startposition des Bildes auf der Kurve (normiert)
    pub path_offset: f32,
    /// Anteil der Kurvenlänge, den das Bild belegt
    pub image_length_ratio: f32,
}

impl DeformParams {
    /// Liest die Parameter aus der aktuellen Konfiguration.
    pub fn from_config(config: &WarpConfig) -> Self {
        Self {
            warp_intensity: config.warp_intensity(),
            path_offset: config.path_offset(),
            image_length_ratio: config.image_length_ratio(),
        }
    }
}

/// Kurvenparameter für eine Gitter-x-Koordinate, immer in [0, 1].
pub fn path_parameter(x: f32, params: &DeformParams) -> f32 {
    let u_plane = (x + 1.0) / 2.0;
    (params.path_offset + u_plane * params.image_length_ratio).clamp(0.0, 1.0)
}

/// Verformte Position eines einzelnen Gitterpunkts.
pub fn deform_vertex(curve: &CatmullRomCurve, position: Vector3, params: &DeformParams) -> Vector3 {
    let t = path_parameter(position.x, params);
    let point_on_path = curve.point_at_normalized(t);
    let normal = in_plane_normal(curve.tangent_at_normalized(t));
    point_on_path + normal * (position.y * params.warp_intensity)
}

/// Schreibt die verformten Positionen in `out` (Puffer wird wiederverwendet).
pub fn deform_positions_into(
    curve: &CatmullRomCurve,
    original: &[Vector3],
    params: &DeformParams,
    out: &mut Vec<Vector3>,
) {
    out.clear();
    out.reserve(original.len());
    out.extend(
        original
            .iter()
            .map(|position| deform_vertex(curve, *position, params)),
    );
}

/// Verformte Positionen als neue Liste.
pub fn deform_positions(
    curve: &CatmullRomCurve,
    original: &[Vector3],
    params: &DeformParams,
) -> Vec<Vector3> {
    let mut out = Vec::with_capacity(original.len());
    deform_positions_into(curve, original, params, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlaneMesh;
    use approx::assert_relative_eq;

    fn arch() -> CatmullRomCurve {
        CatmullRomCurve::new(&[
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        ])
        .unwrap()
    }

    fn params(warp_intensity: f32, path_offset: f32, image_length_ratio: f32) -> DeformParams {
        DeformParams {
            warp_intensity,
            path_offset,
            image_length_ratio,
        }
    }

    #[test]
    fn test_zero_intensity_puts_every_vertex_on_curve() {
        let curve = arch();
        let mesh = PlaneMesh::new(20, 1.0, 3);
        let p = params(0.0, 0.0, 1.0);
        let deformed = deform_positions(&curve, mesh.positions(), &p);

        for (original, moved) in mesh.positions().iter().zip(&deformed) {
            let expected = curve.point_at_normalized(path_parameter(original.x, &p));
            assert_relative_eq!(moved.x, expected.x, epsilon = 1e-6);
            assert_relative_eq!(moved.y, expected.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_deformation_is_idempotent() {
        let curve = arch();
        let mesh = PlaneMesh::new(30, 0.8, 2);
        let p = params(1.3, 0.2, 0.5);
        let first = deform_positions(&curve, mesh.positions(), &p);
        let mut second = vec![Vector3::splat(99.0); 3];
        deform_positions_into(&curve, mesh.positions(), &p, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_lateral_offset_scales_with_y_and_intensity() {
        let curve = arch();
        let p = params(2.0, 0.0, 1.0);
        let on_curve = deform_vertex(&curve, Vector3::new(0.0, 0.0, 0.0), &p);
        let above = deform_vertex(&curve, Vector3::new(0.0, 0.5, 0.0), &p);
        assert_relative_eq!(above.distance(on_curve), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_parameter_is_clamped_when_span_overflows() {
        let curve = arch();
        let p = params(0.0, 0.8, 0.5);
        assert_relative_eq!(path_parameter(1.0, &p), 1.0);
        let end = deform_vertex(&curve, Vector3::new(1.0, 0.0, 0.0), &p);
        assert_relative_eq!(end.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(end.y, 0.0, epsilon = 1e-5);

        let below = params(0.0, -0.5, 0.2);
        assert_relative_eq!(path_parameter(-1.0, &below), 0.0);
    }

    #[test]
    fn test_image_span_maps_plane_edges() {
        let p = params(1.0, 0.25, 0.5);
        assert_relative_eq!(path_parameter(-1.0, &p), 0.25);
        assert_relative_eq!(path_parameter(1.0, &p), 0.75);
        assert_relative_eq!(path_parameter(0.0, &p), 0.5);
    }
}
