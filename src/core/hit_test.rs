//! Hit-Tests für Kontrollpunkte und das Bildband entlang der Kurve.
//!
//! Alle Abfragen arbeiten in Weltkoordinaten, nicht in Pixeln.

use super::{CatmullRomCurve, Vector3};

/// Schwellwerte für die Zeiger-Auswertung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestParams {
    /// Radius um einen Kontrollpunkt (Welt-Einheiten)
    pub point_radius: f32,
    /// Faktor auf `height_scale · warp_intensity` für die Bandbreite
    pub band_factor: f32,
    /// Fester Zuschlag auf die Bandbreite
    pub band_slack: f32,
    /// Anzahl Segmente der groben Kurvenprojektion
    pub band_samples: usize,
}

impl Default for HitTestParams {
    fn default() -> Self {
        Self {
            point_radius: 0.1,
            band_factor: 1.2,
            band_slack: 0.1,
            band_samples: 100,
        }
    }
}

impl HitTestParams {
    /// Halbe Dicke des Bildbands plus Zuschlag.
    pub fn band_threshold(&self, height_scale: f32, warp_intensity: f32) -> f32 {
        height_scale * warp_intensity * self.band_factor + self.band_slack
    }
}

/// Ergebnis eines Zeiger-Tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerHit {
    /// Kontrollpunkt getroffen; `grab_offset` = Punkt − Zeiger
    ControlPoint { index: usize, grab_offset: Vector3 },
    /// Bildband getroffen; `u` = nächster normierter Kurvenparameter
    PathBand { u: f32, distance: f32 },
    /// Nichts getroffen
    Miss,
}

/// Erster Kontrollpunkt (aufsteigender Index) innerhalb von `radius`.
pub fn pick_control_point(points: &[Vector3], world: Vector3, radius: f32) -> Option<usize> {
    points.iter().position(|p| p.distance(world) < radius)
}

/// Wertet einen Zeigerdruck aus. Kontrollpunkte haben Vorrang vor dem Band.
pub fn hit_test(
    curve: &CatmullRomCurve,
    world: Vector3,
    height_scale: f32,
    warp_intensity: f32,
    params: &HitTestParams,
) -> PointerHit {
    if let Some(index) = pick_control_point(curve.points(), world, params.point_radius) {
        return PointerHit::ControlPoint {
            index,
            grab_offset: curve.points()[index] - world,
        };
    }

    let sample = curve.closest_sample(world, params.band_samples);
    if sample.distance < params.band_threshold(height_scale, warp_intensity) {
        PointerHit::PathBand {
            u: sample.u,
            distance: sample.distance,
        }
    } else {
        PointerHit::Miss
    }
}

/// Neuer (ungeklemmter) Pfad-Offset beim Ziehen des Bandes.
///
/// Die Zeigerbewegung wird auf die Tangente am Startparameter projiziert und
/// durch die Kurvenlänge beim Drag-Start geteilt.
pub fn path_drag_offset(
    start_offset: f32,
    start_point: Vector3,
    current: Vector3,
    start_tangent: Vector3,
    curve_length: f32,
) -> f32 {
    if curve_length <= f32::EPSILON {
        return start_offset;
    }
    let along = (current - start_point).dot(start_tangent);
    start_offset + along / curve_length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> CatmullRomCurve {
        CatmullRomCurve::new(&[
            Vector3::new(-1.5, 0.5, 0.0),
            Vector3::new(-0.75, -0.5, 0.0),
            Vector3::new(0.75, 0.5, 0.0),
            Vector3::new(1.5, -0.5, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_control_point_hit_wins_over_band() {
        let curve = curve();
        let params = HitTestParams::default();
        for (index, point) in curve.points().iter().enumerate() {
            // Mit großem Band liegt jeder Punkt auch im Band
            let hit = hit_test(&curve, *point, 2.0, 3.0, &params);
            assert_eq!(
                hit,
                PointerHit::ControlPoint {
                    index,
                    grab_offset: Vector3::ZERO
                }
            );
        }
    }

    #[test]
    fn test_first_index_wins_for_overlapping_points() {
        let points = [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.02, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        ];
        assert_eq!(
            pick_control_point(&points, Vector3::new(0.03, 0.0, 0.0), 0.1),
            Some(0)
        );
        assert_eq!(pick_control_point(&points, Vector3::new(0.5, 0.0, 0.0), 0.1), None);
    }

    #[test]
    fn test_grab_offset_points_from_pointer_to_point() {
        let curve = curve();
        let pointer = curve.points()[2] + Vector3::new(0.05, -0.02, 0.0);
        match hit_test(&curve, pointer, 1.0, 1.0, &HitTestParams::default()) {
            PointerHit::ControlPoint { index, grab_offset } => {
                assert_eq!(index, 2);
                assert_relative_eq!(grab_offset.x, -0.05, epsilon = 1e-6);
                assert_relative_eq!(grab_offset.y, 0.02, epsilon = 1e-6);
            }
            other => panic!("Kontrollpunkt erwartet, erhalten: {:?}", other),
        }
    }

    #[test]
    fn test_band_hit_and_miss() {
        let curve = curve();
        let params = HitTestParams::default();
        let on_curve = curve.point_at_normalized(0.4);
        match hit_test(&curve, on_curve, 1.0, 1.0, &params) {
            PointerHit::PathBand { u, distance } => {
                assert_relative_eq!(u, 0.4, epsilon = 0.011);
                assert!(distance < 0.05);
            }
            other => panic!("Band-Treffer erwartet, erhalten: {:?}", other),
        }

        let far_away = Vector3::new(0.0, 3.5, 0.0);
        assert_eq!(hit_test(&curve, far_away, 1.0, 1.0, &params), PointerHit::Miss);
    }

    #[test]
    fn test_band_threshold_formula() {
        let params = HitTestParams::default();
        assert_relative_eq!(params.band_threshold(1.0, 1.0), 1.3);
        assert_relative_eq!(params.band_threshold(2.0, 0.0), 0.1);
    }

    #[test]
    fn test_path_drag_offset_projects_on_tangent() {
        let start = Vector3::new(0.0, 0.0, 0.0);
        let tangent = Vector3::X;
        // Bewegung quer zur Tangente ändert nichts
        assert_relative_eq!(
            path_drag_offset(0.2, start, Vector3::new(0.0, 1.0, 0.0), tangent, 4.0),
            0.2
        );
        assert_relative_eq!(
            path_drag_offset(0.2, start, Vector3::new(1.0, 1.0, 0.0), tangent, 4.0),
            0.45
        );
        assert_relative_eq!(
            path_drag_offset(0.2, start, Vector3::new(-2.0, 0.0, 0.0), tangent, 4.0),
            -0.3
        );
        assert_relative_eq!(path_drag_offset(0.2, start, Vector3::X, tangent, 0.0), 0.2);
    }
}
