//! Catmull-Rom-Kurve durch die Kontrollpunkte mit Bogenlängen-Parametrisierung.
//!
//! Die Kurve wird bei jeder Auswertung frisch aus einer Kopie der Kontrollpunkte
//! gebaut und danach nicht mehr verändert. Öffentliche Abfragen laufen über den
//! normierten Parameter `u`, damit gleiche Schritte in `u` gleichen Weglängen
//! entsprechen, unabhängig vom Abstand der Kontrollpunkte.

use thiserror::Error;

use super::Vector3;

/// Anzahl der Segmente der Bogenlängen-Tabelle (Tabelle hat `+ 1` Einträge).
pub const ARC_LENGTH_DIVISIONS: usize = 200;

/// Fehler beim Aufbau einer Kurve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Eine Kurve braucht mindestens zwei Kontrollpunkte.
    #[error("Kurve benötigt mindestens 2 Kontrollpunkte, vorhanden: {count}")]
    TooFewPoints {
        /// Tatsächliche Anzahl übergebener Punkte
        count: usize,
    },
}

/// Ergebnis der groben Nächster-Punkt-Suche auf der Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample {
    /// Normierter Parameter des nächsten Samples
    pub u: f32,
    /// Euklidischer Abstand zwischen Abfragepunkt und Sample
    pub distance: f32,
}

/// Offene Catmull-Rom-Kurve mit vorberechneter Bogenlängen-Tabelle.
#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    points: Vec<Vector3>,
    closed: bool,
    /// Kumulierte Längen an `ARC_LENGTH_DIVISIONS + 1` gleichmäßigen Roh-Parametern
    arc_lengths: Vec<f32>,
}

impl CatmullRomCurve {
    /// Baut eine Kurve aus einer Kopie der übergebenen Punkte.
    pub fn new(points: &[Vector3]) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::TooFewPoints {
                count: points.len(),
            });
        }

        let mut curve = Self {
            points: points.to_vec(),
            closed: false,
            arc_lengths: Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1),
        };
        curve.compute_arc_lengths();
        Ok(curve)
    }

    /// Kontrollpunkte, aus denen die Kurve gebaut wurde.
    pub fn points(&self) -> &[Vector3] {
        &self.points
    }

    /// Geschlossene Kurven werden nicht erzeugt; immer `false`.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Gesamte Bogenlänge (letzter Tabelleneintrag).
    pub fn length(&self) -> f32 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Kumulierte Längentabelle (monoton nicht fallend).
    pub fn arc_lengths(&self) -> &[f32] {
        &self.arc_lengths
    }

    /// Position am Roh-Parameter `t` ∈ [0, 1].
    pub fn point_at(&self, t: f32) -> Vector3 {
        let (p0, p1, p2, p3, weight) = self.segment(t);
        let v0 = (p2 - p0) * 0.5;
        let v1 = (p3 - p1) * 0.5;
        let w2 = weight * weight;
        let w3 = w2 * weight;

        (2.0 * p1 - 2.0 * p2 + v0 + v1) * w3
            + (-3.0 * p1 + 3.0 * p2 - 2.0 * v0 - v1) * w2
            + v0 * weight
            + p1
    }

    /// Normierte Tangente am Roh-Parameter `t`.
    ///
    /// Fallen alle vier Stützpunkte zusammen, ergibt sich der Nullvektor.
    pub fn tangent_at(&self, t: f32) -> Vector3 {
        let (p0, p1, p2, p3, weight) = self.segment(t);
        let v0 = (p2 - p0) * 0.5;
        let v1 = (p3 - p1) * 0.5;
        let w2 = weight * weight;

        let derivative = (6.0 * p1 - 6.0 * p2 + 3.0 * v0 + 3.0 * v1) * w2
            + (-6.0 * p1 + 6.0 * p2 - 4.0 * v0 - 2.0 * v1) * weight
            + v0;
        derivative.normalize_or_zero()
    }

    /// Position am normierten Parameter `u` (gleichmäßig in der Bogenlänge).
    pub fn point_at_normalized(&self, u: f32) -> Vector3 {
        self.point_at(self.normalized_to_raw(u))
    }

    /// Normierte Tangente am normierten Parameter `u`.
    pub fn tangent_at_normalized(&self, u: f32) -> Vector3 {
        self.tangent_at(self.normalized_to_raw(u))
    }

    /// Wandelt einen normierten Parameter über die Längentabelle in einen Roh-Parameter.
    ///
    /// Werte außerhalb von [0, 1] landen auf den Endpunkten, nicht-endliche auf 0.
    pub fn normalized_to_raw(&self, u: f32) -> f32 {
        let u = if u.is_finite() { u.clamp(0.0, 1.0) } else { 0.0 };
        let arc = &self.arc_lengths;
        let last = arc.len() as isize - 1;
        if last < 1 {
            return 0.0;
        }

        let target = u * self.length();

        let mut low: isize = 0;
        let mut high: isize = last;
        while low <= high {
            let mid = low + (high - low) / 2;
            let diff = arc[mid as usize] - target;
            if diff < 0.0 {
                low = mid + 1;
            } else if diff > 0.0 {
                high = mid - 1;
            } else {
                high = mid;
                break;
            }
        }

        let index = high;
        if index < 0 || index >= last {
            return if index <= 0 { 0.0 } else { 1.0 };
        }

        let index = index as usize;
        let divisions = last as f32;
        let before = arc[index];
        if before == target {
            return index as f32 / divisions;
        }

        let after = arc[index + 1];
        let segment_length = after - before;
        if segment_length <= f32::EPSILON {
            return index as f32 / divisions;
        }
        let fraction = (target - before) / segment_length;
        (index as f32 + fraction) / divisions
    }

    /// Tastet die Kurve an `divisions + 1` gleichmäßigen Roh-Parametern ab.
    pub fn sample_points(&self, divisions: usize) -> Vec<Vector3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f32 / divisions as f32))
            .collect()
    }

    /// Tastet die Kurve an `divisions + 1` gleichmäßigen normierten Parametern ab.
    pub fn sample_points_normalized(&self, divisions: usize) -> Vec<Vector3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at_normalized(i as f32 / divisions as f32))
            .collect()
    }

    /// Grobe Projektion eines Weltpunkts auf die Kurve.
    ///
    /// Vergleicht `divisions + 1` normierte Samples; bei Gleichstand gewinnt
    /// das Sample mit dem kleineren Parameter.
    pub fn closest_sample(&self, world: Vector3, divisions: usize) -> CurveSample {
        let divisions = divisions.max(1);
        let mut best = CurveSample {
            u: 0.0,
            distance: f32::INFINITY,
        };
        for i in 0..=divisions {
            let u = i as f32 / divisions as f32;
            let distance = self.point_at_normalized(u).distance(world);
            if distance < best.distance {
                best = CurveSample { u, distance };
            }
        }
        best
    }

    /// Liefert die vier Stützpunkte und das lokale Gewicht für Roh-Parameter `t`.
    fn segment(&self, t: f32) -> (Vector3, Vector3, Vector3, Vector3, f32) {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let len = self.points.len();
        let scaled = (len - 1) as f32 * t;
        let index = (scaled.floor() as usize).min(len - 1);
        let weight = scaled - index as f32;

        // An den Enden wird der Endpunkt wiederverwendet
        let p0 = self.points[index.saturating_sub(1)];
        let p1 = self.points[index];
        let p2 = self.points[(index + 1).min(len - 1)];
        let p3 = self.points[(index + 2).min(len - 1)];
        (p0, p1, p2, p3, weight)
    }

    fn compute_arc_lengths(&mut self) {
        self.arc_lengths.clear();
        let mut previous = self.point_at(0.0);
        let mut sum = 0.0;
        self.arc_lengths.push(sum);
        for i in 1..=ARC_LENGTH_DIVISIONS {
            let current = self.point_at(i as f32 / ARC_LENGTH_DIVISIONS as f32);
            sum += current.distance(previous);
            self.arc_lengths.push(sum);
            previous = current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f32, y: f32) -> Vector3 {
        Vector3::new(x, y, 0.0)
    }

    fn sample_sets() -> Vec<Vec<Vector3>> {
        vec![
            vec![v(-1.0, 0.0), v(1.0, 0.0)],
            vec![v(-1.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)],
            vec![v(-1.5, 0.5), v(-0.75, -0.5), v(0.75, 0.5), v(1.5, -0.5)],
            vec![
                v(0.0, 0.0),
                v(0.1, 0.0),
                v(3.0, 2.0),
                v(3.2, -1.0),
                v(-2.0, -2.0),
            ],
        ]
    }

    #[test]
    fn test_too_few_points_rejected() {
        assert_eq!(
            CatmullRomCurve::new(&[v(0.0, 0.0)]).unwrap_err(),
            CurveError::TooFewPoints { count: 1 }
        );
        assert!(CatmullRomCurve::new(&[]).is_err());
    }

    #[test]
    fn test_endpoints_match_first_and_last_control_point() {
        for points in sample_sets() {
            let curve = CatmullRomCurve::new(&points).unwrap();
            let start = curve.point_at_normalized(0.0);
            let end = curve.point_at_normalized(1.0);
            let first = points[0];
            let last = points[points.len() - 1];
            assert_relative_eq!(start.x, first.x, epsilon = 1e-5);
            assert_relative_eq!(start.y, first.y, epsilon = 1e-5);
            assert_relative_eq!(end.x, last.x, epsilon = 1e-5);
            assert_relative_eq!(end.y, last.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_curve_passes_through_inner_control_points() {
        let points = vec![v(-1.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)];
        let curve = CatmullRomCurve::new(&points).unwrap();
        let mid = curve.point_at(0.5);
        assert_relative_eq!(mid.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(mid.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_arc_length_table_is_monotonic() {
        for points in sample_sets() {
            let curve = CatmullRomCurve::new(&points).unwrap();
            let table = curve.arc_lengths();
            assert_eq!(table.len(), ARC_LENGTH_DIVISIONS + 1);
            assert_relative_eq!(table[0], 0.0);
            assert!(table.windows(2).all(|w| w[0] <= w[1]));
            assert_relative_eq!(curve.length(), table[ARC_LENGTH_DIVISIONS]);
        }
    }

    #[test]
    fn test_straight_two_point_curve_length() {
        let curve = CatmullRomCurve::new(&[v(-1.0, 0.0), v(1.0, 0.0)]).unwrap();
        assert_relative_eq!(curve.length(), 2.0, epsilon = 1e-4);
        let mid = curve.point_at_normalized(0.5);
        assert_relative_eq!(mid.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_path_length_grows_with_normalized_parameter() {
        for points in sample_sets() {
            let curve = CatmullRomCurve::new(&points).unwrap();
            let polyline = curve.sample_points_normalized(50);
            let mut travelled = Vec::with_capacity(polyline.len());
            let mut sum = 0.0;
            travelled.push(sum);
            for w in polyline.windows(2) {
                sum += w[0].distance(w[1]);
                travelled.push(sum);
            }
            assert!(travelled.windows(2).all(|w| w[0] <= w[1] + 1e-6));
        }
    }

    #[test]
    fn test_equal_parameter_steps_give_equal_arc_steps() {
        // Ungleich verteilte, kollineare Kontrollpunkte ohne Rücklauf
        let points = vec![v(0.0, 0.0), v(1.0, 0.0), v(2.5, 0.0), v(4.5, 0.0)];
        let curve = CatmullRomCurve::new(&points).unwrap();
        let samples = curve.sample_points_normalized(10);
        let expected = curve.length() / 10.0;
        for w in samples.windows(2) {
            assert_relative_eq!(w[0].distance(w[1]), expected, epsilon = expected * 0.05);
        }
    }

    #[test]
    fn test_out_of_range_parameters_clamp_to_endpoints() {
        let curve = CatmullRomCurve::new(&[v(-1.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)]).unwrap();
        assert_relative_eq!(curve.normalized_to_raw(-0.5), 0.0);
        assert_relative_eq!(curve.normalized_to_raw(1.5), 1.0);
        assert_relative_eq!(curve.normalized_to_raw(f32::NAN), 0.0);
        assert_relative_eq!(curve.normalized_to_raw(0.0), 0.0);
        assert_relative_eq!(curve.normalized_to_raw(1.0), 1.0);

        let end = curve.point_at_normalized(7.0);
        assert_relative_eq!(end.x, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_tangent_of_straight_line() {
        let curve = CatmullRomCurve::new(&[v(-1.0, 0.0), v(1.0, 0.0)]).unwrap();
        for u in [0.0, 0.3, 0.5, 1.0] {
            let tangent = curve.tangent_at_normalized(u);
            assert_relative_eq!(tangent.x, 1.0, epsilon = 1e-5);
            assert_relative_eq!(tangent.y, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_tangent_of_coincident_points_is_zero() {
        let curve = CatmullRomCurve::new(&[v(0.5, 0.5), v(0.5, 0.5)]).unwrap();
        assert_relative_eq!(curve.length(), 0.0);
        assert_eq!(curve.tangent_at_normalized(0.5), Vector3::ZERO);
        let p = curve.point_at_normalized(0.5);
        assert_relative_eq!(p.x, 0.5);
    }

    #[test]
    fn test_sample_points_counts() {
        let curve = CatmullRomCurve::new(&[v(-1.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)]).unwrap();
        assert_eq!(curve.sample_points(100).len(), 101);
        assert_eq!(curve.sample_points_normalized(100).len(), 101);
        assert!(!curve.is_closed());
    }

    #[test]
    fn test_closest_sample_finds_point_on_curve() {
        let curve = CatmullRomCurve::new(&[v(-1.0, 0.0), v(0.0, 1.0), v(1.0, 0.0)]).unwrap();
        let target = curve.point_at_normalized(0.3);
        let hit = curve.closest_sample(target, 100);
        assert_relative_eq!(hit.u, 0.3, epsilon = 1e-4);
        assert_relative_eq!(hit.distance, 0.0, epsilon = 1e-4);
    }
}
