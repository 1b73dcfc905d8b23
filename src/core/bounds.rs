//! Achsenparalleles Begrenzungsrechteck in der XY-Ebene.

use super::Vector3;

/// Weltkoordinaten-Bereich einer Punktmenge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds2D {
    /// Berechnet das Rechteck über alle Punkte. `None` bei leerer Eingabe.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vector3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Vergrößert das Rechteck an allen Seiten um `fraction · max(Breite, Höhe)`.
    pub fn padded(&self, fraction: f32) -> Self {
        let padding = self.width().max(self.height()) * fraction;
        Self {
            min_x: self.min_x - padding,
            max_x: self.max_x + padding,
            min_y: self.min_y - padding,
            max_y: self.max_y + padding,
        }
    }

    /// Seitenverhältnis Breite / Höhe.
    pub fn aspect_ratio(&self) -> f32 {
        self.width() / self.height()
    }

    /// `true`, wenn eine Ausdehnung null oder nicht endlich ist.
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.width(), self.height());
        !(w.is_finite() && h.is_finite()) || w <= f32::EPSILON || h <= f32::EPSILON
    }
}
