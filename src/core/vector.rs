//! 3D-Vektor als unveränderlicher Werttyp.
//!
//! `Vector3` ist ein Alias auf `glam::Vec3` (Copy, Operatoren liefern neue Werte).
//! Damit gibt es keine geteilten Scratch-Instanzen, die in Schleifen
//! versehentlich überschrieben werden können.

use glam::Vec3;

/// Punkt bzw. Richtung im Weltkoordinatensystem (z = 0 in der Praxis).
pub type Vector3 = Vec3;

/// Dreht eine Tangente in der XY-Ebene um 90° gegen den Uhrzeigersinn.
///
/// Liefert die seitliche Richtung, entlang der das Bild von der Kurve
/// weg verschoben wird. Eine Null-Tangente ergibt eine Null-Normale.
#[inline]
pub fn in_plane_normal(tangent: Vector3) -> Vector3 {
    Vec3::new(-tangent.y, tangent.x, 0.0)
}
