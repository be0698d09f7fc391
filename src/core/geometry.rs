//! Geometrische Grundfunktionen: Punkte, Interpolation, Geraden-Schnitt.

use glam::Vec2;
use thiserror::Error;

/// Ein Punkt in Sketch-Koordinaten (Wertsemantik, keine eigene Identität).
pub type Point = Vec2;

/// Relativer Grenzwert (Sinus des Schnittwinkels), unter dem zwei Geraden als parallel gelten.
pub const PARALLEL_EPSILON: f32 = 1e-5;

/// Fehler bei geometrischen Berechnungen.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Die beiden Geraden sind parallel oder fallen zusammen.
    #[error("Geraden sind parallel oder identisch (Determinante {denominator})")]
    Degenerate { denominator: f32 },
}

/// Schnittpunkt der Geraden durch `p1`–`p2` und `p3`–`p4`.
///
/// Die Geraden sind unbegrenzt (kein Segment-Test). Bei paralleler oder
/// identischer Lage liefert die Funktion `GeometryError::Degenerate`
/// statt `NaN`/`Infinity`; der Aufrufer entscheidet über den Fallback.
pub fn line_intersection(
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
) -> Result<Point, GeometryError> {
    let d1 = p1 - p2;
    let d2 = p3 - p4;
    let denominator = d1.x * d2.y - d1.y * d2.x;
    // |d1 × d2| = |d1|·|d2|·sin(θ); erfasst auch Geraden ohne Richtung (|d| = 0)
    if denominator.abs() <= PARALLEL_EPSILON * d1.length() * d2.length() {
        return Err(GeometryError::Degenerate { denominator });
    }

    let c1 = p1.perp_dot(p2);
    let c2 = p3.perp_dot(p4);
    Ok(Point::new(
        (d2.x * c1 - d1.x * c2) / denominator,
        (d2.y * c1 - d1.y * c2) / denominator,
    ))
}

/// Lineare Interpolation zwischen `a` (t = 0) und `b` (t = 1).
#[inline]
pub fn lerp(a: Point, b: Point, t: f32) -> Point {
    a.lerp(b, t)
}

/// Einheitsvektor in Richtung `angle` (Radiant).
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::from_angle(angle)
}

/// Winkel der Strecke `from` → `to` (Radiant, `atan2`).
#[inline]
pub fn angle_between(from: Point, to: Point) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn crossing_diagonals_meet_in_center() {
        let p = line_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 0.0),
        )
        .expect("Diagonalen schneiden sich");
        assert_abs_diff_eq!(p.x, 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn intersection_outside_segments_is_found() {
        // Geraden, nicht Segmente: Schnitt bei x = 20 liegt außerhalb beider Strecken
        let p = line_intersection(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(20.0, 5.0),
            Point::new(20.0, 6.0),
        )
        .expect("Geraden schneiden sich");
        assert_abs_diff_eq!(p.x, 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn parallel_lines_are_degenerate() {
        let result = line_intersection(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
        );
        assert!(matches!(result, Err(GeometryError::Degenerate { .. })));
    }

    #[test]
    fn coincident_lines_are_degenerate() {
        let result = line_intersection(
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn zero_length_line_is_degenerate() {
        let p = Point::new(3.0, 3.0);
        let result = line_intersection(p, p, Point::new(0.0, 0.0), Point::new(1.0, 5.0));
        assert!(result.is_err());
    }

    #[test]
    fn angle_between_matches_atan2() {
        let a = angle_between(Point::new(1.0, 1.0), Point::new(1.0, 3.0));
        assert_abs_diff_eq!(a, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
    }
}
