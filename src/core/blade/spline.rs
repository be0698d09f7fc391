//! Abtastung der Konstruktionskurve über Sehnen-Schnitte (De-Casteljau-artig).

use crate::core::geometry::{lerp, line_intersection, Point};

/// Ergebnis einer Spline-Abtastung.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineBuild {
    /// `resolution + 2` Punkte von der Basis bis zur Spitze
    pub points: Vec<Point>,
    /// Anzahl der Schnitte, die wegen paralleler Sehnen per Fallback gesetzt wurden
    pub degenerate: usize,
}

/// Endpunkte der Sehne `i`: `a` auf Basis → Scheitel, `b` auf Scheitel → Spitze.
///
/// `b` läuft der Sehne um einen Schritt `d = 1/(n+1)` voraus.
fn chord(base: Point, apex: Point, tip: Point, i: usize, step: f32) -> (Point, Point) {
    let r = i as f32 * step;
    (lerp(base, apex, r), lerp(apex, tip, r + step))
}

fn step_for(resolution: u32) -> f32 {
    1.0 / (resolution as f32 + 1.0)
}

/// Tastet die Kurve mit `resolution` inneren Segmenten ab.
///
/// Jeder innere Punkt ist der Schnitt zweier aufeinanderfolgender Sehnen.
/// Der erste Punkt ist exakt `base` (Schnitt der ersten Sehne mit Basis → Scheitel),
/// der letzte exakt `tip`. Bei parallelen Sehnen (Scheitel auf der Basis-Geraden)
/// wird der Mittelpunkt zwischen neuem Sehnen-Start und altem Sehnen-Ende verwendet;
/// beide liegen dann auf derselben Geraden.
pub fn build_spline(base: Point, apex: Point, tip: Point, resolution: u32) -> SplineBuild {
    let n = resolution as usize;
    let step = step_for(resolution);

    let mut points = Vec::with_capacity(n + 2);
    let mut degenerate = 0;
    points.push(base);

    let mut prev = chord(base, apex, tip, 0, step);
    for i in 1..=n {
        let (a, b) = chord(base, apex, tip, i, step);
        let point = match line_intersection(prev.0, prev.1, a, b) {
            Ok(p) => p,
            Err(e) => {
                log::debug!("Sehne {} ohne Schnittpunkt ({}), Fallback auf Mittelpunkt", i, e);
                degenerate += 1;
                (a + prev.1) * 0.5
            }
        };
        points.push(point);
        prev = (a, b);
    }

    points.push(tip);
    SplineBuild { points, degenerate }
}

/// Alle `resolution + 1` Konstruktionssehnen (für das Hilfslinien-Overlay).
pub fn construction_segments(
    base: Point,
    apex: Point,
    tip: Point,
    resolution: u32,
) -> Vec<(Point, Point)> {
    let step = step_for(resolution);
    (0..=resolution as usize)
        .map(|i| chord(base, apex, tip, i, step))
        .collect()
}
