//! Umriss-Extrusion des Spline-Polygonzugs.

use crate::core::geometry::{angle_between, direction, Point};
use std::f32::consts::FRAC_PI_2;

/// Versetzt jeden Segment-Startpunkt senkrecht um seine Halbbreite.
///
/// Pro Segment `(p, p_next)` entstehen zwei Punkte `p ± w·n` (erst links, dann
/// rechts), wobei `n` senkrecht auf `p_next → p` steht. Ergebnis: `2·(Punkte − 1)`.
pub fn build_outline(spline: &[Point], widths: &[f32]) -> Vec<Point> {
    let mut outline = Vec::with_capacity(spline.len().saturating_sub(1) * 2);
    for (i, segment) in spline.windows(2).enumerate() {
        let (p, next) = (segment[0], segment[1]);
        let width = widths.get(i).copied().unwrap_or(0.0);
        let offset = direction(angle_between(next, p) + FRAC_PI_2) * width;
        outline.push(p + offset);
        outline.push(p - offset);
    }
    outline
}

/// Geschlossenes Polygon für die Füllung: linke Punkte, Spitze, rechte Punkte rückwärts.
pub fn outline_polygon(outline: &[Point], tip: Point) -> Vec<Point> {
    let mut polygon = Vec::with_capacity(outline.len() + 1);
    polygon.extend(outline.iter().step_by(2).copied());
    polygon.push(tip);
    polygon.extend(outline.iter().skip(1).step_by(2).rev().copied());
    polygon
}
