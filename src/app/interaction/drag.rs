//! Hit-Test und Drag-Weitergabe für die Kurven-Steuerpunkte.

use crate::core::{BladeCurve, Handle, Point};
use glam::Vec2;

/// Sucht den Steuerpunkt innerhalb von `radius` um `pos`.
///
/// Getestet wird in der Reihenfolge von `Handle::ALL`; bei Überlappung gewinnt
/// der zuletzt getestete Treffer.
pub fn pick_handle(curve: &BladeCurve, pos: Point, radius: f32) -> Option<Handle> {
    Handle::ALL
        .iter()
        .rev()
        .copied()
        .find(|&handle| curve.handle_position(handle).distance(pos) <= radius)
}

/// Wendet eine Zeigerbewegung auf den gegriffenen Steuerpunkt an.
///
/// Spitze: relative Verschiebung um `delta`. Krümmung: absolute Zeigerposition.
pub fn apply_drag(curve: &mut BladeCurve, handle: Handle, pos: Point, delta: Vec2) {
    match handle {
        Handle::Tip => curve.drag_tip(delta),
        Handle::Curvature => curve.drag_curvature(pos),
    }
}
