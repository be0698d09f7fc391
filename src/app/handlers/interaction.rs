//! Handler für Greifen, Ziehen und Loslassen der Steuerpunkte.

use crate::app::AppState;
use glam::Vec2;

/// Greift den Steuerpunkt unter `pos` (Fehlklick lässt die Auswahl unverändert).
pub fn select(state: &mut AppState, pos: Vec2) {
    state.interaction.select_point(&state.curve, pos);
}

/// Zieht den gegriffenen Steuerpunkt; die Kurve wird vollständig neu aufgebaut.
pub fn drag(state: &mut AppState, pos: Vec2, delta: Vec2) {
    if state.interaction.on_drag(&mut state.curve, pos, delta) {
        let degenerate = state.curve.degenerate_intersections();
        if degenerate > 0 {
            log::debug!("{} parallele Sehnen im Rebuild, Fallback verwendet", degenerate);
        }
    }
}

/// Gibt die Auswahl frei.
pub fn release(state: &mut AppState) {
    state.interaction.on_release();
}
