//! Handler für Viewport und Kamera.

use crate::app::AppState;
use glam::Vec2;

/// Übernimmt das Canvas-Rechteck und passt die Sketch-Fläche formatfüllend ein.
pub fn set_viewport(state: &mut AppState, min: Vec2, size: Vec2) {
    let sketch_size = state.options.sketch_size();
    state.view.resize(min, size, sketch_size);
}
