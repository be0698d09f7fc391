//! Handler für Reglerwerte und den Modellierungsstart.

use crate::app::state::GuideStep;
use crate::app::AppState;
use crate::core::blade::DEFAULT_WIDTH;

/// Setzt die Auflösung und baut die Kurve neu auf.
pub fn set_resolution(state: &mut AppState, resolution: u32) {
    state.params.resolution = resolution;
    state.rebuild_curve();
    log::debug!("Auflösung: {}", resolution);

    if resolution > 1 {
        state.guide.complete(GuideStep::Resolution);
    }
}

/// Setzt die maximale Halbbreite und baut die Kurve neu auf.
pub fn set_width(state: &mut AppState, width: f32) {
    state.params.width = width;
    state.rebuild_curve();
    log::debug!("Breite: {:.1}", width);

    if width > DEFAULT_WIDTH {
        state.guide.complete(GuideStep::Width);
    }
}

/// Setzt den Farb-Seed. Reine Darstellung, kein Rebuild.
pub fn set_color_seed(state: &mut AppState, seed: f32) {
    state.params.color_seed = seed;
    state.guide.complete(GuideStep::Color);
}

/// Startet die Modellierung: erweitert die Toolbar, blendet die Konstruktion aus
/// und das Skelett ein.
pub fn start_modelling(state: &mut AppState) {
    state.toolbar.modelling = true;
    state.display.construction = false;
    state.display.skeleton = true;
    state.guide.complete(GuideStep::Model);
    // Sichtbares Skelett erledigt den Skelett-Hinweis
    state.guide.complete(GuideStep::Skeleton);
    state.rebuild_curve();
    log::info!("Modellierung gestartet");
}
