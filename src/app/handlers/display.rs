//! Handler für die Anzeige-Checkboxen.

use crate::app::state::GuideStep;
use crate::app::AppState;
use crate::shared::DisplayLayer;

/// Blendet eine Ebene ein oder aus und schreibt die Anleitung fort.
pub fn set_layer(state: &mut AppState, layer: DisplayLayer, visible: bool) {
    state.display.set(layer, visible);
    log::debug!("Anzeige {}: {}", layer.label(), visible);

    match layer {
        DisplayLayer::Fill if visible => state.guide.complete(GuideStep::Fill),
        DisplayLayer::Skeleton if visible => state.guide.complete(GuideStep::Skeleton),
        _ => {}
    }
}
