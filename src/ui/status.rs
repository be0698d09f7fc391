//! Status-Bar am unteren Bildschirmrand mit Anleitungs-Hinweis.

use crate::app::{AppState, GuideStep};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let step = state.guide.current();
            if step == GuideStep::Done {
                ui.strong(step.hint());
            } else {
                ui.label(format!("Tip: {}", step.hint()));
            }

            ui.separator();

            let curve = &state.curve;
            ui.label(format!(
                "Strings: {} | Points: {} | Length: {:.1}",
                curve.params().resolution,
                curve.spline_points().len(),
                curve.length()
            ));

            if let Some(handle) = state.interaction.selected {
                ui.separator();
                ui.label(format!("Dragging: {:?}", handle));
            }
        });
    });
}
