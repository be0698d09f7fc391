//! Toolbar: Regler, Anzeige-Checkboxen und Model-Button.

use crate::app::AppIntent;
use crate::app::AppState;
use crate::core::blade::{MAX_RESOLUTION, MAX_WIDTH};
use crate::shared::options::MAX_COLOR_SEED;
use crate::shared::{fill_color_from_seed, DisplayLayer};

const SWATCH_SIZE: egui::Vec2 = egui::Vec2::new(14.0, 14.0);

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let toolbar = state.toolbar;

    egui::SidePanel::left("toolbar")
        .resizable(false)
        .exact_width(150.0)
        .show(ctx, |ui| {
            ui.add_space(4.0);

            // ── Auflösung ──
            let mut resolution = state.params.resolution;
            if ui
                .add(egui::Slider::new(&mut resolution, 0..=MAX_RESOLUTION).text("Num of strings"))
                .changed()
            {
                events.push(AppIntent::ResolutionChanged { resolution });
            }

            // ── Breite & Farbe (erst nach "Model") ──
            if toolbar.shows_modelling_controls() {
                let mut width = state.params.width;
                if ui
                    .add(egui::Slider::new(&mut width, 0.0..=MAX_WIDTH).text("Width"))
                    .changed()
                {
                    events.push(AppIntent::WidthChanged { width });
                }

                ui.horizontal(|ui| {
                    ui.label("Color:");
                    let [r, g, b] = fill_color_from_seed(state.params.color_seed);
                    egui::widgets::color_picker::show_color(
                        ui,
                        egui::Color32::from_rgb(r, g, b),
                        SWATCH_SIZE,
                    );
                });
                let mut seed = state.params.color_seed;
                if ui
                    .add(egui::Slider::new(&mut seed, 0.0..=MAX_COLOR_SEED).show_value(false))
                    .changed()
                {
                    events.push(AppIntent::ColorChanged { seed });
                }
            }

            ui.separator();

            // ── Anzeige-Checkboxen ──
            let mut layers = vec![DisplayLayer::Construction];
            if toolbar.shows_modelling_controls() {
                layers.extend([DisplayLayer::Skeleton, DisplayLayer::Fill]);
            }
            for layer in layers {
                let mut visible = state.display.get(layer);
                if ui.checkbox(&mut visible, layer.label()).changed() {
                    events.push(AppIntent::DisplayToggled { layer, visible });
                }
            }

            // ── Model-Button ──
            if toolbar.shows_model_button() && ui.button("Model").clicked() {
                events.push(AppIntent::ModelRequested);
            }
        });

    events
}
