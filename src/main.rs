//! Grass Blade Modeler.
//!
//! Interaktiver Sketch zum Modellieren eines Grashalms: Spitze und Krümmung
//! per Drag formen, Auflösung, Breite und Farbe über die Toolbar einstellen.

use eframe::egui;
use grass_blade_modeler::{render, ui, AppController, AppIntent, AppState, SketchOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Grass Blade Modeler v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SketchOptions::config_path();
        let sketch_options = SketchOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([720.0, 520.0])
                .with_title("Grass Blade Modeler"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Grass Blade Modeler",
            options,
            Box::new(|_cc| Ok(Box::new(ModelerApp::new(sketch_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ModelerApp {
    state: AppState,
    controller: AppController,
    renderer: render::Renderer,
    input: ui::InputState,
}

impl ModelerApp {
    fn new(options: SketchOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            renderer: render::Renderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for ModelerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let (events, animating) = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events || animating);
    }
}

impl ModelerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> (Vec<AppIntent>, bool) {
        let mut events = Vec::new();
        let mut animating = false;

        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Q)) {
            events.push(AppIntent::ExitRequested);
        }

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(230)))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.push(AppIntent::ViewportResized {
                    min: glam::Vec2::new(rect.min.x, rect.min.y),
                    size: glam::Vec2::new(rect.width(), rect.height()),
                });

                let camera = self.state.view.camera;
                let dragging = self.state.interaction.is_dragging();
                events.extend(
                    self.input
                        .collect_canvas_events(ui, &response, &camera, dragging),
                );

                let hovered = self
                    .input
                    .hover_pos(&response, &camera)
                    .and_then(|pos| self.state.interaction.hovered(&self.state.curve, pos));
                let active = self.state.interaction.selected.or(hovered);

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                animating = self.renderer.render_scene(&painter, &scene, active);
            });

        (events, animating)
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, needs_repaint: bool) {
        if needs_repaint
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.interaction.is_dragging()
        {
            ctx.request_repaint();
        }
    }
}
