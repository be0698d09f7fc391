//! Rendering des Grashalms mit dem egui-Painter.

mod blade_renderer;
mod handle_renderer;
mod mesh;
mod overlay_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use handle_renderer::{step_growth, HandleRenderer};
pub use mesh::strip_indices;
use types::{color32, RenderContext};

use crate::core::Handle;
use eframe::egui;

/// Haupt-Renderer für die Sketch-Fläche.
///
/// Hält nur Darstellungszustand (Hover-Animation); die Geometrie kommt
/// vollständig aus der `RenderScene`.
#[derive(Debug, Default)]
pub struct Renderer {
    handle_renderer: HandleRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendert die komplette Szene.
    ///
    /// Reihenfolge: Hintergrund, Füllung, Skelett, Rückgrat, Konstruktion, Steuerpunkte.
    /// `active` ist der gegriffene oder gehoverte Steuerpunkt. Gibt `true` zurück,
    /// solange dessen Wachstums-Animation einen weiteren Frame braucht.
    pub fn render_scene(
        &mut self,
        painter: &egui::Painter,
        scene: &RenderScene,
        active: Option<Handle>,
    ) -> bool {
        let ctx = RenderContext {
            painter,
            camera: &scene.camera,
            options: &scene.options,
        };

        // 1. Sketch-Fläche
        let [w, h] = scene.options.sketch_size;
        let sketch_rect = egui::Rect::from_two_pos(
            ctx.to_screen(glam::Vec2::ZERO),
            ctx.to_screen(glam::Vec2::new(w, h)),
        );
        painter.rect_filled(sketch_rect, 0.0, color32(scene.options.background_color));

        // 2. Halm
        blade_renderer::render_fill(&ctx, scene);
        blade_renderer::render_skeleton(&ctx, scene);
        blade_renderer::render_backbone(&ctx, scene);

        // 3. Konstruktion
        overlay_renderer::render_construction(&ctx, scene);

        // 4. Steuerpunkte (zuoberst)
        let animating = self
            .handle_renderer
            .advance(active, scene.options.control_point_growth);
        self.handle_renderer.render(&ctx, scene);

        animating
    }
}
