//! Rendering-Typen und Farbkonvertierung.

use crate::core::{Point, SketchCamera};
use crate::shared::SketchOptions;
use eframe::egui;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt Painter und View-Parameter, die jeder Sub-Renderer pro Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// egui-Painter des Canvas (auf das Canvas-Rechteck geclippt)
    pub painter: &'a egui::Painter,
    /// Abbildung Sketch → Screen
    pub camera: &'a SketchCamera,
    /// Farben, Größen, Linienstärken
    pub options: &'a SketchOptions,
}

impl RenderContext<'_> {
    /// Sketch-Punkt → Screen-Position.
    pub fn to_screen(&self, p: Point) -> egui::Pos2 {
        let s = self.camera.sketch_to_screen(p);
        egui::pos2(s.x, s.y)
    }

    /// Linienstärke in Sketch-Einheiten → Pixel-Stroke.
    pub fn stroke(&self, sketch_width: f32, rgba: [u8; 4]) -> egui::Stroke {
        egui::Stroke::new(self.camera.length_to_screen(sketch_width), color32(rgba))
    }
}

/// RGBA-Array → egui-Farbe.
pub(crate) fn color32(rgba: [u8; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
