//! Steuerpunkt-Darstellung mit Wachstums-Animation (gehovert oder gegriffen).

use super::types::{color32, RenderContext};
use crate::core::Handle;
use crate::shared::RenderScene;
use eframe::egui;

/// Wachstum pro Frame eines aktiven Steuerpunkts (Sketch-Einheiten).
const GROWTH_STEP: f32 = 1.0;

/// Reiner Darstellungszustand: wie weit jeder Steuerpunkt gerade vergrößert ist.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandleRenderer {
    growth: [f32; 2],
}

impl HandleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schreibt die Animation einen Frame fort. Gibt `true` zurück, solange sie läuft.
    ///
    /// `active` ist der gegriffene, sonst der gehoverte Steuerpunkt.
    pub fn advance(&mut self, active: Option<Handle>, max_growth: f32) -> bool {
        let mut animating = false;
        for (i, handle) in Handle::ALL.iter().enumerate() {
            let next = step_growth(self.growth[i], active == Some(*handle), max_growth);
            animating |= next != self.growth[i];
            self.growth[i] = next;
        }
        animating
    }

    /// Aktuelle Vergrößerung eines Steuerpunkts.
    pub fn growth(&self, handle: Handle) -> f32 {
        Handle::ALL
            .iter()
            .position(|&h| h == handle)
            .map_or(0.0, |i| self.growth[i])
    }

    /// Zeichnet alle Steuerpunkte (gegriffen = Pink, sonst Orange).
    pub(crate) fn render(&self, ctx: &RenderContext<'_>, scene: &RenderScene) {
        let outline = egui::Stroke::new(1.0, egui::Color32::from_gray(60));
        for marker in &scene.handles {
            let size = ctx.options.control_point_size + self.growth(marker.handle);
            let radius = ctx.camera.length_to_screen(size * 0.5);
            let fill = if marker.selected {
                ctx.options.handle_selected_color
            } else {
                ctx.options.handle_color
            };
            ctx.painter
                .circle(ctx.to_screen(marker.position), radius, color32(fill), outline);
        }
    }
}

/// Ein Animationsschritt: wächst bis `max`, solange aktiv, springt sonst auf 0.
pub fn step_growth(current: f32, active: bool, max: f32) -> f32 {
    if active {
        (current + GROWTH_STEP).min(max)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_saturates() {
        let mut growth = 0.0;
        for _ in 0..10 {
            growth = step_growth(growth, true, 5.0);
        }
        assert_eq!(growth, 5.0);

        assert_eq!(step_growth(growth, false, 5.0), 0.0, "Kein Ausblenden");
    }

    #[test]
    fn test_advance_only_grows_hovered_handle() {
        let mut renderer = HandleRenderer::new();

        assert!(renderer.advance(Some(Handle::Tip), 5.0));
        assert_eq!(renderer.growth(Handle::Tip), 1.0);
        assert_eq!(renderer.growth(Handle::Curvature), 0.0);

        for _ in 0..10 {
            renderer.advance(Some(Handle::Tip), 5.0);
        }
        assert!(!renderer.advance(Some(Handle::Tip), 5.0), "Animation steht");
    }

    #[test]
    fn test_released_handle_snaps_back() {
        let mut renderer = HandleRenderer::new();
        for _ in 0..3 {
            renderer.advance(Some(Handle::Curvature), 5.0);
        }
        assert_eq!(renderer.growth(Handle::Curvature), 3.0);

        assert!(renderer.advance(None, 5.0));
        assert_eq!(renderer.growth(Handle::Curvature), 0.0);
        assert!(!renderer.advance(None, 5.0));
    }
}
