//! Sketch-Kamera: bildet die feste Sketch-Fläche formatfüllend in den Viewport ab.

use glam::Vec2;

/// Einheitliche Skalierung + Verschiebung zwischen Sketch- und Screen-Koordinaten.
///
/// Beide Systeme haben Y nach unten (wie der Canvas), daher kein Flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchCamera {
    /// Screen-Position des Sketch-Ursprungs
    pub origin: Vec2,
    /// Screen-Pixel pro Sketch-Einheit
    pub scale: f32,
}

impl SketchCamera {
    /// Minimale Skalierung (verhindert Division durch 0 bei leerem Viewport).
    pub const SCALE_MIN: f32 = 0.01;

    /// Identität: Sketch-Einheit = Screen-Pixel.
    pub fn new() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Passt `sketch_size` zentriert und seitenverhältnistreu in den Viewport ein.
    pub fn fit(viewport_min: Vec2, viewport_size: Vec2, sketch_size: Vec2) -> Self {
        let ratio = viewport_size / sketch_size.max(Vec2::ONE);
        let scale = ratio.min_element().max(Self::SCALE_MIN);
        let margin = (viewport_size - sketch_size * scale) * 0.5;
        Self {
            origin: viewport_min + margin,
            scale,
        }
    }

    /// Sketch → Screen.
    pub fn sketch_to_screen(&self, sketch_pos: Vec2) -> Vec2 {
        self.origin + sketch_pos * self.scale
    }

    /// Screen → Sketch.
    pub fn screen_to_sketch(&self, screen_pos: Vec2) -> Vec2 {
        (screen_pos - self.origin) / self.scale
    }

    /// Rechnet eine Zeiger-Bewegung (Pixel) in Sketch-Einheiten um.
    pub fn delta_to_sketch(&self, screen_delta: Vec2) -> Vec2 {
        screen_delta / self.scale
    }

    /// Rechnet eine Sketch-Länge (z.B. Linienstärke) in Pixel um.
    pub fn length_to_screen(&self, sketch_len: f32) -> f32 {
        sketch_len * self.scale
    }
}

impl Default for SketchCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_uses_limiting_axis() {
        // Viewport doppelt so breit wie hoch → Höhe limitiert
        let camera = SketchCamera::fit(Vec2::ZERO, Vec2::new(800.0, 400.0), Vec2::new(400.0, 400.0));
        assert_relative_eq!(camera.scale, 1.0);
        assert_relative_eq!(camera.origin.x, 200.0);
        assert_relative_eq!(camera.origin.y, 0.0);
    }

    #[test]
    fn test_roundtrip_with_offset_viewport() {
        let camera = SketchCamera::fit(
            Vec2::new(10.0, 40.0),
            Vec2::new(600.0, 900.0),
            Vec2::new(400.0, 400.0),
        );
        let sketch = Vec2::new(123.0, 321.0);
        let back = camera.screen_to_sketch(camera.sketch_to_screen(sketch));
        assert_relative_eq!(back.x, sketch.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, sketch.y, epsilon = 1e-3);
    }

    #[test]
    fn test_delta_scales_inversely() {
        let camera = SketchCamera::fit(Vec2::ZERO, Vec2::new(800.0, 800.0), Vec2::new(400.0, 400.0));
        assert_relative_eq!(camera.scale, 2.0);
        let delta = camera.delta_to_sketch(Vec2::new(10.0, -4.0));
        assert_relative_eq!(delta.x, 5.0);
        assert_relative_eq!(delta.y, -2.0);
        assert_relative_eq!(camera.length_to_screen(3.0), 6.0);
    }

    #[test]
    fn test_empty_viewport_keeps_minimum_scale() {
        let camera = SketchCamera::fit(Vec2::ZERO, Vec2::ZERO, Vec2::new(400.0, 400.0));
        assert_relative_eq!(camera.scale, SketchCamera::SCALE_MIN);
    }
}
