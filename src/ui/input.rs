//! Canvas-Input-Handling: Maus-Events → AppIntent (in Sketch-Koordinaten).

use crate::app::AppIntent;
use crate::core::SketchCamera;

/// Verwaltet den Input-Zustand des Canvas zwischen zwei Frames.
#[derive(Debug, Default)]
pub struct InputState {
    /// Zeiger lag im letzten Frame über dem Canvas
    pointer_inside: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pointer_inside: false,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Drücken, Ziehen und Loslassen der Primärtaste werden in Sketch-Koordinaten
    /// umgerechnet. Verlässt der Zeiger den Canvas, zählt das als Loslassen.
    /// Ist ein Steuerpunkt gegriffen (`dragging`), wird jede Zeigerbewegung mit
    /// gedrückter Taste weitergegeben, auch unterhalb der egui-Drag-Schwelle.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        camera: &SketchCamera,
        dragging: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let to_sketch = |p: egui::Pos2| camera.screen_to_sketch(glam::Vec2::new(p.x, p.y));

        let (pressed, released, primary_down, delta, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.primary_down(),
                i.pointer.delta(),
                i.pointer.interact_pos(),
            )
        });

        let inside = response.contains_pointer();

        if pressed && inside {
            if let Some(pos) = pointer_pos {
                events.push(AppIntent::PointerPressed { pos: to_sketch(pos) });
            }
        }

        if forwards_drag(dragging, primary_down, pressed, delta) {
            if let Some(pos) = pointer_pos {
                events.push(AppIntent::PointerDragged {
                    pos: to_sketch(pos),
                    delta: camera.delta_to_sketch(glam::Vec2::new(delta.x, delta.y)),
                });
            }
        }

        if released {
            events.push(AppIntent::PointerReleased);
        } else if self.pointer_inside && !inside {
            events.push(AppIntent::PointerLeft);
        }

        self.pointer_inside = inside;
        events
    }

    /// Zeigerposition über dem Canvas in Sketch-Koordinaten (für Hover).
    pub fn hover_pos(&self, response: &egui::Response, camera: &SketchCamera) -> Option<glam::Vec2> {
        response
            .hover_pos()
            .map(|p| camera.screen_to_sketch(glam::Vec2::new(p.x, p.y)))
    }
}

/// Zeigerbewegung als Drag weitergeben? Unabhängig von der egui-Drag-Schwelle.
fn forwards_drag(dragging: bool, primary_down: bool, pressed: bool, delta: egui::Vec2) -> bool {
    dragging && primary_down && !pressed && delta != egui::Vec2::ZERO
}
