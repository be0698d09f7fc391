//! Auswahl-Zustandsmaschine für die Steuerpunkte der Kurve.
//!
//! Zustände: nichts gegriffen, Spitze gegriffen, Krümmung gegriffen.
//! Drücken greift (ein Fehlklick ändert nichts), Ziehen mutiert die Kurve,
//! Loslassen gibt immer frei.

mod drag;

use crate::core::{BladeCurve, Handle, Point};
use glam::Vec2;

pub use drag::{apply_drag, pick_handle};

/// Interaktionszustand des Sketch-Canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    /// Aktuell gegriffener Steuerpunkt
    pub selected: Option<Handle>,
    /// Greifradius in Sketch-Einheiten
    pub hit_radius: f32,
}

impl InteractionState {
    /// Erstellt einen Zustand ohne Auswahl.
    pub fn new(hit_radius: f32) -> Self {
        Self {
            selected: None,
            hit_radius,
        }
    }

    /// Greift den Steuerpunkt unter `pos`. Gibt zurück, ob ein Treffer vorlag.
    ///
    /// Ohne Treffer bleibt eine bestehende Auswahl erhalten.
    pub fn select_point(&mut self, curve: &BladeCurve, pos: Point) -> bool {
        match pick_handle(curve, pos, self.hit_radius) {
            Some(handle) => {
                if self.selected != Some(handle) {
                    log::debug!("Steuerpunkt gegriffen: {:?}", handle);
                }
                self.selected = Some(handle);
                true
            }
            None => false,
        }
    }

    /// Leitet eine Zeigerbewegung an den gegriffenen Steuerpunkt weiter.
    ///
    /// Gibt zurück, ob die Kurve verändert wurde.
    pub fn on_drag(&self, curve: &mut BladeCurve, pos: Point, delta: Vec2) -> bool {
        match self.selected {
            Some(handle) => {
                apply_drag(curve, handle, pos, delta);
                true
            }
            None => false,
        }
    }

    /// Gibt die Auswahl bedingungslos frei.
    pub fn on_release(&mut self) {
        if let Some(handle) = self.selected.take() {
            log::debug!("Steuerpunkt losgelassen: {:?}", handle);
        }
    }

    /// Steuerpunkt unter dem Zeiger (für Hover-Darstellung), ohne Zustand zu ändern.
    pub fn hovered(&self, curve: &BladeCurve, pos: Point) -> Option<Handle> {
        pick_handle(curve, pos, self.hit_radius)
    }

    /// Gibt `true` zurück, wenn gerade ein Steuerpunkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.selected.is_some()
    }
}
