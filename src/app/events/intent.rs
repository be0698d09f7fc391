use crate::shared::DisplayLayer;
use glam::Vec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Positionen liegen bereits in Sketch-Koordinaten vor.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Zeiger auf dem Canvas gedrückt
    PointerPressed { pos: Vec2 },
    /// Zeiger mit gedrückter Taste bewegt (`delta` seit dem letzten Frame)
    PointerDragged { pos: Vec2, delta: Vec2 },
    /// Zeiger losgelassen
    PointerReleased,
    /// Zeiger hat den Canvas verlassen (zählt als Loslassen)
    PointerLeft,
    /// "Num of strings"-Regler bewegt
    ResolutionChanged { resolution: u32 },
    /// Breiten-Regler bewegt
    WidthChanged { width: f32 },
    /// Farb-Regler bewegt
    ColorChanged { seed: f32 },
    /// Checkbox umgeschaltet
    DisplayToggled { layer: DisplayLayer, visible: bool },
    /// "Model"-Button geklickt
    ModelRequested,
    /// Canvas-Rechteck hat sich geändert (Pixel)
    ViewportResized { min: Vec2, size: Vec2 },
    /// Anwendung beenden
    ExitRequested,
}
