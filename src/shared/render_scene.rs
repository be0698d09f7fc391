//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::display::DisplayFlags;
use super::options::SketchOptions;
use crate::core::{Handle, Point, SketchCamera};

/// Ein zu zeichnender Steuerpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    pub handle: Handle,
    /// Position in Sketch-Koordinaten
    pub position: Point,
    /// Gerade gegriffen (Pink statt Orange)
    pub selected: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Rückgrat-Polylinie (Basis → Spitze)
    pub spline: Vec<Point>,
    /// Geschlossenes Umriss-Polygon für die Füllung
    pub outline_polygon: Vec<Point>,
    /// Querrippen (links, rechts)
    pub skeleton: Vec<(Point, Point)>,
    /// Konstruktionssehnen
    pub construction: Vec<(Point, Point)>,
    /// Kontrollpolygon Basis → Scheitel → Spitze
    pub hull: [(Point, Point); 2],
    /// Greifbare Steuerpunkte in Zeichenreihenfolge
    pub handles: Vec<HandleMarker>,
    /// Sichtbare Ebenen
    pub display: DisplayFlags,
    /// Füllfarbe (RGB)
    pub fill_color: [u8; 3],
    /// Kamera-Zustand für diesen Frame
    pub camera: SketchCamera,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: SketchOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein füllbares Polygon vorliegt.
    pub fn has_fill(&self) -> bool {
        self.display.fill && self.outline_polygon.len() >= 3
    }
}
