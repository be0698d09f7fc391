use crate::shared::DisplayLayer;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Steuerpunkt unter der Position greifen
    SelectHandle { pos: Vec2 },
    /// Gegriffenen Steuerpunkt ziehen
    DragHandle { pos: Vec2, delta: Vec2 },
    /// Auswahl freigeben
    ReleaseHandle,
    /// Auflösung setzen (bereits geclampt)
    SetResolution { resolution: u32 },
    /// Breite setzen (bereits geclampt)
    SetWidth { width: f32 },
    /// Farb-Seed setzen (bereits geclampt)
    SetColorSeed { seed: f32 },
    /// Anzeige-Ebene ein-/ausblenden
    SetDisplayLayer { layer: DisplayLayer, visible: bool },
    /// Modellierung starten (Toolbar erweitern)
    StartModelling,
    /// Canvas-Rechteck übernehmen und Kamera anpassen
    SetViewport { min: Vec2, size: Vec2 },
    /// Anwendung beenden
    RequestExit,
}
