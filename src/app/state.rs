//! Application State: zentrale Datenhaltung.

mod guide;

pub use guide::{GuideState, GuideStep};

use super::interaction::InteractionState;
use super::CommandLog;
use crate::core::blade::DEFAULT_WIDTH;
use crate::core::{BladeCurve, BladeParams, SketchCamera};
use crate::shared::{DisplayFlags, SketchOptions};
use glam::Vec2;

/// Reglerwerte der Toolbar (Rohwerte, geclampt erst beim Rebuild).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamState {
    /// "Num of strings"
    pub resolution: u32,
    /// Breiten-Regler
    pub width: f32,
    /// Farb-Regler (0..=100)
    pub color_seed: f32,
}

impl ParamState {
    /// Startwerte aus den Optionen.
    pub fn from_options(options: &SketchOptions) -> Self {
        Self {
            resolution: options.initial_resolution,
            width: options.initial_width,
            color_seed: options.initial_color_seed,
        }
    }

    /// Wirksame Halbbreite: Reglerwert erst nach Modellierungsstart, vorher Standard.
    pub fn effective_width(&self, modelling: bool) -> f32 {
        if modelling {
            self.width
        } else {
            DEFAULT_WIDTH
        }
    }

    /// Parameterobjekt für `BladeCurve::rebuild`.
    pub fn blade_params(&self, modelling: bool) -> BladeParams {
        BladeParams::new(self.resolution, self.effective_width(modelling)).clamped()
    }
}

impl Default for ParamState {
    fn default() -> Self {
        Self::from_options(&SketchOptions::default())
    }
}

/// Sichtbarkeit der Toolbar-Elemente.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolbarState {
    /// "Model" wurde geklickt: Breite/Farbe/Skelett/Füllung sind sichtbar,
    /// der Model-Button ist verschwunden.
    pub modelling: bool,
}

impl ToolbarState {
    pub fn shows_model_button(&self) -> bool {
        !self.modelling
    }

    /// Breiten- und Farb-Regler sowie Skelett-/Füllungs-Checkbox.
    pub fn shows_modelling_controls(&self) -> bool {
        self.modelling
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    /// Abbildung Sketch ↔ Screen
    pub camera: SketchCamera,
    /// Obere linke Ecke des Canvas in Pixeln
    pub viewport_min: Vec2,
    /// Aktuelle Canvas-Größe in Pixeln
    pub viewport_size: Vec2,
}

impl ViewState {
    /// Übernimmt ein neues Canvas-Rechteck und passt die Kamera an.
    pub fn resize(&mut self, viewport_min: Vec2, viewport_size: Vec2, sketch_size: Vec2) {
        self.viewport_min = viewport_min;
        self.viewport_size = viewport_size;
        self.camera = SketchCamera::fit(viewport_min, viewport_size, sketch_size);
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die Grashalm-Kurve (einziger Besitzer)
    pub curve: BladeCurve,
    /// Reglerwerte
    pub params: ParamState,
    /// Sichtbare Ebenen
    pub display: DisplayFlags,
    /// Toolbar-Sichtbarkeit
    pub toolbar: ToolbarState,
    /// Anleitungs-Hinweise
    pub guide: GuideState,
    /// Steuerpunkt-Auswahl
    pub interaction: InteractionState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Startwerte)
    pub options: SketchOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SketchOptions::default())
    }

    /// Erstellt den Startzustand aus geladenen Optionen.
    pub fn with_options(options: SketchOptions) -> Self {
        let params = ParamState::from_options(&options);
        let toolbar = ToolbarState::default();
        let (base, tip, length) = options.seed_geometry();
        let curve = BladeCurve::new(base, tip, length, params.blade_params(toolbar.modelling));

        Self {
            curve,
            params,
            display: DisplayFlags::default(),
            toolbar,
            guide: GuideState::new(),
            interaction: InteractionState::new(options.hit_radius()),
            view: ViewState::default(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Baut die Kurve mit den aktuellen Reglerwerten neu auf.
    pub fn rebuild_curve(&mut self) {
        let params = self.params.blade_params(self.toolbar.modelling);
        self.curve.rebuild(params);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
