//! Zentrale Konfiguration für den Grashalm-Modellierer.
//!
//! `SketchOptions` enthält alle zur Laufzeit lesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::Point;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Sketch-Fläche ───────────────────────────────────────────────────

/// Breite der Sketch-Fläche in Sketch-Einheiten.
pub const SKETCH_WIDTH: f32 = 400.0;
/// Höhe der Sketch-Fläche in Sketch-Einheiten.
pub const SKETCH_HEIGHT: f32 = 400.0;

// ── Startgeometrie ──────────────────────────────────────────────────

/// Basis-Höhe als Anteil der Sketch-Höhe.
pub const GRASS_BASE_RATIO: f32 = 0.95;
/// Y-Position der Spitze.
pub const GRASS_TIP_Y: f32 = 120.0;
/// Seitlicher Versatz der Spitze gegenüber der Basis.
pub const GRASS_TIP_OFFSET_X: f32 = 20.0;
/// Scheitel-Abstand als Anteil der Basis–Spitze-Distanz.
pub const GRASS_LENGTH_FACTOR: f32 = 0.6;

// ── Steuerpunkte ────────────────────────────────────────────────────

/// Durchmesser der Steuerpunkte (Hit-Radius = Hälfte).
pub const CONTROL_POINT_SIZE: f32 = 15.0;
/// Maximale Hover-Vergrößerung der Steuerpunkte.
pub const CONTROL_POINT_GROWTH: f32 = 5.0;

// ── Regler-Startwerte ───────────────────────────────────────────────

/// Start-Auflösung ("Num of strings").
pub const INITIAL_RESOLUTION: u32 = 1;
/// Start-Wert des Breiten-Reglers.
pub const INITIAL_WIDTH: f32 = 20.0;
/// Start-Wert des Farb-Reglers.
pub const INITIAL_COLOR_SEED: f32 = 80.0;
/// Maximalwert des Farb-Reglers.
pub const MAX_COLOR_SEED: f32 = 100.0;

// ── Farben (RGBA) ───────────────────────────────────────────────────

/// Hintergrund (Hellblau).
pub const BACKGROUND_COLOR: [u8; 4] = [240, 250, 255, 255];
/// Konstruktionssehnen (Grau).
pub const CONSTRUCTION_COLOR: [u8; 4] = [100, 100, 100, 255];
/// Kontrollpolygon (Blau).
pub const HULL_COLOR: [u8; 4] = [64, 95, 237, 255];
/// Steuerpunkt (Orange).
pub const HANDLE_COLOR: [u8; 4] = [255, 165, 0, 255];
/// Gegriffener Steuerpunkt (Pink).
pub const HANDLE_SELECTED_COLOR: [u8; 4] = [255, 0, 175, 255];
/// Skelett-Rippen (Hellgrün).
pub const SKELETON_COLOR: [u8; 4] = [120, 210, 40, 255];
/// Rückgrat-Linie (Dunkelgrün).
pub const BACKBONE_COLOR: [u8; 4] = [0, 140, 0, 255];

// ── Linienstärken (Sketch-Einheiten) ────────────────────────────────

/// Rückgrat-Linie.
pub const BACKBONE_WIDTH: f32 = 5.0;
/// Kontrollpolygon.
pub const HULL_WIDTH: f32 = 2.0;
/// Konstruktionssehnen und Skelett-Rippen.
pub const THIN_LINE_WIDTH: f32 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit lesbaren Sketch-Optionen.
/// Wird aus `grass_blade_modeler.toml` neben der Binary geladen (optional).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchOptions {
    // ── Fläche & Startgeometrie ─────────────────────────────────
    /// Größe der Sketch-Fläche [Breite, Höhe]
    pub sketch_size: [f32; 2],
    /// Basis-Höhe als Anteil der Sketch-Höhe
    pub grass_base_ratio: f32,
    /// Y-Position der Spitze
    pub grass_tip_y: f32,
    /// Seitlicher Versatz der Spitze
    pub grass_tip_offset_x: f32,
    /// Scheitel-Abstand relativ zur Basis–Spitze-Distanz
    pub grass_length_factor: f32,

    // ── Steuerpunkte ────────────────────────────────────────────
    /// Durchmesser der Steuerpunkte
    pub control_point_size: f32,
    /// Maximale Hover-Vergrößerung
    pub control_point_growth: f32,

    // ── Regler ──────────────────────────────────────────────────
    pub initial_resolution: u32,
    pub initial_width: f32,
    pub initial_color_seed: f32,

    // ── Farben ──────────────────────────────────────────────────
    pub background_color: [u8; 4],
    pub construction_color: [u8; 4],
    pub hull_color: [u8; 4],
    pub handle_color: [u8; 4],
    pub handle_selected_color: [u8; 4],
    pub skeleton_color: [u8; 4],
    pub backbone_color: [u8; 4],

    // ── Linienstärken ───────────────────────────────────────────
    pub backbone_width: f32,
    pub hull_width: f32,
    pub thin_line_width: f32,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            sketch_size: [SKETCH_WIDTH, SKETCH_HEIGHT],
            grass_base_ratio: GRASS_BASE_RATIO,
            grass_tip_y: GRASS_TIP_Y,
            grass_tip_offset_x: GRASS_TIP_OFFSET_X,
            grass_length_factor: GRASS_LENGTH_FACTOR,

            control_point_size: CONTROL_POINT_SIZE,
            control_point_growth: CONTROL_POINT_GROWTH,

            initial_resolution: INITIAL_RESOLUTION,
            initial_width: INITIAL_WIDTH,
            initial_color_seed: INITIAL_COLOR_SEED,

            background_color: BACKGROUND_COLOR,
            construction_color: CONSTRUCTION_COLOR,
            hull_color: HULL_COLOR,
            handle_color: HANDLE_COLOR,
            handle_selected_color: HANDLE_SELECTED_COLOR,
            skeleton_color: SKELETON_COLOR,
            backbone_color: BACKBONE_COLOR,

            backbone_width: BACKBONE_WIDTH,
            hull_width: HULL_WIDTH,
            thin_line_width: THIN_LINE_WIDTH,
        }
    }
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        if !path.exists() {
            log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
            return Self::default();
        }
        match Self::read_from_file(path) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                Self::default()
            }
        }
    }

    /// Liest und parst eine TOML-Datei (ohne Fallback).
    pub fn read_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen-Datei nicht lesbar: {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parst Optionen aus TOML-Text; fehlende Felder erhalten Standardwerte.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content).context("Optionen-TOML ungültig")?;
        Ok(opts)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("grass_blade_modeler"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("grass_blade_modeler.toml")
    }

    /// Hit-Radius der Steuerpunkte in Sketch-Einheiten.
    pub fn hit_radius(&self) -> f32 {
        self.control_point_size * 0.5
    }

    /// Sketch-Fläche als Vektor.
    pub fn sketch_size(&self) -> glam::Vec2 {
        glam::Vec2::from_array(self.sketch_size)
    }

    /// Startgeometrie: (Basis, Spitze, Scheitel-Abstand).
    ///
    /// Basis mittig am unteren Rand, Spitze leicht seitlich versetzt oben.
    pub fn seed_geometry(&self) -> (Point, Point, f32) {
        let [width, height] = self.sketch_size;
        let mid_x = width * 0.5;
        let base = Point::new(mid_x, height * self.grass_base_ratio);
        let tip = Point::new(mid_x + self.grass_tip_offset_x, self.grass_tip_y);
        let length = base.distance(tip) * self.grass_length_factor;
        (base, tip, length)
    }
}
