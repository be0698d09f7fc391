//! `BladeCurve`: Zustand, Scheitelpunkt-Herleitung und Drag-Operationen.

use super::outline::{build_outline, outline_polygon};
use super::spline::{build_spline, construction_segments};
use super::width::build_width_profile;
use super::{DEFAULT_WIDTH, MAX_RESOLUTION, MAX_WIDTH, MIN_SEPARATION, TIP_CLAMP_EPSILON};
use crate::core::geometry::{angle_between, direction, Point};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Externe Parameter eines Rebuilds (kommen aus den Reglern der Toolbar).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BladeParams {
    /// Anzahl innerer Abtast-Segmente (0..=20)
    pub resolution: u32,
    /// Maximale Halbbreite (0..=40)
    pub max_width: f32,
}

impl BladeParams {
    pub fn new(resolution: u32, max_width: f32) -> Self {
        Self {
            resolution,
            max_width,
        }
    }

    /// Begrenzt beide Werte auf ihren gültigen Bereich (Clamp statt Fehler).
    pub fn clamped(self) -> Self {
        let max_width = if self.max_width.is_nan() {
            0.0
        } else {
            self.max_width.clamp(0.0, MAX_WIDTH)
        };
        Self {
            resolution: self.resolution.min(MAX_RESOLUTION),
            max_width,
        }
    }
}

impl Default for BladeParams {
    fn default() -> Self {
        Self::new(1, DEFAULT_WIDTH)
    }
}

/// Per Drag greifbare Steuerpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// Freies Ende des Halms
    Tip,
    /// Scheitelpunkt: steuert die Krümmungsrichtung
    Curvature,
}

impl Handle {
    /// Reihenfolge des Hit-Tests (spätere Treffer gewinnen).
    pub const ALL: [Handle; 2] = [Handle::Tip, Handle::Curvature];
}

/// Kurve von der fixen Basis zur Spitze, gekrümmt über den Scheitelpunkt.
///
/// Alle abgeleiteten Folgen (Spline, Breiten, Umriss, Sehnen) werden bei jeder
/// Mutation vollständig neu berechnet; Zwischenstände sind nie sichtbar.
#[derive(Debug, Clone)]
pub struct BladeCurve {
    base: Point,
    tip: Point,
    apex: Point,
    /// Abstand Basis → Scheitelpunkt; wächst nur, schrumpft nie
    length: f32,
    /// Winkel Basis → Spitze
    direct_angle: f32,
    /// Winkel Basis → Scheitelpunkt relativ zu `direct_angle`, in (-π, π]
    apex_angle: f32,
    params: BladeParams,
    spline_points: Vec<Point>,
    width_profile: Vec<f32>,
    outline_points: Vec<Point>,
    construction: Vec<(Point, Point)>,
    degenerate_intersections: usize,
}

impl BladeCurve {
    /// Erstellt die Kurve aus Startgeometrie und baut alle Folgen auf.
    pub fn new(base: Point, tip: Point, length: f32, params: BladeParams) -> Self {
        let mut curve = Self {
            base,
            tip,
            apex: base,
            length: length.max(0.0),
            direct_angle: 0.0,
            apex_angle: 0.0,
            params: params.clamped(),
            spline_points: Vec::new(),
            width_profile: Vec::new(),
            outline_points: Vec::new(),
            construction: Vec::new(),
            degenerate_intersections: 0,
        };
        curve.recompute_apex();
        curve.refresh();
        curve
    }

    pub fn base(&self) -> Point {
        self.base
    }

    pub fn tip(&self) -> Point {
        self.tip
    }

    pub fn apex(&self) -> Point {
        self.apex
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn direct_angle(&self) -> f32 {
        self.direct_angle
    }

    pub fn apex_angle(&self) -> f32 {
        self.apex_angle
    }

    pub fn params(&self) -> BladeParams {
        self.params
    }

    /// Abgetastete Punkte von der Basis (Index 0) bis zur Spitze (letzter Index).
    pub fn spline_points(&self) -> &[Point] {
        &self.spline_points
    }

    /// Halbbreite je Spline-Segment (`resolution + 1` Einträge).
    pub fn width_profile(&self) -> &[f32] {
        &self.width_profile
    }

    /// Links/rechts versetzte Punkte je Segment (gerade = links, ungerade = rechts).
    pub fn outline_points(&self) -> &[Point] {
        &self.outline_points
    }

    /// Konstruktionssehnen für das Hilfslinien-Overlay.
    pub fn construction_segments(&self) -> &[(Point, Point)] {
        &self.construction
    }

    /// Kontrollpolygon Basis → Scheitel und Spitze → Scheitel.
    pub fn control_hull(&self) -> [(Point, Point); 2] {
        [(self.base, self.apex), (self.tip, self.apex)]
    }

    /// Geschlossenes Umriss-Polygon: linke Punkte, Spitze, rechte Punkte rückwärts.
    pub fn outline_polygon(&self) -> Vec<Point> {
        outline_polygon(&self.outline_points, self.tip)
    }

    /// Querrippen (links, rechts) für die Skelett-Ansicht.
    pub fn skeleton_segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.outline_points.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Anzahl der Fallback-Punkte (parallele Sehnen) im letzten Rebuild.
    pub fn degenerate_intersections(&self) -> usize {
        self.degenerate_intersections
    }

    /// Aktuelle Position eines greifbaren Steuerpunkts.
    pub fn handle_position(&self, handle: Handle) -> Point {
        match handle {
            Handle::Tip => self.tip,
            Handle::Curvature => self.apex,
        }
    }

    /// Leitet den Scheitelpunkt aus Basis, Spitze und `length` her.
    ///
    /// Der Scheitel liegt im Abstand `length` zur Basis auf der Mittelsenkrechten
    /// von Basis–Spitze. Die Seite folgt dem Vorzeichen von `apex_angle`
    /// (`apex_angle == 0` → +90°-Zweig), damit Drags die Krümmung nicht umklappen.
    pub fn recompute_apex(&mut self) {
        self.ensure_min_separation();
        self.direct_angle = angle_between(self.base, self.tip);

        let half_dist = self.base.distance(self.tip) * 0.5;
        self.grow_length_to(half_dist);

        let offset = (self.length * self.length - half_dist * half_dist)
            .max(0.0)
            .sqrt();
        let perpendicular = if self.apex_angle < 0.0 {
            self.direct_angle - FRAC_PI_2
        } else {
            self.direct_angle + FRAC_PI_2
        };
        let midpoint = (self.base + self.tip) * 0.5;

        self.apex = midpoint + direction(perpendicular) * offset;
        self.apex_angle = wrap_angle(angle_between(self.base, self.apex) - self.direct_angle);
    }

    /// Vollständiger Rebuild mit neuen (geclampten) Parametern.
    pub fn rebuild(&mut self, params: BladeParams) {
        self.params = params.clamped();
        self.refresh();
    }

    /// Vollständiger Rebuild mit den zuletzt gesetzten Parametern.
    ///
    /// Reihenfolge: Scheitel platzieren → Spline → Breitenprofil → Umriss → Sehnen.
    pub fn refresh(&mut self) {
        self.apex = self.base + direction(self.apex_angle + self.direct_angle) * self.length;

        let resolution = self.params.resolution;
        let spline = build_spline(self.base, self.apex, self.tip, resolution);
        self.degenerate_intersections = spline.degenerate;
        self.spline_points = spline.points;
        self.width_profile = build_width_profile(resolution, self.params.max_width);
        self.outline_points = build_outline(&self.spline_points, &self.width_profile);
        self.construction = construction_segments(self.base, self.apex, self.tip, resolution);
    }

    /// Verschiebt die Spitze um `delta` und baut neu auf.
    ///
    /// Würde die halbe Basis–Spitze-Distanz `length` erreichen, wird die Spitze
    /// auf `2·length − ε` entlang der Richtung zurückgesetzt; `length` bleibt gleich.
    pub fn drag_tip(&mut self, delta: Vec2) {
        self.tip += delta;
        self.ensure_min_separation();
        self.direct_angle = angle_between(self.base, self.tip);

        let half_dist = self.base.distance(self.tip) * 0.5;
        if half_dist >= self.length {
            let reach = (2.0 * self.length - TIP_CLAMP_EPSILON).max(MIN_SEPARATION);
            self.tip = self.base + direction(self.direct_angle) * reach;
        }

        self.recompute_apex();
        self.refresh();
    }

    /// Setzt die Krümmung aus der Zeigerposition und leitet die Spitze neu her.
    ///
    /// Basis und `length` bleiben fix; die Spitze wandert auf der Basis-Geraden
    /// nach `base + 2·length·cos(apex_angle)`. Landet sie hinter der Basis, dreht
    /// `direct_angle` um π und `apex_angle` bleibt relativ zur echten Richtung.
    pub fn drag_curvature(&mut self, pointer: Point) {
        self.apex_angle = wrap_angle(angle_between(self.base, pointer) - self.direct_angle);

        let mut reach = 2.0 * self.length * self.apex_angle.cos();
        if reach.abs() < MIN_SEPARATION {
            reach = MIN_SEPARATION.copysign(reach);
        }
        if reach < 0.0 {
            self.direct_angle = wrap_angle(self.direct_angle + PI);
            self.apex_angle = wrap_angle(self.apex_angle - PI);
            reach = -reach;
        }
        self.tip = self.base + direction(self.direct_angle) * reach;
        self.grow_length_to(reach.abs() * 0.5);

        self.refresh();
    }

    /// Verhindert Basis == Spitze: schiebt die Spitze entlang der letzten Richtung hinaus.
    fn ensure_min_separation(&mut self) {
        if self.base.distance(self.tip) < MIN_SEPARATION {
            self.tip = self.base + direction(self.direct_angle) * MIN_SEPARATION;
        }
    }

    fn grow_length_to(&mut self, half_dist: f32) {
        if half_dist > self.length {
            self.length = half_dist;
        }
    }
}

/// Normalisiert einen Winkel auf (-π, π].
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
