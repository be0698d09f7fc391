//! Grashalm-Kurvenmodell: Basis, Spitze und abgeleiteter Scheitelpunkt.
//!
//! Die Kurve entsteht nicht über die Bézier-Formel, sondern über
//! wiederholte Interpolation + Geraden-Schnitt der Konstruktionssehnen
//! (entspricht den Hilfslinien, die dem Benutzer angezeigt werden).
//!
//! Aufgeteilt in:
//! - `curve`  : `BladeCurve`, Parameter, Scheitelpunkt-Herleitung, Drag-Operationen
//! - `spline` : Abtastung der Konstruktionskurve (Spline-Punkte, Sehnen)
//! - `width`  : Breitenprofil (Halb-Sinus mit Plateau)
//! - `outline`: Umriss-Extrusion und geschlossenes Umriss-Polygon

mod curve;
mod outline;
mod spline;
mod width;

pub use curve::{BladeCurve, BladeParams, Handle};
pub use outline::{build_outline, outline_polygon};
pub use spline::{build_spline, construction_segments, SplineBuild};
pub use width::build_width_profile;

/// Maximale Anzahl innerer Abtast-Segmente.
pub const MAX_RESOLUTION: u32 = 20;
/// Maximale Halbbreite des Halms.
pub const MAX_WIDTH: f32 = 40.0;
/// Halbbreite, solange der Breiten-Regler nicht freigeschaltet ist.
pub const DEFAULT_WIDTH: f32 = 20.0;
/// Abstand unter `2·length`, auf den die Spitze beim Überdehnen gesetzt wird.
pub const TIP_CLAMP_EPSILON: f32 = 1.0;
/// Mindestabstand zwischen Basis und Spitze (sonst ist `direct_angle` undefiniert).
pub const MIN_SEPARATION: f32 = 1.0;
