//! Core-Domänentypen: Geometrie-Primitiven, Grashalm-Kurve, Sketch-Kamera.

/// Grashalm-Kurvenmodell (Scheitel, Spline, Breitenprofil, Umriss)
pub mod blade;
pub mod camera;
pub mod geometry;

pub use blade::{BladeCurve, BladeParams, Handle};
pub use camera::SketchCamera;
pub use geometry::{line_intersection, GeometryError, Point};
