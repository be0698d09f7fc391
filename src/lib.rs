//! Grass Blade Modeler Library.
//! Kurvenmodell, App-Layer und Rendering als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, GuideStep, InteractionState};
pub use core::{line_intersection, BladeCurve, BladeParams, GeometryError, Handle, Point, SketchCamera};
pub use shared::{DisplayFlags, DisplayLayer, RenderScene, SketchOptions};
