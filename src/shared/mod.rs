//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod display;
pub mod options;
mod render_scene;

pub use display::{fill_color_from_seed, DisplayFlags, DisplayLayer};
pub use options::SketchOptions;
pub use render_scene::{HandleMarker, RenderScene};
