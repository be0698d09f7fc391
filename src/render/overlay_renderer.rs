//! Konstruktions-Overlay: Sehnen und Kontrollpolygon.

use super::types::RenderContext;
use crate::shared::RenderScene;

/// Zeichnet Konstruktionssehnen (grau) und das Kontrollpolygon (blau).
pub(crate) fn render_construction(ctx: &RenderContext<'_>, scene: &RenderScene) {
    if !scene.display.construction {
        return;
    }

    let chord = ctx.stroke(ctx.options.thin_line_width, ctx.options.construction_color);
    for &(a, b) in &scene.construction {
        ctx.painter.line_segment([ctx.to_screen(a), ctx.to_screen(b)], chord);
    }

    let hull = ctx.stroke(ctx.options.hull_width, ctx.options.hull_color);
    for &(a, b) in &scene.hull {
        ctx.painter.line_segment([ctx.to_screen(a), ctx.to_screen(b)], hull);
    }
}
