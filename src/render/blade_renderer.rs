//! Halm-Darstellung: Füllung, Skelett-Rippen und Rückgrat.

use super::mesh::strip_indices;
use super::types::{color32, RenderContext};
use crate::shared::RenderScene;
use eframe::egui;

/// Zeichnet die gefüllte Silhouette als Dreiecksstreifen.
pub(crate) fn render_fill(ctx: &RenderContext<'_>, scene: &RenderScene) {
    if !scene.has_fill() {
        return;
    }
    let [r, g, b] = scene.fill_color;
    let color = color32([r, g, b, 255]);

    let mut mesh = egui::Mesh::default();
    for &p in &scene.outline_polygon {
        mesh.colored_vertex(ctx.to_screen(p), color);
    }
    let pairs = (scene.outline_polygon.len() - 1) / 2;
    for [a, b, c] in strip_indices(pairs) {
        mesh.add_triangle(a, b, c);
    }
    ctx.painter.add(egui::Shape::mesh(mesh));
}

/// Zeichnet die Querrippen (links ↔ rechts je Spline-Segment).
pub(crate) fn render_skeleton(ctx: &RenderContext<'_>, scene: &RenderScene) {
    if !scene.display.skeleton {
        return;
    }
    let stroke = ctx.stroke(ctx.options.thin_line_width, ctx.options.skeleton_color);
    for &(left, right) in &scene.skeleton {
        ctx.painter
            .line_segment([ctx.to_screen(left), ctx.to_screen(right)], stroke);
    }
}

/// Zeichnet die Spline-Polylinie von der Basis zur Spitze.
pub(crate) fn render_backbone(ctx: &RenderContext<'_>, scene: &RenderScene) {
    if scene.spline.len() < 2 {
        return;
    }
    let stroke = ctx.stroke(ctx.options.backbone_width, ctx.options.backbone_color);
    let points: Vec<egui::Pos2> = scene.spline.iter().map(|&p| ctx.to_screen(p)).collect();
    ctx.painter.add(egui::Shape::line(points, stroke));
}
