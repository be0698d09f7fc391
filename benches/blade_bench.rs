use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use grass_blade_modeler::core::blade::MAX_RESOLUTION;
use grass_blade_modeler::{BladeCurve, BladeParams, SketchOptions};
use glam::Vec2;
use std::hint::black_box;

fn seed_curve(resolution: u32) -> BladeCurve {
    let (base, tip, length) = SketchOptions::default().seed_geometry();
    BladeCurve::new(base, tip, length, BladeParams::new(resolution, 20.0))
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("blade_rebuild");

    for &resolution in &[1u32, 5, MAX_RESOLUTION] {
        let mut curve = seed_curve(resolution);
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &resolution,
            |b, &resolution| {
                b.iter(|| {
                    curve.rebuild(BladeParams::new(black_box(resolution), 20.0));
                    black_box(curve.outline_points().len())
                })
            },
        );
    }

    group.finish();
}

fn bench_drag_gesture(c: &mut Criterion) {
    c.bench_function("drag_tip_and_curvature_max_resolution", |b| {
        let mut curve = seed_curve(MAX_RESOLUTION);
        b.iter(|| {
            for step in 0..16 {
                let wobble = if step % 2 == 0 { 1.5 } else { -1.5 };
                curve.drag_tip(black_box(Vec2::new(wobble, 0.5)));
                let pointer = curve.apex() + Vec2::new(wobble, -wobble);
                curve.drag_curvature(black_box(pointer));
            }
            black_box(curve.spline_points().len())
        })
    });
}

criterion_group!(benches, bench_rebuild, bench_drag_gesture);
criterion_main!(benches);
