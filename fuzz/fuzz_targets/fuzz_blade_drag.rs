#![no_main]

use glam::Vec2;
use grass_blade_modeler::{BladeCurve, BladeParams, SketchOptions};
use libfuzzer_sys::fuzz_target;

const RANGE: f32 = 2000.0;

fn coord(bytes: &[u8]) -> f32 {
    let raw = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    if raw.is_finite() {
        raw.clamp(-RANGE, RANGE)
    } else {
        0.0
    }
}

fuzz_target!(|data: &[u8]| {
    let (base, tip, length) = SketchOptions::default().seed_geometry();
    let mut curve = BladeCurve::new(base, tip, length, BladeParams::default());

    for chunk in data.chunks_exact(9) {
        let v = Vec2::new(coord(&chunk[1..5]), coord(&chunk[5..9]));
        match chunk[0] % 4 {
            0 => curve.drag_tip(v),
            1 => curve.drag_curvature(v),
            2 => curve.rebuild(BladeParams::new(chunk[1] as u32, curve.params().max_width)),
            _ => curve.rebuild(BladeParams::new(curve.params().resolution, v.x)),
        }

        let n = curve.params().resolution as usize;
        let spline = curve.spline_points();
        assert_eq!(spline.len(), n + 2);
        assert_eq!(curve.width_profile().len(), n + 1);
        assert_eq!(curve.outline_points().len(), 2 * (n + 1));
        assert_eq!(spline[0], curve.base());
        assert_eq!(spline[n + 1], curve.tip());
        assert!(spline.iter().all(|p| p.is_finite()));
        assert!(curve.outline_points().iter().all(|p| p.is_finite()));
        assert!(curve.base().distance(curve.tip()) * 0.5 <= curve.length() * (1.0 + 1e-4) + 1e-3);
    }
});
