//! Breitenprofil entlang des Halms.

use std::f32::consts::PI;

/// Halbbreite je Spline-Segment: Halb-Sinus über die Länge.
///
/// In der ersten Hälfte (`2·i < n`) wird der Sinuswert zur vollen Breite hin
/// gemittelt, dadurch bleibt der Halm an der Basis breit und läuft zur Spitze aus.
/// Liefert `resolution + 1` Werte; die Spitze selbst hat implizit Breite 0.
pub fn build_width_profile(resolution: u32, max_width: f32) -> Vec<f32> {
    let n = resolution as usize;
    (0..=n)
        .map(|i| {
            let proportion = i as f32 / (n as f32 + 1.0);
            let raw = max_width * (proportion * PI).sin();
            if i * 2 < n {
                (max_width + raw) * 0.5
            } else {
                raw
            }
        })
        .collect()
}
