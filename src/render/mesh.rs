//! Triangulierung des Umriss-Polygons als Dreiecksstreifen.

/// Dreiecks-Indizes für ein Umriss-Polygon aus `pairs` Links/Rechts-Paaren.
///
/// Polygon-Layout: `L0..L(n)`, Spitze, `R(n)..R0`. Benachbarte Rippen ergeben je
/// ein Viereck (zwei Dreiecke), die letzte Rippe schließt mit der Spitze.
/// Das Polygon ist nicht zwingend konvex, als Streifen aber immer füllbar.
pub fn strip_indices(pairs: usize) -> Vec<[u32; 3]> {
    if pairs == 0 {
        return Vec::new();
    }
    let len = 2 * pairs + 1;
    let tip = pairs as u32;
    let left = |i: usize| i as u32;
    let right = |i: usize| (len - 1 - i) as u32;

    let mut triangles = Vec::with_capacity(2 * pairs - 1);
    for i in 0..pairs - 1 {
        triangles.push([left(i), right(i), left(i + 1)]);
        triangles.push([right(i), right(i + 1), left(i + 1)]);
    }
    triangles.push([left(pairs - 1), right(pairs - 1), tip]);
    triangles
}
