//! Star polygons.

use crate::types::Point;

/// Inner radius as a fraction of the outer radius.
pub const INNER_RADIUS_RATIO: f64 = 0.4;

/// Vertices of a `points`-pointed star centred at (`cx`, `cy`).
///
/// Vertices alternate between the outer `radius` and the inner radius,
/// `180 / points` degrees apart. `rotation` is measured in degrees clockwise
/// from straight up, and the first vertex is the outer tip at that angle.
pub fn star_vertices(points: u32, cx: f64, cy: f64, radius: f64, rotation: f64) -> Vec<Point> {
    let inner = radius * INNER_RADIUS_RATIO;
    let step = 180.0 / points as f64;

    (0..points as usize * 2)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { inner };
            let angle = (rotation + step * i as f64).to_radians();
            Point::new(cx + r * angle.sin(), cy - r * angle.cos())
        })
        .collect()
}
