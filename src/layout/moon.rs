//! Crescent outlines built from two circles.
//!
//! The crescent is the outer disc minus the cutout disc, written as a single
//! path of circular arcs. No masks or `<defs>` are emitted.

use crate::types::{PathCommand, Point};

/// How the cutout relates to the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// The cutout misses the disc entirely.
    Clear,
    /// The cutout sits wholly inside the disc, leaving a ring.
    Inside,
    /// The circle outlines cross, leaving a crescent.
    Crossing,
    /// The cutout swallows the disc.
    Covered,
}

/// Classify a disc of `radius` against a cutout of `inner_radius` whose
/// centre is `distance` away.
pub fn overlap(radius: f64, inner_radius: f64, distance: f64) -> Overlap {
    if distance >= radius + inner_radius {
        Overlap::Clear
    } else if distance + radius <= inner_radius {
        Overlap::Covered
    } else if distance + inner_radius <= radius {
        Overlap::Inside
    } else {
        Overlap::Crossing
    }
}

/// Outline of the disc at (`cx`, `cy`) with the offset cutout removed.
///
/// Returns `None` when nothing of the disc remains. A cutout wholly inside
/// the disc yields two circle subpaths that must be filled even-odd.
pub fn crescent_path(
    cx: f64,
    cy: f64,
    radius: f64,
    offset_x: f64,
    offset_y: f64,
    inner_radius: f64,
) -> Option<Vec<PathCommand>> {
    let distance = offset_x.hypot(offset_y);

    match overlap(radius, inner_radius, distance) {
        Overlap::Covered => None,
        Overlap::Clear => Some(PathCommand::circle(cx, cy, radius).to_vec()),
        Overlap::Inside => {
            let mut commands = PathCommand::circle(cx, cy, radius).to_vec();
            commands.extend(PathCommand::circle(cx + offset_x, cy + offset_y, inner_radius));
            Some(commands)
        }
        Overlap::Crossing => {
            // Unit vector from the disc centre towards the cutout centre.
            let (ux, uy) = (offset_x / distance, offset_y / distance);

            // Distance along u from the disc centre to the common chord.
            let along = (distance * distance + radius * radius - inner_radius * inner_radius)
                / (2.0 * distance);
            let half_chord = (radius * radius - along * along).max(0.0).sqrt();

            let (mx, my) = (cx + along * ux, cy + along * uy);
            let start = Point::new(mx - half_chord * uy, my + half_chord * ux);
            let end = Point::new(mx + half_chord * uy, my - half_chord * ux);

            // Outer arc goes round the far side of the disc; inner arc returns
            // through the disc along the cutout's edge.
            Some(vec![
                PathCommand::MoveTo(start),
                PathCommand::Arc {
                    radius,
                    large_arc: along > 0.0,
                    sweep: true,
                    to: end,
                },
                PathCommand::Arc {
                    radius: inner_radius,
                    large_arc: along > distance,
                    sweep: false,
                    to: start,
                },
                PathCommand::Close,
            ])
        }
    }
}
