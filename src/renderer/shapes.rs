//! Shape generation for 2D primitives

use glam::{Mat2, Vec2};

use super::vertex::{Vertex, colors};
use crate::polar_to_cartesian;
use crate::sim::Arc;

/// Zig-zag points tracing an annular band, for a triangle strip
///
/// Points are spaced `length / count` apart starting at angle 0, alternating
/// outer (even index) and inner (odd index) radius.
pub fn arc_strip(length: f32, count: usize, inner_radius: f32, outer_radius: f32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = length / count as f32;

    (0..count)
        .map(|i| {
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            polar_to_cartesian(r, i as f32 * step)
        })
        .collect()
}

/// Coloured triangle-strip vertices for an arc, rotated into place
pub fn arc_vertices(arc: &Arc, count: usize) -> Vec<Vertex> {
    let rotation = Mat2::from_angle(arc.offset);

    arc_strip(arc.length, count, arc.radius, arc.outer_radius())
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let p = rotation * p;
            let color = if i % 2 == 0 {
                colors::ARC_OUTER
            } else {
                colors::ARC_INNER
            };
            Vertex::new(p.x, p.y, color)
        })
        .collect()
}

/// Ship triangle in model space, nose pointing along -x
const SHIP_MODEL: [Vec2; 3] = [
    Vec2::new(-2.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
];

/// Generate vertices for the ship at its orbit position
pub fn ship_triangle(angle: f32, orbit_radius: f32, scale: f32) -> [Vertex; 3] {
    let center = polar_to_cartesian(orbit_radius, angle);
    let rotation = Mat2::from_angle(angle);

    SHIP_MODEL.map(|p| {
        let p = center + rotation * p * scale;
        Vertex::new(p.x, p.y, colors::SHIP)
    })
}
