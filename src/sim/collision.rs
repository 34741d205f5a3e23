//! Ship versus arc collision
//!
//! The ship is treated as a point on its orbit circle. An arc hits it when
//! the orbit radius lies in the arc's band and the ship angle lies in the
//! arc's angular span. Arc counts stay in single digits, so every tick
//! re-tests every arc.

use super::arc::Arc;

/// Whether a single arc covers the ship's position
#[inline]
pub fn ship_arc_hit(ship_angle: f32, orbit_radius: f32, arc: &Arc) -> bool {
    arc.band_contains(orbit_radius) && arc.contains_angle(ship_angle)
}

/// Whether any arc covers the ship's position
pub fn check_hit<'a>(
    ship_angle: f32,
    orbit_radius: f32,
    arcs: impl IntoIterator<Item = &'a Arc>,
) -> bool {
    arcs.into_iter().any(|arc| ship_arc_hit(ship_angle, orbit_radius, arc))
}
