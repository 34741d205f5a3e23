//! Circle Hell - an orbit-dodging arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arcs, ship physics, collisions, game state)
//! - `renderer`: Frame description handed to an external renderer
//! - `driver`: Fixed-timestep scheduler with injected input and renderer
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-run leaderboard

pub mod autopilot;
pub mod driver;
pub mod highscores;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::{Driver, InputSource};
pub use highscores::HighScores;
pub use tuning::{HitPolicy, Tuning};

use glam::Vec2;
use std::f32::consts::TAU;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the arc decay rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Frame deltas above this are clamped (window drags, debugger pauses)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ship starts at the top of its orbit
    pub const SHIP_START_ANGLE: f32 = std::f32::consts::FRAC_PI_2;
    /// Base half-size of the ship triangle
    pub const SHIP_SIZE: f32 = 12.0;

    /// Viewport the original window was laid out for
    pub const VIEW_WIDTH: f32 = 1280.0;
    pub const VIEW_HEIGHT: f32 = 720.0;
}

/// Wrap an angle into [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Signed shortest angular distance from `from` to `to`, in [-π, π)
#[inline]
pub fn angle_delta(from: f32, to: f32) -> f32 {
    use std::f32::consts::PI;
    let mut delta = (to - from).rem_euclid(TAU);
    if delta >= PI {
        delta -= TAU;
    }
    delta
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-5);
        assert!((wrap_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-5);
        assert!(wrap_angle(-1e-9) < TAU);
        assert_eq!(wrap_angle(TAU), 0.0);
    }

    #[test]
    fn test_angle_delta() {
        assert!((angle_delta(0.1, 0.3) - 0.2).abs() < 1e-5);
        // Shortest way from just below 2π to just above 0 is forward
        assert!((angle_delta(TAU - 0.1, 0.1) - 0.2).abs() < 1e-5);
        assert!((angle_delta(0.1, TAU - 0.1) + 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(220.0, PI / 2.0);
        assert!(p.x.abs() < 1e-3);
        assert!((p.y - 220.0).abs() < 1e-3);
    }
}
