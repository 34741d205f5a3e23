//! Idle/demo mode - the game plays itself
//!
//! Steers the ship toward the gap of whichever arc will reach the orbit
//! next. Good enough to survive a while, not forever: arcs that overlap in
//! the band at once can leave no common gap.

use crate::angle_delta;
use crate::driver::InputSource;
use crate::sim::{Arc, GamePhase, GameState, TickInput};

/// Ticks of current velocity to look ahead when deciding to brake
const LEAD_TICKS: f32 = 12.0;
/// Angular error (radians) treated as "on target"
const DEAD_ZONE: f32 = 0.03;

#[derive(Debug, Default)]
pub struct Autopilot;

impl Autopilot {
    /// The arc that will sweep the orbit soonest (or is sweeping it now)
    pub fn threat(state: &GameState) -> Option<&Arc> {
        let orbit = state.tuning.orbit_radius;
        state
            .arcs
            .iter()
            .filter(|arc| arc.outer_radius() > orbit)
            .min_by(|a, b| a.radius.total_cmp(&b.radius))
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState, input: &mut TickInput) {
        input.left = false;
        input.right = false;

        if state.phase == GamePhase::Over {
            input.restart = true;
            return;
        }

        let Some(threat) = Self::threat(state) else {
            return;
        };

        let ship = &state.ship;
        // Where the ship will be if it coasts, relative to the gap
        let error = angle_delta(ship.angle, threat.gap_center()) - ship.angular_vel * LEAD_TICKS;
        if error > DEAD_ZONE {
            input.left = true;
        } else if error < -DEAD_ZONE {
            input.right = true;
        }
    }
}
