//! The player's ship, pinned to a fixed orbit
//!
//! Only the angle changes. Physics run per tick, not per second, so the
//! feel is tied to the 60 Hz simulation rate.

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::consts::SHIP_START_ANGLE;
use crate::wrap_angle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Position on the orbit (radians, [0, 2π))
    pub angle: f32,
    /// Signed angular velocity (radians per tick)
    pub angular_vel: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            angle: SHIP_START_ANGLE,
            angular_vel: 0.0,
        }
    }
}

impl Ship {
    /// Advance one tick
    ///
    /// Left pushes counter-clockwise, right clockwise. The speed cap is applied
    /// before drag, and drag (half the force) runs every tick whether or not a
    /// key is held, so a held key settles at `max_speed - force / 2`.
    pub fn tick(&mut self, left: bool, right: bool, force: f32, max_speed: f32) {
        if left {
            self.angular_vel += force;
        }
        if right {
            self.angular_vel -= force;
        }

        if self.angular_vel.abs() > max_speed {
            self.angular_vel = max_speed.copysign(self.angular_vel);
        }

        let drag = force / 2.0;
        if self.angular_vel > 0.0 {
            self.angular_vel = (self.angular_vel - drag).max(0.0);
        } else if self.angular_vel < 0.0 {
            self.angular_vel = (self.angular_vel + drag).min(0.0);
        }

        self.angle = wrap_angle(self.angle + TAU + self.angular_vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const FORCE: f32 = 0.01;
    const MAX: f32 = 4.0 * PI / 60.0;

    #[test]
    fn test_left_is_counter_clockwise() {
        let mut ship = Ship::default();
        let start = ship.angle;
        ship.tick(true, false, FORCE, MAX);
        assert!((ship.angular_vel - FORCE / 2.0).abs() < 1e-6);
        assert!(ship.angle > start);

        let mut ship = Ship::default();
        ship.tick(false, true, FORCE, MAX);
        assert!((ship.angular_vel + FORCE / 2.0).abs() < 1e-6);
        assert!(ship.angle < start);
    }

    #[test]
    fn test_both_keys_cancel() {
        let mut ship = Ship::default();
        ship.tick(true, true, FORCE, MAX);
        assert_eq!(ship.angular_vel, 0.0);
    }

    #[test]
    fn test_drag_stops_without_overshoot() {
        let mut ship = Ship {
            angle: 1.0,
            angular_vel: 0.003,
        };
        ship.tick(false, false, FORCE, MAX);
        assert_eq!(ship.angular_vel, 0.0);

        let mut ship = Ship {
            angle: 1.0,
            angular_vel: -0.003,
        };
        ship.tick(false, false, FORCE, MAX);
        assert_eq!(ship.angular_vel, 0.0);
    }

    #[test]
    fn test_held_key_settles_below_cap() {
        let mut ship = Ship::default();
        for _ in 0..200 {
            ship.tick(true, false, FORCE, MAX);
        }
        assert!((ship.angular_vel - (MAX - FORCE / 2.0)).abs() < 1e-5);
    }

    #[test]
    fn test_angle_wraps_forward_and_backward() {
        let mut ship = Ship {
            angle: TAU - 0.001,
            angular_vel: MAX,
        };
        ship.tick(false, false, FORCE, MAX);
        assert!(ship.angle < 0.3);

        let mut ship = Ship {
            angle: 0.001,
            angular_vel: -MAX,
        };
        ship.tick(false, false, FORCE, MAX);
        assert!(ship.angle > TAU - 0.3 && ship.angle < TAU);
    }

    proptest! {
        #[test]
        fn prop_velocity_clamped(inputs in prop::collection::vec((any::<bool>(), any::<bool>()), 1..300)) {
            let mut ship = Ship::default();
            for (left, right) in inputs {
                ship.tick(left, right, FORCE, MAX);
                prop_assert!(ship.angular_vel.abs() <= MAX);
            }
        }

        #[test]
        fn prop_angle_in_range(angle in 0.0f32..TAU, vel in -MAX..=MAX, left: bool, right: bool) {
            let mut ship = Ship { angle, angular_vel: vel };
            ship.tick(left, right, FORCE, MAX);
            prop_assert!(ship.angle >= 0.0 && ship.angle < TAU);
        }
    }
}
