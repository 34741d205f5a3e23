//! Data-driven game balance
//!
//! Every constant the simulation reads lives here so a run can be retuned
//! from a JSON file without recompiling. Missing fields fall back to the
//! classic CircleHell values.

use std::f32::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a collision does to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitPolicy {
    /// Clear every arc and zero the score, keep playing
    #[default]
    Reset,
    /// Stop the run until a restart is requested
    GameOver,
}

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("tuning value `{name}` must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("min_radius ({min}) must be below spawn_radius ({spawn})")]
    EvictionUnreachable { min: f32, spawn: f32 },
    #[error("arc_points must be at least 2")]
    TooFewPoints,
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game balance constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Points in each arc's triangle strip
    pub arc_points: usize,
    /// Seconds between arc spawns
    pub spawn_interval: f32,
    /// Radius every new arc starts at
    pub spawn_radius: f32,
    /// Radial thickness of new arcs
    pub arc_depth: f32,
    /// Radius lost by every arc each tick
    pub decay_speed: f32,
    /// Oldest arc is evicted (and scored) once its radius drops below this
    pub min_radius: f32,
    /// Fixed radius of the ship's orbit
    pub orbit_radius: f32,
    /// Angular velocity added per tick while a direction is held
    pub ship_force: f32,
    /// Angular speed cap (radians per tick)
    pub ship_max_speed: f32,
    pub hit_policy: HitPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arc_points: 100,
            spawn_interval: 2.0,
            spawn_radius: 800.0,
            arc_depth: 50.0,
            decay_speed: 2.0,
            min_radius: 5.0,
            orbit_radius: 220.0,
            ship_force: 0.01,
            ship_max_speed: 4.0 * PI / 60.0,
            hit_policy: HitPolicy::Reset,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning: Tuning = serde_json::from_str(&json)?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check every value the simulation divides by, decays with, or compares against
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("spawn_interval", self.spawn_interval),
            ("spawn_radius", self.spawn_radius),
            ("arc_depth", self.arc_depth),
            ("decay_speed", self.decay_speed),
            ("min_radius", self.min_radius),
            ("orbit_radius", self.orbit_radius),
            ("ship_force", self.ship_force),
            ("ship_max_speed", self.ship_max_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { name, value });
            }
        }
        if self.min_radius >= self.spawn_radius {
            return Err(TuningError::EvictionUnreachable {
                min: self.min_radius,
                spawn: self.spawn_radius,
            });
        }
        if self.arc_points < 2 {
            return Err(TuningError::TooFewPoints);
        }
        Ok(())
    }

    /// Ticks an arc needs to go from spawn to eviction
    pub fn arc_lifetime_ticks(&self) -> u32 {
        ((self.spawn_radius - self.min_radius) / self.decay_speed).floor() as u32 + 1
    }
}
