//! Hazard arc geometry
//!
//! An arc is an annular band in polar space:
//! - offset: start angle (radians, [0, 2π))
//! - length: angular span, measured counter-clockwise from offset
//! - radius: inner edge of the band (shrinks every tick)
//! - depth: radial thickness (band is [radius, radius + depth))

use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::wrap_angle;

/// A shrinking hazard band the ship must dodge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// Creation order within its store
    pub id: u32,
    /// Start angle (radians, [0, 2π))
    pub offset: f32,
    /// Angular span (radians)
    pub length: f32,
    /// Inner radius of the band
    pub radius: f32,
    /// Radial thickness
    pub depth: f32,
}

impl Arc {
    pub fn new(id: u32, offset: f32, length: f32, radius: f32, depth: f32) -> Self {
        Self {
            id,
            offset: wrap_angle(offset),
            length,
            radius,
            depth,
        }
    }

    /// Outer radius of the band
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.depth
    }

    /// Whether a circle of radius `r` lies in the band (closed-open)
    #[inline]
    pub fn band_contains(&self, r: f32) -> bool {
        self.radius <= r && r < self.outer_radius()
    }

    /// Whether the span crosses the 0/2π seam
    #[inline]
    pub fn wraps(&self) -> bool {
        self.offset + self.length > TAU
    }

    /// End angle, wrapped into [0, 2π)
    #[inline]
    pub fn end(&self) -> f32 {
        wrap_angle(self.offset + self.length)
    }

    /// Whether an angle in [0, 2π) falls inside the angular span
    ///
    /// Edges are exclusive: a ship sitting exactly on an arc's start or end
    /// angle slips past it.
    pub fn contains_angle(&self, theta: f32) -> bool {
        if self.wraps() {
            // Covers [offset, 2π) ∪ [0, end)
            theta > self.offset || theta < self.end()
        } else {
            self.offset < theta && theta < self.offset + self.length
        }
    }

    /// Centre of the uncovered gap, the safest angle to sit at
    pub fn gap_center(&self) -> f32 {
        let gap = TAU - self.length;
        wrap_angle(self.offset + self.length + gap / 2.0)
    }
}
