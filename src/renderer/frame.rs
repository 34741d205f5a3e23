//! Per-frame scene description
//!
//! The simulation never talks to a graphics API. Once per frame the driver
//! builds a `Frame` from the game state and hands it to whatever `Renderer`
//! it was given.

use glam::Vec2;

use super::shapes::{arc_vertices, ship_triangle};
use super::vertex::Vertex;
use crate::consts::{SHIP_SIZE, VIEW_HEIGHT, VIEW_WIDTH};
use crate::sim::{GamePhase, GameState};

/// Ship pulse frequency (Hz)
const SHIP_PULSE_HZ: f64 = 2.33;

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// One triangle strip per live arc, newest first
    pub arcs: Vec<Vec<Vertex>>,
    /// Ship triangle (plain triangle list)
    pub ship: [Vertex; 3],
    /// Orthographic half extents; the view slowly breathes in and out
    pub half_extents: Vec2,
    pub score: u64,
    pub phase: GamePhase,
}

impl Frame {
    /// Build the frame for the current state
    pub fn capture(state: &GameState) -> Self {
        let t = state.elapsed;
        let arc_points = state.tuning.arc_points;

        Self {
            arcs: state
                .arcs
                .iter()
                .map(|arc| arc_vertices(arc, arc_points))
                .collect(),
            ship: ship_triangle(
                state.ship.angle,
                state.tuning.orbit_radius,
                SHIP_SIZE * ship_pulse(t),
            ),
            half_extents: view_scale(t) * Vec2::new(VIEW_WIDTH, VIEW_HEIGHT) / 2.0,
            score: state.score,
            phase: state.phase,
        }
    }

    /// Total vertex count across all strips and the ship
    pub fn vertex_count(&self) -> usize {
        self.arcs.iter().map(Vec::len).sum::<usize>() + self.ship.len()
    }

    /// Bytes a renderer uploads for this frame's vertex buffers
    pub fn upload_size(&self) -> usize {
        self.arcs
            .iter()
            .map(|strip| Vertex::as_bytes(strip).len())
            .sum::<usize>()
            + Vertex::as_bytes(&self.ship).len()
    }
}

/// Horizontal and vertical zoom factors at time `t` (seconds)
pub fn view_scale(t: f64) -> Vec2 {
    Vec2::new(
        (1.0 + (t / 3.0).cos() / 5.0) as f32,
        (1.0 + (t / 2.0).sin() / 5.0) as f32,
    )
}

/// Ship size multiplier at time `t` (seconds)
pub fn ship_pulse(t: f64) -> f32 {
    (1.0 + (t * SHIP_PULSE_HZ * std::f64::consts::TAU).sin() / 5.0) as f32
}

/// Something that can draw frames
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Renderer that only logs a summary of each frame
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        log::trace!(
            "frame {}: {} arcs, {} vertices ({} bytes), score {}, {:?}",
            self.frames,
            frame.arcs.len(),
            frame.vertex_count(),
            frame.upload_size(),
            frame.score,
            frame.phase
        );
    }
}
