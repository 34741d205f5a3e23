//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const ARC_OUTER: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ARC_INNER: [f32; 4] = [0.5, 1.0, 0.5, 1.0];
    pub const SHIP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
