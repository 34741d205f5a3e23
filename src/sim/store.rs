//! Ordered collection of live arcs
//!
//! Newest arcs sit at the front, oldest at the back. Arcs spawn at the same
//! radius and decay at the same rate, so the back arc is always the one
//! closest to the centre and the only candidate for eviction.

use std::collections::VecDeque;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::arc::Arc;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpawnError {
    #[error("arc radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    #[error("arc depth must be finite and positive, got {0}")]
    InvalidDepth(f32),
    #[error("spawn interval must be finite and positive, got {0}")]
    InvalidInterval(f32),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArcStore {
    arcs: VecDeque<Arc>,
    next_id: u32,
}

impl ArcStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a randomly placed arc at the outer edge
    ///
    /// Offset is uniform in [0, 2π), length uniform in [π/2, 3π/2).
    /// Returns the new arc's id.
    pub fn spawn<R: Rng>(
        &mut self,
        rng: &mut R,
        outer_radius: f32,
        depth: f32,
    ) -> Result<u32, SpawnError> {
        if !(outer_radius.is_finite() && outer_radius > 0.0) {
            return Err(SpawnError::InvalidRadius(outer_radius));
        }
        if !(depth.is_finite() && depth > 0.0) {
            return Err(SpawnError::InvalidDepth(depth));
        }

        let offset = rng.random_range(0.0..TAU);
        let length = rng.random_range(FRAC_PI_2..PI + FRAC_PI_2);
        let id = self.next_id;
        self.push_front(Arc::new(id, offset, length, outer_radius, depth));
        Ok(id)
    }

    /// Insert an arc as the newest entry
    ///
    /// The arc is renumbered so ids keep following insertion order.
    pub fn push_front(&mut self, mut arc: Arc) {
        arc.id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.arcs.push_front(arc);
    }

    /// Shrink every arc by `decay`
    pub fn tick(&mut self, decay: f32) {
        for arc in &mut self.arcs {
            arc.radius -= decay;
        }
    }

    /// Drop the oldest arc if it has shrunk below `min_radius`
    pub fn evict_aged(&mut self, min_radius: f32) -> bool {
        match self.arcs.back() {
            Some(oldest) if oldest.radius < min_radius => {
                self.arcs.pop_back();
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.arcs.clear();
    }

    pub fn for_each(&self, visitor: impl FnMut(&Arc)) {
        self.arcs.iter().for_each(visitor);
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &Arc> {
        self.arcs.iter()
    }

    pub fn oldest(&self) -> Option<&Arc> {
        self.arcs.back()
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}
