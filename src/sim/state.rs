//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one owned `GameState`, so two
//! states built from the same seed and fed the same inputs stay identical.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ship::Ship;
use super::store::ArcStore;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Run ended by a collision (only under `HitPolicy::GameOver`)
    Over,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The oldest arc aged out; `score` is the new total
    ArcCleared { score: u64 },
    /// An arc touched the ship; `score` is what the run had reached
    Hit { score: u64 },
    /// A new arc entered at the outer edge
    ArcSpawned { id: u32 },
    /// A finished run was restarted
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Arc placement RNG
    pub rng: Pcg32,
    /// Score (arcs survived since the last hit)
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds
    pub elapsed: f64,
    /// Current phase
    pub phase: GamePhase,
    pub ship: Ship,
    pub arcs: ArcStore,
    /// Constants in force for this run
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
            elapsed: 0.0,
            phase: GamePhase::Running,
            ship: Ship::default(),
            arcs: ArcStore::new(),
            tuning,
        }
    }

    /// Wipe the board after a collision; the ship keeps its position
    pub fn reset_run(&mut self) {
        self.arcs.clear();
        self.score = 0;
    }

    /// Start over from `Over`: board, score and ship all return to their start
    pub fn restart(&mut self) {
        self.reset_run();
        self.ship = Ship::default();
        self.phase = GamePhase::Running;
    }
}
