//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (newest arc first)
//! - No rendering or platform dependencies

pub mod arc;
pub mod collision;
pub mod ship;
pub mod state;
pub mod store;
pub mod tick;

pub use arc::Arc;
pub use collision::{check_hit, ship_arc_hit};
pub use ship::Ship;
pub use state::{GameEvent, GamePhase, GameState};
pub use store::{ArcStore, SpawnError};
pub use tick::{TickInput, spawn_arc, tick};
