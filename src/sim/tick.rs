//! Fixed timestep simulation tick
//!
//! Core game rules that advance the simulation deterministically. Spawning
//! runs on its own slower cadence, so it is a separate entry point.

use super::collision::check_hit;
use super::state::{GameEvent, GamePhase, GameState};
use super::store::SpawnError;
use crate::tuning::HitPolicy;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Counter-clockwise thrust held
    pub left: bool,
    /// Clockwise thrust held
    pub right: bool,
    /// Pause toggle
    pub pause: bool,
    /// Start a new run after game over
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                log::info!("Paused at score {}", state.score);
                return events;
            }
            GamePhase::Paused => state.phase = GamePhase::Running,
            GamePhase::Over => {}
        }
    }

    if state.phase == GamePhase::Over && input.restart {
        state.restart();
        events.push(GameEvent::Restarted);
        log::info!("Run restarted");
        return events;
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;
    state.elapsed += f64::from(dt);

    let tuning = &state.tuning;
    let hit_policy = tuning.hit_policy;

    state.arcs.tick(tuning.decay_speed);
    if state.arcs.evict_aged(tuning.min_radius) {
        state.score += 1;
        log::debug!("Arc cleared, score = {}", state.score);
        events.push(GameEvent::ArcCleared { score: state.score });
    }

    state
        .ship
        .tick(input.left, input.right, tuning.ship_force, tuning.ship_max_speed);

    if check_hit(state.ship.angle, tuning.orbit_radius, state.arcs.iter()) {
        let score = state.score;
        events.push(GameEvent::Hit { score });
        match hit_policy {
            HitPolicy::Reset => {
                state.reset_run();
                log::info!("Hit! Score {} reset to 0", score);
            }
            HitPolicy::GameOver => {
                state.phase = GamePhase::Over;
                log::info!("Hit! Game over with score {}", score);
            }
        }
    }

    events
}

/// Spawn a new arc at the outer edge (only while running)
pub fn spawn_arc(state: &mut GameState) -> Result<Option<GameEvent>, SpawnError> {
    if state.phase != GamePhase::Running {
        return Ok(None);
    }
    let id = state.arcs.spawn(
        &mut state.rng,
        state.tuning.spawn_radius,
        state.tuning.arc_depth,
    )?;
    log::debug!("Spawned arc {} ({} live)", id, state.arcs.len());
    Ok(Some(GameEvent::ArcSpawned { id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::arc::Arc;
    use crate::tuning::Tuning;
    use std::f32::consts::PI;

    /// Arc whose band covers the orbit and whose span covers the ship
    fn deadly_arc(state: &GameState) -> Arc {
        let angle = state.ship.angle;
        Arc::new(0, angle - 0.5, 1.0, state.tuning.orbit_radius - 10.0, 50.0)
    }

    #[test]
    fn test_tick_advances_time() {
        let mut state = GameState::new(1);
        let events = tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, 1);
        assert!((state.elapsed - f64::from(SIM_DT)).abs() < 1e-9);
    }

    #[test]
    fn test_eviction_scores() {
        let mut state = GameState::new(1);
        spawn_arc(&mut state).unwrap();
        // Park the arc's gap over the ship so it survives the crossing
        let mut arc = state.arcs.oldest().cloned().unwrap();
        state.arcs.clear();
        arc.offset = crate::wrap_angle(state.ship.angle + PI);
        arc.length = PI / 2.0;
        state.arcs.push_front(arc);

        let mut cleared = None;
        for _ in 0..state.tuning.arc_lifetime_ticks() {
            for event in tick(&mut state, &TickInput::default(), SIM_DT) {
                if let GameEvent::ArcCleared { score } = event {
                    cleared = Some(score);
                }
            }
        }
        assert_eq!(cleared, Some(1));
        assert_eq!(state.score, 1);
        assert!(state.arcs.is_empty());
    }

    #[test]
    fn test_hit_resets_run() {
        let mut state = GameState::new(1);
        state.score = 5;
        let arc = deadly_arc(&state);
        state.arcs.push_front(arc);
        let events = tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(events, vec![GameEvent::Hit { score: 5 }]);
        assert_eq!(state.score, 0);
        assert!(state.arcs.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_consecutive_resets_keep_score_zero() {
        let mut state = GameState::new(1);
        for _ in 0..2 {
            let arc = deadly_arc(&state);
            state.arcs.push_front(arc);
            let events = tick(&mut state, &TickInput::default(), SIM_DT);
            assert!(events.iter().any(|e| matches!(e, GameEvent::Hit { .. })));
            assert_eq!(state.score, 0);
            assert!(state.arcs.is_empty());
        }
    }

    #[test]
    fn test_hit_game_over_policy() {
        let tuning = Tuning {
            hit_policy: HitPolicy::GameOver,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(1, tuning);
        state.score = 3;
        let arc = deadly_arc(&state);
        state.arcs.push_front(arc);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.score, 3);

        // Frozen until restart, and spawning is suppressed
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(spawn_arc(&mut state), Ok(None));

        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &restart, SIM_DT);
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.arcs.is_empty());
    }

    #[test]
    fn test_tick_pause() {
        let mut state = GameState::new(1);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_spawn_arc_uses_tuning() {
        let mut state = GameState::new(1);
        let event = spawn_arc(&mut state).unwrap();
        assert_eq!(event, Some(GameEvent::ArcSpawned { id: 0 }));
        let arc = state.arcs.oldest().unwrap();
        assert_eq!(arc.radius, 800.0);
        assert_eq!(arc.depth, 50.0);
    }

    #[test]
    fn test_spawn_rejects_bad_depth() {
        let tuning = Tuning {
            arc_depth: -1.0,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(1, tuning);
        assert_eq!(spawn_arc(&mut state), Err(SpawnError::InvalidDepth(-1.0)));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TickInput {
                left: true,
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                right: true,
                ..Default::default()
            },
        ];

        for i in 0..600 {
            if i % 120 == 0 {
                spawn_arc(&mut state1).unwrap();
                spawn_arc(&mut state2).unwrap();
            }
            let input = &inputs[(i / 40) % inputs.len()];
            tick(&mut state1, input, SIM_DT);
            tick(&mut state2, input, SIM_DT);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.arcs.len(), state2.arcs.len());
        assert!((state1.ship.angle - state2.ship.angle).abs() < 1e-6);
    }
}
