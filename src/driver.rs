//! Fixed timestep game loop driver
//!
//! Owns the game state and two accumulators: one feeds simulation ticks at
//! `SIM_DT`, the other fires arc spawns every `spawn_interval` seconds. The
//! host calls `advance` once per frame with the wall-clock delta.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::highscores::HighScores;
use crate::renderer::{Frame, Renderer};
use crate::sim::{GameEvent, GamePhase, GameState, SpawnError, TickInput, spawn_arc, tick};
use crate::tuning::{Tuning, TuningError};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Pause,
    Restart,
}

/// Source of player input, polled once per frame
pub trait InputSource {
    /// Update the held/one-shot flags for the coming ticks
    fn poll(&mut self, state: &GameState, input: &mut TickInput);
}

/// Input source that never presses anything
#[derive(Debug, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self, _state: &GameState, _input: &mut TickInput) {}
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Driver {
    pub state: GameState,
    pub input: TickInput,
    pub high_scores: HighScores,
    accumulator: f32,
    spawn_accumulator: f32,
}

impl Driver {
    /// Start a game with validated tuning
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::with_tuning(seed, tuning),
            input: TickInput::default(),
            high_scores: HighScores::new(),
            accumulator: 0.0,
            spawn_accumulator: 0.0,
        })
    }

    pub fn with_high_scores(mut self, high_scores: HighScores) -> Self {
        self.high_scores = high_scores;
        self
    }

    /// Key went down (from an event handler)
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.input.left = true,
            Key::Right => self.input.right = true,
            Key::Pause => self.input.pause = true,
            Key::Restart => self.input.restart = true,
        }
    }

    /// Key went up; one-shot keys clear themselves after a tick
    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.input.left = false,
            Key::Right => self.input.right = false,
            Key::Pause | Key::Restart => {}
        }
    }

    /// Run simulation ticks and spawns for `dt` seconds of wall time
    ///
    /// A spawn failure stops the frame early, but hits from the ticks already
    /// run are still recorded and one-shot inputs are still consumed.
    pub fn update(&mut self, dt: f32) -> Result<Vec<GameEvent>, SpawnError> {
        let dt = if !dt.is_finite() {
            log::warn!("Ignoring non-finite frame delta {}", dt);
            0.0
        } else if dt > MAX_FRAME_DT {
            log::warn!("Frame took {:.3}s, clamping to {}s", dt, MAX_FRAME_DT);
            MAX_FRAME_DT
        } else {
            dt.max(0.0)
        };
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut outcome = Ok(());
        let mut substeps = 0;
        while outcome.is_ok() && self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(&mut self.state, &self.input, SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;

            outcome = self.spawn_due(&mut events);

            // Clear one-shot inputs after processing
            self.input.pause = false;
            self.input.restart = false;
        }

        for event in &events {
            if let GameEvent::Hit { score } = *event {
                self.record_run(score);
            }
        }

        outcome.map(|()| events)
    }

    /// Fire every spawn whose interval has elapsed in simulated time
    fn spawn_due(&mut self, events: &mut Vec<GameEvent>) -> Result<(), SpawnError> {
        // Spawn cadence follows simulated time, so it pauses with the game
        if self.state.phase == GamePhase::Running {
            self.spawn_accumulator += SIM_DT;
        }
        let interval = self.state.tuning.spawn_interval;
        if !(interval.is_finite() && interval > 0.0) {
            return Err(SpawnError::InvalidInterval(interval));
        }
        while self.spawn_accumulator >= interval {
            self.spawn_accumulator -= interval;
            events.extend(spawn_arc(&mut self.state)?);
        }
        Ok(())
    }

    /// Poll input, update the simulation, then draw one frame
    pub fn advance(
        &mut self,
        dt: f32,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> Result<Vec<GameEvent>, SpawnError> {
        input.poll(&self.state, &mut self.input);
        let events = self.update(dt)?;
        renderer.draw(&Frame::capture(&self.state));
        Ok(events)
    }

    /// Put the current run on the leaderboard (e.g. when the host quits)
    pub fn finish(&mut self) {
        // A run that ended in `Over` was recorded when it was hit
        if self.state.phase != GamePhase::Over {
            let score = self.state.score;
            self.record_run(score);
        }
    }

    fn record_run(&mut self, score: u64) {
        if let Some(rank) = self
            .high_scores
            .add_score(score, self.state.time_ticks, self.state.seed)
        {
            log::info!("New high score #{}: {}", rank, score);
        }
    }
}
