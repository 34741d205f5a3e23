//! High score leaderboard system
//!
//! A run ends whenever an arc hits the ship. The best runs are kept, top 10,
//! and persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

#[derive(Error, Debug)]
pub enum ScoresError {
    #[error("failed to access high score file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed high score file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Arcs survived
    pub score: u64,
    /// Simulation tick the run ended on
    pub tick: u64,
    /// Seed of the game the run belonged to
    pub seed: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Index a score would be inserted at, if it makes the board
    ///
    /// Sorted descending by score; ties go after the earlier run.
    fn slot(&self, score: u64) -> Option<usize> {
        let pos = self.entries.partition_point(|e| e.score >= score);
        (score > 0 && pos < MAX_HIGH_SCORES).then_some(pos)
    }

    pub fn qualifies(&self, score: u64) -> bool {
        self.slot(score).is_some()
    }

    /// Record a finished run, returning its 1-indexed rank if it made the board
    pub fn add_score(&mut self, score: u64, tick: u64, seed: u64) -> Option<usize> {
        let pos = self.slot(score)?;
        self.entries.insert(pos, HighScoreEntry { score, tick, seed });
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores, starting fresh if the file does not exist yet
    pub fn load(path: &Path) -> Result<Self, ScoresError> {
        if !path.exists() {
            log::info!("No high scores at {}, starting fresh", path.display());
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path)?;
        let mut scores: HighScores = serde_json::from_str(&json)?;
        scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
        scores.entries.truncate(MAX_HIGH_SCORES);
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    pub fn save(&self, path: &Path) -> Result<(), ScoresError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
