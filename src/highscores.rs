//! High score leaderboard
//!
//! In-memory only: scores live for the process and are gone on exit.
//! Tracks the top 10 survival times.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Whole seconds survived before the run ended
    pub survival_secs: u64,
    /// Net zombies eaten when the run ended
    pub balls_eaten: u32,
}

/// High score leaderboard, sorted descending by survival time
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

    /// Check if a survival time qualifies for the leaderboard
    pub fn qualifies(&self, survival_secs: u64) -> bool {
        if survival_secs == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries
            .last()
            .map(|e| survival_secs > e.survival_secs)
            .unwrap_or(true)
    }

    /// Add a run to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, survival_secs: u64, balls_eaten: u32) -> Option<usize> {
        if !self.qualifies(survival_secs) {
            return None;
        }

        let entry = HighScoreEntry {
            survival_secs,
            balls_eaten,
        };

        // Find insertion point (sorted descending by survival time)
        let pos = self
            .entries
            .iter()
            .position(|e| survival_secs > e.survival_secs);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the best survival time (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.survival_secs)
    }
}
