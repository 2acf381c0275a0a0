//! High score leaderboard
//!
//! Top 3 run scores, highest first, persisted as a JSON array of integers.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_HIGH_SCORES;
use crate::persistence::{KeyValueStore, load_json, save_json};

/// High score leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    entries: Vec<u64>,
}

impl HighScores {
    /// Storage key, shared with earlier browser releases of the game
    pub const STORAGE_KEY: &'static str = "spaceRidersHighscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from arbitrary scores (sorted and capped)
    pub fn from_scores(scores: impl IntoIterator<Item = u64>) -> Self {
        let mut highscores = Self {
            entries: scores.into_iter().collect(),
        };
        highscores.normalize();
        highscores
    }

    /// Scores, highest first
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    /// Add a run's score: append, sort descending, keep the top entries.
    /// Equal scores are all kept. Returns the 1-indexed rank if it made the
    /// list.
    pub fn add_score(&mut self, score: u64) -> Option<usize> {
        // Ties rank below existing equal scores
        let pos = self
            .entries
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, score);
        self.entries.truncate(MAX_HIGH_SCORES);
        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// Add a score and persist the list. Storage failures are logged; the
    /// in-memory list is updated regardless.
    pub fn record_score(&mut self, score: u64, store: &mut dyn KeyValueStore) -> Option<usize> {
        let rank = self.add_score(score);
        if let Some(rank) = rank {
            log::info!("Score {} ranked #{}", score, rank);
        }
        self.save(store);
        rank
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().copied()
    }

    /// Load high scores; missing or corrupt data yields an empty list
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json::<HighScores>(store, Self::STORAGE_KEY) {
            Ok(Some(mut scores)) => {
                scores.normalize();
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Discarding stored high scores: {}", e);
                Self::new()
            }
        }
    }

    /// Save high scores
    pub fn save(&self, store: &mut dyn KeyValueStore) {
        match save_json(store, Self::STORAGE_KEY, self) {
            Ok(()) => log::info!("High scores saved ({} entries)", self.entries.len()),
            Err(e) => log::warn!("Failed to save high scores: {}", e),
        }
    }

    fn normalize(&mut self) {
        self.entries.sort_unstable_by(|a, b| b.cmp(a));
        self.entries.truncate(MAX_HIGH_SCORES);
    }
}
