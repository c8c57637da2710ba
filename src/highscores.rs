//! Best-distance leaderboard
//!
//! Tracks the top 10 distances reached in the platformer, persisted to a
//! JSON file at a path the host supplies. Timestamps come from the host;
//! the library itself never reads a clock.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Distance reached, in whole world units
    pub distance: u64,
    /// Session seed, so a run can be reproduced
    pub seed: u64,
    /// Unix timestamp (ms) when achieved, supplied by the host
    pub timestamp: f64,
}

/// The leaderboard itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check whether a distance qualifies for the board
    pub fn qualifies(&self, distance: u64) -> bool {
        if distance == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Beat the lowest entry or stay off the board
        self.entries
            .last()
            .map(|e| distance > e.distance)
            .unwrap_or(true)
    }

    /// The rank a distance would achieve (1-indexed), None if it doesn't
    /// qualify
    pub fn potential_rank(&self, distance: u64) -> Option<usize> {
        if !self.qualifies(distance) {
            return None;
        }
        let rank = self.entries.iter().position(|e| distance > e.distance);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Record a run. Returns the rank achieved (1-indexed) or None if the
    /// distance didn't qualify.
    pub fn add_score(&mut self, distance: u64, seed: u64, timestamp: f64) -> Option<usize> {
        if !self.qualifies(distance) {
            return None;
        }

        let entry = HighScoreEntry {
            distance,
            seed,
            timestamp,
        };

        // Insertion point: sorted descending by distance
        let pos = self.entries.iter().position(|e| distance > e.distance);
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

    /// The best distance so far, if any
    pub fn top_distance(&self) -> Option<u64> {
        self.entries.first().map(|e| e.distance)
    }

    /// Load the board from a JSON file, starting fresh on any failure
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("High-score file unreadable ({err}); starting fresh");
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No high scores at {}; starting fresh", path.display());
                Self::new()
            }
        }
    }

    /// Save the board to a JSON file; failures are logged, not raised
    pub fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("Could not save high scores to {}: {err}", path.display());
                } else {
                    log::info!("High scores saved ({} entries)", self.entries.len());
                }
            }
            Err(err) => log::warn!("Could not serialize high scores: {err}"),
        }
    }
}
