//! High score leaderboard
//!
//! Tracks the top 10 coin totals, persisted as a bare JSON integer array
//! under a single key in the platform store.

use crate::platform::storage::KeyValueStore;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// High score leaderboard, best first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    scores: Vec<u32>,
}

impl HighScores {
    /// Storage key for the persisted list
    const STORAGE_KEY: &'static str = "cone_rush_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Scores in descending order, for the end screen
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.scores.first().copied()
    }

    /// Fold a finished session's coin total into the list.
    ///
    /// Zero never qualifies. The list stays sorted descending and capped at
    /// MAX_HIGH_SCORES. Returns the rank achieved (1-indexed) or None if the
    /// score didn't make the board.
    pub fn record(&mut self, score: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());
        if pos >= MAX_HIGH_SCORES {
            return None;
        }
        self.scores.insert(pos, score);
        self.scores.truncate(MAX_HIGH_SCORES);
        Some(pos + 1)
    }

    /// Load high scores from the store. Any failure means starting fresh.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str::<Vec<u32>>(&json) {
                Ok(mut scores) => {
                    // Persisted data is untrusted: positive values only,
                    // best first, capped
                    scores.retain(|&s| s > 0);
                    scores.sort_unstable_by(|a, b| b.cmp(a));
                    scores.truncate(MAX_HIGH_SCORES);
                    log::info!("Loaded {} high scores", scores.len());
                    return Self { scores };
                }
                Err(err) => {
                    log::warn!("High score list unreadable ({err}), starting fresh");
                    return Self::new();
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to the store. Best effort: on failure the in-memory
    /// list stays authoritative for this run.
    pub fn save(&self, store: &dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(&self.scores) {
            match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("High scores saved ({} entries)", self.scores.len()),
                Err(err) => log::warn!("Failed to persist high scores: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    fn board(scores: &[u32]) -> HighScores {
        HighScores {
            scores: scores.to_vec(),
        }
    }

    #[test]
    fn test_record_inserts_in_order() {
        let mut scores = board(&[50, 30]);
        assert_eq!(scores.record(40), Some(2));
        assert_eq!(scores.scores(), &[50, 40, 30]);
        assert_eq!(scores.top_score(), Some(50));
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = board(&[50, 30]);
        assert_eq!(scores.record(0), None);
        assert_eq!(scores.scores(), &[50, 30]);
    }

    #[test]
    fn test_board_is_capped() {
        let mut scores = board(&[100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
        // Beats the lowest entry: inserted, lowest drops
        assert_eq!(scores.record(55), Some(6));
        assert_eq!(scores.scores().len(), MAX_HIGH_SCORES);
        assert_eq!(scores.scores()[5], 55);
        assert!(!scores.scores().contains(&10));
        // Worse than every entry on a full board: rejected
        assert_eq!(scores.record(5), None);
        assert_eq!(scores.scores().len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_ties_rank_below_existing() {
        let mut scores = board(&[50, 30]);
        assert_eq!(scores.record(50), Some(2));
        assert_eq!(scores.scores(), &[50, 50, 30]);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = MemoryStore::new();
        let mut scores = HighScores::new();
        scores.record(40);
        scores.record(70);
        scores.save(&store);

        let loaded = HighScores::load(&store);
        assert_eq!(loaded.scores(), &[70, 40]);
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        assert!(HighScores::load(&store).is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let store = MemoryStore::new();
        store.set(HighScores::STORAGE_KEY, "not json").unwrap();
        assert!(HighScores::load(&store).is_empty());
    }

    #[test]
    fn test_load_normalizes_stored_list() {
        let store = MemoryStore::new();
        store
            .set(HighScores::STORAGE_KEY, "[5, 0, 30, 0, 12]")
            .unwrap();
        let loaded = HighScores::load(&store);
        assert_eq!(loaded.scores(), &[30, 12, 5]);
    }

    #[test]
    fn test_write_failure_keeps_memory_list() {
        let store = MemoryStore::new();
        store.fail_writes(true);
        let mut scores = HighScores::new();
        scores.record(25);
        scores.save(&store);

        // The write was swallowed; nothing landed in the store but the
        // in-memory list is intact
        assert!(store.get(HighScores::STORAGE_KEY).is_none());
        assert_eq!(scores.scores(), &[25]);
    }
}
