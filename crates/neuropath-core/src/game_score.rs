//! Calming flower game: daily high scores and the tap session.
//!
//! Scores are one JSON blob under [`FLOWER_GAME_SCORES_KEY`], mapping a
//! [`DateKey`] to the best tap count reached that day. A day's score only
//! ever goes up.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::{Result, ValidationError};
use crate::storage::{
    load_json_for_update, load_json_or_default, save_json, KeyValueStore, FLOWER_GAME_SCORES_KEY,
};

/// Date -> best tap count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreLog(BTreeMap<DateKey, u32>);

impl ScoreLog {
    pub fn get(&self, date: &DateKey) -> u32 {
        self.0.get(date).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, u32)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads and writes the score log through a [`KeyValueStore`].
pub struct GameScoreRepository<S> {
    store: S,
}

impl<S: KeyValueStore> GameScoreRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full score log. Missing or undecodable data yields an empty log.
    pub fn load_all(&self) -> ScoreLog {
        load_json_or_default(&self.store, FLOWER_GAME_SCORES_KEY)
    }

    /// Stored score for `date`, 0 if none.
    pub fn get_score(&self, date: &DateKey) -> u32 {
        self.load_all().get(date)
    }

    /// Store `candidate` if it beats the day's current score.
    ///
    /// Returns whether a write happened. Equal or lower candidates leave the
    /// store untouched. A failed read or write is an error, never `Ok(true)`.
    pub fn record_if_higher(&self, date: &DateKey, candidate: u32) -> Result<bool> {
        let mut scores: ScoreLog = load_json_for_update(&self.store, FLOWER_GAME_SCORES_KEY)?;
        let current = scores.get(date);
        if candidate <= current {
            return Ok(false);
        }

        scores.0.insert(date.clone(), candidate);
        save_json(&self.store, FLOWER_GAME_SCORES_KEY, &scores)?;
        tracing::debug!(%date, previous = current, score = candidate, "new daily high score");
        Ok(true)
    }
}

/// Result of one tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TapOutcome {
    /// Taps so far this session.
    pub taps: u32,
    /// High score shown to the player after this tap.
    pub high_score: u32,
    /// This tap pushed the count past the previous high score.
    pub new_best: bool,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    pub date: DateKey,
    pub taps: u32,
    pub high_score: u32,
    /// The score log was updated.
    pub recorded: bool,
}

/// One play-through of the flower grid.
///
/// Starts from the day's stored high score. Nothing is persisted until
/// [`GameSession::finish`].
#[derive(Debug, Clone)]
pub struct GameSession {
    date: DateKey,
    flowers: usize,
    taps: u32,
    high_score: u32,
}

impl GameSession {
    /// Start a session for `date` with a grid of `flowers` flowers (at
    /// least one).
    pub fn start<S: KeyValueStore>(
        repo: &GameScoreRepository<S>,
        date: DateKey,
        flowers: usize,
    ) -> Self {
        let high_score = repo.get_score(&date);
        Self {
            date,
            flowers: flowers.max(1),
            taps: 0,
            high_score,
        }
    }

    pub fn date(&self) -> &DateKey {
        &self.date
    }

    pub fn flowers(&self) -> usize {
        self.flowers
    }

    pub fn taps(&self) -> u32 {
        self.taps
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Tap the flower at `index`.
    pub fn tap(&mut self, index: usize) -> Result<TapOutcome, ValidationError> {
        if index >= self.flowers {
            return Err(ValidationError::OutOfBounds {
                collection: "flowers".to_string(),
                index,
                len: self.flowers,
            });
        }

        self.taps = self.taps.saturating_add(1);
        let new_best = self.taps > self.high_score;
        if new_best {
            self.high_score = self.taps;
        }
        Ok(TapOutcome {
            taps: self.taps,
            high_score: self.high_score,
            new_best,
        })
    }

    /// End the session, recording the tap count if it is a new daily best.
    pub fn finish<S: KeyValueStore>(self, repo: &GameScoreRepository<S>) -> Result<SessionResult> {
        let recorded = repo.record_if_higher(&self.date, self.taps)?;
        Ok(SessionResult {
            high_score: repo.get_score(&self.date),
            date: self.date,
            taps: self.taps,
            recorded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::FailingStore;
    use crate::storage::MemoryStore;

    fn key(s: &str) -> DateKey {
        DateKey::parse(s).unwrap()
    }

    #[test]
    fn empty_store_scores_zero() {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        assert_eq!(repo.get_score(&key("2024-06-01")), 0);
        assert!(repo.load_all().is_empty());
    }

    #[test]
    fn lower_score_does_not_overwrite() {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        let day = key("2024-06-01");

        assert!(repo.record_if_higher(&day, 12).unwrap());
        assert!(!repo.record_if_higher(&day, 7).unwrap());
        assert!(!repo.record_if_higher(&day, 12).unwrap());
        assert_eq!(repo.get_score(&day), 12);
    }

    #[test]
    fn zero_is_never_written() {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        assert!(!repo.record_if_higher(&key("2024-06-01"), 0).unwrap());
        assert!(store.read_value(FLOWER_GAME_SCORES_KEY).unwrap().is_none());
    }

    #[test]
    fn days_are_independent() {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        repo.record_if_higher(&key("2024-06-01"), 5).unwrap();
        repo.record_if_higher(&key("2024-06-02"), 3).unwrap();

        let raw = store.read_value(FLOWER_GAME_SCORES_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json, serde_json::json!({ "2024-06-01": 5, "2024-06-02": 3 }));
    }

    #[test]
    fn negative_stored_score_fails_open() {
        let store = MemoryStore::with_values([(FLOWER_GAME_SCORES_KEY, r#"{"2024-06-01": -4}"#)]);
        let repo = GameScoreRepository::new(&store);
        assert_eq!(repo.get_score(&key("2024-06-01")), 0);
    }

    #[test]
    fn session_tracks_new_best() {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        let day = key("2024-06-01");
        repo.record_if_higher(&day, 2).unwrap();

        let mut session = GameSession::start(&repo, day.clone(), 6);
        assert_eq!(session.high_score(), 2);

        let first = session.tap(0).unwrap();
        assert!(!first.new_best);
        let second = session.tap(5).unwrap();
        assert!(!second.new_best);
        let third = session.tap(3).unwrap();
        assert!(third.new_best);
        assert_eq!(third.high_score, 3);

        let result = session.finish(&repo).unwrap();
        assert!(result.recorded);
        assert_eq!(result.high_score, 3);
        assert_eq!(repo.get_score(&day), 3);
    }

    #[test]
    fn session_below_high_score_leaves_store_alone() {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        let day = key("2024-06-01");
        repo.record_if_higher(&day, 10).unwrap();

        let mut session = GameSession::start(&repo, day.clone(), 6);
        session.tap(1).unwrap();
        let result = session.finish(&repo).unwrap();
        assert!(!result.recorded);
        assert_eq!(result.taps, 1);
        assert_eq!(result.high_score, 10);
    }

    #[test]
    fn tap_outside_grid_is_rejected() {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        let mut session = GameSession::start(&repo, key("2024-06-01"), 6);
        assert!(session.tap(6).is_err());
        assert_eq!(session.taps(), 0);
    }

    #[test]
    fn failed_read_does_not_replace_scores() {
        let seeded = MemoryStore::with_values([(FLOWER_GAME_SCORES_KEY, r#"{"2024-05-01": 50}"#)]);
        let store = FailingStore::over(seeded, 1, false);
        let repo = GameScoreRepository::new(&store);

        assert!(repo.record_if_higher(&key("2024-06-01"), 1).is_err());
        assert_eq!(repo.get_score(&key("2024-05-01")), 50);
        assert_eq!(repo.get_score(&key("2024-06-01")), 0);
    }

    #[test]
    fn failed_write_is_returned_not_reported_as_recorded() {
        let store = FailingStore::writes();
        let repo = GameScoreRepository::new(&store);
        let result = repo.record_if_higher(&key("2024-06-01"), 9);
        assert!(result.is_err());
        assert_eq!(repo.get_score(&key("2024-06-01")), 0);
    }
}
