//! Property tests for the completion and score repositories.

use neuropath_core::{
    CompletionLog, DateKey, DayLog, Exercise, ExerciseLogRepository, GameScoreRepository,
    MemoryStore,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn date_key() -> impl Strategy<Value = DateKey> {
    (1970i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| DateKey::format(NaiveDate::from_ymd_opt(y, m, d).unwrap()))
}

fn exercise() -> impl Strategy<Value = Exercise> {
    prop::sample::select(Exercise::ALL.to_vec())
}

proptest! {
    #[test]
    fn set_completed_is_read_back(date in date_key(), ex in exercise(), value: bool) {
        let store = MemoryStore::new();
        let repo = ExerciseLogRepository::new(&store);
        repo.set_completed(&date, ex, value).unwrap();
        prop_assert_eq!(repo.is_completed(&date, ex), value);
    }

    #[test]
    fn unset_pairs_read_false(date in date_key(), ex in exercise()) {
        let store = MemoryStore::new();
        let repo = ExerciseLogRepository::new(&store);
        prop_assert!(!repo.is_completed(&date, ex));
    }

    #[test]
    fn set_completed_is_idempotent(date in date_key(), ex in exercise(), value: bool) {
        let once = MemoryStore::new();
        let twice = MemoryStore::new();
        ExerciseLogRepository::new(&once).set_completed(&date, ex, value).unwrap();
        let repo = ExerciseLogRepository::new(&twice);
        repo.set_completed(&date, ex, value).unwrap();
        repo.set_completed(&date, ex, value).unwrap();
        prop_assert_eq!(ExerciseLogRepository::new(&once).load_all(), repo.load_all());
    }

    #[test]
    fn score_is_max_regardless_of_order(date in date_key(), a in 0u32..10_000, b in 0u32..10_000) {
        let forward = MemoryStore::new();
        let repo = GameScoreRepository::new(&forward);
        repo.record_if_higher(&date, a).unwrap();
        repo.record_if_higher(&date, b).unwrap();
        prop_assert_eq!(repo.get_score(&date), a.max(b));

        let backward = MemoryStore::new();
        let repo = GameScoreRepository::new(&backward);
        repo.record_if_higher(&date, b).unwrap();
        repo.record_if_higher(&date, a).unwrap();
        prop_assert_eq!(repo.get_score(&date), a.max(b));
    }

    #[test]
    fn lower_or_equal_candidate_changes_nothing(date in date_key(), best in 1u32..10_000, lower in 0u32..10_000) {
        let store = MemoryStore::new();
        let repo = GameScoreRepository::new(&store);
        repo.record_if_higher(&date, best).unwrap();
        let candidate = lower.min(best);
        prop_assert!(!repo.record_if_higher(&date, candidate).unwrap());
        prop_assert_eq!(repo.get_score(&date), best);
    }
}

#[test]
fn completion_log_json_round_trip() {
    let day = |pairs: &[(&str, bool)]| -> DayLog {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    };
    let log: CompletionLog = [
        (
            DateKey::parse("2024-06-01").unwrap(),
            day(&[("Breathing Exercise", true), ("Eye Contact Exercise", false)]),
        ),
        (
            DateKey::parse("2024-06-02").unwrap(),
            day(&[("Stretching Exercise", true), ("Sensory Touch Exercise", true)]),
        ),
    ]
    .into_iter()
    .collect();

    let encoded = serde_json::to_string(&log).unwrap();
    let decoded: CompletionLog = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, log);
}
