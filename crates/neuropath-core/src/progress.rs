//! Read-only views for the logs & progress screen.
//!
//! Unlike the exercise and game screens, which only ever write "today",
//! the log viewer can look at any day.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::date_key::DateKey;
use crate::error::ValidationError;
use crate::exercise::Exercise;
use crate::exercise_log::{CompletionLog, ExerciseLogRepository};
use crate::game_score::{GameScoreRepository, ScoreLog};
use crate::storage::KeyValueStore;

/// Longest span, in days, a single history request may cover.
pub const MAX_HISTORY_DAYS: u32 = 3660;

/// Completion state of one exercise on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseStatus {
    pub exercise: Exercise,
    pub completed: bool,
}

/// Everything the log viewer shows for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: DateKey,
    /// `None` when nothing was logged that day; otherwise every catalog
    /// exercise in listing order.
    pub exercises: Option<Vec<ExerciseStatus>>,
    /// `None` when the day has no positive score.
    pub high_score: Option<u32>,
}

impl DaySummary {
    fn build(date: DateKey, log: &CompletionLog, scores: &ScoreLog) -> Self {
        let exercises = log.day(&date).map(|day| {
            Exercise::ALL
                .into_iter()
                .map(|exercise| ExerciseStatus {
                    exercise,
                    completed: day.get(exercise.name()) == Some(&true),
                })
                .collect()
        });
        let high_score = Some(scores.get(&date)).filter(|score| *score > 0);
        Self {
            date,
            exercises,
            high_score,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.exercises
            .as_ref()
            .map(|list| list.iter().filter(|s| s.completed).count())
            .unwrap_or(0)
    }

    /// Nothing logged and no score.
    pub fn is_empty(&self) -> bool {
        self.exercises.is_none() && self.high_score.is_none()
    }
}

/// Joins the completion log and the score log by date key.
pub struct ProgressReport<S> {
    exercises: ExerciseLogRepository<S>,
    scores: GameScoreRepository<S>,
}

impl<S: KeyValueStore + Copy> ProgressReport<S> {
    pub fn new(store: S) -> Self {
        Self {
            exercises: ExerciseLogRepository::new(store),
            scores: GameScoreRepository::new(store),
        }
    }
}

impl<S: KeyValueStore> ProgressReport<S> {
    pub fn day(&self, date: &DateKey) -> DaySummary {
        DaySummary::build(
            date.clone(),
            &self.exercises.load_all(),
            &self.scores.load_all(),
        )
    }

    /// One summary per day in `from..=to`, newest first.
    ///
    /// Ranges longer than [`MAX_HISTORY_DAYS`] are rejected.
    pub fn history(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<DaySummary>, ValidationError> {
        if to < from {
            return Err(ValidationError::InvalidDateRange {
                from: DateKey::format(from).to_string(),
                to: DateKey::format(to).to_string(),
            });
        }
        if (to - from).num_days() >= i64::from(MAX_HISTORY_DAYS) {
            return Err(too_many_days());
        }

        let log = self.exercises.load_all();
        let scores = self.scores.load_all();
        let days = (to - from).num_days();
        Ok((0..=days)
            .map(|offset| DaySummary::build(DateKey::format(to - Duration::days(offset)), &log, &scores))
            .collect())
    }

    /// The `days` days ending at `end`, newest first. Zero is treated as one.
    pub fn recent(&self, end: NaiveDate, days: u32) -> Result<Vec<DaySummary>, ValidationError> {
        if days > MAX_HISTORY_DAYS {
            return Err(too_many_days());
        }
        let span = i64::from(days.max(1)) - 1;
        let from = end
            .checked_sub_signed(Duration::days(span))
            .ok_or_else(too_many_days)?;
        self.history(from, end)
    }
}

fn too_many_days() -> ValidationError {
    ValidationError::InvalidValue {
        field: "days".to_string(),
        message: format!("history covers at most {MAX_HISTORY_DAYS} days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unlogged_day_is_empty() {
        let store = MemoryStore::new();
        let report = ProgressReport::new(&store);
        let summary = report.day(&DateKey::format(ymd(2024, 6, 1)));
        assert!(summary.is_empty());
        assert_eq!(summary.completed_count(), 0);
    }

    #[test]
    fn logged_day_lists_every_exercise_in_order() {
        let store = MemoryStore::new();
        let day = DateKey::format(ymd(2024, 6, 1));
        ExerciseLogRepository::new(&store)
            .set_completed(&day, Exercise::SensoryTouch, true)
            .unwrap();
        GameScoreRepository::new(&store).record_if_higher(&day, 9).unwrap();

        let summary = ProgressReport::new(&store).day(&day);
        let statuses = summary.exercises.clone().unwrap();
        assert_eq!(statuses.len(), 4);
        assert_eq!(statuses[0].exercise, Exercise::Breathing);
        assert!(!statuses[0].completed);
        assert!(statuses[2].completed);
        assert_eq!(summary.high_score, Some(9));
        assert_eq!(summary.completed_count(), 1);
    }

    #[test]
    fn explicit_false_day_still_counts_as_logged() {
        let store = MemoryStore::new();
        let day = DateKey::format(ymd(2024, 6, 1));
        ExerciseLogRepository::new(&store)
            .set_completed(&day, Exercise::Breathing, false)
            .unwrap();
        let summary = ProgressReport::new(&store).day(&day);
        assert!(summary.exercises.is_some());
        assert_eq!(summary.completed_count(), 0);
    }

    #[test]
    fn history_is_newest_first_and_inclusive() {
        let store = MemoryStore::new();
        let report = ProgressReport::new(&store);
        let days = report.history(ymd(2024, 2, 27), ymd(2024, 3, 1)).unwrap();
        let keys: Vec<_> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(keys, ["2024-03-01", "2024-02-29", "2024-02-28", "2024-02-27"]);
    }

    #[test]
    fn inverted_history_range_is_rejected() {
        let store = MemoryStore::new();
        let report = ProgressReport::new(&store);
        assert!(report.history(ymd(2024, 3, 2), ymd(2024, 3, 1)).is_err());
    }

    #[test]
    fn recent_covers_requested_span() {
        let store = MemoryStore::new();
        let report = ProgressReport::new(&store);
        assert_eq!(report.recent(ymd(2024, 6, 7), 7).unwrap().len(), 7);
        assert_eq!(report.recent(ymd(2024, 6, 7), 0).unwrap().len(), 1);
        assert_eq!(
            report.recent(ymd(2024, 6, 7), MAX_HISTORY_DAYS).unwrap().len(),
            MAX_HISTORY_DAYS as usize
        );
    }

    #[test]
    fn oversized_spans_are_rejected() {
        let store = MemoryStore::new();
        let report = ProgressReport::new(&store);
        assert!(report.recent(ymd(2024, 6, 7), MAX_HISTORY_DAYS + 1).is_err());
        assert!(report.recent(ymd(2024, 6, 7), u32::MAX).is_err());
        assert!(report.history(ymd(1900, 1, 1), ymd(2024, 6, 7)).is_err());
    }

    #[test]
    fn recent_near_the_calendar_floor_does_not_panic() {
        let store = MemoryStore::new();
        let report = ProgressReport::new(&store);
        assert!(report.recent(NaiveDate::MIN, 2).is_err());
        assert_eq!(report.recent(NaiveDate::MIN, 1).unwrap().len(), 1);
    }
}
