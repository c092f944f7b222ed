//! Per-day exercise completion log.
//!
//! The whole log is one JSON blob under [`DAILY_LOGS_KEY`]:
//!
//! ```json
//! { "2024-06-01": { "Breathing Exercise": true, "Eye Contact Exercise": false } }
//! ```
//!
//! A day's map does not have to mention every exercise. An absent entry
//! means "not recorded", which [`CompletionLog`] keeps distinct from an
//! explicit `false`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::error::Result;
use crate::exercise::Exercise;
use crate::storage::{
    load_json_for_update, load_json_or_default, save_json, KeyValueStore, DAILY_LOGS_KEY,
};

/// Exercise name -> completed flag for one day.
pub type DayLog = BTreeMap<String, bool>;

/// Date -> day log, for every recorded day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLog(BTreeMap<DateKey, DayLog>);

impl CompletionLog {
    pub fn day(&self, date: &DateKey) -> Option<&DayLog> {
        self.0.get(date)
    }

    /// Stored flag, `None` when the day or the exercise was never recorded.
    pub fn entry(&self, date: &DateKey, exercise: Exercise) -> Option<bool> {
        self.0.get(date)?.get(exercise.name()).copied()
    }

    pub fn is_completed(&self, date: &DateKey, exercise: Exercise) -> bool {
        self.entry(date, exercise).unwrap_or(false)
    }

    /// Set one flag, creating the day's map if needed.
    pub fn set(&mut self, date: DateKey, exercise: Exercise, completed: bool) {
        self.0
            .entry(date)
            .or_default()
            .insert(exercise.name().to_string(), completed);
    }

    /// Days in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &DayLog)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(DateKey, DayLog)> for CompletionLog {
    fn from_iter<I: IntoIterator<Item = (DateKey, DayLog)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reads and writes the completion log through a [`KeyValueStore`].
///
/// Every mutation re-reads the whole log, changes one flag and overwrites
/// the whole blob. Two writers interleaving their read and write lose one
/// of the updates; callers run on a single interaction thread.
pub struct ExerciseLogRepository<S> {
    store: S,
}

impl<S: KeyValueStore> ExerciseLogRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full log. Missing or undecodable data yields an empty log.
    pub fn load_all(&self) -> CompletionLog {
        load_json_or_default(&self.store, DAILY_LOGS_KEY)
    }

    /// `false` when either the day or the exercise is absent.
    pub fn is_completed(&self, date: &DateKey, exercise: Exercise) -> bool {
        self.load_all().is_completed(date, exercise)
    }

    /// The day's map as stored, `None` if nothing was recorded that day.
    pub fn day(&self, date: &DateKey) -> Option<DayLog> {
        self.load_all().day(date).cloned()
    }

    /// Record `exercise` as completed (or not) on `date`.
    ///
    /// # Errors
    /// Returns an error if the stored log cannot be read or the updated log
    /// cannot be written back. Undecodable data is still replaced.
    pub fn set_completed(&self, date: &DateKey, exercise: Exercise, completed: bool) -> Result<()> {
        let mut log: CompletionLog = load_json_for_update(&self.store, DAILY_LOGS_KEY)?;
        log.set(date.clone(), exercise, completed);
        save_json(&self.store, DAILY_LOGS_KEY, &log)?;
        tracing::debug!(%date, exercise = exercise.name(), completed, "updated completion log");
        Ok(())
    }
}
