//! # NeuroPath Core Library
//!
//! Local progress tracking for the NeuroPath companion app: guided
//! exercises a parent works through with their child, a tap-based calming
//! game, and a log viewer over both. The CLI is a thin presentation layer
//! over this crate.
//!
//! ## Architecture
//!
//! - **Storage**: a [`KeyValueStore`] holding whole JSON values (SQLite
//!   [`Database`] or [`MemoryStore`]) plus TOML-based [`Config`]
//! - **Repositories**: whole-value read-modify-write over one store key
//!   each; reads fail open to empty/default values
//! - **Date keys**: [`DateKey`] (`YYYY-MM-DD`) is the only join key between
//!   the completion log and the score log
//!
//! ## Key Components
//!
//! - [`ExerciseLogRepository`]: per-day exercise completion flags
//! - [`GameScoreRepository`] / [`GameSession`]: daily flower game high scores
//! - [`PersonalInfoStore`]: parent/child form fields
//! - [`ProgressReport`]: per-day summaries for the log viewer

pub mod clock;
pub mod date_key;
pub mod error;
pub mod exercise;
pub mod exercise_log;
pub mod game_score;
pub mod personal_info;
pub mod progress;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_key::DateKey;
pub use error::{ConfigError, CoreError, DatabaseError, Result, ValidationError};
pub use exercise::{Exercise, ExerciseDetail};
pub use exercise_log::{CompletionLog, DayLog, ExerciseLogRepository};
pub use game_score::{GameScoreRepository, GameSession, ScoreLog, SessionResult, TapOutcome};
pub use personal_info::{Gender, PersonalInfo, PersonalInfoStore, AGE_RANGE};
pub use progress::{DaySummary, ExerciseStatus, ProgressReport, MAX_HISTORY_DAYS};
pub use storage::{Config, Database, KeyValueStore, MemoryStore};
