mod config;
pub mod database;
pub mod memory;

pub use config::{Config, GameConfig, HistoryConfig, LogConfig, StorageConfig};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Persisted key holding the exercise completion log.
pub const DAILY_LOGS_KEY: &str = "dailyLogs";
/// Persisted key holding the flower game score log.
pub const FLOWER_GAME_SCORES_KEY: &str = "flowerGameScores";
pub const PARENT_NAME_KEY: &str = "parentName";
pub const CHILD_NAME_KEY: &str = "childName";
pub const GENDER_KEY: &str = "gender";
pub const AGE_KEY: &str = "age";

/// Whole-value key-value storage.
///
/// Values are loaded and saved as complete text blobs; there is no partial
/// update. Callers that read-modify-write a value are expected to run on a
/// single interaction thread.
pub trait KeyValueStore {
    /// Load the value stored under `key`, or `None` if nothing was stored.
    fn read_value(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn write_value(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read_value(&self, key: &str) -> Result<Option<String>> {
        (**self).read_value(key)
    }

    fn write_value(&self, key: &str, value: &str) -> Result<()> {
        (**self).write_value(key, value)
    }
}

/// Returns the directory holding the database and `config.toml`.
///
/// `NEUROPATH_DATA_DIR` wins when set. Otherwise `~/.config/neuropath[-dev]/`,
/// with the `-dev` suffix when `NEUROPATH_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("NEUROPATH_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("NEUROPATH_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("neuropath-dev")
            } else {
                base_dir.join("neuropath")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

/// Decode the JSON value under `key`, failing open to `T::default()`.
///
/// A missing value is silent. An unreadable or undecodable one is logged
/// and then treated as missing.
pub(crate) fn load_json_or_default<T, S>(store: &S, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    match store.read_value(key) {
        Ok(raw) => decode_or_default(key, raw),
        Err(e) => {
            tracing::warn!(key, error = %e, "read failed, using empty value");
            T::default()
        }
    }
}

/// Like [`load_json_or_default`], but a failed read is an error. Used by
/// every read-modify-write path.
pub(crate) fn load_json_for_update<T, S>(store: &S, key: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let raw = store.read_value(key)?;
    Ok(decode_or_default(key, raw))
}

fn decode_or_default<T>(key: &str, raw: Option<String>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored value is not decodable, using empty value");
            T::default()
        }
    }
}

/// Encode `value` as JSON and overwrite `key`.
pub(crate) fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: serde::Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(value)?;
    store.write_value(key, &encoded)
}
