//! In-process key-value store.

use std::collections::HashMap;
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::{DatabaseError, Result};

/// Map-backed store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw values, e.g. to simulate corrupt data.
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: Mutex::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn read_value(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| DatabaseError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn write_value(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| DatabaseError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
