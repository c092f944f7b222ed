//! Shared state handed to every command: config, store, and today's key.

use chrono::NaiveDate;
use neuropath_core::{
    Clock, Config, Database, DateKey, FixedClock, KeyValueStore, MemoryStore, Result, SystemClock,
};

/// Backing store selected on the command line.
pub enum Store {
    Sqlite(Database),
    Memory(MemoryStore),
}

impl KeyValueStore for Store {
    fn read_value(&self, key: &str) -> Result<Option<String>> {
        match self {
            Store::Sqlite(db) => db.read_value(key),
            Store::Memory(mem) => mem.read_value(key),
        }
    }

    fn write_value(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Store::Sqlite(db) => db.write_value(key, value),
            Store::Memory(mem) => mem.write_value(key, value),
        }
    }
}

pub struct AppContext {
    pub config: Config,
    pub store: Store,
    today: NaiveDate,
}

impl AppContext {
    /// Open the configured database (or an empty in-memory store) and fix
    /// "today" for the rest of the run.
    pub fn open(
        config: Config,
        memory: bool,
        today: Option<NaiveDate>,
    ) -> Result<Self> {
        let store = if memory {
            Store::Memory(MemoryStore::new())
        } else {
            Store::Sqlite(Database::open(&config.storage.database_file)?)
        };
        let today = match today {
            Some(date) => FixedClock(date).today(),
            None => SystemClock.today(),
        };
        Ok(Self {
            config,
            store,
            today,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn today_key(&self) -> DateKey {
        DateKey::format(self.today)
    }
}
