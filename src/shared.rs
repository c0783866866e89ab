//! Thread-safe handle to a [`Database`]
//!
//! The store, its index and the audit log must change together: a store
//! mutation without the matching index update is never observable. A single
//! mutex around the whole database makes each operation one atomic unit.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::database::Database;
use crate::error::Result;
use crate::record::{Position, Record, RecordUpdate};

/// Cloneable, lock-guarded database handle
#[derive(Clone)]
pub struct SharedDatabase {
    inner: Arc<Mutex<Database>>,
}

impl SharedDatabase {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::from_database(Database::new(config)?))
    }

    pub fn from_database(db: Database) -> Self {
        Self {
            inner: Arc::new(Mutex::new(db)),
        }
    }

    /// Run `f` with exclusive access to the database
    pub fn with<T>(&self, f: impl FnOnce(&mut Database) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    pub fn insert(&self, record: Record) -> Result<Position> {
        self.with(|db| db.insert(record))
    }

    pub fn query(&self, id: i32) -> Result<Record> {
        self.with(|db| db.query(id))
    }

    pub fn update(&self, id: i32, update: &RecordUpdate) -> Result<Record> {
        self.with(|db| db.update(id, update))
    }

    pub fn delete(&self, id: i32, confirmed: bool) -> Result<Option<Record>> {
        self.with(|db| db.delete(id, confirmed))
    }

    pub fn len(&self) -> usize {
        self.with(|db| db.store().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
