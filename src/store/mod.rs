//! Record Store Module
//!
//! Ordered, capacity-bounded sequence of student records with an ID index.
//!
//! ## Responsibilities
//! - Hold records in insertion order (or the order of the last sort)
//! - Reject duplicate IDs and inserts beyond capacity
//! - Stable removal on delete
//! - Keep the [`IdIndex`] consistent before every method returns
//!
//! ## Index Consistency
//! Every method that changes which IDs exist or where they sit updates the
//! index before returning:
//!
//! ```text
//!   insert  ──► index.put(id, len)
//!   delete  ──► index.rebuild()      (positions after the hole shift down)
//!   sort    ──► index.rebuild()
//!   load    ──► index.rebuild()
//! ```

mod sort;
mod summary;

pub use sort::{SortField, SortOrder};
pub use summary::Summary;

use crate::config::{Config, OverflowPolicy};
use crate::error::{DbError, Result};
use crate::index::IdIndex;
use crate::record::{Position, Record, RecordUpdate};

/// Outcome of [`Store::load`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records now in the store
    pub loaded: usize,

    /// Records dropped because the store was full
    pub truncated: usize,

    /// Records dropped because their ID appeared earlier in the input
    pub duplicates: usize,
}

/// In-memory student records plus their ID index
#[derive(Debug, Clone)]
pub struct Store {
    records: Vec<Record>,
    index: IdIndex,
    capacity: usize,
    text_limit: usize,
    overflow_policy: OverflowPolicy,
}

impl Store {
    /// Create an empty store sized from `config`
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            records: Vec::with_capacity(config.capacity),
            index: IdIndex::new(config.index_slots),
            capacity: config.capacity,
            text_limit: config.text_limit,
            overflow_policy: config.overflow_policy,
        })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace the whole contents with `records`
    pub fn load(&mut self, records: Vec<Record>) -> Result<LoadReport> {
        let offered = records.len();
        let mut report = LoadReport::default();
        let mut kept: Vec<Record> = Vec::with_capacity(self.capacity.min(offered));
        let mut seen = IdIndex::new(self.index.slot_count());

        for record in records {
            if seen.contains(record.id) {
                tracing::warn!("Dropping duplicate ID {} from loaded records", record.id);
                report.duplicates += 1;
                continue;
            }
            if kept.len() == self.capacity {
                report.truncated += 1;
                continue;
            }
            seen.put(record.id, kept.len())?;
            kept.push(record.bounded(self.text_limit));
        }

        if report.truncated > 0 {
            if self.overflow_policy == OverflowPolicy::Reject {
                return Err(DbError::CapacityExceeded {
                    capacity: self.capacity,
                    offered,
                });
            }
            tracing::warn!(
                "Store capacity {} reached, {} records dropped",
                self.capacity,
                report.truncated
            );
        }

        self.records = kept;
        self.index = seen;
        report.loaded = self.records.len();
        Ok(report)
    }

    /// Append a new record, returning its position
    pub fn insert(&mut self, record: Record) -> Result<Position> {
        if self.contains_checked(record.id)? {
            return Err(DbError::DuplicateId(record.id));
        }
        if self.is_full() {
            return Err(DbError::Full {
                capacity: self.capacity,
            });
        }

        let pos = self.records.len();
        self.index.put(record.id, pos)?;
        self.records.push(record.bounded(self.text_limit));
        Ok(pos)
    }

    /// Apply a partial update, returning the before and after snapshots
    pub fn update(&mut self, id: i32, update: &RecordUpdate) -> Result<(Record, Record)> {
        let pos = self.find_by_id(id).ok_or(DbError::NotFound(id))?;
        let record = &mut self.records[pos];

        let before = record.clone();
        update.apply(record, self.text_limit);
        Ok((before, record.clone()))
    }

    /// Remove the record with `id`, keeping the order of the others
    pub fn delete(&mut self, id: i32) -> Result<Record> {
        let pos = self.find_by_id(id).ok_or(DbError::NotFound(id))?;
        let removed = self.records.remove(pos);
        self.index.rebuild(&self.records)?;
        Ok(removed)
    }

    /// Reorder all records by `field`
    ///
    /// Descending is an ascending stable sort followed by a reversal of the
    /// whole sequence, so tied records come out in reverse insertion order.
    pub fn sort_by(&mut self, field: SortField, order: SortOrder) -> Result<()> {
        sort::sort_records(&mut self.records, field, order);
        self.index.rebuild(&self.records)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Position of `id`, if present
    pub fn find_by_id(&self, id: i32) -> Option<Position> {
        self.index.get(id)
    }

    /// Record with `id`, if present
    pub fn get(&self, id: i32) -> Option<&Record> {
        self.find_by_id(id).map(|pos| &self.records[pos])
    }

    pub fn contains(&self, id: i32) -> bool {
        self.index.contains(id)
    }

    /// Count, average, highest and lowest mark, or `None` when empty
    pub fn summary(&self) -> Option<Summary> {
        Summary::of(&self.records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    pub fn index(&self) -> &IdIndex {
        &self.index
    }

    // Index first; the scan only runs when the index says "absent".
    fn contains_checked(&mut self, id: i32) -> Result<bool> {
        if self.index.contains(id) {
            return Ok(true);
        }
        if self.records.iter().any(|r| r.id == id) {
            tracing::warn!("Index missed live ID {}, rebuilding", id);
            self.index.rebuild(&self.records)?;
            return Ok(true);
        }
        Ok(false)
    }
}
