//! Database Module
//!
//! The facade that coordinates the store, its index, the audit log, and the
//! snapshot file.
//!
//! ## Responsibilities
//! - Run each operation as `mutate store -> update index -> append audit`
//! - Audit every attempt, successful or not, in call order
//! - Load and save the snapshot file on request
//! - Time every operation for the STATS report

use std::time::{Duration, Instant};

use crate::audit::{AuditLog, AuditOp};
use crate::config::Config;
use crate::error::{DbError, Result};
use crate::record::{Position, Record, RecordUpdate};
use crate::snapshot;
use crate::stats::OpStats;
use crate::store::{LoadReport, SortField, SortOrder, Store, Summary};

/// Outcome of [`Database::open`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenReport {
    /// Store contents after the load
    pub load: LoadReport,

    /// Lines in the file that were not records (headers, blanks, bad rows)
    pub skipped_lines: usize,
}

/// Student database: store + index + audit log
///
/// All operations take `&mut self`; one operation runs to completion before
/// the next begins. Wrap in [`SharedDatabase`](crate::SharedDatabase) to
/// share between threads.
pub struct Database {
    config: Config,
    store: Store,
    audit: AuditLog,
    stats: OpStats,
}

impl Database {
    /// Create an empty database; the snapshot is not read until [`open`](Self::open)
    ///
    /// The audit file is opened here. Failing to open it is logged and
    /// otherwise ignored.
    pub fn new(config: Config) -> Result<Self> {
        let store = Store::new(&config)?;
        let audit = match &config.audit_path {
            Some(path) => AuditLog::open(path),
            None => AuditLog::in_memory(),
        };

        Ok(Self {
            config,
            store,
            audit,
            stats: OpStats::new(),
        })
    }

    fn timed<T>(&mut self, op: &'static str, f: impl FnOnce(&mut Self) -> T) -> T {
        let start = Instant::now();
        let out = f(self);
        self.stats.record(op, start.elapsed());
        out
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// OPEN: replace the store with the contents of the snapshot file
    pub fn open(&mut self) -> Result<OpenReport> {
        self.timed("OPEN", |db| {
            let path = db.config.snapshot_path.clone();
            let result = snapshot::read_snapshot(&path).and_then(|parsed| {
                let skipped_lines = parsed.skipped.len();
                let load = db.store.load(parsed.records)?;
                Ok(OpenReport { load, skipped_lines })
            });

            match &result {
                Ok(report) => {
                    tracing::info!(
                        "Loaded {} records from {}",
                        report.load.loaded,
                        path.display()
                    );
                    db.audit.record(AuditOp::Open, None, None, "SUCCESS");
                }
                Err(e) => {
                    tracing::warn!("Open of {} failed: {}", path.display(), e);
                    db.audit.record(AuditOp::Open, None, None, e.audit_status());
                }
            }
            result
        })
    }

    /// INSERT: append a new record
    pub fn insert(&mut self, record: Record) -> Result<Position> {
        self.timed("INSERT", |db| match db.store.insert(record) {
            Ok(pos) => {
                let after = &db.store.records()[pos];
                db.audit.record(AuditOp::Insert, None, Some(after), "SUCCESS");
                Ok(pos)
            }
            Err(e) => {
                db.audit.record(AuditOp::Insert, None, None, e.audit_status());
                Err(e)
            }
        })
    }

    /// QUERY: look up a record by ID
    pub fn query(&mut self, id: i32) -> Result<Record> {
        self.timed("QUERY", |db| match db.store.get(id).cloned() {
            Some(record) => {
                db.audit.record(AuditOp::Query, None, Some(&record), "FOUND");
                Ok(record)
            }
            None => {
                db.audit.record(AuditOp::Query, None, None, "NOT_FOUND");
                Err(DbError::NotFound(id))
            }
        })
    }

    /// UPDATE: apply a partial update, returning the new record
    pub fn update(&mut self, id: i32, update: &RecordUpdate) -> Result<Record> {
        self.timed("UPDATE", |db| match db.store.update(id, update) {
            Ok((before, after)) => {
                db.audit
                    .record(AuditOp::Update, Some(&before), Some(&after), "SUCCESS");
                Ok(after)
            }
            Err(e) => {
                db.audit.record(AuditOp::Update, None, None, e.audit_status());
                Err(e)
            }
        })
    }

    /// DELETE: remove a record once the caller has confirmed
    ///
    /// Returns `Ok(None)` when the record exists but `confirmed` is false.
    pub fn delete(&mut self, id: i32, confirmed: bool) -> Result<Option<Record>> {
        self.timed("DELETE", |db| {
            let Some(existing) = db.store.get(id).cloned() else {
                db.audit.record(AuditOp::Delete, None, None, "NOT_FOUND");
                return Err(DbError::NotFound(id));
            };

            if !confirmed {
                db.audit
                    .record(AuditOp::Delete, Some(&existing), None, "CANCELLED");
                return Ok(None);
            }

            match db.store.delete(id) {
                Ok(removed) => {
                    db.audit.record(AuditOp::Delete, Some(&removed), None, "SUCCESS");
                    Ok(Some(removed))
                }
                Err(e) => {
                    db.audit
                        .record(AuditOp::Delete, Some(&existing), None, e.audit_status());
                    Err(e)
                }
            }
        })
    }

    /// SAVE: write the store to the snapshot file, returning the row count
    pub fn save(&mut self) -> Result<usize> {
        self.timed("SAVE", |db| {
            let path = &db.config.snapshot_path;
            let result =
                snapshot::write_snapshot(path, db.store.records(), &db.config.header);

            match result {
                Ok(()) => {
                    tracing::info!("Saved {} records to {}", db.store.len(), path.display());
                    db.audit.record(AuditOp::Save, None, None, "SUCCESS");
                    Ok(db.store.len())
                }
                Err(e) => {
                    tracing::warn!("Save to {} failed: {}", path.display(), e);
                    db.audit.record(AuditOp::Save, None, None, e.audit_status());
                    Err(e)
                }
            }
        })
    }

    /// SORT: reorder the store; the audit status names field and order
    pub fn sort(&mut self, field: SortField, order: SortOrder) -> Result<()> {
        self.timed("SORT", |db| {
            let result = db.store.sort_by(field, order);
            let status = match &result {
                Ok(()) => format!("{} {}", field, order),
                Err(e) => e.audit_status(),
            };
            db.audit.record(AuditOp::Sort, None, None, status);
            result
        })
    }

    /// SUMMARY: statistics over all marks, `None` when the store is empty
    pub fn summary(&mut self) -> Option<Summary> {
        self.timed("SUMMARY", |db| {
            let summary = db.store.summary();
            let status = if summary.is_some() { "SUCCESS" } else { "EMPTY" };
            db.audit.record(AuditOp::Summary, None, None, status);
            summary
        })
    }

    /// EXIT: audit the end of the session and flush the audit file
    pub fn exit(&mut self) {
        self.audit.record(AuditOp::Exit, None, None, "SUCCESS");
        self.audit.close();
    }

    /// Charge presentation-only work (SHOW, STATS) to the timing table
    pub fn note_timing(&mut self, op: &'static str, elapsed: Duration) {
        self.stats.record(op, elapsed);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether `id` is present, without auditing the lookup
    pub fn contains(&self, id: i32) -> bool {
        self.store.contains(id)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn op_stats(&self) -> &OpStats {
        &self.stats
    }
}
