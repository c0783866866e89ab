//! Tests for Database
//!
//! These tests verify:
//! - One audit entry per operation attempt, in call order
//! - Open/save through the snapshot file
//! - Delete confirmation
//! - Best-effort audit file
//! - SharedDatabase under concurrent inserts

use std::fs;
use std::thread;

use studentdb::audit::{AuditOp, AuditReader};
use studentdb::config::{Config, OverflowPolicy};
use studentdb::{Database, DbError, Record, RecordUpdate, SharedDatabase, SortField, SortOrder};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .snapshot_path(temp_dir.path().join("Sample-CMS.txt"))
        .audit_path(temp_dir.path().join("audit_log.txt"))
        .build();
    let db = Database::new(config).unwrap();
    (temp_dir, db)
}

fn statuses(db: &Database) -> Vec<(AuditOp, String)> {
    db.audit()
        .entries()
        .iter()
        .map(|e| (e.op, e.status.clone()))
        .collect()
}

fn entry(op: AuditOp, status: &str) -> (AuditOp, String) {
    (op, status.to_string())
}

// =============================================================================
// Audit Ordering Tests
// =============================================================================

#[test]
fn test_every_call_is_audited_in_order() {
    let (_temp, mut db) = setup_temp_db();

    db.insert(Record::new(1, "Ann", "Law", 70.0)).unwrap();
    db.insert(Record::new(1, "Dup", "Law", 10.0)).unwrap_err();
    db.query(1).unwrap();
    db.query(9).unwrap_err();
    db.update(1, &RecordUpdate::from_sentinels("", "Art", -1.0)).unwrap();
    db.update(9, &RecordUpdate::default()).unwrap_err();
    db.sort(SortField::Mark, SortOrder::Desc).unwrap();
    db.summary().unwrap();
    db.delete(1, false).unwrap();
    db.delete(1, true).unwrap();
    db.delete(1, true).unwrap_err();
    db.summary();
    db.exit();

    assert_eq!(
        statuses(&db),
        vec![
            entry(AuditOp::Insert, "SUCCESS"),
            entry(AuditOp::Insert, "FAIL(DUPLICATE)"),
            entry(AuditOp::Query, "FOUND"),
            entry(AuditOp::Query, "NOT_FOUND"),
            entry(AuditOp::Update, "SUCCESS"),
            entry(AuditOp::Update, "NOT_FOUND"),
            entry(AuditOp::Sort, "MARK DESC"),
            entry(AuditOp::Summary, "SUCCESS"),
            entry(AuditOp::Delete, "CANCELLED"),
            entry(AuditOp::Delete, "SUCCESS"),
            entry(AuditOp::Delete, "NOT_FOUND"),
            entry(AuditOp::Summary, "EMPTY"),
            entry(AuditOp::Exit, "SUCCESS"),
        ]
    );
}

#[test]
fn test_audit_snapshots() {
    let (_temp, mut db) = setup_temp_db();
    db.insert(Record::new(1, "Ann", "Law", 70.0)).unwrap();
    db.update(1, &RecordUpdate::from_sentinels("Annie", "", 75.0)).unwrap();
    db.delete(1, true).unwrap();

    let entries = db.audit().entries();
    assert!(entries[0].before.is_none());
    assert_eq!(entries[0].after.as_ref().unwrap().name, "Ann");

    assert_eq!(entries[1].before.as_ref().unwrap().mark, 70.0);
    assert_eq!(entries[1].after.as_ref().unwrap().mark, 75.0);
    assert_eq!(entries[1].after.as_ref().unwrap().name, "Annie");

    assert_eq!(entries[2].before.as_ref().unwrap().name, "Annie");
    assert!(entries[2].after.is_none());
}

#[test]
fn test_failed_insert_when_full() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .snapshot_path(temp_dir.path().join("db.txt"))
        .no_audit_file()
        .capacity(1)
        .index_slots(3)
        .build();
    let mut db = Database::new(config).unwrap();

    db.insert(Record::new(1, "A", "P", 1.0)).unwrap();
    let err = db.insert(Record::new(2, "B", "P", 2.0)).unwrap_err();

    assert!(matches!(err, DbError::Full { capacity: 1 }));
    assert_eq!(statuses(&db)[1], entry(AuditOp::Insert, "FAIL(FULL)"));
}

#[test]
fn test_audit_file_matches_memory() {
    let (temp, mut db) = setup_temp_db();
    db.insert(Record::new(5, "Eve", "Math", 91.0)).unwrap();
    db.query(5).unwrap();
    db.exit();

    let path = temp.path().join("audit_log.txt");
    let (entries, result) = AuditReader::open(&path).unwrap().replay().unwrap();

    assert_eq!(result.lines_skipped, 0);
    assert_eq!(entries, db.audit().entries().to_vec());
}

#[test]
fn test_unwritable_audit_does_not_block() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .snapshot_path(temp_dir.path().join("db.txt"))
        .audit_path(temp_dir.path().join("no_such_dir").join("audit.txt"))
        .build();
    let mut db = Database::new(config).unwrap();

    assert_eq!(db.insert(Record::new(1, "A", "P", 1.0)).unwrap(), 0);
    assert!(!db.audit().is_persistent());
    assert_eq!(db.audit().entries().len(), 1);
}

// =============================================================================
// Open / Save Tests
// =============================================================================

#[test]
fn test_save_then_open() {
    let (temp, mut db) = setup_temp_db();
    db.insert(Record::new(3, "Cara", "Law", 65.5)).unwrap();
    db.insert(Record::new(1, "Ann", "Art", 70.0)).unwrap();
    assert_eq!(db.save().unwrap(), 2);

    let config = Config::builder()
        .snapshot_path(temp.path().join("Sample-CMS.txt"))
        .no_audit_file()
        .build();
    let mut reopened = Database::new(config).unwrap();
    let report = reopened.open().unwrap();

    assert_eq!(report.load.loaded, 2);
    assert_eq!(report.skipped_lines, 5);
    assert_eq!(reopened.store().records(), db.store().records());
    assert_eq!(reopened.store().find_by_id(1), Some(1));
}

#[test]
fn test_open_missing_file() {
    let (_temp, mut db) = setup_temp_db();
    db.insert(Record::new(1, "A", "P", 1.0)).unwrap();

    assert!(matches!(db.open(), Err(DbError::Io(_))));
    assert_eq!(db.store().len(), 1);
    assert_eq!(statuses(&db)[1], entry(AuditOp::Open, "FAIL"));
}

#[test]
fn test_open_reject_overflow() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("db.txt");
    fs::write(&path, "1\tA\tP\t1\n2\tB\tP\t2\n3\tC\tP\t3\n").unwrap();

    let config = Config::builder()
        .snapshot_path(&path)
        .no_audit_file()
        .capacity(2)
        .index_slots(5)
        .overflow_policy(OverflowPolicy::Reject)
        .build();
    let mut db = Database::new(config).unwrap();

    assert!(matches!(db.open(), Err(DbError::CapacityExceeded { .. })));
    assert!(db.store().is_empty());
    assert_eq!(statuses(&db)[0], entry(AuditOp::Open, "FAIL(FULL)"));
}

#[test]
fn test_op_stats_count_calls() {
    let (_temp, mut db) = setup_temp_db();
    db.insert(Record::new(1, "A", "P", 1.0)).unwrap();
    db.insert(Record::new(2, "B", "P", 1.0)).unwrap();
    db.query(2).unwrap();

    assert_eq!(db.op_stats().get("INSERT").calls, 2);
    assert_eq!(db.op_stats().get("QUERY").calls, 1);
    assert_eq!(db.op_stats().get("SAVE").calls, 0);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_shared_database_concurrent_inserts() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .snapshot_path(temp_dir.path().join("db.txt"))
        .no_audit_file()
        .build();
    let shared = SharedDatabase::new(config).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let db = shared.clone();
            thread::spawn(move || {
                for i in 0..20 {
                    db.insert(Record::new(t * 100 + i, "S", "P", i as f32)).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(shared.len(), 80);
    shared.with(|db| {
        for (pos, r) in db.store().records().iter().enumerate() {
            assert_eq!(db.store().find_by_id(r.id), Some(pos));
        }
        assert_eq!(db.audit().entries().len(), 80);
    });
}
