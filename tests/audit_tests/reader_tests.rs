//! Tests for the Audit Log reader
//!
//! These tests verify:
//! - Replay of entries produced by the writer
//! - Skipping of malformed lines
//! - Timestamp parsing

use std::io::Cursor;

use chrono::{Datelike, Timelike};
use studentdb::audit::{AuditLog, AuditOp, AuditReader};
use studentdb::Record;
use tempfile::TempDir;

#[test]
fn test_replay_matches_written_entries() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit_log.txt");

    let before = Record::new(1, "Ann", "Computing", 70.0);
    let after = Record::new(1, "Ann", "Physics", 72.25);

    let written = {
        let mut log = AuditLog::open(&path);
        log.record(AuditOp::Open, None, None, "SUCCESS");
        log.record(AuditOp::Update, Some(&before), Some(&after), "SUCCESS");
        log.record(AuditOp::Delete, Some(&after), None, "CANCELLED");
        log.record(AuditOp::Sort, None, None, "MARK DESC");
        let entries = log.entries().to_vec();
        entries
    };

    let (entries, result) = AuditReader::open(&path).unwrap().replay().unwrap();

    assert_eq!(result.entries_read, 4);
    assert_eq!(result.lines_skipped, 0);
    assert_eq!(entries, written);
}

#[test]
fn test_replay_skips_malformed_lines() {
    let text = "\
[2025-03-01 10:15:00] OPEN (null) -> (null) : SUCCESS
garbage line
[2025-03-01 10:15:05] QUERY (null) -> {ID=3,Name=\"Cara\",Programme=\"Law\",Mark=65.00} : FOUND

[2025-03-01 10:15:09] QUERY (null) -> {ID=oops} : FOUND
[2025-03-01 10:16:00] EXIT (null) -> (null) : SUCCESS
";

    let (entries, result) = AuditReader::new(Cursor::new(text)).replay().unwrap();

    assert_eq!(result.entries_read, 3);
    assert_eq!(result.lines_skipped, 2);
    assert_eq!(entries[1].op, AuditOp::Query);
    assert_eq!(entries[1].after.as_ref().unwrap().name, "Cara");
    assert_eq!(entries[1].status, "FOUND");
    assert_eq!(entries[2].op, AuditOp::Exit);

    let ts = entries[0].timestamp;
    assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 3, 1));
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (10, 15, 0));
}

#[test]
fn test_open_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.txt");
    assert!(AuditReader::open(&path).is_err());
}
