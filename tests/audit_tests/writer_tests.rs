//! Tests for the Audit Log writer
//!
//! These tests verify:
//! - Line format with (null) and record snapshots
//! - Append-only behavior across reopen
//! - In-memory history order
//! - Best-effort behavior when the file cannot be opened

use std::fs;
use std::path::PathBuf;

use studentdb::audit::{AuditLog, AuditOp};
use studentdb::Record;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_audit() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("audit_log.txt");
    (temp_dir, path)
}

fn lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Format Tests
// =============================================================================

#[test]
fn test_line_format() {
    let (_temp, path) = setup_temp_audit();
    let mut log = AuditLog::open(&path);

    let after = Record::new(7, "Ann Lee", "Computing", 71.5);
    log.record(AuditOp::Insert, None, Some(&after), "SUCCESS");
    log.close();

    let lines = lines(&path);
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.starts_with('['));
    assert_eq!(&line[20..22], "] ");
    assert!(line.ends_with(
        "INSERT (null) -> {ID=7,Name=\"Ann Lee\",Programme=\"Computing\",Mark=71.50} : SUCCESS"
    ));
}

#[test]
fn test_failure_status_is_written() {
    let (_temp, path) = setup_temp_audit();
    let mut log = AuditLog::open(&path);

    log.record(AuditOp::Insert, None, None, "FAIL(DUPLICATE)");
    log.close();

    assert!(lines(&path)[0].ends_with("INSERT (null) -> (null) : FAIL(DUPLICATE)"));
}

// =============================================================================
// Append-Only Tests
// =============================================================================

#[test]
fn test_reopen_appends() {
    let (_temp, path) = setup_temp_audit();

    {
        let mut log = AuditLog::open(&path);
        log.record(AuditOp::Open, None, None, "SUCCESS");
    }
    {
        let mut log = AuditLog::open(&path);
        log.record(AuditOp::Exit, None, None, "SUCCESS");
    }

    let lines = lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("] OPEN "));
    assert!(lines[1].contains("] EXIT "));
}

#[test]
fn test_entries_kept_in_call_order() {
    let mut log = AuditLog::in_memory();
    let ops = [AuditOp::Open, AuditOp::Insert, AuditOp::Query, AuditOp::Save];
    for op in ops {
        log.record(op, None, None, "SUCCESS");
    }

    let seen: Vec<AuditOp> = log.entries().iter().map(|e| e.op).collect();
    assert_eq!(seen, ops.to_vec());
    assert!(!log.is_persistent());
}

#[test]
fn test_unopenable_file_is_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing_dir").join("audit_log.txt");

    let mut log = AuditLog::open(&path);
    log.record(AuditOp::Open, None, None, "SUCCESS");

    assert!(!log.is_persistent());
    assert_eq!(log.entries().len(), 1);
    assert!(!path.exists());
}
