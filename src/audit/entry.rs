//! Audit entry definitions

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, Timelike};

use crate::error::DbError;
use crate::record::Record;

/// Layout of the bracketed timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Operation kinds that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditOp {
    Open,
    Insert,
    Query,
    Update,
    Delete,
    Save,
    Sort,
    Summary,
    Exit,
}

impl AuditOp {
    pub const ALL: [AuditOp; 9] = [
        AuditOp::Open,
        AuditOp::Insert,
        AuditOp::Query,
        AuditOp::Update,
        AuditOp::Delete,
        AuditOp::Save,
        AuditOp::Sort,
        AuditOp::Summary,
        AuditOp::Exit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditOp::Open => "OPEN",
            AuditOp::Insert => "INSERT",
            AuditOp::Query => "QUERY",
            AuditOp::Update => "UPDATE",
            AuditOp::Delete => "DELETE",
            AuditOp::Save => "SAVE",
            AuditOp::Sort => "SORT",
            AuditOp::Summary => "SUMMARY",
            AuditOp::Exit => "EXIT",
        }
    }
}

impl fmt::Display for AuditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditOp {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuditOp::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| DbError::Protocol(format!("unknown audit operation '{}'", s)))
    }
}

/// A single entry in the audit log
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    /// Local wall-clock time, second precision
    pub timestamp: NaiveDateTime,

    pub op: AuditOp,

    /// Record as it was before the operation
    pub before: Option<Record>,

    /// Record as it is after the operation
    pub after: Option<Record>,

    /// "SUCCESS", "NOT_FOUND", "FAIL(DUPLICATE)", ...
    pub status: String,
}

impl AuditEntry {
    /// Create an entry stamped with the current local time
    pub fn now(
        op: AuditOp,
        before: Option<Record>,
        after: Option<Record>,
        status: impl Into<String>,
    ) -> Self {
        let now = Local::now().naive_local();
        // Second precision, so a written entry reads back identical
        let timestamp = now.with_nanosecond(0).unwrap_or(now);

        Self {
            timestamp,
            op,
            before,
            after,
            status: status.into(),
        }
    }
}

struct Snapshot<'a>(Option<&'a Record>);

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("(null)"),
            Some(r) => write!(
                f,
                "{{ID={},Name=\"{}\",Programme=\"{}\",Mark={:.2}}}",
                r.id, r.name, r.programme, r.mark
            ),
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} -> {} : {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.op,
            Snapshot(self.before.as_ref()),
            Snapshot(self.after.as_ref()),
            self.status
        )
    }
}
