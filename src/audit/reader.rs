//! Audit log reader
//!
//! Replays an audit file back into entries for inspection.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::{DbError, Result};
use crate::record::Record;

use super::{AuditEntry, AuditOp, TIMESTAMP_FORMAT};

/// Result of a replay
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayResult {
    /// Lines parsed into entries
    pub entries_read: usize,

    /// Lines that could not be parsed
    pub lines_skipped: usize,
}

/// Reads entries from an audit file
pub struct AuditReader<R> {
    reader: R,
    line_no: usize,
}

impl AuditReader<BufReader<File>> {
    /// Open an audit file for reading
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> AuditReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    /// Read the next line as an entry
    ///
    /// Returns `Ok(None)` at end of input and `Err(MalformedRow)` for a line
    /// that does not parse; reading may continue after an error.
    pub fn next_entry(&mut self) -> Result<Option<AuditEntry>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let trimmed = line.trim_end_matches(['\r', '\n']);
            if !trimmed.is_empty() {
                return parse_line(self.line_no, trimmed).map(Some);
            }
        }
    }

    /// Read every entry, skipping malformed lines
    pub fn replay(mut self) -> Result<(Vec<AuditEntry>, ReplayResult)> {
        let mut entries = Vec::new();
        let mut result = ReplayResult::default();

        loop {
            match self.next_entry() {
                Ok(Some(entry)) => {
                    entries.push(entry);
                    result.entries_read += 1;
                }
                Ok(None) => break,
                Err(DbError::MalformedRow { line, reason }) => {
                    tracing::debug!("Skipping audit line {}: {}", line, reason);
                    result.lines_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok((entries, result))
    }
}

/// Parse one audit line
pub fn parse_line(line_no: usize, line: &str) -> Result<AuditEntry> {
    let bad = |reason: &str| DbError::MalformedRow {
        line: line_no,
        reason: reason.to_string(),
    };

    let rest = line.strip_prefix('[').ok_or_else(|| bad("missing timestamp"))?;
    let (ts, rest) = rest.split_once("] ").ok_or_else(|| bad("unterminated timestamp"))?;
    let timestamp = NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
        .map_err(|e| bad(&format!("bad timestamp: {}", e)))?;

    let (op, rest) = rest.split_once(' ').ok_or_else(|| bad("missing operation"))?;
    let op = op.parse::<AuditOp>().map_err(|_| bad("unknown operation"))?;

    let (before, rest) = parse_snapshot(rest).ok_or_else(|| bad("bad before snapshot"))?;
    let rest = rest.strip_prefix(" -> ").ok_or_else(|| bad("missing '->'"))?;
    let (after, rest) = parse_snapshot(rest).ok_or_else(|| bad("bad after snapshot"))?;
    let status = rest.strip_prefix(" : ").ok_or_else(|| bad("missing status"))?;

    Ok(AuditEntry {
        timestamp,
        op,
        before,
        after,
        status: status.to_string(),
    })
}

// `(null)` or `{ID=1,Name="..",Programme="..",Mark=1.00}`; older logs say `Prog=`.
fn parse_snapshot(s: &str) -> Option<(Option<Record>, &str)> {
    if let Some(rest) = s.strip_prefix("(null)") {
        return Some((None, rest));
    }

    let s = s.strip_prefix("{ID=")?;
    let (id, s) = s.split_once(",Name=\"")?;
    let (name, s) = s
        .split_once("\",Programme=\"")
        .or_else(|| s.split_once("\",Prog=\""))?;
    let (programme, s) = s.split_once("\",Mark=")?;
    let (mark, rest) = s.split_once('}')?;

    let record = Record {
        id: id.parse().ok()?,
        name: name.to_string(),
        programme: programme.to_string(),
        mark: mark.parse().ok()?,
    };
    Some((Some(record), rest))
}
