//! Snapshot parser

use std::fs;
use std::path::Path;

use crate::error::{DbError, Result};
use crate::record::Record;

/// A line that was not a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    pub reason: String,
}

/// Records recovered from a snapshot, in file order
#[derive(Debug, Clone, Default)]
pub struct ParsedSnapshot {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedLine>,
}

/// Read and parse the snapshot at `path`
pub fn read_snapshot(path: &Path) -> Result<ParsedSnapshot> {
    let text = fs::read_to_string(path)?;
    Ok(parse(&text))
}

/// Parse snapshot text; never fails, bad lines are reported in `skipped`
pub fn parse(text: &str) -> ParsedSnapshot {
    let mut parsed = ParsedSnapshot::default();

    for (i, line) in text.lines().enumerate() {
        match parse_row(i + 1, line) {
            Ok(record) => parsed.records.push(record),
            Err(DbError::MalformedRow { line, reason }) => {
                tracing::debug!("Skipping snapshot line {}: {}", line, reason);
                parsed.skipped.push(SkippedLine { line, reason });
            }
            Err(e) => {
                parsed.skipped.push(SkippedLine {
                    line: i + 1,
                    reason: e.to_string(),
                });
            }
        }
    }

    parsed
}

/// Parse one `<id>\t<name>\t<programme>\t<mark>` row
///
/// Padding around each field is trimmed, so rows written with fixed-width
/// columns read back cleanly and an empty name or programme stays a field.
/// A row that does not split into exactly four fields on single tabs is
/// retried with runs of tabs treated as one separator, for hand-edited files.
pub fn parse_row(line_no: usize, line: &str) -> Result<Record> {
    let bad = |reason: String| DbError::MalformedRow {
        line: line_no,
        reason,
    };

    let mut fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() != 4 {
        fields.retain(|f| !f.is_empty());
    }

    let [id, name, programme, mark] = fields[..] else {
        return Err(bad(format!("expected 4 fields, found {}", fields.len())));
    };

    let id: i32 = id
        .parse()
        .map_err(|_| bad(format!("invalid id '{}'", id)))?;
    let mark: f32 = mark
        .parse()
        .map_err(|_| bad(format!("invalid mark '{}'", mark)))?;

    Ok(Record::new(id, name, programme, mark))
}
