//! Audit log writer
//!
//! Appends entries to the audit file and keeps the session's history.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::record::Record;

use super::{AuditEntry, AuditOp};

/// Append-only audit log
///
/// File output is best-effort: if the file cannot be opened or a write
/// fails, the failure is logged and the entry is still kept in memory.
pub struct AuditLog {
    /// Open audit file, `None` when disabled or unavailable
    writer: Option<BufWriter<File>>,

    /// Path of the audit file, if one was requested
    path: Option<PathBuf>,

    /// Entries appended during this session, in call order
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Open (or create) the audit file at `path` in append mode
    pub fn open(path: &Path) -> Self {
        let writer = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                tracing::warn!(
                    "Audit log {} unavailable, continuing without it: {}",
                    path.display(),
                    e
                );
                None
            }
        };

        Self {
            writer,
            path: Some(path.to_path_buf()),
            entries: Vec::new(),
        }
    }

    /// Audit log that only keeps entries in memory
    pub fn in_memory() -> Self {
        Self {
            writer: None,
            path: None,
            entries: Vec::new(),
        }
    }

    /// Record an operation attempt
    pub fn record(
        &mut self,
        op: AuditOp,
        before: Option<&Record>,
        after: Option<&Record>,
        status: impl Into<String>,
    ) {
        let entry = AuditEntry::now(op, before.cloned(), after.cloned(), status);
        self.append(entry);
    }

    /// Append a prepared entry
    pub fn append(&mut self, entry: AuditEntry) {
        if let Some(writer) = self.writer.as_mut() {
            let written = writeln!(writer, "{}", entry).and_then(|_| writer.flush());
            if let Err(e) = written {
                tracing::warn!("Audit write failed, disabling audit file: {}", e);
                self.writer = None;
            }
        }

        tracing::debug!(op = %entry.op, status = %entry.status, "audit");
        self.entries.push(entry);
    }

    /// Entries appended during this session
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Whether entries are currently reaching a file
    pub fn is_persistent(&self) -> bool {
        self.writer.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flush and release the audit file
    pub fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                tracing::warn!("Audit flush on close failed: {}", e);
            }
        }
    }
}

impl Drop for AuditLog {
    fn drop(&mut self) {
        self.close();
    }
}
