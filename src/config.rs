//! Configuration for studentdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{DbError, Result};

/// Main configuration for a studentdb instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// Snapshot file read by OPEN and written by SAVE
    pub snapshot_path: PathBuf,

    /// Append-only audit log; `None` disables the audit file
    pub audit_path: Option<PathBuf>,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of records held in memory
    pub capacity: usize,

    /// Number of slots in the ID index (must exceed `capacity`)
    pub index_slots: usize,

    /// Maximum characters kept for name and programme
    pub text_limit: usize,

    /// What to do when a snapshot holds more records than `capacity`
    pub overflow_policy: OverflowPolicy,

    // -------------------------------------------------------------------------
    // Snapshot Header
    // -------------------------------------------------------------------------
    pub header: SnapshotHeader,
}

/// Behavior of `Store::load` when offered more records than fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Keep the first `capacity` records, drop the rest
    Truncate,

    /// Refuse the whole load and leave the store unchanged
    Reject,
}

/// Free-text block written above the data rows on save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub database_name: String,
    pub authors: String,
    pub table_name: String,
}

impl Default for SnapshotHeader {
    fn default() -> Self {
        Self {
            database_name: "Sample-CMS".to_string(),
            authors: "Assistant Prof Oran Zane Devilly".to_string(),
            table_name: "StudentRecords".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("Sample-CMS.txt"),
            audit_path: Some(PathBuf::from("audit_log.txt")),
            capacity: 100,
            index_slots: 257,
            text_limit: 39,
            overflow_policy: OverflowPolicy::Truncate,
            header: SnapshotHeader::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the settings that the store and index rely on
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(DbError::Config("capacity must be at least 1".to_string()));
        }
        if self.index_slots <= self.capacity {
            return Err(DbError::Config(format!(
                "index_slots ({}) must exceed capacity ({})",
                self.index_slots, self.capacity
            )));
        }
        if self.text_limit == 0 {
            return Err(DbError::Config("text_limit must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the snapshot file path
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = path.into();
        self
    }

    /// Set the audit log path
    pub fn audit_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.audit_path = Some(path.into());
        self
    }

    /// Run without an audit file
    pub fn no_audit_file(mut self) -> Self {
        self.config.audit_path = None;
        self
    }

    /// Set the store capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the number of index slots
    pub fn index_slots(mut self, slots: usize) -> Self {
        self.config.index_slots = slots;
        self
    }

    /// Set the name/programme character limit
    pub fn text_limit(mut self, limit: usize) -> Self {
        self.config.text_limit = limit;
        self
    }

    /// Set the load overflow policy
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.config.overflow_policy = policy;
        self
    }

    /// Set the snapshot header block
    pub fn header(mut self, header: SnapshotHeader) -> Self {
        self.config.header = header;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
