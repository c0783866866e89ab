//! Audit Log Module
//!
//! Append-only history of every operation attempt.
//!
//! ## Responsibilities
//! - One entry per operation, including failed attempts
//! - Entries written in call order, never rewritten
//! - Best-effort file output: a broken audit file never blocks the store
//! - Replay of an existing audit file for inspection
//!
//! ## File Format
//! ```text
//! [2025-03-01 10:15:00] INSERT (null) -> {ID=7,Name="Ann",Programme="CS",Mark=71.50} : SUCCESS
//! [2025-03-01 10:15:09] DELETE {ID=7,Name="Ann",Programme="CS",Mark=71.50} -> (null) : SUCCESS
//! └───── timestamp ────┘ └op─┘ └──── before ────┘    └──── after ────┘   └ status ┘
//! ```
//!
//! The store never reads the log back; it is a pure side channel.

mod entry;
mod reader;
mod writer;

pub use entry::{AuditEntry, AuditOp, TIMESTAMP_FORMAT};
pub use reader::{AuditReader, ReplayResult};
pub use writer::AuditLog;
