//! # studentdb
//!
//! A menu-driven student record database with:
//! - A capacity-bounded, ordered record store
//! - An open-addressing hash index from student ID to store position
//! - An append-only audit log with before/after snapshots
//! - Tab-separated flat-file snapshots
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Shell (menu / sort prompt)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Database                               │
//! │        mutate store → update index → append audit            │
//! └───────┬─────────────────────┬─────────────────────┬─────────┘
//!         │                     │                     │
//!         ▼                     ▼                     ▼
//!  ┌─────────────┐       ┌─────────────┐       ┌─────────────┐
//!  │    Store    │       │  Audit Log  │       │  Snapshot   │
//!  │  + IdIndex  │       │  (append)   │       │ (load/save) │
//!  └─────────────┘       └─────────────┘       └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod audit;
pub mod database;
pub mod index;
pub mod protocol;
pub mod record;
pub mod shared;
pub mod shell;
pub mod snapshot;
pub mod stats;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use database::Database;
pub use error::{DbError, Result};
pub use record::{Record, RecordUpdate};
pub use shared::SharedDatabase;
pub use store::{SortField, SortOrder, Store};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of studentdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
