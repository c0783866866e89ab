//! Snapshot Module
//!
//! Reads and writes the flat tab-separated file that persists the store.
//!
//! ## File Format
//! ```text
//! Database Name: Sample-CMS                    ┐
//! Authors: ...                                 │ header block,
//!                                              │ skipped on load
//! Table Name: StudentRecords                   │
//! ID      Name            Programme       Mark ┘
//! 2301234 Joshua Chen     Software Engineering    70.5
//! └ id ┘  └ name (15) ┘   └ programme (23) ┘      └ mark (.1) ┘
//! ```
//!
//! Columns are separated by tabs. On load, any line that does not yield
//! exactly four fields with an integer ID and a numeric mark is skipped.

mod parser;
mod writer;

pub use parser::{parse, parse_row, read_snapshot, ParsedSnapshot, SkippedLine};
pub use writer::{serialize, write_snapshot};
