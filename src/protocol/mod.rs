//! Protocol Module
//!
//! Text commands accepted by the interactive shell.
//!
//! ### Menu Commands (case-insensitive)
//! - OPEN, SHOWALL, INSERT, QUERY, UPDATE, DELETE, SAVE, SORT, SUMMARY, STATS
//! - QUIT / EXIT
//!
//! ### Sort Queries (inside SORT)
//! ```text
//! SHOW ALL SORT BY ID [DESC]
//! SHOW ALL SORT BY MARK [DESC]
//! EXIT
//! ```

mod command;
mod query;

pub use command::Command;
pub use query::SortQuery;
