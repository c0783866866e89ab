//! ID Index Module
//!
//! Maps a student ID to the record's current position in the store.
//!
//! ## Responsibilities
//! - O(1) expected-time lookup by ID
//! - Insert-or-overwrite of `(id, position)` pairs
//! - Full rebuild after any change that shifts positions
//!
//! ## Data Structure Choice
//! Open addressing with linear probing over a fixed slot array:
//! - Slot count is larger than store capacity, so the table never resizes
//! - No tombstones: deletion is done by rebuilding from the store
//! - A rebuild is O(n), cheap at the store's bounded size

mod table;

pub use table::{mix, IdIndex};
