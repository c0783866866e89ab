//! Sort query mini-language
//!
//! `SHOW ALL SORT BY {ID|MARK} [DESC]` or `EXIT`. Matching is
//! case-insensitive; extra whitespace and square brackets around the order
//! word are tolerated. Anything other than `DESC` after the field sorts
//! ascending.

use std::str::FromStr;

use crate::error::DbError;
use crate::store::{SortField, SortOrder};

/// A parsed line from the sort prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortQuery {
    Sort { field: SortField, order: SortOrder },
    Exit,
}

const SORT_BY: &str = "SORT BY";

impl FromStr for SortQuery {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Collapse whitespace so "SORT   BY" still matches
        let upper = s.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();

        if upper == "EXIT" || upper == "QUIT" {
            return Ok(SortQuery::Exit);
        }

        let Some(at) = upper.find(SORT_BY) else {
            return Err(DbError::Protocol(
                "unrecognized command, use 'SHOW ALL SORT BY ID|MARK [DESC]'".to_string(),
            ));
        };

        let mut tokens = upper[at + SORT_BY.len()..]
            .split(|c: char| c.is_whitespace() || c == '[' || c == ']')
            .filter(|t| !t.is_empty());

        let field = match tokens.next() {
            Some("ID") => SortField::Id,
            Some("MARK") => SortField::Mark,
            other => {
                return Err(DbError::Protocol(format!(
                    "unknown sort field '{}', use ID or MARK",
                    other.unwrap_or("")
                )))
            }
        };

        let order = match tokens.next() {
            Some("DESC") => SortOrder::Desc,
            _ => SortOrder::Asc,
        };

        Ok(SortQuery::Sort { field, order })
    }
}
