//! Record ordering

use std::cmp::Ordering;
use std::fmt;

use crate::record::Record;

/// Field to order by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Mark,
}

/// Direction of the ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Id => "ID",
            SortField::Mark => "MARK",
        })
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        })
    }
}

pub(super) fn sort_records(records: &mut [Record], field: SortField, order: SortOrder) {
    match field {
        SortField::Id => records.sort_by_key(|r| r.id),
        // NaN marks compare equal so the sort stays total and stable
        SortField::Mark => records.sort_by(|a, b| {
            a.mark.partial_cmp(&b.mark).unwrap_or(Ordering::Equal)
        }),
    }

    if order == SortOrder::Desc {
        records.reverse();
    }
}
