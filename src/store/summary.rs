//! Summary statistics over the store

use crate::record::Record;

/// Aggregate view of the marks
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub average: f64,
    pub highest: (f32, String),
    pub lowest: (f32, String),
}

impl Summary {
    /// Compute over `records`; ties on highest/lowest go to the first record
    pub fn of(records: &[Record]) -> Option<Self> {
        let first = records.first()?;
        let mut high = first;
        let mut low = first;
        let mut total = 0.0f64;

        for r in records {
            total += f64::from(r.mark);
            if r.mark > high.mark {
                high = r;
            }
            if r.mark < low.mark {
                low = r;
            }
        }

        Some(Self {
            count: records.len(),
            average: total / records.len() as f64,
            highest: (high.mark, high.name.clone()),
            lowest: (low.mark, low.name.clone()),
        })
    }
}
