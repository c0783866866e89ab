//! Per-operation call counts and elapsed time

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Operation labels tracked by [`OpStats`], in display order
pub const TRACKED_OPS: [&str; 10] = [
    "OPEN", "SHOW", "INSERT", "QUERY", "UPDATE", "DELETE", "SAVE", "SORT", "SUMMARY", "STATS",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounter {
    pub calls: u64,
    pub total: Duration,
}

impl OpCounter {
    pub fn average(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.total.div_f64(self.calls as f64)
        }
    }
}

/// Timing table keyed by operation label
#[derive(Debug, Default, Clone)]
pub struct OpStats {
    counters: HashMap<&'static str, OpCounter>,
}

impl OpStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one call of `op` that took `elapsed`
    pub fn record(&mut self, op: &'static str, elapsed: Duration) {
        let counter = self.counters.entry(op).or_default();
        counter.calls += 1;
        counter.total += elapsed;
    }

    pub fn get(&self, op: &str) -> OpCounter {
        self.counters.get(op).copied().unwrap_or_default()
    }
}

impl fmt::Display for OpStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OP       COUNT   TOTAL(ms)  AVG(ms)")?;
        for op in TRACKED_OPS {
            let c = self.get(op);
            writeln!(
                f,
                "{:<7} {:>6}   {:>9.2}  {:>7.2}",
                op,
                c.calls,
                c.total.as_secs_f64() * 1000.0,
                c.average().as_secs_f64() * 1000.0
            )?;
        }
        Ok(())
    }
}
