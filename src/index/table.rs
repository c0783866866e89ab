//! Open-addressing hash table implementation

use crate::error::{DbError, Result};
use crate::record::{Position, Record};

/// Avalanche mix over the ID bits
pub fn mix(mut x: u32) -> u32 {
    x ^= x >> 16;
    x = x.wrapping_mul(0x7feb_352d);
    x ^= x >> 15;
    x = x.wrapping_mul(0x846c_a68b);
    x ^= x >> 16;
    x
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    id: i32,
    pos: Position,
}

/// Fixed-size ID -> position map
#[derive(Debug, Clone)]
pub struct IdIndex {
    slots: Vec<Option<Slot>>,
    len: usize,
}

impl IdIndex {
    /// Create an empty index with `slots` buckets
    pub fn new(slots: usize) -> Self {
        Self {
            slots: vec![None; slots.max(1)],
            len: 0,
        }
    }

    /// Number of buckets
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of IDs currently indexed
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn home(&self, id: i32) -> usize {
        mix(id as u32) as usize % self.slots.len()
    }

    /// Insert `id -> pos`, overwriting any existing entry for `id`
    pub fn put(&mut self, id: i32, pos: Position) -> Result<()> {
        let n = self.slots.len();
        let mut h = self.home(id);

        for _ in 0..n {
            let slot = &mut self.slots[h];
            match slot {
                Some(existing) if existing.id == id => {
                    existing.pos = pos;
                    return Ok(());
                }
                Some(_) => {}
                None => {
                    *slot = Some(Slot { id, pos });
                    self.len += 1;
                    return Ok(());
                }
            }
            h = (h + 1) % n;
        }

        Err(DbError::IndexExhausted(id))
    }

    /// Look up the position of `id`; an empty slot ends the probe
    pub fn get(&self, id: i32) -> Option<Position> {
        let n = self.slots.len();
        let mut h = self.home(id);

        for _ in 0..n {
            match self.slots[h] {
                None => return None,
                Some(slot) if slot.id == id => return Some(slot.pos),
                Some(_) => h = (h + 1) % n,
            }
        }

        None
    }

    pub fn contains(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.len = 0;
    }

    /// Clear and re-insert every record at its current position
    pub fn rebuild(&mut self, records: &[Record]) -> Result<()> {
        self.clear();
        for (pos, record) in records.iter().enumerate() {
            self.put(record.id, pos)?;
        }
        tracing::debug!("Index rebuilt with {} entries", self.len);
        Ok(())
    }
}
