//! In-process slot with no durability.

use super::{PersistenceSlot, SlotResult};
use std::collections::HashMap;

/// `HashMap`-backed slot. Contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with one value, as if written by an
    /// earlier session.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values, writes: 0 }
    }

    /// Number of successful `set` calls since construction.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl PersistenceSlot for MemorySlot {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SlotResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemorySlot;
    use crate::slot::PersistenceSlot;

    #[test]
    fn set_overwrites_and_counts_writes() {
        let mut slot = MemorySlot::new();
        assert_eq!(slot.get("k").expect("memory read never fails"), None);

        slot.set("k", "one").expect("memory write never fails");
        slot.set("k", "two").expect("memory write never fails");
        let value = slot.get("k").expect("memory read never fails");
        assert_eq!(value.as_deref(), Some("two"));
        assert_eq!(slot.write_count(), 2);
    }

    #[test]
    fn seeded_value_is_readable_without_counting_as_write() {
        let slot = MemorySlot::with_value("k", "[]");
        let value = slot.get("k").expect("memory read never fails");
        assert_eq!(value.as_deref(), Some("[]"));
        assert_eq!(slot.write_count(), 0);
    }
}
