//! In-process slot backend.

use super::slot::{SlotError, SlotResult, SlotStorage};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Slot map held in process memory.
///
/// Clones share the same underlying map, so several stores (or a store and a
/// test) observe each other's writes, mirroring one browser profile's local
/// storage. An optional byte quota makes writes fail the way a full browser
/// store does.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    inner: Rc<RefCell<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    slots: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty backend that rejects writes once the total size of
    /// all keys and values would exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().quota_bytes = Some(quota_bytes);
        storage
    }

    /// Number of slots currently stored.
    pub fn slot_count(&self) -> usize {
        self.inner.borrow().slots.len()
    }

    /// Bytes used by all keys and values.
    pub fn used_bytes(&self) -> usize {
        used_bytes(&self.inner.borrow().slots)
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.inner.borrow().slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> SlotResult<()> {
        let mut state = self.inner.borrow_mut();

        if let Some(limit) = state.quota_bytes {
            let previous = state
                .slots
                .get(key)
                .map_or(0, |existing| key.len() + existing.len());
            let required = used_bytes(&state.slots) - previous + key.len() + value.len();
            if required > limit {
                return Err(SlotError::QuotaExceeded {
                    key: key.to_string(),
                    required,
                    limit,
                });
            }
        }

        state.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SlotResult<()> {
        self.inner.borrow_mut().slots.remove(key);
        Ok(())
    }
}

fn used_bytes(slots: &BTreeMap<String, String>) -> usize {
    slots
        .iter()
        .map(|(key, value)| key.len() + value.len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::MemorySlotStorage;
    use crate::storage::{SlotError, SlotStorage};

    #[test]
    fn clones_share_slots() {
        let storage = MemorySlotStorage::new();
        let other = storage.clone();

        storage.write("aipet_Token", "[]").unwrap();
        assert_eq!(other.read("aipet_Token").unwrap().as_deref(), Some("[]"));

        other.remove("aipet_Token").unwrap();
        assert!(storage.read("aipet_Token").unwrap().is_none());
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_previous_value() {
        let storage = MemorySlotStorage::with_quota(16);
        storage.write("k", "small").unwrap();

        let err = storage.write("k", "this value is far too long").unwrap_err();
        assert!(matches!(err, SlotError::QuotaExceeded { limit: 16, .. }));
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn quota_counts_replacement_not_accumulation() {
        let storage = MemorySlotStorage::with_quota(10);
        storage.write("k", "123456789").unwrap();
        storage.write("k", "987654321").unwrap();
        assert_eq!(storage.used_bytes(), 10);
        assert_eq!(storage.slot_count(), 1);
    }
}
