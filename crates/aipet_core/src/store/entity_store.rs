use super::error::{StoreError, StoreResult};
use super::query::{shape_results, Criteria, OrderBy};
use crate::config::StoreConfig;
use crate::model::{Entity, Record, RecordMeta, Timestamp};
use crate::storage::{slot_key, SlotStorage};
use chrono::Utc;
use log::{debug, error, info};
use uuid::Uuid;

const ID_SUFFIX_LEN: usize = 9;

/// CRUD and query access to the collection of one entity type.
///
/// The store loads its slot once in [`EntityStore::open`] and afterwards
/// only writes it. Another instance over the same slot will not see this
/// instance's changes until it is reopened.
pub struct EntityStore<T: Entity, S: SlotStorage> {
    storage: S,
    config: StoreConfig,
    key: String,
    records: Vec<Record<T>>,
}

impl<T: Entity, S: SlotStorage> EntityStore<T, S> {
    /// Opens the collection with default configuration.
    pub fn open(storage: S) -> StoreResult<Self> {
        Self::open_with_config(storage, StoreConfig::default())
    }

    /// Opens the collection, loading any previously persisted snapshot.
    ///
    /// # Errors
    /// - `Slot` when the backend read fails.
    /// - `Decode` when the slot holds data that is not a list of `T` records.
    pub fn open_with_config(storage: S, config: StoreConfig) -> StoreResult<Self> {
        let key = slot_key(&config.key_prefix, T::COLLECTION);

        let records = match storage.read(&key) {
            Ok(Some(blob)) => serde_json::from_str::<Vec<Record<T>>>(&blob).map_err(|source| {
                error!(
                    "event=store_open module=store status=error collection={} error_code=decode_failed error={}",
                    T::COLLECTION,
                    source
                );
                StoreError::Decode {
                    collection: T::COLLECTION,
                    source,
                }
            })?,
            Ok(None) => Vec::new(),
            Err(err) => {
                error!(
                    "event=store_open module=store status=error collection={} error_code=slot_read_failed error={}",
                    T::COLLECTION,
                    err
                );
                return Err(err.into());
            }
        };

        info!(
            "event=store_open module=store status=ok collection={} count={}",
            T::COLLECTION,
            records.len()
        );

        Ok(Self {
            storage,
            config,
            key,
            records,
        })
    }

    pub fn collection(&self) -> &'static str {
        T::COLLECTION
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a copy of the record with `id`, if present.
    pub fn get(&self, id: &str) -> Option<Record<T>> {
        self.records.iter().find(|record| record.meta.id == id).cloned()
    }

    /// Returns a copy of the collection, optionally sorted and truncated.
    ///
    /// Without `order_by` records come back in insertion order.
    pub fn list(&self, order_by: Option<&OrderBy<T::Field>>, limit: Option<usize>) -> Vec<Record<T>> {
        let mut result = self.records.clone();
        shape_results(&mut result, order_by, limit);
        result
    }

    /// Returns records matching every clause of `criteria`.
    ///
    /// Ordering and limit behave as in [`EntityStore::list`].
    pub fn filter(
        &self,
        criteria: &Criteria<T::Field>,
        order_by: Option<&OrderBy<T::Field>>,
        limit: Option<usize>,
    ) -> Vec<Record<T>> {
        let mut result: Vec<Record<T>> = self
            .records
            .iter()
            .filter(|record| criteria.matches(*record))
            .cloned()
            .collect();
        shape_results(&mut result, order_by, limit);
        result
    }

    /// Stores `data` as a new record.
    ///
    /// # Contract
    /// - Assigns a fresh id and stamps `created_date == updated_date`.
    /// - `created_by` is the configured principal.
    /// - Returns only after the slot write succeeded.
    pub fn create(&mut self, data: T) -> StoreResult<Record<T>> {
        let now = Utc::now();
        let record = Record {
            meta: RecordMeta {
                id: self.next_id(now),
                created_date: now,
                updated_date: now,
                created_by: self.config.principal.clone(),
            },
            data,
        };

        let mut next = self.records.clone();
        next.push(record.clone());
        self.commit(next, "create", &record.meta.id)?;

        Ok(record)
    }

    /// Merges `patch` over the record with `id`.
    ///
    /// # Contract
    /// - `NotFound` when `id` is absent; nothing is written.
    /// - `id`, `created_date` and `created_by` are preserved.
    /// - `updated_date` never moves backwards, even if the wall clock does.
    pub fn update(&mut self, id: &str, patch: T::Patch) -> StoreResult<Record<T>> {
        let index = self.position(id)?;

        let mut updated = self.records[index].clone();
        updated.data.apply_patch(patch);
        updated.meta.updated_date = Utc::now().max(updated.meta.updated_date);

        let mut next = self.records.clone();
        next[index] = updated.clone();
        self.commit(next, "update", id)?;

        Ok(updated)
    }

    /// Permanently removes the record with `id`.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        let index = self.position(id)?;

        let mut next = self.records.clone();
        next.remove(index);
        self.commit(next, "delete", id)
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.records
            .iter()
            .position(|record| record.meta.id == id)
            .ok_or_else(|| StoreError::NotFound {
                collection: T::COLLECTION,
                id: id.to_string(),
            })
    }

    /// Persists `next` and, only on success, adopts it as the in-memory state.
    fn commit(&mut self, next: Vec<Record<T>>, op: &'static str, id: &str) -> StoreResult<()> {
        let blob = serde_json::to_string(&next).map_err(|source| StoreError::Encode {
            collection: T::COLLECTION,
            source,
        })?;

        if let Err(err) = self.storage.write(&self.key, &blob) {
            error!(
                "event=store_write module=store status=error op={op} collection={} error_code=slot_write_failed error={}",
                T::COLLECTION,
                err
            );
            return Err(err.into());
        }

        self.records = next;
        debug!(
            "event=store_write module=store status=ok op={op} collection={} id={id} count={} bytes={}",
            T::COLLECTION,
            self.records.len(),
            blob.len()
        );
        Ok(())
    }

    /// Draws `{collection}_{millis}_{suffix}` ids until one is unused.
    fn next_id(&self, now: Timestamp) -> String {
        loop {
            let candidate = format!(
                "{}_{}_{}",
                T::COLLECTION,
                now.timestamp_millis(),
                random_suffix(ID_SUFFIX_LEN)
            );
            if self.records.iter().all(|record| record.meta.id != candidate) {
                return candidate;
            }
        }
    }
}

/// Base-36 characters drawn from a v4 UUID's random bits.
fn random_suffix(len: usize) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut bits = Uuid::new_v4().as_u128();
    let mut suffix = String::with_capacity(len);
    for _ in 0..len {
        suffix.push(char::from(ALPHABET[(bits % 36) as usize]));
        bits /= 36;
    }
    suffix
}

#[cfg(test)]
mod tests {
    use super::random_suffix;
    use std::collections::HashSet;

    #[test]
    fn random_suffix_is_base36_of_requested_length() {
        let suffix = random_suffix(9);
        assert_eq!(suffix.len(), 9);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn random_suffixes_do_not_repeat_in_a_burst() {
        let suffixes: HashSet<_> = (0..1_000).map(|_| random_suffix(9)).collect();
        assert_eq!(suffixes.len(), 1_000);
    }
}
