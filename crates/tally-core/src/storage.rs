use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use crate::StorageError;

/// Slot holding the serialized budget object.
pub const BUDGET_KEY: &str = "budget";
/// Slot holding the serialized transaction list.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Abstraction over a durable key-value backend holding text values.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Writes several slots as one unit. Backends that can stage writes
    /// override this so a failure leaves every slot at its previous value.
    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// In-process backend. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        for (key, value) in entries {
            slots.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError> {
        (**self).set_all(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert!(store.get(BUDGET_KEY).unwrap().is_none());
        store.set(BUDGET_KEY, "{}").unwrap();
        store.set(BUDGET_KEY, "[]").unwrap();
        assert_eq!(store.get(BUDGET_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_store_writes_batches() {
        let store = MemoryStore::new();
        store
            .set_all(&[(BUDGET_KEY, "{}"), (TRANSACTIONS_KEY, "[]")])
            .unwrap();
        assert_eq!(store.get(TRANSACTIONS_KEY).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 2);
    }
}
