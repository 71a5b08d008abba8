//! In-memory key-value backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, StoreError};
use crate::KeyValue;

/// An in-memory [`KeyValue`] backend.
///
/// Data lives only as long as the process. Used in tests and anywhere a
/// throwaway store is enough.
#[derive(Debug, Default)]
pub struct MemoryKv {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| StoreError::Database(format!("lock poisoned: {e}")))
    }
}

impl KeyValue for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_remove() {
        let kv = MemoryKv::new();

        assert_eq!(kv.get("missing").unwrap(), None);

        kv.set("greeting", "hello").unwrap();
        assert_eq!(kv.get("greeting").unwrap(), Some("hello".to_string()));

        kv.set("greeting", "goodbye").unwrap();
        assert_eq!(kv.get("greeting").unwrap(), Some("goodbye".to_string()));

        kv.remove("greeting").unwrap();
        assert_eq!(kv.get("greeting").unwrap(), None);
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let kv = MemoryKv::new();
        kv.remove("never-set").unwrap();
        assert_eq!(kv.get("never-set").unwrap(), None);
    }
}
