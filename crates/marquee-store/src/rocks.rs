//! `RocksDB` key-value backend.
//!
//! This module provides the `RocksKv` implementation of the [`KeyValue`]
//! trait. The keyspace is flat, so everything lives in the default column
//! family. Values are stored as UTF-8 strings.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{DBWithThreadMode, MultiThreaded, Options};

use crate::error::{Result, StoreError};
use crate::KeyValue;

/// `RocksDB`-backed key-value store.
pub struct RocksKv {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksKv {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::open(&opts, path)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValue for RocksKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .get(key.as_bytes())
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| {
                String::from_utf8(data).map_err(|e| StoreError::Serialization(e.to_string()))
            })
            .transpose()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .put(key.as_bytes(), value.as_bytes())
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.db
            .delete(key.as_bytes())
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}
