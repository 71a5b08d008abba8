//! Storage layer for the marquee ticketing service.
//!
//! Everything persists through [`KeyValue`], a flat string-keyed store with
//! JSON-encoded values. Two backends implement it: [`MemoryKv`] for tests
//! and [`RocksKv`] (behind the `rocksdb-backend` feature) for durable data.
//! The higher-level stores ([`AccountStore`], [`SeatOccupancy`],
//! [`TicketLedger`]) share one backend handle and never cache: every read
//! goes to the store, so concurrent processes on the same data directory
//! observe each other's writes.
//!
//! # Key layout
//!
//! | Key                          | Value                                  |
//! |------------------------------|----------------------------------------|
//! | `users`                      | JSON array of registered users         |
//! | `currentUser`                | JSON object for the active session     |
//! | `tickets_<email>`            | JSON array of the user's tickets       |
//! | `occupiedSeats_movie_<id>`   | JSON array of occupied seat codes      |
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use marquee_core::{MovieId, SeatCode};
//! use marquee_store::{MemoryKv, SeatOccupancy};
//!
//! # fn main() -> marquee_store::Result<()> {
//! let kv = Arc::new(MemoryKv::new());
//! let occupancy = SeatOccupancy::new(kv);
//!
//! let movie = MovieId::new(1);
//! occupancy.occupy(movie, &[SeatCode::new("A1")])?;
//! assert!(occupancy.occupied(movie)?.contains(&SeatCode::new("A1")));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod accounts;
pub mod error;
pub mod keys;
pub mod memory;
pub mod occupancy;
#[cfg(feature = "rocksdb-backend")]
pub mod rocks;
pub mod tickets;
pub mod watch;

pub use accounts::AccountStore;
pub use error::{Result, StoreError};
pub use memory::MemoryKv;
pub use occupancy::SeatOccupancy;
#[cfg(feature = "rocksdb-backend")]
pub use rocks::RocksKv;
pub use tickets::TicketLedger;
pub use watch::ChangeNotifier;

/// A flat string-keyed store with string values.
///
/// Implementations are blocking: a call returns only once the write is
/// applied (or the read is complete). Absent keys read as `Ok(None)`, and
/// removing an absent key is a silent no-op.
pub trait KeyValue: Send + Sync {
    /// Reads the value stored under `key`, or `None` if the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key` and its value. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Decodes a JSON value read from the store.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Encodes a value as JSON for the store.
pub(crate) fn encode<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))
}
