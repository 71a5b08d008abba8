//! Error types for the storage layer.

use marquee_core::TicketingError;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database error.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<StoreError> for TicketingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(msg) => TicketingError::Storage(msg),
            StoreError::Serialization(msg) => TicketingError::Serialization(msg),
        }
    }
}
