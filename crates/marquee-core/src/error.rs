//! Error types for marquee ticketing.

use crate::movie::MovieId;

/// Result type for ticketing operations.
pub type Result<T> = std::result::Result<T, TicketingError>;

/// Errors that can occur in ticketing operations.
///
/// Every variant is recoverable and user-facing: the flows detect them
/// synchronously and return them to the caller, which reports them through
/// its notification channel. Nothing here is retried or escalated.
#[derive(Debug, thiserror::Error)]
pub enum TicketingError {
    /// A purchase was confirmed with nobody logged in.
    #[error("not authenticated: log in to confirm a purchase")]
    NotAuthenticated,

    /// The current-user record vanished or changed after selection started.
    #[error("session expired: log in again to confirm a purchase")]
    SessionExpired,

    /// A purchase was confirmed with no seats chosen.
    #[error("no seats selected")]
    EmptySelection,

    /// Selecting the seat would exceed the per-movie quota.
    #[error("seat limit reached: at most {limit} seats per movie ({remaining} remaining)")]
    SeatLimitReached {
        /// The quota.
        limit: usize,
        /// Seats still available to this user for this movie.
        remaining: usize,
    },

    /// The quota re-check at confirm time failed (stale selection state).
    #[error("ticket quota exceeded: owns {owned}, requested {requested}, limit {limit}")]
    QuotaExceeded {
        /// Seats the user already owns for the movie.
        owned: usize,
        /// Seats in the pending selection.
        requested: usize,
        /// The quota.
        limit: usize,
    },

    /// Seat selection was requested for an id not in the catalog.
    #[error("movie not found: {movie_id}")]
    MovieNotFound {
        /// The unknown movie id.
        movie_id: MovieId,
    },

    /// Sign-up with an email that is already registered.
    #[error("email already registered: {email}")]
    EmailTaken {
        /// The email that is taken.
        email: String,
    },

    /// Login with an unknown email or a wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
