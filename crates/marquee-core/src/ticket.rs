//! Purchased tickets and the per-movie quota.

use serde::{Deserialize, Serialize};

use crate::movie::MovieId;
use crate::seat::SeatCode;

/// Maximum seats a single user may hold for a single movie.
///
/// The quota counts seats, not ticket records: one ticket covering two seats
/// exhausts it. Pending selections count against the cap immediately.
pub const MAX_TICKETS_PER_MOVIE: usize = 2;

/// A purchased ticket.
///
/// Tickets are immutable once created; cancellation deletes the whole record,
/// never individual seats. `movie_title` is a denormalized copy taken at
/// purchase time and never re-validated against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// The movie this ticket is for.
    pub movie_id: MovieId,

    /// The movie title at purchase time.
    pub movie_title: String,

    /// Seat codes, in selection order.
    pub seats: Vec<SeatCode>,

    /// Purchase timestamp, as an opaque display string.
    pub purchase_date: String,
}

impl Ticket {
    /// Create a ticket record.
    #[must_use]
    pub fn new(
        movie_id: MovieId,
        movie_title: impl Into<String>,
        seats: Vec<SeatCode>,
        purchase_date: impl Into<String>,
    ) -> Self {
        Self {
            movie_id,
            movie_title: movie_title.into(),
            seats,
            purchase_date: purchase_date.into(),
        }
    }

    /// Number of seats on this ticket.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Removal identity: true when the `(movie_id, purchase_date, seats)`
    /// triple matches exactly.
    ///
    /// Seat-list equality is order- and value-sensitive; the title is not
    /// part of the identity. Tickets have no stable id, so two bought in the
    /// same clock second with the same seats are indistinguishable here and
    /// removal takes the first.
    #[must_use]
    pub fn matches(&self, other: &Ticket) -> bool {
        self.movie_id == other.movie_id
            && self.purchase_date == other.purchase_date
            && self.seats == other.seats
    }
}
