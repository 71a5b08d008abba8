//! Per-user ticket ledger.
//!
//! Tickets are persisted as a JSON array under `tickets_<email>`, in
//! purchase order. Tickets have no identifier of their own: removal matches
//! on the value triple of movie id, purchase date, and seat list, and takes
//! the first match. Every mutation writes the full array back, so removing
//! from an absent record leaves an empty array behind.

use std::sync::Arc;

use marquee_core::{MovieId, Ticket};

use crate::error::Result;
use crate::{decode, encode, keys, KeyValue};

/// Ledger of purchased tickets, one record per user.
#[derive(Clone)]
pub struct TicketLedger {
    kv: Arc<dyn KeyValue>,
}

impl TicketLedger {
    /// Creates a ledger over the given backend.
    pub fn new(kv: Arc<dyn KeyValue>) -> Self {
        Self { kv }
    }

    /// Reads the tickets owned by `email`, oldest first.
    ///
    /// A user with no record owns no tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the record is corrupt.
    pub fn tickets_for(&self, email: &str) -> Result<Vec<Ticket>> {
        match self.kv.get(&keys::tickets_key(email))? {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Appends `ticket` to the ledger of `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn add(&self, email: &str, ticket: &Ticket) -> Result<()> {
        let mut tickets = self.tickets_for(email)?;
        tickets.push(ticket.clone());
        self.persist(email, &tickets)
    }

    /// Removes the first ticket of `email` matching `ticket`, and reports
    /// whether one was found.
    ///
    /// Matching compares movie id, purchase date, and seat list, via
    /// [`Ticket::matches`]. With no match the ledger is written back
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn remove(&self, email: &str, ticket: &Ticket) -> Result<bool> {
        let mut tickets = self.tickets_for(email)?;

        let removed = match tickets.iter().position(|t| t.matches(ticket)) {
            Some(index) => {
                tickets.remove(index);
                true
            }
            None => {
                tracing::debug!(email, movie_id = %ticket.movie_id, "No matching ticket to remove");
                false
            }
        };

        self.persist(email, &tickets)?;
        Ok(removed)
    }

    /// Counts the seats `email` holds across all tickets for `movie_id`.
    ///
    /// The per-movie quota counts seats, not tickets, so two one-seat
    /// tickets weigh the same as one two-seat ticket.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the record is corrupt.
    pub fn seats_owned(&self, email: &str, movie_id: MovieId) -> Result<usize> {
        let tickets = self.tickets_for(email)?;

        Ok(tickets
            .iter()
            .filter(|t| t.movie_id == movie_id)
            .map(Ticket::seat_count)
            .sum())
    }

    fn persist(&self, email: &str, tickets: &[Ticket]) -> Result<()> {
        let value = encode(&tickets)?;
        tracing::debug!(email, count = tickets.len(), "Persisting ticket ledger");
        self.kv.set(&keys::tickets_key(email), &value)
    }
}
