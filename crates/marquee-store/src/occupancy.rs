//! Per-movie seat occupancy ledger.
//!
//! Occupancy is tracked per movie, not per showtime: every session of a
//! movie shares one seat map. Seats are persisted as a sorted JSON array
//! under `occupiedSeats_movie_<id>`, and the array is written back even
//! when it becomes empty, so a fully released movie keeps an empty record
//! rather than losing its key.

use std::collections::BTreeSet;
use std::sync::Arc;

use marquee_core::{MovieId, SeatCode};

use crate::error::Result;
use crate::{decode, encode, keys, KeyValue};

/// Ledger of occupied seats, one record per movie.
#[derive(Clone)]
pub struct SeatOccupancy {
    kv: Arc<dyn KeyValue>,
}

impl SeatOccupancy {
    /// Creates a ledger over the given backend.
    pub fn new(kv: Arc<dyn KeyValue>) -> Self {
        Self { kv }
    }

    /// Reads the occupied seats for `movie_id`.
    ///
    /// A movie with no record has no occupied seats.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the record is corrupt.
    pub fn occupied(&self, movie_id: MovieId) -> Result<BTreeSet<SeatCode>> {
        match self.kv.get(&keys::occupied_seats_key(movie_id))? {
            Some(raw) => decode(&raw),
            None => Ok(BTreeSet::new()),
        }
    }

    /// Marks `seats` as occupied for `movie_id`.
    ///
    /// Occupying a seat that is already occupied is idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn occupy(&self, movie_id: MovieId, seats: &[SeatCode]) -> Result<()> {
        let mut occupied = self.occupied(movie_id)?;
        occupied.extend(seats.iter().cloned());
        self.persist(movie_id, &occupied)
    }

    /// Releases `seats` for `movie_id`.
    ///
    /// Releasing a seat that is not occupied is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    pub fn release(&self, movie_id: MovieId, seats: &[SeatCode]) -> Result<()> {
        let mut occupied = self.occupied(movie_id)?;
        for seat in seats {
            occupied.remove(seat);
        }
        self.persist(movie_id, &occupied)
    }

    fn persist(&self, movie_id: MovieId, occupied: &BTreeSet<SeatCode>) -> Result<()> {
        let value = encode(occupied)?;
        tracing::debug!(%movie_id, occupied = occupied.len(), "Persisting seat occupancy");
        self.kv.set(&keys::occupied_seats_key(movie_id), &value)
    }
}
