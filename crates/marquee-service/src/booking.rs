//! Seat selection, purchase, and cancellation flows.
//!
//! A [`SeatSelection`] is the working state of one visit to a movie's seat
//! map: a snapshot of the occupied seats plus the visitor's pending picks.
//! Pending picks live only in the selection. Nothing is persisted until
//! [`SeatSelection::confirm`], which re-checks the session and the quota
//! against the store before writing, so a selection that went stale fails
//! instead of overselling.
//!
//! The quota counts seats, not tickets: across all of a user's tickets for
//! one movie, at most [`MAX_TICKETS_PER_MOVIE`] seats, with pending picks
//! counting immediately.

use std::collections::BTreeSet;
use std::sync::Arc;

use marquee_core::{
    Catalog, Movie, MovieId, Result, SeatCode, Ticket, TicketingError, MAX_TICKETS_PER_MOVIE,
};
use marquee_store::{AccountStore, SeatOccupancy, TicketLedger};

use crate::clock::Clock;

/// Catalog, occupancy, and purchase flows over one storage backend.
#[derive(Clone)]
pub struct BoxOffice {
    catalog: Catalog,
    occupancy: SeatOccupancy,
    tickets: TicketLedger,
    accounts: AccountStore,
    clock: Arc<dyn Clock>,
}

impl BoxOffice {
    /// Creates a box office over the given stores and clock.
    pub fn new(
        catalog: Catalog,
        occupancy: SeatOccupancy,
        tickets: TicketLedger,
        accounts: AccountStore,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            occupancy,
            tickets,
            accounts,
            clock,
        }
    }

    /// Every movie in the catalog, in listing order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        self.catalog.movies()
    }

    /// Looks up a movie by id.
    #[must_use]
    pub fn movie(&self, movie_id: MovieId) -> Option<&Movie> {
        self.catalog.find(movie_id)
    }

    /// The occupied seats for `movie_id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails.
    pub fn occupied(&self, movie_id: MovieId) -> Result<BTreeSet<SeatCode>> {
        Ok(self.occupancy.occupied(movie_id)?)
    }

    /// The tickets owned by `email`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails.
    pub fn tickets_for(&self, email: &str) -> Result<Vec<Ticket>> {
        Ok(self.tickets.tickets_for(email)?)
    }

    /// Opens a seat selection for `movie_id`.
    ///
    /// The selection snapshots the occupied seats, the session, and the
    /// seats the visitor already owns for this movie. Selecting seats does
    /// not require a login; confirming does.
    ///
    /// # Errors
    ///
    /// Returns [`TicketingError::MovieNotFound`] for an id outside the
    /// catalog, or a storage error if the backend fails.
    pub fn start_selection(&self, movie_id: MovieId) -> Result<SeatSelection<'_>> {
        let movie = match self.catalog.find(movie_id) {
            Some(movie) => movie.clone(),
            None => return Err(TicketingError::MovieNotFound { movie_id }),
        };

        let occupied = self.occupancy.occupied(movie_id)?;
        let user = self.accounts.session()?.email().map(str::to_string);
        let owned = match &user {
            Some(email) => self.tickets.seats_owned(email, movie_id)?,
            None => 0,
        };

        tracing::debug!(%movie_id, occupied = occupied.len(), owned, "Seat selection opened");

        Ok(SeatSelection {
            office: self,
            movie,
            user,
            occupied,
            selected: Vec::new(),
            owned,
        })
    }

    /// Cancels a purchased ticket and frees its seats.
    ///
    /// The first ticket of `email` matching `ticket` by movie id, purchase
    /// date, and seat list is removed. The seats are released either way:
    /// a cancellation that matches nothing still frees the seats named in
    /// `ticket`.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails.
    pub fn cancel_purchase(&self, email: &str, ticket: &Ticket) -> Result<()> {
        let removed = self.tickets.remove(email, ticket)?;
        self.occupancy.release(ticket.movie_id, &ticket.seats)?;

        tracing::info!(email, movie_id = %ticket.movie_id, removed, "Purchase cancelled");
        Ok(())
    }
}

/// Outcome of toggling one seat in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    /// The seat joined the pending selection.
    Selected,
    /// The seat left the pending selection.
    Deselected,
    /// The seat is occupied and the toggle did nothing.
    Ignored,
}

/// One visit to a movie's seat map.
///
/// Created by [`BoxOffice::start_selection`]. Holds the pending picks and
/// a snapshot of store state; [`SeatSelection::refresh`] re-reads the
/// snapshot when the store changed underneath.
pub struct SeatSelection<'a> {
    office: &'a BoxOffice,
    movie: Movie,
    user: Option<String>,
    occupied: BTreeSet<SeatCode>,
    selected: Vec<SeatCode>,
    owned: usize,
}

impl SeatSelection<'_> {
    /// The movie this selection is for.
    #[must_use]
    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    /// The occupied seats as of the last snapshot.
    #[must_use]
    pub fn occupied(&self) -> &BTreeSet<SeatCode> {
        &self.occupied
    }

    /// The pending picks, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[SeatCode] {
        &self.selected
    }

    /// Seats the visitor already owns for this movie.
    #[must_use]
    pub fn owned(&self) -> usize {
        self.owned
    }

    /// Whether `seat` is occupied in the snapshot.
    #[must_use]
    pub fn is_occupied(&self, seat: &SeatCode) -> bool {
        self.occupied.contains(seat)
    }

    /// Whether `seat` is a pending pick.
    #[must_use]
    pub fn is_selected(&self, seat: &SeatCode) -> bool {
        self.selected.iter().any(|s| s == seat)
    }

    /// Toggles `seat` in the pending selection.
    ///
    /// Occupied seats are ignored. Deselecting always works; selecting is
    /// capped so that owned plus pending seats never pass the quota.
    ///
    /// # Errors
    ///
    /// Returns [`TicketingError::SeatLimitReached`] when the pick would
    /// exceed [`MAX_TICKETS_PER_MOVIE`].
    pub fn toggle_seat(&mut self, seat: &SeatCode) -> Result<SeatToggle> {
        if self.occupied.contains(seat) {
            return Ok(SeatToggle::Ignored);
        }

        if let Some(index) = self.selected.iter().position(|s| s == seat) {
            self.selected.remove(index);
            return Ok(SeatToggle::Deselected);
        }

        let held = self.owned + self.selected.len();
        if held >= MAX_TICKETS_PER_MOVIE {
            return Err(TicketingError::SeatLimitReached {
                limit: MAX_TICKETS_PER_MOVIE,
                remaining: MAX_TICKETS_PER_MOVIE.saturating_sub(held),
            });
        }

        self.selected.push(seat.clone());
        Ok(SeatToggle::Selected)
    }

    /// Confirms the pending selection as a purchase.
    ///
    /// Validation runs against the store, not the snapshot: the session is
    /// re-read, and the quota is re-counted from the persisted tickets. On
    /// success the seats become occupied, the ticket lands in the ledger
    /// stamped with the clock's current time, and the pending selection is
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns [`TicketingError::NotAuthenticated`] when the selection was
    /// opened without a login, [`TicketingError::SessionExpired`] when the
    /// session vanished or changed hands since, [`TicketingError::EmptySelection`]
    /// with no pending picks, [`TicketingError::QuotaExceeded`] when the
    /// re-count fails (the snapshot is refreshed before returning), or a
    /// storage error if the backend fails.
    pub fn confirm(&mut self) -> Result<Ticket> {
        let email = match &self.user {
            Some(email) => email.clone(),
            None => return Err(TicketingError::NotAuthenticated),
        };

        match self.office.accounts.session()?.email() {
            Some(current) if current == email => {}
            _ => return Err(TicketingError::SessionExpired),
        }

        if self.selected.is_empty() {
            return Err(TicketingError::EmptySelection);
        }

        let owned_now = self.office.tickets.seats_owned(&email, self.movie.id)?;
        if owned_now + self.selected.len() > MAX_TICKETS_PER_MOVIE {
            let requested = self.selected.len();
            self.reload(owned_now)?;
            return Err(TicketingError::QuotaExceeded {
                owned: owned_now,
                requested,
                limit: MAX_TICKETS_PER_MOVIE,
            });
        }

        self.office.occupancy.occupy(self.movie.id, &self.selected)?;

        let seats = std::mem::take(&mut self.selected);
        let ticket = Ticket::new(
            self.movie.id,
            self.movie.title.clone(),
            seats,
            self.office.clock.now(),
        );
        self.office.tickets.add(&email, &ticket)?;

        self.owned = owned_now + ticket.seat_count();
        self.occupied.extend(ticket.seats.iter().cloned());

        tracing::info!(
            email = %email,
            movie_id = %self.movie.id,
            seats = ticket.seat_count(),
            "Purchase confirmed"
        );

        Ok(ticket)
    }

    /// Re-reads the session, the occupied seats, and the owned count from
    /// the store.
    ///
    /// Pending picks are kept as they are. Callers run this when notified
    /// that the store changed underneath the selection.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails.
    pub fn refresh(&mut self) -> Result<()> {
        self.user = self.office.accounts.session()?.email().map(str::to_string);

        let owned = match &self.user {
            Some(email) => self.office.tickets.seats_owned(email, self.movie.id)?,
            None => 0,
        };

        self.reload(owned)
    }

    fn reload(&mut self, owned: usize) -> Result<()> {
        self.occupied = self.office.occupancy.occupied(self.movie.id)?;
        self.owned = owned;
        Ok(())
    }
}
