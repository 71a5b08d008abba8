//! Application state.

use std::sync::Arc;

use marquee_core::Catalog;
use marquee_store::{AccountStore, ChangeNotifier, KeyValue, SeatOccupancy, TicketLedger};

use crate::auth::SessionManager;
use crate::booking::BoxOffice;
use crate::clock::Clock;
use crate::config::ServiceConfig;

/// Application state wiring every flow to one storage backend.
#[derive(Clone)]
pub struct AppState {
    /// Account registration and session flows.
    pub sessions: SessionManager,

    /// Catalog, occupancy, and purchase flows.
    pub box_office: BoxOffice,

    /// Out-of-band storage change signals.
    pub watcher: ChangeNotifier,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create application state over the given backend and clock.
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValue>, clock: Arc<dyn Clock>, config: ServiceConfig) -> Self {
        let accounts = AccountStore::new(Arc::clone(&kv));
        let occupancy = SeatOccupancy::new(Arc::clone(&kv));
        let tickets = TicketLedger::new(kv);

        let catalog = Catalog::new();
        tracing::info!(
            movies = catalog.movies().len(),
            seats = config.grid.seat_count(),
            "Box office ready"
        );

        Self {
            sessions: SessionManager::new(accounts.clone()),
            box_office: BoxOffice::new(catalog, occupancy, tickets, accounts, clock),
            watcher: ChangeNotifier::new(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use marquee_core::MovieId;
    use marquee_store::MemoryKv;

    use crate::clock::FixedClock;

    #[test]
    fn flows_share_one_backend() {
        let state = AppState::new(
            Arc::new(MemoryKv::new()),
            Arc::new(FixedClock::new("01/01/2025 20:00:00")),
            ServiceConfig::default(),
        );

        state.sessions.sign_up("ana@example.com", "secret").unwrap();
        state.sessions.log_in("ana@example.com", "secret").unwrap();

        // The box office sees the session written through the session manager.
        let mut selection = state.box_office.start_selection(MovieId::new(1)).unwrap();
        selection
            .toggle_seat(&marquee_core::SeatCode::new("A1"))
            .unwrap();
        assert!(selection.confirm().is_ok());
    }

    #[test]
    fn catalog_is_loaded() {
        let state = AppState::new(
            Arc::new(MemoryKv::new()),
            Arc::new(FixedClock::new("01/01/2025 20:00:00")),
            ServiceConfig::default(),
        );

        assert_eq!(state.box_office.movies().len(), 10);
    }
}
