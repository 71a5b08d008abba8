//! Common test utilities for marquee integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use tempfile::TempDir;

use marquee_core::{MovieId, SeatCode, SeatGrid, Ticket};
use marquee_service::{AppState, FixedClock, ServiceConfig};
use marquee_store::RocksKv;

/// Timestamp every test purchase is stamped with.
pub const TEST_INSTANT: &str = "01/01/2025 20:00:00";

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The application state under test.
    pub state: AppState,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with a fresh database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = RocksKv::open(temp_dir.path()).expect("Failed to open store");

        let config = ServiceConfig {
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            grid: SeatGrid::default(),
        };

        let state = AppState::new(
            Arc::new(store),
            Arc::new(FixedClock::new(TEST_INSTANT)),
            config,
        );

        Self {
            state,
            _temp_dir: temp_dir,
        }
    }

    /// Log in as `email`, registering the account first if needed.
    pub fn log_in_as(&self, email: &str) {
        let _ = self.state.sessions.sign_up(email, "pw");
        self.state
            .sessions
            .log_in(email, "pw")
            .expect("Failed to log in");
    }

    /// Buy the given seats for a movie as the logged-in user.
    pub fn buy(&self, movie_id: u32, seats: &[&str]) -> Ticket {
        let mut selection = self
            .state
            .box_office
            .start_selection(MovieId::new(movie_id))
            .expect("Failed to open selection");

        for code in seats {
            selection
                .toggle_seat(&SeatCode::new(*code))
                .expect("Failed to select seat");
        }

        selection.confirm().expect("Failed to confirm purchase")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
