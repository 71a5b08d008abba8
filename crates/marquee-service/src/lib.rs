//! Marquee ticketing service.
//!
//! This crate ties the ticketing flows to a storage backend, including:
//!
//! - Account registration, login, and logout
//! - Seat selection against the per-movie occupancy map
//! - Purchase confirmation under the per-movie seat quota
//! - Cancellation with seat release
//!
//! Flows are synchronous and blocking, like the storage they write to. The
//! binary in `main.rs` drives them from an interactive console; the flows
//! themselves never print, so any front end can sit on top.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod auth;
pub mod booking;
pub mod clock;
pub mod config;
pub mod state;

pub use auth::SessionManager;
pub use booking::{BoxOffice, SeatSelection, SeatToggle};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ServiceConfig;
pub use state::AppState;
