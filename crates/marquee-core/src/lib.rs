//! Core types for the marquee ticketing system.
//!
//! This crate provides the domain model shared by the storage layer and the
//! booking flows:
//!
//! - **Catalog**: [`Movie`], [`MovieId`], [`Catalog`]
//! - **Seats**: [`SeatCode`], [`SeatGrid`]
//! - **Accounts**: [`User`], [`Session`]
//! - **Tickets**: [`Ticket`], [`MAX_TICKETS_PER_MOVIE`]
//! - **Errors**: [`TicketingError`]
//!
//! # Quota
//!
//! A user may hold at most [`MAX_TICKETS_PER_MOVIE`] seats per movie, counted
//! across every ticket they own for it. Pending selections count against the
//! cap immediately, so the limit holds even before a purchase is confirmed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod movie;
pub mod seat;
pub mod session;
pub mod ticket;
pub mod user;

pub use error::{Result, TicketingError};
pub use movie::{Catalog, Movie, MovieId};
pub use seat::{SeatCode, SeatGrid};
pub use session::Session;
pub use ticket::{Ticket, MAX_TICKETS_PER_MOVIE};
pub use user::User;
