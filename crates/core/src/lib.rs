// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ars-core: Reservation ledger for the airline reservation system (ars)
//!
//! This crate provides:
//! - The reservation entity and its identifiers
//! - The in-memory ledger that owns seat availability and issued IDs
//! - Clock and randomness seams so allocation is testable

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod clock;
pub mod ledger;
pub mod random;
pub mod reservation;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use ledger::{
    Ledger, LedgerError, SeatChange, BOOKING_SUCCESSFUL, BOOKING_UPDATED,
    CANCELLATION_SUCCESSFUL,
};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use reservation::{
    is_window_seat, PassengerId, Reservation, TicketNumber, PASSENGER_IDS, SEATS, SEAT_COUNT,
    TICKET_EXTENSIONS,
};
