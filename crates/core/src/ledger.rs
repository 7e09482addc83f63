// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reservation ledger
//!
//! The ledger is the single owner of seat availability, active reservations
//! and issued passenger IDs. Every operation is synchronous and either
//! completes fully or leaves the ledger untouched.
//!
//! Invariants maintained by every operation:
//! - free seats and seats held by active reservations partition `1..=100`
//! - every map key equals its reservation's ticket number
//! - every active passenger ID is in the used set, and used IDs are never
//!   released

use crate::clock::{Clock, SystemClock};
use crate::random::{RandomSource, ThreadRandom};
use crate::reservation::{
    is_window_seat, PassengerId, Reservation, TicketNumber, PASSENGER_IDS, SEATS,
    TICKET_EXTENSIONS,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

/// Status reported by a successful `reserve`
pub const BOOKING_SUCCESSFUL: &str = "Booking successful";

/// Status reported by a successful `cancel`
pub const CANCELLATION_SUCCESSFUL: &str = "Cancellation Successful";

/// Status reported by a successful `update`
pub const BOOKING_UPDATED: &str = "Booking updated successfully";

/// Errors returned by ledger operations.
///
/// The display text is the status message shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Ticket not found")]
    NotFound { ticket: String },

    #[error("Ticket already cancelled")]
    AlreadyCancelled { ticket: String },

    #[error("Selected seat is not available")]
    SeatUnavailable { seat: u32 },

    #[error("No seats available")]
    Exhausted,

    #[error("No passenger IDs available")]
    PassengerIdsExhausted,

    #[error("Ticket {ticket} already exists")]
    DuplicateTicket { ticket: String },
}

/// Result of a successful seat change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatChange {
    pub ticket_number: TicketNumber,
    pub from: u32,
    pub to: u32,
}

/// In-memory reservation ledger
pub struct Ledger<C: Clock = SystemClock, R: RandomSource = ThreadRandom> {
    reservations: HashMap<TicketNumber, Reservation>,
    available_seats: BTreeSet<u32>,
    used_passenger_ids: HashSet<PassengerId>,
    clock: C,
    random: R,
}

impl Ledger {
    /// Create an empty ledger backed by the system clock and thread RNG
    pub fn new() -> Self {
        Self::with_sources(SystemClock, ThreadRandom)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, R: RandomSource> Ledger<C, R> {
    /// Create an empty ledger: every seat free, no reservations, no IDs issued
    pub fn with_sources(clock: C, random: R) -> Self {
        Self {
            reservations: HashMap::new(),
            available_seats: SEATS.collect(),
            used_passenger_ids: HashSet::new(),
            clock,
            random,
        }
    }

    /// Book a random free seat under a freshly issued passenger ID
    pub fn reserve(&mut self) -> Result<Reservation, LedgerError> {
        if self.available_seats.is_empty() {
            return Err(LedgerError::Exhausted);
        }

        let passenger_id = self.draw_passenger_id()?;
        let extension = self.random.draw(TICKET_EXTENSIONS);
        let ticket_number = TicketNumber::issue(passenger_id, extension);
        if self.reservations.contains_key(&ticket_number) {
            return Err(LedgerError::DuplicateTicket {
                ticket: ticket_number.0,
            });
        }

        let seat = self.pick_free_seat().ok_or(LedgerError::Exhausted)?;
        self.used_passenger_ids.insert(passenger_id);
        self.available_seats.remove(&seat);

        let reservation =
            Reservation::new(passenger_id, ticket_number.clone(), seat, self.clock.now());
        self.reservations.insert(ticket_number, reservation.clone());

        debug!(
            ticket = %reservation.ticket_number,
            seat,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Cancel an active reservation, releasing its seat.
    ///
    /// Returns the removed reservation with its cancellation time stamped.
    pub fn cancel(&mut self, ticket: &str) -> Result<Reservation, LedgerError> {
        let existing = self
            .reservations
            .get(ticket)
            .ok_or_else(|| LedgerError::NotFound {
                ticket: ticket.to_string(),
            })?;
        // Unreachable while cancel removes entries; kept for a soft-delete policy
        if existing.is_cancelled() {
            return Err(LedgerError::AlreadyCancelled {
                ticket: ticket.to_string(),
            });
        }

        let Some(mut reservation) = self.reservations.remove(ticket) else {
            return Err(LedgerError::NotFound {
                ticket: ticket.to_string(),
            });
        };
        self.available_seats.insert(reservation.seat_number);
        reservation.cancellation_time = Some(self.clock.now());

        debug!(
            ticket = %reservation.ticket_number,
            seat = reservation.seat_number,
            "reservation cancelled"
        );
        Ok(reservation)
    }

    /// Move an active reservation to another free seat.
    ///
    /// The reservation's own seat is not free while held, so asking for it
    /// again is rejected rather than treated as a no-op.
    pub fn update(&mut self, ticket: &str, new_seat: u32) -> Result<SeatChange, LedgerError> {
        let reservation = self
            .reservations
            .get_mut(ticket)
            .ok_or_else(|| LedgerError::NotFound {
                ticket: ticket.to_string(),
            })?;
        if !self.available_seats.contains(&new_seat) {
            return Err(LedgerError::SeatUnavailable { seat: new_seat });
        }

        let old_seat = reservation.seat_number;
        self.available_seats.insert(old_seat);
        self.available_seats.remove(&new_seat);
        reservation.seat_number = new_seat;

        debug!(ticket, from = old_seat, to = new_seat, "reservation moved");
        Ok(SeatChange {
            ticket_number: reservation.ticket_number.clone(),
            from: old_seat,
            to: new_seat,
        })
    }

    /// Look up an active reservation
    pub fn get_info(&self, ticket: &str) -> Option<&Reservation> {
        self.reservations.get(ticket)
    }

    pub fn available_seat_count(&self) -> usize {
        self.available_seats.len()
    }

    /// Free seats in ascending order
    pub fn available_seats(&self) -> impl Iterator<Item = u32> + '_ {
        self.available_seats.iter().copied()
    }

    /// `(seat, ticket)` for every active window-seat reservation, ascending
    pub fn window_seats(&self) -> Vec<(u32, TicketNumber)> {
        let mut seats: Vec<_> = self
            .reservations
            .values()
            .filter(|r| is_window_seat(r.seat_number))
            .map(|r| (r.seat_number, r.ticket_number.clone()))
            .collect();
        seats.sort();
        seats
    }

    /// Active reservations, in no particular order
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Passenger IDs issued or loaded during this process lifetime
    pub fn used_passenger_ids(&self) -> &HashSet<PassengerId> {
        &self.used_passenger_ids
    }

    /// Re-insert a reservation read back from a checkpoint.
    ///
    /// Takes its seat out of the free pool and marks its passenger ID used.
    /// Nothing changes if the ticket already exists or the seat is not free.
    pub fn restore(&mut self, reservation: Reservation) -> Result<(), LedgerError> {
        if self.reservations.contains_key(&reservation.ticket_number) {
            return Err(LedgerError::DuplicateTicket {
                ticket: reservation.ticket_number.0,
            });
        }
        if !self.available_seats.remove(&reservation.seat_number) {
            return Err(LedgerError::SeatUnavailable {
                seat: reservation.seat_number,
            });
        }

        self.used_passenger_ids.insert(reservation.passenger_id);
        self.reservations
            .insert(reservation.ticket_number.clone(), reservation);
        Ok(())
    }

    /// Mark a passenger ID as used without holding a reservation
    pub fn retire_passenger_id(&mut self, passenger_id: PassengerId) {
        self.used_passenger_ids.insert(passenger_id);
    }

    /// Rejection-sample an unused passenger ID
    fn draw_passenger_id(&self) -> Result<PassengerId, LedgerError> {
        let pool = PASSENGER_IDS.count();
        let issued = self
            .used_passenger_ids
            .iter()
            .filter(|id| PASSENGER_IDS.contains(&id.0))
            .count();
        if issued >= pool {
            return Err(LedgerError::PassengerIdsExhausted);
        }

        loop {
            let candidate = PassengerId(self.random.draw(PASSENGER_IDS));
            if !self.used_passenger_ids.contains(&candidate) {
                return Ok(candidate);
            }
        }
    }

    fn pick_free_seat(&self) -> Option<u32> {
        let last = u32::try_from(self.available_seats.len())
            .ok()?
            .checked_sub(1)?;
        let index = usize::try_from(self.random.draw(0..=last)).ok()?;
        self.available_seats.iter().nth(index).copied()
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
