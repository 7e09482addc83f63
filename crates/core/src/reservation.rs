// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reservation entity
//!
//! A reservation represents one booked seat. Its ticket number is the
//! stable key; the seat may change in place while the reservation is active.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::ops::RangeInclusive;

/// Number of seats on the aircraft
pub const SEAT_COUNT: usize = 100;

/// Valid seat numbers
pub const SEATS: RangeInclusive<u32> = 1..=100;

/// Range passenger IDs are drawn from
pub const PASSENGER_IDS: RangeInclusive<u32> = 100..=999;

/// Range ticket number extensions are drawn from
pub const TICKET_EXTENSIONS: RangeInclusive<u32> = 10000..=99999;

/// Window seats are every third seat starting at 1
pub fn is_window_seat(seat: u32) -> bool {
    seat % 3 == 1
}

/// Passenger identifier, issued once per booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerId(pub u32);

impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PassengerId {
    fn from(id: u32) -> Self {
        PassengerId(id)
    }
}

/// Ticket number: `<passenger id>-<extension>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketNumber(pub String);

impl TicketNumber {
    /// Build a ticket number from a passenger ID and a numeric extension
    pub fn issue(passenger_id: PassengerId, extension: u32) -> Self {
        TicketNumber(format!("{}-{:05}", passenger_id, extension))
    }

    /// Passenger ID encoded in the ticket prefix, if the ticket is well-formed
    pub fn passenger_id(&self) -> Option<PassengerId> {
        let (prefix, extension) = self.0.split_once('-')?;
        if extension.len() != 5 || !extension.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Plain decimal, no sign or leading zeros, so each ID has one spelling
        if prefix.is_empty()
            || prefix.starts_with('0')
            || !prefix.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        prefix.parse().ok().map(PassengerId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TicketNumber {
    fn from(s: String) -> Self {
        TicketNumber(s)
    }
}

impl From<&str> for TicketNumber {
    fn from(s: &str) -> Self {
        TicketNumber(s.to_string())
    }
}

impl Borrow<str> for TicketNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A booked seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub passenger_id: PassengerId,
    pub ticket_number: TicketNumber,
    pub seat_number: u32,
    pub reservation_time: NaiveDateTime,
    /// Set exactly once, when the reservation is cancelled
    pub cancellation_time: Option<NaiveDateTime>,
}

impl Reservation {
    /// Create an active reservation
    pub fn new(
        passenger_id: PassengerId,
        ticket_number: TicketNumber,
        seat_number: u32,
        reservation_time: NaiveDateTime,
    ) -> Self {
        Self {
            passenger_id,
            ticket_number,
            seat_number,
            reservation_time,
            cancellation_time: None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation_time.is_some()
    }

    pub fn is_window_seat(&self) -> bool {
        is_window_seat(self.seat_number)
    }
}

#[cfg(test)]
#[path = "reservation_tests.rs"]
mod tests;
