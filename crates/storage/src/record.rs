// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk checkpoint record

use ars_core::{PassengerId, Reservation, TicketNumber, PASSENGER_IDS};
use chrono::{DateTime, NaiveDateTime, SubsecRound, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Checkpoint header row, in column order
pub const HEADER: [&str; 5] = [
    "passenger_id",
    "ticket_number",
    "seat_number",
    "reservation_time",
    "cancellation_time",
];

/// ISO-8601 local time, as Python's `isoformat` writes it: microseconds,
/// and no fraction at all when they are zero
const WHOLE_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const MICROSECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const SPACED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Format a timestamp the way checkpoints store it
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    let at = at.trunc_subsecs(6);
    let format = if at.nanosecond() == 0 {
        WHOLE_SECONDS_FORMAT
    } else {
        MICROSECONDS_FORMAT
    };
    at.format(format).to_string()
}

/// Parse a checkpoint timestamp.
///
/// Accepts `T` or space separated local times, and RFC 3339 times with an
/// offset (kept as the wall-clock time at that offset).
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, SPACED_TIMESTAMP_FORMAT))
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|at| at.naive_local()))
}

/// Errors decoding a record into a reservation
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid {field} '{value}': {source}")]
    Timestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("passenger ID {0} is outside 100..=999")]
    PassengerIdOutOfRange(u32),

    #[error("ticket '{ticket}' does not belong to passenger {passenger_id}")]
    TicketMismatch { ticket: String, passenger_id: u32 },
}

/// One checkpoint row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointRecord {
    pub passenger_id: u32,
    pub ticket_number: String,
    pub seat_number: u32,
    pub reservation_time: String,
    /// Empty while the reservation is active
    #[serde(default)]
    pub cancellation_time: String,
}

impl CheckpointRecord {
    /// Decode and validate the row
    pub fn into_reservation(self) -> Result<Reservation, RecordError> {
        if !PASSENGER_IDS.contains(&self.passenger_id) {
            return Err(RecordError::PassengerIdOutOfRange(self.passenger_id));
        }
        let passenger_id = PassengerId(self.passenger_id);

        let ticket_number = TicketNumber(self.ticket_number);
        if ticket_number.passenger_id() != Some(passenger_id) {
            return Err(RecordError::TicketMismatch {
                ticket: ticket_number.0,
                passenger_id: passenger_id.0,
            });
        }

        let reservation_time = parse_field("reservation_time", self.reservation_time)?;
        let cancellation_time = match self.cancellation_time.as_str() {
            "" => None,
            _ => Some(parse_field("cancellation_time", self.cancellation_time)?),
        };

        Ok(Reservation {
            passenger_id,
            ticket_number,
            seat_number: self.seat_number,
            reservation_time,
            cancellation_time,
        })
    }
}

impl From<&Reservation> for CheckpointRecord {
    fn from(reservation: &Reservation) -> Self {
        Self {
            passenger_id: reservation.passenger_id.0,
            ticket_number: reservation.ticket_number.0.clone(),
            seat_number: reservation.seat_number,
            reservation_time: format_timestamp(&reservation.reservation_time),
            cancellation_time: reservation
                .cancellation_time
                .as_ref()
                .map(format_timestamp)
                .unwrap_or_default(),
        }
    }
}

fn parse_field(field: &'static str, value: String) -> Result<NaiveDateTime, RecordError> {
    parse_timestamp(&value).map_err(|source| RecordError::Timestamp {
        field,
        value,
        source,
    })
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
