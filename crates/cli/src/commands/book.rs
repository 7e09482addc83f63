// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ars book` - Book a random free seat

use crate::desk::Desk;
use crate::error::ArsError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use ars_core::{Reservation, BOOKING_SUCCESSFUL};
use serde::Serialize;
use std::fmt;

/// Receipt for a new booking
#[derive(Serialize)]
pub struct Booked<'a> {
    pub status: &'static str,
    pub reservation: &'a Reservation,
    pub available_seats: usize,
}

impl fmt::Display for Booked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}!", self.status)?;
        writeln!(f, "Ticket number: {}", self.reservation.ticket_number)?;
        writeln!(f, "Seat number: {}", self.reservation.seat_number)?;
        write!(f, "Available seats: {}", self.available_seats)
    }
}

pub fn handle(desk: &mut Desk, format: OutputFormat) -> Result<()> {
    let reservation = desk.ledger.reserve().map_err(ArsError::from)?;
    desk.save()?;

    output::print(
        &Booked {
            status: BOOKING_SUCCESSFUL,
            reservation: &reservation,
            available_seats: desk.ledger.available_seat_count(),
        },
        format,
    );
    Ok(())
}
