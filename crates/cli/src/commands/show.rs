// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ars show <ticket>` - Show ticket information

use crate::desk::Desk;
use crate::error::ArsError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use ars_core::Reservation;
use clap::Args;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct ShowArgs {
    /// Ticket number (e.g., "482-31337")
    pub ticket: String,
}

#[derive(Serialize)]
#[serde(transparent)]
pub struct TicketInfo<'a>(pub &'a Reservation);

impl fmt::Display for TicketInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ticket Information:")?;
        writeln!(f, "Passenger ID: {}", self.0.passenger_id)?;
        writeln!(f, "Ticket number: {}", self.0.ticket_number)?;
        writeln!(f, "Seat number: {}", self.0.seat_number)?;
        write!(f, "Booking time: {}", self.0.reservation_time)
    }
}

pub fn handle(desk: &Desk, args: ShowArgs, format: OutputFormat) -> Result<()> {
    let reservation = desk
        .ledger
        .get_info(&args.ticket)
        .ok_or_else(|| ArsError::ticket_not_found(&args.ticket))?;

    output::print(&TicketInfo(reservation), format);
    Ok(())
}
