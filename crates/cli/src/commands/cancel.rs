// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ars cancel <ticket>` - Cancel a booking and release its seat

use crate::desk::Desk;
use crate::error::ArsError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use ars_core::{Reservation, CANCELLATION_SUCCESSFUL};
use clap::Args;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct CancelArgs {
    /// Ticket number (e.g., "482-31337")
    pub ticket: String,
}

/// Receipt for a cancellation
#[derive(Serialize)]
pub struct Cancelled<'a> {
    pub status: &'static str,
    pub reservation: &'a Reservation,
    pub available_seats: usize,
}

impl fmt::Display for Cancelled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status)?;
        write!(f, "Available seats: {}", self.available_seats)
    }
}

pub fn handle(desk: &mut Desk, args: CancelArgs, format: OutputFormat) -> Result<()> {
    let reservation = desk.ledger.cancel(&args.ticket).map_err(ArsError::from)?;
    desk.save()?;

    output::print(
        &Cancelled {
            status: CANCELLATION_SUCCESSFUL,
            reservation: &reservation,
            available_seats: desk.ledger.available_seat_count(),
        },
        format,
    );
    Ok(())
}
