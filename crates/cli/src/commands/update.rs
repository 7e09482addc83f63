// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ars update <ticket> <seat>` - Move a booking to another seat

use crate::desk::Desk;
use crate::error::ArsError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use ars_core::{SeatChange, BOOKING_UPDATED};
use clap::Args;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct UpdateArgs {
    /// Ticket number (e.g., "482-31337")
    pub ticket: String,

    /// New seat number (1-100)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=100))]
    pub seat: u32,
}

/// Receipt for a seat change
#[derive(Serialize)]
pub struct Moved {
    pub status: &'static str,
    #[serde(flatten)]
    pub change: SeatChange,
}

impl fmt::Display for Moved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.status)?;
        write!(f, "Seat number: {} -> {}", self.change.from, self.change.to)
    }
}

pub fn handle(desk: &mut Desk, args: UpdateArgs, format: OutputFormat) -> Result<()> {
    let change = desk
        .ledger
        .update(&args.ticket, args.seat)
        .map_err(ArsError::from)?;
    desk.save()?;

    output::print(
        &Moved {
            status: BOOKING_UPDATED,
            change,
        },
        format,
    );
    Ok(())
}
