// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ars seats` - Show available seats

use crate::desk::Desk;
use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;

#[derive(Args)]
pub struct SeatsArgs {
    /// Also list the free seat numbers
    #[arg(long)]
    pub list: bool,
}

#[derive(Serialize)]
pub struct SeatSummary {
    pub available_seats: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<Vec<u32>>,
}

impl fmt::Display for SeatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Available seats: {}", self.available_seats)?;
        if let Some(free) = &self.free {
            // Ten seats per row
            for row in free.chunks(10) {
                writeln!(f)?;
                let cells: Vec<String> = row.iter().map(|seat| format!("{:>3}", seat)).collect();
                write!(f, "{}", cells.join(" "))?;
            }
        }
        Ok(())
    }
}

impl SeatSummary {
    pub fn of(desk: &Desk, list: bool) -> Self {
        Self {
            available_seats: desk.ledger.available_seat_count(),
            free: list.then(|| desk.ledger.available_seats().collect()),
        }
    }
}

pub fn handle(desk: &Desk, args: SeatsArgs, format: OutputFormat) {
    output::print(&SeatSummary::of(desk, args.list), format);
}
