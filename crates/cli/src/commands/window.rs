// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ars window` - List tickets booked on window seats

use crate::desk::Desk;
use crate::output::{self, OutputFormat};
use ars_core::TicketNumber;
use serde::Serialize;
use std::fmt;

pub const NO_WINDOW_SEATS: &str = "No window seats are currently booked";

#[derive(Serialize)]
pub struct WindowSeat {
    pub seat_number: u32,
    pub ticket_number: TicketNumber,
}

impl fmt::Display for WindowSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seat {} : Ticket {}", self.seat_number, self.ticket_number)
    }
}

pub fn window_seats(desk: &Desk) -> Vec<WindowSeat> {
    desk.ledger
        .window_seats()
        .into_iter()
        .map(|(seat_number, ticket_number)| WindowSeat {
            seat_number,
            ticket_number,
        })
        .collect()
}

pub fn handle(desk: &Desk, format: OutputFormat) {
    let seats = window_seats(desk);
    if format == OutputFormat::Text {
        if seats.is_empty() {
            println!("{}", NO_WINDOW_SEATS);
            return;
        }
        println!("Window Seat Tickets:");
    }
    output::print_list(&seats, format);
}
