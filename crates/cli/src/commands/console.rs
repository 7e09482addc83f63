// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ars console` - Interactive reservation menu
//!
//! Reads one choice per line. Every prompt accepts end-of-input, which
//! ends the session the same way as choosing Exit: the ledger is saved
//! before returning.

use super::book::Booked;
use super::cancel::Cancelled;
use super::seats::SeatSummary;
use super::show::TicketInfo;
use super::update::Moved;
use super::window::{self, NO_WINDOW_SEATS};
use crate::desk::Desk;
use ars_core::{
    LedgerError, BOOKING_SUCCESSFUL, BOOKING_UPDATED, CANCELLATION_SUCCESSFUL, SEATS,
};
use std::io::{self, BufRead, Lines, Write};

pub const INVALID_CHOICE: &str = "Invalid Choice. Please try again.";
pub const INVALID_SEAT_INPUT: &str = "Invalid input. Seat must be a number.";
pub const INVALID_SEAT_NUMBER: &str = "Invalid seat number. Must be between 1 and 100.";
pub const FAREWELL: &str = "Thank you for using the Airline Reservation System!";

const MENU: &str = "\
========================================
 Airline Reservation System
========================================
 1. Book a ticket
 2. Cancel a booking
 3. Check available seats
 4. Change seat
 5. Ticket information
 6. Window seat tickets
 7. Save reservations
 8. Exit
========================================";

/// Run the menu loop until Exit or end of input
pub fn run<R: BufRead, W: Write>(desk: &mut Desk, input: R, out: W) -> io::Result<()> {
    Console {
        desk,
        lines: input.lines(),
        out,
    }
    .run()
}

struct Console<'a, R, W> {
    desk: &'a mut Desk,
    lines: Lines<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<'_, R, W> {
    fn run(mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "\n{}", MENU)?;
            writeln!(self.out, "{}", SeatSummary::of(self.desk, false))?;
            let Some(choice) = self.prompt("Enter your choice (1-8): ")? else {
                return self.exit();
            };

            match choice.as_str() {
                "1" => self.book()?,
                "2" => self.cancel()?,
                "3" => self.seats()?,
                "4" => self.update()?,
                "5" => self.info()?,
                "6" => self.window()?,
                "7" => self.save()?,
                "8" => return self.exit(),
                _ => writeln!(self.out, "{}", INVALID_CHOICE)?,
            }
        }
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(self
            .lines
            .next()
            .transpose()?
            .map(|line| line.trim().to_string()))
    }

    fn book(&mut self) -> io::Result<()> {
        match self.desk.ledger.reserve() {
            Ok(reservation) => {
                let booked = Booked {
                    status: BOOKING_SUCCESSFUL,
                    reservation: &reservation,
                    available_seats: self.desk.ledger.available_seat_count(),
                };
                writeln!(self.out, "{}", booked)
            }
            Err(e) => writeln!(self.out, "{}", e),
        }
    }

    fn cancel(&mut self) -> io::Result<()> {
        let Some(ticket) = self.prompt("Enter ticket number: ")? else {
            return Ok(());
        };
        match self.desk.ledger.cancel(&ticket) {
            Ok(reservation) => {
                let cancelled = Cancelled {
                    status: CANCELLATION_SUCCESSFUL,
                    reservation: &reservation,
                    available_seats: self.desk.ledger.available_seat_count(),
                };
                writeln!(self.out, "{}", cancelled)
            }
            Err(e) => writeln!(self.out, "{}", e),
        }
    }

    fn seats(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", SeatSummary::of(self.desk, false))
    }

    fn update(&mut self) -> io::Result<()> {
        let Some(ticket) = self.prompt("Enter ticket number: ")? else {
            return Ok(());
        };
        let Some(seat) = self.prompt("Enter new seat number (1-100): ")? else {
            return Ok(());
        };

        // Parse wide so that negative and oversized numbers read as out of range
        let seat = match seat.parse::<i64>() {
            Ok(seat) => seat,
            Err(_) => return writeln!(self.out, "{}", INVALID_SEAT_INPUT),
        };
        let seat = match u32::try_from(seat) {
            Ok(seat) if SEATS.contains(&seat) => seat,
            _ => return writeln!(self.out, "{}", INVALID_SEAT_NUMBER),
        };

        match self.desk.ledger.update(&ticket, seat) {
            Ok(change) => {
                let moved = Moved {
                    status: BOOKING_UPDATED,
                    change,
                };
                writeln!(self.out, "{}", moved)
            }
            Err(e) => writeln!(self.out, "{}", e),
        }
    }

    fn info(&mut self) -> io::Result<()> {
        let Some(ticket) = self.prompt("Enter ticket number: ")? else {
            return Ok(());
        };
        match self.desk.ledger.get_info(&ticket) {
            Some(reservation) => writeln!(self.out, "{}", TicketInfo(reservation)),
            None => writeln!(
                self.out,
                "{}",
                LedgerError::NotFound { ticket }
            ),
        }
    }

    fn window(&mut self) -> io::Result<()> {
        let seats = window::window_seats(self.desk);
        if seats.is_empty() {
            return writeln!(self.out, "{}", NO_WINDOW_SEATS);
        }
        writeln!(self.out, "Window Seat Tickets:")?;
        for seat in &seats {
            writeln!(self.out, "{}", seat)?;
        }
        Ok(())
    }

    fn save(&mut self) -> io::Result<()> {
        match self.desk.save() {
            Ok(count) => writeln!(
                self.out,
                "Saved {} reservations to {}",
                count,
                self.desk.checkpoint_path().display()
            ),
            Err(e) => write!(self.out, "{}", e),
        }
    }

    fn exit(mut self) -> io::Result<()> {
        self.save()?;
        writeln!(self.out, "{}", FAREWELL)
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
