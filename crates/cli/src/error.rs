// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use ars_core::{LedgerError, SEAT_COUNT};
use ars_storage::CheckpointError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct ArsError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ArsError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for ArsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ArsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl ArsError {
    /// Error for a ticket with no active reservation.
    pub fn ticket_not_found(ticket: &str) -> Self {
        ArsError::new("Ticket not found")
            .with_context(format!("No active reservation has ticket number '{}'", ticket))
            .with_context("Cancelled tickets are removed from the ledger")
            .with_suggestion("Check the ticket number printed when the seat was booked")
            .with_suggestion("List window seat tickets: ars window")
    }

    /// Error for a seat that is already held.
    pub fn seat_unavailable(seat: u32) -> Self {
        ArsError::new("Selected seat is not available")
            .with_context(format!("Seat {} is already held, possibly by this ticket", seat))
            .with_suggestion("List free seats: ars seats --list")
    }

    /// Error for a fully booked aircraft.
    pub fn sold_out() -> Self {
        ArsError::new("No seats available")
            .with_context(format!("All {} seats are booked", SEAT_COUNT))
            .with_suggestion("Cancel a booking to free a seat: ars cancel <TICKET>")
    }

    /// Error for a checkpoint that could not be written.
    pub fn checkpoint_unwritable(path: &Path, source: CheckpointError) -> Self {
        ArsError::new(format!("Error saving reservations: {}", source))
            .with_context(format!("Checkpoint: {}", path.display()))
            .with_context("Reservations made in this run were not saved")
            .with_suggestion("Check that the directory exists and is writable")
            .with_suggestion("Choose another file: ars --file <PATH> ...")
            .with_source(source)
    }
}

impl From<LedgerError> for ArsError {
    fn from(err: LedgerError) -> Self {
        match &err {
            LedgerError::NotFound { ticket } => ArsError::ticket_not_found(ticket),
            LedgerError::SeatUnavailable { seat } => ArsError::seat_unavailable(*seat),
            LedgerError::Exhausted => ArsError::sold_out(),
            LedgerError::AlreadyCancelled { .. }
            | LedgerError::PassengerIdsExhausted
            | LedgerError::DuplicateTicket { .. } => ArsError::new(err.to_string()),
        }
        .with_source(err)
    }
}
