// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER_LINE: &str =
    "passenger_id,ticket_number,seat_number,reservation_time,cancellation_time";

/// A scratch flight: a temp directory holding one checkpoint file.
/// Cleaned up when dropped.
pub struct Flight {
    dir: TempDir,
}

impl Flight {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Flight whose checkpoint already holds `rows` under the header
    pub fn with_rows(rows: &[&str]) -> Self {
        let flight = Self::new();
        let mut contents = format!("{}\n", HEADER_LINE);
        for row in rows {
            contents.push_str(row);
            contents.push('\n');
        }
        std::fs::write(flight.checkpoint(), contents).expect("Failed to seed checkpoint");
        flight
    }

    pub fn checkpoint(&self) -> PathBuf {
        self.dir.path().join("reservations.csv")
    }

    pub fn read_checkpoint(&self) -> String {
        std::fs::read_to_string(self.checkpoint()).expect("Failed to read checkpoint")
    }

    /// `ars` run in the flight directory with a clean environment
    pub fn bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("ars").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("ARS_CHECKPOINT")
            .env_remove("ARS_SEED")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `ars --file <checkpoint>`
    pub fn ars(&self) -> Command {
        let mut cmd = self.bare();
        cmd.arg("--file").arg(self.checkpoint());
        cmd
    }

    /// Book a seat and return the JSON receipt
    pub fn book(&self) -> serde_json::Value {
        let output = self
            .ars()
            .args(["--format", "json", "book"])
            .output()
            .unwrap();
        assert!(output.status.success(), "book failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("book printed invalid JSON")
    }

    /// Book a seat and return its ticket number
    pub fn book_ticket(&self) -> String {
        ticket_of(&self.book())
    }
}

pub fn ticket_of(receipt: &serde_json::Value) -> String {
    receipt["reservation"]["ticket_number"]
        .as_str()
        .expect("receipt has no ticket number")
        .to_string()
}

pub fn seat_of(receipt: &serde_json::Value) -> u64 {
    receipt["reservation"]["seat_number"]
        .as_u64()
        .expect("receipt has no seat number")
}
