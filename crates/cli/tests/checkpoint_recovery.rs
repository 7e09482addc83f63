// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for loading damaged or legacy checkpoints

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{Flight, HEADER_LINE};
use predicates::prelude::*;

#[test]
fn malformed_row_keeps_earlier_reservations() {
    let flight = Flight::with_rows(&[
        "482,482-31337,13,2026-07-04T06:15:00,",
        "abc,abc-00000,14,2026-07-04T06:20:00,",
        "517,517-00042,15,2026-07-04T06:25:00,",
    ]);

    flight
        .ars()
        .arg("seats")
        .assert()
        .success()
        .stdout("Available seats: 99\n")
        .stderr(predicate::str::contains("error loading reservations"));
}

#[test]
fn saving_after_a_partial_load_drops_the_bad_tail() {
    let flight = Flight::with_rows(&[
        "482,482-31337,13,2026-07-04T06:15:00,",
        "517,517-00042,13,2026-07-04T06:25:00,",
    ]);

    flight
        .ars()
        .args(["update", "482-31337", "20"])
        .assert()
        .success()
        .stderr(predicate::str::contains("error loading reservations"));

    similar_asserts::assert_eq!(
        flight.read_checkpoint(),
        format!("{}\n482,482-31337,20,2026-07-04T06:15:00,\n", HEADER_LINE)
    );
}

#[test]
fn cancelled_rows_are_not_restored() {
    let flight = Flight::with_rows(&[
        "482,482-31337,13,2026-07-04T06:15:00,2026-07-04T07:00:00",
        "517,517-00042,14,2026-07-04T06:20:00,",
    ]);

    flight
        .ars()
        .arg("seats")
        .assert()
        .success()
        .stdout("Available seats: 99\n")
        .stderr(predicate::str::is_empty());

    flight
        .ars()
        .args(["show", "482-31337"])
        .assert()
        .failure();
}

#[test]
fn checkpoint_without_cancellation_column_loads() {
    let flight = Flight::new();
    std::fs::write(
        flight.checkpoint(),
        "passenger_id,ticket_number,seat_number,reservation_time\n\
         482,482-31337,13,2026-07-04T06:15:00\n",
    )
    .unwrap();

    flight
        .ars()
        .args(["show", "482-31337"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seat number: 13"));
}

#[test]
fn missing_checkpoint_starts_empty() {
    let flight = Flight::new();

    flight
        .ars()
        .arg("seats")
        .assert()
        .success()
        .stdout("Available seats: 100\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn verbose_flag_logs_the_load() {
    let flight = Flight::with_rows(&["482,482-31337,13,2026-07-04T06:15:00,"]);

    flight
        .ars()
        .args(["-v", "seats"])
        .assert()
        .success()
        .stderr(predicate::str::contains("checkpoint loaded"));
}

#[test]
fn unwritable_checkpoint_fails_the_booking() {
    let flight = Flight::new();
    std::fs::create_dir(flight.checkpoint()).unwrap();

    flight
        .ars()
        .arg("book")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error saving reservations"));
}
