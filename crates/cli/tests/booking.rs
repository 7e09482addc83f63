// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for the one-shot booking commands

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::{seat_of, ticket_of, Flight, HEADER_LINE};
use predicates::prelude::*;

#[test]
fn book_prints_receipt_and_checkpoints() {
    let flight = Flight::new();

    flight
        .ars()
        .arg("book")
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking successful!"))
        .stdout(predicate::str::contains("Ticket number: "))
        .stdout(predicate::str::contains("Available seats: 99"));

    let saved = flight.read_checkpoint();
    let lines: Vec<_> = saved.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER_LINE);
}

#[test]
fn json_receipt_describes_the_reservation() {
    let flight = Flight::new();

    let receipt = flight.book();

    assert_eq!(receipt["status"], "Booking successful");
    assert_eq!(receipt["available_seats"], 99);
    let ticket = ticket_of(&receipt);
    let passenger_id = receipt["reservation"]["passenger_id"].as_u64().unwrap();
    assert!(ticket.starts_with(&format!("{}-", passenger_id)));
    assert!((1..=100).contains(&seat_of(&receipt)));
    assert!(receipt["reservation"]["cancellation_time"].is_null());
}

#[test]
fn bookings_accumulate_across_runs() {
    let flight = Flight::new();

    let first = flight.book_ticket();
    let second = flight.book_ticket();
    assert_ne!(first, second);

    flight
        .ars()
        .arg("seats")
        .assert()
        .success()
        .stdout("Available seats: 98\n");
}

#[test]
fn seed_makes_bookings_reproducible() {
    let book = || {
        let flight = Flight::new();
        let output = flight
            .ars()
            .args(["--seed", "42", "--format", "json", "book"])
            .output()
            .unwrap();
        let receipt: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        (ticket_of(&receipt), seat_of(&receipt))
    };

    assert_eq!(book(), book());
}

#[test]
fn show_prints_ticket_information() {
    let flight = Flight::new();
    let ticket = flight.book_ticket();

    flight
        .ars()
        .args(["show", &ticket])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket Information:"))
        .stdout(predicate::str::contains(format!("Ticket number: {}", ticket)))
        .stdout(predicate::str::contains("Booking time: "));
}

#[test]
fn show_unknown_ticket_fails() {
    let flight = Flight::new();

    flight
        .ars()
        .args(["show", "123-45678"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: Ticket not found"))
        .stderr(predicate::str::contains("'123-45678'"));
}

#[test]
fn cancel_releases_the_seat() {
    let flight = Flight::new();
    let ticket = flight.book_ticket();

    flight
        .ars()
        .args(["cancel", &ticket])
        .assert()
        .success()
        .stdout("Cancellation Successful\nAvailable seats: 100\n");

    assert_eq!(flight.read_checkpoint(), format!("{}\n", HEADER_LINE));

    flight
        .ars()
        .args(["cancel", &ticket])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ticket not found"));
}

#[test]
fn update_moves_to_a_free_seat() {
    let flight = Flight::with_rows(&["482,482-31337,13,2026-07-04T06:15:00,"]);

    flight
        .ars()
        .args(["update", "482-31337", "50"])
        .assert()
        .success()
        .stdout("Booking updated successfully\nSeat number: 13 -> 50\n");

    similar_asserts::assert_eq!(
        flight.read_checkpoint(),
        format!("{}\n482,482-31337,50,2026-07-04T06:15:00,\n", HEADER_LINE)
    );
}

#[test]
fn update_to_a_held_seat_is_refused() {
    let flight = Flight::with_rows(&[
        "482,482-31337,13,2026-07-04T06:15:00,",
        "517,517-00042,14,2026-07-04T06:20:00,",
    ]);

    flight
        .ars()
        .args(["update", "482-31337", "14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selected seat is not available"))
        .stderr(predicate::str::contains("ars seats --list"));
}

#[test]
fn update_rejects_seats_outside_the_cabin() {
    let flight = Flight::new();

    for seat in ["0", "101", "window"] {
        flight
            .ars()
            .args(["update", "482-31337", seat])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }
}

#[test]
fn seats_list_prints_free_seat_numbers() {
    let flight = Flight::with_rows(&["482,482-31337,1,2026-07-04T06:15:00,"]);

    let output = flight
        .ars()
        .args(["--format", "json", "seats", "--list"])
        .output()
        .unwrap();
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(summary["available_seats"], 99);
    let free = summary["free"].as_array().unwrap();
    assert_eq!(free.len(), 99);
    assert_eq!(free[0], 2);

    flight
        .ars()
        .args(["seats", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Available seats: 99\n  2   3   4   5   6   7   8   9  10  11\n",
        ));
}

#[test]
fn window_lists_only_window_seats() {
    let flight = Flight::with_rows(&[
        "482,482-31337,13,2026-07-04T06:15:00,",
        "517,517-00042,14,2026-07-04T06:20:00,",
        "600,600-10000,1,2026-07-04T06:25:00,",
    ]);

    flight
        .ars()
        .arg("window")
        .assert()
        .success()
        .stdout("Window Seat Tickets:\nSeat 1 : Ticket 600-10000\nSeat 13 : Ticket 482-31337\n");
}

#[test]
fn window_with_no_bookings() {
    let flight = Flight::new();

    flight
        .ars()
        .arg("window")
        .assert()
        .success()
        .stdout("No window seats are currently booked\n");
}

#[test]
fn checkpoint_path_from_environment() {
    let flight = Flight::new();

    flight
        .bare()
        .env("ARS_CHECKPOINT", flight.checkpoint())
        .arg("book")
        .assert()
        .success();

    assert!(flight.read_checkpoint().starts_with(HEADER_LINE));
}

#[test]
fn completions_name_the_binary() {
    let flight = Flight::new();

    flight
        .bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ars"));
}
