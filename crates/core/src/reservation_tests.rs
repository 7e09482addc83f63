// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::NaiveDate;
use yare::parameterized;

fn booked_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 5)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap()
}

#[test]
fn ticket_number_joins_passenger_and_extension() {
    let ticket = TicketNumber::issue(PassengerId(482), 31337);
    assert_eq!(ticket.as_str(), "482-31337");
}

#[parameterized(
    well_formed = { "482-31337", Some(482) },
    leading_extension_zeros = { "100-00042", Some(100) },
    no_separator = { "48231337", None },
    short_extension = { "482-313", None },
    letters_in_extension = { "482-3133x", None },
    letters_in_prefix = { "abc-31337", None },
    signed_prefix = { "+100-12345", None },
    zero_padded_prefix = { "0100-12345", None },
    doubly_padded_prefix = { "00100-12345", None },
    empty_prefix = { "-12345", None },
    empty = { "", None },
)]
fn ticket_number_passenger_prefix(ticket: &str, expected: Option<u32>) {
    let ticket = TicketNumber::from(ticket);
    assert_eq!(ticket.passenger_id(), expected.map(PassengerId));
}

#[parameterized(
    seat_1 = { 1, true },
    seat_2 = { 2, false },
    seat_3 = { 3, false },
    seat_4 = { 4, true },
    seat_100 = { 100, true },
)]
fn window_seats_are_every_third_from_one(seat: u32, expected: bool) {
    assert_eq!(is_window_seat(seat), expected);
}

#[test]
fn new_reservation_is_active() {
    let reservation = Reservation::new(
        PassengerId(482),
        TicketNumber::issue(PassengerId(482), 31337),
        7,
        booked_at(),
    );
    assert!(!reservation.is_cancelled());
    assert!(reservation.is_window_seat());
    assert_eq!(reservation.reservation_time, booked_at());
}

#[test]
fn reservation_serializes_with_plain_identifiers() {
    let reservation = Reservation::new(
        PassengerId(482),
        TicketNumber::from("482-31337"),
        12,
        booked_at(),
    );
    let json = serde_json::to_value(&reservation).unwrap();
    assert_eq!(json["passenger_id"], 482);
    assert_eq!(json["ticket_number"], "482-31337");
    assert_eq!(json["seat_number"], 12);
    assert!(json["cancellation_time"].is_null());
}
