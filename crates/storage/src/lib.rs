// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ars-storage: Checkpoint persistence for the reservation ledger
//!
//! A checkpoint is a CSV snapshot of every active reservation. Loading
//! replays it into a ledger; saving replaces it in full.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod checkpoint;
mod record;

pub use checkpoint::{Checkpoint, CheckpointError, LoadReport};
pub use record::{format_timestamp, parse_timestamp, CheckpointRecord, RecordError, HEADER};
