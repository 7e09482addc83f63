// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod book;
pub mod cancel;
pub mod console;
pub mod seats;
pub mod show;
pub mod update;
pub mod window;
