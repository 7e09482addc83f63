// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reservation desk: the process-wide ledger plus its checkpoint

use crate::config::Config;
use crate::error::ArsError;
use ars_core::{Ledger, RandomSource, SeededRandom, SystemClock, ThreadRandom};
use ars_storage::{Checkpoint, LoadReport};
use std::ops::RangeInclusive;
use std::path::Path;

/// Random draws chosen at startup
#[derive(Clone)]
pub enum Draws {
    Thread(ThreadRandom),
    Seeded(SeededRandom),
}

impl Draws {
    pub fn for_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Draws::Seeded(SeededRandom::new(seed)),
            None => Draws::Thread(ThreadRandom),
        }
    }
}

impl RandomSource for Draws {
    fn draw(&self, range: RangeInclusive<u32>) -> u32 {
        match self {
            Draws::Thread(random) => random.draw(range),
            Draws::Seeded(random) => random.draw(range),
        }
    }
}

pub type DeskLedger = Ledger<SystemClock, Draws>;

/// The ledger owned by this process and where it is checkpointed
pub struct Desk {
    pub ledger: DeskLedger,
    checkpoint: Checkpoint,
}

impl Desk {
    /// Create the ledger and load the checkpoint into it.
    ///
    /// A damaged checkpoint is reported by the storage layer; the desk keeps
    /// whatever was loaded before the failure.
    pub fn open(config: &Config) -> Self {
        let ledger = Ledger::with_sources(SystemClock, Draws::for_seed(config.seed));
        let mut desk = Self::new(ledger, Checkpoint::new(&config.checkpoint_path));
        desk.load();
        desk
    }

    /// Wrap an existing ledger without loading anything
    pub fn new(ledger: DeskLedger, checkpoint: Checkpoint) -> Self {
        Self { ledger, checkpoint }
    }

    pub fn checkpoint_path(&self) -> &Path {
        self.checkpoint.path()
    }

    pub fn load(&mut self) -> LoadReport {
        self.checkpoint.load_into(&mut self.ledger)
    }

    /// Checkpoint every active reservation
    pub fn save(&self) -> Result<usize, ArsError> {
        self.checkpoint
            .save(&self.ledger)
            .map_err(|e| ArsError::checkpoint_unwritable(self.checkpoint.path(), e))
    }
}
