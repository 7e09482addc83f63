// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random draw abstractions for passenger IDs, ticket extensions and seats

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Source of uniform draws over small integer ranges
pub trait RandomSource: Clone + Send + Sync {
    /// Draw a value uniformly from `range`. The range is never empty.
    fn draw(&self, range: RangeInclusive<u32>) -> u32;
}

/// Thread-local RNG for production use
#[derive(Clone, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&self, range: RangeInclusive<u32>) -> u32 {
        rand::thread_rng().gen_range(range)
    }
}

/// Seeded RNG for reproducible runs
#[derive(Clone)]
pub struct SeededRandom {
    rng: Arc<Mutex<StdRng>>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl RandomSource for SeededRandom {
    fn draw(&self, range: RangeInclusive<u32>) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(range)
    }
}

/// Scripted source for testing.
///
/// Replays `script` in order. A scripted value inside the requested range is
/// returned as-is, anything else is folded into the range. Once the script
/// runs out, the draw counter itself is folded into the range, so rejection
/// loops always make progress.
#[derive(Clone)]
pub struct ScriptedRandom {
    script: Arc<Vec<u32>>,
    cursor: Arc<AtomicUsize>,
}

impl ScriptedRandom {
    pub fn new(script: impl Into<Vec<u32>>) -> Self {
        Self {
            script: Arc::new(script.into()),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedRandom {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&self, range: RangeInclusive<u32>) -> u32 {
        let n = self.cursor.fetch_add(1, Ordering::SeqCst);
        let raw = self
            .script
            .get(n)
            .copied()
            .unwrap_or_else(|| u32::try_from(n).unwrap_or(u32::MAX));
        if range.contains(&raw) {
            return raw;
        }

        let start = u64::from(*range.start());
        let span = u64::from(*range.end()).saturating_sub(start) + 1;
        let folded = start + u64::from(raw) % span;
        u32::try_from(folded).unwrap_or(*range.start())
    }
}

#[cfg(test)]
#[path = "random_tests.rs"]
mod tests;
