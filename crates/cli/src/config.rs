// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI configuration resolved from flags and environment

use crate::output::OutputFormat;
use std::path::PathBuf;

/// Checkpoint file used when neither `--file` nor `ARS_CHECKPOINT` is set
pub const DEFAULT_CHECKPOINT: &str = "reservations.csv";

/// Resolved CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the reservations checkpoint
    pub checkpoint_path: PathBuf,
    /// How command results are printed
    pub format: OutputFormat,
    /// Seed for reproducible random draws
    pub seed: Option<u64>,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Config {
    /// Build the config. `file` already reflects `--file` or `ARS_CHECKPOINT`.
    pub fn resolve(
        file: Option<PathBuf>,
        format: OutputFormat,
        seed: Option<u64>,
        verbosity: u8,
    ) -> Self {
        Self {
            checkpoint_path: file.unwrap_or_else(|| PathBuf::from(DEFAULT_CHECKPOINT)),
            format,
            seed,
            verbosity,
        }
    }

    /// Log level used when `RUST_LOG` is not set
    pub fn default_log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_reservations_csv_in_working_directory() {
        let config = Config::resolve(None, OutputFormat::Text, None, 0);
        assert_eq!(config.checkpoint_path, PathBuf::from("reservations.csv"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn explicit_file_wins() {
        let config = Config::resolve(
            Some(PathBuf::from("/tmp/flight-42.csv")),
            OutputFormat::Json,
            Some(7),
            0,
        );
        assert_eq!(config.checkpoint_path, PathBuf::from("/tmp/flight-42.csv"));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn verbosity_raises_log_level() {
        let level = |v| Config::resolve(None, OutputFormat::Text, None, v).default_log_level();
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(5), "debug");
    }
}
