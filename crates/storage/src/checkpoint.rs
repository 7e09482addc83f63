// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Checkpoint file: full CSV snapshot of active reservations

use crate::record::{CheckpointRecord, RecordError, HEADER};
use ars_core::{Clock, Ledger, LedgerError, RandomSource, Reservation};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Columns a checkpoint header must name; `cancellation_time` is optional
const REQUIRED_COLUMNS: [&str; 4] = [HEADER[0], HEADER[1], HEADER[2], HEADER[3]];

/// Errors that can occur reading or writing a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("checkpoint header is missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: RecordError,
    },

    #[error("line {line}: {source}")]
    Rejected {
        line: u64,
        #[source]
        source: LedgerError,
    },
}

/// Outcome of loading a checkpoint into a ledger
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Reservations restored into the ledger
    pub restored: usize,
    /// Cancelled records seen; their passenger IDs are retired
    pub skipped: usize,
    /// Why loading stopped early, if it did
    pub error: Option<CheckpointError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.error.is_none()
    }
}

/// Durable checkpoint of the reservation ledger
#[derive(Debug, Clone)]
pub struct Checkpoint {
    path: PathBuf,
}

impl Checkpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Replay the checkpoint into `ledger`.
    ///
    /// A missing file leaves the ledger untouched. Loading stops at the first
    /// bad record; reservations restored before it are kept and the failure
    /// is returned in the report.
    pub fn load_into<C: Clock, R: RandomSource>(&self, ledger: &mut Ledger<C, R>) -> LoadReport {
        let mut report = LoadReport::default();
        match self.replay(ledger, &mut report) {
            Ok(()) => info!(
                path = %self.path.display(),
                restored = report.restored,
                skipped = report.skipped,
                "checkpoint loaded"
            ),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    restored = report.restored,
                    "error loading reservations: {}", e
                );
                report.error = Some(e);
            }
        }
        report
    }

    /// Replace the checkpoint with every active reservation in `ledger`.
    ///
    /// Records are ordered by reservation time. The previous checkpoint is
    /// only replaced once the new one is fully written.
    pub fn save<C: Clock, R: RandomSource>(
        &self,
        ledger: &Ledger<C, R>,
    ) -> Result<usize, CheckpointError> {
        let mut reservations: Vec<&Reservation> = ledger.reservations().collect();
        reservations.sort_by(|a, b| {
            (a.reservation_time, &a.ticket_number).cmp(&(b.reservation_time, &b.ticket_number))
        });

        match self.write(reservations) {
            Ok(count) => {
                info!(path = %self.path.display(), count, "checkpoint saved");
                Ok(count)
            }
            Err(e) => {
                error!(path = %self.path.display(), "error saving reservations: {}", e);
                Err(e)
            }
        }
    }

    /// Read every record, failing on the first malformed one
    pub fn read(&self) -> Result<Vec<CheckpointRecord>, CheckpointError> {
        let Some(mut reader) = self.open()? else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    /// Write `reservations` as a complete checkpoint, returning how many
    pub fn write<'a>(
        &self,
        reservations: impl IntoIterator<Item = &'a Reservation>,
    ) -> Result<usize, CheckpointError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging = self.staging_path();
        let written = write_records(&staging, reservations).and_then(|count| {
            fs::rename(&staging, &self.path)?;
            Ok(count)
        });
        if written.is_err() {
            let _ = fs::remove_file(&staging);
        }
        written
    }

    fn replay<C: Clock, R: RandomSource>(
        &self,
        ledger: &mut Ledger<C, R>,
        report: &mut LoadReport,
    ) -> Result<(), CheckpointError> {
        let Some(mut reader) = self.open()? else {
            debug!(path = %self.path.display(), "no checkpoint, starting empty");
            return Ok(());
        };

        let headers = reader.headers()?.clone();
        let mut raw = StringRecord::new();
        while reader.read_record(&mut raw)? {
            let line = raw.position().map_or(0, |p| p.line());
            let record: CheckpointRecord = raw.deserialize(Some(&headers))?;
            let reservation = record
                .into_reservation()
                .map_err(|source| CheckpointError::Record { line, source })?;

            if reservation.is_cancelled() {
                debug!(ticket = %reservation.ticket_number, "skipping cancelled record");
                ledger.retire_passenger_id(reservation.passenger_id);
                report.skipped += 1;
                continue;
            }

            ledger
                .restore(reservation)
                .map_err(|source| CheckpointError::Rejected { line, source })?;
            report.restored += 1;
        }

        Ok(())
    }

    /// Open the checkpoint and check its header. `None` if there is no file.
    fn open(&self) -> Result<Option<csv::Reader<File>>, CheckpointError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);
        let headers = reader.headers()?;
        // A zero-byte file holds no records
        if !headers.is_empty() {
            for column in REQUIRED_COLUMNS {
                if !headers.iter().any(|h| h == column) {
                    return Err(CheckpointError::MissingColumn(column));
                }
            }
        }

        Ok(Some(reader))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_records<'a>(
    path: &Path,
    reservations: impl IntoIterator<Item = &'a Reservation>,
) -> Result<usize, CheckpointError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(File::create(path)?);
    // Header goes out even when there are no records
    writer.write_record(HEADER)?;

    let mut count = 0;
    for reservation in reservations {
        writer.serialize(CheckpointRecord::from(reservation))?;
        count += 1;
    }

    let file = writer
        .into_inner()
        .map_err(|e| CheckpointError::Io(e.into_error()))?;
    file.sync_all()?;
    Ok(count)
}

#[cfg(test)]
#[path = "checkpoint_tests.rs"]
mod tests;
