//! CSV tick file adapter.
//!
//! Expects a header row followed by `timestamp,symbol,price` records.
//! Timestamps look like `2024-01-02 09:30:00` and may carry a trailing UTC
//! offset (`2024-01-02 09:30:00-05:00`); the offset is dropped and the
//! exchange wall-clock time kept.

use crate::domain::config_validation::TIMESTAMP_FORMAT;
use crate::domain::error::TickbenchError;
use crate::domain::tick::Tick;
use crate::ports::tick_port::TickSource;
use chrono::{DateTime, NaiveDateTime};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct CsvTickSource {
    path: PathBuf,
}

impl CsvTickSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TickSource for CsvTickSource {
    fn fetch_ticks(&self, limit: usize) -> Result<Vec<Tick>, TickbenchError> {
        let file = File::open(&self.path).map_err(|e| TickbenchError::DataSource {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(file);
        let mut ticks = Vec::with_capacity(limit.min(1 << 20));

        for result in rdr.records().take(limit) {
            let record = result.map_err(|e| TickbenchError::DataSource {
                reason: format!("CSV parse error: {}", e),
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            ticks.push(parse_record(&record, line)?);
        }

        debug!(path = %self.path.display(), ticks = ticks.len(), "loaded ticks");
        Ok(ticks)
    }
}

fn parse_record(record: &csv::StringRecord, line: u64) -> Result<Tick, TickbenchError> {
    let malformed = |reason: String| TickbenchError::MalformedTick { line, reason };

    let ts_str = record
        .get(0)
        .ok_or_else(|| malformed("missing timestamp column".into()))?;
    let timestamp = parse_timestamp(ts_str)
        .ok_or_else(|| malformed(format!("invalid timestamp '{}'", ts_str)))?;

    let symbol = record
        .get(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed("missing symbol column".into()))?;

    let price_str = record
        .get(2)
        .ok_or_else(|| malformed("missing price column".into()))?;
    let price: f64 = price_str
        .trim()
        .parse()
        .map_err(|e| malformed(format!("invalid price '{}': {}", price_str, e)))?;
    if !price.is_finite() || price < 0.0 {
        return Err(malformed(format!("price must be finite and non-negative, got {}", price)));
    }

    Ok(Tick::new(timestamp, symbol, price))
}

/// Parse a tick timestamp, with or without a trailing UTC offset.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
        return Some(ts);
    }
    DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%:z")
        .ok()
        .map(|dt| dt.naive_local())
}

/// Write ticks as a `timestamp,symbol,price` CSV file.
pub fn write_ticks_csv(path: &Path, ticks: &[Tick]) -> Result<(), TickbenchError> {
    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(BufWriter::new(file));

    let csv_err = |e: csv::Error| TickbenchError::DataSource {
        reason: format!("failed to write {}: {}", path.display(), e),
    };

    wtr.write_record(["timestamp", "symbol", "price"])
        .map_err(csv_err)?;
    for tick in ticks {
        wtr.write_record([
            tick.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            tick.symbol.clone(),
            tick.price.to_string(),
        ])
        .map_err(csv_err)?;
    }
    wtr.flush()?;
    Ok(())
}
