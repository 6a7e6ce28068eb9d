#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::cell::RefCell;
use std::io::Write;
use tickbench::domain::benchmark::MeasurementRecord;
use tickbench::domain::error::TickbenchError;
pub use tickbench::domain::tick::Tick;
use tickbench::ports::report_port::ReportPort;
use tickbench::ports::tick_port::TickSource;

pub const SYMBOL: &str = "ANET";

pub fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

/// One tick per price, one minute apart.
pub fn ticks_from_prices(prices: &[f64]) -> Vec<Tick> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &p)| Tick::new(base_time() + Duration::minutes(i as i64), SYMBOL, p))
        .collect()
}

/// `n` ticks cycling through 100.0..=109.0.
pub fn sample_ticks(n: usize) -> Vec<Tick> {
    let prices: Vec<f64> = (0..n).map(|i| 100.0 + (i % 10) as f64).collect();
    ticks_from_prices(&prices)
}

pub struct MockTickSource {
    pub ticks: Vec<Tick>,
    pub error: Option<String>,
    pub calls: RefCell<Vec<usize>>,
}

impl MockTickSource {
    pub fn new(ticks: Vec<Tick>) -> Self {
        Self {
            ticks,
            error: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_error(reason: &str) -> Self {
        Self {
            ticks: Vec::new(),
            error: Some(reason.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl TickSource for MockTickSource {
    fn fetch_ticks(&self, limit: usize) -> Result<Vec<Tick>, TickbenchError> {
        self.calls.borrow_mut().push(limit);
        if let Some(reason) = &self.error {
            return Err(TickbenchError::DataSource {
                reason: reason.clone(),
            });
        }
        Ok(self.ticks.iter().take(limit).cloned().collect())
    }
}

/// Captures what the pipeline hands to the report writer.
#[derive(Default)]
pub struct RecordingReporter {
    pub written: RefCell<Vec<(Vec<MeasurementRecord>, usize)>>,
}

impl ReportPort for RecordingReporter {
    fn write(
        &self,
        records: &[MeasurementRecord],
        window_size: usize,
        _output_dir: &std::path::Path,
    ) -> Result<(), TickbenchError> {
        self.written
            .borrow_mut()
            .push((records.to_vec(), window_size));
        Ok(())
    }
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
