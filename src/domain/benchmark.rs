//! Benchmark harness: replays tick prefixes through fresh strategy instances
//! and records elapsed time and retained memory per trial.
//!
//! Records come out in production order: sizes as configured, and within a
//! size one record per strategy kind in configured order. Downstream pairing
//! (see [`crate::domain::analysis`]) relies on this.

use crate::domain::error::TickbenchError;
use crate::domain::strategy::StrategyKind;
use crate::domain::tick::Tick;
use crate::ports::tick_port::TickSource;
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info};

pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub window_size: usize,
    pub strategies: Vec<StrategyKind>,
}

impl BenchmarkConfig {
    pub fn new(sizes: Vec<usize>, window_size: usize) -> Self {
        Self {
            sizes,
            window_size,
            strategies: StrategyKind::ALL.to_vec(),
        }
    }

    pub fn validate(&self) -> Result<(), TickbenchError> {
        if self.window_size == 0 {
            return Err(TickbenchError::InvalidWindowSize(self.window_size));
        }
        if self.sizes.is_empty() {
            return Err(TickbenchError::InvalidBenchmark {
                reason: "no input sizes configured".into(),
            });
        }
        if self.sizes.contains(&0) {
            return Err(TickbenchError::InvalidBenchmark {
                reason: "input sizes must be positive".into(),
            });
        }
        if self.strategies.is_empty() {
            return Err(TickbenchError::InvalidBenchmark {
                reason: "no strategies configured".into(),
            });
        }
        Ok(())
    }

    pub fn max_size(&self) -> usize {
        self.sizes.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MeasurementRecord {
    pub strategy: StrategyKind,
    pub ticks: usize,
    pub runtime_seconds: f64,
    pub memory_bytes: usize,
    pub memory_megabytes: f64,
}

impl MeasurementRecord {
    pub fn new(strategy: StrategyKind, ticks: usize, runtime_seconds: f64, memory_bytes: usize) -> Self {
        Self {
            strategy,
            ticks,
            runtime_seconds,
            memory_bytes,
            memory_megabytes: memory_bytes as f64 / BYTES_PER_MEGABYTE,
        }
    }
}

/// Run every configured trial against `source`.
///
/// The configuration is validated up front, so an invalid setup fails before
/// any tick is fetched.
pub fn run_benchmark(
    source: &dyn TickSource,
    config: &BenchmarkConfig,
) -> Result<Vec<MeasurementRecord>, TickbenchError> {
    config.validate()?;

    let mut records = Vec::with_capacity(config.sizes.len() * config.strategies.len());

    for &size in &config.sizes {
        let ticks = source.fetch_ticks(size)?;
        if ticks.len() < size {
            return Err(TickbenchError::InsufficientTicks {
                requested: size,
                available: ticks.len(),
            });
        }

        info!(ticks = size, window_size = config.window_size, "benchmarking input size");

        for &kind in &config.strategies {
            let record = run_trial(kind, &ticks, config.window_size)?;
            debug!(
                strategy = %record.strategy,
                ticks = record.ticks,
                runtime_seconds = record.runtime_seconds,
                memory_bytes = record.memory_bytes,
                "trial complete"
            );
            records.push(record);
        }
    }

    Ok(records)
}

/// One trial: a fresh instance replays `ticks` once and is then dropped.
pub fn run_trial(
    kind: StrategyKind,
    ticks: &[Tick],
    window_size: usize,
) -> Result<MeasurementRecord, TickbenchError> {
    let mut strategy = kind.build(window_size)?;

    let start = Instant::now();
    for tick in ticks {
        black_box(strategy.process(tick));
    }
    let elapsed = start.elapsed();

    Ok(MeasurementRecord::new(
        kind,
        ticks.len(),
        elapsed.as_secs_f64(),
        strategy.footprint_bytes(),
    ))
}
