//! Configuration validation.
//!
//! Validates all config fields before a benchmark runs, and parses the list
//! values (`sizes`, `strategies`) shared by validation and the CLI.

use crate::domain::error::TickbenchError;
use crate::domain::strategy::{parse_strategies, StrategyKind};
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDateTime;
use std::str::FromStr;

pub const DEFAULT_WINDOW_SIZE: usize = 10;
pub const DEFAULT_SIZES: &str = "1000,10000,100000";
pub const DEFAULT_STRATEGIES: &str = "naive,windowed";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_SYMBOL: &str = "ANET";
pub const DEFAULT_START_PRICE: f64 = 100.0;
pub const DEFAULT_VOLATILITY: f64 = 0.0005;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_WALK_START: &str = "2024-01-02 09:30:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    Csv,
    RandomWalk,
}

pub fn validate_benchmark_config(config: &dyn ConfigPort) -> Result<(), TickbenchError> {
    window_size(config)?;
    sizes(config)?;
    strategies(config)?;
    Ok(())
}

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), TickbenchError> {
    match data_source_kind(config)? {
        DataSourceKind::Csv => validate_csv_path(config)?,
        DataSourceKind::RandomWalk => validate_random_walk(config)?,
    }
    Ok(())
}

pub fn window_size(config: &dyn ConfigPort) -> Result<usize, TickbenchError> {
    let Some(raw) = config.get_string("benchmark", "window_size") else {
        return Ok(DEFAULT_WINDOW_SIZE);
    };
    match raw.trim().parse::<i64>() {
        Ok(v) if v >= 1 => Ok(v as usize),
        Ok(_) => Err(invalid("benchmark", "window_size", "window_size must be at least 1")),
        Err(_) => Err(invalid("benchmark", "window_size", "window_size must be an integer")),
    }
}

pub fn sizes(config: &dyn ConfigPort) -> Result<Vec<usize>, TickbenchError> {
    let raw = config
        .get_string("benchmark", "sizes")
        .unwrap_or_else(|| DEFAULT_SIZES.to_string());
    parse_sizes(&raw).map_err(|reason| invalid("benchmark", "sizes", &reason))
}

pub fn strategies(config: &dyn ConfigPort) -> Result<Vec<StrategyKind>, TickbenchError> {
    let raw = config
        .get_string("benchmark", "strategies")
        .unwrap_or_else(|| DEFAULT_STRATEGIES.to_string());
    parse_strategies(&raw).map_err(|reason| invalid("benchmark", "strategies", &reason))
}

/// Parse a comma-separated list of positive tick counts, e.g. `1000,10000`.
/// Underscore digit separators are accepted.
pub fn parse_sizes(input: &str) -> Result<Vec<usize>, String> {
    let mut sizes = Vec::new();
    for token in input.split(',') {
        let trimmed = token.trim().replace('_', "");
        if trimmed.is_empty() {
            return Err("empty token in size list".into());
        }
        let size: usize = trimmed
            .parse()
            .map_err(|_| format!("invalid size '{}'", token.trim()))?;
        if size == 0 {
            return Err("sizes must be positive".into());
        }
        sizes.push(size);
    }
    Ok(sizes)
}

pub fn data_source_kind(config: &dyn ConfigPort) -> Result<DataSourceKind, TickbenchError> {
    match config
        .get_string("data", "source")
        .map(|s| s.trim().to_lowercase())
        .as_deref()
    {
        None | Some("random_walk") => Ok(DataSourceKind::RandomWalk),
        Some("csv") => Ok(DataSourceKind::Csv),
        Some(other) => Err(invalid(
            "data",
            "source",
            &format!("unknown source '{}', expected csv or random_walk", other),
        )),
    }
}

fn validate_csv_path(config: &dyn ConfigPort) -> Result<(), TickbenchError> {
    match config.get_string("data", "path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(TickbenchError::ConfigMissing {
            section: "data".to_string(),
            key: "path".to_string(),
        }),
    }
}

fn validate_random_walk(config: &dyn ConfigPort) -> Result<(), TickbenchError> {
    start_price(config)?;
    volatility(config)?;
    seed(config)?;
    walk_start(config)?;
    symbol(config)?;
    Ok(())
}

/// Parse an optional key strictly: absent means `None`, present but
/// unparseable is `ConfigInvalid`.
fn parse_key<T: FromStr>(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
    expected: &str,
) -> Result<Option<T>, TickbenchError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| invalid(section, key, &format!("{} must be {}", key, expected))),
    }
}

pub fn start_price(config: &dyn ConfigPort) -> Result<f64, TickbenchError> {
    let value = parse_key(config, "random_walk", "start_price", "a number")?
        .unwrap_or(DEFAULT_START_PRICE);
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(
            "random_walk",
            "start_price",
            "start_price must be positive",
        ));
    }
    Ok(value)
}

pub fn volatility(config: &dyn ConfigPort) -> Result<f64, TickbenchError> {
    let value = parse_key(config, "random_walk", "volatility", "a number")?
        .unwrap_or(DEFAULT_VOLATILITY);
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(
            "random_walk",
            "volatility",
            "volatility must be non-negative",
        ));
    }
    Ok(value)
}

pub fn seed(config: &dyn ConfigPort) -> Result<u64, TickbenchError> {
    Ok(parse_key(config, "random_walk", "seed", "a non-negative integer")?
        .unwrap_or(DEFAULT_SEED))
}

pub fn walk_start(config: &dyn ConfigPort) -> Result<NaiveDateTime, TickbenchError> {
    let raw = config
        .get_string("random_walk", "start")
        .unwrap_or_else(|| DEFAULT_WALK_START.to_string());
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(|_| {
        invalid(
            "random_walk",
            "start",
            "invalid start format, expected YYYY-MM-DD HH:MM:SS",
        )
    })
}

/// Empty values read as absent, so any present symbol is non-empty.
pub fn symbol(config: &dyn ConfigPort) -> Result<String, TickbenchError> {
    Ok(config
        .get_string("random_walk", "symbol")
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string()))
}

fn invalid(section: &str, key: &str, reason: &str) -> TickbenchError {
    TickbenchError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
