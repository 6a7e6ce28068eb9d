//! Moving-average signal strategies.
//!
//! Two interchangeable implementations of the same trailing-average rule:
//! - [`naive::NaiveStrategy`]: keeps the full price history and re-sums the
//!   last `window_size` prices on every tick.
//! - [`windowed::WindowedStrategy`]: keeps only the last `window_size` prices
//!   in a ring buffer plus a running sum.
//!
//! For the same tick sequence and window size both emit identical signals.

pub mod naive;
pub mod windowed;

use crate::domain::error::TickbenchError;
use crate::domain::signal::Signal;
use crate::domain::tick::Tick;
use std::fmt;
use std::str::FromStr;

pub use naive::NaiveStrategy;
pub use windowed::WindowedStrategy;

pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    fn window_size(&self) -> usize;

    /// Consume one tick and classify it against the trailing average.
    fn process(&mut self, tick: &Tick) -> Signal;

    /// Number of prices currently held in strategy state.
    fn retained_len(&self) -> usize;

    /// Bytes retained by the instance's own state.
    fn footprint_bytes(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Naive,
    Windowed,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Naive, StrategyKind::Windowed];

    /// Build a fresh instance of this variant.
    pub fn build(self, window_size: usize) -> Result<Box<dyn Strategy>, TickbenchError> {
        Ok(match self {
            StrategyKind::Naive => Box::new(NaiveStrategy::new(window_size)?),
            StrategyKind::Windowed => Box::new(WindowedStrategy::new(window_size)?),
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Naive => "naive",
            StrategyKind::Windowed => "windowed",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naive" => Ok(StrategyKind::Naive),
            "windowed" => Ok(StrategyKind::Windowed),
            other => Err(format!("unknown strategy '{}'", other)),
        }
    }
}

/// Parse a comma-separated strategy list such as `naive,windowed`.
pub fn parse_strategies(input: &str) -> Result<Vec<StrategyKind>, String> {
    let mut kinds = Vec::new();
    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err("empty token in strategy list".into());
        }
        let kind: StrategyKind = trimmed.parse()?;
        if kinds.contains(&kind) {
            return Err(format!("duplicate strategy: {}", kind));
        }
        kinds.push(kind);
    }
    Ok(kinds)
}

pub(crate) fn validate_window_size(window_size: usize) -> Result<(), TickbenchError> {
    if window_size == 0 {
        return Err(TickbenchError::InvalidWindowSize(window_size));
    }
    Ok(())
}
