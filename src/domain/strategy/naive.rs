//! Full-history moving average.
//!
//! Every price ever seen is appended to `history`. Once at least
//! `window_size` prices exist, the last `window_size` are copied out and
//! summed, in fixed-point units, to form the average.
//! Per tick: O(k) time. Total space: O(n) for n ticks.

use super::{validate_window_size, Strategy, StrategyKind};
use crate::domain::error::TickbenchError;
use crate::domain::price::to_units;
use crate::domain::signal::Signal;
use crate::domain::tick::Tick;
use std::mem::size_of;

#[derive(Debug, Clone)]
pub struct NaiveStrategy {
    window_size: usize,
    history: Vec<f64>,
}

impl NaiveStrategy {
    pub fn new(window_size: usize) -> Result<Self, TickbenchError> {
        validate_window_size(window_size)?;
        Ok(Self {
            window_size,
            history: Vec::new(),
        })
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }
}

impl Strategy for NaiveStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Naive
    }

    fn window_size(&self) -> usize {
        self.window_size
    }

    fn process(&mut self, tick: &Tick) -> Signal {
        self.history.push(tick.price);

        if self.history.len() < self.window_size {
            return Signal::Hold;
        }

        // The per-tick copy is part of the baseline cost being measured.
        let window = self.history[self.history.len() - self.window_size..].to_vec();
        let sum: i128 = window.iter().map(|&p| i128::from(to_units(p))).sum();

        Signal::classify(to_units(tick.price), sum, self.window_size)
    }

    fn retained_len(&self) -> usize {
        self.history.len()
    }

    fn footprint_bytes(&self) -> usize {
        size_of::<Self>() + self.history.len() * size_of::<f64>()
    }
}
