//! Fixed-window moving average with a running sum.
//!
//! Only the last `window_size` prices are kept, as fixed-point units in a
//! preallocated [`RingBuffer`]. `running_sum` is updated with one subtract
//! (on eviction) and one add per tick, so the average never needs a resum.
//! Integer units keep the running sum equal to a fresh resum at every tick.
//! Per tick: O(1) time. Total space: O(k).

use super::{validate_window_size, Strategy, StrategyKind};
use crate::domain::error::TickbenchError;
use crate::domain::price::to_units;
use crate::domain::ring_buffer::RingBuffer;
use crate::domain::signal::Signal;
use crate::domain::tick::Tick;
use std::mem::size_of;

#[derive(Debug, Clone)]
pub struct WindowedStrategy {
    window_size: usize,
    window: RingBuffer<i64>,
    running_sum: i128,
}

impl WindowedStrategy {
    pub fn new(window_size: usize) -> Result<Self, TickbenchError> {
        validate_window_size(window_size)?;
        Ok(Self {
            window_size,
            window: RingBuffer::with_capacity(window_size),
            running_sum: 0,
        })
    }

    /// Sum of the window in price units.
    pub fn running_sum(&self) -> i128 {
        self.running_sum
    }

    pub fn window(&self) -> &RingBuffer<i64> {
        &self.window
    }
}

impl Strategy for WindowedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Windowed
    }

    fn window_size(&self) -> usize {
        self.window_size
    }

    fn process(&mut self, tick: &Tick) -> Signal {
        // Evict before insert: the sum update stays a subtract/add pair.
        if self.window.is_full() {
            if let Some(oldest) = self.window.front() {
                self.running_sum -= i128::from(oldest);
            }
        }

        let units = to_units(tick.price);
        self.window.push(units);
        self.running_sum += i128::from(units);

        if self.window.len() < self.window_size {
            return Signal::Hold;
        }

        Signal::classify(units, self.running_sum, self.window_size)
    }

    fn retained_len(&self) -> usize {
        self.window.len()
    }

    fn footprint_bytes(&self) -> usize {
        size_of::<Self>() + self.window.capacity() * size_of::<i64>()
    }
}
