//! Tick representation: one timestamped price observation.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub timestamp: NaiveDateTime,
    pub symbol: String,
    pub price: f64,
}

impl Tick {
    pub fn new(timestamp: NaiveDateTime, symbol: impl Into<String>, price: f64) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            price,
        }
    }
}
