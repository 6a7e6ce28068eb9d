//! Synthetic tick generator: geometric random walk over market minutes.
//!
//! Each tick multiplies the previous price by `1 + r` with
//! `r ~ Normal(0, volatility)`. Timestamps advance one minute at a time
//! inside a 09:30-16:00 session, skipping Saturdays and Sundays. A fixed seed
//! makes every fetch return the same sequence.

use crate::domain::error::TickbenchError;
use crate::domain::tick::Tick;
use crate::ports::tick_port::TickSource;
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike, Weekday};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

const SESSION_OPEN: (u32, u32) = (9, 30);
const SESSION_CLOSE_HOUR: u32 = 16;

#[derive(Debug, Clone)]
pub struct RandomWalkSource {
    pub symbol: String,
    pub start_price: f64,
    pub volatility: f64,
    pub seed: u64,
    pub start: NaiveDateTime,
}

impl RandomWalkSource {
    pub fn generate(&self, count: usize) -> Result<Vec<Tick>, TickbenchError> {
        let normal = Normal::new(0.0, self.volatility).map_err(|e| TickbenchError::DataSource {
            reason: format!("invalid volatility {}: {}", self.volatility, e),
        })?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut ticks = Vec::with_capacity(count);
        let mut price = self.start_price;
        let mut timestamp = align_to_session(self.start);

        for _ in 0..count {
            price *= 1.0 + normal.sample(&mut rng);
            ticks.push(Tick::new(timestamp, self.symbol.clone(), price));
            timestamp = next_market_minute(timestamp);
        }

        Ok(ticks)
    }
}

impl TickSource for RandomWalkSource {
    fn fetch_ticks(&self, limit: usize) -> Result<Vec<Tick>, TickbenchError> {
        self.generate(limit)
    }
}

/// Advance one minute, rolling past the close and over weekends.
pub fn next_market_minute(ts: NaiveDateTime) -> NaiveDateTime {
    align_to_session(ts + Duration::minutes(1))
}

fn align_to_session(mut ts: NaiveDateTime) -> NaiveDateTime {
    let open = NaiveTime::from_hms_opt(SESSION_OPEN.0, SESSION_OPEN.1, 0).unwrap_or_default();

    if ts.hour() >= SESSION_CLOSE_HOUR {
        ts = (ts.date() + Duration::days(1)).and_time(open);
    } else if ts.time() < open {
        ts = ts.date().and_time(open);
    }
    while matches!(ts.weekday(), Weekday::Sat | Weekday::Sun) {
        ts = (ts.date() + Duration::days(1)).and_time(open);
    }
    ts
}
