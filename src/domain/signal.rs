//! Trading signal emitted per tick.

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Long,
    Short,
    Hold,
}

impl Signal {
    /// Long above the window average, Short below it, Hold on an exact tie.
    ///
    /// Compares `price * window_size` against `window_sum`, all in price
    /// units, so the average is never divided out.
    pub fn classify(price_units: i64, window_sum: i128, window_size: usize) -> Self {
        let scaled = i128::from(price_units) * window_size as i128;
        match scaled.cmp(&window_sum) {
            Ordering::Greater => Signal::Long,
            Ordering::Less => Signal::Short,
            Ordering::Equal => Signal::Hold,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Long => write!(f, "Long"),
            Signal::Short => write!(f, "Short"),
            Signal::Hold => write!(f, "Hold"),
        }
    }
}
