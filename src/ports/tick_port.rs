//! Tick source port trait.

use crate::domain::error::TickbenchError;
use crate::domain::tick::Tick;

/// Ordered, repeatable supply of ticks.
pub trait TickSource {
    /// Return at most `limit` ticks from the start of the source, in order.
    fn fetch_ticks(&self, limit: usize) -> Result<Vec<Tick>, TickbenchError>;
}

impl TickSource for Vec<Tick> {
    fn fetch_ticks(&self, limit: usize) -> Result<Vec<Tick>, TickbenchError> {
        Ok(self.iter().take(limit).cloned().collect())
    }
}
