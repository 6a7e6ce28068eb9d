//! Fixed-point price units.
//!
//! Window sums are kept in integer units of 1e-8 so that an incrementally
//! maintained sum and a fresh resum of the same prices are always equal.
//! Each price is quantized exactly once, by [`to_units`].

/// Integer price units per 1.0 of price.
pub const UNITS_PER_PRICE: i64 = 100_000_000;

/// Quantize a price to the nearest unit. Prices beyond the i64 range
/// saturate; NaN maps to 0.
pub fn to_units(price: f64) -> i64 {
    (price * UNITS_PER_PRICE as f64).round() as i64
}

pub fn from_units(units: i64) -> f64 {
    units as f64 / UNITS_PER_PRICE as f64
}
