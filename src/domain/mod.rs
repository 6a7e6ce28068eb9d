//! Core domain types and logic.

pub mod tick;
pub mod price;
pub mod signal;
pub mod ring_buffer;
pub mod strategy;
pub mod benchmark;
pub mod analysis;
pub mod config_validation;
pub mod error;
