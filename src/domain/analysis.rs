//! Per-size comparison of naive vs windowed measurements.

use crate::domain::benchmark::MeasurementRecord;
use crate::domain::strategy::StrategyKind;

#[derive(Debug, Clone, PartialEq)]
pub struct SizeComparison {
    pub ticks: usize,
    pub naive_runtime_seconds: f64,
    pub windowed_runtime_seconds: f64,
    pub speedup: f64,
    pub naive_memory_bytes: usize,
    pub windowed_memory_bytes: usize,
    pub memory_ratio: f64,
}

/// Pair naive and windowed records that share a tick count.
///
/// Sizes appear in first-seen order; a size missing either variant is
/// skipped.
pub fn compare_by_size(records: &[MeasurementRecord]) -> Vec<SizeComparison> {
    let mut sizes: Vec<usize> = Vec::new();
    for r in records {
        if !sizes.contains(&r.ticks) {
            sizes.push(r.ticks);
        }
    }

    sizes
        .into_iter()
        .filter_map(|ticks| {
            let find = |kind: StrategyKind| {
                records
                    .iter()
                    .find(|r| r.ticks == ticks && r.strategy == kind)
            };
            let naive = find(StrategyKind::Naive)?;
            let windowed = find(StrategyKind::Windowed)?;

            Some(SizeComparison {
                ticks,
                naive_runtime_seconds: naive.runtime_seconds,
                windowed_runtime_seconds: windowed.runtime_seconds,
                speedup: ratio(naive.runtime_seconds, windowed.runtime_seconds),
                naive_memory_bytes: naive.memory_bytes,
                windowed_memory_bytes: windowed.memory_bytes,
                memory_ratio: ratio(naive.memory_bytes as f64, windowed.memory_bytes as f64),
            })
        })
        .collect()
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
