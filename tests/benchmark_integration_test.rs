//! Benchmark harness against real tick sources.
//!
//! Tests cover:
//! - Memory scaling of both strategies over 1,000 / 10,000 / 100,000 ticks
//! - Windowed runtime and memory budget at 100,000 ticks
//! - Record ordering and pairing
//! - Invalid configurations failing before any fetch
//! - CSV and random-walk sources end to end

mod common;

use common::*;
use tickbench::adapters::csv_adapter::{write_ticks_csv, CsvTickSource};
use tickbench::adapters::random_walk::RandomWalkSource;
use tickbench::domain::analysis::compare_by_size;
use tickbench::domain::benchmark::{run_benchmark, BenchmarkConfig, MeasurementRecord};
use tickbench::domain::error::TickbenchError;
use tickbench::domain::strategy::StrategyKind;

fn record(records: &[MeasurementRecord], kind: StrategyKind, ticks: usize) -> &MeasurementRecord {
    records
        .iter()
        .find(|r| r.strategy == kind && r.ticks == ticks)
        .unwrap()
}

#[test]
fn memory_scales_linearly_for_naive_and_flat_for_windowed() {
    let source = MockTickSource::new(sample_ticks(100_000));
    let config = BenchmarkConfig::new(vec![1_000, 10_000, 100_000], 10);

    let records = run_benchmark(&source, &config).unwrap();
    assert_eq!(records.len(), 6);

    let naive_small = record(&records, StrategyKind::Naive, 1_000).memory_bytes;
    let naive_mid = record(&records, StrategyKind::Naive, 10_000).memory_bytes;
    let naive_large = record(&records, StrategyKind::Naive, 100_000).memory_bytes;
    assert_eq!(naive_mid - naive_small, 9_000 * 8);
    assert_eq!(naive_large - naive_small, 99_000 * 8);

    let windowed: Vec<usize> = [1_000, 10_000, 100_000]
        .iter()
        .map(|&n| record(&records, StrategyKind::Windowed, n).memory_bytes)
        .collect();
    assert!(windowed.iter().all(|&b| b == windowed[0]));
    assert!(windowed[0] < naive_small);
}

#[test]
fn windowed_meets_budget_at_100k_ticks() {
    let source = MockTickSource::new(sample_ticks(100_000));
    let records = run_benchmark(&source, &BenchmarkConfig::new(vec![100_000], 10)).unwrap();

    let windowed = record(&records, StrategyKind::Windowed, 100_000);
    let naive = record(&records, StrategyKind::Naive, 100_000);
    assert!(
        windowed.runtime_seconds < 1.0,
        "windowed replay took {:.4}s",
        windowed.runtime_seconds
    );
    assert!(windowed.memory_megabytes < 1.0);
    assert!(windowed.memory_megabytes < naive.memory_megabytes);
}

#[test]
fn windowed_footprint_grows_with_window_only() {
    let source = MockTickSource::new(sample_ticks(5_000));
    let small = run_benchmark(&source, &BenchmarkConfig::new(vec![5_000], 10)).unwrap();
    let large = run_benchmark(&source, &BenchmarkConfig::new(vec![5_000], 50)).unwrap();

    let small_bytes = record(&small, StrategyKind::Windowed, 5_000).memory_bytes;
    let large_bytes = record(&large, StrategyKind::Windowed, 5_000).memory_bytes;
    assert_eq!(large_bytes - small_bytes, 40 * 8);

    // Naive retains every tick regardless of window.
    assert_eq!(
        record(&small, StrategyKind::Naive, 5_000).memory_bytes,
        record(&large, StrategyKind::Naive, 5_000).memory_bytes
    );
}

#[test]
fn records_follow_size_then_strategy_order() {
    let source = MockTickSource::new(sample_ticks(300));
    let config = BenchmarkConfig {
        sizes: vec![300, 100, 200],
        window_size: 5,
        strategies: vec![StrategyKind::Windowed, StrategyKind::Naive],
    };

    let records = run_benchmark(&source, &config).unwrap();
    let order: Vec<(usize, StrategyKind)> = records.iter().map(|r| (r.ticks, r.strategy)).collect();
    assert_eq!(
        order,
        vec![
            (300, StrategyKind::Windowed),
            (300, StrategyKind::Naive),
            (100, StrategyKind::Windowed),
            (100, StrategyKind::Naive),
            (200, StrategyKind::Windowed),
            (200, StrategyKind::Naive),
        ]
    );
    assert_eq!(*source.calls.borrow(), vec![300, 100, 200]);

    let comparisons = compare_by_size(&records);
    let sizes: Vec<usize> = comparisons.iter().map(|c| c.ticks).collect();
    assert_eq!(sizes, vec![300, 100, 200]);
}

#[test]
fn runtimes_are_non_negative() {
    let source = MockTickSource::new(sample_ticks(2_000));
    let records = run_benchmark(&source, &BenchmarkConfig::new(vec![1_000, 2_000], 10)).unwrap();
    for r in &records {
        assert!(r.runtime_seconds >= 0.0);
        assert!(r.runtime_seconds.is_finite());
    }
}

#[test]
fn invalid_config_fails_before_fetching() {
    let source = MockTickSource::new(sample_ticks(100));

    let err = run_benchmark(&source, &BenchmarkConfig::new(vec![100], 0)).unwrap_err();
    assert!(matches!(err, TickbenchError::InvalidWindowSize(0)));

    let err = run_benchmark(&source, &BenchmarkConfig::new(vec![], 5)).unwrap_err();
    assert!(matches!(err, TickbenchError::InvalidBenchmark { .. }));

    let err = run_benchmark(&source, &BenchmarkConfig::new(vec![10, 0], 5)).unwrap_err();
    assert!(matches!(err, TickbenchError::InvalidBenchmark { .. }));

    assert!(source.calls.borrow().is_empty());
}

#[test]
fn short_source_reports_available_count() {
    let source = MockTickSource::new(sample_ticks(50));
    let err = run_benchmark(&source, &BenchmarkConfig::new(vec![10, 100], 5)).unwrap_err();
    match err {
        TickbenchError::InsufficientTicks {
            requested,
            available,
        } => {
            assert_eq!(requested, 100);
            assert_eq!(available, 50);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn source_errors_propagate() {
    let source = MockTickSource::with_error("feed offline");
    let err = run_benchmark(&source, &BenchmarkConfig::new(vec![10], 5)).unwrap_err();
    assert!(matches!(err, TickbenchError::DataSource { .. }));
}

#[test]
fn csv_source_end_to_end() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ticks.csv");
    write_ticks_csv(&path, &sample_ticks(1_500)).unwrap();

    let source = CsvTickSource::new(&path);
    let records = run_benchmark(&source, &BenchmarkConfig::new(vec![500, 1_500], 20)).unwrap();

    assert_eq!(records.len(), 4);
    let naive_500 = record(&records, StrategyKind::Naive, 500).memory_bytes;
    let naive_1500 = record(&records, StrategyKind::Naive, 1_500).memory_bytes;
    assert_eq!(naive_1500 - naive_500, 1_000 * 8);
}

#[test]
fn random_walk_source_end_to_end() {
    let walk = RandomWalkSource {
        symbol: SYMBOL.to_string(),
        start_price: 100.0,
        volatility: 0.001,
        seed: 7,
        start: base_time(),
    };

    let records = run_benchmark(&walk, &BenchmarkConfig::new(vec![1_000, 10_000], 10)).unwrap();
    assert_eq!(records.len(), 4);

    let comparisons = compare_by_size(&records);
    assert_eq!(comparisons.len(), 2);
    for c in &comparisons {
        assert!(c.naive_memory_bytes > c.windowed_memory_bytes);
        assert!(c.memory_ratio > 1.0);
    }
}
