//! Cross-strategy properties.
//!
//! Generated prices carry two to four decimal places, the way quotes arrive
//! from a feed. The naive and windowed strategies must emit identical signal
//! sequences on every stream.

mod common;

use common::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tickbench::domain::price::to_units;
use tickbench::domain::signal::Signal;
use tickbench::domain::strategy::naive::NaiveStrategy;
use tickbench::domain::strategy::windowed::WindowedStrategy;
use tickbench::domain::strategy::{Strategy as TickStrategy, StrategyKind};

fn replay(strategy: &mut dyn TickStrategy, ticks: &[Tick]) -> Vec<Signal> {
    ticks.iter().map(|t| strategy.process(t)).collect()
}

fn replay_kind(kind: StrategyKind, window_size: usize, ticks: &[Tick]) -> Vec<Signal> {
    let mut strategy = kind.build(window_size).unwrap();
    replay(strategy.as_mut(), ticks)
}

fn decimal_price() -> impl Strategy<Value = f64> {
    (1u64..100_000_000, 2u32..=4).prop_map(|(mantissa, places)| {
        mantissa as f64 / 10f64.powi(places as i32)
    })
}

fn decimal_prices() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(decimal_price(), 0..300)
}

/// Cent-quoted walk: each tick moves -1, 0 or +1 cent.
fn cent_walk(start: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut cents = (start * 100.0).round() as i64;
    (0..n)
        .map(|_| {
            cents += rng.gen_range(-1..=1);
            cents as f64 / 100.0
        })
        .collect()
}

proptest! {
    #[test]
    fn naive_and_windowed_emit_identical_signals(
        window_size in 1usize..=32,
        prices in decimal_prices(),
    ) {
        let ticks = ticks_from_prices(&prices);
        let naive = replay_kind(StrategyKind::Naive, window_size, &ticks);
        let windowed = replay_kind(StrategyKind::Windowed, window_size, &ticks);
        prop_assert_eq!(naive, windowed);
    }

    #[test]
    fn warm_up_always_holds(
        window_size in 1usize..=32,
        prices in decimal_prices(),
    ) {
        let ticks = ticks_from_prices(&prices);
        for kind in StrategyKind::ALL {
            let signals = replay_kind(kind, window_size, &ticks);
            for signal in signals.iter().take(window_size - 1) {
                prop_assert_eq!(*signal, Signal::Hold);
            }
        }
    }

    #[test]
    fn retained_state_bounds(
        window_size in 1usize..=32,
        prices in decimal_prices(),
    ) {
        let ticks = ticks_from_prices(&prices);
        let mut naive = NaiveStrategy::new(window_size).unwrap();
        let mut windowed = WindowedStrategy::new(window_size).unwrap();

        for (i, tick) in ticks.iter().enumerate() {
            naive.process(tick);
            windowed.process(tick);
            prop_assert_eq!(naive.retained_len(), i + 1);
            prop_assert_eq!(windowed.retained_len(), (i + 1).min(window_size));
        }
    }

    #[test]
    fn running_sum_matches_window_contents(
        window_size in 1usize..=32,
        prices in decimal_prices(),
    ) {
        let ticks = ticks_from_prices(&prices);
        let mut windowed = WindowedStrategy::new(window_size).unwrap();

        for tick in &ticks {
            windowed.process(tick);
            let contents: i128 = windowed.window().iter().map(i128::from).sum();
            prop_assert_eq!(windowed.running_sum(), contents);
        }
    }

    #[test]
    fn window_holds_most_recent_prices(
        window_size in 1usize..=32,
        prices in decimal_prices(),
    ) {
        let ticks = ticks_from_prices(&prices);
        let mut windowed = WindowedStrategy::new(window_size).unwrap();
        for tick in &ticks {
            windowed.process(tick);
        }

        let start = prices.len().saturating_sub(window_size);
        let held: Vec<i64> = windowed.window().iter().collect();
        let expected: Vec<i64> = prices[start..].iter().map(|&p| to_units(p)).collect();
        prop_assert_eq!(held, expected);
    }
}

#[test]
fn cent_walk_signals_agree() {
    let ticks = ticks_from_prices(&cent_walk(250.10, 20_000, 17));
    for window_size in [2, 3, 10, 50] {
        let naive = replay_kind(StrategyKind::Naive, window_size, &ticks);
        let windowed = replay_kind(StrategyKind::Windowed, window_size, &ticks);
        let first_mismatch = naive.iter().zip(&windowed).position(|(a, b)| a != b);
        assert_eq!(first_mismatch, None, "window {window_size}");
    }
}

#[test]
fn flat_decimal_price_holds_throughout() {
    for price in [100.1, 0.3, 250.13, 99.99] {
        let ticks = ticks_from_prices(&vec![price; 50]);
        for kind in StrategyKind::ALL {
            let signals = replay_kind(kind, 10, &ticks);
            assert!(
                signals.iter().all(|s| *s == Signal::Hold),
                "{kind} at {price}"
            );
        }
    }
}

#[test]
fn flat_then_breakout_signals() {
    let mut prices = vec![100.0; 10];
    prices.extend([110.0, 90.0, 100.0]);
    let ticks = ticks_from_prices(&prices);

    for kind in StrategyKind::ALL {
        let signals = replay_kind(kind, 10, &ticks);
        assert!(signals[..9].iter().all(|s| *s == Signal::Hold), "{kind}");
        // Tenth tick equals its own average.
        assert_eq!(signals[9], Signal::Hold, "{kind}");
        assert_eq!(signals[10], Signal::Long, "{kind}");
        assert_eq!(signals[11], Signal::Short, "{kind}");
        assert_eq!(signals[12], Signal::Hold, "{kind}");
    }
}

#[test]
fn rising_prices_go_long_after_warm_up() {
    let prices: Vec<f64> = (100..150).map(f64::from).collect();
    let ticks = ticks_from_prices(&prices);

    for window_size in 1..=10 {
        let naive = replay_kind(StrategyKind::Naive, window_size, &ticks);
        let windowed = replay_kind(StrategyKind::Windowed, window_size, &ticks);
        assert_eq!(naive, windowed, "window {window_size}");

        for (i, signal) in windowed.iter().enumerate() {
            let expected = if window_size == 1 || i + 1 < window_size {
                Signal::Hold
            } else {
                Signal::Long
            };
            assert_eq!(*signal, expected, "window {window_size}, tick {i}");
        }
    }
}

#[test]
fn falling_prices_go_short_after_warm_up() {
    let prices: Vec<f64> = (0..40).map(|i| 200.0 - i as f64 * 0.5).collect();
    let ticks = ticks_from_prices(&prices);

    let signals = replay_kind(StrategyKind::Windowed, 5, &ticks);
    assert!(signals[..4].iter().all(|s| *s == Signal::Hold));
    assert!(signals[4..].iter().all(|s| *s == Signal::Short));
    assert_eq!(signals, replay_kind(StrategyKind::Naive, 5, &ticks));
}

#[test]
fn window_larger_than_stream_never_signals() {
    let ticks = sample_ticks(20);
    for kind in StrategyKind::ALL {
        let signals = replay_kind(kind, 50, &ticks);
        assert!(signals.iter().all(|s| *s == Signal::Hold));
    }
}

#[test]
fn empty_stream_yields_nothing() {
    for kind in StrategyKind::ALL {
        assert!(replay_kind(kind, 3, &[]).is_empty());
    }
}
