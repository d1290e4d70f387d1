use proptest::prelude::*;

use common::{Direction, IndicatorSnapshot};
use strategy::classifier::round6;
use strategy::{decide, SignalRules};

proptest! {
    /// Threshold evaluation on randomized finite inputs must never panic, and
    /// any fired signal must have coherently ordered price levels.
    #[test]
    fn decide_never_panics_and_orders_levels(
        prev_close in 0.0001f64..1_000_000.0f64,
        close in 0.0001f64..1_000_000.0f64,
        ema50 in 0.0001f64..1_000_000.0f64,
        ema200 in 0.0001f64..1_000_000.0f64,
        rsi in 0.0f64..100.0f64,
        macd in -1_000.0f64..1_000.0f64,
        macd_signal in -1_000.0f64..1_000.0f64,
        avg_volume in 0.0f64..1_000_000.0f64,
    ) {
        let rules = SignalRules::default();
        let snap = IndicatorSnapshot {
            close,
            volume: avg_volume,
            ema50,
            ema200,
            rsi,
            macd,
            macd_signal,
            bb_upper: close * 1.02,
            bb_lower: close * 0.98,
            atr: (close * 0.01).abs(),
            avg_volume,
        };

        if let Some(signal) = decide("TEST/USDT", prev_close, &snap, &rules) {
            prop_assert_eq!(signal.entry_price, close);
            // Levels are already rounded to quoting precision
            prop_assert_eq!(round6(signal.take_profit), signal.take_profit);
            prop_assert_eq!(round6(signal.stop_loss), signal.stop_loss);
            match signal.direction {
                Direction::Long => {
                    prop_assert!(signal.stop_loss < signal.entry_price);
                    prop_assert!(signal.take_profit > signal.entry_price);
                }
                Direction::Short => {
                    prop_assert!(signal.take_profit < signal.entry_price);
                    prop_assert!(signal.stop_loss > signal.entry_price);
                }
            }
        }
    }

    /// The two directions are mutually exclusive whatever the inputs: a LONG
    /// requires a rise, a SHORT requires a fall, and both compare the same
    /// indicator values with opposite inequalities.
    #[test]
    fn at_most_one_direction_can_fire(
        prev_close in 0.0001f64..1_000_000.0f64,
        close in 0.0001f64..1_000_000.0f64,
    ) {
        let rules = SignalRules::default();
        let change = (close - prev_close) / prev_close * 100.0;
        prop_assert!(!(change >= rules.long_change_pct && change <= rules.short_change_pct));
    }
}
