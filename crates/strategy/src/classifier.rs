use tracing::debug;

use common::{Candle, Direction, IndicatorSnapshot, Result, TradeSignal};

use crate::config::SignalRules;
use crate::snapshot;

/// Classify a candle window into an optional trade signal.
///
/// The volume gate runs before any indicator math: a window shorter than the
/// volume look-back, or with thin average volume over it, yields `Ok(None)`
/// without touching the indicator engine. Indicator computation may still
/// fail with `InvalidInput` (window between the look-back and the indicator
/// minimum, or malformed candles); the caller skips the symbol for the cycle.
pub fn classify(
    symbol: &str,
    candles: &[Candle],
    rules: &SignalRules,
) -> Result<Option<TradeSignal>> {
    if candles.len() < rules.volume_lookback {
        debug!(symbol, len = candles.len(), "window shorter than volume look-back");
        return Ok(None);
    }

    let tail = &candles[candles.len() - rules.volume_lookback..];
    let avg_volume = tail.iter().map(|c| c.volume).sum::<f64>() / rules.volume_lookback as f64;
    if avg_volume < rules.min_avg_volume {
        debug!(symbol, avg_volume, "low average volume — signal skipped");
        return Ok(None);
    }

    let snap = snapshot::compute(candles)?;
    let prev_close = candles[candles.len() - 2].close;
    Ok(decide(symbol, prev_close, &snap, rules))
}

/// Apply the threshold rules to the latest indicator values.
///
/// Pure function of its inputs; `classify` feeds it real windows, tests feed
/// it hand-built snapshots.
pub fn decide(
    symbol: &str,
    prev_close: f64,
    snap: &IndicatorSnapshot,
    rules: &SignalRules,
) -> Option<TradeSignal> {
    if prev_close <= 0.0 {
        return None;
    }
    let change = (snap.close - prev_close) / prev_close * 100.0;

    if change >= rules.long_change_pct
        && snap.ema50 > snap.ema200
        && snap.rsi > rules.rsi_midline
        && snap.macd > snap.macd_signal
    {
        let tp = round6(snap.close * rules.long_take_profit);
        let sl = round6(snap.close * rules.long_stop_loss);
        Some(build_signal(symbol, Direction::Long, snap.close, tp, sl))
    } else if change <= rules.short_change_pct
        && snap.ema50 < snap.ema200
        && snap.rsi < rules.rsi_midline
        && snap.macd < snap.macd_signal
    {
        let tp = round6(snap.close * rules.short_take_profit);
        let sl = round6(snap.close * rules.short_stop_loss);
        Some(build_signal(symbol, Direction::Short, snap.close, tp, sl))
    } else {
        None
    }
}

fn build_signal(
    symbol: &str,
    direction: Direction,
    entry: f64,
    take_profit: f64,
    stop_loss: f64,
) -> TradeSignal {
    let arrow = match direction {
        Direction::Long => "📈",
        Direction::Short => "📉",
    };
    let message = format!(
        "{arrow} {direction} Signal\n📊 {symbol}\n📅 Entry: ${entry:.6}\n🌟 TP: ${take_profit}\n📛 SL: ${stop_loss}"
    );
    TradeSignal {
        symbol: symbol.to_string(),
        direction,
        entry_price: entry,
        take_profit,
        stop_loss,
        message,
    }
}

/// Round to 6 decimal places — the precision quoted in signal messages.
pub fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}
