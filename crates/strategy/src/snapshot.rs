use common::{Candle, Error, IndicatorSnapshot, Result};

use crate::indicators::{Atr, Bollinger, Ema, Macd, Rsi, VolumeSma};

/// Candles fetched for signal classification.
pub const SIGNAL_WINDOW: usize = 200;

/// Candles fetched for the narrative snapshot. Deliberately shorter than the
/// classification window, so narrative values can differ visibly from the
/// values the signal fired on.
pub const NARRATIVE_WINDOW: usize = 50;

/// Fewest closes the MACD signal line needs (slow 26 + signal 9). Windows
/// shorter than this are rejected as invalid input.
pub const MIN_CANDLES: usize = 35;

const EMA_FAST_WINDOW: usize = 50;
const EMA_SLOW_WINDOW: usize = 200;
const RSI_PERIOD: usize = 14;
const MACD_FAST: usize = 12;
const MACD_SLOW: usize = 26;
const MACD_SIGNAL: usize = 9;
const BB_WINDOW: usize = 20;
const BB_NUM_STD: f64 = 2.0;
const ATR_WINDOW: usize = 14;
const VOLUME_WINDOW: usize = 10;

/// Compute the full indicator snapshot over a candle window (oldest first).
///
/// Pure: no I/O, no retained state — calling twice on the same window yields
/// identical values. EMA windows longer than the input (the 50-candle
/// narrative window vs EMA200) degrade gracefully, as the trailing recursion
/// still produces a value.
pub fn compute(candles: &[Candle]) -> Result<IndicatorSnapshot> {
    if candles.is_empty() {
        return Err(Error::InvalidInput("empty candle window".into()));
    }
    if candles.len() < MIN_CANDLES {
        return Err(Error::InvalidInput(format!(
            "window of {} candles is shorter than the {MIN_CANDLES} required",
            candles.len()
        )));
    }
    if let Some(bad) = candles.iter().find(|c| !c.is_well_formed()) {
        return Err(Error::InvalidInput(format!(
            "malformed candle at {}",
            bad.timestamp
        )));
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let volumes: Vec<f64> = candles.iter().map(|c| c.volume).collect();
    let last = candles.last().expect("window verified non-empty");

    let macd = Macd::new(MACD_FAST, MACD_SLOW, MACD_SIGNAL)
        .compute(&closes)
        .ok_or_else(|| Error::InvalidInput("window too short for MACD".into()))?;
    let bb = Bollinger::new(BB_WINDOW, BB_NUM_STD)
        .compute(&closes)
        .ok_or_else(|| Error::InvalidInput("window too short for Bollinger Bands".into()))?;

    Ok(IndicatorSnapshot {
        close: last.close,
        volume: last.volume,
        ema50: Ema::new(EMA_FAST_WINDOW)
            .compute(&closes)
            .ok_or_else(|| Error::InvalidInput("window too short for EMA50".into()))?,
        ema200: Ema::new(EMA_SLOW_WINDOW)
            .compute(&closes)
            .ok_or_else(|| Error::InvalidInput("window too short for EMA200".into()))?,
        rsi: Rsi::new(RSI_PERIOD)
            .compute(&closes)
            .ok_or_else(|| Error::InvalidInput("window too short for RSI".into()))?,
        macd: macd.line,
        macd_signal: macd.signal,
        bb_upper: bb.upper,
        bb_lower: bb.lower,
        atr: Atr::new(ATR_WINDOW)
            .compute(candles)
            .ok_or_else(|| Error::InvalidInput("window too short for ATR".into()))?,
        avg_volume: VolumeSma::new(VOLUME_WINDOW)
            .compute(&volumes)
            .ok_or_else(|| Error::InvalidInput("no volume data".into()))?,
    })
}
