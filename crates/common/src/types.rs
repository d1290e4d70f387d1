use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV candle from the exchange, oldest-first in any window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// A candle is well-formed when all fields are finite and the high/low
    /// bracket holds. Malformed candles invalidate the whole window.
    pub fn is_well_formed(&self) -> bool {
        let finite = [self.open, self.high, self.low, self.close, self.volume]
            .iter()
            .all(|v| v.is_finite());
        finite && self.high >= self.low && self.volume >= 0.0
    }
}

/// Indicator values derived from the last candle of a window.
/// Recomputed fully on every call — no state carries across windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub volume: f64,
    pub ema50: f64,
    pub ema200: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub bb_upper: f64,
    pub bb_lower: f64,
    pub atr: f64,
    /// Mean volume over the last 10 candles.
    pub avg_volume: f64,
}

/// Direction of a fired signal. A quiet symbol yields no `TradeSignal` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Long => write!(f, "LONG"),
            Direction::Short => write!(f, "SHORT"),
        }
    }
}

/// A directional trade signal for one symbol, produced per sweep cycle.
/// Ephemeral — composed into a notification and then dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSignal {
    pub symbol: String,
    pub direction: Direction,
    pub entry_price: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    /// Pre-formatted human-readable summary of the signal.
    pub message: String,
}

/// A news article as returned by the news provider.
/// Missing fields deserialize to empty strings so keyword scans never fail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
