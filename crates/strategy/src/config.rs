use serde::{Deserialize, Serialize};

/// Classifier thresholds.
///
/// Defaults are the production rule set; an optional TOML file can override
/// individual fields:
/// ```toml
/// long_change_pct = 2.5
/// min_avg_volume = 25000.0
/// ```
/// The long and short move thresholds are deliberately asymmetric (a 2% move
/// opens a long, a 5% drop opens a short).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalRules {
    /// Minimum percent change (close vs previous close) to open a LONG.
    pub long_change_pct: f64,
    /// Maximum (negative) percent change to open a SHORT.
    pub short_change_pct: f64,
    /// RSI midline: LONG needs RSI above it, SHORT below.
    pub rsi_midline: f64,
    /// Take-profit and stop-loss multipliers applied to the entry close.
    pub long_take_profit: f64,
    pub long_stop_loss: f64,
    pub short_take_profit: f64,
    pub short_stop_loss: f64,
    /// Candles averaged for the volume floor gate.
    pub volume_lookback: usize,
    /// Minimum average volume; below the floor the symbol is skipped outright.
    pub min_avg_volume: f64,
}

impl Default for SignalRules {
    fn default() -> Self {
        Self {
            long_change_pct: 2.0,
            short_change_pct: -5.0,
            rsi_midline: 50.0,
            long_take_profit: 1.05,
            long_stop_loss: 0.98,
            short_take_profit: 0.95,
            short_stop_loss: 1.02,
            volume_lookback: 10,
            min_avg_volume: 10_000.0,
        }
    }
}

impl SignalRules {
    /// Load from a TOML file. Exits process on error — a present but broken
    /// rules file must not silently fall back to defaults.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read signal rules at '{path}': {e}"));
        toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse signal rules at '{path}': {e}"))
    }
}
