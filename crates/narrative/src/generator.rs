use std::sync::Arc;

use tracing::warn;

use common::{Direction, Error, IndicatorSnapshot, MarketData, Result, TextGenerator};
use strategy::{snapshot, NARRATIVE_WINDOW};

use crate::client::OpenRouterClient;

/// Static text returned whenever the narrative cannot be generated.
pub const FALLBACK: &str = "⚠️ Could not get a strategy from the AI.";

const TIMEFRAME: &str = "15min";

/// Turns a fired signal into a short free-text strategy description.
///
/// Fetches its own candle window — shorter than the classifier's — so the
/// quoted indicator values can differ visibly from the ones the signal fired
/// on. One completion request per fired signal, none otherwise.
pub struct NarrativeGenerator {
    generator: Option<Arc<dyn TextGenerator>>,
    market: Arc<dyn MarketData>,
}

impl NarrativeGenerator {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, market: Arc<dyn MarketData>) -> Self {
        Self { generator, market }
    }

    /// Build with the real OpenRouter client, or a disabled generator when no
    /// API key is configured.
    pub fn from_config(api_key: Option<String>, market: Arc<dyn MarketData>) -> Self {
        match api_key {
            Some(key) => Self::new(Some(Arc::new(OpenRouterClient::new(key))), market),
            None => Self::new(None, market),
        }
    }

    /// Produce the strategy text for a fired signal. Never fails the caller:
    /// every error path logs and yields the fallback string.
    pub async fn describe(&self, symbol: &str, direction: Direction) -> String {
        match self.try_describe(symbol, direction).await {
            Ok(text) => text,
            Err(e) => {
                warn!(symbol, error = %e, "Narrative generation failed — using fallback");
                FALLBACK.to_string()
            }
        }
    }

    async fn try_describe(&self, symbol: &str, direction: Direction) -> Result<String> {
        let generator = self
            .generator
            .as_ref()
            .ok_or_else(|| Error::Config("OPENROUTER_API_KEY not set".into()))?;

        let candles = self.market.candles(symbol, TIMEFRAME, NARRATIVE_WINDOW).await?;
        let snap = snapshot::compute(&candles)?;
        let prompt = compose_prompt(symbol, direction, &snap);
        generator.complete(&prompt).await
    }
}

/// Format the indicator snapshot into the completion prompt.
pub fn compose_prompt(symbol: &str, direction: Direction, snap: &IndicatorSnapshot) -> String {
    format!(
        "Analysis of {symbol} for a {direction} signal.\n\
         Price: {:.6}, EMA50: {:.6}, EMA200: {:.6}\n\
         RSI: {:.2}, MACD: {:.6}, MACD Signal: {:.6}\n\
         BB Upper: {:.6}, BB Lower: {:.6}, ATR: {:.6}\n\
         Volume: {:.2}.\n\
         Based on this data, write a short trading strategy (3 sentences at most).",
        snap.close,
        snap.ema50,
        snap.ema200,
        snap.rsi,
        snap.macd,
        snap.macd_signal,
        snap.bb_upper,
        snap.bb_lower,
        snap.atr,
        snap.volume,
    )
}
