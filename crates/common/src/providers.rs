use async_trait::async_trait;

use crate::{Article, Candle, Result};

/// Abstraction over the market data source.
///
/// `KucoinClient` implements this for the live exchange; tests inject fixture
/// implementations. Candles are returned oldest-first.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch up to `limit` most recent candles for `symbol` (`BASE/QUOTE`)
    /// at the given timeframe (e.g. "15min").
    async fn candles(&self, symbol: &str, timeframe: &str, limit: usize) -> Result<Vec<Candle>>;
}

/// Abstraction over the news search endpoint.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Search recent articles mentioning `query`.
    async fn search(&self, query: &str) -> Result<Vec<Article>>;
}

/// Abstraction over the text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Request a completion for `prompt` and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Abstraction over the outbound messaging channel.
///
/// The scheduler and the command handler may send concurrently; implementors
/// must tolerate shared use without external locking.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<()>;
}
