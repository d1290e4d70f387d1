use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use common::{Candle, Error, MarketData, Result};

const BASE_URL: &str = "https://api.kucoin.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for KuCoin spot market data.
///
/// Candle endpoints are public; no credentials are required.
pub struct KucoinClient {
    http: Client,
    base_url: String,
}

impl KucoinClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .use_rustls_tls()
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }
}

impl Default for KucoinClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketData for KucoinClient {
    async fn candles(&self, symbol: &str, timeframe: &str, limit: usize) -> Result<Vec<Candle>> {
        let url = format!("{}/api/v1/market/candles", self.base_url);
        let kucoin_symbol = to_kucoin_symbol(symbol);

        let resp = self
            .http
            .get(&url)
            .query(&[("type", timeframe), ("symbol", kucoin_symbol.as_str())])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Exchange(format!("HTTP {status}: {body}")));
        }

        let candles = parse_klines(&body, limit)?;
        debug!(symbol, timeframe, count = candles.len(), "Fetched candles");
        Ok(candles)
    }
}

/// KuCoin quotes pairs as `BASE-QUOTE`; the symbol list uses `BASE/QUOTE`.
fn to_kucoin_symbol(symbol: &str) -> String {
    symbol.replace('/', "-")
}

/// Parse a klines response body into candles ordered oldest-first.
///
/// KuCoin returns candles newest-first, each as a string tuple:
/// `[time, open, close, high, low, volume, turnover]`.
fn parse_klines(body: &str, limit: usize) -> Result<Vec<Candle>> {
    let resp: KlinesResponse = serde_json::from_str(body)?;
    if resp.code != "200000" {
        return Err(Error::Exchange(format!(
            "KuCoin error {}: {}",
            resp.code,
            resp.msg.unwrap_or_default()
        )));
    }

    let mut candles = resp
        .data
        .iter()
        .take(limit)
        .map(parse_row)
        .collect::<Result<Vec<Candle>>>()?;
    candles.reverse();
    Ok(candles)
}

fn parse_row(row: &KlineRow) -> Result<Candle> {
    let (time, open, close, high, low, volume, _turnover) = row;

    let secs = time
        .parse::<i64>()
        .map_err(|_| Error::Exchange(format!("malformed kline timestamp '{time}'")))?;
    let timestamp = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::Exchange(format!("kline timestamp out of range: {secs}")))?;

    let field = |name: &str, raw: &str| {
        raw.parse::<f64>()
            .map_err(|_| Error::Exchange(format!("malformed kline {name} '{raw}'")))
    };

    Ok(Candle {
        timestamp,
        open: field("open", open)?,
        high: field("high", high)?,
        low: field("low", low)?,
        close: field("close", close)?,
        volume: field("volume", volume)?,
    })
}

// ─── Response types ───────────────────────────────────────────────────────────

type KlineRow = (String, String, String, String, String, String, String);

#[derive(Deserialize)]
struct KlinesResponse {
    code: String,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    data: Vec<KlineRow>,
}
