use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{watch, RwLock};
use tracing::{debug, error, info, warn};

use common::{MarketData, Notifier, Result, SymbolList, TradeSignal};
use narrative::NarrativeGenerator;
use news::NewsScreener;
use strategy::{SignalRules, SIGNAL_WINDOW};

use crate::clock::Clock;

/// Candle timeframe requested from the exchange.
pub const TIMEFRAME: &str = "15min";

/// Drives the periodic sweep over the symbol list.
///
/// Each cycle fetches candles and classifies every symbol in order; only when
/// a signal fires does it screen news and request a narrative before sending
/// one composed notification. Every external failure is absorbed for the
/// symbol and cycle it occurred in — nothing escapes the loop.
pub struct Scheduler {
    market: Arc<dyn MarketData>,
    screener: NewsScreener,
    narrator: NarrativeGenerator,
    notifier: Arc<dyn Notifier>,
    symbols: SymbolList,
    rules: SignalRules,
    interval: Duration,
    clock: Arc<dyn Clock>,
    shutdown: watch::Receiver<bool>,
    last_sweep: Arc<RwLock<Option<DateTime<Utc>>>>,
}

impl Scheduler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        market: Arc<dyn MarketData>,
        screener: NewsScreener,
        narrator: NarrativeGenerator,
        notifier: Arc<dyn Notifier>,
        symbols: SymbolList,
        rules: SignalRules,
        interval: Duration,
        clock: Arc<dyn Clock>,
        shutdown: watch::Receiver<bool>,
        last_sweep: Arc<RwLock<Option<DateTime<Utc>>>>,
    ) -> Self {
        Self {
            market,
            screener,
            narrator,
            notifier,
            symbols,
            rules,
            interval,
            clock,
            shutdown,
            last_sweep,
        }
    }

    /// Run the sweep loop until the shutdown channel flips. Call from
    /// `tokio::spawn`.
    pub async fn run(mut self) {
        info!(
            symbols = self.symbols.len(),
            interval_secs = self.interval.as_secs(),
            "Scheduler running"
        );
        loop {
            self.sweep().await;
            *self.last_sweep.write().await = Some(Utc::now());
            debug!("Sweep complete — waiting for next cycle");

            tokio::select! {
                _ = self.clock.sleep(self.interval) => {}
                changed = self.shutdown.changed() => {
                    match changed {
                        Ok(()) if *self.shutdown.borrow() => {
                            info!("Shutdown signal received — scheduler stopping");
                            return;
                        }
                        Ok(()) => {}
                        Err(_) => {
                            warn!("Shutdown channel closed — scheduler stopping");
                            return;
                        }
                    }
                }
            }
        }
    }

    /// One pass over the symbol list. Failures never stop the pass.
    pub async fn sweep(&self) {
        info!(symbols = self.symbols.len(), "Scanning symbols for signals");
        for symbol in self.symbols.iter() {
            match self.evaluate(symbol).await {
                Ok(Some(signal)) => self.dispatch(symbol, signal).await,
                Ok(None) => {}
                Err(e) => {
                    warn!(symbol, error = %e, "Evaluation failed — symbol skipped this cycle")
                }
            }
        }
    }

    async fn evaluate(&self, symbol: &str) -> Result<Option<TradeSignal>> {
        let candles = self.market.candles(symbol, TIMEFRAME, SIGNAL_WINDOW).await?;
        strategy::classify(symbol, &candles, &self.rules)
    }

    /// Enrich a fired signal with news keywords and a narrative, then send
    /// the composed notification. A failed send is logged and dropped; the
    /// signal is simply regenerated next cycle if conditions still hold.
    async fn dispatch(&self, symbol: &str, signal: TradeSignal) {
        info!(
            symbol,
            direction = %signal.direction,
            entry = signal.entry_price,
            "Signal fired"
        );

        let keywords = self.screener.screen(symbol).await;
        let warning = if keywords.is_empty() {
            String::new()
        } else {
            format!(
                "\n\n⚠️ Warning: news found with keywords: {}",
                keywords.join(", ")
            )
        };

        let strategy_text = self.narrator.describe(symbol, signal.direction).await;
        let text = format!("{}{warning}\n\n📊 AI Strategy:\n{strategy_text}", signal.message);

        if let Err(e) = self.notifier.notify(&text).await {
            error!(symbol, error = %e, "Failed to send signal notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use tokio::sync::Mutex;

    use common::{Article, Candle, Error, NewsProvider, TextGenerator};

    use crate::clock::TokioClock;

    fn candle(i: usize, close: f64, volume: f64) -> Candle {
        Candle {
            timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64 * 900, 0).unwrap(),
            open: close,
            high: close * 1.002,
            low: close * 0.998,
            close,
            volume,
        }
    }

    /// Uptrend ending in a +3% jump — fires a LONG under default rules.
    fn surging_window(n: usize) -> Vec<Candle> {
        let mut candles: Vec<Candle> = (0..n - 1)
            .map(|i| candle(i, 100.0 + i as f64 * 0.5, 20_000.0))
            .collect();
        let prev = candles.last().unwrap().close;
        candles.push(candle(n - 1, prev * 1.03, 20_000.0));
        candles
    }

    struct SurgingMarket;

    #[async_trait]
    impl MarketData for SurgingMarket {
        async fn candles(&self, _s: &str, _tf: &str, limit: usize) -> Result<Vec<Candle>> {
            Ok(surging_window(limit.min(60)))
        }
    }

    struct FlatMarket;

    #[async_trait]
    impl MarketData for FlatMarket {
        async fn candles(&self, _s: &str, _tf: &str, limit: usize) -> Result<Vec<Candle>> {
            Ok((0..limit.min(60)).map(|i| candle(i, 100.0, 20_000.0)).collect())
        }
    }

    struct DownMarket;

    #[async_trait]
    impl MarketData for DownMarket {
        async fn candles(&self, _s: &str, _tf: &str, _limit: usize) -> Result<Vec<Candle>> {
            Err(Error::Exchange("gateway timeout".into()))
        }
    }

    struct AlarmingNews;

    #[async_trait]
    impl NewsProvider for AlarmingNews {
        async fn search(&self, _query: &str) -> Result<Vec<Article>> {
            Ok(vec![Article {
                title: "Exchange hack under investigation".into(),
                description: String::new(),
            }])
        }
    }

    struct CannedGenerator;

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Ok("Ride the breakout with a tight stop.".into())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, text: &str) -> Result<()> {
            self.sent.lock().await.push(text.to_string());
            Ok(())
        }
    }

    fn scheduler_with(
        market: Arc<dyn MarketData>,
        notifier: Arc<RecordingNotifier>,
        shutdown: watch::Receiver<bool>,
    ) -> Scheduler {
        Scheduler::new(
            market.clone(),
            NewsScreener::new(Some(Arc::new(AlarmingNews))),
            NarrativeGenerator::new(Some(Arc::new(CannedGenerator)), market),
            notifier,
            SymbolList::parse("SOL/USDT\n"),
            SignalRules::default(),
            Duration::from_secs(900),
            Arc::new(TokioClock),
            shutdown,
            Arc::new(RwLock::new(None)),
        )
    }

    #[tokio::test]
    async fn sweep_sends_one_composed_notification_per_fired_signal() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (_tx, rx) = watch::channel(false);
        let scheduler = scheduler_with(Arc::new(SurgingMarket), notifier.clone(), rx);

        scheduler.sweep().await;

        let sent = notifier.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("LONG Signal"));
        assert!(sent[0].contains("SOL/USDT"));
        assert!(sent[0].contains("⚠️ Warning: news found with keywords: hack"));
        assert!(sent[0].contains("📊 AI Strategy:\nRide the breakout with a tight stop."));
    }

    #[tokio::test]
    async fn sweep_stays_quiet_when_no_signal_fires() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (_tx, rx) = watch::channel(false);
        let scheduler = scheduler_with(Arc::new(FlatMarket), notifier.clone(), rx);

        scheduler.sweep().await;

        assert!(notifier.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn sweep_absorbs_exchange_failures() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (_tx, rx) = watch::channel(false);
        let scheduler = scheduler_with(Arc::new(DownMarket), notifier.clone(), rx);

        scheduler.sweep().await;

        assert!(notifier.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn run_stops_when_shutdown_is_signalled() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (tx, rx) = watch::channel(false);
        let scheduler = scheduler_with(Arc::new(FlatMarket), notifier, rx);

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(5), scheduler.run())
            .await
            .expect("scheduler did not honor shutdown");
    }
}
