use std::sync::Arc;
use std::time::Duration;

use teloxide::Bot;
use tokio::sync::{watch, RwLock};
use tracing::info;
use tracing_subscriber::EnvFilter;

use common::{BotMode, Config, MarketData, Notifier, SymbolList};
use engine::{KucoinClient, Scheduler, TokioClock};
use narrative::NarrativeGenerator;
use news::NewsScreener;
use strategy::SignalRules;
use telegram_notify::{run_polling, run_webhook, BotDeps, TelegramNotifier};

#[tokio::main]
async fn main() {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    info!(mode = %cfg.bot_mode, "SignalBot starting");

    // ── Symbols & classifier rules ────────────────────────────────────────────
    let symbols = SymbolList::load(&cfg.symbols_file);
    info!(count = symbols.len(), file = %cfg.symbols_file, "Symbol list loaded");

    let rules = match &cfg.signal_rules_path {
        Some(path) => SignalRules::load(path),
        None => SignalRules::default(),
    };

    // ── External collaborators ────────────────────────────────────────────────
    let market: Arc<dyn MarketData> = Arc::new(KucoinClient::new());
    let screener = NewsScreener::from_config(cfg.newsapi_key.clone());
    let narrator = NarrativeGenerator::from_config(cfg.openrouter_api_key.clone(), market.clone());

    let bot = Bot::new(cfg.telegram_token.clone());
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(bot.clone(), cfg.telegram_chat_id));

    // ── Shared state ──────────────────────────────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let last_sweep = Arc::new(RwLock::new(None));

    // ── Scheduler ─────────────────────────────────────────────────────────────
    let scheduler = Scheduler::new(
        market,
        screener,
        narrator,
        notifier,
        symbols.clone(),
        rules,
        Duration::from_secs(cfg.sweep_interval_secs),
        Arc::new(TokioClock),
        shutdown_rx,
        last_sweep.clone(),
    );

    // ── Keep-alive server ─────────────────────────────────────────────────────
    let api_state = api::AppState {
        symbol_count: symbols.len(),
        bot_mode: cfg.bot_mode.to_string(),
        last_sweep: last_sweep.clone(),
    };

    // ── Spawn all tasks ───────────────────────────────────────────────────────
    tokio::spawn(scheduler.run());
    tokio::spawn(api::serve(api_state, cfg.port));

    let bot_deps = BotDeps {
        symbol_count: symbols.len(),
    };
    match cfg.bot_mode {
        BotMode::Polling => {
            tokio::spawn(async move { run_polling(bot, bot_deps).await });
        }
        BotMode::Webhook => {
            let host = cfg
                .webhook_host
                .clone()
                .unwrap_or_else(|| panic!("WEBHOOK_HOST is required when BOT_MODE=webhook"));
            let port = cfg.webhook_port;
            tokio::spawn(async move { run_webhook(bot, bot_deps, &host, port).await });
        }
    }

    info!("All subsystems started. Waiting for shutdown signal.");
    tokio::signal::ctrl_c().await.unwrap();
    let _ = shutdown_tx.send(true);
    info!("Shutdown signal received. Exiting.");
}
