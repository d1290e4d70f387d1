/// How the Telegram bot receives inbound updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotMode {
    Polling,
    Webhook,
}

impl std::fmt::Display for BotMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotMode::Polling => write!(f, "polling"),
            BotMode::Webhook => write!(f, "webhook"),
        }
    }
}

/// All configuration loaded from environment variables at startup.
/// Missing required variables cause an immediate panic with a clear message.
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub telegram_token: String,
    pub telegram_chat_id: i64,
    pub bot_mode: BotMode,
    /// Externally-reachable hostname. Required when `bot_mode` is webhook.
    pub webhook_host: Option<String>,
    pub webhook_port: u16,

    // External API keys — optional; the components degrade without them
    pub newsapi_key: Option<String>,
    pub openrouter_api_key: Option<String>,

    // Symbol list
    pub symbols_file: String,

    // Keep-alive HTTP server
    pub port: u16,

    // Scheduler
    pub sweep_interval_secs: u64,

    // Optional classifier rules override (TOML)
    pub signal_rules_path: Option<String>,
}

impl Config {
    /// Load all configuration from environment variables.
    /// Loads `.env` if present. Panics on any missing required variable.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present

        let bot_mode = match optional_env("BOT_MODE").as_deref().unwrap_or("polling") {
            "polling" => BotMode::Polling,
            "webhook" => BotMode::Webhook,
            other => panic!("ERROR: BOT_MODE must be 'polling' or 'webhook', got: '{other}'"),
        };

        let webhook_host = optional_env("WEBHOOK_HOST");
        if bot_mode == BotMode::Webhook && webhook_host.is_none() {
            panic!("WEBHOOK_HOST is required when BOT_MODE=webhook");
        }

        let telegram_chat_id = required_env("TELEGRAM_CHAT_ID")
            .parse::<i64>()
            .unwrap_or_else(|_| panic!("TELEGRAM_CHAT_ID must be a numeric chat id"));

        Config {
            telegram_token: required_env("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id,
            bot_mode,
            webhook_host,
            webhook_port: optional_env("WEBHOOK_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8443),
            newsapi_key: optional_env("NEWSAPI_KEY"),
            openrouter_api_key: optional_env("OPENROUTER_API_KEY"),
            symbols_file: optional_env("SYMBOLS_FILE").unwrap_or_else(|| "symbols.txt".to_string()),
            port: optional_env("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            sweep_interval_secs: optional_env("SWEEP_INTERVAL_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(900),
            signal_rules_path: optional_env("SIGNAL_RULES_PATH"),
        }
    }
}

fn required_env(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        panic!("Required environment variable '{key}' is not set. Check your .env file.")
    })
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
