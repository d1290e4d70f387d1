use std::sync::Arc;

use teloxide::{
    dispatching::UpdateHandler,
    error_handlers::LoggingErrorHandler,
    prelude::*,
    update_listeners::webhooks,
    utils::command::BotCommands,
};
use tracing::info;
use url::Url;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Dependencies injected into every handler via `dptree`.
#[derive(Clone)]
pub struct BotDeps {
    pub symbol_count: usize,
}

/// Telegram bot commands exposed to the operator.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "SignalBot commands:")]
pub enum Command {
    #[command(description = "Show whether the bot is alive")]
    Status,
}

/// Start the Telegram bot in long-polling mode.
pub async fn run_polling(bot: Bot, deps: BotDeps) {
    info!("Telegram bot starting (long-polling)");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![Arc::new(deps)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

/// Start the Telegram bot behind a webhook at `https://{host}/webhook`.
/// The listener binds locally on `port`; `host` must be externally reachable.
pub async fn run_webhook(bot: Bot, deps: BotDeps, host: &str, port: u16) {
    let addr = ([0, 0, 0, 0], port).into();
    let url: Url = format!("https://{host}/webhook")
        .parse()
        .unwrap_or_else(|e| panic!("Invalid webhook host '{host}': {e}"));

    info!(%url, port, "Telegram bot starting (webhook)");
    let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url))
        .await
        .unwrap_or_else(|e| panic!("Failed to register Telegram webhook: {e}"));

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![Arc::new(deps)])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;
}

fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Status].endpoint(handle_status));

    Update::filter_message().branch(command_handler)
}

async fn handle_status(bot: Bot, msg: Message, deps: Arc<BotDeps>) -> HandlerResult {
    let text = format!(
        "✅ Bot is active and running without errors.\nWatching {} pairs.",
        deps.symbol_count
    );
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}
