use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::debug;

use common::{Error, Notifier, Result};

/// Sends composed signal messages to the configured chat.
///
/// `Bot` is a cheaply cloneable handle over a shared connection pool, so the
/// notifier and the command dispatcher can send concurrently without extra
/// locking.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat_id: i64) -> Self {
        Self {
            bot,
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .map_err(|e| Error::Messaging(e.to_string()))?;
        debug!(chat_id = self.chat_id.0, "Notification sent");
        Ok(())
    }
}
