//! Plain-text delivery to a single Telegram chat.

use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::{error, info};

use reviewbot_core::Config;

/// Sends plain-text notifications to one fixed chat.
pub struct StatusNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl StatusNotifier {
    /// Build a notifier from the startup configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            bot: Bot::new(config.telegram_token.clone()),
            chat_id: ChatId(config.telegram_chat_id),
        }
    }

    /// Deliver one message, reporting the outcome through the return value.
    ///
    /// A failed send is logged with its cause and answered with `false`;
    /// it never propagates to the caller.
    pub async fn deliver(&self, text: &str) -> bool {
        match self.bot.send_message(self.chat_id, text).await {
            Ok(_) => {
                info!(chat_id = self.chat_id.0, text, "notification delivered");
                true
            }
            Err(e) => {
                error!(
                    chat_id = self.chat_id.0,
                    text,
                    error = %e,
                    "failed to deliver notification"
                );
                false
            }
        }
    }
}
