//! Long-polling loop.
//!
//! Pulls updates from Telegram, feeds them to the [`Bot`] one at a time and
//! persists the next offset after each update so a restart resumes where it
//! left off.

use std::time::Duration;

use jobboard_store::BotStateStore;
use jobboard_telegram::TelegramClient;
use tracing::{debug, error, info, warn};

use crate::bot::Bot;
use crate::error::Result;

/// Back-off after a failed `getUpdates` call.
const RETRY_DELAY: Duration = Duration::from_secs(5);

pub struct Runner {
    bot: Bot,
    client: TelegramClient,
    state: BotStateStore,
    poll_timeout: u64,
}

impl Runner {
    pub fn new(bot: Bot, client: TelegramClient, state: BotStateStore, poll_timeout: u64) -> Self {
        Self {
            bot,
            client,
            state,
            poll_timeout,
        }
    }

    /// Poll until `shutdown` resolves.
    pub async fn run(&self, shutdown: impl std::future::Future<Output = ()>) -> Result<()> {
        let mut offset = self.state.polling_offset().await?;
        info!(offset, poll_timeout = self.poll_timeout, "polling for updates");

        tokio::pin!(shutdown);
        loop {
            let updates = tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping poll loop");
                    return Ok(());
                }
                result = self.client.get_updates(offset, self.poll_timeout) => result,
            };

            let updates = match updates {
                Ok(updates) => updates,
                Err(e) => {
                    warn!(error = %e, "Telegram poll failed, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                    continue;
                }
            };

            for update in updates {
                offset = offset.max(update.update_id + 1);

                if let Some(event) = update.event {
                    match self.bot.handle(&event).await {
                        Ok(outcome) => debug!(update_id = update.update_id, ?outcome, "update handled"),
                        Err(e) => error!(update_id = update.update_id, error = %e, "failed to handle update"),
                    }
                }

                if let Err(e) = self.state.set_polling_offset(offset).await {
                    warn!(error = %e, "failed to persist polling offset");
                }
            }
        }
    }
}
