//! The seam between the conversation engine and a messaging service.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Keyboard, Outbound};

/// Operations the bot needs from a messaging service.
///
/// Delivery retries and rate limits are the implementor's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_text(&self, chat_id: i64, text: &str, keyboard: Option<&Keyboard>) -> Result<()>;

    async fn send_animation(
        &self,
        chat_id: i64,
        animation: &str,
        caption: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()>;

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()>;

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<()>;

    /// Perform one [`Outbound`] action.
    async fn deliver(&self, action: &Outbound) -> Result<()> {
        match action {
            Outbound::Text {
                chat_id,
                text,
                keyboard,
            } => self.send_text(*chat_id, text, keyboard.as_ref()).await,
            Outbound::Animation {
                chat_id,
                animation,
                caption,
                keyboard,
            } => {
                self.send_animation(*chat_id, animation, caption, keyboard.as_ref())
                    .await
            }
            Outbound::AnswerCallback { callback_id, text } => {
                self.answer_callback(callback_id, text.as_deref()).await
            }
            Outbound::DeleteMessage {
                chat_id,
                message_id,
            } => self.delete_message(*chat_id, *message_id).await,
        }
    }
}
