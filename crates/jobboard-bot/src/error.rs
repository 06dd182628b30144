//! Error types for the conversation engine.

use jobboard_store::StoreError;
use jobboard_telegram::TransportError;

/// Errors surfaced by the bot crate.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// A store operation failed; the event that triggered it is abandoned.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Talking to Telegram failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
