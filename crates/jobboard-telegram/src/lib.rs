//! Telegram transport for the job board bot.
//!
//! [`TelegramClient`] speaks the Bot API over HTTPS and implements the
//! [`Transport`] trait, the only thing the conversation engine depends on.
//! Updates are decoded into transport-neutral [`InboundEvent`]s.

pub mod client;
pub mod error;
pub mod transport;
pub mod types;
pub mod update;

pub use client::TelegramClient;
pub use error::{Result, TransportError};
pub use transport::Transport;
pub use types::{InboundEvent, InlineAction, InlineButton, Keyboard, Outbound, Sender};
pub use update::{Update, decode_update};
