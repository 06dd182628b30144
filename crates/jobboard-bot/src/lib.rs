//! Conversation engine for the job board bot.
//!
//! Incoming text is decoded into an [`Intent`](intent::Intent), interpreted
//! by the [`Dialog`] state machine against the chat's [`DialogState`], and
//! the resulting actions are delivered through a
//! [`Transport`](jobboard_telegram::Transport). [`Bot`] ties these together
//! with the in-memory [`SessionStore`]; [`Runner`] feeds it from Telegram's
//! long-polling API.

pub mod admin;
pub mod bot;
pub mod config;
pub mod dialog;
pub mod error;
pub mod intent;
pub mod keyboards;
pub mod listing;
pub mod messages;
pub mod runner;
pub mod session;
pub mod state;
pub mod vocab;

pub use admin::{AdminGate, Statistics};
pub use bot::Bot;
pub use config::BotConfig;
pub use dialog::{Dialog, Outcome, Transition};
pub use error::{BotError, Result};
pub use runner::Runner;
pub use session::SessionStore;
pub use state::DialogState;
