//! Transport-neutral message types.
//!
//! Inbound events are what the bot reacts to; [`Outbound`] actions are what
//! it asks the transport to do. Keyboards serialize to the Bot API
//! `reply_markup` JSON via [`Keyboard::to_reply_markup`].

use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Inbound
// ---------------------------------------------------------------------------

/// The person behind an inbound event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// One event delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A text message typed or picked from a reply keyboard.
    Message {
        chat_id: i64,
        sender: Sender,
        text: String,
    },
    /// A press on an inline keyboard button.
    Callback {
        callback_id: String,
        chat_id: i64,
        /// The message carrying the pressed button.
        message_id: i64,
        sender: Sender,
        data: String,
    },
}

impl InboundEvent {
    pub fn chat_id(&self) -> i64 {
        match self {
            Self::Message { chat_id, .. } | Self::Callback { chat_id, .. } => *chat_id,
        }
    }
}

// ---------------------------------------------------------------------------
// Keyboards
// ---------------------------------------------------------------------------

/// What an inline button does when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineAction {
    /// Send an opaque payload back as a callback event.
    Callback(String),
    /// Open a URL.
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub text: String,
    pub action: InlineAction,
}

impl InlineButton {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: InlineAction::Callback(data.into()),
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: InlineAction::Url(url.into()),
        }
    }
}

/// A keyboard attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Persistent keyboard whose buttons send their label as text.
    Reply(Vec<Vec<String>>),
    /// Buttons attached to one message.
    Inline(Vec<Vec<InlineButton>>),
}

impl Keyboard {
    /// Build a reply keyboard from rows of labels.
    pub fn reply<R, L>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self::Reply(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Every label on a reply keyboard, or every button text on an inline one.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Self::Reply(rows) => rows.iter().flatten().map(String::as_str).collect(),
            Self::Inline(rows) => rows.iter().flatten().map(|b| b.text.as_str()).collect(),
        }
    }

    /// Render as the Bot API `reply_markup` object.
    pub fn to_reply_markup(&self) -> Value {
        match self {
            Self::Reply(rows) => {
                let keyboard: Vec<Vec<Value>> = rows
                    .iter()
                    .map(|row| row.iter().map(|label| json!({ "text": label })).collect())
                    .collect();
                json!({ "keyboard": keyboard, "resize_keyboard": true })
            }
            Self::Inline(rows) => {
                let keyboard: Vec<Vec<Value>> = rows
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|button| match &button.action {
                                InlineAction::Callback(data) => {
                                    json!({ "text": button.text, "callback_data": data })
                                }
                                InlineAction::Url(url) => json!({ "text": button.text, "url": url }),
                            })
                            .collect()
                    })
                    .collect();
                json!({ "inline_keyboard": keyboard })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Outbound
// ---------------------------------------------------------------------------

/// One action the bot asks the transport to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Text {
        chat_id: i64,
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// An animation (GIF) with a caption.
    Animation {
        chat_id: i64,
        animation: String,
        caption: String,
        keyboard: Option<Keyboard>,
    },
    /// Acknowledge a button press, optionally with a toast.
    AnswerCallback {
        callback_id: String,
        text: Option<String>,
    },
    DeleteMessage { chat_id: i64, message_id: i64 },
}

impl Outbound {
    pub fn text(chat_id: i64, text: impl Into<String>) -> Self {
        Self::Text {
            chat_id,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn text_with(chat_id: i64, text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self::Text {
            chat_id,
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }

    /// The visible text of a message or animation caption.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Animation { caption, .. } => Some(caption),
            Self::AnswerCallback { text, .. } => text.as_deref(),
            Self::DeleteMessage { .. } => None,
        }
    }

    pub fn keyboard(&self) -> Option<&Keyboard> {
        match self {
            Self::Text { keyboard, .. } | Self::Animation { keyboard, .. } => keyboard.as_ref(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
