//! Decoding of raw `getUpdates` entries into [`InboundEvent`]s.

use serde_json::Value;

use crate::types::{InboundEvent, Sender};

/// One entry of a `getUpdates` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub update_id: i64,
    /// `None` for update kinds the bot does not handle (photos, edits, ...).
    pub event: Option<InboundEvent>,
}

/// Decode a single update object. Returns `None` if it has no `update_id`.
pub fn decode_update(raw: &Value) -> Option<Update> {
    let update_id = raw.get("update_id").and_then(Value::as_i64)?;

    let event = if let Some(cb) = raw.get("callback_query") {
        decode_callback(cb)
    } else if let Some(message) = raw.get("message") {
        decode_message(message)
    } else {
        None
    };

    Some(Update { update_id, event })
}

/// `None` when the object has no `from.id`; such events are not attributable.
fn decode_sender(from: Option<&Value>) -> Option<Sender> {
    let from = from?;
    let field = |name: &str| from.get(name).and_then(Value::as_str).map(str::to_owned);
    Some(Sender {
        id: from.get("id").and_then(Value::as_i64)?,
        username: field("username"),
        first_name: field("first_name"),
        last_name: field("last_name"),
    })
}

fn decode_message(message: &Value) -> Option<InboundEvent> {
    let text = message.get("text").and_then(Value::as_str)?;
    let chat_id = message.pointer("/chat/id").and_then(Value::as_i64)?;
    let sender = decode_sender(message.get("from"))?;
    Some(InboundEvent::Message {
        chat_id,
        sender,
        text: text.to_owned(),
    })
}

fn decode_callback(cb: &Value) -> Option<InboundEvent> {
    let callback_id = cb.get("id").and_then(Value::as_str)?;
    let chat_id = cb.pointer("/message/chat/id").and_then(Value::as_i64)?;
    let message_id = cb
        .pointer("/message/message_id")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let sender = decode_sender(cb.get("from"))?;
    Some(InboundEvent::Callback {
        callback_id: callback_id.to_owned(),
        chat_id,
        message_id,
        sender,
        data: cb
            .get("data")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
    })
}
