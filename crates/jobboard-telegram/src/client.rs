//! Telegram Bot API client.
//!
//! Every call is a JSON `POST` to `https://api.telegram.org/bot<token>/<method>`.
//! Responses are checked for `"ok": true` before the `result` field is
//! handed back to the caller.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, instrument};

use crate::error::{Result, TransportError};
use crate::transport::Transport;
use crate::types::Keyboard;
use crate::update::{Update, decode_update};

/// Base URL for the Telegram Bot API.
const TELEGRAM_API_BASE: &str = "https://api.telegram.org/bot";

/// Slack added on top of the long-poll timeout before the HTTP request
/// itself gives up.
const POLL_GRACE: Duration = Duration::from_secs(10);

/// HTTP client bound to one bot token.
#[derive(Clone)]
pub struct TelegramClient {
    token: String,
    http: reqwest::Client,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("jobboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            token: token.into(),
            http,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{TELEGRAM_API_BASE}{}/{method}", self.token)
    }

    /// Check a Bot API response envelope and extract its `result`.
    pub fn parse_response(response: Value, method: &'static str) -> Result<Value> {
        let ok = response
            .get("ok")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        if !ok {
            let code = response
                .get("error_code")
                .and_then(|v| v.as_i64())
                .unwrap_or(-1);
            let description = response
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown error")
                .to_string();
            return Err(TransportError::Api {
                method,
                code,
                description,
            });
        }

        match response {
            Value::Object(mut map) => Ok(map.remove("result").unwrap_or(Value::Null)),
            _ => Ok(Value::Null),
        }
    }

    async fn call_with_timeout(
        &self,
        method: &'static str,
        body: Value,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        let mut request = self.http.post(self.api_url(method)).json(&body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response: Value = request
            .send()
            .await
            .map_err(|source| TransportError::Http { method, source })?
            .json()
            .await
            .map_err(|source| TransportError::Http { method, source })?;

        Self::parse_response(response, method)
    }

    /// Invoke a Bot API method with a JSON body.
    pub async fn call(&self, method: &'static str, body: Value) -> Result<Value> {
        self.call_with_timeout(method, body, None).await
    }

    /// Verify the token and return the bot's username.
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<String> {
        let me = self.call("getMe", json!({})).await?;
        me.get("username")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| TransportError::Decode {
                method: "getMe",
                reason: "missing `username`".into(),
            })
    }

    /// Long-poll for updates starting at `offset`.
    ///
    /// Entries that cannot be decoded at all (no `update_id`) are skipped.
    #[instrument(skip(self))]
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>> {
        let result = self
            .call_with_timeout(
                "getUpdates",
                json!({
                    "offset": offset,
                    "timeout": timeout_secs,
                    "allowed_updates": ["message", "callback_query"],
                }),
                Some(Duration::from_secs(timeout_secs) + POLL_GRACE),
            )
            .await?;

        let raw = result.as_array().ok_or_else(|| TransportError::Decode {
            method: "getUpdates",
            reason: "`result` is not an array".into(),
        })?;

        let updates: Vec<Update> = raw.iter().filter_map(decode_update).collect();
        debug!(count = updates.len(), "received updates");
        Ok(updates)
    }
}

fn with_markup(mut body: Value, keyboard: Option<&Keyboard>) -> Value {
    if let (Some(keyboard), Value::Object(map)) = (keyboard, &mut body) {
        map.insert("reply_markup".into(), keyboard.to_reply_markup());
    }
    body
}

#[async_trait]
impl Transport for TelegramClient {
    async fn send_text(&self, chat_id: i64, text: &str, keyboard: Option<&Keyboard>) -> Result<()> {
        let body = with_markup(json!({ "chat_id": chat_id, "text": text }), keyboard);
        self.call("sendMessage", body).await?;
        Ok(())
    }

    async fn send_animation(
        &self,
        chat_id: i64,
        animation: &str,
        caption: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<()> {
        let body = with_markup(
            json!({ "chat_id": chat_id, "animation": animation, "caption": caption }),
            keyboard,
        );
        self.call("sendAnimation", body).await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let mut body = json!({ "callback_query_id": callback_id });
        if let (Some(text), Value::Object(map)) = (text, &mut body) {
            map.insert("text".into(), json!(text));
        }
        self.call("answerCallbackQuery", body).await?;
        Ok(())
    }

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> Result<()> {
        self.call(
            "deleteMessage",
            json!({ "chat_id": chat_id, "message_id": message_id }),
        )
        .await?;
        Ok(())
    }
}
