//! Transport error types.

/// Errors raised while talking to the Telegram Bot API.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("http error calling `{method}`: {source}")]
    Http {
        method: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Telegram answered with `"ok": false`.
    #[error("Telegram API error in `{method}` (code {code}): {description}")]
    Api {
        method: &'static str,
        code: i64,
        description: String,
    },

    /// A response did not have the expected shape.
    #[error("unexpected response from `{method}`: {reason}")]
    Decode { method: &'static str, reason: String },
}

/// Convenience alias used throughout the transport crate.
pub type Result<T> = std::result::Result<T, TransportError>;
