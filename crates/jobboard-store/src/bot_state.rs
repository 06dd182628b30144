//! Key-value store for bot-level state that must survive restarts.
//!
//! The only key the bot writes today is the Telegram polling offset, so a
//! restart resumes after the last processed update instead of replaying it.

use tracing::{debug, instrument};

use crate::db::Database;
use crate::error::StoreResult;

const POLLING_OFFSET_KEY: &str = "telegram_offset";

/// Persistent key-value store backed by the `bot_state` table.
#[derive(Clone)]
pub struct BotStateStore {
    db: Database,
}

impl BotStateStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a value by key, returning `None` if not found.
    #[instrument(skip(self))]
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let key = key.to_string();
        self.db
            .execute(move |conn| {
                match conn.query_row(
                    "SELECT value FROM bot_state WHERE key = ?1",
                    rusqlite::params![key],
                    |row| row.get(0),
                ) {
                    Ok(value) => Ok(Some(value)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(e.into()),
                }
            })
            .await
    }

    /// Insert or overwrite a value.
    #[instrument(skip(self, value))]
    pub async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let key = key.to_string();
        let value = value.to_string();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO bot_state (key, value) VALUES (?1, ?2) \
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    rusqlite::params![key, value],
                )?;
                debug!(key = %key, "bot state updated");
                Ok(())
            })
            .await
    }

    /// The next `getUpdates` offset, or 0 when nothing was processed yet.
    ///
    /// An unparseable stored value is treated as absent.
    pub async fn polling_offset(&self) -> StoreResult<i64> {
        let raw = self.get(POLLING_OFFSET_KEY).await?;
        Ok(raw.and_then(|v| v.parse().ok()).unwrap_or(0))
    }

    pub async fn set_polling_offset(&self, offset: i64) -> StoreResult<()> {
        self.set(POLLING_OFFSET_KEY, &offset.to_string()).await
    }
}

// ── tests ────────────────────────────────────────────────────────────
