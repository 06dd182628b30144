//! In-memory session store keyed by chat id.
//!
//! Backed by a [`moka`] cache: entries expire after an idle TTL and the map
//! is capped in size. Sessions are not persisted across restarts.

use std::time::Duration;

use moka::future::Cache;

use crate::state::DialogState;

pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);
pub const DEFAULT_CAPACITY: u64 = 10_000;

#[derive(Clone)]
pub struct SessionStore {
    inner: Cache<i64, DialogState>,
}

impl SessionStore {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(ttl)
            .build();
        Self { inner }
    }

    /// Current state of `chat_id`; unknown or expired chats are idle.
    pub async fn get(&self, chat_id: i64) -> DialogState {
        self.inner.get(&chat_id).await.unwrap_or_default()
    }

    pub async fn put(&self, chat_id: i64, state: DialogState) {
        self.inner.insert(chat_id, state).await;
    }

    pub async fn reset(&self, chat_id: i64) {
        self.inner.invalidate(&chat_id).await;
    }

    /// Approximate number of live sessions.
    pub async fn len(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}
