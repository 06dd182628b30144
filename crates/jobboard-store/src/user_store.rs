//! Persistence for people who have started the bot.
//!
//! Users are keyed by their Telegram identity. Every `/start` upserts the
//! row: name fields and `last_seen_at` are overwritten, `joined_at` keeps the
//! timestamp of the very first start. Rows are never deleted.

use chrono::{Duration, Utc};
use tracing::{debug, instrument};

use crate::db::Database;
use crate::error::{StoreError, StoreResult};

// ═══════════════════════════════════════════════════════════════════════
//  Types
// ═══════════════════════════════════════════════════════════════════════

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// External identity (Telegram user id).
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Unix timestamp of the first `/start`.
    pub joined_at: i64,
    /// Unix timestamp of the latest `/start`.
    pub last_seen_at: i64,
}

/// Name fields reported by the transport for the sender of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════
//  UserStore
// ═══════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UserStore {
    db: Database,
}

impl UserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert the user or refresh their name fields.
    ///
    /// Repeated calls for the same id never create a second row.
    #[instrument(skip(self, profile), fields(user_id = profile.id))]
    pub async fn upsert(&self, profile: &UserProfile) -> StoreResult<()> {
        let profile = profile.clone();
        let now = Utc::now().timestamp();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO users (user_id, username, first_name, last_name, joined_at, last_seen_at) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?5) \
                     ON CONFLICT(user_id) DO UPDATE SET \
                         username = excluded.username, \
                         first_name = excluded.first_name, \
                         last_name = excluded.last_name, \
                         last_seen_at = excluded.last_seen_at",
                    rusqlite::params![
                        profile.id,
                        profile.username,
                        profile.first_name,
                        profile.last_name,
                        now
                    ],
                )?;
                debug!(user_id = profile.id, "user upserted");
                Ok(())
            })
            .await
    }

    /// Fetch a user by id, returning `None` if they never started the bot.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> StoreResult<Option<User>> {
        self.db
            .execute(move |conn| {
                let result = conn.query_row(
                    "SELECT user_id, username, first_name, last_name, joined_at, last_seen_at \
                     FROM users WHERE user_id = ?1",
                    rusqlite::params![id],
                    |row| {
                        Ok(User {
                            id: row.get(0)?,
                            username: row.get(1)?,
                            first_name: row.get(2)?,
                            last_name: row.get(3)?,
                            joined_at: row.get(4)?,
                            last_seen_at: row.get(5)?,
                        })
                    },
                );
                match result {
                    Ok(user) => Ok(Some(user)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(StoreError::Sqlite(e)),
                }
            })
            .await
    }

    /// Total number of users.
    #[instrument(skip(self))]
    pub async fn count(&self) -> StoreResult<i64> {
        self.db
            .execute(|conn| {
                let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
    }

    /// Number of users whose first start falls within `window` of now.
    #[instrument(skip(self))]
    pub async fn count_joined_within(&self, window: Duration) -> StoreResult<i64> {
        if window < Duration::zero() {
            return Err(StoreError::InvalidArgument(
                "window must not be negative".into(),
            ));
        }
        let since = Utc::now().timestamp() - window.num_seconds();
        self.db
            .execute(move |conn| {
                let count: i64 = conn.query_row(
                    "SELECT COUNT(*) FROM users WHERE joined_at >= ?1",
                    rusqlite::params![since],
                    |row| row.get(0),
                )?;
                Ok(count)
            })
            .await
    }
}

// ── tests ────────────────────────────────────────────────────────────
