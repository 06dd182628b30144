//! # jobboard-store
//!
//! SQLite persistence for the job board bot.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  UserStore   (users: upsert, counts)    │
//! │  JobStore    (jobs: CRUD, grouping)     │
//! │  BotStateStore (polling offset)         │
//! ├─────────────────────────────────────────┤
//! │  Database (rusqlite WAL, blocking pool) │
//! │  Migrations (versioned, idempotent)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```ignore
//! use jobboard_store::{Database, JobStore, NewJob};
//!
//! let db = Database::open_and_migrate("data/jobboard.db").await?;
//! let jobs = JobStore::new(db.clone());
//! let id = jobs.insert(new_job).await?;
//! ```

pub mod bot_state;
pub mod db;
pub mod error;
pub mod job_store;
pub mod migration;
pub mod user_store;

// ── re-exports ───────────────────────────────────────────────────────

pub use bot_state::BotStateStore;
pub use db::Database;
pub use error::{StoreError, StoreResult};
pub use job_store::{CONTACT_SIGIL, Job, JobField, JobStore, LocationCount, NewJob};
pub use user_store::{User, UserProfile, UserStore};
