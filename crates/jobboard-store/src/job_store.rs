//! Persistence for job postings.
//!
//! Jobs are created when an employer completes the posting form, edited
//! field by field by administrators, and deleted by administrators. Edits
//! overwrite in place; there is no history.

use chrono::Utc;
use tracing::{debug, instrument};

use crate::db::Database;
use crate::error::{StoreError, StoreResult};

/// Every contact handle starts with this sigil.
pub const CONTACT_SIGIL: char = '@';

// ═══════════════════════════════════════════════════════════════════════
//  Types
// ═══════════════════════════════════════════════════════════════════════

/// A stored job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Store-assigned identifier.
    pub id: i64,
    /// Chat id of the employer who posted it.
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    /// City label, one of the bot's fixed city set.
    pub location: String,
    /// Telegram handle including the leading `@`.
    pub contact: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

/// Fields for a job that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub employer_id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub contact: String,
}

/// The columns an administrator may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobField {
    Title,
    Description,
    Location,
    Contact,
}

impl JobField {
    pub const ALL: [JobField; 4] = [
        JobField::Title,
        JobField::Description,
        JobField::Location,
        JobField::Contact,
    ];

    fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Location => "location",
            Self::Contact => "contact",
        }
    }
}

impl std::fmt::Display for JobField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// Number of jobs posted in one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCount {
    pub location: String,
    pub count: i64,
}

fn validate_contact(contact: &str) -> StoreResult<()> {
    if contact.starts_with(CONTACT_SIGIL) {
        Ok(())
    } else {
        Err(StoreError::InvalidArgument(format!(
            "contact must start with '{CONTACT_SIGIL}': {contact}"
        )))
    }
}

fn row_to_job(row: &rusqlite::Row<'_>) -> rusqlite::Result<Job> {
    Ok(Job {
        id: row.get(0)?,
        employer_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        location: row.get(4)?,
        contact: row.get(5)?,
        created_at: row.get(6)?,
    })
}

const JOB_COLUMNS: &str = "id, employer_id, title, description, location, contact, created_at";

// ═══════════════════════════════════════════════════════════════════════
//  JobStore
// ═══════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct JobStore {
    db: Database,
}

impl JobStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Store a new job and return its id.
    #[instrument(skip(self, job), fields(employer_id = job.employer_id, location = %job.location))]
    pub async fn insert(&self, job: NewJob) -> StoreResult<i64> {
        validate_contact(&job.contact)?;
        let now = Utc::now().timestamp();
        let id = self
            .db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO jobs (employer_id, title, description, location, contact, created_at) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    rusqlite::params![
                        job.employer_id,
                        job.title,
                        job.description,
                        job.location,
                        job.contact,
                        now
                    ],
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        debug!(job_id = id, "job created");
        Ok(id)
    }

    /// Jobs in `location`, oldest first.
    #[instrument(skip(self))]
    pub async fn list_by_location(&self, location: &str) -> StoreResult<Vec<Job>> {
        let location = location.to_string();
        self.db
            .execute(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {JOB_COLUMNS} FROM jobs WHERE location = ?1 ORDER BY id ASC"
                ))?;
                let jobs = stmt
                    .query_map(rusqlite::params![location], row_to_job)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(jobs)
            })
            .await
    }

    /// Every job, newest first.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> StoreResult<Vec<Job>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {JOB_COLUMNS} FROM jobs ORDER BY created_at DESC, id DESC"
                ))?;
                let jobs = stmt
                    .query_map([], row_to_job)?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(jobs)
            })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> StoreResult<Option<Job>> {
        self.db
            .execute(move |conn| {
                match conn.query_row(
                    &format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?1"),
                    rusqlite::params![id],
                    row_to_job,
                ) {
                    Ok(job) => Ok(Some(job)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(StoreError::Sqlite(e)),
                }
            })
            .await
    }

    /// Delete a job, returning `true` if a row was removed.
    ///
    /// Deleting an id that does not exist is a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let deleted = self
            .db
            .execute(move |conn| {
                let n = conn.execute("DELETE FROM jobs WHERE id = ?1", rusqlite::params![id])?;
                Ok(n > 0)
            })
            .await?;
        debug!(job_id = id, deleted, "job delete");
        Ok(deleted)
    }

    /// Overwrite one field of a job.
    ///
    /// Returns [`StoreError::NotFound`] when the job no longer exists.
    #[instrument(skip(self, value))]
    pub async fn update_field(&self, id: i64, field: JobField, value: &str) -> StoreResult<()> {
        if field == JobField::Contact {
            validate_contact(value)?;
        }
        let value = value.to_string();
        let updated = self
            .db
            .execute(move |conn| {
                let sql = format!("UPDATE jobs SET {} = ?1 WHERE id = ?2", field.column());
                Ok(conn.execute(&sql, rusqlite::params![value, id])?)
            })
            .await?;

        if updated == 0 {
            return Err(StoreError::NotFound {
                entity: "job",
                id: id.to_string(),
            });
        }
        debug!(job_id = id, %field, "job field updated");
        Ok(())
    }

    /// Total number of jobs.
    #[instrument(skip(self))]
    pub async fn count(&self) -> StoreResult<i64> {
        self.db
            .execute(|conn| {
                let count: i64 = conn.query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
    }

    /// Job counts grouped by location, busiest location first.
    #[instrument(skip(self))]
    pub async fn count_by_location(&self) -> StoreResult<Vec<LocationCount>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT location, COUNT(*) AS n FROM jobs \
                     GROUP BY location ORDER BY n DESC, location ASC",
                )?;
                let counts = stmt
                    .query_map([], |row| {
                        Ok(LocationCount {
                            location: row.get(0)?,
                            count: row.get(1)?,
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(counts)
            })
            .await
    }
}

// ── tests ────────────────────────────────────────────────────────────
