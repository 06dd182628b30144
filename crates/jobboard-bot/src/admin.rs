//! Moderation: the administrator allow-list, statistics and job listing.

use std::collections::HashSet;

use chrono::Duration;
use jobboard_store::{CONTACT_SIGIL, JobField, JobStore, LocationCount, StoreResult, UserStore};
use jobboard_telegram::Outbound;
use tracing::instrument;

use crate::keyboards;
use crate::messages;
use crate::vocab::City;

/// Static set of administrator user ids, fixed at startup.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    ids: HashSet<i64>,
}

impl AdminGate {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn allows(&self, user_id: i64) -> bool {
        self.ids.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_users: i64,
    pub total_jobs: i64,
    pub new_users_24h: i64,
    pub by_location: Vec<LocationCount>,
}

impl Statistics {
    #[instrument(skip_all)]
    pub async fn collect(users: &UserStore, jobs: &JobStore) -> StoreResult<Self> {
        Ok(Self {
            total_users: users.count().await?,
            total_jobs: jobs.count().await?,
            new_users_24h: users.count_joined_within(Duration::hours(24)).await?,
            by_location: jobs.count_by_location().await?,
        })
    }

    pub fn render(&self) -> String {
        messages::statistics_report(self)
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// One card per job, newest first, each with delete/edit buttons.
#[instrument(skip(jobs))]
pub async fn all_jobs(jobs: &JobStore, chat_id: i64) -> StoreResult<Vec<Outbound>> {
    let all = jobs.list_all().await?;
    if all.is_empty() {
        return Ok(vec![Outbound::text_with(
            chat_id,
            messages::NO_ACTIVE_JOBS,
            keyboards::navigation(),
        )]);
    }
    Ok(all
        .iter()
        .map(|job| {
            Outbound::text_with(chat_id, messages::admin_job_card(job), keyboards::moderation(job))
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Editing
// ---------------------------------------------------------------------------

/// Validate a replacement value for `field`.
///
/// On rejection returns the re-prompt to send instead.
pub fn validate_edit(field: JobField, text: &str, chat_id: i64) -> Result<String, Outbound> {
    match field {
        JobField::Location => City::from_label(text)
            .map(|city| city.label().to_owned())
            .ok_or_else(|| {
                Outbound::text_with(chat_id, messages::EDIT_CITY_INVALID, keyboards::edit_cities())
            }),
        JobField::Contact if !text.starts_with(CONTACT_SIGIL) => Err(Outbound::text_with(
            chat_id,
            messages::CONTACT_INVALID,
            keyboards::navigation(),
        )),
        JobField::Title | JobField::Description | JobField::Contact => Ok(text.to_owned()),
    }
}
