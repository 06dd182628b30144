//! Sequential pagination over a city's job listings.
//!
//! A [`Browse`] owns the result set fetched when the city was picked. Paging
//! through it never touches the store again.

use jobboard_store::Job;
use jobboard_telegram::Outbound;

use crate::keyboards;
use crate::messages;

/// Result set plus cursor for one chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Browse {
    jobs: Vec<Job>,
    /// Index of the next job to show.
    cursor: usize,
    /// Contact handle of the job shown last.
    current_contact: Option<String>,
}

impl Browse {
    /// Start paging through `jobs`, showing the first one.
    ///
    /// Returns `None` when there is nothing to show.
    pub fn start(chat_id: i64, jobs: Vec<Job>) -> Option<(Self, Outbound)> {
        if jobs.is_empty() {
            return None;
        }
        let mut browse = Self {
            jobs,
            cursor: 0,
            current_contact: None,
        };
        let card = browse.advance(chat_id);
        Some((browse, card))
    }

    /// Show the job at the cursor and move past it, or the end-of-results
    /// notice once every job has been shown.
    pub fn advance(&mut self, chat_id: i64) -> Outbound {
        let Some(job) = self.jobs.get(self.cursor) else {
            return Outbound::text_with(chat_id, messages::END_OF_RESULTS, keyboards::navigation());
        };
        let card = messages::job_card(job, self.cursor + 1, self.jobs.len());
        self.current_contact = Some(job.contact.clone());
        self.cursor += 1;
        Outbound::text_with(chat_id, card, keyboards::browse())
    }

    /// Deep link to the employer of the job shown last.
    pub fn contact_link(&self, chat_id: i64) -> Outbound {
        contact_link(self.current_contact.as_deref(), chat_id)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of jobs in the listing.
    pub fn total(&self) -> usize {
        self.jobs.len()
    }

    pub fn current_contact(&self) -> Option<&str> {
        self.current_contact.as_deref()
    }
}

/// Link button for `contact`, or the "contact missing" notice.
pub fn contact_link(contact: Option<&str>, chat_id: i64) -> Outbound {
    match contact {
        Some(handle) => Outbound::text_with(
            chat_id,
            messages::CONTACT_LINK_PROMPT,
            keyboards::contact_link(handle),
        ),
        None => Outbound::text_with(chat_id, messages::CONTACT_MISSING, keyboards::navigation()),
    }
}
