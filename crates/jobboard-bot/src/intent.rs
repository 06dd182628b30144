//! Decoding of incoming text and callback payloads.
//!
//! Text is decoded once, here, into an [`Intent`]; the state machine only
//! ever matches on the enum.

use jobboard_store::JobField;

use crate::vocab::{self, City, Role};

/// What an incoming text message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start,
    Home,
    Back,
    Role(Role),
    City(City),
    NextJob,
    ContactEmployer,
    AdminPanel,
    AdminStats,
    AdminAllJobs,
    EditField(JobField),
    /// Anything outside the vocabulary.
    Text(String),
}

impl Intent {
    pub fn decode(text: &str) -> Self {
        if is_start_command(text) {
            return Self::Start;
        }
        match text {
            vocab::HOME => return Self::Home,
            vocab::BACK => return Self::Back,
            vocab::NEXT_JOB => return Self::NextJob,
            vocab::CONTACT_EMPLOYER => return Self::ContactEmployer,
            vocab::ADMIN_PANEL => return Self::AdminPanel,
            vocab::ADMIN_STATS => return Self::AdminStats,
            vocab::ADMIN_ALL_JOBS => return Self::AdminAllJobs,
            _ => {}
        }
        if let Some(role) = Role::from_label(text) {
            return Self::Role(role);
        }
        if let Some(city) = City::from_label(text) {
            return Self::City(city);
        }
        if let Some(field) = vocab::field_from_label(text) {
            return Self::EditField(field);
        }
        Self::Text(text.to_owned())
    }

    /// Intents that override form entry.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Start | Self::Home | Self::Back)
    }
}

/// `/start`, optionally with a deep-link payload or a `@botname` suffix.
fn is_start_command(text: &str) -> bool {
    match text.strip_prefix(vocab::START_COMMAND) {
        Some(rest) => rest.is_empty() || rest.starts_with(' ') || rest.starts_with('@'),
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Callbacks
// ---------------------------------------------------------------------------

const DELETE_PREFIX: &str = "delete_job_";
const EDIT_PREFIX: &str = "edit_job_";

/// Decoded inline-button payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    DeleteJob(i64),
    EditJob(i64),
    Unknown,
}

impl CallbackAction {
    pub fn decode(data: &str) -> Self {
        let parse = |rest: &str| rest.parse::<i64>().ok();
        if let Some(id) = data.strip_prefix(DELETE_PREFIX).and_then(parse) {
            Self::DeleteJob(id)
        } else if let Some(id) = data.strip_prefix(EDIT_PREFIX).and_then(parse) {
            Self::EditJob(id)
        } else {
            Self::Unknown
        }
    }

    pub fn delete_payload(job_id: i64) -> String {
        format!("{DELETE_PREFIX}{job_id}")
    }

    pub fn edit_payload(job_id: i64) -> String {
        format!("{EDIT_PREFIX}{job_id}")
    }
}
