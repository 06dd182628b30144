//! Per-chat dialog state.
//!
//! Scratch data lives inside the variant it belongs to, so a transition can
//! never leave a stale draft or result set behind.

use jobboard_store::JobField;

use crate::listing::Browse;
use crate::vocab::{City, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Idle,
    RoleChosen(Role),
    AwaitingJobTitle {
        location: City,
    },
    AwaitingJobDescription {
        location: City,
        title: String,
    },
    AwaitingContact {
        location: City,
        title: String,
        description: String,
    },
    Browsing(Browse),
    AdminPanel,
    EditingJob {
        job_id: i64,
    },
    AwaitingEditValue {
        job_id: i64,
        field: JobField,
    },
}

impl DialogState {
    /// States whose free text is captured as input rather than ignored.
    pub fn is_form_entry(&self) -> bool {
        matches!(
            self,
            Self::AwaitingJobTitle { .. }
                | Self::AwaitingJobDescription { .. }
                | Self::AwaitingContact { .. }
                | Self::AwaitingEditValue { .. }
        )
    }

    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::RoleChosen(_) => "role_chosen",
            Self::AwaitingJobTitle { .. } => "awaiting_job_title",
            Self::AwaitingJobDescription { .. } => "awaiting_job_description",
            Self::AwaitingContact { .. } => "awaiting_contact",
            Self::Browsing(_) => "browsing",
            Self::AdminPanel => "admin_panel",
            Self::EditingJob { .. } => "editing_job",
            Self::AwaitingEditValue { .. } => "awaiting_edit_value",
        }
    }
}
