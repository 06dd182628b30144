//! The conversation state machine.
//!
//! [`Dialog::step`] interprets one inbound event against the chat's current
//! [`DialogState`] and returns a [`Transition`]: the next state, the actions
//! to send and an [`Outcome`]. Store mutations happen inside the step; if
//! any of them fails the whole step fails and the caller must neither send
//! anything nor store the next state.

use jobboard_store::{
    CONTACT_SIGIL, Database, JobField, JobStore, NewJob, StoreError, UserProfile, UserStore,
};
use jobboard_telegram::{InboundEvent, Outbound, Sender};
use tracing::{debug, info, warn};

use crate::admin::{self, AdminGate, Statistics};
use crate::error::Result;
use crate::intent::{CallbackAction, Intent};
use crate::keyboards;
use crate::listing::{self, Browse};
use crate::messages;
use crate::state::DialogState;
use crate::vocab::{City, Role};

/// How an event was disposed of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    /// An admin action from someone outside the allow-list. Nothing is sent.
    Denied,
    /// Nothing applies to this event in the current state.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: DialogState,
    pub outbound: Vec<Outbound>,
    pub outcome: Outcome,
}

impl Transition {
    fn handled(next: DialogState, outbound: Vec<Outbound>) -> Self {
        Self {
            next,
            outbound,
            outcome: Outcome::Handled,
        }
    }

    fn unchanged(state: DialogState, outcome: Outcome) -> Self {
        Self {
            next: state,
            outbound: Vec::new(),
            outcome,
        }
    }

    fn ignored(state: DialogState) -> Self {
        Self::unchanged(state, Outcome::Ignored)
    }
}

// ---------------------------------------------------------------------------
// Dialog
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct Dialog {
    users: UserStore,
    jobs: JobStore,
    admins: AdminGate,
    welcome_animation: String,
}

impl Dialog {
    pub fn new(db: Database, admins: AdminGate, welcome_animation: impl Into<String>) -> Self {
        Self {
            users: UserStore::new(db.clone()),
            jobs: JobStore::new(db),
            admins,
            welcome_animation: welcome_animation.into(),
        }
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn jobs(&self) -> &JobStore {
        &self.jobs
    }

    /// Advance the conversation by one event.
    pub async fn step(&self, state: DialogState, event: &InboundEvent) -> Result<Transition> {
        match event {
            InboundEvent::Message {
                chat_id,
                sender,
                text,
            } => self.on_message(state, *chat_id, sender, text).await,
            InboundEvent::Callback {
                callback_id,
                chat_id,
                message_id,
                sender,
                data,
            } => {
                self.on_callback(state, *chat_id, *message_id, sender.id, callback_id, data)
                    .await
            }
        }
    }

    // -- messages -----------------------------------------------------------

    async fn on_message(
        &self,
        state: DialogState,
        chat_id: i64,
        sender: &Sender,
        text: &str,
    ) -> Result<Transition> {
        let intent = Intent::decode(text);

        if state.is_form_entry() && !intent.is_navigation() {
            return self.on_form_input(state, chat_id, sender.id, text).await;
        }

        let transition = match intent {
            Intent::Start => {
                self.users.upsert(&profile(sender)).await?;
                info!(chat_id, user_id = sender.id, "session started");
                Transition::handled(DialogState::Idle, vec![self.welcome(chat_id, sender.id)])
            }
            Intent::Home => {
                Transition::handled(DialogState::Idle, vec![self.welcome(chat_id, sender.id)])
            }
            Intent::Back => self.on_back(state, chat_id, sender.id),
            Intent::Role(role) => {
                Transition::handled(DialogState::RoleChosen(role), vec![city_prompt(role, chat_id)])
            }
            Intent::City(city) => self.on_city(state, chat_id, city).await?,
            Intent::NextJob => match state {
                DialogState::Browsing(mut browse) => {
                    let card = browse.advance(chat_id);
                    Transition::handled(DialogState::Browsing(browse), vec![card])
                }
                other => Transition::ignored(other),
            },
            Intent::ContactEmployer => {
                let link = match &state {
                    DialogState::Browsing(browse) => browse.contact_link(chat_id),
                    _ => listing::contact_link(None, chat_id),
                };
                Transition::handled(state, vec![link])
            }
            Intent::AdminPanel => {
                if !self.admins.allows(sender.id) {
                    return Ok(deny(state, chat_id, sender.id, "admin_panel"));
                }
                Transition::handled(
                    DialogState::AdminPanel,
                    vec![Outbound::text_with(
                        chat_id,
                        messages::ADMIN_PANEL,
                        keyboards::admin_menu(),
                    )],
                )
            }
            Intent::AdminStats => {
                if !self.admins.allows(sender.id) {
                    return Ok(deny(state, chat_id, sender.id, "statistics"));
                }
                let stats = Statistics::collect(&self.users, &self.jobs).await?;
                Transition::handled(
                    state,
                    vec![Outbound::text_with(chat_id, stats.render(), keyboards::statistics())],
                )
            }
            Intent::AdminAllJobs => {
                if !self.admins.allows(sender.id) {
                    return Ok(deny(state, chat_id, sender.id, "all_jobs"));
                }
                let cards = admin::all_jobs(&self.jobs, chat_id).await?;
                Transition::handled(state, cards)
            }
            Intent::EditField(field) => {
                if !self.admins.allows(sender.id) {
                    return Ok(deny(state, chat_id, sender.id, "edit_field"));
                }
                match state {
                    DialogState::EditingJob { job_id } => Transition::handled(
                        DialogState::AwaitingEditValue { job_id, field },
                        vec![edit_prompt(field, chat_id)],
                    ),
                    other => Transition::ignored(other),
                }
            }
            Intent::Text(_) => Transition::ignored(state),
        };

        Ok(transition)
    }

    async fn on_city(&self, state: DialogState, chat_id: i64, city: City) -> Result<Transition> {
        match state {
            DialogState::RoleChosen(Role::Employer) => Ok(Transition::handled(
                DialogState::AwaitingJobTitle { location: city },
                vec![Outbound::text_with(
                    chat_id,
                    messages::TITLE_PROMPT,
                    keyboards::navigation(),
                )],
            )),
            DialogState::RoleChosen(Role::Seeker) | DialogState::Browsing(_) => {
                let jobs = self.jobs.list_by_location(city.label()).await?;
                debug!(chat_id, city = city.label(), found = jobs.len(), "browse started");
                Ok(match Browse::start(chat_id, jobs) {
                    Some((browse, card)) => {
                        Transition::handled(DialogState::Browsing(browse), vec![card])
                    }
                    None => Transition::handled(
                        state,
                        vec![Outbound::text_with(
                            chat_id,
                            messages::NO_JOBS_IN_CITY,
                            keyboards::navigation(),
                        )],
                    ),
                })
            }
            other => Ok(Transition::ignored(other)),
        }
    }

    fn on_back(&self, state: DialogState, chat_id: i64, user_id: i64) -> Transition {
        let nav = |msg: &'static str| Outbound::text_with(chat_id, msg, keyboards::navigation());
        match state {
            DialogState::AwaitingContact {
                location, title, ..
            } => Transition::handled(
                DialogState::AwaitingJobDescription { location, title },
                vec![nav(messages::DESCRIPTION_PROMPT)],
            ),
            DialogState::AwaitingJobDescription { location, .. } => Transition::handled(
                DialogState::AwaitingJobTitle { location },
                vec![nav(messages::TITLE_PROMPT)],
            ),
            DialogState::AwaitingJobTitle { .. } => Transition::handled(
                DialogState::RoleChosen(Role::Employer),
                vec![city_prompt(Role::Employer, chat_id)],
            ),
            DialogState::Browsing(_) => Transition::handled(
                DialogState::RoleChosen(Role::Seeker),
                vec![city_prompt(Role::Seeker, chat_id)],
            ),
            DialogState::AwaitingEditValue { job_id, .. } => Transition::handled(
                DialogState::EditingJob { job_id },
                vec![Outbound::text_with(
                    chat_id,
                    messages::EDIT_MENU,
                    keyboards::edit_menu(),
                )],
            ),
            DialogState::EditingJob { .. } => Transition::handled(
                DialogState::AdminPanel,
                vec![Outbound::text_with(
                    chat_id,
                    messages::ADMIN_PANEL,
                    keyboards::admin_menu(),
                )],
            ),
            DialogState::AdminPanel | DialogState::RoleChosen(_) | DialogState::Idle => {
                Transition::handled(DialogState::Idle, vec![self.welcome(chat_id, user_id)])
            }
        }
    }

    /// Free text in a state that is waiting for input.
    async fn on_form_input(
        &self,
        state: DialogState,
        chat_id: i64,
        user_id: i64,
        text: &str,
    ) -> Result<Transition> {
        let nav = |msg: &'static str| Outbound::text_with(chat_id, msg, keyboards::navigation());
        let transition = match state {
            DialogState::AwaitingJobTitle { location } => Transition::handled(
                DialogState::AwaitingJobDescription {
                    location,
                    title: text.to_owned(),
                },
                vec![nav(messages::DESCRIPTION_PROMPT)],
            ),
            DialogState::AwaitingJobDescription { location, title } => Transition::handled(
                DialogState::AwaitingContact {
                    location,
                    title,
                    description: text.to_owned(),
                },
                vec![nav(messages::CONTACT_PROMPT)],
            ),
            DialogState::AwaitingContact {
                location,
                title,
                description,
            } => {
                if !text.starts_with(CONTACT_SIGIL) {
                    let state = DialogState::AwaitingContact {
                        location,
                        title,
                        description,
                    };
                    return Ok(Transition::handled(state, vec![nav(messages::CONTACT_INVALID)]));
                }
                let job_id = self
                    .jobs
                    .insert(NewJob {
                        employer_id: user_id,
                        title,
                        description,
                        location: location.label().to_owned(),
                        contact: text.to_owned(),
                    })
                    .await?;
                info!(chat_id, job_id, city = location.label(), "job published");
                Transition::handled(
                    DialogState::Idle,
                    vec![
                        Outbound::text(chat_id, messages::JOB_PUBLISHED),
                        nav(messages::JOB_ACTIVE),
                        self.welcome(chat_id, user_id),
                    ],
                )
            }
            DialogState::AwaitingEditValue { job_id, field } => {
                self.on_edit_value(job_id, field, chat_id, user_id, text)
                    .await?
            }
            other => Transition::ignored(other),
        };
        Ok(transition)
    }

    async fn on_edit_value(
        &self,
        job_id: i64,
        field: JobField,
        chat_id: i64,
        user_id: i64,
        text: &str,
    ) -> Result<Transition> {
        let value = match admin::validate_edit(field, text, chat_id) {
            Ok(value) => value,
            Err(reprompt) => {
                return Ok(Transition::handled(
                    DialogState::AwaitingEditValue { job_id, field },
                    vec![reprompt],
                ));
            }
        };

        let notice = match self.jobs.update_field(job_id, field, &value).await {
            Ok(()) => {
                info!(chat_id, job_id, %field, "job updated");
                messages::JOB_UPDATED
            }
            Err(StoreError::NotFound { .. }) => {
                warn!(chat_id, job_id, "edited job no longer exists");
                messages::JOB_NOT_FOUND
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Transition::handled(
            DialogState::Idle,
            vec![
                Outbound::text(chat_id, notice),
                self.welcome(chat_id, user_id),
            ],
        ))
    }

    // -- callbacks ----------------------------------------------------------

    async fn on_callback(
        &self,
        state: DialogState,
        chat_id: i64,
        message_id: i64,
        user_id: i64,
        callback_id: &str,
        data: &str,
    ) -> Result<Transition> {
        let action = CallbackAction::decode(data);
        if action == CallbackAction::Unknown {
            debug!(chat_id, data, "unknown callback payload");
            return Ok(Transition::ignored(state));
        }
        if !self.admins.allows(user_id) {
            return Ok(deny(state, chat_id, user_id, "moderation_callback"));
        }

        let answer = |text: Option<&str>| Outbound::AnswerCallback {
            callback_id: callback_id.to_owned(),
            text: text.map(str::to_owned),
        };

        let transition = match action {
            CallbackAction::DeleteJob(job_id) => {
                let removed = self.jobs.delete(job_id).await?;
                let text = if removed {
                    info!(chat_id, job_id, "job deleted");
                    messages::JOB_DELETED
                } else {
                    messages::JOB_NOT_FOUND
                };
                Transition::handled(
                    state,
                    vec![
                        answer(Some(text)),
                        Outbound::DeleteMessage {
                            chat_id,
                            message_id,
                        },
                    ],
                )
            }
            CallbackAction::EditJob(job_id) => match self.jobs.get(job_id).await? {
                Some(job) => Transition::handled(
                    DialogState::EditingJob { job_id: job.id },
                    vec![
                        answer(None),
                        Outbound::text_with(chat_id, messages::EDIT_MENU, keyboards::edit_menu()),
                    ],
                ),
                None => Transition::handled(state, vec![answer(Some(messages::JOB_NOT_FOUND))]),
            },
            CallbackAction::Unknown => Transition::ignored(state),
        };
        Ok(transition)
    }

    // -- helpers ------------------------------------------------------------

    fn welcome(&self, chat_id: i64, user_id: i64) -> Outbound {
        Outbound::Animation {
            chat_id,
            animation: self.welcome_animation.clone(),
            caption: messages::WELCOME_CAPTION.to_owned(),
            keyboard: Some(keyboards::roles(self.admins.allows(user_id))),
        }
    }
}

fn profile(sender: &Sender) -> UserProfile {
    UserProfile {
        id: sender.id,
        username: sender.username.clone(),
        first_name: sender.first_name.clone(),
        last_name: sender.last_name.clone(),
    }
}

fn city_prompt(role: Role, chat_id: i64) -> Outbound {
    let text = match role {
        Role::Employer => messages::EMPLOYER_CITY_PROMPT,
        Role::Seeker => messages::SEEKER_CITY_PROMPT,
    };
    Outbound::text_with(chat_id, text, keyboards::cities())
}

fn edit_prompt(field: JobField, chat_id: i64) -> Outbound {
    let keyboard = match field {
        JobField::Location => keyboards::edit_cities(),
        _ => keyboards::navigation(),
    };
    Outbound::text_with(chat_id, messages::edit_prompt(field), keyboard)
}

fn deny(state: DialogState, chat_id: i64, user_id: i64, action: &'static str) -> Transition {
    warn!(chat_id, user_id, action, "admin action denied");
    Transition::unchanged(state, Outcome::Denied)
}
