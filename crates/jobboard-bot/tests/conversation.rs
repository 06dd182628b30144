//! End-to-end conversation tests.
//!
//! Each test drives a [`Bot`] over an in-memory database and a recording
//! transport, then inspects what was sent, the session state and the store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobboard_bot::keyboards;
use jobboard_bot::messages;
use jobboard_bot::vocab::{self, City, Role};
use jobboard_bot::{AdminGate, Bot, Dialog, DialogState, Outcome, SessionStore};
use jobboard_store::{Database, Job, JobField, JobStore, NewJob, UserStore};
use jobboard_telegram::{
    InboundEvent, InlineAction, Keyboard, Outbound, Sender, Transport, TransportError,
};

const ADMIN: i64 = 767168540;
const USER: i64 = 1001;
const ANIMATION: &str = "https://example.com/welcome.gif";

// ═══════════════════════════════════════════════════════════════════════
//  Recording transport
// ═══════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct Recorder {
    sent: Mutex<Vec<Outbound>>,
    fail: bool,
}

impl Recorder {
    fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    fn record(&self, action: Outbound) -> jobboard_telegram::Result<()> {
        if self.fail {
            return Err(TransportError::Api {
                method: "sendMessage",
                code: 429,
                description: "Too Many Requests".into(),
            });
        }
        self.sent.lock().unwrap().push(action);
        Ok(())
    }

    fn take(&self) -> Vec<Outbound> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }
}

#[async_trait]
impl Transport for Recorder {
    async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> jobboard_telegram::Result<()> {
        self.record(Outbound::Text {
            chat_id,
            text: text.to_owned(),
            keyboard: keyboard.cloned(),
        })
    }

    async fn send_animation(
        &self,
        chat_id: i64,
        animation: &str,
        caption: &str,
        keyboard: Option<&Keyboard>,
    ) -> jobboard_telegram::Result<()> {
        self.record(Outbound::Animation {
            chat_id,
            animation: animation.to_owned(),
            caption: caption.to_owned(),
            keyboard: keyboard.cloned(),
        })
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> jobboard_telegram::Result<()> {
        self.record(Outbound::AnswerCallback {
            callback_id: callback_id.to_owned(),
            text: text.map(str::to_owned),
        })
    }

    async fn delete_message(&self, chat_id: i64, message_id: i64) -> jobboard_telegram::Result<()> {
        self.record(Outbound::DeleteMessage {
            chat_id,
            message_id,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  Harness
// ═══════════════════════════════════════════════════════════════════════

struct Harness {
    bot: Bot,
    sent: Arc<Recorder>,
    db: Database,
}

impl Harness {
    async fn new() -> Self {
        Self::with_transport(Recorder::default()).await
    }

    async fn with_transport(recorder: Recorder) -> Self {
        let db = Database::open_in_memory().unwrap();
        db.run_migrations().await.unwrap();
        let sent = Arc::new(recorder);
        let dialog = Dialog::new(db.clone(), AdminGate::new([ADMIN]), ANIMATION);
        let bot = Bot::new(dialog, SessionStore::default(), sent.clone());
        Self { bot, sent, db }
    }

    fn jobs(&self) -> &JobStore {
        self.bot.dialog().jobs()
    }

    fn users(&self) -> &UserStore {
        self.bot.dialog().users()
    }

    async fn say(&self, chat_id: i64, text: &str) -> Outcome {
        let event = InboundEvent::Message {
            chat_id,
            sender: sender(chat_id),
            text: text.to_owned(),
        };
        self.bot.handle(&event).await.unwrap()
    }

    async fn press(&self, chat_id: i64, message_id: i64, data: &str) -> Outcome {
        let event = InboundEvent::Callback {
            callback_id: format!("cb-{message_id}"),
            chat_id,
            message_id,
            sender: sender(chat_id),
            data: data.to_owned(),
        };
        self.bot.handle(&event).await.unwrap()
    }

    async fn state(&self, chat_id: i64) -> DialogState {
        self.bot.sessions().get(chat_id).await
    }

    /// Visible texts sent since the last call.
    fn bodies(&self) -> Vec<String> {
        self.sent
            .take()
            .iter()
            .filter_map(|o| o.body().map(str::to_owned))
            .collect()
    }

    async fn seed_job(&self, location: City, title: &str, contact: &str) -> i64 {
        self.jobs()
            .insert(NewJob {
                employer_id: 9,
                title: title.to_owned(),
                description: format!("{title} description"),
                location: location.label().to_owned(),
                contact: contact.to_owned(),
            })
            .await
            .unwrap()
    }

    async fn drop_jobs_table(&self) {
        self.db
            .execute(|conn| {
                conn.execute_batch("DROP TABLE jobs;")?;
                Ok(())
            })
            .await
            .unwrap();
    }
}

fn sender(id: i64) -> Sender {
    Sender {
        id,
        username: Some(format!("user{id}")),
        first_name: Some("Taras".into()),
        last_name: None,
    }
}

async fn employer_at_contact_step(h: &Harness) {
    h.say(USER, "/start").await;
    h.say(USER, Role::Employer.label()).await;
    h.say(USER, City::Kyiv.label()).await;
    h.say(USER, "Бариста").await;
    h.say(USER, "Готувати каву").await;
    h.sent.take();
}

// ═══════════════════════════════════════════════════════════════════════
//  Start and navigation
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn start_resets_state_and_upserts_user_once() {
    let h = Harness::new().await;
    h.bot
        .sessions()
        .put(USER, DialogState::RoleChosen(Role::Seeker))
        .await;

    assert_eq!(h.say(USER, "/start").await, Outcome::Handled);
    assert_eq!(h.say(USER, "/start").await, Outcome::Handled);

    assert_eq!(h.state(USER).await, DialogState::Idle);
    assert_eq!(h.users().count().await.unwrap(), 1);

    let sent = h.sent.take();
    assert_eq!(sent.len(), 2);
    match &sent[0] {
        Outbound::Animation {
            animation,
            caption,
            keyboard: Some(kb),
            ..
        } => {
            assert_eq!(animation, ANIMATION);
            assert_eq!(caption, messages::WELCOME_CAPTION);
            assert_eq!(kb.labels(), vec![Role::Employer.label(), Role::Seeker.label()]);
        }
        other => panic!("expected welcome animation, got {other:?}"),
    }
}

#[tokio::test]
async fn admin_welcome_offers_admin_panel() {
    let h = Harness::new().await;
    h.say(ADMIN, "/start").await;
    let sent = h.sent.take();
    assert_eq!(sent[0].keyboard(), Some(&keyboards::roles(true)));
}

#[tokio::test]
async fn home_resets_without_touching_users() {
    let h = Harness::new().await;
    h.say(USER, Role::Seeker.label()).await;
    assert_eq!(h.bot.sessions().len().await, 1);

    h.say(USER, vocab::HOME).await;
    assert_eq!(h.state(USER).await, DialogState::Idle);
    assert_eq!(h.bot.sessions().len().await, 0);
    assert_eq!(h.users().count().await.unwrap(), 0);
}

#[tokio::test]
async fn back_walks_the_employer_form_in_reverse() {
    let h = Harness::new().await;
    employer_at_contact_step(&h).await;

    h.say(USER, vocab::BACK).await;
    assert_eq!(
        h.state(USER).await,
        DialogState::AwaitingJobDescription {
            location: City::Kyiv,
            title: "Бариста".into(),
        }
    );
    h.say(USER, vocab::BACK).await;
    assert_eq!(
        h.state(USER).await,
        DialogState::AwaitingJobTitle {
            location: City::Kyiv
        }
    );
    h.say(USER, vocab::BACK).await;
    assert_eq!(h.state(USER).await, DialogState::RoleChosen(Role::Employer));
    h.say(USER, vocab::BACK).await;
    assert_eq!(h.state(USER).await, DialogState::Idle);
    h.say(USER, vocab::BACK).await;
    assert_eq!(h.state(USER).await, DialogState::Idle);

    assert_eq!(
        h.bodies(),
        vec![
            messages::DESCRIPTION_PROMPT,
            messages::TITLE_PROMPT,
            messages::EMPLOYER_CITY_PROMPT,
            messages::WELCOME_CAPTION,
            messages::WELCOME_CAPTION,
        ]
    );
}

#[tokio::test]
async fn free_text_in_menu_state_is_ignored() {
    let h = Harness::new().await;
    h.say(USER, "/start").await;
    h.sent.take();

    assert_eq!(h.say(USER, "hello?").await, Outcome::Ignored);
    assert_eq!(h.say(USER, vocab::NEXT_JOB).await, Outcome::Ignored);
    assert!(h.sent.take().is_empty());
    assert_eq!(h.state(USER).await, DialogState::Idle);
}

#[tokio::test]
async fn city_without_role_is_ignored() {
    let h = Harness::new().await;
    assert_eq!(h.say(USER, City::Poltava.label()).await, Outcome::Ignored);
    assert!(h.sent.take().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
//  Job posting
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn completing_the_form_creates_exactly_one_job() {
    let h = Harness::new().await;
    employer_at_contact_step(&h).await;

    assert_eq!(h.say(USER, "@coffee_hr").await, Outcome::Handled);
    assert_eq!(h.state(USER).await, DialogState::Idle);

    let jobs = h.jobs().list_all().await.unwrap();
    assert_eq!(jobs.len(), 1);
    let job = &jobs[0];
    assert_eq!(job.employer_id, USER);
    assert_eq!(job.title, "Бариста");
    assert_eq!(job.description, "Готувати каву");
    assert_eq!(job.location, City::Kyiv.label());
    assert_eq!(job.contact, "@coffee_hr");

    assert_eq!(
        h.bodies(),
        vec![
            messages::JOB_PUBLISHED,
            messages::JOB_ACTIVE,
            messages::WELCOME_CAPTION
        ]
    );
}

#[tokio::test]
async fn contact_without_sigil_is_rejected_then_accepted() {
    let h = Harness::new().await;
    employer_at_contact_step(&h).await;

    assert_eq!(h.say(USER, "coffee_hr").await, Outcome::Handled);
    assert!(matches!(
        h.state(USER).await,
        DialogState::AwaitingContact { .. }
    ));
    assert_eq!(h.jobs().count().await.unwrap(), 0);
    assert_eq!(h.bodies(), vec![messages::CONTACT_INVALID]);

    h.say(USER, "@coffee_hr").await;
    assert_eq!(h.jobs().count().await.unwrap(), 1);
    assert_eq!(h.state(USER).await, DialogState::Idle);
}

#[tokio::test]
async fn vocabulary_labels_are_free_text_inside_the_form() {
    let h = Harness::new().await;
    h.say(USER, Role::Employer.label()).await;
    h.say(USER, City::Odesa.label()).await;

    h.say(USER, City::Lviv.label()).await;
    h.say(USER, vocab::NEXT_JOB).await;
    assert_eq!(
        h.state(USER).await,
        DialogState::AwaitingContact {
            location: City::Odesa,
            title: City::Lviv.label().into(),
            description: vocab::NEXT_JOB.into(),
        }
    );
}

#[tokio::test]
async fn home_abandons_the_draft() {
    let h = Harness::new().await;
    employer_at_contact_step(&h).await;
    h.say(USER, vocab::HOME).await;
    assert_eq!(h.state(USER).await, DialogState::Idle);
    assert_eq!(h.jobs().count().await.unwrap(), 0);
}

// ═══════════════════════════════════════════════════════════════════════
//  Browsing
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn browsing_an_empty_city_keeps_state() {
    let h = Harness::new().await;
    h.say(USER, Role::Seeker.label()).await;
    h.sent.take();

    assert_eq!(h.say(USER, City::Lviv.label()).await, Outcome::Handled);
    assert_eq!(h.state(USER).await, DialogState::RoleChosen(Role::Seeker));
    assert_eq!(h.bodies(), vec![messages::NO_JOBS_IN_CITY]);
}

#[tokio::test]
async fn browsing_shows_each_job_once_then_end_without_store() {
    let h = Harness::new().await;
    h.seed_job(City::Odesa, "A", "@a").await;
    h.seed_job(City::Kyiv, "elsewhere", "@x").await;
    h.seed_job(City::Odesa, "B", "@b").await;
    h.seed_job(City::Odesa, "C", "@c").await;

    h.say(USER, Role::Seeker.label()).await;
    h.sent.take();
    h.say(USER, City::Odesa.label()).await;
    h.say(USER, vocab::NEXT_JOB).await;
    h.say(USER, vocab::NEXT_JOB).await;

    let bodies = h.bodies();
    assert_eq!(bodies.len(), 3);
    for (i, title) in ["A", "B", "C"].iter().enumerate() {
        assert!(bodies[i].starts_with(&format!("📋 Вакансія {}/3:", i + 1)));
        assert!(bodies[i].contains(&format!("🔹 Назва: {title}\n")));
    }

    // The result set is held in the session; the store is not consulted again.
    h.drop_jobs_table().await;
    assert_eq!(h.say(USER, vocab::NEXT_JOB).await, Outcome::Handled);
    assert_eq!(h.bodies(), vec![messages::END_OF_RESULTS]);
    match h.state(USER).await {
        DialogState::Browsing(browse) => assert_eq!(browse.cursor(), browse.total()),
        other => panic!("expected browsing, got {other:?}"),
    }
}

#[tokio::test]
async fn contact_employer_links_to_current_job() {
    let h = Harness::new().await;
    h.seed_job(City::Kharkiv, "A", "@first_boss").await;
    h.seed_job(City::Kharkiv, "B", "@second_boss").await;

    h.say(USER, Role::Seeker.label()).await;
    h.say(USER, City::Kharkiv.label()).await;
    h.say(USER, vocab::NEXT_JOB).await;
    h.sent.take();

    h.say(USER, vocab::CONTACT_EMPLOYER).await;
    let sent = h.sent.take();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body(), Some(messages::CONTACT_LINK_PROMPT));
    match sent[0].keyboard() {
        Some(Keyboard::Inline(rows)) => assert_eq!(
            rows[0][0].action,
            InlineAction::Url("https://t.me/second_boss".into())
        ),
        other => panic!("expected inline keyboard, got {other:?}"),
    }
}

#[tokio::test]
async fn contact_employer_outside_browsing_reports_missing_contact() {
    let h = Harness::new().await;
    h.say(USER, vocab::CONTACT_EMPLOYER).await;
    assert_eq!(h.bodies(), vec![messages::CONTACT_MISSING]);
}

#[tokio::test]
async fn picking_another_city_restarts_browse_and_back_returns_to_cities() {
    let h = Harness::new().await;
    h.seed_job(City::Dnipro, "D", "@d").await;
    h.seed_job(City::Poltava, "P", "@p").await;

    h.say(USER, Role::Seeker.label()).await;
    h.say(USER, City::Dnipro.label()).await;
    h.say(USER, City::Poltava.label()).await;
    match h.state(USER).await {
        DialogState::Browsing(browse) => assert_eq!(browse.current_contact(), Some("@p")),
        other => panic!("expected browsing, got {other:?}"),
    }

    h.sent.take();
    h.say(USER, vocab::BACK).await;
    assert_eq!(h.state(USER).await, DialogState::RoleChosen(Role::Seeker));
    assert_eq!(h.bodies(), vec![messages::SEEKER_CITY_PROMPT]);
}

// ═══════════════════════════════════════════════════════════════════════
//  Administration
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn non_admin_is_silently_denied() {
    let h = Harness::new().await;
    let job_id = h.seed_job(City::Kyiv, "A", "@a").await;
    h.say(USER, Role::Seeker.label()).await;
    h.sent.take();

    assert_eq!(h.say(USER, vocab::ADMIN_PANEL).await, Outcome::Denied);
    assert_eq!(h.say(USER, vocab::ADMIN_STATS).await, Outcome::Denied);
    assert_eq!(h.say(USER, vocab::ADMIN_ALL_JOBS).await, Outcome::Denied);
    assert_eq!(
        h.press(USER, 10, &format!("delete_job_{job_id}")).await,
        Outcome::Denied
    );
    assert_eq!(
        h.press(USER, 10, &format!("edit_job_{job_id}")).await,
        Outcome::Denied
    );
    assert_eq!(
        h.say(USER, vocab::field_label(JobField::Title)).await,
        Outcome::Denied
    );

    assert!(h.sent.take().is_empty());
    assert_eq!(h.state(USER).await, DialogState::RoleChosen(Role::Seeker));
    assert!(h.jobs().get(job_id).await.unwrap().is_some());
}

#[tokio::test]
async fn admin_panel_and_statistics() {
    let h = Harness::new().await;
    h.say(ADMIN, "/start").await;
    h.say(USER, "/start").await;
    h.seed_job(City::Kyiv, "A", "@a").await;
    h.sent.take();

    h.say(ADMIN, vocab::ADMIN_PANEL).await;
    assert_eq!(h.state(ADMIN).await, DialogState::AdminPanel);
    h.say(ADMIN, vocab::ADMIN_STATS).await;
    assert_eq!(h.state(ADMIN).await, DialogState::AdminPanel);

    let bodies = h.bodies();
    assert_eq!(bodies[0], messages::ADMIN_PANEL);
    assert!(bodies[1].contains("👥 Всього користувачів: 2\n"));
    assert!(bodies[1].contains("📝 Активних вакансій: 1\n"));
    assert!(bodies[1].contains("📈 Нових користувачів за 24г: 2\n"));
    assert!(bodies[1].ends_with("🏙️ Київ: 1 вакансій\n"));

    h.say(ADMIN, vocab::BACK).await;
    assert_eq!(h.state(ADMIN).await, DialogState::Idle);
}

#[tokio::test]
async fn admin_lists_and_deletes_jobs() {
    let h = Harness::new().await;
    let first = h.seed_job(City::Lviv, "A", "@a").await;
    let second = h.seed_job(City::Lviv, "B", "@b").await;

    h.say(ADMIN, vocab::ADMIN_ALL_JOBS).await;
    let cards = h.sent.take();
    assert_eq!(cards.len(), 2);
    assert_eq!(
        cards[1].keyboard(),
        Some(&keyboards::moderation(&job_stub(first)))
    );

    assert_eq!(
        h.press(ADMIN, 77, &format!("delete_job_{first}")).await,
        Outcome::Handled
    );
    assert_eq!(
        h.sent.take(),
        vec![
            Outbound::AnswerCallback {
                callback_id: "cb-77".into(),
                text: Some(messages::JOB_DELETED.into()),
            },
            Outbound::DeleteMessage {
                chat_id: ADMIN,
                message_id: 77,
            },
        ]
    );

    let remaining = h.jobs().list_by_location(City::Lviv.label()).await.unwrap();
    assert_eq!(remaining.iter().map(|j| j.id).collect::<Vec<_>>(), vec![second]);

    // A second press on a stale card must not crash.
    assert_eq!(
        h.press(ADMIN, 77, &format!("delete_job_{first}")).await,
        Outcome::Handled
    );
    let sent = h.sent.take();
    assert_eq!(sent[0].body(), Some(messages::JOB_NOT_FOUND));
    assert!(matches!(sent[1], Outbound::DeleteMessage { .. }));
}

#[tokio::test]
async fn admin_with_no_jobs_sees_empty_notice() {
    let h = Harness::new().await;
    h.say(ADMIN, vocab::ADMIN_ALL_JOBS).await;
    assert_eq!(h.bodies(), vec![messages::NO_ACTIVE_JOBS]);
}

#[tokio::test]
async fn admin_edits_a_job_location() {
    let h = Harness::new().await;
    let job_id = h.seed_job(City::Kyiv, "A", "@a").await;

    h.press(ADMIN, 5, &format!("edit_job_{job_id}")).await;
    assert_eq!(h.state(ADMIN).await, DialogState::EditingJob { job_id });

    h.say(ADMIN, vocab::field_label(JobField::Location)).await;
    assert_eq!(
        h.state(ADMIN).await,
        DialogState::AwaitingEditValue {
            job_id,
            field: JobField::Location
        }
    );
    h.sent.take();

    h.say(ADMIN, "Житомир").await;
    assert_eq!(h.bodies(), vec![messages::EDIT_CITY_INVALID]);
    assert!(matches!(
        h.state(ADMIN).await,
        DialogState::AwaitingEditValue { .. }
    ));

    h.say(ADMIN, City::Dnipro.label()).await;
    assert_eq!(h.state(ADMIN).await, DialogState::Idle);
    assert_eq!(
        h.bodies(),
        vec![messages::JOB_UPDATED, messages::WELCOME_CAPTION]
    );
    let job = h.jobs().get(job_id).await.unwrap().unwrap();
    assert_eq!(job.location, City::Dnipro.label());
}

#[tokio::test]
async fn admin_edit_validates_contact_and_back_returns_to_menu() {
    let h = Harness::new().await;
    let job_id = h.seed_job(City::Kyiv, "A", "@a").await;

    h.press(ADMIN, 5, &format!("edit_job_{job_id}")).await;
    h.say(ADMIN, vocab::field_label(JobField::Contact)).await;
    h.sent.take();

    h.say(ADMIN, "new_hr").await;
    assert_eq!(h.bodies(), vec![messages::CONTACT_INVALID]);

    h.say(ADMIN, vocab::BACK).await;
    assert_eq!(h.state(ADMIN).await, DialogState::EditingJob { job_id });
    h.say(ADMIN, vocab::BACK).await;
    assert_eq!(h.state(ADMIN).await, DialogState::AdminPanel);

    assert_eq!(h.jobs().get(job_id).await.unwrap().unwrap().contact, "@a");
}

#[tokio::test]
async fn editing_a_job_deleted_meanwhile_reports_not_found() {
    let h = Harness::new().await;
    let job_id = h.seed_job(City::Kyiv, "A", "@a").await;

    h.press(ADMIN, 5, &format!("edit_job_{job_id}")).await;
    h.say(ADMIN, vocab::field_label(JobField::Title)).await;
    h.jobs().delete(job_id).await.unwrap();
    h.sent.take();

    assert_eq!(h.say(ADMIN, "New title").await, Outcome::Handled);
    assert_eq!(h.state(ADMIN).await, DialogState::Idle);
    assert_eq!(
        h.bodies(),
        vec![messages::JOB_NOT_FOUND, messages::WELCOME_CAPTION]
    );
}

#[tokio::test]
async fn edit_callback_for_missing_job_answers_not_found() {
    let h = Harness::new().await;
    h.say(ADMIN, vocab::ADMIN_PANEL).await;
    h.sent.take();

    h.press(ADMIN, 5, "edit_job_404").await;
    assert_eq!(h.bodies(), vec![messages::JOB_NOT_FOUND]);
    assert_eq!(h.state(ADMIN).await, DialogState::AdminPanel);
}

#[tokio::test]
async fn unknown_callback_is_ignored() {
    let h = Harness::new().await;
    assert_eq!(h.press(ADMIN, 1, "bogus").await, Outcome::Ignored);
    assert!(h.sent.take().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
//  Failures
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn store_failure_sends_nothing_and_keeps_session() {
    let h = Harness::new().await;
    employer_at_contact_step(&h).await;
    let before = h.state(USER).await;

    h.drop_jobs_table().await;
    let event = InboundEvent::Message {
        chat_id: USER,
        sender: sender(USER),
        text: "@coffee_hr".into(),
    };
    assert!(h.bot.handle(&event).await.is_err());

    assert!(h.sent.take().is_empty());
    assert_eq!(h.state(USER).await, before);
}

#[tokio::test]
async fn delivery_failure_does_not_roll_back_state() {
    let h = Harness::with_transport(Recorder::failing()).await;
    assert_eq!(h.say(USER, Role::Seeker.label()).await, Outcome::Handled);
    assert_eq!(h.state(USER).await, DialogState::RoleChosen(Role::Seeker));
}

#[tokio::test]
async fn sessions_are_isolated_per_chat() {
    let h = Harness::new().await;
    h.say(USER, Role::Employer.label()).await;
    h.say(ADMIN, Role::Seeker.label()).await;
    assert_eq!(h.state(USER).await, DialogState::RoleChosen(Role::Employer));
    assert_eq!(h.state(ADMIN).await, DialogState::RoleChosen(Role::Seeker));
    assert_eq!(h.state(42).await, DialogState::Idle);
}

fn job_stub(id: i64) -> Job {
    Job {
        id,
        employer_id: 0,
        title: String::new(),
        description: String::new(),
        location: String::new(),
        contact: String::new(),
        created_at: 0,
    }
}
