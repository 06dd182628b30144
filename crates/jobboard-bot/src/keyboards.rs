//! Reply and inline keyboards.

use jobboard_store::{Job, JobField};
use jobboard_telegram::{InlineButton, Keyboard};

use crate::intent::CallbackAction;
use crate::vocab::{self, City, Role};

/// Role selection; administrators get an extra panel button.
pub fn roles(is_admin: bool) -> Keyboard {
    let mut row: Vec<&str> = Role::ALL.iter().map(|r| r.label()).collect();
    if is_admin {
        row.push(vocab::ADMIN_PANEL);
    }
    Keyboard::reply([row])
}

/// One row per city, then back and home.
pub fn cities() -> Keyboard {
    let mut rows: Vec<Vec<&str>> = City::ALL.iter().map(|c| vec![c.label()]).collect();
    rows.push(vec![vocab::BACK]);
    rows.push(vec![vocab::HOME]);
    Keyboard::reply(rows)
}

/// City choice while editing a job's location.
pub fn edit_cities() -> Keyboard {
    let mut rows: Vec<Vec<&str>> = City::ALL.iter().map(|c| vec![c.label()]).collect();
    rows.push(vec![vocab::BACK]);
    Keyboard::reply(rows)
}

pub fn navigation() -> Keyboard {
    Keyboard::reply([vec![vocab::BACK, vocab::HOME]])
}

pub fn browse() -> Keyboard {
    Keyboard::reply([
        vec![vocab::NEXT_JOB, vocab::CONTACT_EMPLOYER],
        vec![vocab::BACK, vocab::HOME],
    ])
}

pub fn admin_menu() -> Keyboard {
    Keyboard::reply([
        vec![vocab::ADMIN_STATS, vocab::ADMIN_ALL_JOBS],
        vec![vocab::BACK],
    ])
}

pub fn statistics() -> Keyboard {
    Keyboard::reply([vec![vocab::BACK], vec![vocab::HOME]])
}

pub fn edit_menu() -> Keyboard {
    let label = vocab::field_label;
    Keyboard::reply([
        vec![label(JobField::Title), label(JobField::Description)],
        vec![label(JobField::Location), label(JobField::Contact)],
        vec![vocab::BACK],
    ])
}

/// Moderation buttons under an admin job card.
pub fn moderation(job: &Job) -> Keyboard {
    Keyboard::Inline(vec![vec![
        InlineButton::callback(vocab::DELETE_BUTTON, CallbackAction::delete_payload(job.id)),
        InlineButton::callback(vocab::EDIT_BUTTON, CallbackAction::edit_payload(job.id)),
    ]])
}

/// Deep link button opening a chat with `handle`.
pub fn contact_link(handle: &str) -> Keyboard {
    Keyboard::Inline(vec![vec![InlineButton::url(
        vocab::CONTACT_EMPLOYER,
        profile_url(handle),
    )]])
}

/// `https://t.me/<handle>` with every `@` removed.
pub fn profile_url(handle: &str) -> String {
    format!("https://t.me/{}", handle.replace('@', ""))
}
