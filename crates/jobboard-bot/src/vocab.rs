//! The fixed button vocabulary.
//!
//! Every label here is matched by exact string equality against incoming
//! text, so the strings must stay byte-identical to what the keyboards send.

use jobboard_store::JobField;

pub const START_COMMAND: &str = "/start";

pub const HOME: &str = "🏠 Головне меню";
pub const BACK: &str = "🔙 Назад";

pub const NEXT_JOB: &str = "➡️ Наступна вакансія";
pub const CONTACT_EMPLOYER: &str = "💬 Написати роботодавцю";

pub const ADMIN_PANEL: &str = "⚙️ Адмін-панель";
pub const ADMIN_STATS: &str = "📊 Статистика";
pub const ADMIN_ALL_JOBS: &str = "📝 Всі вакансії";

pub const DELETE_BUTTON: &str = "🗑️ Видалити";
pub const EDIT_BUTTON: &str = "✏️ Редагувати";

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Which side of the board a user is acting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Employer,
    Seeker,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Employer, Role::Seeker];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Employer => "👔 Роботодавець",
            Self::Seeker => "👷 Шукаю роботу",
        }
    }

    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == text)
    }
}

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

/// The closed set of cities a job can be posted in.
///
/// The label doubles as the value stored in `jobs.location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Kyiv,
    Lviv,
    Odesa,
    Kharkiv,
    Dnipro,
    Khmelnytskyi,
    Poltava,
    KryvyiRih,
}

impl City {
    /// Keyboard order.
    pub const ALL: [City; 8] = [
        City::Kyiv,
        City::Lviv,
        City::Odesa,
        City::Kharkiv,
        City::Dnipro,
        City::Khmelnytskyi,
        City::Poltava,
        City::KryvyiRih,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Kyiv => "🏙️ Київ",
            Self::Lviv => "🌇 Львів",
            Self::Odesa => "🌅 Одеса",
            Self::Kharkiv => "🌆 Харків",
            Self::Dnipro => "🌃 Дніпро",
            Self::Khmelnytskyi => "🏘️ Хмельницький",
            Self::Poltava => "🏰 Полтава",
            Self::KryvyiRih => "🌉 Кривий Ріг",
        }
    }

    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == text)
    }
}

// ---------------------------------------------------------------------------
// Edit fields
// ---------------------------------------------------------------------------

/// Button label for editing `field`.
pub const fn field_label(field: JobField) -> &'static str {
    match field {
        JobField::Title => "📋 Змінити заголовок",
        JobField::Description => "📝 Змінити опис",
        JobField::Location => "📍 Змінити місто",
        JobField::Contact => "👤 Змінити контакт",
    }
}

pub fn field_from_label(text: &str) -> Option<JobField> {
    JobField::ALL.into_iter().find(|f| field_label(*f) == text)
}
