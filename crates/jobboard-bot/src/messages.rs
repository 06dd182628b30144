//! User-facing texts.

use chrono::DateTime;
use jobboard_store::{Job, JobField};

use crate::admin::Statistics;

pub const WELCOME_CAPTION: &str =
    "🌟 Вітаємо у Job Search Bot! 🌟\n\nОберіть свою роль для продовження:";

pub const EMPLOYER_CITY_PROMPT: &str = "📍 Оберіть місто для публікації вакансії:";
pub const SEEKER_CITY_PROMPT: &str = "🔍 Оберіть місто для пошуку роботи:";

pub const TITLE_PROMPT: &str = "📋 Введіть заголовок вакансії:";
pub const DESCRIPTION_PROMPT: &str = "📝 Введіть повний опис вакансії:\n\n\
    • Обов'язки\n\
    • Вимоги\n\
    • Умови роботи\n\
    • Зарплата\n\
    • Графік роботи";
pub const CONTACT_PROMPT: &str = "📱 Введіть ваш Telegram username (наприклад, @username):";
pub const CONTACT_INVALID: &str = "❌ Username повинен починатися з '@'. Спробуйте ще раз:";

pub const JOB_PUBLISHED: &str = "✅ Вакансію успішно опубліковано!";
pub const JOB_ACTIVE: &str = "📝 Ваша вакансія активна! Чекаємо на відгуки від кандидатів.";

pub const NO_JOBS_IN_CITY: &str = "😔 На жаль, в обраному місті зараз немає активних вакансій.";
pub const END_OF_RESULTS: &str = "🔚 Більше вакансій немає.";
pub const CONTACT_MISSING: &str = "❌ Помилка: Неможливо знайти контакт роботодавця.";
pub const CONTACT_LINK_PROMPT: &str = "📱 Натисніть кнопку нижче, щоб написати роботодавцю:";

pub const ADMIN_PANEL: &str = "⚙️ Панель адміністратора\n\nОберіть опцію:";
pub const NO_ACTIVE_JOBS: &str = "📭 Наразі немає активних вакансій.";
pub const JOB_DELETED: &str = "✅ Вакансію успішно видалено!";
pub const JOB_NOT_FOUND: &str = "❌ Вакансію не знайдено!";
pub const EDIT_MENU: &str = "✏️ Оберіть, що хочете змінити:";
pub const EDIT_CITY_INVALID: &str = "❌ Оберіть місто зі списку:";
pub const JOB_UPDATED: &str = "✅ Вакансію оновлено!";

/// Prompt shown after an edit field is picked.
pub const fn edit_prompt(field: JobField) -> &'static str {
    match field {
        JobField::Title => "📋 Введіть новий заголовок вакансії:",
        JobField::Description => "📝 Введіть новий опис вакансії:",
        JobField::Location => "📍 Оберіть нове місто:",
        JobField::Contact => "👤 Введіть новий контакт (наприклад, @username):",
    }
}

/// Card shown to a job seeker; `position` is 1-based.
pub fn job_card(job: &Job, position: usize, total: usize) -> String {
    format!(
        "📋 Вакансія {position}/{total}:\n\n\
         🔹 Назва: {}\n\n\
         📝 Опис:\n{}\n\n\
         📍 Місто: {}\n\
         👤 Контакт: {}",
        job.title, job.description, job.location, job.contact
    )
}

/// Card shown to an administrator in the full listing.
pub fn admin_job_card(job: &Job) -> String {
    format!(
        "🆔 ID: {}\n\
         📍 Місто: {}\n\
         📋 Заголовок: {}\n\
         📝 Опис: {}\n\
         👤 Контакт: {}\n\
         📅 Створено: {}",
        job.id,
        job.location,
        job.title,
        job.description,
        job.contact,
        format_timestamp(job.created_at)
    )
}

pub fn statistics_report(stats: &Statistics) -> String {
    let mut report = format!(
        "📊 Статистика бота:\n\n\
         👥 Всього користувачів: {}\n\
         📝 Активних вакансій: {}\n\
         📈 Нових користувачів за 24г: {}\n\n\
         📍 Вакансії по містах:\n",
        stats.total_users, stats.total_jobs, stats.new_users_24h
    );
    for entry in &stats.by_location {
        report.push_str(&format!("{}: {} вакансій\n", entry.location, entry.count));
    }
    report
}

/// `YYYY-MM-DD HH:MM:SS` in UTC.
fn format_timestamp(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
