//! Bot configuration.
//!
//! Layers, lowest precedence first: built-in defaults, the `[bot]` table of
//! `config/default.toml`, environment variables, then CLI flags (applied by
//! the binary).

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{BotError, Result};
use crate::session;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const DEFAULT_WELCOME_ANIMATION: &str = "https://media.giphy.com/media/L1R1tvI9svkIWwpVYr/giphy.gif";

pub const ENV_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_ADMIN_IDS: &str = "JOBBOARD_ADMIN_IDS";
pub const ENV_DATABASE: &str = "JOBBOARD_DATABASE";

/// Settings loaded from the `[bot]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub admin_ids: Vec<i64>,
    pub database_path: PathBuf,
    /// Telegram long-polling timeout in seconds.
    pub poll_timeout: u64,
    pub session_ttl_secs: u64,
    pub session_capacity: u64,
    pub welcome_animation: String,
    pub log_level: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            admin_ids: Vec::new(),
            database_path: PathBuf::from("data/jobboard.db"),
            poll_timeout: 30,
            session_ttl_secs: session::DEFAULT_TTL.as_secs(),
            session_capacity: session::DEFAULT_CAPACITY,
            welcome_animation: DEFAULT_WELCOME_ANIMATION.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl BotConfig {
    /// Load from `path`, or from [`DEFAULT_CONFIG_PATH`] when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(BotError::Config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Parse a TOML document; keys missing from `[bot]` keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let defaults = Self::default();

        let table: toml::Table = content
            .parse()
            .map_err(|e| BotError::Config(format!("invalid TOML: {e}")))?;

        let bot = match table.get("bot") {
            Some(toml::Value::Table(b)) => b,
            Some(_) => return Err(BotError::Config("`bot` must be a table".into())),
            None => return Ok(defaults),
        };

        let admin_ids = match bot.get("admin_ids") {
            Some(toml::Value::Array(items)) => items
                .iter()
                .map(|v| {
                    v.as_integer()
                        .ok_or_else(|| BotError::Config("`admin_ids` must hold integers".into()))
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(BotError::Config("`admin_ids` must be an array".into())),
            None => defaults.admin_ids,
        };

        let positive = |key: &str, default: u64| -> u64 {
            bot.get(key)
                .and_then(|v| v.as_integer())
                .map(|v| v.max(1) as u64)
                .unwrap_or(default)
        };

        Ok(Self {
            admin_ids,
            database_path: bot
                .get("database_path")
                .and_then(|v| v.as_str())
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            poll_timeout: positive("poll_timeout", defaults.poll_timeout),
            session_ttl_secs: positive("session_ttl_secs", defaults.session_ttl_secs),
            session_capacity: positive("session_capacity", defaults.session_capacity),
            welcome_animation: bot
                .get("welcome_animation")
                .and_then(|v| v.as_str())
                .map(str::to_owned)
                .unwrap_or(defaults.welcome_animation),
            log_level: bot
                .get("log_level")
                .and_then(|v| v.as_str())
                .map(str::to_owned)
                .unwrap_or(defaults.log_level),
        })
    }

    /// Override from environment variables looked up through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = var(ENV_ADMIN_IDS) {
            self.admin_ids = parse_admin_ids(&raw)?;
        }
        if let Some(path) = var(ENV_DATABASE).filter(|p| !p.trim().is_empty()) {
            self.database_path = PathBuf::from(path);
        }
        Ok(())
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

/// Parse a comma separated list of ids; blanks are skipped.
pub fn parse_admin_ids(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| BotError::Config(format!("invalid admin id `{s}`")))
        })
        .collect()
}

/// The bot token from the environment.
pub fn bot_token(var: impl Fn(&str) -> Option<String>) -> Result<String> {
    var(ENV_TOKEN)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| BotError::Config(format!("{ENV_TOKEN} is not set")))
}
