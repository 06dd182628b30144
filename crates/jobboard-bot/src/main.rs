//! `jobboard` binary: CLI dispatch.

mod cli;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use jobboard_bot::config::{self, BotConfig};
use jobboard_bot::{AdminGate, Bot, Dialog, Runner, SessionStore, Statistics};
use jobboard_store::{BotStateStore, JobStore, UserStore};
use jobboard_telegram::TelegramClient;

use crate::cli::{Cli, Commands};
use crate::helpers::{init_tracing, open_database};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut cfg = BotConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    cfg.apply_env(|key| std::env::var(key).ok())
        .context("invalid environment configuration")?;

    init_tracing(&cfg.log_level);

    match cli.command {
        Commands::Run {
            database,
            poll_timeout,
        } => {
            override_database(&mut cfg, database);
            if let Some(secs) = poll_timeout {
                cfg.poll_timeout = secs.max(1);
            }
            cmd_run(cfg).await
        }
        Commands::Stats { database } => {
            override_database(&mut cfg, database);
            cmd_stats(cfg).await
        }
        Commands::Migrate { database } => {
            override_database(&mut cfg, database);
            cmd_migrate(cfg).await
        }
    }
}

fn override_database(cfg: &mut BotConfig, database: Option<PathBuf>) {
    if let Some(path) = database {
        cfg.database_path = path;
    }
}

async fn cmd_run(cfg: BotConfig) -> Result<()> {
    let token = config::bot_token(|key| std::env::var(key).ok())?;
    let client = TelegramClient::new(token);

    let bot_name = client
        .get_me()
        .await
        .context("failed to verify bot token with getMe")?;
    tracing::info!(bot = %bot_name, "connected to Telegram");

    let db = open_database(&cfg.database_path).await?;

    let admins = AdminGate::new(cfg.admin_ids.iter().copied());
    if admins.is_empty() {
        tracing::warn!("no administrators configured; admin panel is unreachable");
    } else {
        tracing::info!(count = admins.len(), "administrators loaded");
    }

    let dialog = Dialog::new(db.clone(), admins, cfg.welcome_animation.clone());
    let sessions = SessionStore::new(cfg.session_ttl(), cfg.session_capacity);
    let bot = Bot::new(dialog, sessions, Arc::new(client.clone()));

    let runner = Runner::new(bot, client, BotStateStore::new(db), cfg.poll_timeout);
    runner
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .context("poll loop failed")?;

    tracing::info!("bot stopped");
    Ok(())
}

async fn cmd_stats(cfg: BotConfig) -> Result<()> {
    let db = open_database(&cfg.database_path).await?;
    let stats = Statistics::collect(&UserStore::new(db.clone()), &JobStore::new(db))
        .await
        .context("failed to collect statistics")?;
    print!("{}", stats.render());
    Ok(())
}

async fn cmd_migrate(cfg: BotConfig) -> Result<()> {
    open_database(&cfg.database_path).await?;
    tracing::info!(path = %cfg.database_path.display(), "database schema is up to date");
    Ok(())
}
