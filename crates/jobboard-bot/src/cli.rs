//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Telegram job board bot.
#[derive(Parser)]
#[command(name = "jobboard", version, about = "Telegram job board bot")]
pub struct Cli {
    /// Path to the TOML config file (defaults to config/default.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the bot (long-polls Telegram until interrupted).
    Run {
        /// SQLite database file.
        #[arg(long)]
        database: Option<PathBuf>,

        /// Telegram long-polling timeout in seconds.
        #[arg(long)]
        poll_timeout: Option<u64>,
    },

    /// Print the admin statistics report.
    Stats {
        /// SQLite database file.
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Create or upgrade the database schema and exit.
    Migrate {
        /// SQLite database file.
        #[arg(long)]
        database: Option<PathBuf>,
    },
}
