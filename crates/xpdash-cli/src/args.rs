use clap::{Parser, Subcommand};

use crate::types::OutputFormat;

#[derive(Parser)]
#[command(name = "xpdash")]
#[command(about = "Personal analytics dashboard for the learning platform", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding config.toml
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Platform base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Platform login (overrides the config file)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Platform password
    #[arg(long, env = "XPDASH_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every dashboard card at once
    Overview,

    /// Profile card for the logged-in user
    User,

    /// Audit points given vs received and the resulting ratio
    Audit,

    /// XP per project, largest first
    Xp,

    /// XP earned per calendar day
    Timeline,

    /// Skill amounts from the skill transaction namespace
    Skills,

    /// Latest graded progress; walk older records with --step
    Progress {
        /// Steps to advance from the newest record (clamped at the oldest)
        #[arg(long, default_value_t = 0)]
        step: usize,
    },

    /// Show or edit stored defaults
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the stored config and its location
    Show,

    /// Persist defaults for later runs
    Set {
        #[arg(long)]
        base_url: Option<String>,

        #[arg(long)]
        username: Option<String>,
    },
}
