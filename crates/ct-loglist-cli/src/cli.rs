//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ct_loglist::{LogListConfig, DEFAULT_LOG_LIST_URL};

/// Print the known Certificate Transparency logs.
#[derive(Parser, Debug, Clone)]
#[command(name = "ctloglist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Local log list file, used instead of the download when it exists.
    #[arg(long, env = "CT_LOG_LIST", value_name = "PATH")]
    pub log_list: Option<PathBuf>,

    /// URL of the log list to download.
    #[arg(long, env = "CT_LOG_LIST_URL", default_value = DEFAULT_LOG_LIST_URL)]
    pub url: String,

    /// Always download the log list, ignoring any local file.
    #[arg(long)]
    pub download: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the log list configuration from the flags.
    #[must_use]
    pub fn config(&self) -> LogListConfig {
        let config = LogListConfig::default().with_url(self.url.clone());
        match &self.log_list {
            Some(path) => config.with_local_path(path.clone()),
            None => config,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every known log with its log ID.
    List,

    /// Show one log, including its public key and log ID in PEM form.
    Show {
        /// Log ID, as base64 or as 64 hex digits.
        id: String,
    },
}
