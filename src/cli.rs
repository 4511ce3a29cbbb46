//! CLI definition and parsing.
//!
//! Notes:
//! - CLI values override the config file's `LogLevel`/`LogFile`.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Organizes your directories so you don't have to.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Move or delete files in managed directories according to configured rules"
)]
pub struct Args {
    /// Full path to a dirculese configuration file (JSON, or XML with a .xml extension).
    #[arg(short = 'c', long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Suppress all messages to stdout and stderr (they are still written to the log file).
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write the log to this file instead of $HOME/dirculese.log.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location dirculese would use, then exit.
    #[arg(long)]
    pub print_config: bool,

    /// Print a sample configuration file, then exit.
    #[arg(long)]
    pub sample_config: bool,
}

impl Args {
    /// Precedence: --debug > --log-level value > None (use config value).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = Some(level);
        }
        if let Some(p) = &self.log_file {
            cfg.log_file = Some(p.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
