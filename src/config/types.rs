//! Configuration types.
//! - Config mirrors the on-disk JSON document (PascalCase keys).
//! - LogLevel represents verbosity with simple parsing helpers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// One line per moved or deleted file (default)
    #[default]
    Normal,
    /// Adds per-rule progress
    Info,
    /// Everything, including skipped entries
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LogLevel> for String {
    fn from(l: LogLevel) -> Self {
        l.to_string()
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Config {
    /// Managed directories, processed in order.
    #[serde(default)]
    pub directories: Vec<DirectoryConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct DirectoryConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// One rule as written in the config. Only the criteria list matching `handler` is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default)]
    pub target: PathBuf,
    #[serde(default)]
    pub delete: bool,
    pub handler: String,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub prefix_delimiters: Vec<String>,
    #[serde(default)]
    pub suffix_delimiters: Vec<String>,
    // Reserved for size/date filtering; accepted and ignored.
    #[serde(default)]
    pub size_max: i64,
    #[serde(default)]
    pub size_min: i64,
    #[serde(default)]
    pub date_max: i64,
    #[serde(default)]
    pub date_min: i64,
}
